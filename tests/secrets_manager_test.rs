#![cfg(feature = "lambda")]

use aws_sdk_secretsmanager::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_secretsmanager::Client;
use expertise_lambdas::config::lambda::DEFAULT_SECRET_ID;
use expertise_lambdas::core::CredentialsProvider;
use expertise_lambdas::{DashboardError, SecretsManagerCredentials};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> Client {
    let config = aws_sdk_secretsmanager::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("ca-central-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "test-secret", None, None, "test"))
        .endpoint_url(server.base_url())
        .build();
    Client::from_conf(config)
}

#[tokio::test]
async fn test_reads_credentials_from_secret_string() {
    let server = MockServer::start();
    let secret = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("x-amz-target", "secretsmanager.GetSecretValue")
            .body_contains(DEFAULT_SECRET_ID);
        then.status(200)
            .header("content-type", "application/x-amz-json-1.1")
            .json_body(json!({
                "ARN": "arn:aws:secretsmanager:ca-central-1:123456789012:secret:dbCredentials",
                "Name": DEFAULT_SECRET_ID,
                "SecretString": "{\"username\":\"app\",\"password\":\"pw\",\"host\":\"db.internal\",\"dbname\":\"expertise\",\"port\":5432,\"engine\":\"postgres\"}"
            }));
    });

    let provider = SecretsManagerCredentials::new(client_for(&server), DEFAULT_SECRET_ID);
    let creds = provider.credentials().await.unwrap();

    secret.assert();
    assert_eq!(creds.username, "app");
    assert_eq!(creds.host, "db.internal");
    assert_eq!(creds.db, "expertise");
    assert_eq!(creds.port(), 5432);
}

#[tokio::test]
async fn test_missing_secret_is_credentials_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(400)
            .header("content-type", "application/x-amz-json-1.1")
            .json_body(json!({
                "__type": "ResourceNotFoundException",
                "message": "Secrets Manager can't find the specified secret."
            }));
    });

    let provider = SecretsManagerCredentials::new(client_for(&server), "does/not/exist");
    let err = provider.credentials().await.unwrap_err();

    assert!(matches!(err, DashboardError::CredentialsUnavailable { .. }));
    assert!(err.to_string().contains("does/not/exist"));
}

#[tokio::test]
async fn test_binary_only_secret_is_credentials_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/x-amz-json-1.1")
            .json_body(json!({
                "ARN": "arn:aws:secretsmanager:ca-central-1:123456789012:secret:bin",
                "Name": "bin",
                "SecretBinary": "AAEC"
            }));
    });

    let provider = SecretsManagerCredentials::new(client_for(&server), "bin");
    let err = provider.credentials().await.unwrap_err();

    assert!(matches!(err, DashboardError::CredentialsUnavailable { .. }));
}
