use crate::core::{CredentialsProvider, DbCredentials};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client as SecretsClient;

/// Reads database credentials from AWS Secrets Manager on every call.
#[derive(Debug, Clone)]
pub struct SecretsManagerCredentials {
    client: SecretsClient,
    secret_id: String,
}

impl SecretsManagerCredentials {
    pub fn new(client: SecretsClient, secret_id: impl Into<String>) -> Self {
        Self {
            client,
            secret_id: secret_id.into(),
        }
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }
}

#[async_trait]
impl CredentialsProvider for SecretsManagerCredentials {
    async fn credentials(&self) -> Result<DbCredentials> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(&self.secret_id)
            .send()
            .await
            .map_err(|e| {
                DashboardError::credentials(format!(
                    "failed to read secret '{}': {}",
                    self.secret_id,
                    DisplayErrorContext(&e)
                ))
            })?;

        let secret = output.secret_string().ok_or_else(|| {
            DashboardError::credentials(format!(
                "secret '{}' has no SecretString",
                self.secret_id
            ))
        })?;

        parse_secret_string(&self.secret_id, secret)
    }
}

pub(crate) fn parse_secret_string(secret_id: &str, secret: &str) -> Result<DbCredentials> {
    // Report position only; serde's message can quote the offending value.
    serde_json::from_str(secret).map_err(|e| {
        DashboardError::credentials(format!(
            "secret '{}' is not valid credentials JSON ({:?} error at line {}, column {})",
            secret_id,
            e.classify(),
            e.line(),
            e.column()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_secret_string() {
        let creds = parse_secret_string(
            "expertiseDashboard/credentials/dbCredentials",
            r#"{"username":"app","password":"pw","host":"h","dbname":"d"}"#,
        )
        .unwrap();
        assert_eq!(creds.username, "app");
    }

    #[test]
    fn test_parse_secret_string_hides_values() {
        let err = parse_secret_string(
            "id",
            r#"{"username":"app","password":12345678,"host":"h","dbname":"d"}"#,
        )
        .unwrap_err();

        assert!(matches!(err, DashboardError::CredentialsUnavailable { .. }));
        assert!(!err.to_string().contains("12345678"));
    }
}
