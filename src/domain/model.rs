use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const DEFAULT_DB_PORT: u16 = 5432;

/// Invocation payload for the shared publications lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedPublicationsRequest {
    pub id1: String,
    pub id2: String,
}

/// One co-authored publication, projected to its display fields.
///
/// `authors` is kept exactly as storage hands it back (a JSON string for a
/// text column, a JSON array for an array column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationSummary {
    pub title: String,
    pub journal: Option<String>,
    #[serde(rename = "yearPublished")]
    pub year_published: Option<i32>,
    pub authors: serde_json::Value,
    pub link: Option<String>,
}

/// Connection parameters as stored in the database secret.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct DbCredentials {
    pub username: String,
    pub password: String,
    pub host: String,
    #[serde(rename = "dbname", alias = "db")]
    pub db: String,
    #[serde(default, deserialize_with = "deserialize_port")]
    pub port: Option<u16>,
}

impl DbCredentials {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_DB_PORT)
    }
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("db", &self.db)
            .field("port", &self.port)
            .finish()
    }
}

// RDS-managed secrets store the port as a number, hand-written ones often as a string.
fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Number(u16),
        Text(String),
    }

    match Option::<RawPort>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPort::Number(port)) => Ok(Some(port)),
        Some(RawPort::Text(text)) => text
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(rename = "WebhookUrl")]
    pub url: String,
    #[serde(rename = "WebhookId")]
    pub id: String,
}

/// Deployment event produced by the Amplify `createWebhook` step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "Webhook")]
    pub webhook: Webhook,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub id: String,
    /// HTTP status returned by the webhook endpoint.
    pub response: u16,
}
