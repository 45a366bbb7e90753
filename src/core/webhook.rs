use crate::core::{WebhookEvent, WebhookResponse};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_WEBHOOK_TIMEOUT: Duration = Duration::from_secs(30);

/// Fires an Amplify incoming webhook, which starts a new build of the site.
#[derive(Debug, Clone)]
pub struct WebhookTrigger {
    client: Client,
}

impl WebhookTrigger {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// POSTs an empty JSON object to the webhook and reports the status it answered with.
    ///
    /// Any HTTP status counts as a response; only transport failures are errors.
    pub async fn trigger(&self, event: &WebhookEvent) -> Result<WebhookResponse> {
        let webhook = &event.webhook;
        validate_url("WebhookUrl", &webhook.url)?;
        validate_non_empty_string("WebhookId", &webhook.id)?;

        tracing::info!(webhook_id = %webhook.id, "Triggering deployment webhook");

        let response = self
            .client
            .post(&webhook.url)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(webhook_id = %webhook.id, status = status.as_u16(), "Webhook accepted");
        } else {
            tracing::warn!(webhook_id = %webhook.id, status = status.as_u16(), "Webhook answered with a non-success status");
        }

        Ok(WebhookResponse {
            id: webhook.id.clone(),
            response: status.as_u16(),
        })
    }
}

impl Default for WebhookTrigger {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}
