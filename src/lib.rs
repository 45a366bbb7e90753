pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FileCredentials, PgConnector, PgPublicationStore};
#[cfg(feature = "lambda")]
pub use adapters::SecretsManagerCredentials;
pub use config::lambda::LambdaConfig;

pub use core::{resolver::SharedPublicationsResolver, webhook::WebhookTrigger};
pub use domain::model::{
    DbCredentials, PublicationSummary, SharedPublicationsRequest, Webhook, WebhookEvent,
    WebhookResponse,
};
pub use utils::error::{DashboardError, Result};
