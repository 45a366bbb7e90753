pub mod resolver;
pub mod webhook;

pub use crate::domain::model::{
    DbCredentials, PublicationSummary, SharedPublicationsRequest, WebhookEvent, WebhookResponse,
};
pub use crate::domain::ports::{CredentialsProvider, PublicationStore, StoreConnector};
pub use crate::utils::error::Result;
