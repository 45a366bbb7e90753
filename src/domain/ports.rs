use crate::domain::model::{DbCredentials, PublicationSummary};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::future::Future;

/// Supplies database connection parameters.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    async fn credentials(&self) -> Result<DbCredentials>;
}

/// An open, per-invocation handle on the publications store.
pub trait PublicationStore: Send + Sized {
    /// Publications whose author set contains both `id1` and `id2`, in storage order.
    fn shared_publications(
        &mut self,
        id1: &str,
        id2: &str,
    ) -> impl Future<Output = Result<Vec<PublicationSummary>>> + Send;

    fn close(self) -> impl Future<Output = Result<()>> + Send;
}

/// Opens a [`PublicationStore`] from a set of credentials.
pub trait StoreConnector: Send + Sync {
    type Store: PublicationStore;

    fn connect(
        &self,
        credentials: &DbCredentials,
    ) -> impl Future<Output = Result<Self::Store>> + Send;
}

#[async_trait]
impl<T: CredentialsProvider + ?Sized> CredentialsProvider for Box<T> {
    async fn credentials(&self) -> Result<DbCredentials> {
        (**self).credentials().await
    }
}
