use crate::core::{
    CredentialsProvider, PublicationStore, PublicationSummary, SharedPublicationsRequest,
    StoreConnector,
};
use crate::utils::error::Result;

/// Looks up the publications two authors have in common.
///
/// Each call fetches credentials, opens its own connection and closes it
/// again before returning, whether or not the query succeeded.
pub struct SharedPublicationsResolver<P: CredentialsProvider, C: StoreConnector> {
    credentials: P,
    connector: C,
}

impl<P: CredentialsProvider, C: StoreConnector> SharedPublicationsResolver<P, C> {
    pub fn new(credentials: P, connector: C) -> Self {
        Self {
            credentials,
            connector,
        }
    }

    pub async fn resolve(&self, id1: &str, id2: &str) -> Result<Vec<PublicationSummary>> {
        tracing::debug!("Fetching database credentials");
        let credentials = self.credentials.credentials().await?;

        tracing::debug!(host = %credentials.host, db = %credentials.db, "Opening database connection");
        let mut store = self.connector.connect(&credentials).await?;

        let outcome = store.shared_publications(id1, id2).await;

        if let Err(e) = store.close().await {
            tracing::warn!("Failed to close database connection cleanly: {}", e);
        }

        match &outcome {
            Ok(publications) => tracing::info!(
                count = publications.len(),
                "Resolved shared publications"
            ),
            Err(e) => tracing::error!("Shared publications query failed: {}", e),
        }

        outcome
    }

    pub async fn handle(
        &self,
        request: &SharedPublicationsRequest,
    ) -> Result<Vec<PublicationSummary>> {
        self.resolve(&request.id1, &request.id2).await
    }
}
