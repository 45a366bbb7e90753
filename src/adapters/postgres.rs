//! PostgreSQL access to the `publication_data` table.

use crate::core::{DbCredentials, PublicationStore, PublicationSummary, StoreConnector};
use crate::utils::error::{DashboardError, Result};
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use sqlx::{Connection, FromRow};

/// Author ids are bound as `$1`/`$2` and compared against the `author_ids` array.
pub const SHARED_PUBLICATIONS_QUERY: &str = r#"
    SELECT
        title,
        journal,
        year_published::int4 AS year_published,
        to_jsonb(authors) AS authors,
        link
    FROM publication_data
    WHERE $1 = ANY(author_ids) AND $2 = ANY(author_ids)
"#;

#[derive(Debug, FromRow)]
struct PublicationRow {
    title: String,
    journal: Option<String>,
    year_published: Option<i32>,
    authors: Option<serde_json::Value>,
    link: Option<String>,
}

impl From<PublicationRow> for PublicationSummary {
    fn from(row: PublicationRow) -> Self {
        Self {
            title: row.title,
            journal: row.journal,
            year_published: row.year_published,
            authors: row.authors.unwrap_or(serde_json::Value::Null),
            link: row.link,
        }
    }
}

/// Opens one connection per call.
#[derive(Debug, Clone)]
pub struct PgConnector {
    ssl_mode: PgSslMode,
}

impl PgConnector {
    pub fn new(ssl_mode: PgSslMode) -> Self {
        Self { ssl_mode }
    }

    fn connect_options(&self, credentials: &DbCredentials) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&credentials.host)
            .port(credentials.port())
            .username(&credentials.username)
            .password(&credentials.password)
            .database(&credentials.db)
            .ssl_mode(self.ssl_mode)
    }
}

impl Default for PgConnector {
    fn default() -> Self {
        Self::new(PgSslMode::Prefer)
    }
}

impl StoreConnector for PgConnector {
    type Store = PgPublicationStore;

    async fn connect(&self, credentials: &DbCredentials) -> Result<PgPublicationStore> {
        let options = self.connect_options(credentials);
        let conn = PgConnection::connect_with(&options)
            .await
            .map_err(DashboardError::ConnectionError)?;

        Ok(PgPublicationStore::new(conn))
    }
}

pub struct PgPublicationStore {
    conn: PgConnection,
}

impl PgPublicationStore {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }
}

impl PublicationStore for PgPublicationStore {
    async fn shared_publications(
        &mut self,
        id1: &str,
        id2: &str,
    ) -> Result<Vec<PublicationSummary>> {
        let rows = sqlx::query_as::<_, PublicationRow>(SHARED_PUBLICATIONS_QUERY)
            .bind(id1)
            .bind(id2)
            .fetch_all(&mut self.conn)
            .await
            .map_err(DashboardError::QueryError)?;

        tracing::debug!(rows = rows.len(), "Fetched shared publication rows");

        Ok(rows.into_iter().map(PublicationSummary::from).collect())
    }

    async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(DashboardError::ConnectionError)
    }
}
