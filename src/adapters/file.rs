use crate::core::{CredentialsProvider, DbCredentials};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Credentials from a local TOML file with the same keys as the database secret:
///
/// ```toml
/// username = "app"
/// password = "..."
/// host = "localhost"
/// dbname = "expertise"
/// port = 5432
/// ```
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialsProvider for FileCredentials {
    async fn credentials(&self) -> Result<DbCredentials> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DashboardError::credentials(format!(
                "cannot read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        // `message()` leaves out the source excerpt, which may contain the password line.
        toml::from_str(&content).map_err(|e| {
            DashboardError::credentials(format!(
                "cannot parse {}: {}",
                self.path.display(),
                e.message()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_toml_credentials() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.toml");
        std::fs::write(
            &path,
            "username = \"app\"\npassword = \"pw\"\nhost = \"localhost\"\ndbname = \"expertise\"\nport = 5433\n",
        )
        .unwrap();

        let creds = FileCredentials::new(&path).credentials().await.unwrap();
        assert_eq!(creds.host, "localhost");
        assert_eq!(creds.db, "expertise");
        assert_eq!(creds.port(), 5433);
    }

    #[tokio::test]
    async fn test_missing_file_is_credentials_error() {
        let dir = TempDir::new().unwrap();
        let err = FileCredentials::new(dir.path().join("absent.toml"))
            .credentials()
            .await
            .unwrap_err();

        assert!(matches!(err, DashboardError::CredentialsUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_incomplete_file_is_credentials_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.toml");
        std::fs::write(&path, "username = \"app\"\npassword = \"s3cr3t-value\"\n").unwrap();

        let err = FileCredentials::new(&path).credentials().await.unwrap_err();
        assert!(matches!(err, DashboardError::CredentialsUnavailable { .. }));
        assert!(!err.to_string().contains("s3cr3t-value"));
    }
}
