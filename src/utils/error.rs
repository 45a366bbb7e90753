use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Database credentials unavailable: {message}")]
    CredentialsUnavailable { message: String },

    #[error("Database connection failed: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Publication query failed: {0}")]
    QueryError(#[source] sqlx::Error),

    #[error("Webhook request failed: {0}")]
    WebhookError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Credentials,
    Database,
    Network,
    Configuration,
    Data,
    System,
}

impl DashboardError {
    pub fn credentials(message: impl Into<String>) -> Self {
        Self::CredentialsUnavailable {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CredentialsUnavailable { .. } => ErrorCategory::Credentials,
            Self::ConnectionError(_) | Self::QueryError(_) => ErrorCategory::Database,
            Self::WebhookError(_) => ErrorCategory::Network,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// Transient failures where a later invocation may succeed unchanged.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionError(_) => true,
            Self::WebhookError(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::CredentialsUnavailable { .. } => {
                "Could not obtain database credentials".to_string()
            }
            Self::ConnectionError(_) => "Could not connect to the publications database".to_string(),
            Self::QueryError(_) => "The shared publications query failed".to_string(),
            Self::WebhookError(_) => "Could not reach the deployment webhook".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
            Self::SerializationError(_) => "Malformed JSON data".to_string(),
            Self::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Credentials => {
                "Check the secret id and that the secret contains username, password, host and dbname"
            }
            ErrorCategory::Database => {
                "Check that the database is reachable and the publication_data table exists"
            }
            ErrorCategory::Network => "Check the webhook URL and network connectivity",
            ErrorCategory::Configuration => "Review the configuration values and environment variables",
            ErrorCategory::Data => "Check the shape of the input event",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
