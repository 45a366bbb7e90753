use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::env;
use std::time::Duration;

pub const DEFAULT_SECRET_ID: &str = "expertiseDashboard/credentials/dbCredentials";
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub secret_id: String,
    pub region: Option<String>,
    pub webhook_timeout_secs: u64,
}

impl LambdaConfig {
    /// Settings for the shared publications function. `WEBHOOK_TIMEOUT_SECS` is not read.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Settings for the redeploy function, including `WEBHOOK_TIMEOUT_SECS`.
    pub fn webhook_from_env() -> Result<Self> {
        Self::webhook_from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            secret_id: lookup("DB_SECRET_ID").unwrap_or_else(|| DEFAULT_SECRET_ID.to_string()),
            region: lookup("AWS_REGION").filter(|r| !r.trim().is_empty()),
            webhook_timeout_secs: DEFAULT_WEBHOOK_TIMEOUT_SECS,
        })
    }

    pub fn webhook_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::from_lookup(&lookup)?;

        if let Some(raw) = lookup("WEBHOOK_TIMEOUT_SECS") {
            config.webhook_timeout_secs =
                raw.trim()
                    .parse()
                    .map_err(|_| DashboardError::InvalidConfigValueError {
                        field: "WEBHOOK_TIMEOUT_SECS".to_string(),
                        value: raw.clone(),
                        reason: "must be a whole number of seconds".to_string(),
                    })?;
        }

        Ok(config)
    }

    pub fn validate_secret_settings(&self) -> Result<()> {
        validate_non_empty_string("DB_SECRET_ID", &self.secret_id)?;

        if let Some(region) = &self.region {
            validate_aws_region("AWS_REGION", region)?;
        }

        Ok(())
    }

    pub fn validate_webhook_settings(&self) -> Result<()> {
        // Lambda caps a single invocation at 15 minutes.
        validate_range("WEBHOOK_TIMEOUT_SECS", self.webhook_timeout_secs, 1, 900)
    }

    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_secs(self.webhook_timeout_secs)
    }
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            secret_id: DEFAULT_SECRET_ID.to_string(),
            region: None,
            webhook_timeout_secs: DEFAULT_WEBHOOK_TIMEOUT_SECS,
        }
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.validate_secret_settings()?;
        self.validate_webhook_settings()?;

        tracing::debug!("Lambda configuration validation passed");
        Ok(())
    }
}

fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}
