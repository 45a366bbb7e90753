pub mod lambda;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "expertise-lambdas")]
#[command(about = "Run the expertise dashboard functions locally")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the publications two authors share
    SharedPublications {
        #[arg(long)]
        id1: String,

        #[arg(long)]
        id2: String,

        #[arg(long, default_value = "db_credentials.toml", help = "TOML file with database credentials")]
        credentials: PathBuf,
    },

    /// POST to a deployment webhook
    TriggerWebhook {
        #[arg(long)]
        url: String,

        #[arg(long)]
        id: String,

        #[arg(long, default_value = "30")]
        timeout_secs: u64,
    },
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::SharedPublications { .. } => Ok(()),
            Command::TriggerWebhook {
                url, timeout_secs, ..
            } => {
                validate_url("url", url)?;
                validate_range("timeout_secs", *timeout_secs, 1, 900)
            }
        }
    }
}
