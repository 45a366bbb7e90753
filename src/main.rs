use clap::Parser;
use expertise_lambdas::utils::error::ErrorCategory;
use expertise_lambdas::utils::{logger, validation::Validate};
use expertise_lambdas::{
    CliConfig, Command, DashboardError, FileCredentials, PgConnector, SharedPublicationsResolver,
    Webhook, WebhookEvent, WebhookTrigger,
};
use std::time::Duration;

async fn execute(command: Command) -> Result<serde_json::Value, DashboardError> {
    match command {
        Command::SharedPublications {
            id1,
            id2,
            credentials,
        } => {
            let resolver = SharedPublicationsResolver::new(
                FileCredentials::new(credentials),
                PgConnector::default(),
            );
            let publications = resolver.resolve(&id1, &id2).await?;
            Ok(serde_json::to_value(publications)?)
        }
        Command::TriggerWebhook {
            url,
            id,
            timeout_secs,
        } => {
            let trigger = WebhookTrigger::new(Duration::from_secs(timeout_secs))?;
            let event = WebhookEvent {
                webhook: Webhook { url, id },
            };
            let response = trigger.trigger(&event).await?;
            Ok(serde_json::to_value(response)?)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(env!("CARGO_CRATE_NAME"), config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match execute(config.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.category() {
                ErrorCategory::Configuration | ErrorCategory::Data => 1,
                ErrorCategory::Network | ErrorCategory::Database if e.is_retryable() => 2,
                ErrorCategory::Credentials | ErrorCategory::Database | ErrorCategory::Network => 3,
                ErrorCategory::System => 4,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
