use expertise_lambdas::utils::logger;
use expertise_lambdas::{LambdaConfig, WebhookEvent, WebhookResponse, WebhookTrigger};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(
    trigger: &WebhookTrigger,
    event: LambdaEvent<WebhookEvent>,
) -> Result<WebhookResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Starting redeploy");

    let response = trigger.trigger(&event.payload).await.map_err(|e| {
        tracing::error!(category = ?e.category(), "Redeploy failed: {}", e);
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger(env!("CARGO_CRATE_NAME"));

    let lambda_config = LambdaConfig::webhook_from_env()?;
    lambda_config.validate_webhook_settings()?;

    let trigger = WebhookTrigger::new(lambda_config.webhook_timeout())?;
    let trigger = &trigger;

    run(service_fn(move |event| async move {
        function_handler(trigger, event).await
    }))
    .await
}
