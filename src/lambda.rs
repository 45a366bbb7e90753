use expertise_lambdas::utils::logger;
use expertise_lambdas::{
    LambdaConfig, PgConnector, PublicationSummary, SecretsManagerCredentials,
    SharedPublicationsRequest, SharedPublicationsResolver,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

type Resolver = SharedPublicationsResolver<SecretsManagerCredentials, PgConnector>;

async fn function_handler(
    resolver: &Resolver,
    event: LambdaEvent<SharedPublicationsRequest>,
) -> Result<Vec<PublicationSummary>, Error> {
    tracing::info!(request_id = %event.context.request_id, "Starting shared publications lookup");

    let publications = resolver.handle(&event.payload).await.map_err(|e| {
        tracing::error!(category = ?e.category(), "Lookup failed: {}", e);
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    tracing::info!(count = publications.len(), "Shared publications lookup completed");
    Ok(publications)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger(env!("CARGO_CRATE_NAME"));

    let lambda_config = LambdaConfig::from_env()?;
    lambda_config.validate_secret_settings()?;

    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = &lambda_config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    let aws_config = loader.load().await;

    // The SDK client lives for the whole container; credentials and the
    // database connection are fetched per invocation.
    let credentials = SecretsManagerCredentials::new(
        aws_sdk_secretsmanager::Client::new(&aws_config),
        lambda_config.secret_id.clone(),
    );
    let resolver = SharedPublicationsResolver::new(credentials, PgConnector::default());
    let resolver = &resolver;

    run(service_fn(move |event| async move {
        function_handler(resolver, event).await
    }))
    .await
}
