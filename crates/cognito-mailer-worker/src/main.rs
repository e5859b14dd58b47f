use cognito_mailer_worker::{WorkerContext, handler};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!("Starting custom email sender Lambda function");

    let ctx = WorkerContext::new()?;

    run(service_fn(|event: LambdaEvent<Value>| {
        let ctx = ctx.clone();
        async move { handler(ctx, event).await }
    }))
    .await
}
