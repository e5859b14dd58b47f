/// Lambda event handlers
pub mod custom_email_sender;

pub use custom_email_sender::process_event;

use crate::context::WorkerContext;
use cognito_mailer_core::error::MailerError;
use cognito_mailer_core::models::{CustomEmailSenderEvent, SenderConfig};
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Invocation result; never carries the link or access code
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub sent: bool,
    pub template: Option<&'static str>,
}

/// Main Lambda handler - reads configuration and runs the sender flow
pub async fn handler(ctx: Arc<WorkerContext>, event: LambdaEvent<Value>) -> Result<Value, Error> {
    info!(
        request_id = %event.context.request_id,
        "Received custom email sender event"
    );

    // Configuration is read on every invocation
    let config = SenderConfig::from_env();

    Ok(handle_payload(&ctx, event.payload, &config).await?)
}

/// Parses the trigger payload and sends the email using `config`
pub async fn handle_payload(
    ctx: &WorkerContext,
    payload: Value,
    config: &SenderConfig,
) -> Result<Value, MailerError> {
    let trigger_event: CustomEmailSenderEvent = serde_json::from_value(payload).map_err(|e| {
        error!("Failed to parse custom email sender event: {}", e);
        MailerError::from(e)
    })?;

    let sent = process_event(
        &trigger_event,
        config,
        ctx.decryptor.as_ref(),
        ctx.mailer.as_ref(),
    )
    .await
    .inspect_err(|e| {
        error!(
            target: "error_handling",
            error_type = e.kind(),
            error = %e,
            trigger_source = %trigger_event.trigger_source,
            "Custom email sender invocation failed"
        );
    })?;

    let response = HandlerResponse {
        sent: sent.is_some(),
        template: sent.map(|message| message.template.name()),
    };

    Ok(serde_json::to_value(response)?)
}
