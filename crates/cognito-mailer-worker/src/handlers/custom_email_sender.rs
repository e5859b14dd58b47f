/// Custom email sender flow - decrypt, build, dispatch
use cognito_mailer_core::email::build_message;
use cognito_mailer_core::error::MailerError;
use cognito_mailer_core::models::{CustomEmailSenderEvent, OutboundMessage, SenderConfig};
use cognito_mailer_core::services::{Decryptor, MailSender, decrypt_code};
use cognito_mailer_core::utils::redact_email;
use tracing::info;

/// Runs one invocation and returns the message that was sent
///
/// Returns `Ok(None)` for trigger sources that send no email. The API key is
/// checked before decryption so a misconfigured function never calls KMS.
#[tracing::instrument(
    name = "custom_email_sender.process_event",
    skip_all,
    fields(trigger_source = %event.trigger_source)
)]
pub async fn process_event(
    event: &CustomEmailSenderEvent,
    config: &SenderConfig,
    decryptor: &dyn Decryptor,
    mailer: &dyn MailSender,
) -> Result<Option<OutboundMessage>, MailerError> {
    // 1. Mail API key
    let api_key = config.require_api_key()?;

    // 2. Access code
    let code = decrypt_code(event.code(), config, decryptor).await?;

    // 3. Recipient
    let recipient = event.recipient_email()?;

    // 4. Message
    let Some(message) = build_message(&event.trigger_source, &code, recipient, config)? else {
        info!(
            trigger_source = %event.trigger_source,
            "No email configured for trigger source, skipping"
        );
        return Ok(None);
    };

    // 5. Dispatch
    let receipt = mailer.send(api_key, &message).await?;

    info!(
        template = message.template.name(),
        recipient = %redact_email(&message.to),
        status = receipt.status_code,
        message_id = receipt.message_id.as_deref().unwrap_or("unknown"),
        "Sent custom email"
    );

    Ok(Some(message))
}
