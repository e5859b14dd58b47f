/// Builds the outbound message for a trigger - pure construction, no I/O
use super::EmailTemplate;
use crate::constants::{LINK_ACCESS_CODE_PARAM, LINK_EMAIL_PARAM};
use crate::error::MailerError;
use crate::models::{OutboundMessage, SenderConfig, TriggerSource};
use url::Url;

/// Builds the message for `source`, or `None` when the trigger sends no email
///
/// Checks run in a fixed order: link base, template for the matched trigger,
/// then sender address.
pub fn build_message(
    source: &TriggerSource,
    code: &str,
    recipient: &str,
    config: &SenderConfig,
) -> Result<Option<OutboundMessage>, MailerError> {
    let base_url = config.require_link_base()?;

    let Some(template) = EmailTemplate::for_trigger(source) else {
        return Ok(None);
    };

    let resolved = config
        .template_for(template)
        .resolve()
        .ok_or_else(|| MailerError::MissingTemplateConfig(source.to_string()))?;

    let from = config.require_sender()?;
    let link = build_link(base_url, template.link_path(), recipient, code)?;

    Ok(Some(OutboundMessage {
        template,
        to: recipient.to_string(),
        from: from.to_string(),
        subject: resolved.subject.to_string(),
        template_id: resolved.template_id.to_string(),
        link,
    }))
}

/// Joins `path` onto `base_url` and appends the `email` and `accessCode` query parameters
pub fn build_link(
    base_url: &str,
    path: &str,
    email: &str,
    code: &str,
) -> Result<String, MailerError> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    let mut url = Url::parse(&raw).map_err(|e| MailerError::InvalidLink(e.to_string()))?;

    url.query_pairs_mut()
        .clear()
        .append_pair(LINK_EMAIL_PARAM, email)
        .append_pair(LINK_ACCESS_CODE_PARAM, code);

    Ok(url.into())
}
