/// SendGrid v3 mail delivery service
use crate::constants::{
    DEFAULT_SENDGRID_API_BASE, ENV_SENDGRID_API_BASE, LINK_TEMPLATE_VARIABLE,
    SENDGRID_MESSAGE_ID_HEADER, SENDGRID_SEND_PATH,
};
use crate::error::MailerError;
use crate::models::{DeliveryReceipt, OutboundMessage};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;

#[async_trait]
pub trait MailSender: Send + Sync {
    /// Submits one message, authenticating with `api_key`
    async fn send(
        &self,
        api_key: &str,
        message: &OutboundMessage,
    ) -> Result<DeliveryReceipt, MailerError>;
}

/// Request body for `POST /v3/mail/send` with a dynamic template
#[derive(Debug, Serialize)]
pub struct SendGridMailRequest<'a> {
    pub from: SendGridAddress<'a>,
    pub subject: &'a str,
    pub template_id: &'a str,
    pub personalizations: Vec<SendGridPersonalization<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SendGridAddress<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SendGridPersonalization<'a> {
    pub to: Vec<SendGridAddress<'a>>,
    pub dynamic_template_data: HashMap<&'static str, &'a str>,
}

impl<'a> From<&'a OutboundMessage> for SendGridMailRequest<'a> {
    fn from(message: &'a OutboundMessage) -> Self {
        Self {
            from: SendGridAddress {
                email: &message.from,
            },
            subject: &message.subject,
            template_id: &message.template_id,
            personalizations: vec![SendGridPersonalization {
                to: vec![SendGridAddress { email: &message.to }],
                dynamic_template_data: HashMap::from([(
                    LINK_TEMPLATE_VARIABLE,
                    message.link.as_str(),
                )]),
            }],
        }
    }
}

pub struct SendGridMailSender {
    client: reqwest::Client,
    api_base: String,
}

impl SendGridMailSender {
    pub fn new(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Uses `SENDGRID_API_BASE` when set, otherwise the public SendGrid endpoint
    pub fn from_env(client: reqwest::Client) -> Self {
        let api_base = std::env::var(ENV_SENDGRID_API_BASE)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SENDGRID_API_BASE.to_string());
        Self::new(client, api_base)
    }

    fn send_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            SENDGRID_SEND_PATH
        )
    }
}

#[async_trait]
impl MailSender for SendGridMailSender {
    async fn send(
        &self,
        api_key: &str,
        message: &OutboundMessage,
    ) -> Result<DeliveryReceipt, MailerError> {
        let response = self
            .client
            .post(self.send_url())
            .bearer_auth(api_key)
            .json(&SendGridMailRequest::from(message))
            .send()
            .await?;

        let status = response.status();
        let message_id = response
            .headers()
            .get(SENDGRID_MESSAGE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(|e| {
            MailerError::Delivery(format!(
                "Failed to read SendGrid response (status {}): {}",
                status.as_u16(),
                e
            ))
        })?;

        if status.is_client_error() || status.is_server_error() {
            return Err(MailerError::Delivery(format!(
                "SendGrid request failed (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        tracing::debug!(
            status = status.as_u16(),
            message_id = message_id.as_deref().unwrap_or("unknown"),
            "SendGrid accepted message"
        );

        Ok(DeliveryReceipt {
            status_code: status.as_u16(),
            body,
            message_id,
        })
    }
}
