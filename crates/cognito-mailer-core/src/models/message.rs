/// Outbound message and delivery receipt
use crate::email::EmailTemplate;
use serde::{Deserialize, Serialize};

/// Email to hand to the mail API, built fresh for each invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub template: EmailTemplate,
    pub to: String,
    pub from: String,
    pub subject: String,
    pub template_id: String,
    /// Link carrying the recipient email and decrypted access code
    pub link: String,
}

/// Status returned by the mail API for an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status_code: u16,
    pub body: String,
    pub message_id: Option<String>,
}
