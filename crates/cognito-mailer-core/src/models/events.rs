/// Cognito custom email sender trigger event
use crate::constants::{EMAIL_ATTRIBUTE, TRIGGER_FORGOT_PASSWORD, TRIGGER_SIGN_UP};
use crate::error::MailerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Event delivered by the user pool's custom email sender trigger
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEmailSenderEvent {
    #[serde(default)]
    pub version: Option<String>,
    pub trigger_source: TriggerSource,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub user_pool_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub caller_context: Option<CallerContext>,
    pub request: CustomEmailSenderRequest,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerContext {
    #[serde(default)]
    pub aws_sdk_version: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEmailSenderRequest {
    #[serde(rename = "type", default)]
    pub request_type: Option<String>,
    /// Base64 ciphertext produced by the AWS Encryption SDK
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub user_attributes: HashMap<String, String>,
    #[serde(default)]
    pub client_metadata: Option<HashMap<String, String>>,
}

impl CustomEmailSenderEvent {
    /// Encrypted access code, if the event carries a non-empty one
    pub fn code(&self) -> Option<&str> {
        self.request.code.as_deref().filter(|c| !c.is_empty())
    }

    pub fn recipient_email(&self) -> Result<&str, MailerError> {
        self.request
            .user_attributes
            .get(EMAIL_ATTRIBUTE)
            .map(String::as_str)
            .filter(|e| !e.trim().is_empty())
            .ok_or(MailerError::MissingRecipient)
    }
}

/// Flow that invoked the trigger
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerSource {
    SignUp,
    ForgotPassword,
    /// Any other trigger (resend code, admin create user, attribute updates, ...)
    Unhandled(String),
}

impl TriggerSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::SignUp => TRIGGER_SIGN_UP,
            Self::ForgotPassword => TRIGGER_FORGOT_PASSWORD,
            Self::Unhandled(raw) => raw,
        }
    }
}

impl From<String> for TriggerSource {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            TRIGGER_SIGN_UP => Self::SignUp,
            TRIGGER_FORGOT_PASSWORD => Self::ForgotPassword,
            _ => Self::Unhandled(raw),
        }
    }
}

impl From<TriggerSource> for String {
    fn from(source: TriggerSource) -> Self {
        source.as_str().to_string()
    }
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
