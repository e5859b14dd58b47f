/// Error types for the custom email sender
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Could not find code")]
    MissingCode,

    #[error("Cannot decrypt code")]
    MissingKeyConfig,

    #[error("Sendgrid API key not found")]
    MissingApiKey,

    #[error("From email not found")]
    MissingSender,

    #[error("Unable to create link")]
    MissingLinkBase,

    /// The matched trigger has no template id/subject configured
    #[error("Could not create message")]
    MissingTemplateConfig(String),

    #[error("Recipient email not found")]
    MissingRecipient,

    #[error("Invalid code: {0}")]
    InvalidCode(String),

    #[error("Invalid link: {0}")]
    InvalidLink(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Decryption error: {0}")]
    Decryption(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl MailerError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingKeyConfig
            | Self::MissingApiKey
            | Self::MissingSender
            | Self::MissingLinkBase
            | Self::MissingTemplateConfig(_)
            | Self::InvalidLink(_) => "configuration",
            Self::MissingCode
            | Self::MissingRecipient
            | Self::InvalidCode(_)
            | Self::InvalidEvent(_) => "input",
            Self::Decryption(_) | Self::Delivery(_) => "external",
        }
    }
}

impl From<serde_json::Error> for MailerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidEvent(err.to_string())
    }
}

impl From<reqwest::Error> for MailerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Delivery(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(MailerError::MissingCode.to_string(), "Could not find code");
        assert_eq!(
            MailerError::MissingKeyConfig.to_string(),
            "Cannot decrypt code"
        );
        assert_eq!(
            MailerError::MissingApiKey.to_string(),
            "Sendgrid API key not found"
        );
        assert_eq!(MailerError::MissingSender.to_string(), "From email not found");
        assert_eq!(
            MailerError::MissingLinkBase.to_string(),
            "Unable to create link"
        );
        assert_eq!(
            MailerError::MissingTemplateConfig("CustomEmailSender_SignUp".to_string())
                .to_string(),
            "Could not create message"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(MailerError::MissingApiKey.kind(), "configuration");
        assert_eq!(MailerError::MissingCode.kind(), "input");
        assert_eq!(
            MailerError::Decryption("kms unavailable".to_string()).kind(),
            "external"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let mailer_err: MailerError = err.into();
        assert!(matches!(mailer_err, MailerError::InvalidEvent(_)));
    }
}
