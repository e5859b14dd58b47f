/// Worker context - collaborators shared across invocations
use cognito_mailer_core::error::MailerError;
use cognito_mailer_core::services::{Decryptor, EsdkDecryptor, MailSender, SendGridMailSender};
use std::sync::Arc;

/// Holds service clients only; configuration and secrets are read per invocation
#[derive(Clone)]
pub struct WorkerContext {
    pub decryptor: Arc<dyn Decryptor>,
    pub mailer: Arc<dyn MailSender>,
}

impl WorkerContext {
    /// Create the context with the AWS Encryption SDK and SendGrid bindings
    pub fn new() -> Result<Arc<Self>, MailerError> {
        let decryptor = EsdkDecryptor::new()?;
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| MailerError::Delivery(format!("Failed to build HTTP client: {}", e)))?;
        let mailer = SendGridMailSender::from_env(http_client);

        Ok(Arc::new(Self {
            decryptor: Arc::new(decryptor),
            mailer: Arc::new(mailer),
        }))
    }

    pub fn with_services(decryptor: Arc<dyn Decryptor>, mailer: Arc<dyn MailSender>) -> Self {
        Self { decryptor, mailer }
    }
}
