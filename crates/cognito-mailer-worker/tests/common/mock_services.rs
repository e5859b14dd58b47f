/// Mock decryption and mail services that record their calls
use async_trait::async_trait;
use cognito_mailer_core::error::MailerError;
use cognito_mailer_core::models::{DeliveryReceipt, KeyringConfig, OutboundMessage};
use cognito_mailer_core::services::{Decryptor, MailSender};
use std::sync::{Arc, Mutex};

/// Returns a fixed plaintext, or an error when `fail_with` is set
#[derive(Clone)]
pub struct MockDecryptor {
    pub plaintext: String,
    pub fail_with: Option<String>,
    pub calls: Arc<Mutex<Vec<(KeyringConfig, Vec<u8>)>>>,
}

impl MockDecryptor {
    pub fn new(plaintext: &str) -> Self {
        Self {
            plaintext: plaintext.to_string(),
            fail_with: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::new("")
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Decryptor for MockDecryptor {
    async fn decrypt(
        &self,
        keyring: &KeyringConfig,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, MailerError> {
        self.calls
            .lock()
            .unwrap()
            .push((keyring.clone(), ciphertext.to_vec()));

        match &self.fail_with {
            Some(reason) => Err(MailerError::Decryption(reason.clone())),
            None => Ok(self.plaintext.as_bytes().to_vec()),
        }
    }
}

/// Records every message it is asked to send
#[derive(Clone, Default)]
pub struct MockMailSender {
    pub fail_with: Option<String>,
    pub sent: Arc<Mutex<Vec<(String, OutboundMessage)>>>,
}

impl MockMailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn sent_messages(&self) -> Vec<(String, OutboundMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for MockMailSender {
    async fn send(
        &self,
        api_key: &str,
        message: &OutboundMessage,
    ) -> Result<DeliveryReceipt, MailerError> {
        self.sent
            .lock()
            .unwrap()
            .push((api_key.to_string(), message.clone()));

        match &self.fail_with {
            Some(reason) => Err(MailerError::Delivery(reason.clone())),
            None => Ok(DeliveryReceipt {
                status_code: 202,
                body: String::new(),
                message_id: Some("mock-message-id".to_string()),
            }),
        }
    }
}
