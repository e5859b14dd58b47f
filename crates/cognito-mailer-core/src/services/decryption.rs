/// Access code decryption
use crate::error::MailerError;
use crate::models::{KeyringConfig, SenderConfig};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

#[async_trait]
pub trait Decryptor: Send + Sync {
    /// Decrypts envelope-encrypted `ciphertext` with a keyring built from `keyring`
    async fn decrypt(
        &self,
        keyring: &KeyringConfig,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, MailerError>;
}

/// Recovers the plaintext access code carried by a trigger event
///
/// Fails before touching the decryptor when the code or the key configuration
/// is missing. Decryptor failures propagate unchanged.
#[tracing::instrument(name = "decryption.decrypt_code", skip_all)]
pub async fn decrypt_code(
    code: Option<&str>,
    config: &SenderConfig,
    decryptor: &dyn Decryptor,
) -> Result<String, MailerError> {
    let code = code.ok_or(MailerError::MissingCode)?;
    let keyring = config.keyring()?;

    let ciphertext = STANDARD
        .decode(code.trim())
        .map_err(|e| MailerError::InvalidCode(format!("code is not valid base64: {}", e)))?;

    let plaintext = decryptor.decrypt(&keyring, &ciphertext).await?;

    tracing::debug!(
        key_count = keyring.key_ids.len(),
        has_generator = keyring.generator_key_id.is_some(),
        "Decrypted access code"
    );

    String::from_utf8(plaintext)
        .map_err(|_| MailerError::InvalidCode("plaintext is not valid UTF-8".to_string()))
}
