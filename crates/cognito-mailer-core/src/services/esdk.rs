/// AWS Encryption SDK binding for access code decryption
use super::decryption::Decryptor;
use crate::error::MailerError;
use crate::models::KeyringConfig;
use async_trait::async_trait;
use aws_esdk::client as esdk_client;
use aws_esdk::material_providers::client as mpl_client;
use aws_esdk::material_providers::types::EsdkCommitmentPolicy;
use aws_esdk::material_providers::types::material_providers_config::MaterialProvidersConfig;
use aws_esdk::types::aws_encryption_sdk_config::AwsEncryptionSdkConfig;
use aws_smithy_types::Blob;

/// Decrypts Cognito codes with a KMS multi-keyring
///
/// The SDK client uses the require-encrypt/allow-decrypt commitment policy so
/// messages written without key commitment still decrypt.
#[derive(Clone)]
pub struct EsdkDecryptor {
    esdk: esdk_client::Client,
    mpl: mpl_client::Client,
}

impl EsdkDecryptor {
    pub fn new() -> Result<Self, MailerError> {
        let esdk_config = AwsEncryptionSdkConfig::builder()
            .commitment_policy(EsdkCommitmentPolicy::RequireEncryptAllowDecrypt)
            .build()
            .map_err(|e| {
                MailerError::Decryption(format!("Invalid encryption SDK config: {:?}", e))
            })?;
        let esdk = esdk_client::Client::from_conf(esdk_config).map_err(|e| {
            MailerError::Decryption(format!("Failed to create encryption SDK client: {:?}", e))
        })?;

        let mpl_config = MaterialProvidersConfig::builder().build().map_err(|e| {
            MailerError::Decryption(format!("Invalid material providers config: {:?}", e))
        })?;
        let mpl = mpl_client::Client::from_conf(mpl_config).map_err(|e| {
            MailerError::Decryption(format!("Failed to create material providers client: {:?}", e))
        })?;

        Ok(Self { esdk, mpl })
    }
}

#[async_trait]
impl Decryptor for EsdkDecryptor {
    async fn decrypt(
        &self,
        keyring: &KeyringConfig,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, MailerError> {
        let kms_keyring = self
            .mpl
            .create_aws_kms_multi_keyring()
            .set_generator(keyring.generator_key_id.clone())
            .kms_key_ids(keyring.key_ids.clone())
            .send()
            .await
            .map_err(|e| {
                MailerError::Decryption(format!("Failed to create KMS keyring: {:?}", e))
            })?;

        let response = self
            .esdk
            .decrypt()
            .ciphertext(Blob::new(ciphertext))
            .keyring(kms_keyring)
            .send()
            .await
            .map_err(|e| MailerError::Decryption(format!("ESDK decrypt failed: {:?}", e)))?;

        let plaintext = response
            .plaintext
            .ok_or_else(|| MailerError::Decryption("ESDK returned no plaintext".to_string()))?;

        Ok(plaintext.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_decrypt_without_generator_reaches_message_parsing() {
        let decryptor = EsdkDecryptor::new().unwrap();
        let keyring = KeyringConfig {
            generator_key_id: None,
            key_ids: vec![
                "arn:aws:kms:us-east-1:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab"
                    .to_string(),
            ],
        };

        let err = decryptor
            .decrypt(&keyring, b"not an encrypted message")
            .await
            .unwrap_err();

        match err {
            MailerError::Decryption(msg) => {
                assert!(msg.starts_with("ESDK decrypt failed"), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
