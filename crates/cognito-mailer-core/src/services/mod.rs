/// External collaborators: envelope decryption and mail delivery
pub mod decryption;
pub mod esdk;
pub mod sendgrid;

// Re-export service traits
pub use decryption::{Decryptor, decrypt_code};
pub use esdk::EsdkDecryptor;
pub use sendgrid::{MailSender, SendGridMailSender};
