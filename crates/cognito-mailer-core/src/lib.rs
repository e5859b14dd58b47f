/// Cognito Mailer Core - Shared library for the Cognito custom email sender
///
/// This crate contains the event and message models, configuration, and the
/// decryption and mail dispatch services used by the worker Lambda.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::MailerError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
