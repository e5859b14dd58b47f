/// Cognito Mailer Worker - custom email sender Lambda
///
/// This module contains the trigger handler and the invocation context that
/// wires the real decryption and mail delivery services.
pub mod context;
pub mod handlers;

// Re-export commonly used items
pub use cognito_mailer_core::*;
pub use context::WorkerContext;
pub use handlers::{handle_payload, handler, process_event};
