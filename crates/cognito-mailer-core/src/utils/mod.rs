/// Utility functions
pub mod logging;

pub use logging::redact_email;
