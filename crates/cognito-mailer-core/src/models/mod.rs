/// Data models for the custom email sender
pub mod config;
pub mod events;
pub mod message;

// Re-export commonly used types
pub use config::*;
pub use events::*;
pub use message::*;
