//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use cognito_mailer_core::models::{CustomEmailSenderEvent, SenderConfig, TemplateConfig};
use std::path::PathBuf;

pub mod mock_services;

/// Get path to test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load a trigger event fixture as the raw Lambda payload
pub fn load_event_payload(name: &str) -> serde_json::Value {
    let path = fixtures_dir().join("events").join(name);
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {:?}", path));
    serde_json::from_str(&json).unwrap_or_else(|e| panic!("Invalid fixture {:?}: {}", path, e))
}

/// Load a trigger event fixture
pub fn load_event_fixture(name: &str) -> CustomEmailSenderEvent {
    serde_json::from_value(load_event_payload(name))
        .unwrap_or_else(|e| panic!("Invalid event fixture {}: {}", name, e))
}

pub fn sign_up_event() -> CustomEmailSenderEvent {
    load_event_fixture("custom-email-sender-sign-up-event.json")
}

pub fn forgot_password_event() -> CustomEmailSenderEvent {
    load_event_fixture("custom-email-sender-forgot-password-event.json")
}

pub fn resend_code_event() -> CustomEmailSenderEvent {
    load_event_fixture("custom-email-sender-resend-code-event.json")
}

/// Configuration with every key present
pub fn full_config() -> SenderConfig {
    SenderConfig {
        key_id: Some("test-key".to_string()),
        key_alias: None,
        sendgrid_api_key: Some("test-sendgrid-api-key".to_string()),
        from_email: Some("test@example.com".to_string()),
        app_base_url: Some("https://test.com".to_string()),
        sign_up: TemplateConfig {
            template_id: Some("sign-up-template-id".to_string()),
            subject: Some("sign-up-subject".to_string()),
        },
        forgot_password: TemplateConfig {
            template_id: Some("forgot-password-template-id".to_string()),
            subject: Some("forgot-password-subject".to_string()),
        },
    }
}
