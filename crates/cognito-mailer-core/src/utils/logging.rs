//! Logging helpers for keeping recipient addresses out of logs

/// Masks the local part of an address, keeping the domain for debugging
///
/// # Examples
/// ```
/// use cognito_mailer_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("not-an-address"), "***");
/// ```
pub fn redact_email(address: &str) -> String {
    match address.rsplit_once('@') {
        Some((_, domain)) if !domain.is_empty() => format!("***@{}", domain),
        _ => "***".to_string(),
    }
}
