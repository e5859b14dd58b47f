/// Configuration models - read from environment variables on every invocation
use crate::constants::*;
use crate::email::EmailTemplate;
use crate::error::MailerError;

/// Key material used to build the decryption keyring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyringConfig {
    /// Optional generator key (usually a KMS alias)
    pub generator_key_id: Option<String>,
    pub key_ids: Vec<String>,
}

/// Template id and subject for one email flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateConfig {
    pub template_id: Option<String>,
    pub subject: Option<String>,
}

/// A template whose id and subject are both present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate<'a> {
    pub template_id: &'a str,
    pub subject: &'a str,
}

impl TemplateConfig {
    pub fn resolve(&self) -> Option<ResolvedTemplate<'_>> {
        Some(ResolvedTemplate {
            template_id: self.template_id.as_deref()?,
            subject: self.subject.as_deref()?,
        })
    }
}

/// Process configuration for the custom email sender
///
/// Every value is optional here; each step asks for the keys it needs and
/// gets the matching error when one is absent.
#[derive(Debug, Clone, Default)]
pub struct SenderConfig {
    pub key_id: Option<String>,
    pub key_alias: Option<String>,
    pub sendgrid_api_key: Option<String>,
    pub from_email: Option<String>,
    pub app_base_url: Option<String>,
    pub sign_up: TemplateConfig,
    pub forgot_password: TemplateConfig,
}

impl SenderConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            key_id: get(ENV_KEY_ID),
            key_alias: get(ENV_KEY_ALIAS),
            sendgrid_api_key: get(ENV_SENDGRID_API_KEY),
            from_email: get(ENV_FROM_EMAIL),
            app_base_url: get(ENV_APP_BASE_URL),
            sign_up: TemplateConfig {
                template_id: get(ENV_SIGN_UP_TEMPLATE_ID),
                subject: get(ENV_SIGN_UP_SUBJECT),
            },
            forgot_password: TemplateConfig {
                template_id: get(ENV_FORGOT_PASSWORD_TEMPLATE_ID),
                subject: get(ENV_FORGOT_PASSWORD_SUBJECT),
            },
        }
    }

    pub fn require_api_key(&self) -> Result<&str, MailerError> {
        self.sendgrid_api_key
            .as_deref()
            .ok_or(MailerError::MissingApiKey)
    }

    pub fn require_sender(&self) -> Result<&str, MailerError> {
        self.from_email.as_deref().ok_or(MailerError::MissingSender)
    }

    pub fn require_link_base(&self) -> Result<&str, MailerError> {
        self.app_base_url
            .as_deref()
            .ok_or(MailerError::MissingLinkBase)
    }

    /// Builds the keyring description; `KEY_ID` may list several keys separated by commas
    pub fn keyring(&self) -> Result<KeyringConfig, MailerError> {
        let key_ids: Vec<String> = self
            .key_id
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if key_ids.is_empty() {
            return Err(MailerError::MissingKeyConfig);
        }

        Ok(KeyringConfig {
            generator_key_id: self.key_alias.clone(),
            key_ids,
        })
    }

    /// Template settings for an email flow
    pub fn template_for(&self, template: EmailTemplate) -> &TemplateConfig {
        match template {
            EmailTemplate::ConfirmRegistration => &self.sign_up,
            EmailTemplate::ResetPassword => &self.forgot_password,
        }
    }
}
