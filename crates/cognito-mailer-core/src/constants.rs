/// Constants used throughout the custom email sender
// Environment variables
pub const ENV_KEY_ID: &str = "KEY_ID";
pub const ENV_KEY_ALIAS: &str = "KEY_ALIAS";
pub const ENV_SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";
pub const ENV_SENDGRID_API_BASE: &str = "SENDGRID_API_BASE";
pub const ENV_FROM_EMAIL: &str = "FROM_EMAIL";
pub const ENV_APP_BASE_URL: &str = "APP_BASE_URL";
pub const ENV_SIGN_UP_TEMPLATE_ID: &str = "SIGN_UP_TEMPLATE_ID";
pub const ENV_SIGN_UP_SUBJECT: &str = "SIGN_UP_SUBJECT";
pub const ENV_FORGOT_PASSWORD_TEMPLATE_ID: &str = "FORGOT_PASSWORD_TEMPLATE_ID";
pub const ENV_FORGOT_PASSWORD_SUBJECT: &str = "FORGOT_PASSWORD_SUBJECT";

// Cognito trigger sources
pub const TRIGGER_SIGN_UP: &str = "CustomEmailSender_SignUp";
pub const TRIGGER_FORGOT_PASSWORD: &str = "CustomEmailSender_ForgotPassword";

// Link construction
pub const CONFIRM_REGISTRATION_PATH: &str = "/auth/confirmRegistration";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/changePassword";
pub const LINK_EMAIL_PARAM: &str = "email";
pub const LINK_ACCESS_CODE_PARAM: &str = "accessCode";

/// Name of the dynamic template variable carrying the link
pub const LINK_TEMPLATE_VARIABLE: &str = "cognito_link";

/// Cognito user attribute holding the recipient address
pub const EMAIL_ATTRIBUTE: &str = "email";

// SendGrid
pub const DEFAULT_SENDGRID_API_BASE: &str = "https://api.sendgrid.com/v3";
pub const SENDGRID_SEND_PATH: &str = "mail/send";
pub const SENDGRID_MESSAGE_ID_HEADER: &str = "x-message-id";
