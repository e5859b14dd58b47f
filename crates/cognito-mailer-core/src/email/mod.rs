/// Message construction for the custom email sender flows
pub mod builder;

pub use builder::{build_link, build_message};

use crate::constants::{CHANGE_PASSWORD_PATH, CONFIRM_REGISTRATION_PATH};
use crate::models::TriggerSource;
use serde::{Deserialize, Serialize};

/// Templated email the sender knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTemplate {
    ConfirmRegistration,
    ResetPassword,
}

impl EmailTemplate {
    /// Template for a trigger source, `None` when the trigger sends nothing
    pub fn for_trigger(source: &TriggerSource) -> Option<Self> {
        match source {
            TriggerSource::SignUp => Some(Self::ConfirmRegistration),
            TriggerSource::ForgotPassword => Some(Self::ResetPassword),
            TriggerSource::Unhandled(_) => None,
        }
    }

    /// Application path the emailed link points at
    pub fn link_path(self) -> &'static str {
        match self {
            Self::ConfirmRegistration => CONFIRM_REGISTRATION_PATH,
            Self::ResetPassword => CHANGE_PASSWORD_PATH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ConfirmRegistration => "confirm_registration",
            Self::ResetPassword => "reset_password",
        }
    }
}
