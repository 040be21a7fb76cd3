//! Error types
//!
//! `FieldError` is a domain outcome collected into a `ValidationResult`, never
//! raised. `FrontendError` covers faults of the terminal front end.

use std::fmt;
use std::io;

use crate::auth::{Field, FormKind};

/// A credential field that failed its syntactic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    InvalidEmailFormat,
    InvalidUsernameFormat,
    InvalidPasswordFormat,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::InvalidEmailFormat => Field::Email,
            FieldError::InvalidUsernameFormat => Field::Username,
            FieldError::InvalidPasswordFormat => Field::Password,
        }
    }

    /// Message shown to the user. The password wording differs between forms.
    pub fn message(&self, form: FormKind) -> &'static str {
        match (self, form) {
            (FieldError::InvalidEmailFormat, _) => "Invalid email format",
            (FieldError::InvalidUsernameFormat, _) => {
                "Username must be at least 3 characters and contain only letters"
            }
            (FieldError::InvalidPasswordFormat, FormKind::Login) => "Invalid password",
            (FieldError::InvalidPasswordFormat, FormKind::SignUp) => {
                "Password does not meet criteria"
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} format", self.field())
    }
}

impl std::error::Error for FieldError {}

/// Faults of the terminal front end.
#[derive(Debug)]
pub enum FrontendError {
    Io(io::Error),
    Config(config::ConfigError),
    /// Input ended while `field` of `form` was still being collected.
    FormAbandoned { form: FormKind, field: Field },
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendError::Io(e) => write!(f, "I/O error: {}", e),
            FrontendError::Config(e) => write!(f, "Configuration error: {}", e),
            FrontendError::FormAbandoned { form, field } => {
                write!(f, "Input ended before the {} form received its {}", form, field)
            }
        }
    }
}

impl std::error::Error for FrontendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrontendError::Io(e) => Some(e),
            FrontendError::Config(e) => Some(e),
            FrontendError::FormAbandoned { .. } => None,
        }
    }
}

impl From<io::Error> for FrontendError {
    fn from(error: io::Error) -> Self {
        FrontendError::Io(error)
    }
}

impl From<config::ConfigError> for FrontendError {
    fn from(error: config::ConfigError) -> Self {
        FrontendError::Config(error)
    }
}
