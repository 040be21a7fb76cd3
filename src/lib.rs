//! formcheck
//!
//! Syntactic validation of login and sign-up form input, plus a line-oriented
//! terminal front end that collects form fields and renders the outcome.

pub mod auth;
pub mod config;
pub mod error;
pub mod frontend;
pub mod utils;

pub use auth::{
    FormKind, ValidationResult, login_user, sign_up_user, validate_email, validate_password,
    validate_username,
};
pub use config::FrontendConfig;
pub use error::{FieldError, FrontendError};
