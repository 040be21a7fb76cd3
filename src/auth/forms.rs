//! Form aggregators
//!
//! Run the validators a form needs, in a fixed order, and collect one error
//! per failed check.

use log::debug;

use super::credentials::{Field, FormFields, FormKind};
use super::results::ValidationResult;
use super::validator::{validate_email, validate_password, validate_username};
use crate::error::FieldError;

/// Validates a login form: email first, then password.
pub fn login_user(email: &str, password: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if !validate_email(email) {
        errors.push(FieldError::InvalidEmailFormat);
    }
    if !validate_password(password) {
        errors.push(FieldError::InvalidPasswordFormat);
    }

    conclude(FormKind::Login, &errors)
}

/// Validates a sign-up form: email, then username, then password.
pub fn sign_up_user(email: &str, password: &str, username: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if !validate_email(email) {
        errors.push(FieldError::InvalidEmailFormat);
    }
    if !validate_username(username) {
        errors.push(FieldError::InvalidUsernameFormat);
    }
    if !validate_password(password) {
        errors.push(FieldError::InvalidPasswordFormat);
    }

    conclude(FormKind::SignUp, &errors)
}

/// Dispatches submitted fields to the aggregator for `form`.
pub fn submit(form: FormKind, fields: &FormFields) -> ValidationResult {
    match form {
        FormKind::Login => login_user(fields.get(Field::Email), fields.get(Field::Password)),
        FormKind::SignUp => sign_up_user(
            fields.get(Field::Email),
            fields.get(Field::Password),
            fields.get(Field::Username),
        ),
    }
}

fn conclude(form: FormKind, errors: &[FieldError]) -> ValidationResult {
    if errors.is_empty() {
        debug!("{} form accepted", form);
    } else {
        debug!("{} form rejected with {} error(s): {:?}", form, errors.len(), errors);
    }
    ValidationResult::from_errors(form, errors)
}
