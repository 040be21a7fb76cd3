//! Validation result type
//!
//! Outcome of submitting a form: a success marker or an ordered, non-empty
//! list of error messages.

use super::credentials::FormKind;
use crate::error::FieldError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every check passed; holds the form's success marker.
    Success(String),
    /// Messages for the failed checks, in check order. Never empty.
    Failure(Vec<String>),
}

impl ValidationResult {
    /// Builds the outcome of `form` from the field errors collected in check order.
    pub(crate) fn from_errors(form: FormKind, errors: &[FieldError]) -> Self {
        if errors.is_empty() {
            ValidationResult::Success(form.success_message().to_string())
        } else {
            ValidationResult::Failure(
                errors
                    .iter()
                    .map(|error| error.message(form).to_string())
                    .collect(),
            )
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success(_))
    }

    /// Error messages, empty on success.
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationResult::Success(_) => &[],
            ValidationResult::Failure(errors) => errors,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            ValidationResult::Success(message) => Some(message),
            ValidationResult::Failure(_) => None,
        }
    }
}
