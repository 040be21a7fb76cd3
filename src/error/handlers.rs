//! Error handlers
//!
//! Logging and exit-code mapping for front-end faults.

use crate::error::types::FrontendError;
use log::error;

/// Log a front-end error
pub fn handle_error(err: &FrontendError) {
    error!("Frontend error: {}", err);
}

/// Convert error to a sysexits-style process exit code
pub fn exit_code(err: &FrontendError) -> i32 {
    match err {
        FrontendError::Io(_) => 74,
        FrontendError::Config(_) => 78,
        FrontendError::FormAbandoned { .. } => 65,
    }
}
