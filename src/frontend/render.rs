//! Output rendering
//!
//! Turns validation outcomes and session messages into text lines.

use crate::auth::ValidationResult;
use crate::config::FrontendConfig;

pub const HELP_TEXT: &str = "\
Commands:
  login    validate an email and password
  signup   validate an email, password and username
  help     show this list
  quit     end the session
";

pub fn render_banner() -> String {
    format!("formcheck {}\n{}", env!("CARGO_PKG_VERSION"), HELP_TEXT)
}

/// Render a submission outcome. A success is one line carrying the success
/// marker; a failure is one line per error, in order, each carrying the
/// error marker.
pub fn render_result(result: &ValidationResult, config: &FrontendConfig) -> String {
    match result.success_message() {
        Some(message) => format!("[{}] {}\n", config.success_marker, message),
        None => result
            .errors()
            .iter()
            .map(|error| format!("[{}] {}\n", config.error_marker, error))
            .collect(),
    }
}

pub fn render_unknown(command: &str) -> String {
    format!("Unknown command '{}'. Type 'help' for the list of commands.\n", command)
}

/// Prompt written before reading a form field.
pub fn render_field_prompt(label: &str) -> String {
    format!("{}: ", label)
}
