//! Front-end command parsing

use crate::auth::FormKind;

/// A command typed at the front-end prompt.
#[derive(Debug, PartialEq)]
pub enum Command {
    Form(FormKind), // Open a form and collect its fields
    Help,
    Quit,
    Empty,
    Unknown(String),
}

// Parse raw command line into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();

    match trimmed.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "login" => Command::Form(FormKind::Login),
        "signup" | "sign-up" | "register" => Command::Form(FormKind::SignUp),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
