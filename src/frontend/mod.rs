//! Terminal front end
//!
//! Reads commands and form fields line by line, submits forms to the
//! aggregators and renders the outcome with success/error markers.

pub mod commands;
pub mod render;
pub mod session;

pub use commands::{Command, parse_command};
pub use render::render_result;
pub use session::{SessionSummary, run_session};
