//! Error handling
//!
//! Field validation failures and front-end faults.

pub mod handlers;
pub mod types;

pub use types::*;
