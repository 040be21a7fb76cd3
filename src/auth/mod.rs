//! Credential validation
//!
//! Field validators, the login/sign-up aggregators and their result type.

pub mod credentials;
pub mod forms;
pub mod results;
pub mod validator;

pub use credentials::{Field, FormFields, FormKind};
pub use forms::{login_user, sign_up_user, submit};
pub use results::ValidationResult;
pub use validator::{validate_email, validate_password, validate_username};
