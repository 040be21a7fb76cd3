//! Credential fields and forms
//!
//! Names the fields a form collects and holds their submitted values.

use std::fmt;

/// A single credential field on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    Username,
}

impl Field {
    /// Label used when prompting for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::Username => "username",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two forms a user can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    SignUp,
}

impl FormKind {
    /// Fields collected by the form, in the order they are asked for.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormKind::Login => &[Field::Email, Field::Password],
            FormKind::SignUp => &[Field::Email, Field::Password, Field::Username],
        }
    }

    /// Marker returned when every field on the form is valid.
    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Login => "Login Successful",
            FormKind::SignUp => "Sign-Up Successful",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Login => f.write_str("login"),
            FormKind::SignUp => f.write_str("sign-up"),
        }
    }
}

/// Values submitted on a form. Fields the form does not collect stay empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Username => &self.username,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Username => self.username = value,
        }
    }
}

// Keeps passwords out of logs and panic messages.
impl fmt::Debug for FormFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFields")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}
