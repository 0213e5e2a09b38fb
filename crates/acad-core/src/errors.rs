//! Core error type. Transport errors live in `acad-api`, form validation in
//! `acad-forms`; the binary converges everything on `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A filter option name did not match any known option of its group.
    #[error("Unknown {group} option '{value}'")]
    UnknownOption { group: &'static str, value: String },
}
