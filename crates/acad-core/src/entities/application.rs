use serde::{Deserialize, Serialize};

/// Enrollment request for one program, sent once and then discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationSubmission {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "programName")]
    pub program_name: String,
    #[serde(rename = "programId")]
    pub program_id: String,
}

impl ApplicationSubmission {
    /// Title shown to the institution: `"<program> - <university>"`.
    #[must_use]
    pub fn compose_program_name(program_title: &str, university: &str) -> String {
        format!("{program_title} - {university}")
    }
}
