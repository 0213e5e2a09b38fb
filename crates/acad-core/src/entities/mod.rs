//! Entity DTOs for all Academia.net domain objects.
//!
//! Wire structs mirror the external API's Spanish field names through serde
//! renames; the Rust side uses English names. Nothing here is mutated after
//! construction: views replace entities wholesale on re-fetch.

mod admin;
mod application;
mod chat;
mod institution;
mod program;

pub use admin::{AdminRegistration, RegistrationReceipt, StatusMessage, VerificationRequest};
pub use application::ApplicationSubmission;
pub use chat::ChatMessage;
pub use institution::{Institution, InstitutionProfile, DEFAULT_LOGO_URL};
pub use program::{Program, ProgramListing};
