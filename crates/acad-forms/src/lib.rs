//! # acad-forms
//!
//! Form models for every Academia.net view that takes user input:
//!
//! - [`ApplicationForm`]: interest form on a program card
//! - [`AdminRegistrationForm`] / [`AdminLoginForm`]: institution staff
//! - [`ApplicantEntryForm`] / [`ApplicantRegistrationForm`]: applicants
//! - [`CodeEntry`] / [`VerificationForm`]: six-digit email code
//!
//! Each form keeps raw string values and validates on submit. A failed
//! submit returns [`FieldErrors`] keyed by field name with Spanish messages.

mod admin;
mod applicant;
mod application;
mod error;
mod fields;
pub mod options;
mod rules;
mod verification;

pub use admin::{AdminLoginForm, AdminRegistrationForm};
pub use applicant::{ApplicantEntryForm, ApplicantProfile, ApplicantRegistrationForm};
pub use application::{APPLICATION_RECEIVED, ApplicationForm};
pub use error::FormError;
pub use fields::FieldErrors;
pub use rules::is_valid_email;
pub use verification::{
    CODE_LENGTH, CodeEntry, RESEND_SUCCESS, VERIFIED_REDIRECT_DELAY, VerificationForm,
};
