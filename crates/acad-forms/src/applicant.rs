//! Applicant entry and registration forms.
//!
//! Entry collects the document and enrollment period for a pre-selected
//! institution/program and hands off to registration; registration collects
//! the personal profile and returns to entry.

use acad_core::routes::{ApplicantParams, Route};
use chrono::NaiveDate;
use serde::Serialize;

use crate::FieldErrors;
use crate::options::{
    CITIES, CIVIL_STATES, COUNTRIES, DEFAULT_COUNTRY, DOCUMENT_TYPES, ENROLLMENT_PERIODS, GENDERS,
};
use crate::rules::{require, require_choice, require_email, require_match};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantEntryForm {
    pub institution: String,
    pub program: String,
    pub document_type: String,
    pub document_number: String,
    pub enrollment_period: String,
}

impl ApplicantEntryForm {
    /// Pre-fill institution and program from the route query.
    #[must_use]
    pub fn from_params(params: &ApplicantParams) -> Self {
        Self {
            institution: params.institution.clone().unwrap_or_default(),
            program: params.program.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_choice(
            &mut errors,
            "documentType",
            &self.document_type,
            DOCUMENT_TYPES,
            "El tipo de documento es requerido",
        );
        require(
            &mut errors,
            "documentNumber",
            &self.document_number,
            "El número de documento es requerido",
        );
        require_choice(
            &mut errors,
            "enrollmentPeriod",
            &self.enrollment_period,
            ENROLLMENT_PERIODS,
            "El periodo de inscripción es requerido",
        );
        errors
    }

    /// Route to the registration view carrying every entry value.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldErrors`] if a required field is missing.
    pub fn submit(&self) -> Result<Route, FieldErrors> {
        self.validate().into_result(|| {
            Route::ApplicantRegistration(ApplicantParams {
                institution: non_empty(&self.institution),
                program: non_empty(&self.program),
                document_type: non_empty(&self.document_type),
                document_number: non_empty(&self.document_number),
                enrollment_period: non_empty(&self.enrollment_period),
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantRegistrationForm {
    pub institution: String,
    pub program: String,
    pub document_type: String,
    pub document_number: String,
    pub first_name: String,
    pub last_names: String,
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    pub civil_state: String,
    pub gender: String,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    pub email_confirmation: String,
    pub country: String,
    pub city: String,
    pub address: String,
}

impl Default for ApplicantRegistrationForm {
    fn default() -> Self {
        Self {
            institution: String::new(),
            program: String::new(),
            document_type: String::new(),
            document_number: String::new(),
            first_name: String::new(),
            last_names: String::new(),
            birth_date: String::new(),
            civil_state: String::new(),
            gender: String::new(),
            phone: String::new(),
            mobile: String::new(),
            email: String::new(),
            email_confirmation: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            city: String::new(),
            address: String::new(),
        }
    }
}

/// A validated applicant profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub document_type: String,
    pub document_number: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub civil_state: String,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub mobile: String,
    pub email: String,
    pub country: String,
    pub city: String,
    pub address: String,
}

impl ApplicantRegistrationForm {
    /// Pre-fill institution, program and document from the route query.
    #[must_use]
    pub fn from_params(params: &ApplicantParams) -> Self {
        Self {
            institution: params.institution.clone().unwrap_or_default(),
            program: params.program.clone().unwrap_or_default(),
            document_type: params.document_type.clone().unwrap_or_default(),
            document_number: params.document_number.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        self.check().0
    }

    /// Validated profile plus the route back to the entry view.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldErrors`] if any required field is missing or malformed.
    pub fn submit(&self) -> Result<(ApplicantProfile, Route), FieldErrors> {
        let (errors, birth_date) = self.check();
        let birth_date = match birth_date {
            Some(date) if errors.is_empty() => date,
            _ => return Err(errors),
        };
        let profile = ApplicantProfile {
            document_type: self.document_type.clone(),
            document_number: self.document_number.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_names.trim().to_string(),
            birth_date,
            civil_state: self.civil_state.clone(),
            gender: self.gender.clone(),
            phone: non_empty(self.phone.trim()),
            mobile: self.mobile.trim().to_string(),
            email: self.email.trim().to_string(),
            country: self.country.clone(),
            city: self.city.clone(),
            address: self.address.trim().to_string(),
        };
        let back = Route::ApplicantEntry(ApplicantParams {
            institution: non_empty(&self.institution),
            program: non_empty(&self.program),
            document_type: non_empty(&self.document_type),
            document_number: non_empty(&self.document_number),
            enrollment_period: None,
        });
        Ok((profile, back))
    }

    fn check(&self) -> (FieldErrors, Option<NaiveDate>) {
        let mut errors = FieldErrors::new();
        require_choice(
            &mut errors,
            "documentType",
            &self.document_type,
            DOCUMENT_TYPES,
            "El tipo de documento es requerido",
        );
        require(
            &mut errors,
            "documentNumber",
            &self.document_number,
            "El número de documento es requerido",
        );
        require(&mut errors, "firstName", &self.first_name, "El nombre es requerido");
        require(&mut errors, "lastName", &self.last_names, "Los apellidos son requeridos");

        let mut birth_date = None;
        if require(
            &mut errors,
            "birthDate",
            &self.birth_date,
            "La fecha de nacimiento es requerida",
        ) {
            match NaiveDate::parse_from_str(self.birth_date.trim(), "%Y-%m-%d") {
                Ok(date) => birth_date = Some(date),
                Err(_) => errors.push("birthDate", "La fecha de nacimiento no es válida"),
            }
        }

        require_choice(
            &mut errors,
            "civilState",
            &self.civil_state,
            CIVIL_STATES,
            "El estado civil es requerido",
        );
        require_choice(
            &mut errors,
            "gender",
            &self.gender,
            GENDERS,
            "El género es requerido",
        );
        require(&mut errors, "mobile", &self.mobile, "El celular es requerido");
        require_email(
            &mut errors,
            "email",
            &self.email,
            "El email es requerido",
            "Email inválido",
        );
        require_match(
            &mut errors,
            "confirmEmail",
            &self.email,
            &self.email_confirmation,
            "La confirmación de email es requerida",
            "Los emails deben coincidir",
        );
        require_choice(
            &mut errors,
            "country",
            &self.country,
            COUNTRIES,
            "El país es requerido",
        );
        require_choice(&mut errors, "city", &self.city, CITIES, "La ciudad es requerida");
        require(&mut errors, "address", &self.address, "La dirección es requerida");
        (errors, birth_date)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
