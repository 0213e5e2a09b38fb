use acad_core::routes::ApplicantParams;
use acad_forms::options::{
    CITIES, CIVIL_STATES, COUNTRIES, DOCUMENT_TYPES, ENROLLMENT_PERIODS, GENDERS,
};
use acad_forms::{ApplicantEntryForm, ApplicantProfile, ApplicantRegistrationForm, FieldErrors};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::applicant::{
    ApplicantCommands, ApplicantEntryArgs, ApplicantRegisterArgs,
};
use crate::output::output;

#[derive(Debug, Serialize)]
struct NextView {
    view: &'static str,
    path: String,
}

#[derive(Debug, Serialize)]
struct RegistrationResponse {
    profile: ApplicantProfile,
    next: NextView,
}

#[derive(Debug, Serialize)]
struct SelectOption {
    field: &'static str,
    key: &'static str,
    label: &'static str,
}

/// Applicant forms validate locally; nothing is sent.
pub fn handle(action: &ApplicantCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ApplicantCommands::Entry(args) => entry(args, flags),
        ApplicantCommands::Register(args) => register(args, flags),
        ApplicantCommands::Options => options(flags),
    }
}

fn entry(args: &ApplicantEntryArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = ApplicantParams {
        institution: args.institution.clone(),
        program: args.program.clone(),
        ..ApplicantParams::default()
    };
    let form = ApplicantEntryForm {
        document_type: args.document_type.clone().unwrap_or_default(),
        document_number: args.document_number.clone().unwrap_or_default(),
        enrollment_period: args.enrollment_period.clone().unwrap_or_default(),
        ..ApplicantEntryForm::from_params(&params)
    };
    let next = form.submit().map_err(invalid)?;
    output(
        &NextView {
            view: next.view_name(),
            path: next.to_path(),
        },
        flags.format,
    )
}

fn register(args: &ApplicantRegisterArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = ApplicantParams {
        institution: args.institution.clone(),
        program: args.program.clone(),
        document_type: args.document_type.clone(),
        document_number: args.document_number.clone(),
        enrollment_period: None,
    };
    let prefilled = ApplicantRegistrationForm::from_params(&params);
    let form = ApplicantRegistrationForm {
        first_name: args.first_name.clone(),
        last_names: args.last_names.clone(),
        birth_date: args.birth_date.clone(),
        civil_state: args.civil_state.clone(),
        gender: args.gender.clone(),
        phone: args.phone.clone(),
        mobile: args.mobile.clone(),
        email: args.email.clone(),
        email_confirmation: args.email_confirmation.clone(),
        country: args.country.clone().unwrap_or_else(|| prefilled.country.clone()),
        city: args.city.clone(),
        address: args.address.clone(),
        ..prefilled
    };
    let (profile, back) = form.submit().map_err(invalid)?;
    tracing::debug!(document = %profile.document_number, "applicant registered locally");
    output(
        &RegistrationResponse {
            profile,
            next: NextView {
                view: back.view_name(),
                path: back.to_path(),
            },
        },
        flags.format,
    )
}

fn options(flags: &GlobalFlags) -> anyhow::Result<()> {
    let groups = [
        ("documentType", DOCUMENT_TYPES),
        ("enrollmentPeriod", ENROLLMENT_PERIODS),
        ("civilState", CIVIL_STATES),
        ("gender", GENDERS),
        ("country", COUNTRIES),
        ("city", CITIES),
    ];
    let rows: Vec<SelectOption> = groups
        .into_iter()
        .flat_map(|(field, options)| {
            options
                .iter()
                .map(move |&(key, label)| SelectOption { field, key, label })
        })
        .collect();
    output(&rows, flags.format)
}

fn invalid(errors: FieldErrors) -> anyhow::Error {
    anyhow::Error::new(errors).context("El formulario tiene campos inválidos")
}
