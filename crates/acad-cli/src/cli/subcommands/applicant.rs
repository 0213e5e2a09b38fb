use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum ApplicantCommands {
    /// Applicant entry form (`/ingreso-aspirante`).
    Entry(ApplicantEntryArgs),
    /// Applicant registration form (`/registro-aspirante`).
    Register(ApplicantRegisterArgs),
    /// List the choices accepted by select fields.
    Options,
}

#[derive(Clone, Debug, Args)]
pub struct ApplicantEntryArgs {
    #[arg(long)]
    pub institution: Option<String>,
    #[arg(long)]
    pub program: Option<String>,
    /// Document type key, e.g. cc, ti, ce, pasaporte.
    #[arg(long)]
    pub document_type: Option<String>,
    #[arg(long)]
    pub document_number: Option<String>,
    /// Enrollment period key, e.g. 2025-1.
    #[arg(long)]
    pub enrollment_period: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ApplicantRegisterArgs {
    #[arg(long)]
    pub institution: Option<String>,
    #[arg(long)]
    pub program: Option<String>,
    #[arg(long)]
    pub document_type: Option<String>,
    #[arg(long)]
    pub document_number: Option<String>,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_names: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub birth_date: String,
    #[arg(long, default_value = "")]
    pub civil_state: String,
    #[arg(long, default_value = "")]
    pub gender: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub mobile: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub email_confirmation: String,
    /// Country key; defaults to the form default.
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub address: String,
}
