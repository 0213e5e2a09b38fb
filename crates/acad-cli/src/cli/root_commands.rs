use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, ApplicantCommands, ChatCommands, InstitutionCommands, ProgramCommands,
};

/// Top-level command tree. Each leaf plays one routed view.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Institution directory (`/`, `/institucion/:id`).
    Institutions {
        #[command(subcommand)]
        action: InstitutionCommands,
    },
    /// Academic programs (`/programa/:id`).
    Programs {
        #[command(subcommand)]
        action: ProgramCommands,
    },
    /// Search programs and institutions with filters (`/busqueda`).
    Search(SearchArgs),
    /// Apply to a program.
    Apply(ApplyArgs),
    /// Applicant entry and registration forms.
    Applicant {
        #[command(subcommand)]
        action: ApplicantCommands,
    },
    /// Institution administrator area (`/admin/...`).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Talk to the academic assistant.
    Chat(ChatArgs),
    /// Resolve a browser path to its view.
    Route(RouteArgs),
}

/// Arguments for `academia search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Free-text term matched against name, level, modality and municipality.
    pub term: Option<String>,
    /// Modality filter (repeatable): virtual, presencial.
    #[arg(long)]
    pub modality: Vec<String>,
    /// Duration filter (repeatable): corto, medio, largo.
    #[arg(long)]
    pub duration: Vec<String>,
    /// Academic level filter (repeatable), e.g. pregrado, maestria.
    #[arg(long)]
    pub level: Vec<String>,
    /// City filter (repeatable), e.g. medellin, bogota.
    #[arg(long)]
    pub city: Vec<String>,
}

/// Arguments for `academia apply`.
#[derive(Clone, Debug, Args)]
pub struct ApplyArgs {
    /// Program id.
    pub program: String,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
}

/// Arguments for `academia chat`.
#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    #[command(subcommand)]
    pub action: Option<ChatCommands>,
    /// System prompt preset (academic_advisor, career_comparison, admission_advisor).
    #[arg(long)]
    pub prompt: Option<String>,
    /// Send a single message and exit instead of starting a conversation.
    #[arg(long)]
    pub message: Option<String>,
}

/// Arguments for `academia route`.
#[derive(Clone, Debug, Args)]
pub struct RouteArgs {
    /// Browser path, optionally with a query string.
    pub path: String,
}
