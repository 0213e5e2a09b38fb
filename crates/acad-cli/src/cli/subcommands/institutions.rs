use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum InstitutionCommands {
    /// List institutions.
    List(InstitutionListArgs),
    /// Show one institution with its programs.
    Show {
        /// Institution id.
        id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InstitutionListArgs {
    /// City name as the API stores it, e.g. "Medellín".
    #[arg(long)]
    pub city: Option<String>,
    /// Institution type, e.g. "Universidad".
    #[arg(long = "type")]
    pub institution_type: Option<String>,
    /// Continuation token from a previous page.
    #[arg(long)]
    pub next_token: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}
