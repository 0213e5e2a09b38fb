use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum ProgramCommands {
    /// List programs with API-side filters only.
    List(ProgramListArgs),
    /// Show one program card.
    Show {
        /// Program id.
        id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ProgramListArgs {
    #[arg(long)]
    pub level: Option<String>,
    #[arg(long)]
    pub modality: Option<String>,
    /// Owning institution id.
    #[arg(long)]
    pub institution: Option<String>,
    #[arg(long)]
    pub municipality: Option<String>,
    /// Duration bucket key: corto, medio, largo.
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub next_token: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}
