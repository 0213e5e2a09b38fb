use clap::ValueEnum;

/// How command results are printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, stable for scripting.
    Json,
    /// Aligned columns with Spanish headers.
    Table,
    /// Compact JSON on one line.
    Raw,
}

/// Flags accepted anywhere on the command line, collected after parsing.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    /// Caps list output; falls back to `general.default_limit`.
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    /// Extra `.env` file read before configuration is loaded.
    pub env_file: Option<String>,
}
