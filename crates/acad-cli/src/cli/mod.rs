use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `academia` binary.
#[derive(Debug, Parser)]
#[command(
    name = "academia",
    version,
    about = "Academia.net - instituciones, programas y asistente académico"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load environment from this file instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            env_file: self.env_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AdminCommands, InstitutionCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "academia",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "institutions",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Institutions {
                action: InstitutionCommands::List(_)
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["academia", "admin", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Admin {
                action: AdminCommands::Dashboard
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["academia", "--format", "xml", "route", "/"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn search_collects_repeated_filters() {
        let cli = Cli::try_parse_from([
            "academia",
            "search",
            "medicina",
            "--modality",
            "virtual",
            "--modality",
            "presencial",
            "--city",
            "bogota",
        ])
        .expect("cli should parse");

        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.term.as_deref(), Some("medicina"));
        assert_eq!(args.modality, vec!["virtual", "presencial"]);
        assert_eq!(args.city, vec!["bogota"]);
        assert!(args.level.is_empty());
    }

    #[test]
    fn verify_requires_username() {
        let parsed = Cli::try_parse_from(["academia", "admin", "verify", "123456"]);
        assert!(parsed.is_err());
    }
}
