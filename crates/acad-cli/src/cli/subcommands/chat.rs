use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Turn a question into search terms.
    Query {
        question: String,
    },
    /// Extract interest keywords from messages.
    Topics {
        #[arg(required = true)]
        messages: Vec<String>,
    },
}
