use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Register an institution administrator.
    Register(AdminRegisterArgs),
    /// Confirm the emailed six-digit code.
    Verify {
        /// Username returned by registration.
        #[arg(long)]
        username: String,
        /// The code, as typed or pasted.
        code: String,
    },
    /// Email a fresh verification code.
    Resend {
        #[arg(long)]
        username: String,
    },
    /// Log into the dashboard.
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Show the dashboard.
    Dashboard,
}

#[derive(Clone, Debug, Args)]
pub struct AdminRegisterArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    /// Legal name of the institution.
    #[arg(long, default_value = "")]
    pub institution: String,
    /// Short name of the institution.
    #[arg(long, default_value = "")]
    pub abbreviation: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, default_value = "")]
    pub password_confirmation: String,
}
