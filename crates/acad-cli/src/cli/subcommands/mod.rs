pub mod admin;
pub mod applicant;
pub mod chat;
pub mod institutions;
pub mod programs;

pub use admin::AdminCommands;
pub use applicant::ApplicantCommands;
pub use chat::ChatCommands;
pub use institutions::InstitutionCommands;
pub use programs::ProgramCommands;
