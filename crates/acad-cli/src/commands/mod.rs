pub mod admin;
pub mod applicant;
pub mod apply;
pub mod chat;
pub mod dispatch;
pub mod institutions;
pub mod programs;
pub mod route;
pub mod search;
pub mod shared;
