pub mod failure;
pub mod filters;
pub mod limit;
