//! # acad-search
//!
//! Program search for Academia.net.
//!
//! - [`FilterState`]: free-text term plus checkbox groups (modality,
//!   duration, level, city). AND across groups, OR within a group.
//! - [`SearchService`]: fetches programs and institutions concurrently,
//!   pushes single-valued groups down to the API, re-applies the full
//!   predicate locally, and resolves institution names on the listings.

mod filters;
mod service;

pub use filters::{ActiveChip, FilterState, GroupSelection, institution_matches_term};
pub use service::{Catalog, InstitutionDetail, SearchResults, SearchService, UNKNOWN_INSTITUTION};
