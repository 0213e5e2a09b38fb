//! # acad-core
//!
//! Core types shared across all Academia.net crates:
//! - Entity DTOs mirrored from the external API (institutions, programs,
//!   applications, admin accounts, chat messages)
//! - Filter vocabulary enums (modality, duration bucket, academic level, city)
//! - Client route table mapping paths to views
//! - Accent-insensitive text helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod routes;
pub mod text;
