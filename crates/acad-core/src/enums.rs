//! Filter vocabulary and message sender enums.
//!
//! All enums use `snake_case` serialization. Every filter group implements
//! [`FilterOption`], which gives the search layer a uniform way to list,
//! label and parse the checkboxes of a group.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;
use crate::text::fold;

/// A single checkbox within a search filter group.
pub trait FilterOption: Copy + Eq + Ord + fmt::Debug + 'static {
    /// Group key used in error messages and chip rendering.
    const GROUP: &'static str;

    /// Every option of the group, in display order.
    const ALL: &'static [Self];

    /// Stable key (`snake_case`).
    fn as_str(self) -> &'static str;

    /// Human-facing label, also the value the API expects.
    fn label(self) -> &'static str;

    /// Parse from either the key or the label, ignoring case and accents.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownOption`] if nothing in [`Self::ALL`] matches.
    fn parse(raw: &str) -> Result<Self, CoreError> {
        let wanted = fold(raw.trim()).replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|option| fold(option.as_str()) == wanted || fold(option.label()) == wanted)
            .ok_or_else(|| CoreError::UnknownOption {
                group: Self::GROUP,
                value: raw.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Modality
// ---------------------------------------------------------------------------

/// Delivery mode of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Virtual,
    Presencial,
}

impl FilterOption for Modality {
    const GROUP: &'static str = "modality";
    const ALL: &'static [Self] = &[Self::Virtual, Self::Presencial];

    fn as_str(self) -> &'static str {
        match self {
            Self::Virtual => "virtual",
            Self::Presencial => "presencial",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Virtual => "Virtual",
            Self::Presencial => "Presencial",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DurationBucket
// ---------------------------------------------------------------------------

/// Coarse program length, derived from the duration in semesters.
///
/// ```text
/// corto  →  under 6 months
/// medio  →  6 months up to 2 years
/// largo  →  over 2 years
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBucket {
    Corto,
    Medio,
    Largo,
}

impl DurationBucket {
    /// Months in one academic semester.
    pub const MONTHS_PER_SEMESTER: u32 = 6;

    /// Bucket for a program lasting `semesters` semesters.
    #[must_use]
    pub const fn from_semesters(semesters: u32) -> Self {
        let months = semesters.saturating_mul(Self::MONTHS_PER_SEMESTER);
        if months < 6 {
            Self::Corto
        } else if months <= 24 {
            Self::Medio
        } else {
            Self::Largo
        }
    }
}

impl FilterOption for DurationBucket {
    const GROUP: &'static str = "duration";
    const ALL: &'static [Self] = &[Self::Corto, Self::Medio, Self::Largo];

    fn as_str(self) -> &'static str {
        match self {
            Self::Corto => "corto",
            Self::Medio => "medio",
            Self::Largo => "largo",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Corto => "Corto plazo",
            Self::Medio => "Medio plazo",
            Self::Largo => "Largo plazo",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AcademicLevel
// ---------------------------------------------------------------------------

/// Academic level of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcademicLevel {
    Pregrado,
    Tecnico,
    Tecnologico,
    Especializacion,
    Maestria,
    Doctorado,
}

impl FilterOption for AcademicLevel {
    const GROUP: &'static str = "level";
    const ALL: &'static [Self] = &[
        Self::Pregrado,
        Self::Tecnico,
        Self::Tecnologico,
        Self::Especializacion,
        Self::Maestria,
        Self::Doctorado,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pregrado => "pregrado",
            Self::Tecnico => "tecnico",
            Self::Tecnologico => "tecnologico",
            Self::Especializacion => "especializacion",
            Self::Maestria => "maestria",
            Self::Doctorado => "doctorado",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pregrado => "pregrado",
            Self::Tecnico => "técnico",
            Self::Tecnologico => "tecnológico",
            Self::Especializacion => "especialización",
            Self::Maestria => "maestría",
            Self::Doctorado => "doctorado",
        }
    }
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// City
// ---------------------------------------------------------------------------

/// Cities offered as location filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Medellin,
    Bogota,
    Cali,
    Barranquilla,
    Cartagena,
}

impl FilterOption for City {
    const GROUP: &'static str = "city";
    const ALL: &'static [Self] = &[
        Self::Medellin,
        Self::Bogota,
        Self::Cali,
        Self::Barranquilla,
        Self::Cartagena,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Medellin => "medellin",
            Self::Bogota => "bogota",
            Self::Cali => "cali",
            Self::Barranquilla => "barranquilla",
            Self::Cartagena => "cartagena",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Medellin => "Medellín",
            Self::Bogota => "Bogotá",
            Self::Cali => "Cali",
            Self::Barranquilla => "Barranquilla",
            Self::Cartagena => "Cartagena",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sender
// ---------------------------------------------------------------------------

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
