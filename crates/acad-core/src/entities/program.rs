use serde::{Deserialize, Serialize};

use super::institution::DEFAULT_LOGO_URL;
use crate::enums::DurationBucket;

/// An academic offering belonging to one institution, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Program {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "institucionId")]
    pub institution_id: String,
    #[serde(rename = "nivel", default)]
    pub level: String,
    #[serde(rename = "modalidad", default)]
    pub modality: String,
    /// Length in semesters.
    #[serde(rename = "duracion", default)]
    pub duration: u32,
    #[serde(rename = "creditos", default)]
    pub credits: u32,
    #[serde(rename = "codigo", default)]
    pub code: String,
    #[serde(rename = "estado", default)]
    pub status: String,
    #[serde(rename = "municipio", default)]
    pub municipality: String,
}

impl Program {
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} semestres", self.duration)
    }

    #[must_use]
    pub const fn duration_bucket(&self) -> DurationBucket {
        DurationBucket::from_semesters(self.duration)
    }

    /// Search-card model. `university` holds the raw institution id until
    /// [`ProgramListing::with_institution`] resolves it.
    #[must_use]
    pub fn to_listing(&self) -> ProgramListing {
        ProgramListing {
            id: self.id.clone(),
            title: self.name.clone(),
            institution_id: self.institution_id.clone(),
            university: self.institution_id.clone(),
            location: self.municipality.clone(),
            description: format!(
                "Programa académico de nivel {} con una duración de {} y {} créditos.",
                self.level,
                self.duration_label(),
                self.credits
            ),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            modality: vec![self.modality.clone()],
            duration: self.duration_label(),
            level: self.level.clone(),
            credits: self.credits,
            code: self.code.clone(),
            status: self.status.clone(),
        }
    }
}

/// A program as rendered in search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramListing {
    pub id: String,
    pub title: String,
    pub institution_id: String,
    pub university: String,
    pub location: String,
    pub description: String,
    pub logo_url: String,
    pub modality: Vec<String>,
    pub duration: String,
    pub level: String,
    pub credits: u32,
    pub code: String,
    pub status: String,
}

impl ProgramListing {
    #[must_use]
    pub fn with_institution(mut self, name: &str, logo_url: &str) -> Self {
        self.university = name.to_string();
        self.logo_url = logo_url.to_string();
        self
    }
}
