//! Program catalog (`GET /academic-programs`).

use acad_core::entities::Program;
use serde::{Deserialize, Serialize};

use crate::{
    AcademiaClient, Endpoint,
    error::ApiError,
    http::{decode, send, with_query},
};

/// Filters accepted by the program listing. The API takes one value per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramQuery {
    pub level: Option<String>,
    pub modality: Option<String>,
    pub institution_id: Option<String>,
    pub municipality: Option<String>,
    pub duration: Option<String>,
    pub limit: Option<u32>,
    pub next_token: Option<String>,
}

impl ProgramQuery {
    /// All programs offered by one institution.
    #[must_use]
    pub fn for_institution(institution_id: impl Into<String>, limit: u32) -> Self {
        Self {
            institution_id: Some(institution_id.into()),
            limit: Some(limit),
            ..Default::default()
        }
    }

    fn path(&self) -> String {
        with_query(
            Endpoint::Programs.path(),
            &[
                ("nivel", self.level.clone()),
                ("modalidad", self.modality.clone()),
                ("institucionId", self.institution_id.clone()),
                ("municipio", self.municipality.clone()),
                ("duracionPrograma", self.duration.clone()),
                ("limit", self.limit.map(|l| l.to_string())),
                ("nextToken", self.next_token.clone()),
            ],
        )
    }
}

/// Filters the server reports having applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramFilterEcho {
    #[serde(default)]
    pub nivel: Option<String>,
    #[serde(default)]
    pub modalidad: Option<String>,
    #[serde(rename = "institucionId", default)]
    pub institucion_id: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramPage {
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub filters: ProgramFilterEcho,
}

impl AcademiaClient {
    /// Fetch one page of programs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the endpoint returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn list_programs(&self, query: &ProgramQuery) -> Result<ProgramPage, ApiError> {
        let url = self.url(&query.path());
        tracing::debug!(%url, "fetching programs");
        let page: ProgramPage = decode(send(self.http.get(&url)).await?).await?;
        tracing::debug!(count = page.programs.len(), "programs received");
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "programs": [
            {
                "id": "p-55",
                "nombre": "Maestría en Ciencia de Datos",
                "institucionId": "1216",
                "nivel": "Maestría",
                "modalidad": "Virtual",
                "duracion": 4,
                "creditos": 48,
                "codigo": "SNIES-55",
                "estado": "Activo",
                "municipio": "Medellín"
            }
        ],
        "count": 1,
        "filters": {
            "nivel": "Maestría",
            "modalidad": null,
            "institucionId": null,
            "municipio": null
        }
    }"#;

    #[test]
    fn parse_program_page() {
        let page: ProgramPage = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.programs[0].institution_id, "1216");
        assert_eq!(page.programs[0].duration, 4);
        assert_eq!(page.filters.nivel.as_deref(), Some("Maestría"));
        assert!(page.next_token.is_none());
    }

    #[test]
    fn institution_query_sets_limit() {
        let query = ProgramQuery::for_institution("1216", 3300);
        assert_eq!(
            query.path(),
            "/academic-programs?institucionId=1216&limit=3300"
        );
    }

    #[test]
    fn query_uses_api_parameter_names() {
        let query = ProgramQuery {
            level: Some("pregrado".into()),
            modality: Some("Virtual".into()),
            municipality: Some("Cali".into()),
            duration: Some("largo".into()),
            next_token: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(
            query.path(),
            "/academic-programs?nivel=pregrado&modalidad=Virtual&municipio=Cali&duracionPrograma=largo&nextToken=abc"
        );
    }
}
