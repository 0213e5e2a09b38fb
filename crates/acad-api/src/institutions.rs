//! Institution directory (`GET /excel-institutions`).

use acad_core::entities::Institution;
use serde::{Deserialize, Serialize};

use crate::{
    AcademiaClient, Endpoint,
    error::ApiError,
    http::{decode, send, with_query},
};

/// Filters accepted by the institution listing. The API takes one value per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionQuery {
    pub city: Option<String>,
    pub institution_type: Option<String>,
    pub limit: Option<u32>,
    pub next_token: Option<String>,
}

impl InstitutionQuery {
    fn path(&self) -> String {
        with_query(
            Endpoint::Institutions.path(),
            &[
                ("ciudad", self.city.clone()),
                ("tipoInstitucion", self.institution_type.clone()),
                ("limit", self.limit.map(|l| l.to_string())),
                ("nextToken", self.next_token.clone()),
            ],
        )
    }
}

/// Filters the server reports having applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionFilterEcho {
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(rename = "tipoInstitucion", default)]
    pub tipo_institucion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionPage {
    #[serde(default)]
    pub institutions: Vec<Institution>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub filters: InstitutionFilterEcho,
}

impl AcademiaClient {
    /// Fetch one page of institutions.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the endpoint returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn list_institutions(
        &self,
        query: &InstitutionQuery,
    ) -> Result<InstitutionPage, ApiError> {
        let url = self.url(&query.path());
        tracing::debug!(%url, "fetching institutions");
        let page: InstitutionPage = decode(send(self.http.get(&url)).await?).await?;
        tracing::debug!(count = page.institutions.len(), "institutions received");
        Ok(page)
    }

    /// Look up one institution by id, walking pages until found.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_institutions`].
    pub async fn find_institution(
        &self,
        id: &str,
        page_size: Option<u32>,
    ) -> Result<Option<Institution>, ApiError> {
        let mut query = InstitutionQuery {
            limit: page_size,
            ..Default::default()
        };
        loop {
            let page = self.list_institutions(&query).await?;
            if let Some(found) = page.institutions.into_iter().find(|i| i.id == id) {
                return Ok(Some(found));
            }
            match page.next_token {
                Some(token) if query.next_token.as_deref() != Some(token.as_str()) => {
                    query.next_token = Some(token);
                }
                _ => return Ok(None),
            }
        }
    }
}
