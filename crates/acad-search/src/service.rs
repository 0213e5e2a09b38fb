//! Search and institution-detail flows over a [`Catalog`].

use std::collections::HashMap;

use acad_api::{AcademiaClient, ApiError, InstitutionPage, InstitutionQuery, ProgramPage, ProgramQuery};
use acad_core::entities::{DEFAULT_LOGO_URL, Institution, InstitutionProfile, Program, ProgramListing};
use async_trait::async_trait;
use serde::Serialize;

use crate::filters::FilterState;

/// University label for programs whose institution id is not in the directory.
pub const UNKNOWN_INSTITUTION: &str = "Institución Desconocida";

/// Read access to the program and institution listings.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn programs(&self, query: &ProgramQuery) -> Result<ProgramPage, ApiError>;

    async fn institutions(&self, query: &InstitutionQuery) -> Result<InstitutionPage, ApiError>;

    async fn institution(
        &self,
        id: &str,
        page_size: Option<u32>,
    ) -> Result<Option<Institution>, ApiError>;
}

#[async_trait]
impl Catalog for AcademiaClient {
    async fn programs(&self, query: &ProgramQuery) -> Result<ProgramPage, ApiError> {
        self.list_programs(query).await
    }

    async fn institutions(&self, query: &InstitutionQuery) -> Result<InstitutionPage, ApiError> {
        self.list_institutions(query).await
    }

    async fn institution(
        &self,
        id: &str,
        page_size: Option<u32>,
    ) -> Result<Option<Institution>, ApiError> {
        self.find_institution(id, page_size).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub programs: Vec<ProgramListing>,
    pub institutions: Vec<Institution>,
    pub total_programs: usize,
    pub total_institutions: usize,
}

/// An institution page: profile plus its programs.
///
/// A failed program fetch leaves `programs` empty and keeps the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionDetail {
    pub profile: InstitutionProfile,
    pub programs: Vec<Program>,
}

pub struct SearchService<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    page_size: u32,
}

impl<'a, C: Catalog + ?Sized> SearchService<'a, C> {
    /// `page_size` is the `limit` sent on every listing call.
    pub const fn new(catalog: &'a C, page_size: u32) -> Self {
        Self { catalog, page_size }
    }

    /// Run a search: concurrent fetch, API pushdown, full local predicate,
    /// then institution enrichment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if either listing call fails. Enrichment failures
    /// are logged and leave raw institution ids in place.
    pub async fn search(&self, filters: &FilterState) -> Result<SearchResults, ApiError> {
        let program_query = ProgramQuery {
            limit: Some(self.page_size),
            ..filters.program_query()
        };
        let institution_query = InstitutionQuery {
            limit: Some(self.page_size),
            ..filters.institution_query()
        };
        tracing::debug!(
            term = filters.term(),
            active_filters = filters.active_count(),
            "running search"
        );

        let (programs, institutions) = tokio::join!(
            self.catalog.programs(&program_query),
            self.catalog.institutions(&institution_query),
        );
        let programs = filters.apply(programs?.programs);
        let institutions = filters.apply_to_institutions(institutions?.institutions);

        let listings = self
            .enrich(programs.iter().map(Program::to_listing).collect())
            .await;

        Ok(SearchResults {
            total_programs: listings.len(),
            total_institutions: institutions.len(),
            programs: listings,
            institutions,
        })
    }

    /// Replace raw institution ids on `listings` with institution names.
    ///
    /// Unknown ids become [`UNKNOWN_INSTITUTION`]. If the directory cannot be
    /// fetched the listings are returned untouched.
    pub async fn enrich(&self, listings: Vec<ProgramListing>) -> Vec<ProgramListing> {
        let query = InstitutionQuery {
            limit: Some(self.page_size),
            ..InstitutionQuery::default()
        };
        let page = match self.catalog.institutions(&query).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(%e, "institution enrichment failed");
                return listings;
            }
        };

        let names: HashMap<&str, &str> = page
            .institutions
            .iter()
            .map(|i| (i.id.as_str(), i.name.as_str()))
            .collect();

        listings
            .into_iter()
            .map(|listing| {
                let name = names
                    .get(listing.institution_id.as_str())
                    .copied()
                    .unwrap_or(UNKNOWN_INSTITUTION);
                listing.with_institution(name, DEFAULT_LOGO_URL)
            })
            .collect()
    }

    /// Find one program by id in the catalog page and enrich it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the program listing fails.
    pub async fn program(&self, id: &str) -> Result<Option<ProgramListing>, ApiError> {
        let query = ProgramQuery {
            limit: Some(self.page_size),
            ..ProgramQuery::default()
        };
        let page = self.catalog.programs(&query).await?;
        let Some(program) = page.programs.into_iter().find(|p| p.id == id) else {
            tracing::debug!(program = id, "program not in catalog page");
            return Ok(None);
        };
        Ok(self.enrich(vec![program.to_listing()]).await.into_iter().next())
    }

    /// Load one institution and the programs it offers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the institution lookup fails. `Ok(None)` means
    /// no institution has that id.
    pub async fn institution_detail(&self, id: &str) -> Result<Option<InstitutionDetail>, ApiError> {
        let Some(institution) = self.catalog.institution(id, Some(self.page_size)).await? else {
            return Ok(None);
        };

        let programs = match self
            .catalog
            .programs(&ProgramQuery::for_institution(&institution.id, self.page_size))
            .await
        {
            Ok(page) => page.programs,
            Err(e) => {
                tracing::warn!(institution = %institution.id, %e, "program fetch failed");
                Vec::new()
            }
        };

        Ok(Some(InstitutionDetail {
            profile: institution.profile(),
            programs,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use acad_core::enums::{AcademicLevel, City};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct FakeCatalog {
        programs: Vec<Program>,
        institutions: Vec<Institution>,
        fail_institutions: bool,
        program_queries: Mutex<Vec<ProgramQuery>>,
        institution_queries: Mutex<Vec<InstitutionQuery>>,
    }

    #[async_trait]
    impl Catalog for FakeCatalog {
        async fn programs(&self, query: &ProgramQuery) -> Result<ProgramPage, ApiError> {
            self.program_queries.lock().unwrap().push(query.clone());
            Ok(ProgramPage {
                count: self.programs.len(),
                programs: self.programs.clone(),
                next_token: None,
                filters: acad_api::programs::ProgramFilterEcho::default(),
            })
        }

        async fn institutions(
            &self,
            query: &InstitutionQuery,
        ) -> Result<InstitutionPage, ApiError> {
            self.institution_queries.lock().unwrap().push(query.clone());
            if self.fail_institutions {
                return Err(ApiError::Api {
                    status: 503,
                    message: None,
                });
            }
            Ok(InstitutionPage {
                count: self.institutions.len(),
                institutions: self.institutions.clone(),
                next_token: None,
                filters: acad_api::institutions::InstitutionFilterEcho::default(),
            })
        }

        async fn institution(
            &self,
            id: &str,
            _page_size: Option<u32>,
        ) -> Result<Option<Institution>, ApiError> {
            Ok(self.institutions.iter().find(|i| i.id == id).cloned())
        }
    }

    fn program(id: &str, name: &str, institution_id: &str) -> Program {
        Program {
            id: id.into(),
            name: name.into(),
            institution_id: institution_id.into(),
            level: "Pregrado".into(),
            modality: "Presencial".into(),
            duration: 10,
            credits: 160,
            code: String::new(),
            status: "Activo".into(),
            municipality: "Medellín".into(),
        }
    }

    fn institution(id: &str, name: &str) -> Institution {
        Institution {
            id: id.into(),
            name: name.into(),
            city: "Medellín".into(),
            institution_type: "Universidad".into(),
            institution_code: id.into(),
        }
    }

    #[tokio::test]
    async fn search_enriches_and_marks_unknown() {
        let catalog = FakeCatalog {
            programs: vec![program("p1", "Derecho", "1216"), program("p2", "Medicina", "9999")],
            institutions: vec![institution("1216", "Universidad EAFIT")],
            ..Default::default()
        };
        let service = SearchService::new(&catalog, 3300);

        let results = service.search(&FilterState::default()).await.unwrap();

        assert_eq!(results.total_programs, 2);
        assert_eq!(results.programs[0].university, "Universidad EAFIT");
        assert_eq!(results.programs[1].university, UNKNOWN_INSTITUTION);
        assert_eq!(results.total_institutions, 1);
    }

    #[tokio::test]
    async fn enrichment_failure_keeps_raw_ids() {
        let catalog = FakeCatalog {
            programs: vec![program("p1", "Derecho", "1216")],
            fail_institutions: true,
            ..Default::default()
        };
        let service = SearchService::new(&catalog, 100);

        let listings = service
            .enrich(vec![catalog.programs[0].to_listing()])
            .await;

        assert_eq!(listings[0].university, "1216");
    }

    #[tokio::test]
    async fn search_pushes_single_values_and_limit() {
        let catalog = FakeCatalog::default();
        let service = SearchService::new(&catalog, 3300);
        let mut filters = FilterState::default();
        filters.toggle(AcademicLevel::Doctorado, true);
        filters.toggle(City::Cali, true);

        service.search(&filters).await.unwrap();

        let program_queries = catalog.program_queries.lock().unwrap();
        assert_eq!(program_queries[0].level.as_deref(), Some("doctorado"));
        assert_eq!(program_queries[0].municipality.as_deref(), Some("Cali"));
        assert_eq!(program_queries[0].limit, Some(3300));
        let institution_queries = catalog.institution_queries.lock().unwrap();
        assert_eq!(institution_queries[0].city.as_deref(), Some("Cali"));
    }

    #[tokio::test]
    async fn institution_detail_builds_profile() {
        let catalog = FakeCatalog {
            programs: vec![program("p1", "Derecho", "1216")],
            institutions: vec![institution("1216", "Universidad EAFIT")],
            ..Default::default()
        };
        let service = SearchService::new(&catalog, 3300);

        let detail = service.institution_detail("1216").await.unwrap().unwrap();

        assert_eq!(detail.profile.website, "https://www.universidadeafit.edu.co");
        assert_eq!(detail.programs.len(), 1);
        let queries = catalog.program_queries.lock().unwrap();
        assert_eq!(queries[0].institution_id.as_deref(), Some("1216"));
    }

    #[tokio::test]
    async fn program_lookup_enriches() {
        let catalog = FakeCatalog {
            programs: vec![program("p1", "Derecho", "1216"), program("p2", "Medicina", "1216")],
            institutions: vec![institution("1216", "Universidad EAFIT")],
            ..Default::default()
        };
        let service = SearchService::new(&catalog, 3300);

        let listing = service.program("p2").await.unwrap().unwrap();
        assert_eq!(listing.title, "Medicina");
        assert_eq!(listing.university, "Universidad EAFIT");
        assert!(service.program("p9").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn institution_detail_missing_id() {
        let catalog = FakeCatalog::default();
        let service = SearchService::new(&catalog, 3300);
        assert!(service.institution_detail("nope").await.unwrap().is_none());
    }
}
