//! Client route table.
//!
//! Every browser path maps to exactly one view. Unknown paths resolve to
//! [`Route::NotFound`], which redirects home.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query parameters carried between the applicant entry and registration views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantParams {
    pub institution: Option<String>,
    pub program: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub enrollment_period: Option<String>,
}

impl ApplicantParams {
    fn from_query(query: &[(String, String)]) -> Self {
        Self {
            institution: param(query, "institution"),
            program: param(query, "program"),
            document_type: param(query, "documentType"),
            document_number: param(query, "documentNumber"),
            enrollment_period: param(query, "enrollmentPeriod"),
        }
    }

    fn to_query(&self) -> Vec<(&'static str, &str)> {
        [
            ("institution", self.institution.as_deref()),
            ("program", self.program.as_deref()),
            ("documentType", self.document_type.as_deref()),
            ("documentNumber", self.document_number.as_deref()),
            ("enrollmentPeriod", self.enrollment_period.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    Home,
    Search { query: Option<String> },
    Institution { id: String },
    Program { id: String },
    ApplicantEntry(ApplicantParams),
    ApplicantRegistration(ApplicantParams),
    AdminLogin,
    AdminRegistration,
    AdminVerification { username: Option<String> },
    AdminDashboard,
    NotFound { path: String },
}

impl Route {
    /// Resolve a browser path (with optional `?query`) to its view.
    #[must_use]
    pub fn parse(path_and_query: &str) -> Self {
        let (path, raw_query) = path_and_query
            .split_once('?')
            .unwrap_or((path_and_query, ""));
        let query = parse_query(raw_query);
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["busqueda"] => Self::Search {
                query: param(&query, "q"),
            },
            ["institucion", id] => Self::Institution {
                id: decode(id),
            },
            ["programa", id] => Self::Program { id: decode(id) },
            ["ingreso-aspirante"] => Self::ApplicantEntry(ApplicantParams::from_query(&query)),
            ["registro-aspirante"] => {
                Self::ApplicantRegistration(ApplicantParams::from_query(&query))
            }
            ["admin"] => Self::AdminLogin,
            ["admin", "registro"] => Self::AdminRegistration,
            ["admin", "verificar"] => Self::AdminVerification {
                username: param(&query, "username"),
            },
            ["admin", "dashboard"] => Self::AdminDashboard,
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Render back to a browser path with percent-encoded query values.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home | Self::NotFound { .. } => "/".to_string(),
            Self::Search { query } => with_query(
                "/busqueda",
                &query.as_deref().map(|q| ("q", q)).into_iter().collect::<Vec<_>>(),
            ),
            Self::Institution { id } => format!("/institucion/{}", urlencoding::encode(id)),
            Self::Program { id } => format!("/programa/{}", urlencoding::encode(id)),
            Self::ApplicantEntry(params) => with_query("/ingreso-aspirante", &params.to_query()),
            Self::ApplicantRegistration(params) => {
                with_query("/registro-aspirante", &params.to_query())
            }
            Self::AdminLogin => "/admin".to_string(),
            Self::AdminRegistration => "/admin/registro".to_string(),
            Self::AdminVerification { username } => with_query(
                "/admin/verificar",
                &username
                    .as_deref()
                    .map(|u| ("username", u))
                    .into_iter()
                    .collect::<Vec<_>>(),
            ),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
        }
    }

    /// Unknown paths send the user home.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Self::NotFound { .. } => Self::Home,
            other => other,
        }
    }

    /// Short view name for logs and output.
    #[must_use]
    pub const fn view_name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search { .. } => "search",
            Self::Institution { .. } => "institution",
            Self::Program { .. } => "program",
            Self::ApplicantEntry(_) => "applicant_entry",
            Self::ApplicantRegistration(_) => "applicant_registration",
            Self::AdminLogin => "admin_login",
            Self::AdminRegistration => "admin_registration",
            Self::AdminVerification { .. } => "admin_verification",
            Self::AdminDashboard => "admin_dashboard",
            Self::NotFound { .. } => "not_found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Percent-decode a path segment. `+` stays literal.
fn decode(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |v| v.into_owned())
}

/// Decode a query key or value, where `+` means a space.
fn decode_query(raw: &str) -> String {
    decode(&raw.replace('+', " "))
}

fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query(key), decode_query(value))
        })
        .collect()
}

/// First non-empty value for `key`.
fn param(query: &[(String, String)], key: &str) -> Option<String> {
    query
        .iter()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.clone())
}

fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}
