use serde::{Deserialize, Serialize};

/// Logo shown for every institution until the API provides one.
pub const DEFAULT_LOGO_URL: &str = "/assets/logos/institution-default.png";

/// An academic organization offering programs, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Institution {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ciudad", default)]
    pub city: String,
    #[serde(rename = "tipoInstitucion", default)]
    pub institution_type: String,
    #[serde(rename = "codigoInstitucion", default)]
    pub institution_code: String,
}

/// Institution plus the presentation fields synthesized client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstitutionProfile {
    pub id: String,
    pub name: String,
    pub city: String,
    pub institution_type: String,
    pub institution_code: String,
    pub logo_url: String,
    pub website: String,
    pub description: String,
    pub country: String,
}

impl Institution {
    /// Placeholder website: `https://www.<name without whitespace>.edu.co`.
    #[must_use]
    pub fn website(&self) -> String {
        let slug: String = self
            .name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("https://www.{slug}.edu.co")
    }

    /// Build the display profile, filling in fields the API does not provide.
    #[must_use]
    pub fn profile(&self) -> InstitutionProfile {
        InstitutionProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            city: self.city.clone(),
            institution_type: self.institution_type.clone(),
            institution_code: self.institution_code.clone(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            website: self.website(),
            description: format!(
                "{} es una institución educativa ubicada en {}.",
                self.name, self.city
            ),
            country: "Colombia".to_string(),
        }
    }
}
