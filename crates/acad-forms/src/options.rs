//! Select-field vocabularies as `(key, label)` pairs.

pub const DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("cc", "Cédula de Ciudadanía"),
    ("ce", "Cédula de Extranjería"),
    ("ti", "Tarjeta de Identidad"),
    ("pasaporte", "Pasaporte"),
];

pub const ENROLLMENT_PERIODS: &[(&str, &str)] = &[
    ("2025-1", "Primer Semestre 2025"),
    ("2025-2", "Segundo Semestre 2025"),
    ("2026-1", "Primer Semestre 2026"),
];

pub const CIVIL_STATES: &[(&str, &str)] = &[
    ("soltero", "Soltero/a"),
    ("casado", "Casado/a"),
    ("divorciado", "Divorciado/a"),
    ("viudo", "Viudo/a"),
    ("unionLibre", "Unión Libre"),
];

pub const GENDERS: &[(&str, &str)] = &[
    ("masculino", "Masculino"),
    ("femenino", "Femenino"),
    ("otro", "Otro"),
    ("noEspecifica", "Prefiero no especificar"),
];

pub const COUNTRIES: &[(&str, &str)] = &[
    ("co", "Colombia"),
    ("ar", "Argentina"),
    ("mx", "México"),
    ("pe", "Perú"),
    ("cl", "Chile"),
    ("ec", "Ecuador"),
    ("ven", "Venezuela"),
];

pub const DEFAULT_COUNTRY: &str = "co";

pub const CITIES: &[(&str, &str)] = &[
    ("bog", "Bogotá"),
    ("med", "Medellín"),
    ("cal", "Cali"),
    ("bar", "Barranquilla"),
    ("car", "Cartagena"),
    ("buc", "Bucaramanga"),
    ("per", "Pereira"),
    ("man", "Manizales"),
    ("pas", "Pasto"),
    ("iba", "Ibagué"),
];

/// Label for `key` within `options`.
#[must_use]
pub fn label_of(options: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    options.iter().find(|(k, _)| *k == key).map(|(_, label)| *label)
}
