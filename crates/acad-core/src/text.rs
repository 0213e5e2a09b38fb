//! Text normalization helpers.
//!
//! The API returns Spanish labels with inconsistent casing and accents
//! (`"MEDELLÍN"`, `"Medellin"`, `"Maestría"`). Filter comparisons go through
//! [`fold`] so that both sides agree.

/// Lowercase `value` and strip the Spanish diacritics the catalog uses.
///
/// `ñ` is kept as-is: it is a distinct letter, not an accented `n`.
#[must_use]
pub fn fold(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            other => other,
        })
        .collect()
}

/// Case-insensitive substring check (no accent folding).
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
