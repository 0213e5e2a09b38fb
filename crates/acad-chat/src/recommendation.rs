//! Search recommendations embedded in assistant replies.
//!
//! The assistant ends a reply with `BÚSQUEDA_RECOMENDADA: <query>` when it
//! has a concrete search to suggest. The session strips that line from the
//! displayed reply and appends a recommendation message the user can accept
//! with "Buscar esto".

use std::sync::OnceLock;

use regex::Regex;

pub const TOKEN: &str = "BÚSQUEDA_RECOMENDADA:";

/// Marker text of a recommendation message.
pub const ACCEPT_HINT: &str = "Puedes hacer clic en \"Buscar esto\"";

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"BÚSQUEDA_RECOMENDADA:[ \t]*([^\n]*)")
            .expect("recommendation token pattern is a valid regex")
    })
}

fn token_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"BÚSQUEDA_RECOMENDADA:[^\n]*")
            .expect("recommendation line pattern is a valid regex")
    })
}

/// Query following the token, up to the end of its line.
///
/// Quotes wrapped around the whole query are dropped.
#[must_use]
pub fn extract(reply: &str) -> Option<String> {
    token_regex()
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().trim_matches('"').trim().to_string())
        .filter(|q| !q.is_empty())
}

/// Reply text with the token line removed.
#[must_use]
pub fn strip(reply: &str) -> String {
    token_line_regex().replace_all(reply, "").trim().to_string()
}

/// The assistant message offering `query`.
#[must_use]
pub fn message(query: &str) -> String {
    format!(
        "Basado en nuestra conversación, te recomiendo buscar: \"{query}\"\n\n{ACCEPT_HINT} para ver los resultados."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REPLY: &str = "La Medicina forma profesionales de la salud.\n\
        Dura alrededor de 12 semestres.\n\
        BÚSQUEDA_RECOMENDADA: medicina pregrado\n";

    #[test]
    fn extracts_query_to_end_of_line() {
        assert_eq!(extract(REPLY).as_deref(), Some("medicina pregrado"));
        assert_eq!(
            extract("Te sugiero esto. BÚSQUEDA_RECOMENDADA: derecho").as_deref(),
            Some("derecho")
        );
    }

    #[test]
    fn no_token_no_query() {
        assert!(extract("¿Qué áreas te interesan?").is_none());
    }

    #[test]
    fn strip_removes_token_line() {
        assert_eq!(
            strip(REPLY),
            "La Medicina forma profesionales de la salud.\nDura alrededor de 12 semestres."
        );
    }

    #[test]
    fn strip_keeps_text_after_token_line() {
        assert_eq!(
            strip("Intro\nBÚSQUEDA_RECOMENDADA: diseño gráfico\n¡Éxitos!"),
            "Intro\n\n¡Éxitos!"
        );
    }

    #[test]
    fn empty_token_line_does_not_borrow_next_line() {
        let reply = "Listo.\nBÚSQUEDA_RECOMENDADA:\nEstudia mucho.";
        assert!(extract(reply).is_none());
        assert_eq!(strip(reply), "Listo.\n\nEstudia mucho.");
    }

    #[test]
    fn quoted_query_is_unwrapped() {
        assert_eq!(
            extract("BÚSQUEDA_RECOMENDADA: \"medicina\"").as_deref(),
            Some("medicina")
        );
        assert!(extract("BÚSQUEDA_RECOMENDADA: \"\"").is_none());
    }

    #[test]
    fn message_names_query_and_action() {
        let text = message("ingeniería de sistemas");
        assert!(text.starts_with("Basado en nuestra conversación, te recomiendo buscar: \"ingeniería de sistemas\""));
        assert!(text.ends_with("Puedes hacer clic en \"Buscar esto\" para ver los resultados."));
    }
}
