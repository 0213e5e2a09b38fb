//! One-off prompts outside the conversation: no system prompt, no
//! conversation id, low temperature.

use acad_api::{ChatRequest, ModelOptions};

use crate::ChatBackend;

const HELPER_TEMPERATURE: f32 = 0.3;

fn helper_request(prompt: String, model_id: &str) -> ChatRequest {
    ChatRequest {
        prompt,
        system_prompt: String::new(),
        conversation_id: None,
        model_options: ModelOptions {
            temperature: HELPER_TEMPERATURE,
            model_id: model_id.to_string(),
        },
    }
}

/// Ask the assistant to turn `question` into search terms.
///
/// Quotes are stripped from the answer. If the call fails, the question
/// itself is used with `?`, `"` and `'` removed.
pub async fn generate_search_query<B: ChatBackend + ?Sized>(
    backend: &B,
    model_id: &str,
    question: &str,
) -> String {
    let prompt = format!(
        "Basándote en la siguiente pregunta del usuario sobre carreras universitarias,\n\
         genera términos de búsqueda óptimos para un motor de búsqueda académico.\n\
         Responde ÚNICAMENTE con los términos de búsqueda, sin explicaciones ni prefijos.\n\n\
         Pregunta del usuario: \"{question}\""
    );
    match backend.ask(&helper_request(prompt, model_id)).await {
        Ok(reply) => reply.text.replace(['"', '\''], "").trim().to_string(),
        Err(e) => {
            tracing::warn!(%e, "search query generation failed, using question");
            question.replace(['?', '"', '\''], "").trim().to_string()
        }
    }
}

/// Extract three to five interest keywords from the user's messages.
///
/// Returns an empty list if the call fails.
pub async fn analyze_topics<B: ChatBackend + ?Sized>(
    backend: &B,
    model_id: &str,
    user_messages: &[String],
) -> Vec<String> {
    let prompt = format!(
        "Analiza los siguientes mensajes de un usuario buscando información sobre carreras universitarias\n\
         y extrae 3-5 palabras clave o temas principales de interés:\n\n\
         {}\n\n\
         Responde ÚNICAMENTE con las palabras clave separadas por comas, sin explicaciones adicionales.",
        user_messages.join("\n---\n")
    );
    match backend.ask(&helper_request(prompt, model_id)).await {
        Ok(reply) => reply
            .text
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        Err(e) => {
            tracing::warn!(%e, "topic analysis failed");
            Vec::new()
        }
    }
}
