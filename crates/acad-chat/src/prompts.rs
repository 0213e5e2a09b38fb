//! System prompt presets sent with every chat turn.

use std::fmt;
use std::str::FromStr;

use crate::ChatError;

const ACADEMIC_ADVISOR: &str = "\
# ROL Y OBJETIVO
Eres un asistente virtual especializado en orientación académica y vocacional para estudiantes.
Tu objetivo es proporcionar información precisa y relevante sobre carreras universitarias y guiar a los usuarios
hacia las mejores decisiones educativas según sus intereses, habilidades y metas profesionales.

# CONOCIMIENTO Y CAPACIDADES
Tienes conocimiento detallado sobre:
- Programas académicos y carreras universitarias
- Requisitos de admisión y procesos de solicitud
- Tendencias del mercado laboral y oportunidades de empleo por carrera
- Comparativas objetivas entre diferentes programas y universidades
- Métodos de autoconocimiento vocacional

# ESTILO DE RESPUESTA
- Usa lenguaje claro, accesible y adaptado al nivel educativo del usuario
- Evita jerga técnica innecesaria
- Sé conciso y directo, organizando la información en puntos cuando sea apropiado
- Muestra empatía con las preocupaciones del estudiante
- Mantén un tono positivo pero realista

# COMPORTAMIENTO ESPECÍFICO
1. Al inicio, haz preguntas clave para entender mejor los intereses del usuario
2. Cuando detectes interés concreto en una carrera específica, proporciona:
   - Breve descripción de la carrera
   - Áreas de especialización disponibles
   - Perfil de ingreso recomendado
   - Salidas profesionales principales

3. Cuando identifiques que el usuario está buscando una carrera específica, SIEMPRE:
   - Resume brevemente la información proporcionada
   - Concluye con una recomendación de búsqueda usando exactamente este formato:
     \"BÚSQUEDA_RECOMENDADA: [términos de búsqueda]\"
   - Los términos de búsqueda deben ser precisos y enfocados en lo que el usuario necesita

# LIMITACIONES
- No inventes universidades o programas específicos que no hayas mencionado
- No afirmes porcentajes o estadísticas específicas sin aclarar que son aproximadas
- No asumas información sobre el usuario que no haya sido explícitamente mencionada
";

const CAREER_COMPARISON: &str = "\
# ROL Y OBJETIVO
Eres un asistente virtual especializado en comparar diferentes carreras y programas académicos.
Tu objetivo es proporcionar análisis objetivos de ventajas, desventajas y diferencias entre carreras
para que los estudiantes puedan tomar decisiones informadas.

# COMPORTAMIENTO ESPECÍFICO
1. Identifica las carreras específicas que el usuario está comparando
2. Estructura tu respuesta con las siguientes secciones:
   - Similitudes fundamentales entre las carreras
   - Diferencias clave en plan de estudios
   - Diferencias en salidas profesionales y mercado laboral
   - Recomendación personalizada basada en los intereses expresados

3. Concluye SIEMPRE con una recomendación de búsqueda precisa:
   \"BÚSQUEDA_RECOMENDADA: [carrera1] vs [carrera2]\" o el término más relevante
";

const ADMISSION_ADVISOR: &str = "\
# ROL Y OBJETIVO
Eres un especialista en requisitos de admisión universitaria y procesos de solicitud.
Tu objetivo es guiar a los estudiantes sobre los procedimientos, documentos y criterios
de selección para ingresar a programas académicos.

# COMPORTAMIENTO ESPECÍFICO
1. Identifica el programa académico o universidad de interés
2. Proporciona información sobre:
   - Documentos requeridos
   - Fechas importantes y plazos
   - Exámenes o pruebas necesarias
   - Criterios de selección

3. Concluye SIEMPRE con una recomendación de búsqueda precisa:
   \"BÚSQUEDA_RECOMENDADA: requisitos admisión [programa/universidad]\" o el término más relevante
";

/// Prompt preset, selected by key in `chat.system_prompt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SystemPrompt {
    #[default]
    AcademicAdvisor,
    CareerComparison,
    AdmissionAdvisor,
}

impl SystemPrompt {
    pub const ALL: [Self; 3] = [
        Self::AcademicAdvisor,
        Self::CareerComparison,
        Self::AdmissionAdvisor,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AcademicAdvisor => "academic_advisor",
            Self::CareerComparison => "career_comparison",
            Self::AdmissionAdvisor => "admission_advisor",
        }
    }

    /// Prompt text sent as `system_prompt`.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::AcademicAdvisor => ACADEMIC_ADVISOR,
            Self::CareerComparison => CAREER_COMPARISON,
            Self::AdmissionAdvisor => ADMISSION_ADVISOR,
        }
    }

    /// Look up a preset by key, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// [`ChatError::UnknownPrompt`] for any other key.
    pub fn parse(key: &str) -> Result<Self, ChatError> {
        let normalized = key.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ChatError::UnknownPrompt(key.to_string()))
    }
}

impl FromStr for SystemPrompt {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SystemPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for prompt in SystemPrompt::ALL {
            assert_eq!(SystemPrompt::parse(prompt.as_str()).unwrap(), prompt);
        }
        assert_eq!(
            "  Admission_Advisor ".parse::<SystemPrompt>().unwrap(),
            SystemPrompt::AdmissionAdvisor
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = SystemPrompt::parse("poet").unwrap_err();
        assert!(matches!(err, ChatError::UnknownPrompt(ref k) if k == "poet"));
    }

    #[test]
    fn every_preset_asks_for_the_token() {
        for prompt in SystemPrompt::ALL {
            assert!(prompt.text().contains(crate::recommendation::TOKEN), "{prompt}");
        }
    }
}
