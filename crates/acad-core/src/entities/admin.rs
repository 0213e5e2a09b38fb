use serde::{Deserialize, Serialize};

/// Institution staff sign-up request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminRegistration {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "nombreLegalInstitucion")]
    pub institution_legal_name: String,
    #[serde(rename = "abreviacionNombre")]
    pub institution_abbreviation: String,
    #[serde(rename = "correoElectronico")]
    pub email: String,
    #[serde(rename = "contrasena")]
    pub password: String,
}

/// Returned by registration; `username` keys the verification step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub username: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationRequest {
    pub username: String,
    pub code: String,
}

/// Generic `{message, success}` acknowledgment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_success")]
    pub success: bool,
}

const fn default_success() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_uses_api_field_names() {
        let registration = AdminRegistration {
            first_name: "Laura".into(),
            last_name: "Ríos".into(),
            institution_legal_name: "Institución Universitaria ITM".into(),
            institution_abbreviation: "ITM".into(),
            email: "laura@itm.edu.co".into(),
            password: "Secreto123".into(),
        };
        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(value["nombreLegalInstitucion"], "Institución Universitaria ITM");
        assert_eq!(value["abreviacionNombre"], "ITM");
        assert_eq!(value["correoElectronico"], "laura@itm.edu.co");
        assert_eq!(value["contrasena"], "Secreto123");
    }

    #[test]
    fn status_message_defaults_to_success() {
        let status: StatusMessage = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(status.success);
        assert_eq!(status.message, "ok");
    }
}
