//! Shared HTTP helpers for the endpoint modules.
//!
//! Centralizes transport error mapping (timeouts), status-code checks (429
//! rate limiting with `Retry-After` parsing, non-success → [`ApiError::Api`]
//! carrying the server's `message`/`error` field) and body decoding, so each
//! endpoint module stays focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Send a request, mapping client-side timeouts to [`ApiError::Timeout`].
pub async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let resp = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Http(e)
        }
    })?;
    check_response(resp).await
}

/// Check an HTTP response for error statuses.
///
/// - **429 Too Many Requests** → [`ApiError::RateLimited`] (`Retry-After`
///   seconds, 60 when absent or unparseable).
/// - **Non-success status** → [`ApiError::Api`] with the body's `message`
///   or `error` field.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == 429 {
        return Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Read the body and deserialize it as JSON.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp.text().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Http(e)
        }
    })?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Append non-empty query parameters to `path`, percent-encoding values.
pub fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect::<Vec<_>>();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .filter(|m| !m.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        assert_eq!(parse_retry_after(&mock_response_with_retry_after("120")), 120);
    }

    #[test]
    fn parse_retry_after_defaults() {
        assert_eq!(parse_retry_after(&mock_response(429, "")), 60);
        assert_eq!(
            parse_retry_after(&mock_response_with_retry_after("soon")),
            60
        );
    }

    #[tokio::test]
    async fn rate_limited_response() {
        let err = check_response(mock_response_with_retry_after("30"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn api_error_extracts_message_field() {
        let resp = mock_response(400, r#"{"message":"Código inválido","success":false}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("Código inválido"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn api_error_falls_back_to_error_field() {
        let resp = mock_response(422, r#"{"error":"prompt vacío"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(
            matches!(err, ApiError::Api { status: 422, message: Some(ref m) } if m == "prompt vacío")
        );
    }

    #[tokio::test]
    async fn api_error_without_json_has_no_message() {
        let err = check_response(mock_response(500, "Internal Server Error"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, message: None }));
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }

    #[tokio::test]
    async fn decode_reports_parse_errors() {
        let err = decode::<serde_json::Value>(mock_response(200, "not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn with_query_skips_empty_values() {
        let url = with_query(
            "/academic-programs",
            &[
                ("nivel", Some("maestría".into())),
                ("modalidad", None),
                ("municipio", Some(String::new())),
                ("limit", Some("3300".into())),
            ],
        );
        assert_eq!(url, "/academic-programs?nivel=maestr%C3%ADa&limit=3300");
        assert_eq!(with_query("/excel-institutions", &[]), "/excel-institutions");
    }
}
