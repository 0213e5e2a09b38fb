//! End-to-end client tests against a local `tiny_http` server.
//!
//! Each test serves a fixed list of canned responses on `127.0.0.1:0` and
//! records the requests it received.

use std::io::Read;
use std::sync::mpsc;
use std::thread;

use acad_api::{AcademiaClient, ApiError, ChatRequest, Endpoint, InstitutionQuery, ModelOptions, ProgramQuery};
use acad_config::ApiConfig;
use acad_core::entities::{AdminRegistration, ApplicationSubmission, VerificationRequest};
use pretty_assertions::assert_eq;

struct Recorded {
    method: String,
    url: String,
    body: String,
}

/// Serve `responses` in order, then stop. Returns the base URL and a
/// receiver yielding one [`Recorded`] per handled request.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, mpsc::Receiver<Recorded>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok(mut request) = server.recv() else {
                return;
            };
            let mut received = String::new();
            request.as_reader().read_to_string(&mut received).unwrap();
            tx.send(Recorded {
                method: request.method().to_string(),
                url: request.url().to_string(),
                body: received,
            })
            .unwrap();
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            request.respond(response).unwrap();
        }
    });

    (format!("http://127.0.0.1:{port}/dev"), rx)
}

fn client(base_url: &str) -> AcademiaClient {
    AcademiaClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn lists_programs_with_filters() {
    let (base, rx) = serve(vec![(
        200,
        r#"{"programs":[{"id":"p1","nombre":"Medicina","institucionId":"1101","nivel":"Pregrado","modalidad":"Presencial","duracion":12,"creditos":240,"codigo":"S-1","estado":"Activo","municipio":"Bogotá"}],"count":1}"#,
    )]);

    let page = client(&base)
        .list_programs(&ProgramQuery {
            level: Some("pregrado".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.programs.len(), 1);
    assert_eq!(page.programs[0].name, "Medicina");
    let recorded = rx.recv().unwrap();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.url, "/dev/academic-programs?nivel=pregrado");
}

#[tokio::test]
async fn find_institution_follows_next_token() {
    let (base, rx) = serve(vec![
        (
            200,
            r#"{"institutions":[{"id":"1","nombre":"ITM","ciudad":"Medellín","tipoInstitucion":"Institución Universitaria","codigoInstitucion":"1"}],"count":1,"nextToken":"t2"}"#,
        ),
        (
            200,
            r#"{"institutions":[{"id":"2","nombre":"Universidad del Valle","ciudad":"Cali","tipoInstitucion":"Universidad","codigoInstitucion":"2"}],"count":1}"#,
        ),
    ]);

    let found = client(&base).find_institution("2", Some(1)).await.unwrap();

    assert_eq!(found.map(|i| i.name).as_deref(), Some("Universidad del Valle"));
    assert_eq!(rx.recv().unwrap().url, "/dev/excel-institutions?limit=1");
    assert_eq!(rx.recv().unwrap().url, "/dev/excel-institutions?limit=1&nextToken=t2");
}

#[tokio::test]
async fn find_institution_returns_none_when_exhausted() {
    let (base, _rx) = serve(vec![(200, r#"{"institutions":[],"count":0}"#)]);
    let found = client(&base).find_institution("404", None).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn institution_listing_server_error() {
    let (base, _rx) = serve(vec![(500, r#"{"message":"boom"}"#)]);
    let err = client(&base)
        .list_institutions(&InstitutionQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 500, .. }));
    assert_eq!(
        err.user_message(Endpoint::Institutions),
        "No se pudo cargar la información de la institución"
    );
}

#[tokio::test]
async fn submits_application_as_json() {
    let (base, rx) = serve(vec![(200, r#"{"message":"Solicitud recibida"}"#)]);
    let submission = ApplicationSubmission {
        first_name: "Ana".into(),
        last_name: "Gómez".into(),
        email: "ana@example.com".into(),
        phone: "3001234567".into(),
        program_name: "Medicina - Universidad de Antioquia".into(),
        program_id: "p1".into(),
    };

    let ack = client(&base).submit_application(&submission).await.unwrap();

    assert_eq!(ack.message, "Solicitud recibida");
    let recorded = rx.recv().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.url, "/dev/submit-application");
    let body: serde_json::Value = serde_json::from_str(&recorded.body).unwrap();
    assert_eq!(body["nombre"], "Ana");
    assert_eq!(body["programName"], "Medicina - Universidad de Antioquia");
}

#[tokio::test]
async fn register_then_verify() {
    let (base, rx) = serve(vec![
        (200, r#"{"username":"laura.rios","message":"Revisa tu correo","success":true}"#),
        (400, r#"{"message":"Código inválido","success":false}"#),
    ]);
    let client = client(&base);

    let receipt = client
        .register_admin(&AdminRegistration {
            first_name: "Laura".into(),
            last_name: "Ríos".into(),
            institution_legal_name: "Institución Universitaria ITM".into(),
            institution_abbreviation: "ITM".into(),
            email: "laura@itm.edu.co".into(),
            password: "Secreto123".into(),
        })
        .await
        .unwrap();
    assert_eq!(receipt.username, "laura.rios");

    let err = client
        .verify_email(&VerificationRequest {
            username: receipt.username,
            code: "123456".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message(Endpoint::VerifyEmail), "Código inválido");

    assert_eq!(rx.recv().unwrap().url, "/dev/register");
    let verify = rx.recv().unwrap();
    assert_eq!(verify.url, "/dev/verify-email");
    assert!(verify.body.contains("\"code\":\"123456\""));
}

#[tokio::test]
async fn resend_code_posts_username() {
    let (base, rx) = serve(vec![(200, r#"{"message":"Código reenviado"}"#)]);
    let ack = client(&base)
        .resend_verification_code("laura.rios")
        .await
        .unwrap();
    assert_eq!(ack.message, "Código reenviado");
    assert!(ack.success);
    assert_eq!(rx.recv().unwrap().body, r#"{"username":"laura.rios"}"#);
}

#[tokio::test]
async fn chat_rate_limit_is_localized() {
    let (base, _rx) = serve(vec![(429, "")]);
    let err = client(&base)
        .ask_llm(&ChatRequest {
            prompt: "¿Qué estudiar?".into(),
            system_prompt: String::new(),
            conversation_id: None,
            model_options: ModelOptions {
                temperature: 0.7,
                model_id: "amazon.nova-lite-v1:0".into(),
            },
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::RateLimited { retry_after_secs: 60 }));
    assert!(err.user_message(Endpoint::Chat).starts_with("Has excedido"));
}
