use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use symptom_core::{DiagnosisSource, SymptomClient, SymptomError, SymptomQuery};

#[derive(Debug, Clone)]
struct Recorded {
    content_type: Option<String>,
    body: String,
}

#[derive(Clone)]
struct StubState {
    seen: Arc<Mutex<Vec<Recorded>>>,
    status: StatusCode,
    reply: &'static str,
}

async fn check_symptoms(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen.lock().unwrap().push(Recorded { content_type, body });
    (state.status, state.reply.to_string())
}

/// Starts a stub endpoint on an ephemeral port and returns its URL.
fn spawn_stub(status: StatusCode, reply: &'static str) -> (String, Arc<Mutex<Vec<Recorded>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        seen: seen.clone(),
        status,
        reply,
    };
    let app = Router::new()
        .route("/check-symptoms", post(check_symptoms))
        .with_state(state);

    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let bound = server.local_addr();
    tokio::spawn(server);

    (format!("http://{}/check-symptoms", bound), seen)
}

const SUCCESS_BODY: &str =
    r#"{"diagnosis":"Tension Headache","confidence":0.85,"recommendation":"Rest and hydrate"}"#;

#[tokio::test]
async fn test_success_round_trip_matches_contract() {
    let (url, seen) = spawn_stub(StatusCode::OK, SUCCESS_BODY);
    let client = SymptomClient::new(url);

    let query = SymptomQuery::new("  throbbing headache  ").unwrap();
    let result = client.check_symptoms(&query).await.unwrap();

    assert_eq!(result.diagnosis, "Tension Headache");
    assert_eq!(result.confidence, 0.85);
    assert_eq!(result.recommendation, "Rest and hydrate");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(seen[0].body, r#"{"symptoms":"throbbing headache"}"#);
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let (url, seen) = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, "model not loaded");
    let client = SymptomClient::new(url);

    let err = client
        .check_symptoms(&SymptomQuery::new("Fever").unwrap())
        .await
        .unwrap_err();

    match err {
        SymptomError::HttpError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 500);
            assert!(message.contains("model not loaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_parsing_error() {
    let (url, _seen) = spawn_stub(StatusCode::OK, r#"{"diagnosis":"Unclear"}"#);
    let client = SymptomClient::new(url);

    let err = client
        .check_symptoms(&SymptomQuery::new("Cough").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SymptomError::ParsingError(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = SymptomClient::new(format!("http://127.0.0.1:{}/check-symptoms", port));

    let err = client
        .check_symptoms(&SymptomQuery::new("Nausea").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SymptomError::RequestError(_)));
}

#[test]
fn test_default_client_targets_local_backend() {
    assert_eq!(
        SymptomClient::default().endpoint(),
        "http://127.0.0.1:8000/check-symptoms"
    );
}
