//! Integration tests for the demo HTTP front-end, driven through the router
//! directly with `tower::ServiceExt::oneshot` rather than a bound socket.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use centralauth::adapters::http::{create_router, AppState};
use centralauth::bootstrap::{wire_reference_authority, Config};
use centralauth::core::usecases::contracts::{LoginRequest, ServiceAccessRequest};
use centralauth::core::credentials::Credential;
use serde_json::{json, Value};
use tower::ServiceExt;

fn config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        tgt_ttl_seconds: 60 * 60 * 24 * 14,
        tgt_sliding_ttl_seconds: 60 * 30,
        st_ttl_seconds: 10,
    }
}

fn request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_reports_ok() {
    let (cas, password_handler) = wire_reference_authority(&config());
    let router = create_router(AppState::new(cas, password_handler));

    let response = router.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_then_grant_access_renders_success_through_the_factory() {
    let (cas, password_handler) = wire_reference_authority(&config());
    password_handler.register("alice", "secret");
    let router = create_router(AppState::new(cas, password_handler));

    let login_response = router
        .clone()
        .oneshot(request(
            "POST",
            "/login",
            json!({"credential_kind": "password", "credential_payload": "alice:secret"}),
        ))
        .await
        .unwrap();
    assert_eq!(login_response.status(), StatusCode::OK);
    let login_body = json_body(login_response).await;
    let session_id = login_body["session_id"].as_str().unwrap().to_string();
    assert_eq!(login_body["principal_id"], "alice");

    let grant_response = router
        .clone()
        .oneshot(request(
            "POST",
            "/grant-access",
            json!({"session_id": session_id, "resource_identifier": "https://app.example/login"}),
        ))
        .await
        .unwrap();
    assert_eq!(grant_response.status(), StatusCode::OK);
    let grant_body = json_body(grant_response).await;
    assert_eq!(grant_body["status"], "SUCCESS");
    assert_eq!(grant_body["principal"], "alice");
}

#[tokio::test]
async fn validate_renders_success_then_failure_on_reuse_through_the_router() {
    let (cas, password_handler) = wire_reference_authority(&config());
    password_handler.register("alice", "secret");

    // mint the access directly against the orchestrator, the way a relying
    // party would already hold one obtained out of band (e.g. a redirect)
    // before ever calling the HTTP validate endpoint.
    let login = cas.login(LoginRequest::new(Credential::new("password", "alice:secret"), false)).unwrap();
    let granted = cas
        .grant_access(ServiceAccessRequest::new(login.session_id, "https://app.example/login"))
        .unwrap();

    let router = create_router(AppState::new(cas, password_handler));

    let first = router
        .clone()
        .oneshot(request(
            "POST",
            "/validate",
            json!({"access_id": granted.access_id, "resource_identifier": "https://app.example/login"}),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(json_body(first).await["status"], "SUCCESS");

    let second = router
        .clone()
        .oneshot(request(
            "POST",
            "/validate",
            json!({"access_id": granted.access_id, "resource_identifier": "https://app.example/login"}),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(json_body(second).await["status"], "FAILURE");
}

#[tokio::test]
async fn login_with_bad_credential_is_rejected_with_401() {
    let (cas, password_handler) = wire_reference_authority(&config());
    password_handler.register("alice", "secret");
    let router = create_router(AppState::new(cas, password_handler));

    let response = router
        .oneshot(request(
            "POST",
            "/login",
            json!({"credential_kind": "password", "credential_payload": "alice:wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
