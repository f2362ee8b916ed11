use axum::extract::State;
use axum::http::header;
use axum::Json;

use crate::adapters::http::dto::GrantAccessRequestBody;
use crate::adapters::http::state::AppState;
use crate::core::credentials::Credential;
use crate::core::usecases::contracts::ServiceAccessRequest;

/// Relying-party-facing grant endpoint. Always 200 OK: success and failure
/// alike are rendered by the resolved `ServiceAccessResponseFactory`, so
/// the body — not the status line — carries the outcome.
pub async fn grant_access(
    State(state): State<AppState>,
    Json(body): Json<GrantAccessRequestBody>,
) -> ([(header::HeaderName, &'static str); 1], String) {
    let mut request = ServiceAccessRequest::new(body.session_id, body.resource_identifier);
    if let (Some(kind), Some(payload)) = (body.force_authentication_credential_kind, body.force_authentication_credential_payload) {
        request = request.with_force_authentication(Credential::new(kind, payload));
    }

    let rendered = state.cas.grant_access_response(request);
    ([(header::CONTENT_TYPE, "application/json")], rendered)
}
