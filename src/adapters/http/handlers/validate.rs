use axum::extract::State;
use axum::http::header;
use axum::Json;

use crate::adapters::http::dto::ValidateRequestBody;
use crate::adapters::http::state::AppState;
use crate::core::credentials::Credential;
use crate::core::usecases::contracts::TokenServiceAccessRequest;

/// Relying-party-facing validate endpoint. Folds delegation (proxy-granting)
/// into the same call when a delegation credential is present, and — like
/// `grant_access` — always answers 200 OK with the factory-rendered body.
pub async fn validate(
    State(state): State<AppState>,
    Json(body): Json<ValidateRequestBody>,
) -> ([(header::HeaderName, &'static str); 1], String) {
    let mut request = TokenServiceAccessRequest::new(body.access_id, body.resource_identifier);
    if let (Some(kind), Some(payload)) = (body.delegation_credential_kind, body.delegation_credential_payload) {
        request = request.with_delegation_credential(Credential::new(kind, payload));
    }

    let rendered = state.cas.validate_response(request);
    ([(header::CONTENT_TYPE, "application/json")], rendered)
}
