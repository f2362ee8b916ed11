use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::dto::{LoginRequestBody, LoginResponseBody};
use crate::adapters::http::error::HttpError;
use crate::adapters::http::state::AppState;
use crate::core::credentials::Credential;
use crate::core::usecases::contracts::LoginRequest;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<(StatusCode, Json<LoginResponseBody>), HttpError> {
    let credential = Credential::new(body.credential_kind, body.credential_payload);
    let mut request = LoginRequest::new(credential, body.long_term);
    if let Some(session_id) = body.existing_session_id {
        request = request.force_authentication_onto(session_id);
    }

    let response = state.cas.login(request).map_err(HttpError::from_core_error)?;
    Ok((
        StatusCode::OK,
        Json(LoginResponseBody {
            session_id: response.session_id,
            principal_id: response.authentication.principal.id().to_string(),
        }),
    ))
}
