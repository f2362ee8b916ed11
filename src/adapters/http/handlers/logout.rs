use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::dto::{LogoutPrincipalRequestBody, LogoutResponseBody, LogoutSessionRequestBody};
use crate::adapters::http::state::AppState;

/// Never fails on an unknown or already-invalidated session id — it simply
/// has nothing left to cascade-invalidate.
pub async fn logout_session(
    State(state): State<AppState>,
    Json(body): Json<LogoutSessionRequestBody>,
) -> (StatusCode, Json<LogoutResponseBody>) {
    let response = state.cas.logout_session(&body.session_id);
    (
        StatusCode::OK,
        Json(LogoutResponseBody {
            session_ids: response.session_ids,
            relying_parties_not_destroyed: response.relying_parties_not_destroyed,
        }),
    )
}

/// Administrative endpoint: invalidates every live session for a principal.
/// Never fails on an unknown principal — it simply has no sessions to
/// invalidate.
pub async fn logout_principal(
    State(state): State<AppState>,
    Json(body): Json<LogoutPrincipalRequestBody>,
) -> (StatusCode, Json<LogoutResponseBody>) {
    let response = state.cas.logout_principal(&body.principal_id);
    (
        StatusCode::OK,
        Json(LogoutResponseBody {
            session_ids: response.session_ids,
            relying_parties_not_destroyed: response.relying_parties_not_destroyed,
        }),
    )
}
