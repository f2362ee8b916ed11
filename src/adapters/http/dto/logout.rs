use serde::{Deserialize, Serialize};

/// Request body for `POST /logout/session`.
#[derive(Debug, Deserialize)]
pub struct LogoutSessionRequestBody {
    pub session_id: String,
}

/// Request body for `POST /logout/principal`.
#[derive(Debug, Deserialize)]
pub struct LogoutPrincipalRequestBody {
    pub principal_id: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponseBody {
    pub session_ids: Vec<String>,
    pub relying_parties_not_destroyed: Vec<String>,
}
