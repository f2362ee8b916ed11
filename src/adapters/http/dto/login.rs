use serde::{Deserialize, Serialize};

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequestBody {
    pub credential_kind: String,
    pub credential_payload: String,
    #[serde(default)]
    pub long_term: bool,
    /// Re-authenticate onto this existing session instead of minting a
    /// fresh one.
    #[serde(default)]
    pub existing_session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponseBody {
    pub session_id: String,
    pub principal_id: String,
}
