use serde::Deserialize;

/// Request body for `POST /grant-access`.
///
/// This route is proxied: the response is always 200 OK with whatever body
/// the resolved `ServiceAccessResponseFactory` renders, success or failure
/// alike, so relying parties see a uniform content type regardless of
/// outcome.
#[derive(Debug, Deserialize)]
pub struct GrantAccessRequestBody {
    pub session_id: String,
    pub resource_identifier: String,
    #[serde(default)]
    pub force_authentication_credential_kind: Option<String>,
    #[serde(default)]
    pub force_authentication_credential_payload: Option<String>,
}
