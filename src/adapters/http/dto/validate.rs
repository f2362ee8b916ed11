use serde::Deserialize;

/// Request body for `POST /validate`.
///
/// Also proxied, for the same reason as `GrantAccessRequestBody`: the
/// resolved response factory renders both the success and the failure
/// body.
#[derive(Debug, Deserialize)]
pub struct ValidateRequestBody {
    pub access_id: String,
    pub resource_identifier: String,
    #[serde(default)]
    pub delegation_credential_kind: Option<String>,
    #[serde(default)]
    pub delegation_credential_payload: Option<String>,
}
