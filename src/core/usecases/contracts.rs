use crate::core::credentials::Credential;
use crate::core::identity::Authentication;

/// Request to establish a new session, or to force re-authentication onto
/// an existing one.
///
/// `credentials` is the non-empty list spec.md §4.1 names
/// (`AuthenticationRequest { credentials, ... }`): every credential in it
/// must authenticate successfully for the request to succeed (see
/// `AuthenticationManager::authenticate`). `LoginRequest::new` covers the
/// common single-credential case; `with_credentials` supplies the full
/// list for a multi-factor login.
pub struct LoginRequest {
    pub credentials: Vec<Credential>,
    pub long_term: bool,
    /// When set, re-authenticate onto this existing session instead of
    /// minting a new one (`forceAuthentication`).
    pub existing_session_id: Option<String>,
}

impl LoginRequest {
    pub fn new(credential: Credential, long_term: bool) -> Self {
        Self {
            credentials: vec![credential],
            long_term,
            existing_session_id: None,
        }
    }

    pub fn with_credentials(credentials: Vec<Credential>, long_term: bool) -> Self {
        Self {
            credentials,
            long_term,
            existing_session_id: None,
        }
    }

    pub fn force_authentication_onto(mut self, session_id: impl Into<String>) -> Self {
        self.existing_session_id = Some(session_id.into());
        self
    }
}

pub struct LoginResponse {
    pub session_id: String,
    pub authentication: Authentication,
}

/// A response from a `logout` call: the set of sessions that were
/// cascade-invalidated, and whether any relying party failed to
/// acknowledge the local-session-destroyed notification.
pub struct LogoutResponse {
    pub session_ids: Vec<String>,
    pub relying_parties_not_destroyed: Vec<String>,
}

/// Request to grant a new access (service ticket) against an existing
/// session.
///
/// `force_authentication` mirrors the CAS `renew`/`forceAuthentication`
/// shape: when set, `credentials` must be non-empty and every one of them
/// is authenticated before the access is minted (see
/// `AuthenticationManager::authenticate`). A principal mismatch against the
/// session's current principal tears down the old session (its outstanding
/// accesses are reported back via `GrantAccessResponse::remaining_accesses`)
/// and replaces it with a freshly authenticated one; a matching principal
/// simply appends the new `Authentication`(s) onto the existing session.
///
/// The non-proxied/proxied split spec.md §4.6.5 draws between a front-end
/// caller and a relying party isn't carried as a field here — it's
/// expressed structurally by which of `CentralAuthenticationService::
/// grant_access` (propagates errors as a `Result`) or `grant_access_response`
/// (always renders through the resolved `ServiceAccessResponseFactory`) the
/// caller invokes.
pub struct ServiceAccessRequest {
    pub session_id: String,
    pub resource_identifier: String,
    pub force_authentication: bool,
    pub credentials: Vec<Credential>,
}

impl ServiceAccessRequest {
    pub fn new(session_id: impl Into<String>, resource_identifier: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            resource_identifier: resource_identifier.into(),
            force_authentication: false,
            credentials: Vec::new(),
        }
    }

    pub fn with_force_authentication(mut self, credential: Credential) -> Self {
        self.force_authentication = true;
        self.credentials = vec![credential];
        self
    }

    pub fn with_force_authentication_credentials(mut self, credentials: Vec<Credential>) -> Self {
        self.force_authentication = true;
        self.credentials = credentials;
        self
    }
}

/// Request to validate a previously granted access (service or proxy
/// ticket), optionally attempting delegation in the same call.
///
/// `delegation_credentials`, when non-empty, is authenticated as a whole
/// (every credential must succeed) and — on success — used to mint a
/// delegated session parented on this access
/// (`Access::create_delegated_session`). A delegation failure is recorded
/// but never aborts the primary validation that follows it.
pub struct TokenServiceAccessRequest {
    pub access_id: String,
    pub resource_identifier: String,
    pub delegation_credentials: Vec<Credential>,
}

impl TokenServiceAccessRequest {
    pub fn new(access_id: impl Into<String>, resource_identifier: impl Into<String>) -> Self {
        Self {
            access_id: access_id.into(),
            resource_identifier: resource_identifier.into(),
            delegation_credentials: Vec::new(),
        }
    }

    pub fn with_delegation_credential(mut self, credential: Credential) -> Self {
        self.delegation_credentials = vec![credential];
        self
    }

    pub fn with_delegation_credentials(mut self, credentials: Vec<Credential>) -> Self {
        self.delegation_credentials = credentials;
        self
    }
}

/// Outcome of a successful `grant_access`.
///
/// `session_id` names the session the access now belongs to — identical to
/// the request's `session_id` unless `force_authentication` swapped in a
/// fresh session for a different principal. `authentication` is set only
/// when `force_authentication` actually ran. `remaining_accesses` carries
/// the resource identifiers of the accesses that were still outstanding on
/// a session destroyed by a principal change.
pub struct GrantAccessResponse {
    pub access_id: String,
    pub session_id: String,
    pub authentication: Option<Authentication>,
    pub remaining_accesses: Vec<String>,
}

/// Outcome of `validate`. On delegation failure the primary outcome still
/// governs the response — `delegation_failure` is informational only and
/// never short-circuits the primary validation (see `CentralAuthenticationService::validate`).
pub struct ValidateOutcome {
    pub authentication: Authentication,
    pub delegation_failure: Option<String>,
}
