//! Port for pluggable credential verification.
//!
//! `AuthenticationManager` holds an ordered list of handlers and asks each in
//! turn whether it `supports` a presented credential's kind; the first
//! handler that claims support is the only one that ever sees the payload.

use crate::core::credentials::Credential;
use crate::core::error::AuthenticationFailure;
use crate::core::identity::Authentication;

/// Contract for a single credential verification mechanism (password,
/// client certificate, upstream HTTPS endpoint check, ...).
pub trait CredentialHandler: Send + Sync {
    /// Whether this handler is able to process a credential of this kind.
    fn supports(&self, credential_kind: &str) -> bool;

    /// Attempt to authenticate the presented credential, producing the
    /// resulting principal and authentication metadata on success.
    fn authenticate(&self, credential: &Credential) -> Result<Authentication, AuthenticationFailure>;
}
