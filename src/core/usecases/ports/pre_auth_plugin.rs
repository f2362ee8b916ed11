//! Port for plugins consulted before a credential reaches any handler.

use crate::core::credentials::Credential;
use crate::core::error::AuthenticationFailure;

/// A plugin given a chance to reject a login attempt before any
/// `CredentialHandler` is asked to authenticate it (rate limiting, IP
/// denylists, and similar pre-checks).
pub trait PreAuthenticationPlugin: Send + Sync {
    fn before_authenticate(&self, credential: &Credential) -> Result<(), AuthenticationFailure>;
}
