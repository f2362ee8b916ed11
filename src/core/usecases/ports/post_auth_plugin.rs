//! Port for plugins consulted after a credential has been successfully
//! authenticated, before the session is created.

use crate::core::identity::Authentication;

/// A plugin given the finished `Authentication` for side effects (auditing,
/// attribute enrichment already baked into the authentication) — it cannot
/// itself fail the login; rejection belongs to a `PreAuthenticationPlugin`
/// or the credential handler.
pub trait PostAuthenticationPlugin: Send + Sync {
    fn after_authenticate(&self, authentication: &Authentication);
}
