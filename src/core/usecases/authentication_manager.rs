use std::collections::BTreeMap;

use crate::core::credentials::Credential;
use crate::core::error::AuthenticationFailure;
use crate::core::identity::Authentication;

use super::ports::{CredentialHandler, PostAuthenticationPlugin, PreAuthenticationPlugin};

/// Composes the ordered pre-auth plugins, credential handlers, and post-auth
/// plugins into a single authentication pipeline.
///
/// Handler order matters: the first handler whose `supports` returns true
/// for the credential's kind is the only one consulted. A credential kind
/// with no supporting handler is rejected with
/// [`AuthenticationFailure::NoSupportingHandler`] rather than silently
/// passed through.
pub struct AuthenticationManager {
    handlers: Vec<Box<dyn CredentialHandler>>,
    pre_auth_plugins: Vec<Box<dyn PreAuthenticationPlugin>>,
    post_auth_plugins: Vec<Box<dyn PostAuthenticationPlugin>>,
}

impl AuthenticationManager {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            pre_auth_plugins: Vec::new(),
            post_auth_plugins: Vec::new(),
        }
    }

    pub fn with_handler(mut self, handler: Box<dyn CredentialHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn with_pre_auth_plugin(mut self, plugin: Box<dyn PreAuthenticationPlugin>) -> Self {
        self.pre_auth_plugins.push(plugin);
        self
    }

    pub fn with_post_auth_plugin(mut self, plugin: Box<dyn PostAuthenticationPlugin>) -> Self {
        self.post_auth_plugins.push(plugin);
        self
    }

    /// Authenticates every credential in `credentials` against the
    /// pipeline, requiring `credentials` to be non-empty and every one of
    /// them to succeed (spec.md §4.1's `AuthenticationRequest { credentials,
    /// ... }` composition policy). Credentials are tried in order and a
    /// failure on one does not short-circuit the rest: every failure is
    /// collected so the caller sees the full picture rather than just the
    /// first rejection.
    pub fn authenticate(&self, credentials: &[Credential]) -> Result<Vec<Authentication>, AuthenticationFailure> {
        if credentials.is_empty() {
            return Err(AuthenticationFailure::rejected(
                "authentication-manager",
                "at least one credential is required",
            ));
        }

        let mut authentications = Vec::with_capacity(credentials.len());
        let mut failures = BTreeMap::new();

        for credential in credentials {
            match self.authenticate_one(credential) {
                Ok(authentication) => authentications.push(authentication),
                Err(failure) => {
                    failures.insert(credential.kind().to_string(), failure.to_string());
                }
            }
        }

        if !failures.is_empty() {
            return Err(AuthenticationFailure::partially_failed(failures));
        }

        Ok(authentications)
    }

    fn authenticate_one(&self, credential: &Credential) -> Result<Authentication, AuthenticationFailure> {
        for plugin in &self.pre_auth_plugins {
            plugin.before_authenticate(credential)?;
        }

        let handler = self
            .handlers
            .iter()
            .find(|handler| handler.supports(credential.kind()))
            .ok_or_else(|| AuthenticationFailure::no_supporting_handler(credential.kind()))?;

        let authentication = handler.authenticate(credential)?;

        for plugin in &self.post_auth_plugins {
            plugin.after_authenticate(&authentication);
        }

        Ok(authentication)
    }
}

impl Default for AuthenticationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::Principal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Accepts(&'static str);

    impl CredentialHandler for Accepts {
        fn supports(&self, credential_kind: &str) -> bool {
            credential_kind == self.0
        }

        fn authenticate(&self, credential: &Credential) -> Result<Authentication, AuthenticationFailure> {
            Ok(Authentication::new(
                Principal::new(credential.payload()),
                chrono::Utc::now(),
                self.0,
            ))
        }
    }

    struct AlwaysRejects;

    impl CredentialHandler for AlwaysRejects {
        fn supports(&self, _credential_kind: &str) -> bool {
            true
        }

        fn authenticate(&self, _credential: &Credential) -> Result<Authentication, AuthenticationFailure> {
            Err(AuthenticationFailure::rejected("always-rejects", "no"))
        }
    }

    struct CountingPostAuthPlugin(Arc<AtomicUsize>);

    impl PostAuthenticationPlugin for CountingPostAuthPlugin {
        fn after_authenticate(&self, _authentication: &Authentication) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn first_supporting_handler_wins() {
        let manager = AuthenticationManager::new()
            .with_handler(Box::new(Accepts("password")))
            .with_handler(Box::new(AlwaysRejects));

        let credential = Credential::new("password", "alice");
        let authentications = manager.authenticate(&[credential]).unwrap();
        assert_eq!(authentications.len(), 1);
        assert_eq!(authentications[0].principal.id(), "alice");
    }

    #[test]
    fn no_supporting_handler_is_reported() {
        let manager = AuthenticationManager::new().with_handler(Box::new(Accepts("password")));
        let credential = Credential::new("x509", "cert-bytes");
        let err = manager.authenticate(&[credential]).unwrap_err();
        assert_eq!(
            err,
            AuthenticationFailure::partially_failed(
                [("x509".to_string(), AuthenticationFailure::no_supporting_handler("x509").to_string())].into()
            )
        );
    }

    #[test]
    fn post_auth_plugins_run_only_on_success() {
        let counter = Arc::new(AtomicUsize::new(0));
        let manager = AuthenticationManager::new()
            .with_handler(Box::new(AlwaysRejects))
            .with_post_auth_plugin(Box::new(CountingPostAuthPlugin(counter.clone())));

        let credential = Credential::new("password", "alice");
        assert!(manager.authenticate(&[credential]).is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_credential_list_is_rejected() {
        let manager = AuthenticationManager::new().with_handler(Box::new(Accepts("password")));
        let err = manager.authenticate(&[]).unwrap_err();
        assert_eq!(err, AuthenticationFailure::rejected("authentication-manager", "at least one credential is required"));
    }

    #[test]
    fn all_credentials_must_succeed() {
        let manager = AuthenticationManager::new()
            .with_handler(Box::new(Accepts("password")))
            .with_handler(Box::new(Accepts("totp")));

        let credentials = vec![Credential::new("password", "alice"), Credential::new("x509", "cert-bytes")];
        let err = manager.authenticate(&credentials).unwrap_err();
        assert!(matches!(err, AuthenticationFailure::PartiallyFailed { .. }));
    }
}
