use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher as Argon2Hasher, PasswordVerifier};

use crate::core::credentials::Credential;
use crate::core::error::AuthenticationFailure;
use crate::core::identity::{Authentication, Principal};
use crate::core::usecases::ports::{Clock, CredentialHandler};

/// Reference `CredentialHandler` for username/password credentials.
///
/// The registry of principal-id -> password hash it holds is a stand-in for
/// whatever external identity store a real deployment would consult; this
/// crate's core has no identity-repository port of its own, by design —
/// credential handlers are external collaborators.
///
/// Expected `Credential` shape: `kind == "password"`, `payload` formatted
/// `"<principal-id>:<raw password>"`.
pub struct PasswordCredentialHandler {
    hashes: RwLock<HashMap<String, String>>,
    clock: Arc<dyn Clock>,
}

impl PasswordCredentialHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            hashes: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Register (or replace) a principal's password. Hashing happens once
    /// here, at registration time, never on the authenticate hot path.
    pub fn register(&self, principal_id: impl Into<String>, raw_password: &str) {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(raw_password.as_bytes(), &salt)
            .expect("argon2 hashing with a freshly generated salt cannot fail")
            .to_string();
        self.hashes.write().unwrap().insert(principal_id.into(), hash);
    }
}

impl CredentialHandler for PasswordCredentialHandler {
    fn supports(&self, credential_kind: &str) -> bool {
        credential_kind == "password"
    }

    fn authenticate(&self, credential: &Credential) -> Result<Authentication, AuthenticationFailure> {
        let (principal_id, raw_password) = credential
            .payload()
            .split_once(':')
            .ok_or_else(|| AuthenticationFailure::rejected("password", "malformed credential payload"))?;

        let hashes = self.hashes.read().unwrap();
        let stored = hashes
            .get(principal_id)
            .ok_or_else(|| AuthenticationFailure::rejected("password", "unknown principal"))?;

        let parsed_hash =
            PasswordHash::new(stored).map_err(|_| AuthenticationFailure::rejected("password", "corrupt stored hash"))?;

        Argon2::default()
            .verify_password(raw_password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthenticationFailure::rejected("password", "incorrect password"))?;

        Ok(Authentication::new(Principal::new(principal_id), self.clock.now(), "password"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_opt(0, 0).unwrap()
        }
    }

    #[test]
    fn supports_only_password_kind() {
        let handler = PasswordCredentialHandler::new(Arc::new(FixedClock));
        assert!(handler.supports("password"));
        assert!(!handler.supports("x509"));
    }

    #[test]
    fn correct_password_authenticates() {
        let handler = PasswordCredentialHandler::new(Arc::new(FixedClock));
        handler.register("alice", "hunter2");
        let credential = Credential::new("password", "alice:hunter2");
        let authentication = handler.authenticate(&credential).unwrap();
        assert_eq!(authentication.principal.id(), "alice");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let handler = PasswordCredentialHandler::new(Arc::new(FixedClock));
        handler.register("alice", "hunter2");
        let credential = Credential::new("password", "alice:wrong");
        assert!(handler.authenticate(&credential).is_err());
    }

    #[test]
    fn unknown_principal_is_rejected() {
        let handler = PasswordCredentialHandler::new(Arc::new(FixedClock));
        let credential = Credential::new("password", "ghost:anything");
        assert!(handler.authenticate(&credential).is_err());
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let handler = PasswordCredentialHandler::new(Arc::new(FixedClock));
        let credential = Credential::new("password", "no-colon-here");
        assert!(handler.authenticate(&credential).is_err());
    }
}
