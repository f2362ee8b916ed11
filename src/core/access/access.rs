use chrono::{DateTime, Duration, Utc};

use crate::core::error::{AccessValidationFailure, InvalidatedSession};

use super::UsagePolicy;

/// A resource-scoped, validatable capability belonging to a session (Service
/// Ticket / Proxy Ticket in CAS terms).
///
/// `id` is unique across all live sessions — `SessionStorage` indexes
/// accesses by it directly. `owning_session_id` is a back-reference by id
/// only (never a strong reference to the `Session` itself): circular
/// ownership between `Session` and `Access` is expressed as indices into the
/// store, not raw Rust ownership cycles.
#[derive(Debug, Clone)]
pub struct Access {
    id: String,
    resource_identifier: String,
    owning_session_id: String,
    created: DateTime<Utc>,
    ttl: Duration,
    used: bool,
    local_session_destroyed: bool,
    requires_storage: bool,
    usage_policy: UsagePolicy,
}

impl Access {
    pub fn new(
        id: impl Into<String>,
        resource_identifier: impl Into<String>,
        owning_session_id: impl Into<String>,
        created: DateTime<Utc>,
        ttl: Duration,
        requires_storage: bool,
        usage_policy: UsagePolicy,
    ) -> Self {
        Self {
            id: id.into(),
            resource_identifier: resource_identifier.into(),
            owning_session_id: owning_session_id.into(),
            created,
            ttl,
            used: false,
            local_session_destroyed: false,
            requires_storage,
            usage_policy,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn resource_identifier(&self) -> &str {
        &self.resource_identifier
    }

    pub fn owning_session_id(&self) -> &str {
        &self.owning_session_id
    }

    pub fn requires_storage(&self) -> bool {
        self.requires_storage
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn is_local_session_destroyed(&self) -> bool {
        self.local_session_destroyed
    }

    pub fn usage_policy(&self) -> UsagePolicy {
        self.usage_policy
    }

    /// Whether this access's own (short) lifetime has elapsed as of `now`.
    /// Distinct from the owning session's expiration — a service ticket
    /// typically expires long before its ticket-granting session does.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.created + self.ttl
    }

    /// Validate this access against its usage policy and lifetime.
    ///
    /// `SELF_VALIDATING`: no state change. `BOUNDED_USES(n)`: decrements
    /// remaining uses, marking `used` once exhausted. `LOGOUT_ONLY`: always
    /// succeeds without mutating state (the access is retained purely to
    /// receive a later cascade-invalidate notification).
    pub fn validate(&mut self, now: DateTime<Utc>) -> Result<(), AccessValidationFailure> {
        if self.is_expired(now) {
            return Err(AccessValidationFailure::TokenExpired);
        }

        match &mut self.usage_policy {
            UsagePolicy::SelfValidating => Ok(()),
            UsagePolicy::LogoutOnly => Ok(()),
            UsagePolicy::BoundedUses { remaining } => {
                if self.used || *remaining == 0 {
                    return Err(AccessValidationFailure::TokenUsed);
                }
                *remaining -= 1;
                if *remaining == 0 {
                    self.used = true;
                }
                Ok(())
            }
        }
    }

    /// Best-effort out-of-band notification that the relying application
    /// should destroy its local session. Not retried by the core; the
    /// boolean result is recorded as `local_session_destroyed` and also
    /// returned so callers (e.g. cascade-invalidate) can aggregate it.
    pub fn invalidate(&mut self, notify: impl FnOnce(&str) -> bool) -> bool {
        let destroyed = notify(&self.resource_identifier);
        self.local_session_destroyed = destroyed;
        destroyed
    }

    /// Mint the (unstored) delegated session this access grants.
    /// The caller must supply `owning_session_invalidated`
    /// (looked up via `SessionStorage` before calling this, since an
    /// `Access` only holds its owning session's id, not the session itself)
    /// and is responsible for persisting the returned session afterward.
    pub fn create_delegated_session(
        &self,
        authentication: crate::core::identity::Authentication,
        session_id: impl Into<String>,
        now: DateTime<Utc>,
        owning_session_invalidated: bool,
    ) -> Result<crate::core::session::Session, InvalidatedSession> {
        if owning_session_invalidated {
            return Err(InvalidatedSession::new(self.owning_session_id.clone()));
        }
        Ok(crate::core::session::Session::new(
            session_id,
            authentication,
            now,
            false,
            Some(self.id.clone()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn fresh_access(policy: UsagePolicy) -> Access {
        Access::new("ST-1", "https://app.example", "TGT-1", at(0), Duration::seconds(60), true, policy)
    }

    #[test]
    fn self_validating_never_consumes() {
        let mut a = fresh_access(UsagePolicy::SelfValidating);
        assert!(a.validate(at(10)).is_ok());
        assert!(a.validate(at(20)).is_ok());
        assert!(!a.is_used());
    }

    #[test]
    fn bounded_use_single_is_exhausted_after_one_validate() {
        let mut a = fresh_access(UsagePolicy::single_use());
        assert!(a.validate(at(10)).is_ok());
        assert!(a.is_used());
        assert_eq!(a.validate(at(11)), Err(AccessValidationFailure::TokenUsed));
    }

    #[test]
    fn bounded_use_multi_counts_down() {
        let mut a = fresh_access(UsagePolicy::BoundedUses { remaining: 2 });
        assert!(a.validate(at(1)).is_ok());
        assert!(!a.is_used());
        assert!(a.validate(at(2)).is_ok());
        assert!(a.is_used());
        assert_eq!(a.validate(at(3)), Err(AccessValidationFailure::TokenUsed));
    }

    #[test]
    fn logout_only_never_fails_or_consumes() {
        let mut a = fresh_access(UsagePolicy::LogoutOnly);
        for t in 0..5 {
            assert!(a.validate(at(t)).is_ok());
        }
        assert!(!a.is_used());
    }

    #[test]
    fn expired_access_fails_before_usage_policy_is_consulted() {
        let mut a = fresh_access(UsagePolicy::single_use());
        assert_eq!(a.validate(at(61)), Err(AccessValidationFailure::TokenExpired));
        // the use was not consumed by the failed attempt
        assert!(!a.is_used());
    }

    #[test]
    fn invalidate_records_notifier_result() {
        let mut a = fresh_access(UsagePolicy::single_use());
        assert!(a.invalidate(|_| true));
        assert!(a.is_local_session_destroyed());

        let mut b = fresh_access(UsagePolicy::single_use());
        assert!(!b.invalidate(|_| false));
        assert!(!b.is_local_session_destroyed());
    }

    #[test]
    fn create_delegated_session_rejects_when_owner_invalidated() {
        let a = fresh_access(UsagePolicy::SelfValidating);
        let auth = crate::core::identity::Authentication::new(
            crate::core::identity::Principal::new("svc"),
            at(0),
            "proxy",
        );
        let err = a.create_delegated_session(auth, "TGT-P", at(1), true).unwrap_err();
        assert_eq!(err.session_id, "TGT-1");
    }

    #[test]
    fn create_delegated_session_succeeds_with_parent_set() {
        let a = fresh_access(UsagePolicy::SelfValidating);
        let auth = crate::core::identity::Authentication::new(
            crate::core::identity::Principal::new("svc"),
            at(0),
            "proxy",
        );
        let session = a.create_delegated_session(auth, "TGT-P", at(1), false).unwrap();
        assert_eq!(session.parent_access_id(), Some("ST-1"));
    }
}
