use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::core::access::Access;
use crate::core::identity::Authentication;

/// A Ticket-Granting Ticket in CAS terms: the authority-side record of a
/// single-sign-on session.
///
/// `parent_access_id` is set only for delegated sessions (minted by
/// [`Access::create_delegated_session`]) and names the access that spawned
/// them — again by id, never by reference, so a session never owns its
/// parent access and an access never owns its child session.
///
/// `authentications` is never empty: a session without at least one
/// recorded authentication could not have been constructed, and
/// `add_authentication` (used when a principal re-authenticates onto an
/// existing session) only ever appends.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    parent_access_id: Option<String>,
    authentications: Vec<Authentication>,
    accesses: BTreeMap<String, Access>,
    created: DateTime<Utc>,
    last_used: DateTime<Utc>,
    long_term: bool,
    invalidated: bool,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        authentication: Authentication,
        created: DateTime<Utc>,
        long_term: bool,
        parent_access_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_access_id,
            authentications: vec![authentication],
            accesses: BTreeMap::new(),
            created,
            last_used: created,
            long_term,
            invalidated: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent_access_id(&self) -> Option<&str> {
        self.parent_access_id.as_deref()
    }

    pub fn is_delegated(&self) -> bool {
        self.parent_access_id.is_some()
    }

    pub fn is_long_term(&self) -> bool {
        self.long_term
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn last_used(&self) -> DateTime<Utc> {
        self.last_used
    }

    pub fn authentications(&self) -> &[Authentication] {
        &self.authentications
    }

    /// The most recent authentication recorded against this session —
    /// the one consulted to decide whether a `forceAuthentication` request
    /// names a different principal than the session currently carries.
    pub fn current_authentication(&self) -> &Authentication {
        self.authentications
            .last()
            .expect("a session always carries at least one authentication")
    }

    pub fn accesses(&self) -> impl Iterator<Item = &Access> {
        self.accesses.values()
    }

    pub fn access(&self, access_id: &str) -> Option<&Access> {
        self.accesses.get(access_id)
    }

    pub fn access_mut(&mut self, access_id: &str) -> Option<&mut Access> {
        self.accesses.get_mut(access_id)
    }

    /// Record a re-authentication onto this already-existing session
    /// (`forceAuthentication` against a live session, or a subsequent
    /// credential handler in a multi-factor pipeline).
    pub fn add_authentication(&mut self, authentication: Authentication, now: DateTime<Utc>) {
        self.authentications.push(authentication);
        self.last_used = now;
    }

    /// Record activity against this session for sliding-expiration purposes,
    /// without adding a new authentication.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_used = now;
    }

    /// Register a newly granted access under this session.
    pub fn grant(&mut self, access: Access, now: DateTime<Utc>) {
        self.accesses.insert(access.id().to_string(), access);
        self.last_used = now;
    }

    /// Cascade-invalidate this session: every access it holds is notified via
    /// `notify`, and the session itself is marked invalidated. Idempotent —
    /// calling this on an already-invalidated session is a no-op that
    /// returns `false` without re-notifying anything.
    pub fn invalidate(&mut self, mut notify: impl FnMut(&str) -> bool) -> bool {
        if self.invalidated {
            return false;
        }
        for access in self.accesses.values_mut() {
            access.invalidate(&mut notify);
        }
        self.invalidated = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::access::UsagePolicy;
    use crate::core::identity::Principal;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn auth(principal: &str) -> Authentication {
        Authentication::new(Principal::new(principal), at(0), "password")
    }

    #[test]
    fn new_session_carries_its_first_authentication() {
        let s = Session::new("TGT-1", auth("alice"), at(0), false, None);
        assert_eq!(s.authentications().len(), 1);
        assert_eq!(s.current_authentication().principal.id(), "alice");
        assert!(!s.is_delegated());
        assert!(!s.is_invalidated());
    }

    #[test]
    fn add_authentication_appends_and_touches() {
        let mut s = Session::new("TGT-1", auth("alice"), at(0), false, None);
        s.add_authentication(auth("alice"), at(5));
        assert_eq!(s.authentications().len(), 2);
        assert_eq!(s.last_used(), at(5));
    }

    #[test]
    fn grant_then_lookup_access() {
        let mut s = Session::new("TGT-1", auth("alice"), at(0), false, None);
        let access = Access::new(
            "ST-1",
            "https://app.example",
            "TGT-1",
            at(0),
            Duration::seconds(30),
            true,
            UsagePolicy::single_use(),
        );
        s.grant(access, at(0));
        assert!(s.access("ST-1").is_some());
        assert!(s.access("missing").is_none());
    }

    #[test]
    fn invalidate_is_idempotent() {
        let mut s = Session::new("TGT-1", auth("alice"), at(0), false, None);
        assert!(s.invalidate(|_| true));
        assert!(s.is_invalidated());
        assert!(!s.invalidate(|_| true));
    }

    #[test]
    fn invalidate_cascades_to_every_access() {
        let mut s = Session::new("TGT-1", auth("alice"), at(0), false, None);
        s.grant(
            Access::new("ST-1", "https://a.example", "TGT-1", at(0), Duration::seconds(30), true, UsagePolicy::single_use()),
            at(0),
        );
        s.grant(
            Access::new("ST-2", "https://b.example", "TGT-1", at(0), Duration::seconds(30), true, UsagePolicy::single_use()),
            at(0),
        );
        s.invalidate(|_| true);
        assert!(s.access("ST-1").unwrap().is_local_session_destroyed());
        assert!(s.access("ST-2").unwrap().is_local_session_destroyed());
    }

    #[test]
    fn delegated_session_records_parent_access() {
        let s = Session::new("TGT-P", auth("svc"), at(0), false, Some("ST-1".to_string()));
        assert_eq!(s.parent_access_id(), Some("ST-1"));
        assert!(s.is_delegated());
    }
}
