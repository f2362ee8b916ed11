use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::core::error::{NotFoundSession, StorageFailure};
use crate::core::session::Session;
use crate::core::usecases::ports::SessionStorage;

/// In-memory `SessionStorage` reference adapter, indexed four ways:
/// primary id, owning principal, owned access id, and parent-access id (for
/// delegated-session cascade lookups). `DashMap`'s per-shard locking gives
/// `mutate_session` the per-key atomicity the port contract requires
/// without a single crate-wide mutex serializing every session in the
/// authority.
pub struct InMemorySessionStorage {
    sessions: DashMap<String, Session>,
    principal_index: DashMap<String, Vec<String>>,
    access_index: DashMap<String, String>,
    child_session_index: DashMap<String, Vec<String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            principal_index: DashMap::new(),
            access_index: DashMap::new(),
            child_session_index: DashMap::new(),
        }
    }
}

impl Default for InMemorySessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn create_session(&self, session: Session) -> Result<(), StorageFailure> {
        let session_id = session.id().to_string();
        if self.sessions.contains_key(&session_id) {
            return Err(StorageFailure::new(format!("session '{}' already exists", session_id)));
        }
        let principal_id = session.current_authentication().principal.id().to_string();
        self.sessions.insert(session_id.clone(), session);
        self.principal_index.entry(principal_id).or_default().push(session_id);
        Ok(())
    }

    fn get_session(&self, session_id: &str) -> Result<Session, NotFoundSession> {
        self.sessions
            .get(session_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| NotFoundSession::new(session_id))
    }

    fn mutate_session(&self, session_id: &str, f: &mut dyn FnMut(&mut Session)) -> Result<(), NotFoundSession> {
        let mut entry = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| NotFoundSession::new(session_id))?;
        f(entry.value_mut());
        Ok(())
    }

    fn remove_session(&self, session_id: &str) -> Option<Session> {
        let (_, session) = self.sessions.remove(session_id)?;
        if let Some(mut ids) = self.principal_index.get_mut(session.current_authentication().principal.id()) {
            ids.retain(|id| id != session_id);
        }
        for access in session.accesses() {
            self.access_index.remove(access.id());
        }
        if let Some(parent_access_id) = session.parent_access_id() {
            if let Some(mut children) = self.child_session_index.get_mut(parent_access_id) {
                children.retain(|id| id != session_id);
            }
        }
        Some(session)
    }

    fn session_ids_for_principal(&self, principal_id: &str) -> Vec<String> {
        self.principal_index
            .get(principal_id)
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }

    fn register_access(&self, session_id: &str, access_id: &str) -> Result<(), NotFoundSession> {
        if !self.sessions.contains_key(session_id) {
            return Err(NotFoundSession::new(session_id));
        }
        self.access_index.insert(access_id.to_string(), session_id.to_string());
        Ok(())
    }

    fn owning_session_id(&self, access_id: &str) -> Option<String> {
        self.access_index.get(access_id).map(|entry| entry.value().clone())
    }

    fn register_child_session(&self, parent_access_id: &str, child_session_id: &str) {
        self.child_session_index
            .entry(parent_access_id.to_string())
            .or_default()
            .push(child_session_id.to_string());
    }

    fn child_session_ids(&self, parent_access_id: &str) -> Vec<String> {
        self.child_session_index
            .get(parent_access_id)
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }

    fn sweep_expired(&self, now: DateTime<Utc>, is_expired: &dyn Fn(&Session, DateTime<Utc>) -> bool) -> usize {
        let expired_ids: Vec<String> = self
            .sessions
            .iter()
            .filter(|entry| is_expired(entry.value(), now))
            .map(|entry| entry.key().clone())
            .collect();

        let count = expired_ids.len();
        for session_id in expired_ids {
            self.remove_session(&session_id);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::access::{Access, UsagePolicy};
    use crate::core::identity::{Authentication, Principal};
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn session(id: &str, principal: &str) -> Session {
        Session::new(id, Authentication::new(Principal::new(principal), at(0), "password"), at(0), false, None)
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = InMemorySessionStorage::new();
        store.create_session(session("TGT-1", "alice")).unwrap();
        assert_eq!(store.get_session("TGT-1").unwrap().id(), "TGT-1");
    }

    #[test]
    fn create_session_rejects_duplicate_id() {
        let store = InMemorySessionStorage::new();
        store.create_session(session("TGT-1", "alice")).unwrap();
        assert!(store.create_session(session("TGT-1", "alice")).is_err());
    }

    #[test]
    fn get_missing_session_is_not_found() {
        let store = InMemorySessionStorage::new();
        assert!(store.get_session("nope").is_err());
    }

    #[test]
    fn session_ids_for_principal_tracks_multiple_sessions() {
        let store = InMemorySessionStorage::new();
        store.create_session(session("TGT-1", "alice")).unwrap();
        store.create_session(session("TGT-2", "alice")).unwrap();
        store.create_session(session("TGT-3", "bob")).unwrap();

        let mut ids = store.session_ids_for_principal("alice");
        ids.sort();
        assert_eq!(ids, vec!["TGT-1".to_string(), "TGT-2".to_string()]);
    }

    #[test]
    fn register_and_resolve_access_index() {
        let store = InMemorySessionStorage::new();
        store.create_session(session("TGT-1", "alice")).unwrap();
        store.register_access("TGT-1", "ST-1").unwrap();
        assert_eq!(store.owning_session_id("ST-1").as_deref(), Some("TGT-1"));
        assert!(store.owning_session_id("ST-missing").is_none());
    }

    #[test]
    fn remove_session_drops_its_access_index_entries() {
        let store = InMemorySessionStorage::new();
        let mut s = session("TGT-1", "alice");
        s.grant(
            Access::new("ST-1", "https://app.example", "TGT-1", at(0), Duration::seconds(30), true, UsagePolicy::single_use()),
            at(0),
        );
        store.create_session(s).unwrap();
        store.register_access("TGT-1", "ST-1").unwrap();

        store.remove_session("TGT-1");
        assert!(store.owning_session_id("ST-1").is_none());
        assert!(store.session_ids_for_principal("alice").is_empty());
    }

    #[test]
    fn sweep_expired_removes_only_matching_sessions() {
        let store = InMemorySessionStorage::new();
        store.create_session(session("TGT-1", "alice")).unwrap();
        store.create_session(session("TGT-2", "bob")).unwrap();

        let removed = store.sweep_expired(at(0), &|s, _now| s.id() == "TGT-1");
        assert_eq!(removed, 1);
        assert!(store.get_session("TGT-1").is_err());
        assert!(store.get_session("TGT-2").is_ok());
    }

    #[test]
    fn register_and_resolve_child_session_index() {
        let store = InMemorySessionStorage::new();
        store.register_child_session("PGT-1", "TGT-P1");
        store.register_child_session("PGT-1", "TGT-P2");
        let mut children = store.child_session_ids("PGT-1");
        children.sort();
        assert_eq!(children, vec!["TGT-P1".to_string(), "TGT-P2".to_string()]);
        assert!(store.child_session_ids("PGT-missing").is_empty());
    }

    #[test]
    fn remove_session_drops_its_own_entry_from_the_parent_access_child_index() {
        let store = InMemorySessionStorage::new();
        store.register_child_session("PGT-1", "TGT-P1");
        store.create_session(Session::new(
            "TGT-P1",
            Authentication::new(Principal::new("svc"), at(0), "proxy"),
            at(0),
            false,
            Some("PGT-1".to_string()),
        ))
        .unwrap();

        store.remove_session("TGT-P1");
        assert!(store.child_session_ids("PGT-1").is_empty());
    }
}
