//! Port for session persistence.
//!
//! Implementations own four indices that `create_session` and
//! `remove_session` must update atomically: the primary id -> session map,
//! a principal id -> session ids index (for logout-by-principal), an
//! access id -> owning session id index (for validate-by-token lookups),
//! and a parent-access-id -> child session ids index (so destroying a
//! session can find and cascade-invalidate every delegated session rooted
//! on one of its accesses). `mutate_session` exposes per-key
//! read-modify-write: a conforming adapter holds a single per-key lock for
//! the duration of the callback, so two concurrent mutations of the *same*
//! session never interleave, though mutations of different sessions may
//! run fully in parallel.

use chrono::{DateTime, Utc};

use crate::core::error::{NotFoundSession, StorageFailure};
use crate::core::session::Session;

pub trait SessionStorage: Send + Sync {
    /// Insert a newly created session, indexing it by its own id and by its
    /// owning principal. Fails only on a genuine storage-layer problem; a
    /// duplicate id is a programmer error the in-memory reference adapter
    /// treats as a `StorageFailure` rather than silently overwriting.
    fn create_session(&self, session: Session) -> Result<(), StorageFailure>;

    /// Fetch a snapshot of a session by id. Returns a clone so callers can
    /// inspect it without holding any internal lock.
    fn get_session(&self, session_id: &str) -> Result<Session, NotFoundSession>;

    /// Atomically read-modify-write the session named by `session_id`.
    fn mutate_session(
        &self,
        session_id: &str,
        f: &mut dyn FnMut(&mut Session),
    ) -> Result<(), NotFoundSession>;

    /// Remove and return a session. Idempotent in the sense that removing a
    /// session id that no longer exists simply returns `None`.
    fn remove_session(&self, session_id: &str) -> Option<Session>;

    /// Every live session id currently carrying an authentication for this
    /// principal (used by admin logout-by-principal).
    fn session_ids_for_principal(&self, principal_id: &str) -> Vec<String>;

    /// Register an access as belonging to a session in the access-lookup
    /// index, so a later `validate` by token id can find its owning session
    /// without scanning every session.
    fn register_access(&self, session_id: &str, access_id: &str) -> Result<(), NotFoundSession>;

    /// The session id that owns a given access, if the access is still
    /// indexed (removed once its owning session is destroyed).
    fn owning_session_id(&self, access_id: &str) -> Option<String>;

    /// Record that `child_session_id` is a delegated session minted from
    /// `parent_access_id`, so destroying the access's owning session can
    /// find it and cascade the invalidation.
    fn register_child_session(&self, parent_access_id: &str, child_session_id: &str);

    /// Every delegated session id minted from `parent_access_id`, if any.
    fn child_session_ids(&self, parent_access_id: &str) -> Vec<String>;

    /// Sweep and remove every session for which `is_expired` returns true,
    /// returning the count removed. Driven by a background task, not called
    /// from request-handling paths.
    fn sweep_expired(&self, now: DateTime<Utc>, is_expired: &dyn Fn(&Session, DateTime<Utc>) -> bool) -> usize;
}
