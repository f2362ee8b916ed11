//! Port for session-lifetime policy.

use chrono::{DateTime, Utc};

use crate::core::session::Session;

/// Contract for deciding whether a session has outlived its welcome.
/// Access-level expiry is handled by `Access::is_expired` directly; this
/// port concerns only the owning session's own lifetime.
pub trait ExpirationPolicy: Send + Sync {
    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool;
}
