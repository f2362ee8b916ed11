use chrono::{DateTime, Duration, Utc};

use crate::core::session::Session;
use crate::core::usecases::ports::ExpirationPolicy;

/// Expires a session a fixed duration after its *last* use, so ongoing
/// activity keeps it alive indefinitely. The conventional policy for a
/// short-term (non-`longTerm`) session.
pub struct SlidingExpirationPolicy {
    idle_timeout: Duration,
}

impl SlidingExpirationPolicy {
    pub fn new(idle_timeout: Duration) -> Self {
        Self { idle_timeout }
    }
}

impl ExpirationPolicy for SlidingExpirationPolicy {
    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now >= session.last_used() + self.idle_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{Authentication, Principal};
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn session_created_at(secs: i64) -> Session {
        Session::new("TGT-1", Authentication::new(Principal::new("alice"), at(secs), "password"), at(secs), false, None)
    }

    #[test]
    fn activity_resets_the_idle_clock() {
        let policy = SlidingExpirationPolicy::new(Duration::seconds(30));
        let mut session = session_created_at(0);
        session.touch(at(20));
        assert!(!policy.is_expired(&session, at(40)));
        assert!(policy.is_expired(&session, at(50)));
    }

    #[test]
    fn idle_session_expires_after_timeout_from_creation() {
        let policy = SlidingExpirationPolicy::new(Duration::seconds(30));
        let session = session_created_at(0);
        assert!(policy.is_expired(&session, at(30)));
    }
}
