use chrono::{DateTime, Duration, Utc};

use crate::core::session::Session;
use crate::core::usecases::ports::ExpirationPolicy;

/// Expires a session a fixed duration after it was created, regardless of
/// activity. The conventional policy for a `longTerm` (remember-me) session.
pub struct TtlExpirationPolicy {
    ttl: Duration,
}

impl TtlExpirationPolicy {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }
}

impl ExpirationPolicy for TtlExpirationPolicy {
    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now >= session.created() + self.ttl
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
        Session::new("TGT-1", Authentication::new(Principal::new("alice"), at(secs), "password"), at(secs), true, None)
    }

    #[test]
    fn expires_strictly_after_ttl_elapsed() {
        let policy = TtlExpirationPolicy::new(Duration::seconds(100));
        let session = session_created_at(0);
        assert!(!policy.is_expired(&session, at(99)));
        assert!(policy.is_expired(&session, at(100)));
    }

    #[test]
    fn activity_does_not_extend_a_ttl_policy() {
        let policy = TtlExpirationPolicy::new(Duration::seconds(100));
        let mut session = session_created_at(0);
        session.touch(at(90));
        assert!(policy.is_expired(&session, at(100)));
    }
}
