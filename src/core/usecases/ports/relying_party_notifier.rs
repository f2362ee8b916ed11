//! Port for the out-of-band "please destroy your local session" call made
//! to a relying party during cascade invalidation.

/// Contract for notifying a relying service that a single access (and by
/// extension its locally-established session) should be torn down.
pub trait RelyingPartyNotifier: Send + Sync {
    /// Returns whether the relying party acknowledged and destroyed its
    /// local session. A `false` result is recorded but never retried by the
    /// core itself.
    fn notify(&self, resource_identifier: &str) -> bool;
}
