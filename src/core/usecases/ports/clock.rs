//! Port for time abstraction.
//!
//! Every instant recorded by the core (session creation, access expiry,
//! authentication timestamps) is obtained through this port rather than
//! calling `Utc::now()` directly, so tests can drive time deterministically.

use chrono::{DateTime, Utc};

/// Contract for time abstraction.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
