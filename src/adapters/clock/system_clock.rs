use chrono::{DateTime, Utc};

use crate::core::usecases::ports::Clock;

/// Wall-clock `Clock` adapter. The only place `Utc::now()` is called
/// anywhere in this crate outside of tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
