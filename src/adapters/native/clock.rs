use std::time::{SystemTime, UNIX_EPOCH};

use crate::ports::ClockPort;

/// Wall clock backed by `SystemTime`. A clock set before the epoch reads as
/// zero rather than failing.
#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for Clock {
    fn unix_seconds(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or_default()
    }

    fn is_available(&self) -> bool {
        true
    }
}
