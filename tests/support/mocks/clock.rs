// tests/support/mocks/clock.rs
use chrono::{DateTime, Duration, Utc};
use pressroom::application::ports::time::Clock;
use std::sync::Mutex;

/// Clock pinned to a fixed instant; tests advance it explicitly.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
