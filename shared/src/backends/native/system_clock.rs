use std::{
    sync::{Mutex, PoisonError},
    time::Instant,
};

use crate::time::{Clock, TuioTime};

/// Wall-clock session time backed by `std::time::Instant`.
pub struct SystemClock {
    start: Mutex<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Mutex::new(Instant::now()),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn session_time(&self) -> TuioTime {
        let start = *self.start.lock().unwrap_or_else(PoisonError::into_inner);
        TuioTime::from_duration(start.elapsed())
    }

    fn start_session(&self) {
        let mut start = self.start.lock().unwrap_or_else(PoisonError::into_inner);
        *start = Instant::now();
    }
}
