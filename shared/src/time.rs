use std::{
    fmt,
    ops::{Add, Sub},
    sync::atomic::{AtomicI64, Ordering},
    time::Duration,
};

/// A point in session time, measured from the moment the session started.
///
/// Microsecond resolution, matching the resolution of the timestamps carried
/// by the transport bundles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TuioTime {
    micros: i64,
}

impl TuioTime {
    pub const ZERO: TuioTime = TuioTime { micros: 0 };

    pub fn from_micros(micros: i64) -> Self {
        Self { micros }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self {
            micros: millis.saturating_mul(1_000),
        }
    }

    pub fn from_secs_f32(seconds: f32) -> Self {
        Self {
            micros: (f64::from(seconds) * 1_000_000.0).round() as i64,
        }
    }

    pub fn from_duration(duration: Duration) -> Self {
        Self {
            micros: i64::try_from(duration.as_micros()).unwrap_or(i64::MAX),
        }
    }

    pub fn total_micros(&self) -> i64 {
        self.micros
    }

    pub fn total_millis(&self) -> i64 {
        self.micros / 1_000
    }

    /// Whole seconds component.
    pub fn seconds(&self) -> i64 {
        self.micros.div_euclid(1_000_000)
    }

    /// Sub-second component in microseconds.
    pub fn subsec_micros(&self) -> i64 {
        self.micros.rem_euclid(1_000_000)
    }

    /// Signed elapsed time since `earlier`, in seconds.
    pub fn seconds_since(&self, earlier: &TuioTime) -> f32 {
        ((self.micros - earlier.micros) as f64 / 1_000_000.0) as f32
    }
}

impl Add<Duration> for TuioTime {
    type Output = TuioTime;

    fn add(self, rhs: Duration) -> TuioTime {
        TuioTime {
            micros: self
                .micros
                .saturating_add(TuioTime::from_duration(rhs).micros),
        }
    }
}

impl Sub for TuioTime {
    type Output = TuioTime;

    fn sub(self, rhs: TuioTime) -> TuioTime {
        TuioTime {
            micros: self.micros.saturating_sub(rhs.micros),
        }
    }
}

impl fmt::Display for TuioTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.seconds(), self.subsec_micros())
    }
}

/// Source of "live" session time.
pub trait Clock: Send + Sync {
    /// Current time relative to the start of the session.
    fn session_time(&self) -> TuioTime;

    /// Marks the start of a new session. Clocks that are driven externally
    /// may ignore this.
    fn start_session(&self) {}
}

/// A clock that only moves when told to. Used for replays and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    micros: AtomicI64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, time: TuioTime) {
        self.micros.store(time.total_micros(), Ordering::SeqCst);
    }

    pub fn advance(&self, duration: Duration) {
        let micros = TuioTime::from_duration(duration).total_micros();
        self.micros.fetch_add(micros, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn session_time(&self) -> TuioTime {
        TuioTime::from_micros(self.micros.load(Ordering::SeqCst))
    }
}
