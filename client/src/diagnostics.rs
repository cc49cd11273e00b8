use std::sync::atomic::{AtomicU64, Ordering};

/// Counts of the conditions the engine tolerates without surfacing an
/// error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Frames discarded because their sequence number was out of order
    pub late_frames: u64,
    /// Removals or updates that referenced a session id with no committed
    /// entity, which usually means the sender and this client are out of
    /// step
    pub unknown_session_refs: u64,
    /// Listener callbacks that panicked
    pub listener_faults: u64,
    /// Messages dropped because they could not be decoded
    pub dropped_messages: u64,
}

#[derive(Debug, Default)]
pub struct DiagnosticCounters {
    late_frames: AtomicU64,
    unknown_session_refs: AtomicU64,
    listener_faults: AtomicU64,
    dropped_messages: AtomicU64,
}

impl DiagnosticCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn late_frame(&self) {
        self.late_frames.fetch_add(1, Ordering::Relaxed);
    }

    pub fn unknown_session_ref(&self) {
        self.unknown_session_refs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn listener_fault(&self) {
        self.listener_faults.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dropped_message(&self) {
        self.dropped_messages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> Diagnostics {
        Diagnostics {
            late_frames: self.late_frames.load(Ordering::Relaxed),
            unknown_session_refs: self.unknown_session_refs.load(Ordering::Relaxed),
            listener_faults: self.listener_faults.load(Ordering::Relaxed),
            dropped_messages: self.dropped_messages.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.late_frames.store(0, Ordering::Relaxed);
        self.unknown_session_refs.store(0, Ordering::Relaxed);
        self.listener_faults.store(0, Ordering::Relaxed);
        self.dropped_messages.store(0, Ordering::Relaxed);
    }
}
