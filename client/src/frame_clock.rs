use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tuio_shared::{Clock, FrameSequence, TuioTime};

/// Outcome of closing a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameVerdict {
    /// The frame is current; commit it stamped with this time
    Commit(TuioTime),
    /// The frame arrived out of order and must be discarded
    Late,
}

struct FrameState {
    frame: FrameSequence,
    current_time: TuioTime,
}

/// Frame counter and frame time shared by every entity kind.
///
/// A sender sequences all of its profiles with one counter, so a frame
/// adopted through one profile makes older sequence numbers late for all
/// others.
pub struct FrameClock {
    clock: Arc<dyn Clock>,
    state: Mutex<FrameState>,
    late_frame_tolerance: i32,
    resync_interval: TuioTime,
}

impl FrameClock {
    pub fn new(clock: Arc<dyn Clock>, late_frame_tolerance: i32, resync_interval: Duration) -> Self {
        let current_time = clock.session_time();
        Self {
            clock,
            state: Mutex::new(FrameState {
                frame: 0,
                current_time,
            }),
            late_frame_tolerance,
            resync_interval: TuioTime::from_duration(resync_interval),
        }
    }

    /// Restarts the session clock and forgets the frame counter.
    pub fn reset(&self) {
        self.clock.start_session();
        let mut state = self.lock();
        state.frame = 0;
        state.current_time = self.clock.session_time();
    }

    pub fn frame(&self) -> FrameSequence {
        self.lock().frame
    }

    /// Time stamped on changes of the frame being assembled.
    pub fn current_time(&self) -> TuioTime {
        self.lock().current_time
    }

    pub fn session_time(&self) -> TuioTime {
        self.clock.session_time()
    }

    /// Judges the frame closed by `fseq(frame)`.
    ///
    /// A positive sequence number newer than the current frame refreshes the
    /// frame time. Numbers at or past the current frame are adopted, as are
    /// numbers so far behind that the sender has evidently restarted. The
    /// rest are late. Unsequenced frames (`frame <= 0`) are never late, and
    /// only move the frame time once it lags the session clock by more than
    /// the resync interval.
    pub fn close_frame(&self, frame: FrameSequence) -> FrameVerdict {
        let mut state = self.lock();

        if frame > 0 {
            if frame > state.frame {
                state.current_time = self.clock.session_time();
            }
            let restarted = i64::from(state.frame) - i64::from(frame) > i64::from(self.late_frame_tolerance);
            if frame >= state.frame || restarted {
                state.frame = frame;
                FrameVerdict::Commit(state.current_time)
            } else {
                FrameVerdict::Late
            }
        } else {
            let now = self.clock.session_time();
            if now - state.current_time > self.resync_interval {
                state.current_time = now;
            }
            FrameVerdict::Commit(state.current_time)
        }
    }

    fn lock(&self) -> MutexGuard<'_, FrameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
