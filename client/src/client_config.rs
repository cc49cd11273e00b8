use std::time::Duration;

use tuio_shared::{LATE_FRAME_TOLERANCE, MAX_PATH_LENGTH, RESYNC_INTERVAL_MILLIS};

/// Contains Config properties which will be used by a TuioClient
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// How many frames a sequence number may trail the current frame before
    /// it is no longer considered late, but taken as a restarted sender.
    pub late_frame_tolerance: i32,
    /// For senders that do not sequence their frames, the frame time is
    /// resynchronized with the session clock once it drifts further than
    /// this.
    pub resync_interval: Duration,
    /// Maximum number of points retained in each entity's path trail.
    pub path_capacity: usize,
    /// Catch panics raised by listener callbacks, so that one misbehaving
    /// listener can neither starve the others nor unwind through the
    /// message loop.
    pub isolate_listener_panics: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            late_frame_tolerance: LATE_FRAME_TOLERANCE,
            resync_interval: Duration::from_millis(RESYNC_INTERVAL_MILLIS),
            path_capacity: MAX_PATH_LENGTH,
            isolate_listener_panics: true,
        }
    }
}
