/// Default number of points retained in an entity's path trail.
pub const MAX_PATH_LENGTH: usize = 128;

/// How far (in frames) a sequence number may trail the current frame before
/// it is taken as a restarted sender rather than a late frame.
pub const LATE_FRAME_TOLERANCE: i32 = 100;

/// Unsequenced frames resynchronize session time after this many millis.
pub const RESYNC_INTERVAL_MILLIS: u64 = 100;
