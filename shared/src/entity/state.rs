use std::fmt;

/// Lifecycle of a tracked entity.
///
/// `Added` and `Removed` bracket the lifetime; the motion states in between
/// are recomputed on every committed update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TuioState {
    Added,
    Accelerating,
    Decelerating,
    Rotating,
    Stopped,
    Removed,
    Resized,
}

impl TuioState {
    /// Numeric state code used by the protocol's reference tooling.
    pub fn code(&self) -> u8 {
        match self {
            TuioState::Added => 1,
            TuioState::Accelerating => 2,
            TuioState::Decelerating => 3,
            TuioState::Rotating => 4,
            TuioState::Stopped => 5,
            TuioState::Removed => 6,
            TuioState::Resized => 7,
        }
    }

    /// State implied by the sign of an acceleration.
    pub fn from_acceleration(accel: f32) -> Self {
        if accel > 0.0 {
            TuioState::Accelerating
        } else if accel < 0.0 {
            TuioState::Decelerating
        } else {
            TuioState::Stopped
        }
    }

    /// `Rotating` wins over any motion state except `Stopped`.
    pub fn with_rotation(self, rotation_accel: f32) -> Self {
        if rotation_accel != 0.0 && self != TuioState::Stopped {
            TuioState::Rotating
        } else {
            self
        }
    }
}

impl fmt::Display for TuioState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TuioState::Added => "added",
            TuioState::Accelerating => "accelerating",
            TuioState::Decelerating => "decelerating",
            TuioState::Rotating => "rotating",
            TuioState::Stopped => "stopped",
            TuioState::Removed => "removed",
            TuioState::Resized => "resized",
        };
        f.write_str(name)
    }
}
