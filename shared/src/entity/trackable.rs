use crate::{
    entity::{path_trail::PathTrail, state::TuioState},
    point::TuioPoint,
    time::TuioTime,
    types::SessionId,
};

/// Per-axis velocity in normalized units per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// State shared by every tracked entity kind: identity, position, motion
/// and the recent path.
#[derive(Clone, Debug)]
pub struct Trackable {
    session_id: SessionId,
    position: TuioPoint,
    velocity: Velocity,
    motion_speed: f32,
    motion_accel: f32,
    path: PathTrail,
    state: TuioState,
}

impl Trackable {
    pub fn new(time: TuioTime, session_id: SessionId, x: f32, y: f32, z: f32, path_capacity: usize) -> Self {
        let position = TuioPoint::with_time(time, x, y, z);
        Self {
            session_id,
            position,
            velocity: Velocity::default(),
            motion_speed: 0.0,
            motion_accel: 0.0,
            path: PathTrail::new(position, path_capacity),
            state: TuioState::Added,
        }
    }

    /// Moves to a new position and derives velocity, speed and acceleration
    /// from the time elapsed since the last path point.
    ///
    /// Returns the elapsed seconds so callers can derive angular motion over
    /// the same interval. A zero interval yields non-finite speeds.
    pub fn update_derived(&mut self, time: TuioTime, x: f32, y: f32, z: f32) -> f32 {
        let last_point = *self.path.last();
        self.position.update_with_time(time, x, y, z);

        let dt = time.seconds_since(&last_point.time());
        let dx = x - last_point.x();
        let dy = y - last_point.y();
        let dz = z - last_point.z();
        let distance = (dx * dx + dy * dy + dz * dz).sqrt();

        let last_motion_speed = self.motion_speed;
        self.velocity = Velocity::new(dx / dt, dy / dt, dz / dt);
        self.motion_speed = distance / dt;
        self.motion_accel = (self.motion_speed - last_motion_speed) / dt;
        self.state = TuioState::from_acceleration(self.motion_accel);

        self.record_position();
        dt
    }

    /// Moves to a new position taking velocity and acceleration verbatim.
    pub fn update_explicit(
        &mut self,
        time: TuioTime,
        x: f32,
        y: f32,
        z: f32,
        velocity: Velocity,
        motion_accel: f32,
    ) {
        self.position.update_with_time(time, x, y, z);
        self.velocity = velocity;
        self.motion_speed = velocity.magnitude();
        self.motion_accel = motion_accel;
        self.state = TuioState::from_acceleration(self.motion_accel);

        self.record_position();
    }

    /// Re-commits the current position, letting derived motion decay.
    pub fn stop(&mut self, time: TuioTime) -> f32 {
        let (x, y, z) = (self.position.x(), self.position.y(), self.position.z());
        self.update_derived(time, x, y, z)
    }

    pub fn remove(&mut self, time: TuioTime) {
        self.position.update_with_time(time, self.position.x(), self.position.y(), self.position.z());
        self.state = TuioState::Removed;
    }

    pub(crate) fn set_state(&mut self, state: TuioState) {
        self.state = state;
    }

    fn record_position(&mut self) {
        self.path.push(self.position);
    }

    // Accessors

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn position(&self) -> &TuioPoint {
        &self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x()
    }

    pub fn y(&self) -> f32 {
        self.position.y()
    }

    pub fn z(&self) -> f32 {
        self.position.z()
    }

    pub fn time(&self) -> TuioTime {
        self.position.time()
    }

    pub fn start_time(&self) -> TuioTime {
        self.position.start_time()
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn x_speed(&self) -> f32 {
        self.velocity.x
    }

    pub fn y_speed(&self) -> f32 {
        self.velocity.y
    }

    pub fn z_speed(&self) -> f32 {
        self.velocity.z
    }

    pub fn motion_speed(&self) -> f32 {
        self.motion_speed
    }

    pub fn motion_accel(&self) -> f32 {
        self.motion_accel
    }

    pub fn path(&self) -> &PathTrail {
        &self.path
    }

    pub fn state(&self) -> TuioState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, TuioState::Accelerating | TuioState::Decelerating)
    }
}
