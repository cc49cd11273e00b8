use std::f32::consts::TAU;

use crate::point::to_degrees;

/// Shortest-path change between two angles as a fraction of a full turn.
///
/// Deltas beyond three quarters of a turn are taken to have crossed the
/// 0/2π seam and are wrapped back by one turn.
pub fn turn_delta(from: f32, to: f32) -> f32 {
    let delta = (to - from) / TAU;
    if delta > 0.75 {
        delta - 1.0
    } else if delta < -0.75 {
        delta + 1.0
    } else {
        delta
    }
}

/// Single-axis orientation of planar objects and blobs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    angle: f32,
    rotation_speed: f32,
    rotation_accel: f32,
}

impl Orientation {
    pub fn new(angle: f32) -> Self {
        Self {
            angle,
            ..Default::default()
        }
    }

    /// Rotation speed is in turns per second.
    pub fn update_derived(&mut self, angle: f32, dt: f32) {
        let delta = turn_delta(self.angle, angle);
        self.angle = angle;

        let last_rotation_speed = self.rotation_speed;
        self.rotation_speed = delta / dt;
        self.rotation_accel = (self.rotation_speed - last_rotation_speed) / dt;
    }

    pub fn update_explicit(&mut self, angle: f32, rotation_speed: f32, rotation_accel: f32) {
        self.angle = angle;
        self.rotation_speed = rotation_speed;
        self.rotation_accel = rotation_accel;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angle_degrees(&self) -> f32 {
        to_degrees(self.angle)
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn rotation_accel(&self) -> f32 {
        self.rotation_accel
    }
}

/// Roll/pitch/yaw orientation of 3D objects and blobs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation3 {
    roll: f32,
    pitch: f32,
    yaw: f32,
    roll_speed: f32,
    pitch_speed: f32,
    yaw_speed: f32,
    rotation_accel: f32,
}

impl Orientation3 {
    pub fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self {
            roll,
            pitch,
            yaw,
            ..Default::default()
        }
    }

    /// Derives each axis independently; the overall rotation acceleration is
    /// the mean of the three per-axis accelerations.
    pub fn update_derived(&mut self, roll: f32, pitch: f32, yaw: f32, dt: f32) {
        let roll_accel = derive_axis(&mut self.roll, &mut self.roll_speed, roll, dt);
        let pitch_accel = derive_axis(&mut self.pitch, &mut self.pitch_speed, pitch, dt);
        let yaw_accel = derive_axis(&mut self.yaw, &mut self.yaw_speed, yaw, dt);

        self.rotation_accel = (roll_accel + pitch_accel + yaw_accel) / 3.0;
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_explicit(
        &mut self,
        roll: f32,
        pitch: f32,
        yaw: f32,
        roll_speed: f32,
        pitch_speed: f32,
        yaw_speed: f32,
        rotation_accel: f32,
    ) {
        self.roll = roll;
        self.pitch = pitch;
        self.yaw = yaw;
        self.roll_speed = roll_speed;
        self.pitch_speed = pitch_speed;
        self.yaw_speed = yaw_speed;
        self.rotation_accel = rotation_accel;
    }

    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn roll_degrees(&self) -> f32 {
        to_degrees(self.roll)
    }

    pub fn pitch_degrees(&self) -> f32 {
        to_degrees(self.pitch)
    }

    pub fn yaw_degrees(&self) -> f32 {
        to_degrees(self.yaw)
    }

    pub fn roll_speed(&self) -> f32 {
        self.roll_speed
    }

    pub fn pitch_speed(&self) -> f32 {
        self.pitch_speed
    }

    pub fn yaw_speed(&self) -> f32 {
        self.yaw_speed
    }

    pub fn rotation_accel(&self) -> f32 {
        self.rotation_accel
    }
}

// returns the axis' angular acceleration
fn derive_axis(angle: &mut f32, speed: &mut f32, new_angle: f32, dt: f32) -> f32 {
    let delta = turn_delta(*angle, new_angle);
    *angle = new_angle;

    let last_speed = *speed;
    *speed = delta / dt;
    (*speed - last_speed) / dt
}
