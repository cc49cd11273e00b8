use std::f32::consts::{FRAC_PI_2, PI};

use crate::time::TuioTime;

/// A normalized position (coordinates typically in `0..1`) stamped with the
/// session time it was observed at and the time it was first created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TuioPoint {
    x: f32,
    y: f32,
    z: f32,
    time: TuioTime,
    start_time: TuioTime,
}

impl TuioPoint {
    /// A point observed at the start of the session.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::with_time(TuioTime::ZERO, x, y, z)
    }

    pub fn with_time(time: TuioTime, x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            time,
            start_time: time,
        }
    }

    // Update

    /// Moves the point, leaving its time stamp unchanged.
    pub fn update(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Moves the point and re-stamps it. The creation time is preserved.
    pub fn update_with_time(&mut self, time: TuioTime, x: f32, y: f32, z: f32) {
        self.update(x, y, z);
        self.time = time;
    }

    /// Copies another point's coordinates, leaving the time stamp unchanged.
    pub fn update_from(&mut self, other: &TuioPoint) {
        self.update(other.x, other.y, other.z);
    }

    // Accessors

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn time(&self) -> TuioTime {
        self.time
    }

    pub fn start_time(&self) -> TuioTime {
        self.start_time
    }

    // Geometry

    pub fn distance_2d(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn distance(&self, x: f32, y: f32, z: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        let dz = self.z - z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn distance_to(&self, other: &TuioPoint) -> f32 {
        self.distance(other.x, other.y, other.z)
    }

    /// Distance after scaling each axis by its pixel extent.
    pub fn space_distance(&self, x: f32, y: f32, z: f32, width: i32, height: i32, depth: i32) -> f32 {
        let (w, h, d) = (width as f32, height as f32, depth as f32);
        let dx = w * self.x - w * x;
        let dy = h * self.y - h * y;
        let dz = d * self.z - d * z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Planar angle in radians (`0..2π`) from this point towards `(x, y)`.
    ///
    /// Undefined when both points coincide: the zero distance turns the
    /// result into NaN, which is passed through as is.
    pub fn angle(&self, x: f32, y: f32) -> f32 {
        let side = x - self.x;
        let height = y - self.y;
        let distance = self.distance_2d(x, y);

        let angle = (side / distance).asin() + FRAC_PI_2;
        if height < 0.0 {
            2.0 * PI - angle
        } else {
            angle
        }
    }

    pub fn angle_to(&self, other: &TuioPoint) -> f32 {
        self.angle(other.x, other.y)
    }

    pub fn angle_degrees(&self, x: f32, y: f32) -> f32 {
        to_degrees(self.angle(x, y))
    }

    pub fn angle_degrees_to(&self, other: &TuioPoint) -> f32 {
        to_degrees(self.angle_to(other))
    }

    /// Rotation around the z axis, measured in the x/y plane.
    pub fn roll_angle_to(&self, other: &TuioPoint) -> f32 {
        self.angle(other.x, other.y)
    }

    /// Rotation around the x axis: the other point's (z, y) pair seen from
    /// this point's planar position.
    pub fn pitch_angle_to(&self, other: &TuioPoint) -> f32 {
        self.angle(other.z, other.y)
    }

    /// Rotation around the y axis: the other point's (x, z) pair seen from
    /// this point's planar position.
    pub fn yaw_angle_to(&self, other: &TuioPoint) -> f32 {
        self.angle(other.x, other.z)
    }

    pub fn roll_degrees_to(&self, other: &TuioPoint) -> f32 {
        to_degrees(self.roll_angle_to(other))
    }

    pub fn pitch_degrees_to(&self, other: &TuioPoint) -> f32 {
        to_degrees(self.pitch_angle_to(other))
    }

    pub fn yaw_degrees_to(&self, other: &TuioPoint) -> f32 {
        to_degrees(self.yaw_angle_to(other))
    }

    // Projection

    pub fn screen_x(&self, width: i32) -> i32 {
        project(self.x, width)
    }

    pub fn screen_y(&self, height: i32) -> i32 {
        project(self.y, height)
    }

    pub fn space_x(&self, width: i32) -> i32 {
        project(self.x, width)
    }

    pub fn space_y(&self, height: i32) -> i32 {
        project(self.y, height)
    }

    pub fn space_z(&self, depth: i32) -> i32 {
        project(self.z, depth)
    }
}

fn project(coordinate: f32, extent: i32) -> i32 {
    (coordinate * extent as f32).round() as i32
}

pub(crate) fn to_degrees(radians: f32) -> f32 {
    radians / PI * 180.0
}
