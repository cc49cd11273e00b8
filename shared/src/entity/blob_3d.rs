use crate::{
    entity::{
        capabilities::{HasComponentId, HasOrientation3, HasShape3},
        orientation::Orientation3,
        shape::Shape3,
        state::TuioState,
        trackable::{Trackable, Velocity},
        tuio_entity::TuioEntity,
    },
    time::TuioTime,
    types::{ComponentId, SessionId, UNASSIGNED_COMPONENT_ID},
};

/// Arguments of a `/tuio/3Dblb` `set` message.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Blob3DFields {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub volume: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub z_speed: f32,
    pub roll_speed: f32,
    pub pitch_speed: f32,
    pub yaw_speed: f32,
    pub motion_accel: f32,
    pub rotation_accel: f32,
}

impl Blob3DFields {
    pub fn at(x: f32, y: f32, z: f32, width: f32, height: f32, depth: f32) -> Self {
        Self {
            x,
            y,
            z,
            width,
            height,
            depth,
            volume: width * height * depth,
            ..Default::default()
        }
    }

    pub fn shape(&self) -> Shape3 {
        Shape3::new(self.width, self.height, self.depth, self.volume)
    }
}

#[derive(Clone, Debug)]
pub struct TuioBlob3D {
    trackable: Trackable,
    blob_id: ComponentId,
    orientation: Orientation3,
    shape: Shape3,
}

impl TuioBlob3D {
    pub fn blob_id(&self) -> ComponentId {
        self.blob_id
    }

    pub fn width(&self) -> f32 {
        self.shape.width
    }

    pub fn height(&self) -> f32 {
        self.shape.height
    }

    pub fn depth(&self) -> f32 {
        self.shape.depth
    }

    pub fn volume(&self) -> f32 {
        self.shape.volume
    }

    fn resize(&mut self, shape: Shape3) {
        let resized = self.shape.is_resized(&shape);
        self.shape = shape;
        if resized {
            self.trackable.set_state(TuioState::Resized);
        }
    }
}

impl HasComponentId for TuioBlob3D {
    fn component_id(&self) -> ComponentId {
        self.blob_id
    }
}

impl HasOrientation3 for TuioBlob3D {
    fn orientation_3d(&self) -> &Orientation3 {
        &self.orientation
    }
}

impl HasShape3 for TuioBlob3D {
    fn shape_3d(&self) -> &Shape3 {
        &self.shape
    }
}

impl TuioEntity for TuioBlob3D {
    type Fields = Blob3DFields;

    const RECYCLES_COMPONENT_ID: bool = true;

    fn create(time: TuioTime, session_id: SessionId, fields: &Blob3DFields, path_capacity: usize) -> Self {
        Self {
            trackable: Trackable::new(time, session_id, fields.x, fields.y, fields.z, path_capacity),
            blob_id: UNASSIGNED_COMPONENT_ID,
            orientation: Orientation3::new(fields.roll, fields.pitch, fields.yaw),
            shape: fields.shape(),
        }
    }

    fn trackable(&self) -> &Trackable {
        &self.trackable
    }

    fn trackable_mut(&mut self) -> &mut Trackable {
        &mut self.trackable
    }

    fn recyclable_id(&self) -> Option<ComponentId> {
        Some(self.blob_id)
    }

    fn assign_component_id(&mut self, component_id: ComponentId) {
        self.blob_id = component_id;
    }

    fn matches(&self, fields: &Blob3DFields) -> bool {
        let t = &self.trackable;
        let o = &self.orientation;
        t.x() == fields.x
            && t.y() == fields.y
            && t.z() == fields.z
            && o.roll() == fields.roll
            && o.pitch() == fields.pitch
            && o.yaw() == fields.yaw
            && self.shape == fields.shape()
            && t.x_speed() == fields.x_speed
            && t.y_speed() == fields.y_speed
            && t.z_speed() == fields.z_speed
            && o.roll_speed() == fields.roll_speed
            && o.pitch_speed() == fields.pitch_speed
            && o.yaw_speed() == fields.yaw_speed
            && t.motion_accel() == fields.motion_accel
            && o.rotation_accel() == fields.rotation_accel
    }

    fn needs_derivation(&self, fields: &Blob3DFields) -> bool {
        let t = &self.trackable;
        let o = &self.orientation;
        (fields.x != t.x() && fields.x_speed == 0.0)
            || (fields.y != t.y() && fields.y_speed == 0.0)
            || (fields.z != t.z() && fields.z_speed == 0.0)
            || (fields.roll != o.roll() && fields.roll_speed == 0.0)
            || (fields.pitch != o.pitch() && fields.pitch_speed == 0.0)
            || (fields.yaw != o.yaw() && fields.yaw_speed == 0.0)
    }

    fn update_derived(&mut self, time: TuioTime, fields: &Blob3DFields) {
        let dt = self.trackable.update_derived(time, fields.x, fields.y, fields.z);
        self.orientation
            .update_derived(fields.roll, fields.pitch, fields.yaw, dt);

        let state = self.trackable.state().with_rotation(self.orientation.rotation_accel());
        self.trackable.set_state(state);
        self.resize(fields.shape());
    }

    fn update_explicit(&mut self, time: TuioTime, fields: &Blob3DFields) {
        self.trackable.update_explicit(
            time,
            fields.x,
            fields.y,
            fields.z,
            Velocity::new(fields.x_speed, fields.y_speed, fields.z_speed),
            fields.motion_accel,
        );
        self.orientation.update_explicit(
            fields.roll,
            fields.pitch,
            fields.yaw,
            fields.roll_speed,
            fields.pitch_speed,
            fields.yaw_speed,
            fields.rotation_accel,
        );

        let state = self.trackable.state().with_rotation(fields.rotation_accel);
        self.trackable.set_state(state);
        self.resize(fields.shape());
    }

    fn is_moving(&self) -> bool {
        self.trackable.is_moving()
            || matches!(self.trackable.state(), TuioState::Rotating | TuioState::Resized)
    }
}
