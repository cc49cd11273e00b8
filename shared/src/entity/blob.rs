use crate::{
    entity::{
        capabilities::{HasComponentId, HasOrientation, HasShape},
        orientation::Orientation,
        shape::Shape,
        state::TuioState,
        trackable::{Trackable, Velocity},
        tuio_entity::TuioEntity,
    },
    time::TuioTime,
    types::{ComponentId, SessionId, UNASSIGNED_COMPONENT_ID},
};

/// Arguments of a planar (2D or 2.5D) blob `set` message.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlobFields {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub angle: f32,
    pub width: f32,
    pub height: f32,
    pub area: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub z_speed: f32,
    pub rotation_speed: f32,
    pub motion_accel: f32,
    pub rotation_accel: f32,
}

impl BlobFields {
    pub fn at(x: f32, y: f32, z: f32, angle: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            z,
            angle,
            width,
            height,
            area: width * height,
            ..Default::default()
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.width, self.height, self.area)
    }
}

/// An untagged region with an orientation and an approximate extent.
#[derive(Clone, Debug)]
pub struct TuioBlob {
    trackable: Trackable,
    blob_id: ComponentId,
    orientation: Orientation,
    shape: Shape,
}

impl TuioBlob {
    pub fn blob_id(&self) -> ComponentId {
        self.blob_id
    }

    pub fn width(&self) -> f32 {
        self.shape.width
    }

    pub fn height(&self) -> f32 {
        self.shape.height
    }

    pub fn area(&self) -> f32 {
        self.shape.area
    }

    fn resize(&mut self, shape: Shape) {
        let resized = self.shape.is_resized(&shape);
        self.shape = shape;
        if resized {
            self.trackable.set_state(TuioState::Resized);
        }
    }
}

impl HasComponentId for TuioBlob {
    fn component_id(&self) -> ComponentId {
        self.blob_id
    }
}

impl HasOrientation for TuioBlob {
    fn orientation(&self) -> &Orientation {
        &self.orientation
    }
}

impl HasShape for TuioBlob {
    fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl TuioEntity for TuioBlob {
    type Fields = BlobFields;

    const RECYCLES_COMPONENT_ID: bool = true;

    fn create(time: TuioTime, session_id: SessionId, fields: &BlobFields, path_capacity: usize) -> Self {
        Self {
            trackable: Trackable::new(time, session_id, fields.x, fields.y, fields.z, path_capacity),
            blob_id: UNASSIGNED_COMPONENT_ID,
            orientation: Orientation::new(fields.angle),
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

    fn matches(&self, fields: &BlobFields) -> bool {
        let t = &self.trackable;
        let o = &self.orientation;
        t.x() == fields.x
            && t.y() == fields.y
            && t.z() == fields.z
            && o.angle() == fields.angle
            && self.shape == fields.shape()
            && t.x_speed() == fields.x_speed
            && t.y_speed() == fields.y_speed
            && t.z_speed() == fields.z_speed
            && o.rotation_speed() == fields.rotation_speed
            && t.motion_accel() == fields.motion_accel
            && o.rotation_accel() == fields.rotation_accel
    }

    fn needs_derivation(&self, fields: &BlobFields) -> bool {
        let t = &self.trackable;
        (fields.x != t.x() && fields.x_speed == 0.0)
            || (fields.y != t.y() && fields.y_speed == 0.0)
            || (fields.z != t.z() && fields.z_speed == 0.0)
            || (fields.angle != self.orientation.angle() && fields.rotation_speed == 0.0)
    }

    fn update_derived(&mut self, time: TuioTime, fields: &BlobFields) {
        let dt = self.trackable.update_derived(time, fields.x, fields.y, fields.z);
        self.orientation.update_derived(fields.angle, dt);

        let state = self.trackable.state().with_rotation(self.orientation.rotation_accel());
        self.trackable.set_state(state);
        self.resize(fields.shape());
    }

    fn update_explicit(&mut self, time: TuioTime, fields: &BlobFields) {
        self.trackable.update_explicit(
            time,
            fields.x,
            fields.y,
            fields.z,
            Velocity::new(fields.x_speed, fields.y_speed, fields.z_speed),
            fields.motion_accel,
        );
        self.orientation
            .update_explicit(fields.angle, fields.rotation_speed, fields.rotation_accel);

        let state = self.trackable.state().with_rotation(fields.rotation_accel);
        self.trackable.set_state(state);
        self.resize(fields.shape());
    }

    fn is_moving(&self) -> bool {
        self.trackable.is_moving()
            || matches!(self.trackable.state(), TuioState::Rotating | TuioState::Resized)
    }
}
