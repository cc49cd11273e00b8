use crate::{
    entity::{
        capabilities::{HasOrientation, HasSymbolId},
        orientation::Orientation,
        state::TuioState,
        trackable::{Trackable, Velocity},
        tuio_entity::TuioEntity,
    },
    time::TuioTime,
    types::{ComponentId, SessionId, SymbolId},
};

/// Arguments of a planar (2D or 2.5D) object `set` message.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObjectFields {
    pub symbol_id: SymbolId,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub angle: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub z_speed: f32,
    pub rotation_speed: f32,
    pub motion_accel: f32,
    pub rotation_accel: f32,
}

impl ObjectFields {
    pub fn at(symbol_id: SymbolId, x: f32, y: f32, z: f32, angle: f32) -> Self {
        Self {
            symbol_id,
            x,
            y,
            z,
            angle,
            ..Default::default()
        }
    }
}

/// A tagged tangible object with a single rotation axis.
#[derive(Clone, Debug)]
pub struct TuioObject {
    trackable: Trackable,
    symbol_id: SymbolId,
    orientation: Orientation,
}

impl TuioObject {
    pub fn symbol_id(&self) -> SymbolId {
        self.symbol_id
    }
}

impl HasSymbolId for TuioObject {
    fn symbol_id(&self) -> SymbolId {
        self.symbol_id
    }
}

impl HasOrientation for TuioObject {
    fn orientation(&self) -> &Orientation {
        &self.orientation
    }
}

impl TuioEntity for TuioObject {
    type Fields = ObjectFields;

    const RECYCLES_COMPONENT_ID: bool = false;

    fn create(time: TuioTime, session_id: SessionId, fields: &ObjectFields, path_capacity: usize) -> Self {
        Self {
            trackable: Trackable::new(time, session_id, fields.x, fields.y, fields.z, path_capacity),
            symbol_id: fields.symbol_id,
            orientation: Orientation::new(fields.angle),
        }
    }

    fn trackable(&self) -> &Trackable {
        &self.trackable
    }

    fn trackable_mut(&mut self) -> &mut Trackable {
        &mut self.trackable
    }

    fn recyclable_id(&self) -> Option<ComponentId> {
        None
    }

    fn matches(&self, fields: &ObjectFields) -> bool {
        let t = &self.trackable;
        let o = &self.orientation;
        t.x() == fields.x
            && t.y() == fields.y
            && t.z() == fields.z
            && o.angle() == fields.angle
            && t.x_speed() == fields.x_speed
            && t.y_speed() == fields.y_speed
            && t.z_speed() == fields.z_speed
            && o.rotation_speed() == fields.rotation_speed
            && t.motion_accel() == fields.motion_accel
            && o.rotation_accel() == fields.rotation_accel
    }

    fn needs_derivation(&self, fields: &ObjectFields) -> bool {
        let t = &self.trackable;
        (fields.x != t.x() && fields.x_speed == 0.0)
            || (fields.y != t.y() && fields.y_speed == 0.0)
            || (fields.z != t.z() && fields.z_speed == 0.0)
            || (fields.angle != self.orientation.angle() && fields.rotation_speed == 0.0)
    }

    fn update_derived(&mut self, time: TuioTime, fields: &ObjectFields) {
        let dt = self.trackable.update_derived(time, fields.x, fields.y, fields.z);
        self.orientation.update_derived(fields.angle, dt);

        let state = self.trackable.state().with_rotation(self.orientation.rotation_accel());
        self.trackable.set_state(state);
    }

    fn update_explicit(&mut self, time: TuioTime, fields: &ObjectFields) {
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
    }

    fn is_moving(&self) -> bool {
        self.trackable.is_moving() || self.trackable.state() == TuioState::Rotating
    }
}
