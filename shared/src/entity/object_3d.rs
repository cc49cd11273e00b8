use crate::{
    entity::{
        capabilities::{HasOrientation3, HasSymbolId},
        orientation::Orientation3,
        state::TuioState,
        trackable::{Trackable, Velocity},
        tuio_entity::TuioEntity,
    },
    time::TuioTime,
    types::{ComponentId, SessionId, SymbolId},
};

/// Arguments of a `/tuio/3Dobj` `set` message.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Object3DFields {
    pub symbol_id: SymbolId,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub z_speed: f32,
    pub roll_speed: f32,
    pub pitch_speed: f32,
    pub yaw_speed: f32,
    pub motion_accel: f32,
    pub rotation_accel: f32,
}

impl Object3DFields {
    pub fn at(symbol_id: SymbolId, x: f32, y: f32, z: f32, roll: f32, pitch: f32, yaw: f32) -> Self {
        Self {
            symbol_id,
            x,
            y,
            z,
            roll,
            pitch,
            yaw,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct TuioObject3D {
    trackable: Trackable,
    symbol_id: SymbolId,
    orientation: Orientation3,
}

impl TuioObject3D {
    pub fn symbol_id(&self) -> SymbolId {
        self.symbol_id
    }
}

impl HasSymbolId for TuioObject3D {
    fn symbol_id(&self) -> SymbolId {
        self.symbol_id
    }
}

impl HasOrientation3 for TuioObject3D {
    fn orientation_3d(&self) -> &Orientation3 {
        &self.orientation
    }
}

impl TuioEntity for TuioObject3D {
    type Fields = Object3DFields;

    const RECYCLES_COMPONENT_ID: bool = false;

    fn create(time: TuioTime, session_id: SessionId, fields: &Object3DFields, path_capacity: usize) -> Self {
        Self {
            trackable: Trackable::new(time, session_id, fields.x, fields.y, fields.z, path_capacity),
            symbol_id: fields.symbol_id,
            orientation: Orientation3::new(fields.roll, fields.pitch, fields.yaw),
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

    fn matches(&self, fields: &Object3DFields) -> bool {
        let t = &self.trackable;
        let o = &self.orientation;
        t.x() == fields.x
            && t.y() == fields.y
            && t.z() == fields.z
            && o.roll() == fields.roll
            && o.pitch() == fields.pitch
            && o.yaw() == fields.yaw
            && t.x_speed() == fields.x_speed
            && t.y_speed() == fields.y_speed
            && t.z_speed() == fields.z_speed
            && o.roll_speed() == fields.roll_speed
            && o.pitch_speed() == fields.pitch_speed
            && o.yaw_speed() == fields.yaw_speed
            && t.motion_accel() == fields.motion_accel
            && o.rotation_accel() == fields.rotation_accel
    }

    fn needs_derivation(&self, fields: &Object3DFields) -> bool {
        let t = &self.trackable;
        let o = &self.orientation;
        (fields.x != t.x() && fields.x_speed == 0.0)
            || (fields.y != t.y() && fields.y_speed == 0.0)
            || (fields.z != t.z() && fields.z_speed == 0.0)
            || (fields.roll != o.roll() && fields.roll_speed == 0.0)
            || (fields.pitch != o.pitch() && fields.pitch_speed == 0.0)
            || (fields.yaw != o.yaw() && fields.yaw_speed == 0.0)
    }

    fn update_derived(&mut self, time: TuioTime, fields: &Object3DFields) {
        let dt = self.trackable.update_derived(time, fields.x, fields.y, fields.z);
        self.orientation
            .update_derived(fields.roll, fields.pitch, fields.yaw, dt);

        let state = self.trackable.state().with_rotation(self.orientation.rotation_accel());
        self.trackable.set_state(state);
    }

    fn update_explicit(&mut self, time: TuioTime, fields: &Object3DFields) {
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
    }

    fn is_moving(&self) -> bool {
        self.trackable.is_moving() || self.trackable.state() == TuioState::Rotating
    }
}
