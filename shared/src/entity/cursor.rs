use crate::{
    entity::{
        capabilities::HasComponentId,
        trackable::{Trackable, Velocity},
        tuio_entity::TuioEntity,
    },
    time::TuioTime,
    types::{ComponentId, SessionId, UNASSIGNED_COMPONENT_ID},
};

/// Arguments of a cursor `set` message. Planar cursors leave `z` and
/// `z_speed` at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFields {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub z_speed: f32,
    pub motion_accel: f32,
}

impl CursorFields {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            ..Default::default()
        }
    }
}

/// A pointer-like touch, shared by the 2D, 2.5D and 3D cursor profiles.
#[derive(Clone, Debug)]
pub struct TuioCursor {
    trackable: Trackable,
    cursor_id: ComponentId,
}

impl TuioCursor {
    pub fn cursor_id(&self) -> ComponentId {
        self.cursor_id
    }
}

impl HasComponentId for TuioCursor {
    fn component_id(&self) -> ComponentId {
        self.cursor_id
    }
}

impl TuioEntity for TuioCursor {
    type Fields = CursorFields;

    const RECYCLES_COMPONENT_ID: bool = true;

    fn create(time: TuioTime, session_id: SessionId, fields: &CursorFields, path_capacity: usize) -> Self {
        Self {
            trackable: Trackable::new(time, session_id, fields.x, fields.y, fields.z, path_capacity),
            cursor_id: UNASSIGNED_COMPONENT_ID,
        }
    }

    fn trackable(&self) -> &Trackable {
        &self.trackable
    }

    fn trackable_mut(&mut self) -> &mut Trackable {
        &mut self.trackable
    }

    fn recyclable_id(&self) -> Option<ComponentId> {
        Some(self.cursor_id)
    }

    fn assign_component_id(&mut self, component_id: ComponentId) {
        self.cursor_id = component_id;
    }

    fn matches(&self, fields: &CursorFields) -> bool {
        let t = &self.trackable;
        t.x() == fields.x
            && t.y() == fields.y
            && t.z() == fields.z
            && t.x_speed() == fields.x_speed
            && t.y_speed() == fields.y_speed
            && t.z_speed() == fields.z_speed
            && t.motion_accel() == fields.motion_accel
    }

    fn needs_derivation(&self, fields: &CursorFields) -> bool {
        let t = &self.trackable;
        (fields.x != t.x() && fields.x_speed == 0.0)
            || (fields.y != t.y() && fields.y_speed == 0.0)
            || (fields.z != t.z() && fields.z_speed == 0.0)
    }

    fn update_derived(&mut self, time: TuioTime, fields: &CursorFields) {
        self.trackable.update_derived(time, fields.x, fields.y, fields.z);
    }

    fn update_explicit(&mut self, time: TuioTime, fields: &CursorFields) {
        self.trackable.update_explicit(
            time,
            fields.x,
            fields.y,
            fields.z,
            Velocity::new(fields.x_speed, fields.y_speed, fields.z_speed),
            fields.motion_accel,
        );
    }

    fn is_moving(&self) -> bool {
        self.trackable.is_moving()
    }
}
