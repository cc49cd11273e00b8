use crate::{
    entity::{
        orientation::{Orientation, Orientation3},
        shape::{Shape, Shape3},
    },
    types::{ComponentId, SymbolId},
};

/// Anonymous entities addressed by a compact, recyclable index.
pub trait HasComponentId {
    fn component_id(&self) -> ComponentId;
}

/// Tangible objects identified by their fiducial symbol.
pub trait HasSymbolId {
    fn symbol_id(&self) -> SymbolId;
}

pub trait HasOrientation {
    fn orientation(&self) -> &Orientation;

    fn angle(&self) -> f32 {
        self.orientation().angle()
    }

    fn angle_degrees(&self) -> f32 {
        self.orientation().angle_degrees()
    }

    fn rotation_speed(&self) -> f32 {
        self.orientation().rotation_speed()
    }

    fn rotation_accel(&self) -> f32 {
        self.orientation().rotation_accel()
    }
}

pub trait HasOrientation3 {
    fn orientation_3d(&self) -> &Orientation3;

    fn roll(&self) -> f32 {
        self.orientation_3d().roll()
    }

    fn pitch(&self) -> f32 {
        self.orientation_3d().pitch()
    }

    fn yaw(&self) -> f32 {
        self.orientation_3d().yaw()
    }

    fn rotation_accel(&self) -> f32 {
        self.orientation_3d().rotation_accel()
    }
}

pub trait HasShape {
    fn shape(&self) -> &Shape;
}

pub trait HasShape3 {
    fn shape_3d(&self) -> &Shape3;
}
