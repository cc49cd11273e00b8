mod blob;
mod blob_3d;
mod capabilities;
mod cursor;
mod object;
mod object_3d;
mod orientation;
mod path_trail;
mod shape;
mod state;
mod trackable;
mod tuio_entity;

pub use blob::{BlobFields, TuioBlob};
pub use blob_3d::{Blob3DFields, TuioBlob3D};
pub use capabilities::{
    HasComponentId, HasOrientation, HasOrientation3, HasShape, HasShape3, HasSymbolId,
};
pub use cursor::{CursorFields, TuioCursor};
pub use object::{ObjectFields, TuioObject};
pub use object_3d::{Object3DFields, TuioObject3D};
pub use orientation::{turn_delta, Orientation, Orientation3};
pub use path_trail::PathTrail;
pub use shape::{Shape, Shape3};
pub use state::TuioState;
pub use trackable::{Trackable, Velocity};
pub use tuio_entity::TuioEntity;
