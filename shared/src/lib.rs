//! # TUIO Shared
//! Common functionality used by the tuio-client crate: session time, the
//! point primitive, tracked entity models and typed protocol messages.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

mod backends;
mod constants;
mod entity;
mod messages;
mod point;
mod time;
mod types;

cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        pub use backends::SystemClock;
    }
}

pub use constants::{LATE_FRAME_TOLERANCE, MAX_PATH_LENGTH, RESYNC_INTERVAL_MILLIS};
pub use entity::{
    turn_delta, Blob3DFields, BlobFields, CursorFields, HasComponentId, HasOrientation,
    HasOrientation3, HasShape, HasShape3, HasSymbolId, Object3DFields, ObjectFields, Orientation,
    Orientation3, PathTrail, Shape, Shape3, Trackable, TuioBlob, TuioBlob3D, TuioCursor,
    TuioEntity, TuioObject, TuioObject3D, TuioState, Velocity,
};
pub use messages::{
    ArgReader, Command, Dimension, Family, MessageError, OscArg, Profile, RawMessage,
    SetArguments, TuioMessage,
};
pub use point::TuioPoint;
pub use time::{Clock, ManualClock, TuioTime};
pub use types::{ComponentId, FrameSequence, SessionId, SymbolId, UNASSIGNED_COMPONENT_ID};
