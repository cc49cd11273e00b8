//! # TUIO Client
//! Reconciles the set/alive/fseq message stream of the nine TUIO profiles
//! into committed cursors, objects and blobs, and reports each frame's
//! changes to registered listeners.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

pub mod shared {
    pub use tuio_shared::{
        turn_delta, ArgReader, Clock, Command, Dimension, Family, ManualClock, MessageError,
        OscArg, Profile, RawMessage, SetArguments, TuioMessage,
    };

    cfg_if! {
        if #[cfg(not(target_arch = "wasm32"))] {
            pub use tuio_shared::SystemClock;
        }
    }
}

mod alive_list;
mod client;
mod client_config;
mod component_id_pool;
mod diagnostics;
mod error;
mod events;
mod frame_clock;
mod kind;
mod listener;
mod listener_registry;
mod receiver;

pub use tuio_shared::{
    Blob3DFields, BlobFields, ComponentId, CursorFields, FrameSequence, HasComponentId,
    HasOrientation, HasOrientation3, HasShape, HasShape3, HasSymbolId, Object3DFields,
    ObjectFields, Orientation, Orientation3, PathTrail, SessionId, Shape, Shape3, SymbolId,
    Trackable, TuioBlob, TuioBlob3D, TuioCursor, TuioEntity, TuioObject, TuioObject3D, TuioPoint,
    TuioState, TuioTime, Velocity,
};

pub use alive_list::AliveList;
pub use client::TuioClient;
pub use client_config::ClientConfig;
pub use component_id_pool::ComponentIdPool;
pub use diagnostics::Diagnostics;
pub use error::TuioClientError;
pub use events::{
    AddEvent, EventBuffer, FrameEvents, RefreshEvent, RemoveEvent, TuioEvent, UpdateEvent,
};
pub use frame_clock::{FrameClock, FrameVerdict};
pub use kind::{
    Blob25D, Blob2D, Blob3D, Cursor25D, Cursor2D, Cursor3D, EntityKind, Object25D, Object2D,
    Object3D,
};
pub use listener::TuioListener;
pub use listener_registry::ListenerKey;
pub use receiver::{Change, KindReceiver};
