use std::sync::Arc;

use tuio_shared::{
    Profile, TuioBlob, TuioBlob3D, TuioCursor, TuioEntity, TuioObject, TuioObject3D, TuioTime,
};

use crate::{
    diagnostics::DiagnosticCounters,
    events::{EventBuffer, KindEvents},
    listener::TuioListener,
    receiver::{Change, KindReceiver},
};

/// One of the nine reconciled entity kinds.
///
/// Implemented only by the zero-sized markers of this module, which select
/// a kind in generic calls such as `client.live::<Cursor2D>()`.
pub trait EntityKind: Send + Sync + Sized + 'static {
    type Entity: TuioEntity;

    const PROFILE: Profile;

    /// Forwards a committed change to the matching listener callback.
    fn notify(listener: &dyn TuioListener, change: Change, entity: &Self::Entity);

    fn receiver(receivers: &Receivers) -> &KindReceiver<Self>;

    fn events(table: &KindEventTable) -> &KindEvents<Self::Entity>;

    fn events_mut(table: &mut KindEventTable) -> &mut KindEvents<Self::Entity>;
}

macro_rules! entity_kinds {
    ($(
        $(#[$meta:meta])*
        $kind:ident => $entity:ty, $slot:ident, [$add:ident, $update:ident, $remove:ident];
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $kind;

            impl EntityKind for $kind {
                type Entity = $entity;

                const PROFILE: Profile = Profile::$kind;

                fn notify(listener: &dyn TuioListener, change: Change, entity: &$entity) {
                    match change {
                        Change::Add => listener.$add(entity),
                        Change::Update => listener.$update(entity),
                        Change::Remove => listener.$remove(entity),
                    }
                }

                fn receiver(receivers: &Receivers) -> &KindReceiver<Self> {
                    &receivers.$slot
                }

                fn events(table: &KindEventTable) -> &KindEvents<$entity> {
                    &table.$slot
                }

                fn events_mut(table: &mut KindEventTable) -> &mut KindEvents<$entity> {
                    &mut table.$slot
                }
            }
        )*

        /// The receivers of all nine kinds.
        pub struct Receivers {
            $($slot: KindReceiver<$kind>,)*
        }

        impl Receivers {
            pub(crate) fn new(path_capacity: usize, diagnostics: &Arc<DiagnosticCounters>) -> Self {
                Self {
                    $($slot: KindReceiver::new(path_capacity, diagnostics.clone()),)*
                }
            }

            pub(crate) fn clear(&self) {
                $(self.$slot.clear();)*
            }
        }

        /// Buffered changes of all nine kinds.
        #[derive(Default)]
        pub struct KindEventTable {
            $($slot: KindEvents<$entity>,)*
        }

        impl KindEventTable {
            pub(crate) fn is_empty(&self) -> bool {
                true $(&& self.$slot.is_empty())*
            }
        }

        impl TuioListener for EventBuffer {
            $(
                fn $add(&self, entity: &$entity) {
                    self.push::<$kind>(Change::Add, entity);
                }

                fn $update(&self, entity: &$entity) {
                    self.push::<$kind>(Change::Update, entity);
                }

                fn $remove(&self, entity: &$entity) {
                    self.push::<$kind>(Change::Remove, entity);
                }
            )*

            fn refresh(&self, frame_time: TuioTime) {
                self.push_refresh(frame_time);
            }
        }
    };
}

entity_kinds! {
    /// `/tuio/2Dcur`
    Cursor2D => TuioCursor, cursors_2d, [add_cursor, update_cursor, remove_cursor];
    /// `/tuio/25Dcur`
    Cursor25D => TuioCursor, cursors_25d, [add_cursor_25d, update_cursor_25d, remove_cursor_25d];
    /// `/tuio/3Dcur`
    Cursor3D => TuioCursor, cursors_3d, [add_cursor_3d, update_cursor_3d, remove_cursor_3d];
    /// `/tuio/2Dobj`
    Object2D => TuioObject, objects_2d, [add_object, update_object, remove_object];
    /// `/tuio/25Dobj`
    Object25D => TuioObject, objects_25d, [add_object_25d, update_object_25d, remove_object_25d];
    /// `/tuio/3Dobj`
    Object3D => TuioObject3D, objects_3d, [add_object_3d, update_object_3d, remove_object_3d];
    /// `/tuio/2Dblb`
    Blob2D => TuioBlob, blobs_2d, [add_blob, update_blob, remove_blob];
    /// `/tuio/25Dblb`
    Blob25D => TuioBlob, blobs_25d, [add_blob_25d, update_blob_25d, remove_blob_25d];
    /// `/tuio/3Dblb`
    Blob3D => TuioBlob3D, blobs_3d, [add_blob_3d, update_blob_3d, remove_blob_3d];
}
