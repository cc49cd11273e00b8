use std::{
    marker::PhantomData,
    mem,
    sync::{Mutex, PoisonError},
    vec::IntoIter,
};

use tuio_shared::TuioTime;

use crate::{
    kind::{EntityKind, KindEventTable},
    receiver::Change,
};

pub struct KindEvents<E> {
    adds: Vec<E>,
    updates: Vec<E>,
    removes: Vec<E>,
}

impl<E> Default for KindEvents<E> {
    fn default() -> Self {
        Self {
            adds: Vec::new(),
            updates: Vec::new(),
            removes: Vec::new(),
        }
    }
}

impl<E> KindEvents<E> {
    pub fn is_empty(&self) -> bool {
        self.adds.is_empty() && self.updates.is_empty() && self.removes.is_empty()
    }

    fn push(&mut self, change: Change, entity: E) {
        match change {
            Change::Add => self.adds.push(entity),
            Change::Update => self.updates.push(entity),
            Change::Remove => self.removes.push(entity),
        }
    }
}

/// Changes collected by an [`EventBuffer`] since it was last taken.
#[derive(Default)]
pub struct FrameEvents {
    kinds: KindEventTable,
    refreshes: Vec<TuioTime>,
}

impl FrameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.refreshes.is_empty() && self.kinds.is_empty()
    }

    pub fn read<V: TuioEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: TuioEvent>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push<K: EntityKind>(&mut self, change: Change, entity: K::Entity) {
        K::events_mut(&mut self.kinds).push(change, entity);
    }

    pub(crate) fn push_refresh(&mut self, frame_time: TuioTime) {
        self.refreshes.push(frame_time);
    }
}

// Event Trait
pub trait TuioEvent {
    type Iter;

    fn iter(events: &mut FrameEvents) -> Self::Iter;

    fn has(events: &FrameEvents) -> bool;
}

// Add Event
pub struct AddEvent<K: EntityKind> {
    phantom_k: PhantomData<K>,
}

impl<K: EntityKind> TuioEvent for AddEvent<K> {
    type Iter = IntoIter<K::Entity>;

    fn iter(events: &mut FrameEvents) -> Self::Iter {
        let list = mem::take(&mut K::events_mut(&mut events.kinds).adds);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FrameEvents) -> bool {
        !K::events(&events.kinds).adds.is_empty()
    }
}

// Update Event
pub struct UpdateEvent<K: EntityKind> {
    phantom_k: PhantomData<K>,
}

impl<K: EntityKind> TuioEvent for UpdateEvent<K> {
    type Iter = IntoIter<K::Entity>;

    fn iter(events: &mut FrameEvents) -> Self::Iter {
        let list = mem::take(&mut K::events_mut(&mut events.kinds).updates);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FrameEvents) -> bool {
        !K::events(&events.kinds).updates.is_empty()
    }
}

// Remove Event
pub struct RemoveEvent<K: EntityKind> {
    phantom_k: PhantomData<K>,
}

impl<K: EntityKind> TuioEvent for RemoveEvent<K> {
    type Iter = IntoIter<K::Entity>;

    fn iter(events: &mut FrameEvents) -> Self::Iter {
        let list = mem::take(&mut K::events_mut(&mut events.kinds).removes);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FrameEvents) -> bool {
        !K::events(&events.kinds).removes.is_empty()
    }
}

// Refresh Event
pub struct RefreshEvent;

impl TuioEvent for RefreshEvent {
    type Iter = IntoIter<TuioTime>;

    fn iter(events: &mut FrameEvents) -> Self::Iter {
        let list = mem::take(&mut events.refreshes);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FrameEvents) -> bool {
        !events.refreshes.is_empty()
    }
}

/// A listener that queues every change for a consumer that polls, such as a
/// render or game loop.
///
/// ```
/// # use tuio_client::{AddEvent, Cursor2D, EventBuffer};
/// let buffer = EventBuffer::new();
/// let mut events = buffer.take();
/// for cursor in events.read::<AddEvent<Cursor2D>>() {
///     println!("cursor {} down", cursor.cursor_id());
/// }
/// ```
#[derive(Default)]
pub struct EventBuffer {
    events: Mutex<FrameEvents>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes everything collected so far, leaving the buffer empty.
    pub fn take(&self) -> FrameEvents {
        mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn is_empty(&self) -> bool {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub(crate) fn push<K: EntityKind>(&self, change: Change, entity: &K::Entity) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push::<K>(change, entity.clone());
    }

    pub(crate) fn push_refresh(&self, frame_time: TuioTime) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_refresh(frame_time);
    }
}
