use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::{debug, trace};

use tuio_shared::{ComponentId, SessionId, TuioEntity, TuioTime};

use crate::{
    alive_list::AliveList, component_id_pool::ComponentIdPool, diagnostics::DiagnosticCounters,
    kind::EntityKind,
};

type Fields<K> = <<K as EntityKind>::Entity as TuioEntity>::Fields;

/// A change committed with a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Change {
    Add,
    Update,
    Remove,
}

/// A change buffered for the frame being assembled.
#[derive(Clone, Debug)]
enum FrameEntry<F> {
    Added { session_id: SessionId, fields: F },
    Updated { session_id: SessionId, fields: F },
    Removed { session_id: SessionId },
}

struct KindState<E: TuioEntity> {
    committed: BTreeMap<SessionId, E>,
    alive: AliveList,
    pending: Vec<FrameEntry<E::Fields>>,
    ids: ComponentIdPool,
}

impl<E: TuioEntity> KindState<E> {
    fn new() -> Self {
        Self {
            committed: BTreeMap::new(),
            alive: AliveList::new(),
            pending: Vec::new(),
            ids: ComponentIdPool::new(),
        }
    }

    fn is_pending_removal(&self, session_id: SessionId) -> bool {
        self.pending.iter().any(|entry| {
            matches!(entry, FrameEntry::Removed { session_id: id } if *id == session_id)
        })
    }

    fn live_ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.committed.values().filter_map(|entity| entity.recyclable_id())
    }
}

/// Frame-buffered reconciliation of one entity kind.
///
/// `set` and `alive` only buffer changes for the frame being assembled; the
/// committed map is touched exclusively by `commit`. All state sits behind a
/// single lock that is never held while listeners run.
pub struct KindReceiver<K: EntityKind> {
    state: Mutex<KindState<K::Entity>>,
    path_capacity: usize,
    diagnostics: Arc<DiagnosticCounters>,
}

impl<K: EntityKind> KindReceiver<K> {
    pub fn new(path_capacity: usize, diagnostics: Arc<DiagnosticCounters>) -> Self {
        Self {
            state: Mutex::new(KindState::new()),
            path_capacity,
            diagnostics,
        }
    }

    // Public

    /// Buffers the state of one entity. Entities that are committed with
    /// identical fields produce no change.
    pub fn set(&self, session_id: SessionId, fields: Fields<K>) {
        let mut state = self.lock();
        let entry = match state.committed.get(&session_id) {
            None => FrameEntry::Added { session_id, fields },
            Some(entity) if !entity.matches(&fields) => FrameEntry::Updated { session_id, fields },
            Some(_) => return,
        };
        state.pending.push(entry);
    }

    /// Stages the alive list and buffers a removal for every committed entity
    /// that dropped out of it.
    pub fn alive(&self, session_ids: &[SessionId]) {
        let mut state = self.lock();
        state.alive.stage(session_ids);

        let departed: Vec<SessionId> = state.alive.departed().collect();
        for session_id in departed {
            if !state.committed.contains_key(&session_id) {
                self.unknown_session(session_id, "removal");
                continue;
            }
            if state.is_pending_removal(session_id) {
                continue;
            }
            state.pending.push(FrameEntry::Removed { session_id });
        }
    }

    /// Applies the buffered changes in arrival order and returns them for
    /// dispatch. Removals are stamped `frame_time`.
    pub fn commit(&self, frame_time: TuioTime) -> Vec<(Change, K::Entity)> {
        let mut state = self.lock();
        let pending = std::mem::take(&mut state.pending);
        let mut changes = Vec::with_capacity(pending.len());

        for entry in pending {
            match entry {
                FrameEntry::Removed { session_id } => {
                    let Some(mut entity) = state.committed.remove(&session_id) else {
                        self.unknown_session(session_id, "removal");
                        continue;
                    };
                    entity.remove(frame_time);
                    if let Some(id) = entity.recyclable_id() {
                        let last_position = *entity.trackable().position();
                        let KindState { committed, ids, .. } = &mut *state;
                        ids.release(
                            id,
                            last_position,
                            committed.values().filter_map(|entity| entity.recyclable_id()),
                        );
                    }
                    changes.push((Change::Remove, entity));
                }
                FrameEntry::Added { session_id, fields } => {
                    // announced twice within the frame
                    if let Some(entity) = state.committed.get_mut(&session_id) {
                        entity.apply(frame_time, &fields);
                        changes.push((Change::Update, entity.clone()));
                        continue;
                    }

                    let mut entity = <K::Entity as TuioEntity>::create(
                        frame_time,
                        session_id,
                        &fields,
                        self.path_capacity,
                    );
                    if <K::Entity as TuioEntity>::RECYCLES_COMPONENT_ID {
                        let live_count = state.committed.len();
                        let position = *entity.trackable().position();
                        let id = state.ids.allocate(live_count, &position);
                        entity.assign_component_id(id);
                    }
                    state.committed.insert(session_id, entity.clone());
                    changes.push((Change::Add, entity));
                }
                FrameEntry::Updated { session_id, fields } => {
                    let Some(entity) = state.committed.get_mut(&session_id) else {
                        self.unknown_session(session_id, "update");
                        continue;
                    };
                    entity.apply(frame_time, &fields);
                    changes.push((Change::Update, entity.clone()));
                }
            }
        }

        state.alive.swap();
        trace!(
            "{} frame at {}: {} changes, {} live",
            K::PROFILE,
            frame_time,
            changes.len(),
            state.committed.len()
        );
        changes
    }

    /// Drops the changes buffered for a late frame. The staged alive list is
    /// still promoted.
    pub fn discard(&self) {
        let mut state = self.lock();
        state.pending.clear();
        state.alive.swap();
    }

    /// Point-in-time copy of the committed entities, ordered by session id.
    pub fn live(&self) -> Vec<K::Entity> {
        self.lock().committed.values().cloned().collect()
    }

    pub fn get(&self, session_id: SessionId) -> Option<K::Entity> {
        self.lock().committed.get(&session_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pending_len(&self) -> usize {
        self.lock().pending.len()
    }

    /// Session ids of the alive list committed with the last frame.
    pub fn alive_ids(&self) -> Vec<SessionId> {
        self.lock().alive.current().to_vec()
    }

    /// Component ids currently held by live entities, ascending.
    pub fn component_ids(&self) -> Vec<ComponentId> {
        let state = self.lock();
        let mut ids: Vec<_> = state.live_ids().collect();
        ids.sort_unstable();
        ids
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.committed.clear();
        state.alive.clear();
        state.pending.clear();
        state.ids.clear();
    }

    // Private

    fn lock(&self) -> MutexGuard<'_, KindState<K::Entity>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn unknown_session(&self, session_id: SessionId, what: &str) {
        self.diagnostics.unknown_session_ref();
        debug!(
            "{}: {} references session {} which is not committed",
            K::PROFILE,
            what,
            session_id
        );
    }
}
