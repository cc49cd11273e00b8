use log::debug;

use tuio_shared::{ComponentId, TuioPoint};

/// Hands out compact component ids to anonymous entities.
///
/// Ids below the high-water mark that are not held by a live entity sit in
/// the free list with the last position of their previous holder; a new
/// entity takes over the id freed nearest to where it appeared.
#[derive(Debug)]
pub struct ComponentIdPool {
    max_id: ComponentId,
    free: Vec<(ComponentId, TuioPoint)>,
}

impl Default for ComponentIdPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentIdPool {
    pub fn new() -> Self {
        Self {
            max_id: -1,
            free: Vec::new(),
        }
    }

    pub fn max_id(&self) -> ComponentId {
        self.max_id
    }

    pub fn free_ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.free.iter().map(|(id, _)| *id)
    }

    /// Picks the id for an entity appearing at `position`, with `live_count`
    /// entities already committed.
    pub fn allocate(&mut self, live_count: usize, position: &TuioPoint) -> ComponentId {
        let fresh_id = ComponentId::try_from(live_count).unwrap_or(ComponentId::MAX);

        if fresh_id <= self.max_id {
            if let Some(index) = self.nearest_free(position) {
                let (id, _) = self.free.remove(index);
                debug!("recycling component id {} for entity at {:?}", id, (position.x(), position.y()));
                return id;
            }
        }

        self.max_id = fresh_id;
        fresh_id
    }

    /// Returns `id` to the pool. `last_position` is where its holder was last
    /// seen; `remaining` are the ids still held after the removal.
    pub fn release(
        &mut self,
        id: ComponentId,
        last_position: TuioPoint,
        remaining: impl Iterator<Item = ComponentId>,
    ) {
        if id == self.max_id {
            self.max_id = remaining.max().unwrap_or(-1);
            if self.max_id < 0 {
                self.free.clear();
            } else {
                let max_id = self.max_id;
                self.free.retain(|(free_id, _)| *free_id < max_id);
            }
        } else if id < self.max_id {
            self.free.push((id, last_position));
        }
    }

    pub fn clear(&mut self) {
        self.max_id = -1;
        self.free.clear();
    }

    fn nearest_free(&self, position: &TuioPoint) -> Option<usize> {
        self.free
            .iter()
            .enumerate()
            .min_by(|(_, (_, a)), (_, (_, b))| {
                a.distance_to(position).total_cmp(&b.distance_to(position))
            })
            .map(|(index, _)| index)
    }
}
