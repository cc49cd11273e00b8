use std::collections::VecDeque;

use crate::point::TuioPoint;

/// Bounded, oldest-first history of an entity's positions.
///
/// Never empty: the newest point is kept apart from the older history so the
/// current position is always available.
#[derive(Clone, Debug)]
pub struct PathTrail {
    history: VecDeque<TuioPoint>,
    latest: TuioPoint,
    capacity: usize,
}

impl PathTrail {
    /// `capacity` counts every retained point, the newest included, and is
    /// at least one.
    pub fn new(first: TuioPoint, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: VecDeque::with_capacity(capacity - 1),
            latest: first,
            capacity,
        }
    }

    pub fn push(&mut self, point: TuioPoint) {
        let previous = std::mem::replace(&mut self.latest, point);
        if self.capacity > 1 {
            self.history.push_back(previous);
        }
        while self.history.len() + 1 > self.capacity {
            self.history.pop_front();
        }
    }

    pub fn last(&self) -> &TuioPoint {
        &self.latest
    }

    pub fn len(&self) -> usize {
        self.history.len() + 1
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &TuioPoint> {
        self.history.iter().chain(std::iter::once(&self.latest))
    }

    pub fn to_vec(&self) -> Vec<TuioPoint> {
        self.iter().copied().collect()
    }
}
