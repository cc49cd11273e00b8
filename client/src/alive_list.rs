use std::mem;

use tuio_shared::SessionId;

/// Double-buffered alive list: the set committed with the last frame, and
/// the set announced for the frame being assembled.
#[derive(Debug, Default)]
pub struct AliveList {
    current: Vec<SessionId>,
    staged: Vec<SessionId>,
    has_staged: bool,
}

impl AliveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &[SessionId] {
        &self.current
    }

    /// Replaces the staged list, reusing its allocation.
    pub fn stage(&mut self, session_ids: &[SessionId]) {
        self.staged.clear();
        self.staged.extend_from_slice(session_ids);
        self.has_staged = true;
    }

    /// Ids alive at the last frame but missing from the staged list.
    pub fn departed(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.current
            .iter()
            .copied()
            .filter(|id| !self.staged.contains(id))
    }

    /// Promotes the staged list. Frames that never announced an alive list
    /// keep the current one; swapping unconditionally would bring back the
    /// list from two frames ago.
    pub fn swap(&mut self) {
        if self.has_staged {
            mem::swap(&mut self.current, &mut self.staged);
            self.has_staged = false;
        }
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.staged.clear();
        self.has_staged = false;
    }
}
