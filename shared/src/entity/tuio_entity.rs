use std::fmt::Debug;

use crate::{
    entity::{state::TuioState, trackable::Trackable},
    time::TuioTime,
    types::{ComponentId, SessionId},
};

/// A tracked entity model as reconciled frame by frame.
///
/// `Fields` is the full argument set of one `set` message for the entity's
/// kind. The receiver compares, creates and updates entities only through
/// this trait.
pub trait TuioEntity: Clone + Debug + Send + Sync + 'static {
    type Fields: Clone + Debug + PartialEq + Send + Sync + 'static;

    /// Whether the kind is anonymous and gets a recycled component id.
    const RECYCLES_COMPONENT_ID: bool;

    fn create(
        time: TuioTime,
        session_id: SessionId,
        fields: &Self::Fields,
        path_capacity: usize,
    ) -> Self;

    fn trackable(&self) -> &Trackable;

    fn trackable_mut(&mut self) -> &mut Trackable;

    /// `None` for kinds that do not recycle ids.
    fn recyclable_id(&self) -> Option<ComponentId>;

    fn assign_component_id(&mut self, _component_id: ComponentId) {}

    /// Whether every field equals the entity's current value.
    fn matches(&self, fields: &Self::Fields) -> bool;

    /// Whether some position or angle axis moved without an explicit speed
    /// for that axis, so motion has to be derived.
    fn needs_derivation(&self, fields: &Self::Fields) -> bool;

    fn update_derived(&mut self, time: TuioTime, fields: &Self::Fields);

    fn update_explicit(&mut self, time: TuioTime, fields: &Self::Fields);

    fn is_moving(&self) -> bool;

    // Provided

    fn session_id(&self) -> SessionId {
        self.trackable().session_id()
    }

    fn state(&self) -> TuioState {
        self.trackable().state()
    }

    fn remove(&mut self, time: TuioTime) {
        self.trackable_mut().remove(time);
    }

    /// Applies a committed `set`, deriving motion where the fields leave it
    /// unspecified.
    fn apply(&mut self, time: TuioTime, fields: &Self::Fields) {
        if self.needs_derivation(fields) {
            self.update_derived(time, fields);
        } else {
            self.update_explicit(time, fields);
        }
    }
}
