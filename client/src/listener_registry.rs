use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, PoisonError, RwLock,
    },
};

use log::warn;

use crate::{diagnostics::DiagnosticCounters, listener::TuioListener};

/// Handle returned on registration, used to unregister the listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerKey(u64);

pub struct ListenerRegistry {
    listeners: RwLock<Vec<(ListenerKey, Arc<dyn TuioListener>)>>,
    next_key: AtomicU64,
    isolate_panics: bool,
    diagnostics: Arc<DiagnosticCounters>,
}

impl ListenerRegistry {
    pub fn new(isolate_panics: bool, diagnostics: Arc<DiagnosticCounters>) -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
            next_key: AtomicU64::new(0),
            isolate_panics,
            diagnostics,
        }
    }

    pub fn register(&self, listener: Arc<dyn TuioListener>) -> ListenerKey {
        let key = ListenerKey(self.next_key.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((key, listener));
        key
    }

    /// Returns whether the key was registered.
    pub fn unregister(&self, key: ListenerKey) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(listener_key, _)| *listener_key != key);
        listeners.len() != before
    }

    pub fn clear(&self) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes `notify` on every listener in registration order.
    ///
    /// Iterates a snapshot of the registry, so listeners may register or
    /// unregister (themselves included) from inside a callback.
    pub fn dispatch(&self, what: &str, notify: impl Fn(&dyn TuioListener)) {
        let listeners: Vec<Arc<dyn TuioListener>> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            if !self.isolate_panics {
                notify(listener.as_ref());
                continue;
            }
            let result = panic::catch_unwind(AssertUnwindSafe(|| notify(listener.as_ref())));
            if result.is_err() {
                self.diagnostics.listener_fault();
                warn!("listener panicked handling {}; continuing with the next listener", what);
            }
        }
    }
}
