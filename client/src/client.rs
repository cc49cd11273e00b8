use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use log::{debug, info, warn};

use tuio_shared::{
    Clock, Command, FrameSequence, MessageError, RawMessage, SessionId, TuioBlob, TuioBlob3D,
    TuioCursor, TuioEntity, TuioMessage, TuioObject, TuioObject3D, TuioTime,
};

use crate::{
    client_config::ClientConfig,
    diagnostics::{DiagnosticCounters, Diagnostics},
    error::TuioClientError,
    frame_clock::{FrameClock, FrameVerdict},
    kind::{
        Blob25D, Blob2D, Blob3D, Cursor25D, Cursor2D, Cursor3D, EntityKind, Object25D, Object2D,
        Object3D, Receivers,
    },
    listener::TuioListener,
    listener_registry::{ListenerKey, ListenerRegistry},
    receiver::Change,
};

/// Reconciles decoded profile messages into committed entity state and
/// fans the resulting changes out to registered listeners.
///
/// All methods take `&self`: one thread feeds messages while any number of
/// others query snapshots through a shared `Arc<TuioClient>`.
pub struct TuioClient {
    config: ClientConfig,
    frame_clock: FrameClock,
    receivers: Receivers,
    listeners: ListenerRegistry,
    diagnostics: Arc<DiagnosticCounters>,
    connected: AtomicBool,
}

impl TuioClient {
    /// Create a new TuioClient
    pub fn new(config: ClientConfig, clock: Arc<dyn Clock>) -> Self {
        let diagnostics = Arc::new(DiagnosticCounters::new());
        let frame_clock = FrameClock::new(clock, config.late_frame_tolerance, config.resync_interval);
        let receivers = Receivers::new(config.path_capacity, &diagnostics);
        let listeners = ListenerRegistry::new(config.isolate_listener_panics, diagnostics.clone());

        Self {
            config,
            frame_clock,
            receivers,
            listeners,
            diagnostics,
            connected: AtomicBool::new(false),
        }
    }

    // Connection

    /// Starts a new session: every kind is emptied, the frame counter is
    /// reset and the session clock restarts. Connecting again while
    /// connected does nothing.
    pub fn connect(&self) {
        if self.connected.swap(true, Ordering::SeqCst) {
            return;
        }
        self.reset_session();
        info!("TUIO client connected");
    }

    /// Ends the session, emptying every kind. No removal events are sent.
    pub fn disconnect(&self) {
        if !self.connected.swap(false, Ordering::SeqCst) {
            return;
        }
        self.reset_session();
        info!("TUIO client disconnected");
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // Listeners

    pub fn add_listener(&self, listener: Arc<dyn TuioListener>) -> ListenerKey {
        let key = self.listeners.register(listener);
        info!("listener registered, {} total", self.listeners.len());
        key
    }

    /// Returns whether the listener was registered.
    pub fn remove_listener(&self, key: ListenerKey) -> bool {
        let removed = self.listeners.unregister(key);
        if removed {
            info!("listener removed, {} remaining", self.listeners.len());
        }
        removed
    }

    pub fn clear_listeners(&self) {
        self.listeners.clear();
        info!("all listeners removed");
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // Messages

    /// Decodes and applies one transport message. Messages that fail to
    /// decode are dropped and counted.
    pub fn process_raw(&self, raw: &RawMessage) -> Result<(), TuioClientError> {
        if !self.is_connected() {
            return Err(TuioClientError::NotConnected);
        }
        match TuioMessage::decode(raw) {
            Ok(message) => self.process_message(message),
            Err(error) => {
                self.diagnostics.dropped_message();
                match &error {
                    MessageError::UnknownCommand { .. } => debug!("{}", error),
                    _ => warn!("{}", error),
                }
                Err(error.into())
            }
        }
    }

    /// Applies the messages of one bundle in order. Undecodable messages are
    /// skipped; the rest of the bundle still applies.
    pub fn process_bundle<'a>(
        &self,
        bundle: impl IntoIterator<Item = &'a RawMessage>,
    ) -> Result<(), TuioClientError> {
        for raw in bundle {
            match self.process_raw(raw) {
                Err(TuioClientError::NotConnected) => return Err(TuioClientError::NotConnected),
                Err(TuioClientError::Decode(_)) | Ok(()) => {}
            }
        }
        Ok(())
    }

    pub fn process_message(&self, message: TuioMessage) -> Result<(), TuioClientError> {
        if !self.is_connected() {
            return Err(TuioClientError::NotConnected);
        }
        match message {
            TuioMessage::Cursor2D(command) => self.route::<Cursor2D>(command),
            TuioMessage::Cursor25D(command) => self.route::<Cursor25D>(command),
            TuioMessage::Cursor3D(command) => self.route::<Cursor3D>(command),
            TuioMessage::Object2D(command) => self.route::<Object2D>(command),
            TuioMessage::Object25D(command) => self.route::<Object25D>(command),
            TuioMessage::Object3D(command) => self.route::<Object3D>(command),
            TuioMessage::Blob2D(command) => self.route::<Blob2D>(command),
            TuioMessage::Blob25D(command) => self.route::<Blob25D>(command),
            TuioMessage::Blob3D(command) => self.route::<Blob3D>(command),
        }
        Ok(())
    }

    // Queries

    /// Point-in-time copy of every committed entity of kind `K`, ordered by
    /// session id.
    pub fn live<K: EntityKind>(&self) -> Vec<K::Entity> {
        K::receiver(&self.receivers).live()
    }

    pub fn get<K: EntityKind>(&self, session_id: SessionId) -> Option<K::Entity> {
        K::receiver(&self.receivers).get(session_id)
    }

    /// Session ids of the alive list committed for kind `K`.
    pub fn alive_ids<K: EntityKind>(&self) -> Vec<SessionId> {
        K::receiver(&self.receivers).alive_ids()
    }

    pub fn cursors(&self) -> Vec<TuioCursor> {
        self.live::<Cursor2D>()
    }

    pub fn cursor(&self, session_id: SessionId) -> Option<TuioCursor> {
        self.get::<Cursor2D>(session_id)
    }

    pub fn cursors_25d(&self) -> Vec<TuioCursor> {
        self.live::<Cursor25D>()
    }

    pub fn cursor_25d(&self, session_id: SessionId) -> Option<TuioCursor> {
        self.get::<Cursor25D>(session_id)
    }

    pub fn cursors_3d(&self) -> Vec<TuioCursor> {
        self.live::<Cursor3D>()
    }

    pub fn cursor_3d(&self, session_id: SessionId) -> Option<TuioCursor> {
        self.get::<Cursor3D>(session_id)
    }

    pub fn objects(&self) -> Vec<TuioObject> {
        self.live::<Object2D>()
    }

    pub fn object(&self, session_id: SessionId) -> Option<TuioObject> {
        self.get::<Object2D>(session_id)
    }

    pub fn objects_25d(&self) -> Vec<TuioObject> {
        self.live::<Object25D>()
    }

    pub fn object_25d(&self, session_id: SessionId) -> Option<TuioObject> {
        self.get::<Object25D>(session_id)
    }

    pub fn objects_3d(&self) -> Vec<TuioObject3D> {
        self.live::<Object3D>()
    }

    pub fn object_3d(&self, session_id: SessionId) -> Option<TuioObject3D> {
        self.get::<Object3D>(session_id)
    }

    pub fn blobs(&self) -> Vec<TuioBlob> {
        self.live::<Blob2D>()
    }

    pub fn blob(&self, session_id: SessionId) -> Option<TuioBlob> {
        self.get::<Blob2D>(session_id)
    }

    pub fn blobs_25d(&self) -> Vec<TuioBlob> {
        self.live::<Blob25D>()
    }

    pub fn blob_25d(&self, session_id: SessionId) -> Option<TuioBlob> {
        self.get::<Blob25D>(session_id)
    }

    pub fn blobs_3d(&self) -> Vec<TuioBlob3D> {
        self.live::<Blob3D>()
    }

    pub fn blob_3d(&self, session_id: SessionId) -> Option<TuioBlob3D> {
        self.get::<Blob3D>(session_id)
    }

    /// Last adopted frame sequence number.
    pub fn frame(&self) -> FrameSequence {
        self.frame_clock.frame()
    }

    /// Time stamped on the frame being assembled.
    pub fn frame_time(&self) -> TuioTime {
        self.frame_clock.current_time()
    }

    pub fn session_time(&self) -> TuioTime {
        self.frame_clock.session_time()
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics.snapshot()
    }

    // Private

    fn reset_session(&self) {
        self.receivers.clear();
        self.frame_clock.reset();
        self.diagnostics.reset();
    }

    fn route<K: EntityKind>(&self, command: Command<<K::Entity as TuioEntity>::Fields>) {
        let receiver = K::receiver(&self.receivers);
        match command {
            Command::Set { session_id, fields } => receiver.set(session_id, fields),
            Command::Alive(session_ids) => receiver.alive(&session_ids),
            Command::Fseq(frame) => match self.frame_clock.close_frame(frame) {
                FrameVerdict::Late => {
                    receiver.discard();
                    self.diagnostics.late_frame();
                    debug!(
                        "{}: discarding late frame {} (current frame {})",
                        K::PROFILE,
                        frame,
                        self.frame_clock.frame()
                    );
                }
                FrameVerdict::Commit(frame_time) => {
                    let changes = receiver.commit(frame_time);
                    self.dispatch::<K>(changes, frame_time);
                }
            },
        }
    }

    fn dispatch<K: EntityKind>(&self, changes: Vec<(Change, K::Entity)>, frame_time: TuioTime) {
        for (change, entity) in &changes {
            self.listeners
                .dispatch(K::PROFILE.label(), |listener| K::notify(listener, *change, entity));
        }
        self.listeners
            .dispatch("refresh", |listener| listener.refresh(frame_time));
    }
}
