use std::{f32::consts::TAU, sync::Arc, thread, time::Duration};

use log::{info, warn};

use tuio_client::{
    shared::{Command, RawMessage, SystemClock, TuioMessage},
    AddEvent, BlobFields, ClientConfig, Cursor2D, CursorFields, EventBuffer, ObjectFields,
    RemoveEvent, TuioClient, TuioEntity,
};

use crate::dump_listener::DumpListener;

const FRAME_INTERVAL: Duration = Duration::from_millis(25);
const FRAMES: i32 = 120;

/// Replays a scripted tracker session through the client: a finger swiping
/// across the surface, a tagged puck being turned and a palm blob spreading
/// out. Every bundle goes through the same decode path a network transport
/// would use.
pub struct App {
    client: Arc<TuioClient>,
    events: Arc<EventBuffer>,
    frame: i32,
    touches: u32,
}

impl App {
    pub fn new() -> Self {
        info!("TUIO dump demo started");

        let client = Arc::new(TuioClient::new(ClientConfig::default(), Arc::new(SystemClock::new())));
        let events = Arc::new(EventBuffer::new());
        client.add_listener(Arc::new(DumpListener));
        client.add_listener(events.clone());
        client.connect();

        App {
            client,
            events,
            frame: 0,
            touches: 0,
        }
    }

    /// Sends the next frame. Returns false once the script is over.
    pub fn update(&mut self) -> bool {
        if self.frame >= FRAMES {
            return false;
        }
        self.frame += 1;

        let bundle = self.script_frame(self.frame);
        if let Err(error) = self.client.process_bundle(&bundle) {
            warn!("bundle rejected: {}", error);
        }

        // every so often the network delivers a stale bundle
        if self.frame % 40 == 0 {
            let stale = self.script_frame(self.frame - 3);
            self.client.process_bundle(&stale).ok();
        }

        let mut events = self.events.take();
        self.touches += events.read::<AddEvent<Cursor2D>>().count() as u32;
        for cursor in events.read::<RemoveEvent<Cursor2D>>() {
            info!(
                "touch {} lifted after {} path points",
                cursor.cursor_id(),
                cursor.trackable().path().len()
            );
        }

        thread::sleep(FRAME_INTERVAL);
        true
    }

    pub fn finish(&self) {
        self.client.disconnect();
        let diagnostics = self.client.diagnostics();
        info!(
            "replayed {} frames, {} touches, {} late frames dropped",
            self.frame, self.touches, diagnostics.late_frames
        );
    }

    fn script_frame(&self, frame: i32) -> Vec<RawMessage> {
        let progress = frame as f32 / FRAMES as f32;
        let mut messages = Vec::new();

        // a finger is down for the middle half of the session
        let finger_down = (0.25..0.75).contains(&progress);
        let cursors = if finger_down { vec![1] } else { Vec::new() };
        messages.push(TuioMessage::Cursor2D(Command::Alive(cursors)));
        if finger_down {
            let x = 0.2 + (progress - 0.25) * 1.2 + jitter();
            messages.push(TuioMessage::Cursor2D(Command::Set {
                session_id: 1,
                fields: CursorFields::at(x, 0.5 + jitter(), 0.0),
            }));
        }
        messages.push(TuioMessage::Cursor2D(Command::Fseq(frame)));

        messages.push(TuioMessage::Object2D(Command::Alive(vec![2])));
        messages.push(TuioMessage::Object2D(Command::Set {
            session_id: 2,
            fields: ObjectFields::at(7, 0.7, 0.3, 0.0, (progress * 1.5 * TAU) % TAU),
        }));
        messages.push(TuioMessage::Object2D(Command::Fseq(frame)));

        let spread = 0.05 + 0.1 * progress;
        messages.push(TuioMessage::Blob2D(Command::Alive(vec![3])));
        messages.push(TuioMessage::Blob2D(Command::Set {
            session_id: 3,
            fields: BlobFields::at(0.3, 0.7, 0.0, 0.0, spread, spread * 0.8),
        }));
        messages.push(TuioMessage::Blob2D(Command::Fseq(frame)));

        messages.iter().map(TuioMessage::to_raw).collect()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// sensor noise of a camera-based tracker
fn jitter() -> f32 {
    (fastrand::f32() - 0.5) * 0.002
}
