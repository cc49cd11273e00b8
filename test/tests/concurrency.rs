/// Reader threads querying snapshots while the feeding thread commits
/// frames.
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
};

use tuio_client::{Blob2D, BlobFields, Cursor2D, CursorFields, TuioEntity};
use tuio_test::{alive, fseq, set, TestSession};

const FRAMES: i32 = 300;

#[test]
fn readers_always_see_committed_frames() {
    let session = TestSession::new();
    let feeding = Arc::new(AtomicBool::new(true));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let client = session.client.clone();
            let feeding = feeding.clone();
            thread::spawn(move || {
                let mut snapshots = 0;
                while feeding.load(Ordering::Acquire) {
                    let cursors = client.cursors();
                    // every frame commits exactly two cursors with distinct ids
                    assert!(cursors.is_empty() || cursors.len() == 2, "torn frame: {}", cursors.len());
                    if let [first, second] = cursors.as_slice() {
                        assert_ne!(first.cursor_id(), second.cursor_id());
                    }
                    for cursor in &cursors {
                        assert_eq!(cursor.trackable().path().last(), cursor.trackable().position());
                    }
                    snapshots += 1;
                }
                snapshots
            })
        })
        .collect();

    for frame in 1..=FRAMES {
        // each frame swaps one of the two cursors for a fresh session
        let base = i64::from(frame);
        let step = frame as f32 * 0.001;
        session.advance_millis(10).send([
            alive::<Cursor2D>(&[base, base + 1]),
            set::<Cursor2D>(base, CursorFields::at(0.2 + step, 0.2, 0.0)),
            set::<Cursor2D>(base + 1, CursorFields::at(0.6, 0.2 + step, 0.0)),
            fseq::<Cursor2D>(frame),
        ]);
    }
    feeding.store(false, Ordering::Release);

    for reader in readers {
        reader.join().expect("reader thread panicked");
    }

    let cursors = session.client.cursors();
    assert_eq!(cursors.len(), 2);
    let mut ids = cursors.iter().map(|c| c.cursor_id()).collect::<Vec<_>>();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn kinds_are_fed_and_read_independently() {
    let session = TestSession::new();
    let client = session.client.clone();

    let blob_reader = thread::spawn(move || {
        let mut max_seen = 0;
        for _ in 0..500 {
            max_seen = max_seen.max(client.blobs().len());
        }
        max_seen
    });

    for frame in 1..=50 {
        let session_id = i64::from(frame);
        session.advance_millis(10).send([
            alive::<Cursor2D>(&[session_id]),
            set::<Cursor2D>(session_id, CursorFields::at(0.5, 0.5, 0.0)),
            fseq::<Cursor2D>(frame),
            alive::<Blob2D>(&[1]),
            set::<Blob2D>(1, BlobFields::at(0.1, 0.1, 0.0, 0.0, 0.05, 0.05)),
            fseq::<Blob2D>(frame),
        ]);
    }

    assert!(blob_reader.join().unwrap() <= 1);
    assert_eq!(session.client.blobs().len(), 1);
    assert_eq!(session.client.cursors().len(), 1);
    assert_eq!(session.client.cursor(50).map(|c| c.cursor_id()), Some(0));
}
