/// Randomized frame sequences checked against the tracking invariants.
use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use tuio_client::{
    shared::TuioMessage, Blob2D, BlobFields, ClientConfig, Cursor2D, CursorFields, TuioEntity,
};
use tuio_test::{alive, assert_path_consistent, fseq, set, TestSession};

/// One frame: the sessions present and where each one is
fn frame_strategy() -> impl Strategy<Value = BTreeMap<i64, (f32, f32)>> {
    prop::collection::btree_map(0i64..12, (0.0f32..1.0, 0.0f32..1.0), 0..8)
}

fn cursor_frame(number: i32, frame: &BTreeMap<i64, (f32, f32)>) -> Vec<TuioMessage> {
    let session_ids: Vec<i64> = frame.keys().copied().collect();
    let mut messages = vec![alive::<Cursor2D>(&session_ids)];
    for (session_id, (x, y)) in frame {
        messages.push(set::<Cursor2D>(*session_id, CursorFields::at(*x, *y, 0.0)));
    }
    messages.push(fseq::<Cursor2D>(number));
    messages
}

proptest! {
    #[test]
    fn component_ids_stay_unique(frames in prop::collection::vec(frame_strategy(), 1..40)) {
        let session = TestSession::new();

        for (index, frame) in frames.iter().enumerate() {
            session.advance_millis(15).send(cursor_frame(index as i32 + 1, frame));

            let cursors = session.client.cursors();
            let live: BTreeSet<i64> = cursors.iter().map(|c| c.session_id()).collect();
            let expected: BTreeSet<i64> = frame.keys().copied().collect();
            prop_assert_eq!(live, expected);

            let ids: BTreeSet<i32> = cursors.iter().map(|c| c.cursor_id()).collect();
            prop_assert_eq!(ids.len(), cursors.len());
            prop_assert!(ids.iter().all(|id| *id >= 0));
        }
    }

    #[test]
    fn blob_ids_stay_unique(frames in prop::collection::vec(frame_strategy(), 1..30)) {
        let session = TestSession::new();

        for (index, frame) in frames.iter().enumerate() {
            let session_ids: Vec<i64> = frame.keys().copied().collect();
            let mut messages = vec![alive::<Blob2D>(&session_ids)];
            for (session_id, (x, y)) in frame {
                messages.push(set::<Blob2D>(*session_id, BlobFields::at(*x, *y, 0.0, 0.0, 0.05, 0.05)));
            }
            messages.push(fseq::<Blob2D>(index as i32 + 1));
            session.advance_millis(15).send(messages);

            let blobs = session.client.blobs();
            let ids: BTreeSet<i32> = blobs.iter().map(|b| b.blob_id()).collect();
            prop_assert_eq!(ids.len(), blobs.len());
        }
    }

    #[test]
    fn paths_stay_bounded(
        capacity in 1usize..16,
        steps in prop::collection::vec((0.0f32..1.0, 0.0f32..1.0), 1..60),
    ) {
        let session = TestSession::with_config(ClientConfig {
            path_capacity: capacity,
            ..Default::default()
        });

        for (index, (x, y)) in steps.iter().enumerate() {
            let frame = BTreeMap::from([(1i64, (*x, *y))]);
            session.advance_millis(15).send(cursor_frame(index as i32 + 1, &frame));

            let cursor = session.client.cursor(1).unwrap();
            assert_path_consistent!(cursor, capacity);
        }
    }
}
