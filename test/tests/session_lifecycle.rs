/// Connect/disconnect resets and the frame counter shared by every kind.
use std::sync::Arc;

use tuio_client::{
    shared::ManualClock, AddEvent, Blob2D, BlobFields, ClientConfig, Cursor2D, CursorFields,
    Object2D, ObjectFields, TuioClient, TuioTime,
};
use tuio_test::{alive, fseq, set, TestSession};

#[test]
fn disconnect_empties_every_kind_silently() {
    let session = TestSession::new();
    session.send([
        alive::<Cursor2D>(&[1]),
        set::<Cursor2D>(1, CursorFields::at(0.5, 0.5, 0.0)),
        fseq::<Cursor2D>(7),
        alive::<Object2D>(&[2]),
        set::<Object2D>(2, ObjectFields::at(4, 0.5, 0.5, 0.0, 0.0)),
        fseq::<Object2D>(7),
    ]);
    session.take_lines();

    session.client.disconnect();

    assert!(!session.client.is_connected());
    assert!(session.client.cursors().is_empty());
    assert!(session.client.objects().is_empty());
    assert!(session.client.alive_ids::<Cursor2D>().is_empty());
    assert_eq!(session.client.frame(), 0);
    assert!(session.take_lines().is_empty());
}

#[test]
fn connect_is_idempotent() {
    let session = TestSession::new();
    session.send([
        alive::<Cursor2D>(&[1]),
        set::<Cursor2D>(1, CursorFields::at(0.5, 0.5, 0.0)),
        fseq::<Cursor2D>(3),
    ]);

    // already connected: nothing is reset
    session.client.connect();
    assert_eq!(session.client.cursors().len(), 1);
    assert_eq!(session.client.frame(), 3);

    session.client.disconnect();
    session.client.disconnect();
    assert!(!session.client.is_connected());
}

#[test]
fn reconnecting_starts_a_fresh_session() {
    let session = TestSession::new();
    session.send([
        alive::<Cursor2D>(&[1, 2]),
        set::<Cursor2D>(1, CursorFields::at(0.1, 0.1, 0.0)),
        set::<Cursor2D>(2, CursorFields::at(0.9, 0.9, 0.0)),
        fseq::<Cursor2D>(900),
        fseq::<Cursor2D>(850),
    ]);
    assert_eq!(session.client.diagnostics().late_frames, 1);

    session.client.disconnect();
    session.client.connect();
    assert_eq!(session.client.diagnostics().late_frames, 0);

    // a low sequence number is current again, and ids start over
    session.send([
        alive::<Cursor2D>(&[5]),
        set::<Cursor2D>(5, CursorFields::at(0.5, 0.5, 0.0)),
        fseq::<Cursor2D>(1),
    ]);
    assert_eq!(session.client.cursor(5).map(|c| c.cursor_id()), Some(0));
    assert_eq!(session.client.frame(), 1);
}

#[test]
fn frame_is_shared_across_kinds() {
    let session = TestSession::new();
    session.send([
        alive::<Cursor2D>(&[1]),
        set::<Cursor2D>(1, CursorFields::at(0.5, 0.5, 0.0)),
        fseq::<Cursor2D>(20),
    ]);

    // a blob frame sequenced behind the cursor frame is late
    session.send([
        alive::<Blob2D>(&[1]),
        set::<Blob2D>(1, BlobFields::at(0.5, 0.5, 0.0, 0.0, 0.1, 0.1)),
        fseq::<Blob2D>(19),
    ]);
    assert!(session.client.blobs().is_empty());

    session.send([
        set::<Blob2D>(1, BlobFields::at(0.5, 0.5, 0.0, 0.0, 0.1, 0.1)),
        fseq::<Blob2D>(20),
    ]);
    assert_eq!(session.client.blobs().len(), 1);
    assert_eq!(session.client.frame(), 20);
}

#[test]
fn frame_time_follows_newer_frames() {
    let session = TestSession::new();
    session.at_millis(300).send([fseq::<Cursor2D>(1)]);
    assert_eq!(session.client.frame_time(), TuioTime::from_millis(300));

    // same frame number from another kind keeps the frame time
    session.at_millis(320).send([fseq::<Object2D>(1)]);
    assert_eq!(session.client.frame_time(), TuioTime::from_millis(300));
    assert_eq!(session.client.session_time(), TuioTime::from_millis(320));

    session.at_millis(340).send([
        alive::<Object2D>(&[8]),
        set::<Object2D>(8, ObjectFields::at(1, 0.2, 0.2, 0.0, 0.0)),
        fseq::<Object2D>(2),
    ]);
    let object = session.client.object(8).unwrap();
    assert_eq!(tuio_client::TuioEntity::trackable(&object).start_time(), TuioTime::from_millis(340));
    assert_eq!(session.take_events().read::<tuio_client::RefreshEvent>().last(), Some(TuioTime::from_millis(340)));
}

#[test]
fn empty_frames_still_refresh() {
    let session = TestSession::new();
    session.send([alive::<Cursor2D>(&[]), fseq::<Cursor2D>(1)]);

    let mut events = session.take_events();
    assert!(!events.has::<AddEvent<Cursor2D>>());
    assert_eq!(events.read::<tuio_client::RefreshEvent>().count(), 1);
}

#[test]
fn client_is_shareable_before_connect() {
    let client = Arc::new(TuioClient::new(ClientConfig::default(), Arc::new(ManualClock::new())));
    let reader = client.clone();

    assert!(!reader.is_connected());
    assert!(reader.cursors().is_empty());
    assert!(reader.cursor(1).is_none());
    assert_eq!(client.config().path_capacity, 128);
}
