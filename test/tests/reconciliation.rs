/// Frame-buffered reconciliation: set/alive/fseq cycles against the
/// committed state of one kind.
use tuio_client::{
    AddEvent, Blob25D, Blob2D, Blob3D, Blob3DFields, BlobFields, Cursor25D, Cursor2D, Cursor3D,
    CursorFields, Object25D, Object2D, Object3D, Object3DFields, ObjectFields, RefreshEvent,
    RemoveEvent, TuioEntity, TuioState, UpdateEvent,
};
use tuio_test::{alive, assert_close, fseq, set, KindMessage, TestSession};

fn add_cursor(session: &TestSession, session_id: i64, x: f32, y: f32, frame: i32) {
    session.send([
        alive::<Cursor2D>(&[session_id]),
        set::<Cursor2D>(session_id, CursorFields::at(x, y, 0.0)),
        fseq::<Cursor2D>(frame),
    ]);
}

#[test]
fn add_then_commit() {
    let session = TestSession::new();
    session.send([
        alive::<Cursor2D>(&[1]),
        set::<Cursor2D>(1, CursorFields::at(0.5, 0.5, 0.0)),
    ]);
    assert!(session.events.is_empty());
    assert!(session.client.cursor(1).is_none());

    session.send([fseq::<Cursor2D>(1)]);

    let mut events = session.take_events();
    let added: Vec<_> = events.read::<AddEvent<Cursor2D>>().collect();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].session_id(), 1);
    assert_eq!(added[0].trackable().x(), 0.5);
    assert_eq!(added[0].trackable().y(), 0.5);
    assert_eq!(added[0].state(), TuioState::Added);
    assert_eq!(events.read::<RefreshEvent>().count(), 1);

    let cursor = session.client.cursor(1).expect("committed cursor");
    assert_eq!(cursor.cursor_id(), 0);
}

#[test]
fn remove_then_commit() {
    let session = TestSession::new();
    add_cursor(&session, 1, 0.5, 0.5, 1);
    session.take_events();

    session.send([alive::<Cursor2D>(&[]), fseq::<Cursor2D>(2)]);

    let mut events = session.take_events();
    let removed: Vec<_> = events.read::<RemoveEvent<Cursor2D>>().collect();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].session_id(), 1);
    assert_eq!(removed[0].state(), TuioState::Removed);
    assert!(session.client.cursor(1).is_none());
    assert!(session.client.cursors().is_empty());
}

#[test]
fn identical_set_is_a_no_op() {
    let session = TestSession::new();
    add_cursor(&session, 1, 0.5, 0.5, 1);
    session.take_events();

    session.advance_millis(20);
    add_cursor(&session, 1, 0.5, 0.5, 2);

    let mut events = session.take_events();
    assert!(!events.has::<UpdateEvent<Cursor2D>>());
    assert!(!events.has::<AddEvent<Cursor2D>>());
    // the frame still refreshes
    assert_eq!(events.read::<RefreshEvent>().count(), 1);
    assert_eq!(session.take_lines(), vec!["add 2Dcur 1", "refresh", "refresh"]);
}

fn resend_leaves_kind_quiet<K: KindMessage>(fields: <K::Entity as TuioEntity>::Fields) {
    let session = TestSession::new();
    session.send([alive::<K>(&[1]), set::<K>(1, fields.clone()), fseq::<K>(1)]);
    assert!(session.take_events().has::<AddEvent<K>>());

    session.advance_millis(20);
    session.send([alive::<K>(&[1]), set::<K>(1, fields), fseq::<K>(2)]);

    let mut events = session.take_events();
    assert!(!events.has::<UpdateEvent<K>>());
    assert!(!events.has::<AddEvent<K>>());
    assert!(!events.has::<RemoveEvent<K>>());
    assert_eq!(events.read::<RefreshEvent>().count(), 1);
    assert_eq!(session.client.live::<K>().len(), 1);
}

#[test]
fn identical_set_is_a_no_op_for_every_kind() {
    resend_leaves_kind_quiet::<Cursor2D>(CursorFields::at(0.3, 0.4, 0.0));
    resend_leaves_kind_quiet::<Cursor25D>(CursorFields::at(0.3, 0.4, 0.2));
    resend_leaves_kind_quiet::<Cursor3D>(CursorFields::at(0.3, 0.4, 0.6));
    resend_leaves_kind_quiet::<Object2D>(ObjectFields::at(12, 0.3, 0.4, 0.0, 1.2));
    resend_leaves_kind_quiet::<Object25D>(ObjectFields::at(12, 0.3, 0.4, 0.2, 1.2));
    resend_leaves_kind_quiet::<Object3D>(Object3DFields::at(12, 0.3, 0.4, 0.6, 0.5, 1.0, 1.5));
    resend_leaves_kind_quiet::<Blob2D>(BlobFields::at(0.3, 0.4, 0.0, 0.7, 0.1, 0.2));
    resend_leaves_kind_quiet::<Blob25D>(BlobFields::at(0.3, 0.4, 0.2, 0.7, 0.1, 0.2));
    resend_leaves_kind_quiet::<Blob3D>(Blob3DFields {
        roll: 0.5,
        pitch: 1.0,
        yaw: 1.5,
        ..Blob3DFields::at(0.3, 0.4, 0.6, 0.1, 0.2, 0.3)
    });
}

#[test]
fn late_frame_is_suppressed() {
    let session = TestSession::new();
    add_cursor(&session, 1, 0.2, 0.2, 10);
    session.take_events();

    session.send([
        alive::<Cursor2D>(&[1, 2]),
        set::<Cursor2D>(1, CursorFields::at(0.3, 0.3, 0.0)),
        set::<Cursor2D>(2, CursorFields::at(0.6, 0.6, 0.0)),
        fseq::<Cursor2D>(5),
    ]);

    assert!(session.take_events().is_empty());
    assert_eq!(session.client.frame(), 10);
    assert_eq!(session.client.cursors().len(), 1);
    assert_eq!(session.client.cursor(1).map(|c| c.trackable().x()), Some(0.2));
    assert_eq!(session.client.diagnostics().late_frames, 1);

    // the discarded buffer does not leak into the next frame
    session.send([fseq::<Cursor2D>(11)]);
    let mut events = session.take_events();
    assert!(!events.has::<AddEvent<Cursor2D>>());
    assert!(!events.has::<UpdateEvent<Cursor2D>>());
    assert_eq!(events.read::<RefreshEvent>().count(), 1);
}

#[test]
fn sender_restart_is_not_late() {
    let session = TestSession::new();
    add_cursor(&session, 1, 0.2, 0.2, 500);
    session.take_events();

    add_cursor(&session, 1, 0.4, 0.2, 1);

    let mut events = session.take_events();
    assert_eq!(events.read::<UpdateEvent<Cursor2D>>().count(), 1);
    assert_eq!(session.client.frame(), 1);
}

#[test]
fn motion_is_derived_without_explicit_speed() {
    let session = TestSession::new();
    session.at_millis(0);
    add_cursor(&session, 1, 0.0, 0.0, 1);

    session.at_millis(1_000);
    add_cursor(&session, 1, 1.0, 0.0, 2);

    let cursor = session.client.cursor(1).unwrap();
    assert_close!(cursor.trackable().x_speed(), 1.0);
    assert_close!(cursor.trackable().y_speed(), 0.0);
    assert_close!(cursor.trackable().motion_speed(), 1.0);
    assert_eq!(cursor.state(), TuioState::Accelerating);
    assert_eq!(cursor.trackable().path().len(), 2);
}

#[test]
fn explicit_speed_is_taken_verbatim() {
    let session = TestSession::new();
    add_cursor(&session, 1, 0.1, 0.1, 1);

    session.advance_millis(500);
    let fields = CursorFields {
        x_speed: 0.3,
        y_speed: 0.4,
        motion_accel: -0.25,
        ..CursorFields::at(0.2, 0.3, 0.0)
    };
    session.send([alive::<Cursor2D>(&[1]), set::<Cursor2D>(1, fields), fseq::<Cursor2D>(2)]);

    let cursor = session.client.cursor(1).unwrap();
    assert_eq!(cursor.trackable().x_speed(), 0.3);
    assert_close!(cursor.trackable().motion_speed(), 0.5);
    assert_eq!(cursor.trackable().motion_accel(), -0.25);
    assert_eq!(cursor.state(), TuioState::Decelerating);
}

#[test]
fn nearest_freed_component_id_is_reused() {
    let session = TestSession::new();
    session.send([
        alive::<Cursor2D>(&[10, 11, 12]),
        set::<Cursor2D>(10, CursorFields::at(0.8, 0.8, 0.0)),
        set::<Cursor2D>(11, CursorFields::at(0.2, 0.2, 0.0)),
        set::<Cursor2D>(12, CursorFields::at(0.5, 0.9, 0.0)),
        fseq::<Cursor2D>(1),
    ]);
    let ids: Vec<_> = session.client.cursors().iter().map(|c| c.cursor_id()).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    session.send([alive::<Cursor2D>(&[10, 12]), fseq::<Cursor2D>(2)]);
    session.send([
        alive::<Cursor2D>(&[10, 12, 13]),
        set::<Cursor2D>(13, CursorFields::at(0.21, 0.21, 0.0)),
        fseq::<Cursor2D>(3),
    ]);

    assert_eq!(session.client.cursor(13).map(|c| c.cursor_id()), Some(1));
}

#[test]
fn removed_top_id_is_not_recycled() {
    let session = TestSession::new();
    session.send([
        alive::<Cursor2D>(&[1, 2]),
        set::<Cursor2D>(1, CursorFields::at(0.1, 0.1, 0.0)),
        set::<Cursor2D>(2, CursorFields::at(0.9, 0.9, 0.0)),
        fseq::<Cursor2D>(1),
    ]);
    session.send([alive::<Cursor2D>(&[1]), fseq::<Cursor2D>(2)]);
    session.send([
        alive::<Cursor2D>(&[1, 3]),
        set::<Cursor2D>(3, CursorFields::at(0.9, 0.9, 0.0)),
        fseq::<Cursor2D>(3),
    ]);

    assert_eq!(session.client.cursor(3).map(|c| c.cursor_id()), Some(1));
    assert_eq!(session.client.cursor(1).map(|c| c.cursor_id()), Some(0));
}

#[test]
fn changes_dispatch_in_arrival_order() {
    let session = TestSession::new();
    add_cursor(&session, 1, 0.1, 0.1, 1);
    session.take_lines();

    session.advance_millis(10);
    session.send([
        alive::<Cursor2D>(&[2, 3]),
        set::<Cursor2D>(3, CursorFields::at(0.3, 0.3, 0.0)),
        set::<Cursor2D>(2, CursorFields::at(0.2, 0.2, 0.0)),
        fseq::<Cursor2D>(2),
    ]);

    assert_eq!(
        session.take_lines(),
        vec!["remove 2Dcur 1", "add 2Dcur 3", "add 2Dcur 2", "refresh"]
    );
}

#[test]
fn unknown_session_is_counted() {
    let session = TestSession::new();
    // announced alive but never set
    session.send([alive::<Cursor2D>(&[7]), fseq::<Cursor2D>(1)]);
    session.send([alive::<Cursor2D>(&[]), fseq::<Cursor2D>(2)]);

    assert_eq!(session.client.diagnostics().unknown_session_refs, 1);
    assert!(!session.take_events().has::<RemoveEvent<Cursor2D>>());
}

#[test]
fn unsequenced_frames_always_commit() {
    let session = TestSession::new();
    add_cursor(&session, 1, 0.1, 0.1, 0);
    session.advance_millis(200);
    add_cursor(&session, 1, 0.2, 0.1, -1);

    let mut events = session.take_events();
    assert_eq!(events.read::<AddEvent<Cursor2D>>().count(), 1);
    assert_eq!(events.read::<UpdateEvent<Cursor2D>>().count(), 1);
    assert_eq!(session.client.frame(), 0);
}
