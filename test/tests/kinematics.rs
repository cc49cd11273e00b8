/// Derived motion across committed frames: angular wrap-around, 3D
/// rotation, blob resizing and the bounded path.
use std::f32::consts::PI;

use tuio_client::{
    Blob2D, Blob3D, Blob3DFields, BlobFields, ClientConfig, Cursor3D, CursorFields, HasOrientation,
    HasOrientation3, Object2D, Object3D, Object3DFields, ObjectFields, TuioEntity, TuioState,
};
use tuio_test::{alive, assert_close, assert_path_consistent, fseq, set, KindMessage, TestSession};

type Fields<K> = <<K as tuio_client::EntityKind>::Entity as TuioEntity>::Fields;

/// Commits one frame holding a single entity at `millis`
fn frame<K: KindMessage>(session: &TestSession, millis: i64, frame: i32, session_id: i64, fields: Fields<K>) {
    session.at_millis(millis);
    session.send([
        alive::<K>(&[session_id]),
        set::<K>(session_id, fields),
        fseq::<K>(frame),
    ]);
}

#[test]
fn rotation_takes_the_short_way_across_the_seam() {
    let session = TestSession::new();
    frame::<Object2D>(&session, 0, 1, 3, ObjectFields::at(8, 0.5, 0.5, 0.0, 0.1 * PI));
    frame::<Object2D>(&session, 1_000, 2, 3, ObjectFields::at(8, 0.5, 0.5, 0.0, 1.9 * PI));

    let object = session.client.object(3).unwrap();
    assert_close!(object.rotation_speed(), -0.1);
    assert_close!(object.angle(), 1.9 * PI);
    assert_eq!(object.symbol_id(), 8);
}

#[test]
fn moving_and_turning_object_is_rotating() {
    let session = TestSession::new();
    frame::<Object2D>(&session, 0, 1, 3, ObjectFields::at(8, 0.2, 0.5, 0.0, 0.0));
    frame::<Object2D>(&session, 500, 2, 3, ObjectFields::at(8, 0.3, 0.5, 0.0, 0.5 * PI));

    let object = session.client.object(3).unwrap();
    assert_eq!(object.state(), TuioState::Rotating);
    assert!(object.is_moving());
    assert_close!(object.trackable().x_speed(), 0.2);
}

#[test]
fn object_3d_rotation_accel_is_the_axis_mean() {
    let session = TestSession::new();
    frame::<Object3D>(
        &session,
        0,
        1,
        6,
        Object3DFields::at(1, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0),
    );
    // quarter turn of roll only, over one second
    frame::<Object3D>(
        &session,
        1_000,
        2,
        6,
        Object3DFields::at(1, 0.5, 0.5, 0.5, 0.5 * PI, 0.0, 0.0),
    );

    let object = session.client.object_3d(6).unwrap();
    let orientation = object.orientation_3d();
    assert_close!(orientation.roll_speed(), 0.25);
    assert_close!(orientation.pitch_speed(), 0.0);
    assert_close!(orientation.yaw_speed(), 0.0);
    assert_close!(object.rotation_accel(), 0.25 / 3.0);
}

#[test]
fn object_3d_explicit_axes_stay_apart() {
    let session = TestSession::new();
    frame::<Object3D>(
        &session,
        0,
        1,
        6,
        Object3DFields::at(1, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0),
    );
    let fields = Object3DFields {
        roll_speed: 0.1,
        pitch_speed: 0.2,
        yaw_speed: 0.3,
        rotation_accel: 0.5,
        ..Object3DFields::at(1, 0.5, 0.5, 0.5, 0.1, 0.2, 0.3)
    };
    frame::<Object3D>(&session, 100, 2, 6, fields);

    let object = session.client.object_3d(6).unwrap();
    assert_eq!(object.roll(), 0.1);
    assert_eq!(object.pitch(), 0.2);
    assert_eq!(object.yaw(), 0.3);
    assert_eq!(object.orientation_3d().pitch_speed(), 0.2);
    assert_eq!(object.orientation_3d().yaw_speed(), 0.3);
    assert_eq!(object.rotation_accel(), 0.5);
}

#[test]
fn blob_growing_in_place_is_resized() {
    let session = TestSession::new();
    frame::<Blob2D>(&session, 0, 1, 2, BlobFields::at(0.4, 0.4, 0.0, 0.0, 0.1, 0.1));
    frame::<Blob2D>(&session, 40, 2, 2, BlobFields::at(0.4, 0.4, 0.0, 0.0, 0.15, 0.1));

    let blob = session.client.blob(2).unwrap();
    assert_eq!(blob.state(), TuioState::Resized);
    assert_eq!(blob.width(), 0.15);
    assert_close!(blob.area(), 0.015);
    assert_eq!(blob.blob_id(), 0);
    assert_eq!(session.take_lines(), vec!["add 2Dblb 2", "refresh", "update 2Dblb 2", "refresh"]);
}

#[test]
fn blob_3d_depth_change_is_a_resize() {
    let session = TestSession::new();
    frame::<Blob3D>(&session, 0, 1, 2, Blob3DFields::at(0.4, 0.4, 0.4, 0.1, 0.1, 0.1));
    frame::<Blob3D>(&session, 40, 2, 2, Blob3DFields::at(0.4, 0.4, 0.4, 0.1, 0.1, 0.3));

    let blob = session.client.blob_3d(2).unwrap();
    assert_eq!(blob.state(), TuioState::Resized);
    assert_eq!(blob.depth(), 0.3);
    assert_close!(blob.volume(), 0.003);
}

#[test]
fn cursor_3d_derives_depth_speed() {
    let session = TestSession::new();
    frame::<Cursor3D>(&session, 0, 1, 9, CursorFields::at(0.5, 0.5, 0.0));
    frame::<Cursor3D>(&session, 500, 2, 9, CursorFields::at(0.5, 0.5, 0.5));

    let cursor = session.client.cursor_3d(9).unwrap();
    assert_close!(cursor.trackable().z_speed(), 1.0);
    assert_close!(cursor.trackable().x_speed(), 0.0);
    assert_eq!(cursor.state(), TuioState::Accelerating);
}

#[test]
fn motion_decays_when_held_still() {
    let session = TestSession::new();
    frame::<Object2D>(&session, 0, 1, 3, ObjectFields::at(8, 0.0, 0.5, 0.0, 0.0));
    frame::<Object2D>(&session, 1_000, 2, 3, ObjectFields::at(8, 0.5, 0.5, 0.0, 0.0));
    // the sender reports zero speed explicitly for a resting object
    let resting = ObjectFields {
        motion_accel: -0.5,
        ..ObjectFields::at(8, 0.5, 0.5, 0.0, 0.0)
    };
    frame::<Object2D>(&session, 2_000, 3, 3, resting);

    let object = session.client.object(3).unwrap();
    assert_eq!(object.trackable().motion_speed(), 0.0);
    assert_eq!(object.state(), TuioState::Decelerating);
}

#[test]
fn path_stays_bounded() {
    let capacity = 128;
    let session = TestSession::with_config(ClientConfig {
        path_capacity: capacity,
        ..Default::default()
    });

    for n in 0..200 {
        let x = 0.1 + n as f32 * 0.004;
        frame::<Object2D>(&session, n * 20, n as i32 + 1, 3, ObjectFields::at(8, x, 0.5, 0.0, 0.0));

        let object = session.client.object(3).unwrap();
        assert_path_consistent!(object, capacity);
    }

    let object = session.client.object(3).unwrap();
    assert_eq!(object.trackable().path().len(), capacity);
    let oldest = object.trackable().path().iter().next().unwrap();
    assert_close!(oldest.x(), 0.1 + 72.0 * 0.004);
}
