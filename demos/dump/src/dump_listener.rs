use log::info;

use tuio_client::{
    HasOrientation, HasOrientation3, TuioBlob, TuioBlob3D, TuioCursor, TuioEntity, TuioListener,
    TuioObject, TuioObject3D, TuioTime,
};

/// Logs every change as one `add`/`set`/`del` line per entity.
pub struct DumpListener;

fn cursor_line(verb: &str, label: &str, cursor: &TuioCursor, with_motion: bool) -> String {
    let t = cursor.trackable();
    let mut line = format!("{} {} {} ({}) {} {}", verb, label, t.session_id(), cursor.cursor_id(), t.x(), t.y());
    if label != "cur" {
        line += &format!(" {}", t.z());
    }
    if with_motion {
        line += &format!(" {} {}", t.x_speed(), t.y_speed());
        if label != "cur" {
            line += &format!(" {}", t.z_speed());
        }
        line += &format!(" {}", t.motion_accel());
    }
    line
}

fn object_line(verb: &str, label: &str, object: &TuioObject, with_motion: bool) -> String {
    let t = object.trackable();
    let mut line = format!("{} {} {} {} {} {}", verb, label, t.session_id(), object.symbol_id(), t.x(), t.y());
    if label != "obj" {
        line += &format!(" {}", t.z());
    }
    line += &format!(" {}", object.angle());
    if with_motion {
        line += &format!(" {} {}", t.x_speed(), t.y_speed());
        if label != "obj" {
            line += &format!(" {}", t.z_speed());
        }
        line += &format!(" {} {} {}", object.rotation_speed(), t.motion_accel(), object.rotation_accel());
    }
    line
}

fn blob_line(verb: &str, label: &str, blob: &TuioBlob, with_motion: bool) -> String {
    let t = blob.trackable();
    let mut line = format!("{} {} {} ({}) {} {}", verb, label, t.session_id(), blob.blob_id(), t.x(), t.y());
    if label != "blb" {
        line += &format!(" {}", t.z());
    }
    line += &format!(" {} {} {} {}", blob.angle(), blob.width(), blob.height(), blob.area());
    if with_motion {
        line += &format!(" {} {}", t.x_speed(), t.y_speed());
        if label != "blb" {
            line += &format!(" {}", t.z_speed());
        }
        line += &format!(" {} {} {}", blob.rotation_speed(), t.motion_accel(), blob.rotation_accel());
    }
    line
}

fn object_3d_line(verb: &str, object: &TuioObject3D, with_motion: bool) -> String {
    let t = object.trackable();
    let mut line = format!(
        "{} 3Dobj {} {} {} {} {} {} {} {}",
        verb,
        t.session_id(),
        object.symbol_id(),
        t.x(),
        t.y(),
        t.z(),
        object.roll(),
        object.pitch(),
        object.yaw()
    );
    if with_motion {
        let o = object.orientation_3d();
        line += &format!(
            " {} {} {} {} {} {} {} {}",
            t.x_speed(),
            t.y_speed(),
            t.z_speed(),
            o.roll_speed(),
            o.pitch_speed(),
            o.yaw_speed(),
            t.motion_accel(),
            o.rotation_accel()
        );
    }
    line
}

fn blob_3d_line(verb: &str, blob: &TuioBlob3D, with_motion: bool) -> String {
    let t = blob.trackable();
    let mut line = format!(
        "{} 3Dblb {} ({}) {} {} {} {} {} {} {} {} {} {}",
        verb,
        t.session_id(),
        blob.blob_id(),
        t.x(),
        t.y(),
        t.z(),
        blob.roll(),
        blob.pitch(),
        blob.yaw(),
        blob.width(),
        blob.height(),
        blob.depth(),
        blob.volume()
    );
    if with_motion {
        let o = blob.orientation_3d();
        line += &format!(
            " {} {} {} {} {} {} {} {}",
            t.x_speed(),
            t.y_speed(),
            t.z_speed(),
            o.roll_speed(),
            o.pitch_speed(),
            o.yaw_speed(),
            t.motion_accel(),
            o.rotation_accel()
        );
    }
    line
}

impl TuioListener for DumpListener {
    // Cursors

    fn add_cursor(&self, cursor: &TuioCursor) {
        info!("{}", cursor_line("add", "cur", cursor, false));
    }

    fn update_cursor(&self, cursor: &TuioCursor) {
        info!("{}", cursor_line("set", "cur", cursor, true));
    }

    fn remove_cursor(&self, cursor: &TuioCursor) {
        info!("del cur {} ({})", cursor.session_id(), cursor.cursor_id());
    }

    fn add_cursor_25d(&self, cursor: &TuioCursor) {
        info!("{}", cursor_line("add", "25Dcur", cursor, false));
    }

    fn update_cursor_25d(&self, cursor: &TuioCursor) {
        info!("{}", cursor_line("set", "25Dcur", cursor, true));
    }

    fn remove_cursor_25d(&self, cursor: &TuioCursor) {
        info!("del 25Dcur {} ({})", cursor.session_id(), cursor.cursor_id());
    }

    fn add_cursor_3d(&self, cursor: &TuioCursor) {
        info!("{}", cursor_line("add", "3Dcur", cursor, false));
    }

    fn update_cursor_3d(&self, cursor: &TuioCursor) {
        info!("{}", cursor_line("set", "3Dcur", cursor, true));
    }

    fn remove_cursor_3d(&self, cursor: &TuioCursor) {
        info!("del 3Dcur {} ({})", cursor.session_id(), cursor.cursor_id());
    }

    // Objects

    fn add_object(&self, object: &TuioObject) {
        info!("{}", object_line("add", "obj", object, false));
    }

    fn update_object(&self, object: &TuioObject) {
        info!("{}", object_line("set", "obj", object, true));
    }

    fn remove_object(&self, object: &TuioObject) {
        info!("del obj {} {}", object.session_id(), object.symbol_id());
    }

    fn add_object_25d(&self, object: &TuioObject) {
        info!("{}", object_line("add", "25Dobj", object, false));
    }

    fn update_object_25d(&self, object: &TuioObject) {
        info!("{}", object_line("set", "25Dobj", object, true));
    }

    fn remove_object_25d(&self, object: &TuioObject) {
        info!("del 25Dobj {} {}", object.session_id(), object.symbol_id());
    }

    fn add_object_3d(&self, object: &TuioObject3D) {
        info!("{}", object_3d_line("add", object, false));
    }

    fn update_object_3d(&self, object: &TuioObject3D) {
        info!("{}", object_3d_line("set", object, true));
    }

    fn remove_object_3d(&self, object: &TuioObject3D) {
        info!("del 3Dobj {} {}", object.session_id(), object.symbol_id());
    }

    // Blobs

    fn add_blob(&self, blob: &TuioBlob) {
        info!("{}", blob_line("add", "blb", blob, false));
    }

    fn update_blob(&self, blob: &TuioBlob) {
        info!("{}", blob_line("set", "blb", blob, true));
    }

    fn remove_blob(&self, blob: &TuioBlob) {
        info!("del blb {} ({})", blob.session_id(), blob.blob_id());
    }

    fn add_blob_25d(&self, blob: &TuioBlob) {
        info!("{}", blob_line("add", "25Dblb", blob, false));
    }

    fn update_blob_25d(&self, blob: &TuioBlob) {
        info!("{}", blob_line("set", "25Dblb", blob, true));
    }

    fn remove_blob_25d(&self, blob: &TuioBlob) {
        info!("del 25Dblb {} ({})", blob.session_id(), blob.blob_id());
    }

    fn add_blob_3d(&self, blob: &TuioBlob3D) {
        info!("{}", blob_3d_line("add", blob, false));
    }

    fn update_blob_3d(&self, blob: &TuioBlob3D) {
        info!("{}", blob_3d_line("set", blob, true));
    }

    fn remove_blob_3d(&self, blob: &TuioBlob3D) {
        info!("del 3Dblb {} ({})", blob.session_id(), blob.blob_id());
    }

    fn refresh(&self, frame_time: TuioTime) {
        log::trace!("refresh {}", frame_time.total_millis());
    }
}
