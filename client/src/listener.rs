use tuio_shared::{TuioBlob, TuioBlob3D, TuioCursor, TuioObject, TuioObject3D, TuioTime};

/// Receives the changes committed with each frame.
///
/// Every callback defaults to doing nothing, so an implementation only
/// overrides the profiles it cares about. Callbacks run synchronously on the
/// thread feeding messages, after the engine has released its locks, so they
/// may query the client.
pub trait TuioListener: Send + Sync {
    // 2D cursors
    fn add_cursor(&self, _cursor: &TuioCursor) {}
    fn update_cursor(&self, _cursor: &TuioCursor) {}
    fn remove_cursor(&self, _cursor: &TuioCursor) {}

    // 2.5D cursors
    fn add_cursor_25d(&self, _cursor: &TuioCursor) {}
    fn update_cursor_25d(&self, _cursor: &TuioCursor) {}
    fn remove_cursor_25d(&self, _cursor: &TuioCursor) {}

    // 3D cursors
    fn add_cursor_3d(&self, _cursor: &TuioCursor) {}
    fn update_cursor_3d(&self, _cursor: &TuioCursor) {}
    fn remove_cursor_3d(&self, _cursor: &TuioCursor) {}

    // 2D objects
    fn add_object(&self, _object: &TuioObject) {}
    fn update_object(&self, _object: &TuioObject) {}
    fn remove_object(&self, _object: &TuioObject) {}

    // 2.5D objects
    fn add_object_25d(&self, _object: &TuioObject) {}
    fn update_object_25d(&self, _object: &TuioObject) {}
    fn remove_object_25d(&self, _object: &TuioObject) {}

    // 3D objects
    fn add_object_3d(&self, _object: &TuioObject3D) {}
    fn update_object_3d(&self, _object: &TuioObject3D) {}
    fn remove_object_3d(&self, _object: &TuioObject3D) {}

    // 2D blobs
    fn add_blob(&self, _blob: &TuioBlob) {}
    fn update_blob(&self, _blob: &TuioBlob) {}
    fn remove_blob(&self, _blob: &TuioBlob) {}

    // 2.5D blobs
    fn add_blob_25d(&self, _blob: &TuioBlob) {}
    fn update_blob_25d(&self, _blob: &TuioBlob) {}
    fn remove_blob_25d(&self, _blob: &TuioBlob) {}

    // 3D blobs
    fn add_blob_3d(&self, _blob: &TuioBlob3D) {}
    fn update_blob_3d(&self, _blob: &TuioBlob3D) {}
    fn remove_blob_3d(&self, _blob: &TuioBlob3D) {}

    /// Called once after the changes of each committed frame, with that
    /// frame's time.
    fn refresh(&self, _frame_time: TuioTime) {}
}
