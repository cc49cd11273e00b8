
pub use messages::{alive, fseq, set, KindMessage};
pub use recording_listener::RecordingListener;
pub use test_session::{init_logger, TestSession};
