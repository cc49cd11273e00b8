use thiserror::Error;

use tuio_shared::MessageError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuioClientError {
    /// Messages arrived before `connect()` or after `disconnect()`
    #[error("TuioClient is not connected. Call connect() before feeding messages")]
    NotConnected,

    /// Address/argument tuple could not be decoded into a profile message
    #[error("Dropped undecodable message: {0}")]
    Decode(#[from] MessageError),
}
