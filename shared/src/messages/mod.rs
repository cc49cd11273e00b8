mod arg_reader;
mod error;
mod profile;
mod raw_message;
mod set_arguments;
mod tuio_message;

pub use arg_reader::ArgReader;
pub use error::MessageError;
pub use profile::{Dimension, Family, Profile};
pub use raw_message::{OscArg, RawMessage};
pub use set_arguments::SetArguments;
pub use tuio_message::{Command, TuioMessage};
