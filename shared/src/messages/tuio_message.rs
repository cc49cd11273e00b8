use crate::{
    entity::{BlobFields, Blob3DFields, CursorFields, Object3DFields, ObjectFields},
    messages::{
        arg_reader::ArgReader,
        error::MessageError,
        profile::{Dimension, Profile},
        raw_message::{OscArg, RawMessage},
        set_arguments::SetArguments,
    },
    types::{FrameSequence, SessionId},
};

/// One profile command with its arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum Command<F> {
    /// Full state of one entity in the frame being assembled
    Set { session_id: SessionId, fields: F },
    /// Every session id currently present
    Alive(Vec<SessionId>),
    /// Closes the frame; `0` means the sender does not sequence frames
    Fseq(FrameSequence),
}

impl<F: SetArguments> Command<F> {
    fn read(address: &str, command: &str, dimension: Dimension, reader: &mut ArgReader) -> Result<Self, MessageError> {
        match command {
            "set" => {
                let session_id = reader.session_id()?;
                let fields = F::read_args(dimension, reader)?;
                Ok(Command::Set { session_id, fields })
            }
            "alive" => Ok(Command::Alive(reader.session_ids()?)),
            "fseq" => Ok(Command::Fseq(reader.int("frame sequence")?)),
            _ => Err(MessageError::UnknownCommand {
                address: address.to_string(),
                command: command.to_string(),
            }),
        }
    }

    fn write(&self, dimension: Dimension, args: &mut Vec<OscArg>) {
        match self {
            Command::Set { session_id, fields } => {
                args.push(OscArg::from("set"));
                args.push(session_arg(*session_id));
                fields.write_args(dimension, args);
            }
            Command::Alive(session_ids) => {
                args.push(OscArg::from("alive"));
                args.extend(session_ids.iter().map(|id| session_arg(*id)));
            }
            Command::Fseq(frame) => {
                args.push(OscArg::from("fseq"));
                args.push(OscArg::Int(*frame));
            }
        }
    }
}

// int32 on the wire whenever it fits
fn session_arg(session_id: SessionId) -> OscArg {
    match i32::try_from(session_id) {
        Ok(id) => OscArg::Int(id),
        Err(_) => OscArg::Long(session_id),
    }
}

/// A typed message for one of the nine profiles.
#[derive(Clone, Debug, PartialEq)]
pub enum TuioMessage {
    Cursor2D(Command<CursorFields>),
    Cursor25D(Command<CursorFields>),
    Cursor3D(Command<CursorFields>),
    Object2D(Command<ObjectFields>),
    Object25D(Command<ObjectFields>),
    Object3D(Command<Object3DFields>),
    Blob2D(Command<BlobFields>),
    Blob25D(Command<BlobFields>),
    Blob3D(Command<Blob3DFields>),
}

impl TuioMessage {
    pub fn decode(raw: &RawMessage) -> Result<Self, MessageError> {
        let address = raw.address.as_str();
        let Some(profile) = Profile::from_address(address) else {
            return Err(MessageError::UnknownAddress {
                address: address.to_string(),
            });
        };
        if raw.args.is_empty() {
            return Err(MessageError::MissingCommand {
                address: address.to_string(),
            });
        }

        let mut reader = ArgReader::new(address, &raw.args);
        let command = reader.string("command")?;
        let dimension = profile.dimension();

        let message = match profile {
            Profile::Cursor2D => TuioMessage::Cursor2D(Command::read(address, command, dimension, &mut reader)?),
            Profile::Cursor25D => TuioMessage::Cursor25D(Command::read(address, command, dimension, &mut reader)?),
            Profile::Cursor3D => TuioMessage::Cursor3D(Command::read(address, command, dimension, &mut reader)?),
            Profile::Object2D => TuioMessage::Object2D(Command::read(address, command, dimension, &mut reader)?),
            Profile::Object25D => TuioMessage::Object25D(Command::read(address, command, dimension, &mut reader)?),
            Profile::Object3D => TuioMessage::Object3D(Command::read(address, command, dimension, &mut reader)?),
            Profile::Blob2D => TuioMessage::Blob2D(Command::read(address, command, dimension, &mut reader)?),
            Profile::Blob25D => TuioMessage::Blob25D(Command::read(address, command, dimension, &mut reader)?),
            Profile::Blob3D => TuioMessage::Blob3D(Command::read(address, command, dimension, &mut reader)?),
        };

        Ok(message)
    }

    pub fn profile(&self) -> Profile {
        match self {
            TuioMessage::Cursor2D(_) => Profile::Cursor2D,
            TuioMessage::Cursor25D(_) => Profile::Cursor25D,
            TuioMessage::Cursor3D(_) => Profile::Cursor3D,
            TuioMessage::Object2D(_) => Profile::Object2D,
            TuioMessage::Object25D(_) => Profile::Object25D,
            TuioMessage::Object3D(_) => Profile::Object3D,
            TuioMessage::Blob2D(_) => Profile::Blob2D,
            TuioMessage::Blob25D(_) => Profile::Blob25D,
            TuioMessage::Blob3D(_) => Profile::Blob3D,
        }
    }

    /// Lays the message back out as an address and positional arguments.
    pub fn to_raw(&self) -> RawMessage {
        let profile = self.profile();
        let dimension = profile.dimension();
        let mut args = Vec::new();
        match self {
            TuioMessage::Cursor2D(command)
            | TuioMessage::Cursor25D(command)
            | TuioMessage::Cursor3D(command) => command.write(dimension, &mut args),
            TuioMessage::Object2D(command) | TuioMessage::Object25D(command) => {
                command.write(dimension, &mut args)
            }
            TuioMessage::Object3D(command) => command.write(dimension, &mut args),
            TuioMessage::Blob2D(command) | TuioMessage::Blob25D(command) => {
                command.write(dimension, &mut args)
            }
            TuioMessage::Blob3D(command) => command.write(dimension, &mut args),
        }
        RawMessage::new(profile.address(), args)
    }
}
