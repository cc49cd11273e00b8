use crate::{
    messages::{error::MessageError, raw_message::OscArg},
    types::SessionId,
};

/// Cursor over a message's arguments that reports failures with the
/// address, position and meaning of the offending argument.
pub struct ArgReader<'a> {
    address: &'a str,
    args: &'a [OscArg],
    index: usize,
}

impl<'a> ArgReader<'a> {
    pub fn new(address: &'a str, args: &'a [OscArg]) -> Self {
        Self {
            address,
            args,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.index >= self.args.len()
    }

    pub fn string(&mut self, name: &'static str) -> Result<&'a str, MessageError> {
        match self.next(name)? {
            OscArg::Str(value) => Ok(value.as_str()),
            other => Err(self.type_error(name, "string", other)),
        }
    }

    pub fn int(&mut self, name: &'static str) -> Result<i32, MessageError> {
        match self.next(name)? {
            OscArg::Int(value) => Ok(*value),
            other => Err(self.type_error(name, "int32", other)),
        }
    }

    /// Session ids travel as int32 from most trackers; int64 is accepted too.
    pub fn session_id(&mut self) -> Result<SessionId, MessageError> {
        match self.next("session id")? {
            OscArg::Int(value) => Ok(SessionId::from(*value)),
            OscArg::Long(value) => Ok(*value),
            other => Err(self.type_error("session id", "int32", other)),
        }
    }

    pub fn float(&mut self, name: &'static str) -> Result<f32, MessageError> {
        match self.next(name)? {
            OscArg::Float(value) => Ok(*value),
            OscArg::Double(value) => Ok(*value as f32),
            other => Err(self.type_error(name, "float32", other)),
        }
    }

    /// Reads every remaining argument as a session id.
    pub fn session_ids(&mut self) -> Result<Vec<SessionId>, MessageError> {
        let mut ids = Vec::with_capacity(self.args.len().saturating_sub(self.index));
        while !self.is_empty() {
            ids.push(self.session_id()?);
        }
        Ok(ids)
    }

    fn next(&mut self, name: &'static str) -> Result<&'a OscArg, MessageError> {
        let Some(arg) = self.args.get(self.index) else {
            return Err(MessageError::MissingArgument {
                address: self.address.to_string(),
                index: self.index,
                name,
            });
        };
        self.index += 1;
        Ok(arg)
    }

    // `index` already points past the offending argument
    fn type_error(&self, name: &'static str, expected: &'static str, found: &OscArg) -> MessageError {
        MessageError::ArgumentType {
            address: self.address.to_string(),
            index: self.index - 1,
            name,
            expected,
            found: found.type_name(),
        }
    }
}
