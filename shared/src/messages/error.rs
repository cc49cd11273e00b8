use thiserror::Error;

/// Errors that can occur while decoding an address/argument tuple into a
/// typed protocol message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Address does not name one of the nine tracked-entity profiles
    #[error("Address {address:?} is not a known profile. Expected one of /tuio/2Dcur, /tuio/25Dcur, /tuio/3Dcur, /tuio/2Dobj, /tuio/25Dobj, /tuio/3Dobj, /tuio/2Dblb, /tuio/25Dblb or /tuio/3Dblb")]
    UnknownAddress { address: String },

    /// Message carries no arguments at all
    #[error("Message to {address} has no command argument. The first argument must be \"set\", \"alive\" or \"fseq\"")]
    MissingCommand { address: String },

    /// Command discriminator is not one the profile understands
    #[error("Message to {address} has unknown command {command:?}")]
    UnknownCommand { address: String, command: String },

    /// Argument list ends before a required argument
    #[error("Message to {address} is missing argument {index} ({name})")]
    MissingArgument {
        address: String,
        index: usize,
        name: &'static str,
    },

    /// Argument has the wrong type tag
    #[error("Message to {address} has argument {index} ({name}) of type {found}, expected {expected}")]
    ArgumentType {
        address: String,
        index: usize,
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
