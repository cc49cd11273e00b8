use std::fmt;

/// One positional argument of a decoded transport message.
#[derive(Clone, Debug, PartialEq)]
pub enum OscArg {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
}

impl OscArg {
    pub fn type_name(&self) -> &'static str {
        match self {
            OscArg::Int(_) => "int32",
            OscArg::Long(_) => "int64",
            OscArg::Float(_) => "float32",
            OscArg::Double(_) => "float64",
            OscArg::Str(_) => "string",
        }
    }
}

impl From<i32> for OscArg {
    fn from(value: i32) -> Self {
        OscArg::Int(value)
    }
}

impl From<i64> for OscArg {
    fn from(value: i64) -> Self {
        OscArg::Long(value)
    }
}

impl From<f32> for OscArg {
    fn from(value: f32) -> Self {
        OscArg::Float(value)
    }
}

impl From<f64> for OscArg {
    fn from(value: f64) -> Self {
        OscArg::Double(value)
    }
}

impl From<&str> for OscArg {
    fn from(value: &str) -> Self {
        OscArg::Str(value.to_string())
    }
}

impl From<String> for OscArg {
    fn from(value: String) -> Self {
        OscArg::Str(value)
    }
}

impl fmt::Display for OscArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OscArg::Int(value) => write!(f, "{}", value),
            OscArg::Long(value) => write!(f, "{}", value),
            OscArg::Float(value) => write!(f, "{}", value),
            OscArg::Double(value) => write!(f, "{}", value),
            OscArg::Str(value) => write!(f, "{:?}", value),
        }
    }
}

/// An address plus its ordered arguments, as split out of a bundle by the
/// transport.
#[derive(Clone, Debug, PartialEq)]
pub struct RawMessage {
    pub address: String,
    pub args: Vec<OscArg>,
}

impl RawMessage {
    pub fn new(address: impl Into<String>, args: Vec<OscArg>) -> Self {
        Self {
            address: address.into(),
            args,
        }
    }
}

impl fmt::Display for RawMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
