use std::error::Error;
use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult
};

/// An error received when a supplied header name or value can not be
/// stored, or when a raw header block is in a provably incorrect format.
#[derive(Debug, PartialEq, Clone)]
pub enum HeaderError {
    InvalidName(String),
    InvalidValue{name: String, value: String},
    InvalidFormat(String)
}

impl Display for HeaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        use HeaderError::*;

        match self {
            InvalidName(name) =>
                write!(f, "invalid header name: '{}'", name),
            InvalidValue{name, value} =>
                write!(f, "invalid value for header '{}': '{}'", name, value.escape_debug()),
            InvalidFormat(line) =>
                write!(f, "invalid header line: '{}'", line)
        }
    }
}

impl Error for HeaderError {}
