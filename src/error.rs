//! Error type used within crate with From for commonly used crate errors
use std::error;
use std::{fmt, io};

/// Result type used within crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
/// Kind of error produced
pub enum ErrorKind {
    /// `lsusb` command could not be found on `PATH`
    NotInstalled,
    /// `lsusb` invocation exited non-zero
    Lsusb,
    /// Error decoding command output into a String
    Decoding,
    /// [`std::io::Error`] probably failed to spawn command
    Io,
    /// Error From other crate without enum variant
    Other(&'static str),
}

#[derive(Debug, PartialEq)]
/// usbtree error which impl [`std::error`]
pub struct Error {
    /// The [`ErrorKind`]
    pub kind: ErrorKind,
    /// String description
    pub message: String,
}

impl Error {
    /// New error helper
    pub fn new(kind: ErrorKind, message: &str) -> Error {
        Error {
            kind,
            message: message.to_string(),
        }
    }

    /// The [`ErrorKind`]
    pub fn kind(&self) -> ErrorKind {
        self.kind.to_owned()
    }

    /// The description
    pub fn message(&self) -> &String {
        &self.message
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{:?} Error: {}", self.kind, self.message)
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            message: error.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Error {
            kind: ErrorKind::Decoding,
            message: error.to_string(),
        }
    }
}

impl From<which::Error> for Error {
    fn from(error: which::Error) -> Self {
        Error {
            kind: ErrorKind::NotInstalled,
            message: format!(
                "'lsusb' is not installed. Please install it to use this tool. ({})",
                error
            ),
        }
    }
}

impl From<Error> for io::Error {
    fn from(val: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, val.message)
    }
}
