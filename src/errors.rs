use std::error::Error as StdError;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;
use std::string::FromUtf8Error;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Input could not be decoded as UTF-8 text
    Encoding(String),
    /// XML structure is malformed
    Document(String),
    /// Path data could not be tokenized or interpreted
    Path(String),
    /// A `transform` attribute could not be parsed
    Transform(String),
    /// Conversion settings are out of range
    Config(String),
    /// Null or otherwise unusable argument at the C boundary
    InvalidArgument(String),
    Io(std::io::Error),
    Cli(String),
    Other(Box<dyn StdError>),
}

/// Numeric error codes returned across the C boundary.
///
/// Zero is success; 5 and above are host-specific extensions.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    Encoding = 1,
    Document = 2,
    Path = 3,
    Transform = 4,
    InvalidArgument = 5,
    Host = 6,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Encoding(reason) => write!(f, "Encoding error: {reason}"),
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::Path(reason) => write!(f, "Malformed path: {reason}"),
            Error::Transform(reason) => write!(f, "Malformed transform: {reason}"),
            Error::Config(reason) => write!(f, "Invalid config: {reason}"),
            Error::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(e) => Some(&**e),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: StdError + 'static,
    {
        Error::Other(Box::new(err))
    }

    /// The numeric code reported for this error at the C boundary.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Encoding(_) => ErrorCode::Encoding,
            Error::Document(_) => ErrorCode::Document,
            Error::Path(_) => ErrorCode::Path,
            Error::Transform(_) => ErrorCode::Transform,
            Error::Config(_) | Error::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Error::Io(_) | Error::Cli(_) | Error::Other(_) => ErrorCode::Host,
        }
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> u8 {
        code as u8
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

// Number parse failures only occur while reading path data or transform
// arguments; callers which need `Error::Transform` map explicitly.
impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Path(format!("float: {err}"))
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Error {
        Error::Path(format!("int: {err}"))
    }
}

impl From<Utf8Error> for Error {
    fn from(err: Utf8Error) -> Error {
        Error::Encoding(format!("utf8: {err}"))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Encoding(format!("utf8: {err}"))
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Error {
        Error::Document(err.to_string())
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error::Cli(err.to_string())
    }
}
