//! Error types for kmlkit operations.

use thiserror::Error;

/// Errors that can occur while serializing elements or packaging archives.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML writing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A dynamically typed value had a type outside the supported set.
    #[error("{0}: unsupported type")]
    UnsupportedType(String),

    #[error("line {line}: invalid waypoint: {reason}")]
    InvalidWaypoint { line: usize, reason: String },

    #[error("duplicate waypoint ID: {0}")]
    DuplicateWaypoint(String),

    #[error("unknown waypoint: {0}")]
    UnknownWaypoint(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an [`Error::UnsupportedType`] naming `T`.
    pub(crate) fn unsupported<T: ?Sized>() -> Self {
        Error::UnsupportedType(std::any::type_name::<T>().to_string())
    }
}
