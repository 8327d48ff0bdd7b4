use std::fmt;
use thiserror::Error;

/// Where in a persisted payload a decode failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPosition {
    /// Byte offset into a bincode stream.
    Byte(u64),
    /// Line and column of a JSON document (both 1-based).
    Line { line: usize, column: usize },
}

impl fmt::Display for DataPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataPosition::Byte(offset) => write!(f, "byte {}", offset),
            DataPosition::Line { line, column } => write!(f, "line {} column {}", line, column),
        }
    }
}

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum CoreError {
    /// A persisted dictionary could not be decoded
    #[error("Corrupt dictionary data at {position}: {message}")]
    CorruptData {
        position: DataPosition,
        message: String,
    },

    /// Reading or writing a file failed
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A dictionary could not be encoded
    #[error("Could not encode dictionary: {0}")]
    Encode(String),

    /// The lexical index could not be built
    #[error("Could not build lexical index: {0}")]
    Index(String),

    /// A configuration file was malformed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<fst::Error> for CoreError {
    fn from(value: fst::Error) -> Self {
        CoreError::Index(format!("{value}"))
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(value: toml::de::Error) -> Self {
        CoreError::Config(format!("{value}"))
    }
}

impl From<toml::ser::Error> for CoreError {
    fn from(value: toml::ser::Error) -> Self {
        CoreError::Config(format!("{value}"))
    }
}
