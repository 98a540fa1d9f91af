use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the File Deliver application
#[derive(Debug)]
pub enum Error {
    /// Error when the source path argument is not supplied
    MissingArgument,
    /// Error when the supplied path does not exist as a regular file
    SourceNotFound { path: PathBuf },
    /// Error when the underlying copy operation fails
    CopyFailed {
        source: io::Error,
        from: PathBuf,
        to: PathBuf,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingArgument => {
                write!(f, "Missing parameter: the file to deliver was not given")
            }
            Error::SourceNotFound { path } => {
                write!(f, "{} does not exist", path.display())
            }
            Error::CopyFailed { source, from, to } => {
                write!(
                    f,
                    "Failed to copy {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::CopyFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Generic {
            message: err.to_string(),
        }
    }
}

/// Custom Result type for the File Deliver application
///
/// This type alias simplifies error handling throughout the application by
/// using the custom Error type. It's used as the return type for most functions
/// that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a source-not-found error
pub fn source_not_found_error(path: PathBuf) -> Error {
    Error::SourceNotFound { path }
}

/// Helper function to create a copy-failed error
pub fn copy_failed_error(err: io::Error, from: PathBuf, to: PathBuf) -> Error {
    Error::CopyFailed {
        source: err,
        from,
        to,
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
