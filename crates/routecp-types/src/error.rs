//! Error types and handling for routecp
//!
//! Every failure in the stage is terminal for the current pipeline run:
//! errors are surfaced to the surrounding pipeline, never retried or
//! recovered locally. The variants below are the complete taxonomy a run
//! can fail with.

use std::path::PathBuf;

/// Main error type for routecp operations
#[derive(thiserror::Error, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// Stage configuration was missing or malformed
    #[error("no valid configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong with the supplied configuration
        message: String,
    },

    /// An input file object carries open-stream content
    #[error("streaming not supported: {path}")]
    StreamingUnsupported {
        /// Path of the offending file object
        path: PathBuf,
    },

    /// No route pattern matched the file's relative path
    #[error("no destination found for \"{path}\"")]
    NoDestinationMatch {
        /// The relative path that matched none of the routes
        path: String,
    },

    /// The filesystem refused to create a required destination directory
    #[error("could not create destination <{path}>: {message}")]
    DirectoryCreateFailed {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying cause reported by the filesystem
        message: String,
    },

    /// A read or write failure interrupted the content transfer
    #[error("could not copy file <{path}>: {message}")]
    CopyFailed {
        /// Source path of the file being transferred
        path: PathBuf,
        /// Underlying I/O error
        message: String,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Other {
        /// Custom error message
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration errors
    InvalidConfiguration,
    /// Open-stream input
    StreamingUnsupported,
    /// Unrouteable path
    NoDestinationMatch,
    /// Directory provisioning errors
    DirectoryCreateFailed,
    /// Transfer errors
    CopyFailed,
    /// Other errors
    Other,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            Self::StreamingUnsupported { .. } => ErrorKind::StreamingUnsupported,
            Self::NoDestinationMatch { .. } => ErrorKind::NoDestinationMatch,
            Self::DirectoryCreateFailed { .. } => ErrorKind::DirectoryCreateFailed,
            Self::CopyFailed { .. } => ErrorKind::CopyFailed,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Check if this error was raised before any file was processed
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Create a new configuration error
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a new streaming-unsupported error
    pub fn streaming_unsupported<P: Into<PathBuf>>(path: P) -> Self {
        Self::StreamingUnsupported { path: path.into() }
    }

    /// Create a new no-destination-match error
    pub fn no_destination_match<S: Into<String>>(path: S) -> Self {
        Self::NoDestinationMatch { path: path.into() }
    }

    /// Create a new directory-creation error
    pub fn directory_create_failed<P: Into<PathBuf>, S: Into<String>>(
        path: P,
        message: S,
    ) -> Self {
        Self::DirectoryCreateFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new copy-failure error carrying the source path
    pub fn copy_failed<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::CopyFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
