//! Error types for stage configuration

use routecp_types::Error as RoutecpError;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No destination was supplied
    #[error("no valid destination specified")]
    MissingDestination,

    /// A destination cannot be fixed and routed at the same time
    #[error("destination cannot be both fixed and routed")]
    AmbiguousDestination,

    /// A routed destination contains no rules
    #[error("routed destination contains no rules")]
    EmptyRouteTable,

    /// A route pattern is not a well-formed glob
    #[error("invalid route pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Why the pattern failed to compile
        message: String,
    },

    /// Generic configuration error
    #[error("no valid options specified: {message}")]
    InvalidOptions {
        /// Error message
        message: String,
    },
}

impl From<ConfigError> for RoutecpError {
    fn from(error: ConfigError) -> Self {
        RoutecpError::invalid_configuration(error.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a new invalid-options error
    pub fn invalid_options<S: Into<String>>(message: S) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }
}
