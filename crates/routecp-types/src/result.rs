//! Result type alias for routecp operations

use crate::Error;

/// Result type alias for routecp operations
pub type Result<T> = std::result::Result<T, Error>;
