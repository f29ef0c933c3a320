//! Stage configuration for routecp
//!
//! This crate provides the construction-time configuration of the routing
//! stage: the destination specification (a fixed root, or an ordered
//! pattern-to-root route table) and the number of leading path segments to
//! strip before composing output paths.
//!
//! Configuration is validated eagerly, before any file is processed, and is
//! immutable for the lifetime of a pipeline run.
//!
//! # Examples
//!
//! ```rust
//! use routecp_config::StageConfig;
//!
//! let config = StageConfig::builder()
//!     .route("*.js", "js-out")
//!     .route("*.css", "css-out")
//!     .prefix(1)
//!     .build()
//!     .expect("valid configuration");
//!
//! assert_eq!(config.prefix, 1);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod builder;
pub mod error;

pub use builder::StageConfigBuilder;
pub use error::{ConfigError, ConfigResult};

/// One pattern-to-root entry of a routed destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    /// Glob pattern tested against the original relative path
    pub pattern: String,
    /// Destination root for paths matching the pattern
    pub dest: PathBuf,
}

impl RouteRule {
    /// Create a new route rule
    pub fn new<S: Into<String>, P: Into<PathBuf>>(pattern: S, dest: P) -> Self {
        Self {
            pattern: pattern.into(),
            dest: dest.into(),
        }
    }
}

/// Destination specification for the routing stage
///
/// Deserializes from either a plain string (fixed root) or a sequence of
/// `{ pattern, dest }` entries (routed). A sequence keeps declaration
/// order, which matters: resolution is first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DestinationSpec {
    /// Every file goes under this single root
    Fixed(PathBuf),
    /// Files are routed to the root of the first matching rule
    Routed(Vec<RouteRule>),
}

impl DestinationSpec {
    /// Check whether this is a fixed destination
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

/// Immutable configuration of the routing stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Where routed files end up
    pub destination: DestinationSpec,
    /// Number of leading path segments stripped from the relative path
    /// before composing the output path
    #[serde(default)]
    pub prefix: usize,
}

impl StageConfig {
    /// Create a fixed-destination configuration with no prefix stripping
    pub fn fixed<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            destination: DestinationSpec::Fixed(root.into()),
            prefix: 0,
        }
    }

    /// Create a routed configuration with no prefix stripping
    pub fn routed<I: IntoIterator<Item = RouteRule>>(rules: I) -> Self {
        Self {
            destination: DestinationSpec::Routed(rules.into_iter().collect()),
            prefix: 0,
        }
    }

    /// Start building a configuration
    pub fn builder() -> StageConfigBuilder {
        StageConfigBuilder::new()
    }

    /// Validate the configuration
    ///
    /// A routed destination must hold at least one rule and every pattern
    /// must be a well-formed glob. Runs at construction time so a broken
    /// configuration fails before the first file is seen.
    pub fn validate(&self) -> ConfigResult<()> {
        match &self.destination {
            DestinationSpec::Fixed(_) => Ok(()),
            DestinationSpec::Routed(rules) => {
                if rules.is_empty() {
                    return Err(ConfigError::EmptyRouteTable);
                }
                for rule in rules {
                    glob::Pattern::new(&rule.pattern).map_err(|e| ConfigError::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        message: e.to_string(),
                    })?;
                }
                Ok(())
            }
        }
    }
}
