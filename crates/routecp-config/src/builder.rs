//! Builder for assembling a stage configuration

use crate::{ConfigError, ConfigResult, DestinationSpec, RouteRule, StageConfig};
use std::path::PathBuf;

/// Builder for [`StageConfig`]
///
/// Collects a destination (fixed root or route table) and the prefix strip
/// count, then validates everything in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct StageConfigBuilder {
    fixed: Option<PathBuf>,
    routes: Vec<RouteRule>,
    prefix: usize,
}

impl StageConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single fixed destination root
    pub fn destination<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.fixed = Some(root.into());
        self
    }

    /// Append a pattern-to-root route
    ///
    /// Routes are tested in the order they are added; the first match wins.
    pub fn route<S: Into<String>, P: Into<PathBuf>>(mut self, pattern: S, dest: P) -> Self {
        self.routes.push(RouteRule::new(pattern, dest));
        self
    }

    /// Set the number of leading path segments to strip
    pub fn prefix(mut self, prefix: usize) -> Self {
        self.prefix = prefix;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> ConfigResult<StageConfig> {
        let destination = match (self.fixed, self.routes.is_empty()) {
            (Some(_), false) => return Err(ConfigError::AmbiguousDestination),
            (Some(root), true) => DestinationSpec::Fixed(root),
            (None, false) => DestinationSpec::Routed(self.routes),
            (None, true) => return Err(ConfigError::MissingDestination),
        };

        let config = StageConfig {
            destination,
            prefix: self.prefix,
        };
        config.validate()?;
        Ok(config)
    }
}
