//! Destination root resolution
//!
//! A fixed destination resolves unconditionally. A routed destination is
//! an ordered rule table: rules are tested in declaration order against
//! the original, unstripped relative path, and the first match wins.
//! Routing decisions are therefore independent of how much prefix is
//! stripped later.

use routecp_config::DestinationSpec;
use routecp_types::{Error, PatternMatcher, Result};
use std::path::Path;

/// Glob-backed pattern matcher used by default
///
/// Patterns are validated when the stage configuration is built, so an
/// invalid pattern reaching this point simply matches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobMatcher;

impl PatternMatcher for GlobMatcher {
    fn is_match(&self, path: &str, pattern: &str) -> bool {
        glob::Pattern::new(pattern)
            .map(|pattern| pattern.matches(path))
            .unwrap_or(false)
    }
}

/// Resolve the destination root for `relative`
///
/// `relative` must be the original relative path, before any prefix
/// stripping. Fails with [`Error::NoDestinationMatch`] when a routed
/// destination has no rule matching the path.
pub fn resolve<'a, M>(spec: &'a DestinationSpec, relative: &str, matcher: &M) -> Result<&'a Path>
where
    M: PatternMatcher + ?Sized,
{
    match spec {
        DestinationSpec::Fixed(root) => Ok(root.as_path()),
        DestinationSpec::Routed(rules) => rules
            .iter()
            .find(|rule| matcher.is_match(relative, &rule.pattern))
            .map(|rule| rule.dest.as_path())
            .ok_or_else(|| Error::no_destination_match(relative)),
    }
}
