//! Pipeline-relative path computation and prefix stripping
//!
//! Relative paths use forward-slash separators on every platform; the
//! separator rewrite is an explicit pure function rather than inline
//! string mutation so it can be tested on its own.

use std::path::{Component, Path};

/// Replace backslash separators with forward slashes
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Compute the location of `path` relative to `base`
///
/// The result uses forward-slash separators and carries no leading `./`.
/// A `path` outside `base` is expressed with leading `..` segments rather
/// than rejected.
pub fn relative_path(base: &Path, path: &Path) -> String {
    let base_components: Vec<Component<'_>> = base.components().collect();
    let path_components: Vec<Component<'_>> = path.components().collect();

    let shared = base_components
        .iter()
        .zip(path_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for component in &base_components[shared..] {
        if matches!(component, Component::Normal(_)) {
            segments.push("..".to_string());
        }
    }
    for component in &path_components[shared..] {
        match component {
            Component::Normal(part) => {
                segments.push(normalize_separators(&part.to_string_lossy()));
            }
            Component::ParentDir => segments.push("..".to_string()),
            _ => {}
        }
    }

    segments.join("/")
}

/// Remove the first `count` segments from a relative path
///
/// Each strip discards everything up to and including the next `/`. Once
/// no separator remains the path is left as-is, so over-stripping a bare
/// filename is a no-op, while a path ending in `/` strips down to the
/// empty string. Either way this never fails; callers get whatever
/// remains.
pub fn strip_segments(path: &str, count: usize) -> &str {
    let mut rest = path;
    for _ in 0..count {
        match rest.find('/') {
            Some(separator) => rest = &rest[separator + 1..],
            None => break,
        }
    }
    rest
}
