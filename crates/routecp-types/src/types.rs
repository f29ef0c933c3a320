//! Core data types for routecp
//!
//! This module provides the value types that flow through the routing
//! stage: the file objects handed over by the surrounding pipeline, the
//! per-file outcome of the stage, and run-level statistics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Transfer rate in bytes per second
pub type TransferRate = f64;

/// Classification of the content carried by a [`FileObject`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContentKind {
    /// No content at all, e.g. a bare directory entry. Passed through
    /// unchanged.
    Empty,
    /// Readable byte content materialized on disk at the object's `path`.
    Content,
    /// Content delivered incrementally through an open stream. Not
    /// supported by this stage.
    Stream,
}

/// A file object flowing through the pipeline
///
/// Constructed by the upstream producer; this stage only reads the fields
/// and, after a successful copy, reassigns `path` so downstream stages see
/// the new location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileObject {
    /// Root directory the file was discovered under
    pub base: PathBuf,
    /// Absolute location of the file right now
    pub path: PathBuf,
    /// Content classification
    pub content: ContentKind,
}

impl FileObject {
    /// Create a new file object
    pub fn new<B: Into<PathBuf>, P: Into<PathBuf>>(base: B, path: P, content: ContentKind) -> Self {
        Self {
            base: base.into(),
            path: path.into(),
            content,
        }
    }

    /// Create a contentless file object (directory entry, placeholder)
    pub fn empty<B: Into<PathBuf>, P: Into<PathBuf>>(base: B, path: P) -> Self {
        Self::new(base, path, ContentKind::Empty)
    }

    /// Create a file object with readable on-disk content
    pub fn with_content<B: Into<PathBuf>, P: Into<PathBuf>>(base: B, path: P) -> Self {
        Self::new(base, path, ContentKind::Content)
    }

    /// Create a file object backed by an open stream
    pub fn with_stream<B: Into<PathBuf>, P: Into<PathBuf>>(base: B, path: P) -> Self {
        Self::new(base, path, ContentKind::Stream)
    }

    /// Check whether this object carries no content
    pub fn is_empty(&self) -> bool {
        self.content == ContentKind::Empty
    }

    /// Check whether this object's content arrives through an open stream
    pub fn is_stream(&self) -> bool {
        self.content == ContentKind::Stream
    }
}

/// Per-file outcome of the routing stage
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CopyOutcome {
    /// The object carried no content and was forwarded unchanged
    PassedThrough,
    /// Bytes were copied and the object's path now points at the target
    Copied {
        /// Final location of the copied content
        target: PathBuf,
        /// Number of bytes written to the target
        bytes_copied: u64,
    },
}

/// Statistics accumulated over one stage run
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StageStats {
    /// Number of files copied to a destination
    pub files_copied: u64,
    /// Number of contentless objects forwarded unchanged
    pub files_passed_through: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Total duration of the run
    pub duration: Duration,
}

impl StageStats {
    /// Create a new empty statistics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one per-file outcome
    pub fn record(&mut self, outcome: &CopyOutcome) {
        match outcome {
            CopyOutcome::PassedThrough => self.files_passed_through += 1,
            CopyOutcome::Copied { bytes_copied, .. } => {
                self.files_copied += 1;
                self.bytes_copied += bytes_copied;
            }
        }
    }

    /// Calculate the overall transfer rate
    pub fn transfer_rate(&self) -> TransferRate {
        if self.duration.as_secs_f64() > 0.0 {
            self.bytes_copied as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Merge statistics from another instance
    pub fn merge(&mut self, other: &StageStats) {
        self.files_copied += other.files_copied;
        self.files_passed_through += other.files_passed_through;
        self.bytes_copied += other.bytes_copied;
        self.duration += other.duration;
    }
}
