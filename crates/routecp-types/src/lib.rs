//! Core type system and error handling for routecp
//!
//! This crate provides the foundational types shared across the routecp
//! crates. It includes:
//!
//! - **Error handling**: the error taxonomy of the routing stage, with
//!   category accessors and per-variant constructors
//! - **Core types**: file objects flowing through the stage, per-file copy
//!   outcomes, and run-level statistics
//! - **Traits**: the pattern-matching seam injected into destination
//!   resolution
//!
//! # Features
//!
//! - `serde`: Enable serialization support for the shared types
//!
//! # Examples
//!
//! ```rust
//! use routecp_types::{CopyOutcome, FileObject, StageStats};
//!
//! let file = FileObject::with_content("/work", "/work/src/a.txt");
//! assert!(!file.is_empty());
//!
//! let mut stats = StageStats::new();
//! stats.record(&CopyOutcome::PassedThrough);
//! assert_eq!(stats.files_passed_through, 1);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
pub use result::Result;
pub use traits::PatternMatcher;
pub use types::{ContentKind, CopyOutcome, FileObject, StageStats};
