//! File-routing-and-copy pipeline stage
//!
//! This crate assembles the routecp components into the stage the
//! surrounding pipeline embeds: per incoming file object it derives a
//! pipeline-relative path, resolves a destination root (fixed, or ordered
//! first-match routing), strips the configured prefix, provisions the
//! destination directory tree, streams a byte-for-byte copy, and rewrites
//! the object's path for the downstream stages.
//!
//! # Examples
//!
//! ```rust,no_run
//! use routecp_config::StageConfig;
//! use routecp_stage::CopyStage;
//! use routecp_types::FileObject;
//!
//! # async fn example() -> routecp_types::Result<()> {
//! let config = StageConfig::builder()
//!     .route("*.js", "js-out")
//!     .route("*.css", "css-out")
//!     .build()?;
//! let stage = CopyStage::new(config)?;
//!
//! let mut file = FileObject::with_content("/work", "/work/app.js");
//! stage.process(&mut file).await?;
//! assert!(file.path.ends_with("js-out/app.js"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod path;
pub mod resolve;
pub mod stage;

pub use resolve::{resolve, GlobMatcher};
pub use stage::CopyStage;
