//! Filesystem side of the routing stage
//!
//! This crate provides the two operations that touch the disk:
//!
//! - **Directory provisioning**: idempotent `mkdir -p`-style creation of a
//!   destination directory tree
//! - **Streaming transfer**: a byte-for-byte copy that streams chunks
//!   instead of materializing whole files, with single-fire completion
//!   semantics under its three racing terminal events (read error, write
//!   error, write completion)
//!
//! # Examples
//!
//! ```rust,no_run
//! use routecp_io::{copy_file, ensure_dir, TransferOptions};
//! use std::path::Path;
//!
//! # async fn example() -> routecp_types::Result<()> {
//! ensure_dir(Path::new("out/src")).await?;
//! let bytes = copy_file(
//!     Path::new("src/a.txt"),
//!     Path::new("out/src/a.txt"),
//!     &TransferOptions::default(),
//! )
//! .await?;
//! println!("copied {bytes} bytes");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dir;
pub mod transfer;

pub use dir::ensure_dir;
pub use transfer::{copy_file, TransferOptions};
