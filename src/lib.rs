//! An in-memory hierarchical filesystem for Rust.
//! Emulates a POSIX-like filesystem over a plain nested map of files and folders. Ideal for
//! tests and build tools that need a fast, disposable filesystem.
//!
//! ### Overview
//!
//! `treefs` lets you read, write, copy, delete, list and inspect files (opaque string payloads)
//! and folders (nested maps) addressed by `/`-separated paths, without touching real storage.
//! The operations are defined by the `FsBackend` trait and implemented by `TreeFS`.
//!
//! **Key ideas**:
//! - **Normalized paths**: `.`, `..` and repeated slashes are collapsed before every lookup.
//! - **No aliasing**: trees going in or out of the store are deep copies.
//! - **Atomic failures**: every check happens before the tree is touched.
//! - **POSIX error codes**: failures carry `ENOENT`, `ENOTDIR`, `EISDIR` or `EEXIST`, see
//!   [`ErrorCodeExt`].
//!
//! ```
//! use treefs::{ErrorCode, ErrorCodeExt, FsBackend, TreeFS};
//!
//! let mut fs = TreeFS::new();
//! fs.mkdir("folder").unwrap();
//!
//! let err = fs.write_file("folder", "x").unwrap_err();
//! assert_eq!(err.code(), Some(ErrorCode::IsADirectory));
//! ```

mod core;
pub mod error;
mod vfs;

pub use crate::core::{FsBackend, Result, utils};
pub use error::{ErrorCode, ErrorCodeExt, FsError};
pub use vfs::{EntryType, Folder, Node, NodeRef, Stat, TreeFS};
