//! Content store abstraction for folio.
//!
//! This crate provides a [`Storage`] trait for listing and reading the markdown
//! and YAML files behind the docs, courses and blogs collections. This enables:
//!
//! - **Unit testing** of tree builders without touching the real filesystem
//! - **Clean separation** between content structure logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `list()`, `read()`, `exists()` and `mtime()` methods
//! - [`FsStorage`] implementation rooted at a content directory
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use folio_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("static"));
//! for entry in storage.list(Path::new("docs"))? {
//!     tracing::info!(name = %entry.name, dir = entry.is_dir(), "entry");
//! }
//! # Ok::<(), folio_storage::StorageError>(())
//! ```

mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockStorage;
pub use storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind};
