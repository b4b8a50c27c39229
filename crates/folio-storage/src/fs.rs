//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading content from a local directory.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Resolves every relative path against `root_dir`. Nothing is cached, so
/// each call observes the directory as it is at that moment.
///
/// # Example
///
/// ```no_run
/// use std::path::{Path, PathBuf};
/// use folio_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("static"));
/// let entries = storage.list(Path::new("docs"))?;
/// # Ok::<(), folio_storage::StorageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    root_dir: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `root_dir`.
    #[must_use]
    pub fn new(root_dir: PathBuf) -> Self {
        Self { root_dir }
    }

    /// Content root directory.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Validate that a path stays inside the content root.
    ///
    /// Rejects absolute paths and paths containing parent directory
    /// components (`..`).
    fn validate_path(path: &Path) -> Result<(), StorageError> {
        let escapes = path.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, StorageError> {
        Self::validate_path(path)?;
        Ok(self.root_dir.join(path))
    }
}

impl Storage for FsStorage {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, StorageError> {
        let full_path = self.resolve(dir)?;
        let entries = fs::read_dir(&full_path)
            .map_err(|e| StorageError::io(e, Some(full_path.clone())).with_backend(BACKEND))?;

        let mut result = Vec::new();
        for entry in entries.filter_map(Result::ok) {
            let Ok(name) = entry.file_name().into_string() else {
                tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 entry name");
                continue;
            };
            // Follow symlinks so linked folders behave like real ones
            let kind = match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => EntryKind::Dir,
                Ok(_) => EntryKind::File,
                Err(e) => {
                    tracing::debug!(path = %entry.path().display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            result.push(Entry { name, kind });
        }

        Ok(result)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        let full_path = self.resolve(path)?;
        fs::read_to_string(&full_path)
            .map_err(|e| StorageError::io(e, Some(full_path)).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_ok_and(|p| p.exists())
    }

    fn mtime(&self, path: &Path) -> Result<f64, StorageError> {
        let full_path = self.resolve(path)?;
        let metadata = fs::metadata(&full_path)
            .map_err(|e| StorageError::io(e, Some(full_path.clone())).with_backend(BACKEND))?;
        let modified = metadata
            .modified()
            .map_err(|e| StorageError::io(e, Some(full_path)).with_backend(BACKEND))?;
        Ok(modified
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64()))
    }
}
