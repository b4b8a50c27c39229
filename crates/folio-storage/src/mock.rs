//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::storage::{Entry, Storage, StorageError, StorageErrorKind};

const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Holds files in memory. Directories are implied by file paths; use
/// [`MockStorage::with_dir`] for an empty directory.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use folio_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("docs/01_docker/01_intro.md", "# Intro")
///     .with_mtime("docs/01_docker/01_intro.md", 1_700_000_000.0);
///
/// let entries = storage.list(Path::new("docs"))?;
/// let content = storage.read(Path::new("docs/01_docker/01_intro.md"))?;
/// ```
#[derive(Debug, Default, Clone)]
pub struct MockStorage {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    mtimes: BTreeMap<PathBuf, f64>,
    unreadable: BTreeSet<PathBuf>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with content. Parent directories are created implicitly.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.files.insert(path, content.into());
        self
    }

    /// Add an empty directory.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.dirs.insert(path);
        self
    }

    /// Set modification time for a path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file
    /// * `mtime` - Modification time as seconds since Unix epoch
    #[must_use]
    pub fn with_mtime(mut self, path: impl Into<PathBuf>, mtime: f64) -> Self {
        self.mtimes.insert(path.into(), mtime);
        self
    }

    /// Add a file that is listed but fails to read with `PermissionDenied`.
    #[must_use]
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.files.insert(path.clone(), String::new());
        self.unreadable.insert(path);
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || self.dirs.contains(path)
    }

    fn not_found(path: &Path) -> StorageError {
        StorageError::not_found(path).with_backend(BACKEND)
    }
}

/// Name of `path` if it is an immediate child of `dir`.
fn child_name(dir: &Path, path: &Path) -> Option<String> {
    let parent = path.parent()?;
    if parent != dir {
        return None;
    }
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

impl Storage for MockStorage {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, StorageError> {
        if !self.is_dir(dir) {
            return Err(Self::not_found(dir));
        }

        let dirs = self
            .dirs
            .iter()
            .filter_map(|d| child_name(dir, d))
            .map(Entry::dir);
        let files = self
            .files
            .keys()
            .filter_map(|f| child_name(dir, f))
            .map(Entry::file);

        Ok(dirs.chain(files).collect())
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        if self.unreadable.contains(path) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(path)
                .with_backend(BACKEND));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.is_dir(path)
    }

    fn mtime(&self, path: &Path) -> Result<f64, StorageError> {
        self.mtimes
            .get(path)
            .copied()
            .ok_or_else(|| Self::not_found(path))
    }
}
