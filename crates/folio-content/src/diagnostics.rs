//! Content problems surfaced to authors.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::config::{ConfigLoadError, ConfigObserver};

/// Kind of content problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A `config.yaml` exists but could not be used.
    InvalidConfig,
    /// Two folders of one collection share a public slug.
    DuplicateFolderSlug,
    /// Two files of one folder share a public slug.
    DuplicateFileSlug,
    /// Two blog posts share a public slug.
    DuplicateBlogSlug,
    /// A docs folder slug shadows a collection route.
    ReservedFolderSlug,
}

/// A single problem found in the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Offending file or directory, relative to the content root.
    pub path: Option<PathBuf>,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Observer that keeps config failures as [`Diagnostic`]s.
///
/// Used by `folio check`; sites serving pages use
/// [`TracingObserver`](crate::TracingObserver) instead.
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigObserver for DiagnosticsCollector {
    fn config_error(&self, path: &Path, error: &ConfigLoadError) {
        tracing::debug!(path = %path.display(), error = %error, "Recording config error");
        let mut diagnostics = self.lock();
        // Trees are rebuilt per call, so the same file can fail more than once
        if diagnostics.iter().any(|d| d.path.as_deref() == Some(path)) {
            return;
        }
        diagnostics.push(
            Diagnostic::new(DiagnosticKind::InvalidConfig, error.to_string()).with_path(path),
        );
    }
}
