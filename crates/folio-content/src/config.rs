//! Sidecar `config.yaml` loading.
//!
//! Every collection root and every docs/course folder may carry a
//! `config.yaml`. Loading fails open: a missing file means "no overrides",
//! and a broken one is reported to a [`ConfigObserver`] and then treated the
//! same way. Individual fields are type-checked one by one, so a wrongly
//! typed `keywords` does not discard the entry's `heading`.
//!
//! Two document shapes are accepted and resolve identically:
//!
//! ```yaml
//! - slug: 01_docker
//!   heading: Docker
//! ```
//!
//! ```yaml
//! docs:
//!   - slug: 01_docker
//!     heading: Docker
//! ```

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use folio_storage::{Storage, StorageError};
use serde_yaml::{Mapping, Value};

use crate::naming::{slugify_heading, to_pretty_slug};

/// Sidecar config filename.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Sequence key for per-folder configs.
pub const FILES_KEY: &str = "files";

/// Error loading a `config.yaml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// File exists but could not be read.
    #[error("Read error: {0}")]
    Read(#[from] StorageError),
    /// File is not valid YAML.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// File is valid YAML but neither a list nor a mapping holding one.
    #[error("Unexpected shape: expected a list or a `{key}:` list")]
    Shape {
        /// Key the list was expected under.
        key: &'static str,
    },
}

/// Receives config load failures.
pub trait ConfigObserver: Send + Sync {
    /// Called once per config file that exists but cannot be used.
    fn config_error(&self, path: &Path, error: &ConfigLoadError);
}

/// Observer that logs failures at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ConfigObserver for TracingObserver {
    fn config_error(&self, path: &Path, error: &ConfigLoadError) {
        tracing::warn!(path = %path.display(), error = %error, "Ignoring invalid config file");
    }
}

/// Override fields for one config entry.
///
/// `None` and empty `keywords` mean "keep the derived default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryOverride {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub excerpt: Option<String>,
    pub keywords: Vec<String>,
    pub updated: Option<DateTime<Utc>>,
}

/// Overrides keyed by slug, in config order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionConfig {
    entries: Vec<(String, EntryOverride)>,
}

impl CollectionConfig {
    /// Override for `slug`. The first entry wins when a slug repeats.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&EntryOverride> {
        self.entries
            .iter()
            .find(|(key, _)| key == slug)
            .map(|(_, entry)| entry)
    }

    /// Configured slugs in config order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One entry of a course folder config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFileEntry {
    /// On-disk file slug (filename without `.md`).
    pub file: String,
    /// Effective public slug.
    pub slug: String,
    pub heading: Option<String>,
    pub updated: Option<DateTime<Utc>>,
}

/// Load a collection-level config (`docs/config.yaml`, `courses/config.yaml`,
/// `blogs/config.yaml`).
///
/// `key` is the mapping key that may hold the entry list (`docs`,
/// `courses`, `blogs`). Entries without a string `slug` are dropped.
pub fn load_collection_config(
    storage: &dyn Storage,
    root: &Path,
    key: &'static str,
    observer: &dyn ConfigObserver,
) -> CollectionConfig {
    let entries = load_entries(storage, root, key, observer)
        .iter()
        .filter_map(|item| {
            let slug = str_field(item, "slug")?;
            Some((slug, parse_override(item)))
        })
        .collect();
    CollectionConfig { entries }
}

/// Load a docs folder config keyed by file slug (sequence key `files`).
pub fn load_folder_config(
    storage: &dyn Storage,
    folder_dir: &Path,
    observer: &dyn ConfigObserver,
) -> CollectionConfig {
    load_collection_config(storage, folder_dir, FILES_KEY, observer)
}

/// Load a course folder config.
///
/// Each entry names its source by `file`, else by `slug`; entries with
/// neither are dropped. The public slug is, by priority: explicit `slug`
/// next to `file`, pretty form of a lone `slug`, slug of `heading`, pretty
/// form of `file`.
pub fn load_course_folder_config(
    storage: &dyn Storage,
    course_dir: &Path,
    observer: &dyn ConfigObserver,
) -> Vec<CourseFileEntry> {
    load_entries(storage, course_dir, FILES_KEY, observer)
        .iter()
        .filter_map(parse_course_entry)
        .collect()
}

fn parse_course_entry(item: &Mapping) -> Option<CourseFileEntry> {
    let file = str_field(item, "file").filter(|f| !f.is_empty());
    let slug = str_field(item, "slug").filter(|s| !s.is_empty());
    let heading = str_field(item, "heading");

    let (file, slug) = match (file, slug) {
        (Some(file), Some(slug)) => (file, slug),
        (None, Some(slug)) => {
            let pretty = to_pretty_slug(&slug);
            (slug, pretty)
        }
        (Some(file), None) => {
            let slug = heading
                .as_deref()
                .and_then(slugify_heading)
                .unwrap_or_else(|| to_pretty_slug(&file));
            (file, slug)
        }
        (None, None) => return None,
    };

    Some(CourseFileEntry {
        file,
        slug,
        heading,
        updated: date_field(item),
    })
}

/// Parse a config date: RFC 3339 timestamp or `YYYY-MM-DD` (midnight UTC).
///
/// # Examples
///
/// ```
/// use folio_content::config::parse_config_date;
///
/// assert!(parse_config_date("2025-02-11").is_some());
/// assert!(parse_config_date("2025-02-11T10:30:00+01:00").is_some());
/// assert!(parse_config_date("last tuesday").is_none());
/// ```
#[must_use]
pub fn parse_config_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

/// Read `<dir>/config.yaml` and return its entry mappings.
fn load_entries(
    storage: &dyn Storage,
    dir: &Path,
    key: &'static str,
    observer: &dyn ConfigObserver,
) -> Vec<Mapping> {
    let path = dir.join(CONFIG_FILENAME);
    match read_entries(storage, &path, key) {
        Ok(entries) => entries,
        Err(e) => {
            observer.config_error(&path, &e);
            Vec::new()
        }
    }
}

fn read_entries(
    storage: &dyn Storage,
    path: &Path,
    key: &'static str,
) -> Result<Vec<Mapping>, ConfigLoadError> {
    let content = match storage.read(path) {
        Ok(content) => content,
        Err(e) if e.is_not_found() => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let list = match serde_yaml::from_str::<Value>(&content)? {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(seq) => seq,
        Value::Mapping(mut map) => match map.remove(key) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Sequence(seq)) => seq,
            Some(_) => return Err(ConfigLoadError::Shape { key }),
        },
        _ => return Err(ConfigLoadError::Shape { key }),
    };

    tracing::debug!(path = %path.display(), entries = list.len(), "Loaded config");

    // Non-mapping items carry no fields and are skipped
    Ok(list
        .into_iter()
        .filter_map(|item| match item {
            Value::Mapping(map) => Some(map),
            _ => None,
        })
        .collect())
}

fn parse_override(item: &Mapping) -> EntryOverride {
    EntryOverride {
        heading: str_field(item, "heading"),
        description: str_field(item, "description"),
        excerpt: str_field(item, "excerpt"),
        keywords: item
            .get("keywords")
            .and_then(Value::as_sequence)
            .map(|seq| {
                seq.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default(),
        updated: date_field(item),
    }
}

fn str_field(item: &Mapping, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn date_field(item: &Mapping) -> Option<DateTime<Utc>> {
    item.get("updated")
        .and_then(Value::as_str)
        .and_then(parse_config_date)
}
