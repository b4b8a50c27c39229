//! Directory walking shared by the docs, courses and blogs builders.

use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use folio_storage::{Entry, Storage};
use regex::Regex;

use crate::config::CollectionConfig;
use crate::model::{ContentFile, ContentFolder};
use crate::naming::{
    filename_to_title, folder_to_title, is_markdown, strip_md_extension, to_pretty_slug,
};

/// Derived descriptions longer than this are truncated.
const DESCRIPTION_MAX_CHARS: usize = 120;

static FRONT_MATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^---.*?---\s*").unwrap());

static HEADING_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s*").unwrap());

/// Visible subdirectory names of `dir`, sorted byte-lexically.
pub(crate) fn list_dirs(storage: &dyn Storage, dir: &Path) -> Vec<String> {
    list_visible(storage, dir)
        .into_iter()
        .filter(Entry::is_dir)
        .map(|e| e.name)
        .collect()
}

/// Visible markdown filenames in `dir`, sorted byte-lexically.
pub(crate) fn list_markdown(storage: &dyn Storage, dir: &Path) -> Vec<String> {
    list_visible(storage, dir)
        .into_iter()
        .filter(|e| e.is_file() && is_markdown(&e.name))
        .map(|e| e.name)
        .collect()
}

fn list_visible(storage: &dyn Storage, dir: &Path) -> Vec<Entry> {
    let mut entries = match storage.list(dir) {
        Ok(entries) => entries,
        Err(e) if e.is_not_found() => {
            tracing::debug!(dir = %dir.display(), "Content directory missing");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Failed to list content directory");
            return Vec::new();
        }
    };
    entries.retain(|e| !e.is_hidden());
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// True when `key` names `file_slug` directly or by its pretty form.
pub(crate) fn key_matches(file_slug: &str, key: &str) -> bool {
    file_slug == key || to_pretty_slug(file_slug) == key
}

/// Order markdown files by a configured key list.
///
/// Each key pins the first not yet placed filename it matches, in key order;
/// keys matching nothing are dropped. Unpinned filenames follow in their
/// incoming (lexical) order. Each filename is returned with the index of
/// the key that pinned it.
pub(crate) fn arrange_files(filenames: Vec<String>, keys: &[&str]) -> Vec<(String, Option<usize>)> {
    let mut remaining: Vec<Option<String>> = filenames.into_iter().map(Some).collect();
    let mut arranged = Vec::with_capacity(remaining.len());

    for (index, key) in keys.iter().enumerate() {
        let slot = remaining.iter_mut().find(|slot| {
            slot.as_deref()
                .is_some_and(|name| key_matches(strip_md_extension(name), key))
        });
        match slot.and_then(Option::take) {
            Some(name) => arranged.push((name, Some(index))),
            None => tracing::debug!(key, "Config entry references no markdown file"),
        }
    }

    arranged.extend(remaining.into_iter().flatten().map(|name| (name, None)));
    arranged
}

/// File entry with derived defaults under any configured values.
pub(crate) fn content_file(
    filename: String,
    url_slug: Option<String>,
    heading: Option<String>,
    updated: Option<DateTime<Utc>>,
) -> ContentFile {
    let file_slug = strip_md_extension(&filename).to_owned();
    ContentFile {
        url_slug: url_slug.unwrap_or_else(|| to_pretty_slug(&file_slug)),
        title: heading.unwrap_or_else(|| filename_to_title(&filename)),
        file_slug,
        filename,
        updated,
    }
}

/// Folder entry with collection config overlaid on derived defaults.
///
/// The config entry is looked up by on-disk name first, then by public
/// slug. The derived description is only computed when the config does not
/// supply one.
pub(crate) fn content_folder(
    folder_name: &str,
    files: Vec<ContentFile>,
    config: &CollectionConfig,
    derived_description: impl FnOnce() -> String,
) -> ContentFolder {
    let url_slug = to_pretty_slug(folder_name);
    let entry = config.get(folder_name).or_else(|| config.get(&url_slug));

    let title = entry
        .and_then(|e| e.heading.clone())
        .unwrap_or_else(|| folder_to_title(folder_name));
    let description = entry
        .and_then(|e| e.description.clone())
        .unwrap_or_else(derived_description);
    let keywords = entry.map(|e| e.keywords.clone()).unwrap_or_default();

    ContentFolder {
        folder_name: folder_name.to_owned(),
        url_slug,
        title,
        description,
        keywords,
        files,
    }
}

/// Description derived from the first markdown file of a folder.
///
/// `filenames` must be lexically sorted. Falls back to `fallback` when the
/// file is unreadable or has no usable first line.
pub(crate) fn derive_description(
    storage: &dyn Storage,
    dir: &Path,
    filenames: &[String],
    fallback: &str,
) -> String {
    let Some(first) = filenames.first() else {
        return fallback.to_owned();
    };
    let path = dir.join(first);
    match storage.read(&path) {
        Ok(content) => description_from_markdown(&content).unwrap_or_else(|| fallback.to_owned()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Cannot read file for description");
            fallback.to_owned()
        }
    }
}

/// First line of a markdown document without front matter or heading markers.
pub(crate) fn description_from_markdown(content: &str) -> Option<String> {
    let body = FRONT_MATTER_RE.replace(content, "");
    let first_line = body.trim().lines().next().unwrap_or_default();
    let line = HEADING_MARKER_RE.replace(first_line, "");
    let line = line.trim();

    if line.is_empty() {
        return None;
    }
    if line.chars().count() > DESCRIPTION_MAX_CHARS {
        let truncated: String = line.chars().take(DESCRIPTION_MAX_CHARS - 3).collect();
        return Some(format!("{truncated}..."));
    }
    Some(line.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_storage::MockStorage;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_list_dirs_sorted_and_visible() {
        let storage = MockStorage::new()
            .with_file("docs/02_k8s/a.md", "")
            .with_file("docs/01_docker/a.md", "")
            .with_file("docs/.drafts/a.md", "")
            .with_file("docs/config.yaml", "");

        assert_eq!(
            list_dirs(&storage, Path::new("docs")),
            names(&["01_docker", "02_k8s"])
        );
    }

    #[test]
    fn test_list_markdown_filters() {
        let storage = MockStorage::new()
            .with_file("docs/d/02_b.md", "")
            .with_file("docs/d/01_a.MD", "")
            .with_file("docs/d/.hidden.md", "")
            .with_file("docs/d/config.yaml", "")
            .with_file("docs/d/image.png", "")
            .with_dir("docs/d/sub.md");

        assert_eq!(
            list_markdown(&storage, Path::new("docs/d")),
            names(&["01_a.MD", "02_b.md"])
        );
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let storage = MockStorage::new();

        assert!(list_dirs(&storage, Path::new("courses")).is_empty());
        assert!(list_markdown(&storage, Path::new("blogs")).is_empty());
    }

    #[test]
    fn test_arrange_files_config_first_then_lexical() {
        let files = names(&["01_a.md", "02_b.md", "03_c.md", "04_d.md"]);

        let arranged = arrange_files(files, &["03_c", "missing", "a"]);

        assert_eq!(
            arranged,
            vec![
                ("03_c.md".to_owned(), Some(0)),
                ("01_a.md".to_owned(), Some(2)),
                ("02_b.md".to_owned(), None),
                ("04_d.md".to_owned(), None),
            ]
        );
    }

    #[test]
    fn test_arrange_files_duplicate_key_pins_once() {
        let arranged = arrange_files(names(&["01_a.md", "02_b.md"]), &["02_b", "02_b"]);

        assert_eq!(
            arranged,
            vec![("02_b.md".to_owned(), Some(0)), ("01_a.md".to_owned(), None)]
        );
    }

    #[test]
    fn test_arrange_files_without_keys_keeps_order() {
        let files = names(&["01_a.md", "02_b.md"]);

        let arranged: Vec<_> = arrange_files(files.clone(), &[])
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(arranged, files);
    }

    #[test]
    fn test_description_from_markdown() {
        assert_eq!(
            description_from_markdown("---\ntitle: x\n---\n\n# Getting started\n\nBody").as_deref(),
            Some("Getting started")
        );
        assert_eq!(
            description_from_markdown("\n\nPlain first line\nsecond").as_deref(),
            Some("Plain first line")
        );
        assert_eq!(description_from_markdown("   \n"), None);
        assert_eq!(description_from_markdown("#"), None);
    }

    #[test]
    fn test_description_truncated() {
        let long = "x".repeat(130);

        let description = description_from_markdown(&long).unwrap();

        assert_eq!(description.chars().count(), 120);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_description_at_limit_kept() {
        let exact = "y".repeat(120);

        assert_eq!(description_from_markdown(&exact), Some(exact));
    }

    #[test]
    fn test_derive_description_fallbacks() {
        let storage = MockStorage::new()
            .with_file("c/01_a.md", "\n")
            .with_unreadable_file("d/01_a.md");

        let fallback = "Course guide.";
        assert_eq!(
            derive_description(&storage, Path::new("c"), &names(&["01_a.md"]), fallback),
            fallback
        );
        assert_eq!(
            derive_description(&storage, Path::new("d"), &names(&["01_a.md"]), fallback),
            fallback
        );
        assert_eq!(derive_description(&storage, Path::new("e"), &[], fallback), fallback);
    }
}
