//! Content validation for `folio check`.
//!
//! Duplicate public slugs are not errors at request time (the first match
//! wins), but they leave pages unreachable, so authors get told here.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::model::{BlogPost, Collection, ContentFolder, Course, DocFolder};

/// Docs folder slugs that would shadow collection routes.
const RESERVED_DOC_SLUGS: [&str; 3] = ["docs", "courses", "blogs"];

/// Report public slug collisions across the three collections.
#[must_use]
pub fn validate(docs: &[DocFolder], courses: &[Course], blogs: &[BlogPost]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    check_folders(Collection::Docs, docs, &mut diagnostics);
    check_folders(Collection::Courses, courses, &mut diagnostics);

    for folder in docs {
        if RESERVED_DOC_SLUGS.contains(&folder.url_slug.to_ascii_lowercase().as_str()) {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticKind::ReservedFolderSlug,
                    format!(
                        "slug `{}` collides with the /{} routes",
                        folder.url_slug, folder.url_slug
                    ),
                )
                .with_path(folder_path(Collection::Docs, folder)),
            );
        }
    }

    let root = PathBuf::from(Collection::Blogs.dir_name());
    let posts = blogs
        .iter()
        .map(|p| (p.url_slug.as_str(), p.filename.as_str()));
    for dup in duplicates(posts) {
        diagnostics.push(
            Diagnostic::new(DiagnosticKind::DuplicateBlogSlug, dup.message())
                .with_path(root.join(dup.name)),
        );
    }

    diagnostics
}

fn check_folders(collection: Collection, tree: &[ContentFolder], out: &mut Vec<Diagnostic>) {
    let folders = tree
        .iter()
        .map(|f| (f.url_slug.as_str(), f.folder_name.as_str()));
    for dup in duplicates(folders) {
        out.push(
            Diagnostic::new(DiagnosticKind::DuplicateFolderSlug, dup.message())
                .with_path(PathBuf::from(collection.dir_name()).join(dup.name)),
        );
    }

    for folder in tree {
        let files = folder
            .files
            .iter()
            .map(|f| (f.url_slug.as_str(), f.filename.as_str()));
        for dup in duplicates(files) {
            out.push(
                Diagnostic::new(DiagnosticKind::DuplicateFileSlug, dup.message())
                    .with_path(folder_path(collection, folder).join(dup.name)),
            );
        }
    }
}

fn folder_path(collection: Collection, folder: &ContentFolder) -> PathBuf {
    PathBuf::from(collection.dir_name()).join(&folder.folder_name)
}

/// A slug claimed by more than one entry.
struct Duplicate<'a> {
    slug: &'a str,
    /// Entry that repeats the slug.
    name: &'a str,
    /// Entry that claimed it first.
    first: &'a str,
}

impl Duplicate<'_> {
    fn message(&self) -> String {
        format!("slug `{}` is already used by {}", to_key(self.slug), self.first)
    }
}

/// Later `(slug, name)` pairs whose slug was seen before. Slugs compare
/// ignoring ASCII case.
fn duplicates<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<Duplicate<'a>> {
    let mut seen: HashMap<String, &'a str> = HashMap::new();
    let mut dups = Vec::new();
    for (slug, name) in entries {
        let key = to_key(slug);
        match seen.get(&key) {
            Some(&first) => dups.push(Duplicate { slug, name, first }),
            None => {
                seen.insert(key, name);
            }
        }
    }
    dups
}

fn to_key(slug: &str) -> String {
    slug.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blogs::build_blogs_list;
    use crate::config::TracingObserver;
    use crate::courses::build_courses_tree;
    use crate::docs::build_docs_tree;
    use folio_storage::MockStorage;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn run(storage: &MockStorage) -> Vec<Diagnostic> {
        validate(
            &build_docs_tree(storage, &TracingObserver),
            &build_courses_tree(storage, &TracingObserver),
            &build_blogs_list(storage, &TracingObserver),
        )
    }

    #[test]
    fn test_clean_tree() {
        let storage = MockStorage::new()
            .with_file("docs/01_docker/01_intro.md", "")
            .with_file("courses/01_html/01_intro.md", "")
            .with_file("blogs/intro.md", "");

        assert!(run(&storage).is_empty());
    }

    #[test]
    fn test_duplicate_folder_slug() {
        let storage = MockStorage::new()
            .with_file("docs/01_guide/01_a.md", "")
            .with_file("docs/02_guide/01_b.md", "");

        let diagnostics = run(&storage);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::DuplicateFolderSlug);
        assert_eq!(diagnostics[0].path.as_deref(), Some(Path::new("docs/02_guide")));
        assert_eq!(
            diagnostics[0].message,
            "slug `guide` is already used by 01_guide"
        );
    }

    #[test]
    fn test_duplicate_file_slug() {
        let storage = MockStorage::new()
            .with_file("courses/02_css/01_box.md", "")
            .with_file("courses/02_css/02_grid.md", "")
            .with_file("courses/02_css/config.yaml", "- file: 02_grid\n  slug: Box\n");

        let diagnostics = run(&storage);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::DuplicateFileSlug);
        assert_eq!(
            diagnostics[0].path.as_deref(),
            Some(Path::new("courses/02_css/01_box.md"))
        );
    }

    #[test]
    fn test_duplicate_blog_slug() {
        let storage = MockStorage::new()
            .with_file("blogs/01_hello.md", "")
            .with_file("blogs/02_hello.md", "");

        let diagnostics = run(&storage);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::DuplicateBlogSlug);
        assert_eq!(diagnostics[0].path.as_deref(), Some(Path::new("blogs/02_hello.md")));
    }

    #[test]
    fn test_reserved_docs_folder() {
        let storage = MockStorage::new().with_file("docs/03_blogs/01_a.md", "");

        let diagnostics = run(&storage);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::ReservedFolderSlug);
    }
}
