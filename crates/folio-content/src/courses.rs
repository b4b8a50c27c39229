//! Courses collection: `courses/<course>/<lesson>.md`.
//!
//! Course folder configs may rename lessons: an entry's `file` names the
//! source and its `slug` (or `heading`) sets the public URL, so lesson files
//! can be renumbered without breaking links.

use std::path::Path;

use folio_storage::Storage;

use crate::config::{
    CollectionConfig, ConfigObserver, load_collection_config, load_course_folder_config,
};
use crate::model::{Collection, Course};
use crate::tree::{
    arrange_files, content_file, content_folder, derive_description, list_dirs, list_markdown,
};

/// Description used when a course has no usable first line.
pub const COURSE_FALLBACK_DESCRIPTION: &str = "Course guide.";

/// Build the courses tree.
///
/// Same folder rules as the docs tree; lesson order and public slugs come
/// from each course's `config.yaml` when present.
pub fn build_courses_tree(storage: &dyn Storage, observer: &dyn ConfigObserver) -> Vec<Course> {
    let root = Path::new(Collection::Courses.dir_name());
    let config = load_collection_config(storage, root, Collection::Courses.config_key(), observer);

    let tree: Vec<Course> = list_dirs(storage, root)
        .into_iter()
        .filter_map(|name| build_course(storage, root, &name, &config, observer))
        .collect();

    tracing::debug!(courses = tree.len(), "Built courses tree");
    tree
}

fn build_course(
    storage: &dyn Storage,
    root: &Path,
    folder_name: &str,
    config: &CollectionConfig,
    observer: &dyn ConfigObserver,
) -> Option<Course> {
    let dir = root.join(folder_name);
    let filenames = list_markdown(storage, &dir);
    if filenames.is_empty() {
        tracing::debug!(course = folder_name, "Skipping course without markdown");
        return None;
    }

    let first = filenames[..1].to_vec();
    let entries = load_course_folder_config(storage, &dir, observer);
    let keys: Vec<&str> = entries.iter().map(|e| e.file.as_str()).collect();

    let files = arrange_files(filenames, &keys)
        .into_iter()
        .map(|(filename, pinned)| match pinned.map(|i| &entries[i]) {
            Some(entry) => content_file(
                filename,
                Some(entry.slug.clone()),
                entry.heading.clone(),
                entry.updated,
            ),
            None => content_file(filename, None, None, None),
        })
        .collect();

    Some(content_folder(folder_name, files, config, || {
        derive_description(storage, &dir, &first, COURSE_FALLBACK_DESCRIPTION)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TracingObserver;
    use folio_storage::MockStorage;
    use pretty_assertions::assert_eq;

    fn build(storage: &MockStorage) -> Vec<Course> {
        build_courses_tree(storage, &TracingObserver)
    }

    #[test]
    fn test_configured_lesson_slug_and_heading() {
        let storage = MockStorage::new()
            .with_file("courses/02_css/01_box.md", "# Boxes\n")
            .with_file(
                "courses/02_css/config.yaml",
                "files:\n  - file: \"01_box\"\n    slug: \"box-model\"\n    heading: \"The Box Model\"\n",
            );

        let tree = build(&storage);

        assert_eq!(tree[0].url_slug, "css");
        let lesson = &tree[0].files[0];
        assert_eq!(lesson.file_slug, "01_box");
        assert_eq!(lesson.url_slug, "box-model");
        assert_eq!(lesson.title, "The Box Model");
    }

    #[test]
    fn test_defaults_without_config() {
        let storage = MockStorage::new()
            .with_file("courses/01_html/02_forms.md", "")
            .with_file("courses/01_html/01_basics.md", "Learn the basics of HTML.\n");

        let course = &build(&storage)[0];

        assert_eq!(course.title, "Html");
        assert_eq!(course.description, "Learn the basics of HTML.");
        let slugs: Vec<_> = course.files.iter().map(|f| f.url_slug.as_str()).collect();
        assert_eq!(slugs, vec!["basics", "forms"]);
    }

    #[test]
    fn test_empty_first_file_uses_fallback() {
        let storage = MockStorage::new().with_file("courses/01_html/01_basics.md", "");

        assert_eq!(build(&storage)[0].description, COURSE_FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_partial_config_pins_listed_lessons_first() {
        let storage = MockStorage::new()
            .with_file("courses/02_css/01_box.md", "")
            .with_file("courses/02_css/02_flex.md", "")
            .with_file("courses/02_css/03_grid.md", "")
            .with_file(
                "courses/02_css/config.yaml",
                "- file: 03_grid\n  heading: Grid Layout\n- file: 09_missing\n",
            );

        let files = &build(&storage)[0].files;
        let order: Vec<_> = files.iter().map(|f| f.url_slug.as_str()).collect();

        assert_eq!(order, vec!["grid-layout", "box", "flex"]);
        assert_eq!(files[0].title, "Grid Layout");
        assert_eq!(files[1].title, "Box");
    }

    #[test]
    fn test_slug_only_entry_names_the_file() {
        let storage = MockStorage::new()
            .with_file("courses/02_css/01_box.md", "")
            .with_file("courses/02_css/02_Flex_Box.md", "")
            .with_file("courses/02_css/config.yaml", "- slug: 02_Flex_Box\n");

        let files = &build(&storage)[0].files;

        assert_eq!(files[0].file_slug, "02_Flex_Box");
        assert_eq!(files[0].url_slug, "flex-box");
        assert_eq!(files[0].title, "Flex box");
    }

    #[test]
    fn test_course_level_config() {
        let storage = MockStorage::new()
            .with_file("courses/02_css/01_box.md", "")
            .with_file(
                "courses/config.yaml",
                "courses:\n  - slug: css\n    heading: CSS Fundamentals\n    description: Style the web\n    keywords: [css, layout]\n",
            );

        let course = &build(&storage)[0];

        assert_eq!(course.title, "CSS Fundamentals");
        assert_eq!(course.description, "Style the web");
        assert_eq!(course.keywords, vec!["css".to_owned(), "layout".to_owned()]);
    }

    #[test]
    fn test_corrupt_course_config_keeps_lessons() {
        let storage = MockStorage::new()
            .with_file("courses/02_css/01_box.md", "")
            .with_file("courses/02_css/02_flex.md", "")
            .with_file("courses/02_css/config.yaml", "\t- : [");

        let files = &build(&storage)[0].files;

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].url_slug, "box");
    }
}
