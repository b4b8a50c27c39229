//! Public slug to on-disk identifier resolution.
//!
//! Slugs compare ignoring ASCII case. The first folder whose slug matches
//! is the only one searched for the file, so a later folder with the same
//! public slug is unreachable; `validate` reports that case.

use crate::model::{BlogPost, ContentFile, ContentFolder, Course, DocFolder};

/// A file located by its public slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEntry<'a> {
    pub folder: &'a ContentFolder,
    pub file: &'a ContentFile,
}

impl<'a> ResolvedEntry<'a> {
    /// On-disk folder name.
    #[must_use]
    pub fn folder_name(&self) -> &'a str {
        &self.folder.folder_name
    }

    /// On-disk file slug.
    #[must_use]
    pub fn file_slug(&self) -> &'a str {
        &self.file.file_slug
    }
}

/// Resolve `/<folder_slug>/<file_slug>` in the docs tree.
#[must_use]
pub fn resolve_doc<'a>(
    tree: &'a [DocFolder],
    folder_slug: &str,
    file_slug: &str,
) -> Option<ResolvedEntry<'a>> {
    resolve_in(tree, folder_slug, file_slug)
}

/// Resolve `/courses/<course_slug>/<file_slug>` in the courses tree.
#[must_use]
pub fn resolve_course<'a>(
    tree: &'a [Course],
    course_slug: &str,
    file_slug: &str,
) -> Option<ResolvedEntry<'a>> {
    resolve_in(tree, course_slug, file_slug)
}

/// Resolve `/blogs/<slug>`.
#[must_use]
pub fn resolve_blog<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|p| p.url_slug.eq_ignore_ascii_case(slug))
}

/// Folder with the given public slug, first match.
#[must_use]
pub fn find_folder<'a>(tree: &'a [ContentFolder], folder_slug: &str) -> Option<&'a ContentFolder> {
    tree.iter()
        .find(|f| f.url_slug.eq_ignore_ascii_case(folder_slug))
}

fn resolve_in<'a>(
    tree: &'a [ContentFolder],
    folder_slug: &str,
    file_slug: &str,
) -> Option<ResolvedEntry<'a>> {
    let folder = find_folder(tree, folder_slug)?;
    let file = folder.file_by_url_slug(file_slug)?;
    Some(ResolvedEntry { folder, file })
}
