//! Content model built from storage.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Collection a piece of content belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Docs,
    Courses,
    Blogs,
}

impl Collection {
    /// Directory name under the content root.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Courses => "courses",
            Self::Blogs => "blogs",
        }
    }

    /// Key a collection-level config may nest its entry list under.
    #[must_use]
    pub(crate) fn config_key(self) -> &'static str {
        self.dir_name()
    }

    /// Label used as the first breadcrumb.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Docs => "Docs",
            Self::Courses => "Courses",
            Self::Blogs => "Blogs",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One markdown file inside a docs folder or course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentFile {
    /// On-disk name, e.g. `01_intro.md`.
    pub filename: String,
    /// Filename without `.md`; used for storage access.
    pub file_slug: String,
    /// Public URL segment.
    pub url_slug: String,
    pub title: String,
    /// Explicit timestamp from config. Callers fall back to the file mtime.
    pub updated: Option<DateTime<Utc>>,
}

/// A docs folder or course: one directory of markdown files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentFolder {
    /// On-disk directory name, e.g. `01_docker`.
    pub folder_name: String,
    /// Public URL segment.
    pub url_slug: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Never empty.
    pub files: Vec<ContentFile>,
}

impl ContentFolder {
    /// First file whose public slug matches, ignoring ASCII case.
    #[must_use]
    pub fn file_by_url_slug(&self, url_slug: &str) -> Option<&ContentFile> {
        self.files
            .iter()
            .find(|f| f.url_slug.eq_ignore_ascii_case(url_slug))
    }

    /// File by its on-disk slug.
    #[must_use]
    pub fn file_by_file_slug(&self, file_slug: &str) -> Option<&ContentFile> {
        self.files.iter().find(|f| f.file_slug == file_slug)
    }
}

/// Docs folder.
pub type DocFolder = ContentFolder;

/// Course folder.
pub type Course = ContentFolder;

/// A flat blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub filename: String,
    pub file_slug: String,
    pub url_slug: String,
    pub title: String,
    pub description: Option<String>,
    /// Short teaser for listing cards.
    pub excerpt: Option<String>,
    pub keywords: Vec<String>,
    pub updated: Option<DateTime<Utc>>,
}

/// Public URL of a doc page.
#[must_use]
pub fn doc_href(folder_slug: &str, file_slug: &str) -> String {
    format!("/{folder_slug}/{file_slug}")
}

/// Public URL of a course lesson.
#[must_use]
pub fn course_href(course_slug: &str, file_slug: &str) -> String {
    format!("/courses/{course_slug}/{file_slug}")
}

/// Public URL of a blog post.
#[must_use]
pub fn blog_href(slug: &str) -> String {
    format!("/blogs/{slug}")
}
