//! Rendered page types.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use folio_renderer::TocEntry;
use folio_storage::StorageError;
use serde::Serialize;

use crate::model::Collection;
use crate::navigation::{
    BreadcrumbItem, NavEntry, RelatedArticle, collect_keywords, filter_by_keyword,
};

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Page {
    Article(Article),
    Listing(Listing),
}

/// A docs page, course lesson or blog post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub collection: Collection,
    pub title: String,
    pub html: String,
    /// Outline of `h2`/`h3` headings.
    pub toc: Vec<TocEntry>,
    /// Estimated minutes.
    pub reading_time: usize,
    /// Config timestamp, else file modification time.
    pub updated: Option<DateTime<Utc>>,
    pub keywords: Vec<String>,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub prev: Option<NavEntry>,
    pub next: Option<NavEntry>,
    pub related: Vec<RelatedArticle>,
    pub edit_url: Option<String>,
}

/// A collection index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub collection: Collection,
    pub title: &'static str,
    pub entries: Vec<ListingEntry>,
    /// Distinct keywords of every entry, for the keyword filter.
    pub keywords: Vec<String>,
    /// Shown instead of entries when there are none.
    pub empty_message: &'static str,
}

impl Listing {
    /// Listing titled after its collection, with keywords gathered from
    /// `entries`.
    #[must_use]
    pub fn new(
        collection: Collection,
        entries: Vec<ListingEntry>,
        empty_message: &'static str,
    ) -> Self {
        let keywords = collect_keywords(entries.iter().map(|e| e.keywords.as_slice()));
        Self {
            collection,
            title: collection.label(),
            entries,
            keywords,
            empty_message,
        }
    }

    /// Keep entries tagged `keyword`, ignoring case.
    ///
    /// `keywords` still lists every keyword so another one can be picked.
    #[must_use]
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.entries = filter_by_keyword(&self.entries, keyword, |e| e.keywords.as_slice())
            .into_iter()
            .cloned()
            .collect();
        self
    }
}

/// One card on a collection index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub title: String,
    pub href: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Error returned when a page cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No page at this URL.
    #[error("Page not found: {0}")]
    PageNotFound(String),
    /// Page exists in the tree but its source cannot be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: StorageError,
    },
}

/// "Edit this page" URL for a source file.
///
/// `base` points at the content root in the repository, e.g.
/// `https://github.com/org/repo/edit/main/static`.
///
/// # Examples
///
/// ```
/// use folio_content::{Collection, edit_url};
///
/// assert_eq!(
///     edit_url("https://github.com/org/repo/edit/main/static/", Collection::Docs, Some("01_docker"), "01_intro.md"),
///     "https://github.com/org/repo/edit/main/static/docs/01_docker/01_intro.md"
/// );
/// ```
#[must_use]
pub fn edit_url(base: &str, collection: Collection, folder: Option<&str>, filename: &str) -> String {
    let base = base.trim_end_matches('/');
    match folder {
        Some(folder) => format!("{base}/{collection}/{folder}/{filename}"),
        None => format!("{base}/{collection}/{filename}"),
    }
}
