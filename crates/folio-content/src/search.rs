//! In-memory search over every collection.
//!
//! Matching is a plain substring test, no ranking. Results keep collection
//! order: docs, then courses, then blogs.

use serde::Serialize;

use crate::model::{BlogPost, Course, DocFolder, blog_href};
use crate::navigation::{flatten_courses, flatten_docs};

/// Kind of search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Doc,
    Guide,
    Blog,
}

impl SearchKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Guide => "guide",
            Self::Blog => "blog",
        }
    }

    /// Label shown next to a result.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Doc => "Doc",
            Self::Guide => "Course",
            Self::Blog => "Blog",
        }
    }
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchItem {
    pub title: String,
    pub href: String,
    pub kind: SearchKind,
    /// Folder keywords for docs and lessons, post keywords for blogs.
    pub keywords: Vec<String>,
}

/// A truncated page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage<'a> {
    pub items: Vec<&'a SearchItem>,
    /// Number of matches before truncation.
    pub total: usize,
    /// Matches not shown.
    pub remaining: usize,
}

/// Result counts for the search palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Shown before the user types.
    pub initial: usize,
    /// Shown once there is a query.
    pub search: usize,
    /// Added by each "load more".
    pub step: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            initial: 5,
            search: 10,
            step: 10,
        }
    }
}

impl SearchLimits {
    /// Visible count for a fresh query.
    #[must_use]
    pub fn initial_visible(&self, query: &str) -> usize {
        if query.trim().is_empty() {
            self.initial
        } else {
            self.search
        }
    }

    /// Visible count after one "load more".
    #[must_use]
    pub fn load_more(&self, visible: usize) -> usize {
        visible.saturating_add(self.step)
    }
}

/// Search index over docs, courses and blogs.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
    haystacks: Vec<String>,
}

impl SearchIndex {
    /// Index every page of the three collections.
    #[must_use]
    pub fn build(docs: &[DocFolder], courses: &[Course], blogs: &[BlogPost]) -> Self {
        let mut index = Self::default();

        for (entry, folder) in flatten_docs(docs).into_iter().zip(folder_per_file(docs)) {
            index.push(entry.title, entry.href, SearchKind::Doc, &folder.keywords, None);
        }
        for (entry, course) in flatten_courses(courses).into_iter().zip(folder_per_file(courses)) {
            index.push(entry.title, entry.href, SearchKind::Guide, &course.keywords, None);
        }
        for post in blogs {
            index.push(
                post.title.clone(),
                blog_href(&post.url_slug),
                SearchKind::Blog,
                &post.keywords,
                Some(post.url_slug.as_str()),
            );
        }

        tracing::debug!(items = index.len(), "Built search index");
        index
    }

    fn push(
        &mut self,
        title: String,
        href: String,
        kind: SearchKind,
        keywords: &[String],
        slug: Option<&str>,
    ) {
        let haystack = format!("{title} {kind} {}", slug.unwrap_or_default()).to_lowercase();
        self.haystacks.push(haystack);
        self.items.push(SearchItem {
            title,
            href,
            kind,
            keywords: keywords.to_vec(),
        });
    }

    /// All items in index order.
    #[must_use]
    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items matching `query`, truncated to `visible`.
    ///
    /// The query is trimmed and lowercased; an empty query matches
    /// everything.
    #[must_use]
    pub fn query(&self, query: &str, visible: usize) -> SearchPage<'_> {
        let needle = query.trim().to_lowercase();
        let matches: Vec<&SearchItem> = self
            .items
            .iter()
            .zip(&self.haystacks)
            .filter(|(_, haystack)| haystack.contains(&needle))
            .map(|(item, _)| item)
            .collect();

        let total = matches.len();
        let items: Vec<_> = matches.into_iter().take(visible).collect();
        SearchPage {
            remaining: total - items.len(),
            items,
            total,
        }
    }
}

/// Owning folder of every file, in flattened order.
fn folder_per_file(tree: &[DocFolder]) -> impl Iterator<Item = &DocFolder> {
    tree.iter()
        .flat_map(|folder| std::iter::repeat_n(folder, folder.files.len()))
}
