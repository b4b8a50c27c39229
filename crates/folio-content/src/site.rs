//! Site facade over a content [`Storage`].
//!
//! [`Site`] owns no content. Every call rebuilds the trees it needs from
//! storage, so edits on disk show up on the next call and concurrent
//! callers never share state.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use folio_renderer::{Highlighter, MarkdownRenderer, reading_time, strip_first_matching_heading};
use folio_storage::Storage;

use crate::blogs::{EMPTY_BLOGS_MESSAGE, build_blogs_list};
use crate::config::{ConfigObserver, TracingObserver};
use crate::courses::build_courses_tree;
use crate::diagnostics::{Diagnostic, DiagnosticsCollector};
use crate::docs::build_docs_tree;
use crate::model::{
    BlogPost, Collection, ContentFolder, Course, DocFolder, blog_href, course_href, doc_href,
};
use crate::naming::strip_md_extension;
use crate::navigation::{
    BreadcrumbItem, NavEntry, RelatedArticle, blog_breadcrumbs, flatten_courses, flatten_docs,
    folder_breadcrumbs, prev_next, related_for_blog, related_for_doc,
};
use crate::page::{Article, Listing, ListingEntry, Page, RenderError, edit_url};
use crate::resolve::{ResolvedEntry, resolve_blog, resolve_course, resolve_doc};
use crate::route::Route;
use crate::search::SearchIndex;
use crate::tree::list_markdown;
use crate::validate::validate;

/// Empty-state message of the docs index.
pub const EMPTY_DOCS_MESSAGE: &str = "No docs yet.";

/// Empty-state message of the courses index.
pub const EMPTY_COURSES_MESSAGE: &str = "No courses yet.";

/// Rendering options for a [`Site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Highlight fenced code blocks.
    pub highlight: bool,
    /// Drop a leading H1 that repeats the page title.
    pub strip_title_heading: bool,
    /// Base URL for "edit this page" links.
    pub edit_base_url: Option<String>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            highlight: true,
            strip_title_heading: true,
            edit_base_url: None,
        }
    }
}

/// Docs, courses and blogs served from one storage.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use std::sync::Arc;
/// use folio_content::Site;
/// use folio_storage::FsStorage;
///
/// let site = Site::new(Arc::new(FsStorage::new(PathBuf::from("static"))));
/// let hrefs: Vec<String> = site
///     .docs()
///     .iter()
///     .flat_map(|folder| folder.files.iter().map(|f| format!("/{}/{}", folder.url_slug, f.url_slug)))
///     .collect();
/// # let _ = hrefs;
/// ```
pub struct Site {
    storage: Arc<dyn Storage>,
    observer: Arc<dyn ConfigObserver>,
    options: SiteOptions,
    highlighter: OnceLock<Highlighter>,
}

impl Site {
    /// Create a site that logs config errors through `tracing`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            observer: Arc::new(TracingObserver),
            options: SiteOptions::default(),
            highlighter: OnceLock::new(),
        }
    }

    /// Report config errors to `observer` instead.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ConfigObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: SiteOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Docs tree, rebuilt from storage.
    #[must_use]
    pub fn docs(&self) -> Vec<DocFolder> {
        build_docs_tree(&*self.storage, &*self.observer)
    }

    /// Courses tree, rebuilt from storage.
    #[must_use]
    pub fn courses(&self) -> Vec<Course> {
        build_courses_tree(&*self.storage, &*self.observer)
    }

    /// Blog posts, rebuilt from storage.
    #[must_use]
    pub fn blogs(&self) -> Vec<BlogPost> {
        build_blogs_list(&*self.storage, &*self.observer)
    }

    /// Search index over all three collections.
    #[must_use]
    pub fn search_index(&self) -> SearchIndex {
        SearchIndex::build(&self.docs(), &self.courses(), &self.blogs())
    }

    /// Config errors and slug collisions across all collections.
    ///
    /// Config errors are collected here regardless of the site's observer.
    #[must_use]
    pub fn check(&self) -> Vec<Diagnostic> {
        let collector = DiagnosticsCollector::new();
        let docs = build_docs_tree(&*self.storage, &collector);
        let courses = build_courses_tree(&*self.storage, &collector);
        let blogs = build_blogs_list(&*self.storage, &collector);

        let mut diagnostics = collector.take();
        diagnostics.extend(validate(&docs, &courses, &blogs));
        diagnostics
    }

    /// Raw markdown of a docs file by on-disk identifiers.
    #[must_use]
    pub fn doc_content(&self, folder_name: &str, file_slug: &str) -> Option<String> {
        self.read(&self.source_path(Collection::Docs, Some(folder_name), file_slug))
    }

    /// Raw markdown of a course lesson by on-disk identifiers.
    #[must_use]
    pub fn course_content(&self, course_folder: &str, file_slug: &str) -> Option<String> {
        self.read(&self.source_path(Collection::Courses, Some(course_folder), file_slug))
    }

    /// Raw markdown of a blog post by on-disk file slug.
    #[must_use]
    pub fn blog_content(&self, file_slug: &str) -> Option<String> {
        self.read(&self.source_path(Collection::Blogs, None, file_slug))
    }

    /// Modification time of a docs file.
    #[must_use]
    pub fn doc_mtime(&self, folder_name: &str, file_slug: &str) -> Option<DateTime<Utc>> {
        self.mtime(&self.source_path(Collection::Docs, Some(folder_name), file_slug))
    }

    /// Modification time of a course lesson.
    #[must_use]
    pub fn course_mtime(&self, course_folder: &str, file_slug: &str) -> Option<DateTime<Utc>> {
        self.mtime(&self.source_path(Collection::Courses, Some(course_folder), file_slug))
    }

    /// Modification time of a blog post.
    #[must_use]
    pub fn blog_mtime(&self, file_slug: &str) -> Option<DateTime<Utc>> {
        self.mtime(&self.source_path(Collection::Blogs, None, file_slug))
    }

    /// Render the page at a public URL path.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PageNotFound`] for unknown URLs and
    /// [`RenderError::Source`] when the page's markdown cannot be read.
    pub fn render(&self, path: &str) -> Result<Page, RenderError> {
        let route = Route::parse(path).ok_or_else(|| RenderError::PageNotFound(path.to_owned()))?;
        self.render_route(&route)
    }

    /// Render a parsed route.
    ///
    /// # Errors
    ///
    /// See [`Site::render`].
    pub fn render_route(&self, route: &Route) -> Result<Page, RenderError> {
        let not_found = || RenderError::PageNotFound(route.to_string());

        match route {
            Route::DocsIndex => Ok(Page::Listing(folder_listing(
                Collection::Docs,
                &self.docs(),
                doc_href,
                EMPTY_DOCS_MESSAGE,
            ))),
            Route::CoursesIndex => Ok(Page::Listing(folder_listing(
                Collection::Courses,
                &self.courses(),
                course_href,
                EMPTY_COURSES_MESSAGE,
            ))),
            Route::BlogsIndex => Ok(Page::Listing(blog_listing(&self.blogs()))),
            Route::Doc { folder, file } => {
                let docs = self.docs();
                let entry = resolve_doc(&docs, folder, file).ok_or_else(not_found)?;
                let flat = flatten_docs(&docs);
                let related = related_for_doc(&docs, &self.blogs(), entry.folder, entry.file);
                self.render_folder_article(Collection::Docs, doc_href, entry, &flat, related)
                    .map(Page::Article)
            }
            Route::Course { course, file } => {
                let courses = self.courses();
                let entry = resolve_course(&courses, course, file).ok_or_else(not_found)?;
                let flat = flatten_courses(&courses);
                self.render_folder_article(
                    Collection::Courses,
                    course_href,
                    entry,
                    &flat,
                    Vec::new(),
                )
                    .map(Page::Article)
            }
            Route::Blog { slug } => {
                let blogs = self.blogs();
                let post = resolve_blog(&blogs, slug).ok_or_else(not_found)?;
                let related = related_for_blog(&self.docs(), &blogs, post);
                self.render_blog_article(post, related).map(Page::Article)
            }
        }
    }

    fn render_folder_article(
        &self,
        collection: Collection,
        href: fn(&str, &str) -> String,
        entry: ResolvedEntry<'_>,
        flat: &[NavEntry],
        related: Vec<RelatedArticle>,
    ) -> Result<Article, RenderError> {
        let (folder, file) = (entry.folder, entry.file);
        let path = content_dir(collection, Some(&folder.folder_name)).join(&file.filename);
        let markdown = self.read_source(&path)?;
        let nav = prev_next(flat, &folder.url_slug, &file.url_slug);

        Ok(self.article(ArticleParts {
            collection,
            title: &file.title,
            markdown: &markdown,
            updated: file.updated.or_else(|| self.mtime(&path)),
            keywords: folder.keywords.clone(),
            breadcrumbs: folder_breadcrumbs(collection, folder, file, href),
            prev: nav.prev.cloned(),
            next: nav.next.cloned(),
            related,
            edit_url: self.edit_url(collection, Some(folder), &file.filename),
        }))
    }

    fn render_blog_article(
        &self,
        post: &BlogPost,
        related: Vec<RelatedArticle>,
    ) -> Result<Article, RenderError> {
        let path = content_dir(Collection::Blogs, None).join(&post.filename);
        let markdown = self.read_source(&path)?;

        Ok(self.article(ArticleParts {
            collection: Collection::Blogs,
            title: &post.title,
            markdown: &markdown,
            updated: post.updated.or_else(|| self.mtime(&path)),
            keywords: post.keywords.clone(),
            breadcrumbs: blog_breadcrumbs(post),
            prev: None,
            next: None,
            related,
            edit_url: self.edit_url(Collection::Blogs, None, &post.filename),
        }))
    }

    fn article(&self, parts: ArticleParts<'_>) -> Article {
        let body = if self.options.strip_title_heading {
            strip_first_matching_heading(parts.markdown, parts.title)
        } else {
            parts.markdown.to_owned()
        };

        let mut renderer = MarkdownRenderer::new();
        if self.options.highlight {
            renderer = renderer.with_highlighter(self.highlighter.get_or_init(Highlighter::new));
        }
        let result = renderer.render_markdown(&body);

        Article {
            collection: parts.collection,
            title: parts.title.to_owned(),
            html: result.html,
            toc: result.toc,
            reading_time: reading_time(parts.markdown),
            updated: parts.updated,
            keywords: parts.keywords,
            breadcrumbs: parts.breadcrumbs,
            prev: parts.prev,
            next: parts.next,
            related: parts.related,
            edit_url: parts.edit_url,
        }
    }

    fn edit_url(
        &self,
        collection: Collection,
        folder: Option<&ContentFolder>,
        filename: &str,
    ) -> Option<String> {
        let base = self.options.edit_base_url.as_deref()?;
        Some(edit_url(
            base,
            collection,
            folder.map(|f| f.folder_name.as_str()),
            filename,
        ))
    }

    /// Storage path of the markdown file whose slug is `file_slug`.
    ///
    /// The extension is matched ignoring case, like tree discovery does.
    fn source_path(
        &self,
        collection: Collection,
        folder: Option<&str>,
        file_slug: &str,
    ) -> PathBuf {
        let dir = content_dir(collection, folder);
        let filename = list_markdown(&*self.storage, &dir)
            .into_iter()
            .find(|name| strip_md_extension(name) == file_slug)
            .unwrap_or_else(|| format!("{file_slug}.md"));
        dir.join(filename)
    }

    fn read(&self, path: &Path) -> Option<String> {
        match self.storage.read(path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Content not available");
                None
            }
        }
    }

    fn read_source(&self, path: &Path) -> Result<String, RenderError> {
        self.storage.read(path).map_err(|source| RenderError::Source {
            path: path.to_path_buf(),
            source,
        })
    }

    fn mtime(&self, path: &Path) -> Option<DateTime<Utc>> {
        match self.storage.mtime(path) {
            Ok(secs) => timestamp(secs),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Modification time not available");
                None
            }
        }
    }
}

/// Inputs for building an [`Article`].
struct ArticleParts<'a> {
    collection: Collection,
    title: &'a str,
    markdown: &'a str,
    updated: Option<DateTime<Utc>>,
    keywords: Vec<String>,
    breadcrumbs: Vec<BreadcrumbItem>,
    prev: Option<NavEntry>,
    next: Option<NavEntry>,
    related: Vec<RelatedArticle>,
    edit_url: Option<String>,
}

/// Directory of a collection or of one of its folders.
fn content_dir(collection: Collection, folder: Option<&str>) -> PathBuf {
    let mut path = PathBuf::from(collection.dir_name());
    if let Some(folder) = folder {
        path.push(folder);
    }
    path
}

#[allow(clippy::cast_possible_truncation)]
fn timestamp(secs: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_micros((secs * 1_000_000.0).round() as i64)
}

fn folder_listing(
    collection: Collection,
    tree: &[ContentFolder],
    href: fn(&str, &str) -> String,
    empty_message: &'static str,
) -> Listing {
    let entries = tree
        .iter()
        .filter_map(|folder| {
            let first = folder.files.first()?;
            Some(ListingEntry {
                title: folder.title.clone(),
                href: href(&folder.url_slug, &first.url_slug),
                description: folder.description.clone(),
                keywords: folder.keywords.clone(),
            })
        })
        .collect();

    Listing::new(collection, entries, empty_message)
}

fn blog_listing(posts: &[BlogPost]) -> Listing {
    let entries = posts
        .iter()
        .map(|post| ListingEntry {
            title: post.title.clone(),
            href: blog_href(&post.url_slug),
            description: post
                .excerpt
                .clone()
                .or_else(|| post.description.clone())
                .unwrap_or_else(|| format!("Read: {}", post.title)),
            keywords: post.keywords.clone(),
        })
        .collect();

    Listing::new(Collection::Blogs, entries, EMPTY_BLOGS_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_storage::{FsStorage, MockStorage};
    use pretty_assertions::assert_eq;
    use std::fs;

    fn site(storage: MockStorage) -> Site {
        Site::new(Arc::new(storage)).with_options(SiteOptions {
            highlight: false,
            ..SiteOptions::default()
        })
    }

    fn article(page: Page) -> Article {
        match page {
            Page::Article(article) => article,
            Page::Listing(listing) => panic!("expected article, got listing {listing:?}"),
        }
    }

    fn listing(page: Page) -> Listing {
        match page {
            Page::Listing(listing) => listing,
            Page::Article(article) => panic!("expected listing, got article {}", article.title),
        }
    }

    fn write(root: &Path, path: &str, content: &str) {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_docs_scenario_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/01_docker/01_intro.md", "# Intro\n\nHello.\n");
        let site = Site::new(Arc::new(FsStorage::new(dir.path().to_path_buf())));

        let docs = site.docs();
        assert_eq!(docs[0].url_slug, "docker");
        assert_eq!(docs[0].files[0].url_slug, "intro");
        assert_eq!(docs[0].files[0].title, "Intro");
        assert_eq!(flatten_docs(&docs)[0].href, "/docker/intro");

        let page = article(site.render("/docker/intro").unwrap());
        assert_eq!(page.title, "Intro");
        assert_eq!(page.html, "<p>Hello.</p>");
        assert!(page.updated.is_some());
    }

    #[test]
    fn test_course_scenario_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "courses/02_css/01_box.md", "Boxes everywhere.\n");
        write(
            dir.path(),
            "courses/02_css/config.yaml",
            "files: [{file: \"01_box\", slug: \"box-model\", heading: \"The Box Model\"}]\n",
        );
        let site = Site::new(Arc::new(FsStorage::new(dir.path().to_path_buf())));

        let courses = site.courses();
        assert_eq!(courses[0].files[0].url_slug, "box-model");
        assert_eq!(courses[0].files[0].title, "The Box Model");
        assert_eq!(flatten_courses(&courses)[0].href, "/courses/css/box-model");

        let page = article(site.render("/courses/css/box-model").unwrap());
        assert_eq!(page.title, "The Box Model");
        assert_eq!(page.breadcrumbs[0].label, "Courses");
    }

    #[test]
    fn test_empty_blogs_index_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blogs")).unwrap();
        let site = Site::new(Arc::new(FsStorage::new(dir.path().to_path_buf())));

        assert!(site.blogs().is_empty());
        let index = listing(site.render("/blogs").unwrap());
        assert!(index.entries.is_empty());
        assert_eq!(index.empty_message, "No blog posts yet.");
    }

    #[test]
    fn test_render_doc_article() {
        let site = site(
            MockStorage::new()
                .with_file("docs/01_docker/01_intro.md", "# Intro\n\n## Install\n\nRun it.\n")
                .with_file("docs/01_docker/02_images.md", "Images.\n")
                .with_mtime("docs/01_docker/01_intro.md", 1_700_000_000.0),
        );

        let page = article(site.render("/docker/intro").unwrap());

        assert_eq!(page.collection, Collection::Docs);
        assert_eq!(page.html, "<h2 id=\"install\">Install</h2><p>Run it.</p>");
        assert_eq!(page.toc.len(), 1);
        assert_eq!(page.reading_time, 1);
        assert_eq!(page.updated, DateTime::from_timestamp(1_700_000_000, 0));
        assert_eq!(page.prev, None);
        assert_eq!(page.next.unwrap().href, "/docker/images");
        assert_eq!(page.related[0].href, "/docker/images");
        assert_eq!(page.edit_url, None);
    }

    #[test]
    fn test_keep_title_heading_when_disabled() {
        let site = Site::new(Arc::new(
            MockStorage::new().with_file("blogs/hello.md", "# Hello\n"),
        ))
        .with_options(SiteOptions {
            highlight: false,
            strip_title_heading: false,
            edit_base_url: Some("https://example.com/edit/main/static".to_owned()),
        });

        let page = article(site.render("/blogs/hello").unwrap());

        assert_eq!(page.html, "<h1 id=\"hello\">Hello</h1>");
        assert_eq!(
            page.edit_url.as_deref(),
            Some("https://example.com/edit/main/static/blogs/hello.md")
        );
        assert_eq!(page.breadcrumbs.len(), 2);
    }

    #[test]
    fn test_config_updated_beats_mtime() {
        let site = site(
            MockStorage::new()
                .with_file("blogs/hello.md", "")
                .with_mtime("blogs/hello.md", 1.0)
                .with_file("blogs/config.yaml", "- slug: hello\n  updated: 2025-02-11\n"),
        );

        let page = article(site.render("/blogs/hello").unwrap());

        assert_eq!(page.updated, crate::config::parse_config_date("2025-02-11"));
    }

    #[test]
    fn test_render_not_found() {
        let site = site(MockStorage::new().with_file("docs/01_docker/01_intro.md", ""));

        for path in ["/docker/nope", "/nope/intro", "/courses/x/y", "/blogs/x", "/a/b/c"] {
            assert!(
                matches!(site.render(path), Err(RenderError::PageNotFound(_))),
                "{path}"
            );
        }
    }

    #[test]
    fn test_render_unreadable_source() {
        let site = site(MockStorage::new().with_unreadable_file("docs/01_docker/01_intro.md"));

        let err = site.render("/docker/intro").unwrap_err();

        assert!(matches!(err, RenderError::Source { .. }));
    }

    #[test]
    fn test_listings() {
        let site = site(
            MockStorage::new()
                .with_file("docs/01_docker/01_intro.md", "Containers 101\n")
                .with_file("courses/01_html/01_basics.md", "")
                .with_file("blogs/hello.md", "")
                .with_file("blogs/config.yaml", "- slug: hello\n  excerpt: Say hi\n")
                .with_file("blogs/news.md", ""),
        );

        let docs = listing(site.render("/docs").unwrap());
        assert_eq!(docs.entries[0].href, "/docker/intro");
        assert_eq!(docs.entries[0].description, "Containers 101");

        let courses = listing(site.render("/courses").unwrap());
        assert_eq!(courses.entries[0].href, "/courses/html/basics");
        assert_eq!(courses.entries[0].description, "Course guide.");

        let blogs = listing(site.render("/blogs").unwrap());
        assert_eq!(blogs.entries[0].description, "Say hi");
        assert_eq!(blogs.entries[1].description, "Read: News");
    }

    #[test]
    fn test_content_accessors() {
        let site = site(
            MockStorage::new()
                .with_file("docs/01_docker/01_intro.md", "intro")
                .with_file("courses/02_css/01_box.md", "box")
                .with_file("blogs/hello.md", "hi")
                .with_mtime("blogs/hello.md", 10.5),
        );

        assert_eq!(site.doc_content("01_docker", "01_intro").as_deref(), Some("intro"));
        assert_eq!(site.course_content("02_css", "01_box").as_deref(), Some("box"));
        assert_eq!(site.blog_content("hello").as_deref(), Some("hi"));
        assert_eq!(site.doc_content("docker", "intro"), None);
        assert_eq!(
            site.blog_mtime("hello"),
            DateTime::from_timestamp(10, 500_000_000)
        );
        assert_eq!(site.doc_mtime("01_docker", "missing"), None);
        assert_eq!(site.course_mtime("02_css", "01_box"), None);
    }

    #[test]
    fn test_accessor_rejects_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "secret.md", "nope");
        write(dir.path(), "static/docs/01_a/01_b.md", "ok");
        let site = Site::new(Arc::new(FsStorage::new(dir.path().join("static"))));

        assert_eq!(site.doc_content("..", "../../secret"), None);
        assert_eq!(site.doc_content("01_a", "01_b").as_deref(), Some("ok"));
    }

    #[test]
    fn test_check_collects_config_errors_and_duplicates() {
        let site = site(
            MockStorage::new()
                .with_file("docs/01_guide/01_a.md", "")
                .with_file("docs/02_guide/01_a.md", "")
                .with_file("docs/config.yaml", "- slug: [oops\n"),
        );

        let diagnostics = site.check();
        let kinds: Vec<_> = diagnostics.iter().map(|d| d.kind).collect();

        assert_eq!(
            kinds,
            vec![
                crate::DiagnosticKind::InvalidConfig,
                crate::DiagnosticKind::DuplicateFolderSlug,
            ]
        );
        assert_eq!(site.docs().len(), 2);
    }

    #[test]
    fn test_highlighting_enabled() {
        let site = Site::new(Arc::new(
            MockStorage::new().with_file("blogs/code.md", "```rust\nfn main() {}\n```\n"),
        ));

        let page = article(site.render("/blogs/code").unwrap());

        assert!(page.html.contains("class=\"language-rust\""));
        assert!(page.html.contains("hl-"));
    }

    #[test]
    fn test_uppercase_extension_renders_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/01_docker/01_intro.MD", "# Intro\n\nUpper.\n");
        write(dir.path(), "blogs/News.MD", "Fresh.\n");
        let site = Site::new(Arc::new(FsStorage::new(dir.path().to_path_buf())));

        assert_eq!(site.docs()[0].files[0].filename, "01_intro.MD");
        let page = article(site.render("/docker/intro").unwrap());
        assert_eq!(page.html, "<p>Upper.</p>");
        assert!(page.updated.is_some());

        let post = article(site.render("/blogs/news").unwrap());
        assert_eq!(post.html, "<p>Fresh.</p>");

        assert_eq!(
            site.doc_content("01_docker", "01_intro").as_deref(),
            Some("# Intro\n\nUpper.\n")
        );
        assert!(site.doc_mtime("01_docker", "01_intro").is_some());
        assert_eq!(site.blog_content("News").as_deref(), Some("Fresh.\n"));
    }

    #[test]
    fn test_raw_html_in_post_is_escaped() {
        let site = site(MockStorage::new().with_file(
            "blogs/x.md",
            "<script>alert(1)</script>\n\n[click](javascript:alert(1))\n",
        ));

        let page = article(site.render("/blogs/x").unwrap());

        assert!(!page.html.contains("<script>"));
        assert!(!page.html.contains("javascript:"));
        assert!(page.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_listing_keywords_and_filter() {
        let site = site(
            MockStorage::new()
                .with_file("blogs/a.md", "")
                .with_file("blogs/b.md", "")
                .with_file("blogs/c.md", "")
                .with_file(
                    "blogs/config.yaml",
                    "- slug: a\n  keywords: [Rust, cli]\n- slug: b\n  keywords: [rust]\n",
                ),
        );

        let index = listing(site.render("/blogs").unwrap());
        assert_eq!(index.keywords, vec!["Rust", "cli"]);

        let filtered = index.with_keyword("RUST");
        let hrefs: Vec<&str> = filtered.entries.iter().map(|e| e.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/blogs/a", "/blogs/b"]);
        assert_eq!(filtered.keywords, vec!["Rust", "cli"]);
        assert!(filtered.with_keyword("go").entries.is_empty());
    }
}
