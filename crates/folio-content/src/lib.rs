//! Content layer for folio sites.
//!
//! Content lives under three top-level directories of a storage root:
//!
//! - `docs/<folder>/<file>.md`, served at `/<folder>/<file>`
//! - `courses/<course>/<lesson>.md`, served at `/courses/<course>/<lesson>`
//! - `blogs/<post>.md`, served at `/blogs/<post>`
//!
//! Each directory may carry a `config.yaml` overriding titles, slugs,
//! descriptions and order. Trees are rebuilt from storage on every call, so
//! edits show up without a restart.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use folio_content::{Page, Site};
//! use folio_storage::FsStorage;
//!
//! let site = Site::new(Arc::new(FsStorage::new("static".into())));
//!
//! let docs = site.docs();
//! let index = site.search_index();
//! let hits = index.query("docker", 10);
//!
//! if let Page::Article(article) = site.render("/docker/intro")? {
//!     assert!(!article.html.is_empty());
//! }
//! # let _ = (docs, hits);
//! # Ok(())
//! # }
//! ```

mod blogs;
pub mod config;
mod courses;
mod diagnostics;
mod docs;
mod model;
pub mod naming;
mod navigation;
mod page;
mod resolve;
mod route;
mod search;
mod site;
mod tree;
mod validate;

pub use blogs::{EMPTY_BLOGS_MESSAGE, build_blogs_list};
pub use config::{ConfigLoadError, ConfigObserver, TracingObserver};
pub use courses::{COURSE_FALLBACK_DESCRIPTION, build_courses_tree};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsCollector};
pub use docs::{DOCS_FALLBACK_DESCRIPTION, build_docs_tree};
pub use model::{
    BlogPost, Collection, ContentFile, ContentFolder, Course, DocFolder, blog_href, course_href,
    doc_href,
};
pub use navigation::{
    BreadcrumbItem, MAX_RELATED, NavEntry, PrevNext, RelatedArticle, blog_breadcrumbs,
    collect_keywords, filter_by_keyword, flatten_courses, flatten_docs, folder_breadcrumbs,
    prev_next, related_for_blog, related_for_doc,
};
pub use page::{Article, Listing, ListingEntry, Page, RenderError, edit_url};
pub use resolve::{ResolvedEntry, find_folder, resolve_blog, resolve_course, resolve_doc};
pub use route::Route;
pub use search::{SearchIndex, SearchItem, SearchKind, SearchLimits, SearchPage};
pub use site::{EMPTY_COURSES_MESSAGE, EMPTY_DOCS_MESSAGE, Site, SiteOptions};
pub use validate::validate;

pub use folio_renderer::TocEntry;
