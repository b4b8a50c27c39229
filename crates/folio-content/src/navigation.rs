//! Reading-order navigation over the built trees.
//!
//! Lookups are linear scans; collections are documentation sized.

use serde::Serialize;

use crate::model::{
    BlogPost, Collection, ContentFile, ContentFolder, Course, DocFolder, blog_href, course_href,
    doc_href,
};

/// Maximum number of related articles.
pub const MAX_RELATED: usize = 3;

/// Files per other folder offered as related articles.
const RELATED_PER_FOLDER: usize = 2;

/// One file in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub folder_slug: String,
    pub folder_name: String,
    pub file_slug: String,
    pub url_slug: String,
    pub title: String,
    pub href: String,
}

/// Neighbours of an entry in reading order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrevNext<'a> {
    pub prev: Option<&'a NavEntry>,
    pub next: Option<&'a NavEntry>,
}

/// Flatten the docs tree, folder order then file order.
#[must_use]
pub fn flatten_docs(tree: &[DocFolder]) -> Vec<NavEntry> {
    flatten(tree, doc_href)
}

/// Flatten the courses tree, course order then lesson order.
#[must_use]
pub fn flatten_courses(tree: &[Course]) -> Vec<NavEntry> {
    flatten(tree, course_href)
}

fn flatten(tree: &[ContentFolder], href: fn(&str, &str) -> String) -> Vec<NavEntry> {
    tree.iter()
        .flat_map(|folder| {
            folder.files.iter().map(move |file| NavEntry {
                folder_slug: folder.url_slug.clone(),
                folder_name: folder.folder_name.clone(),
                file_slug: file.file_slug.clone(),
                url_slug: file.url_slug.clone(),
                title: file.title.clone(),
                href: href(&folder.url_slug, &file.url_slug),
            })
        })
        .collect()
}

/// Previous and next entries around `(folder_slug, url_slug)`.
///
/// Both are `None` when the entry is not in `flat`.
#[must_use]
pub fn prev_next<'a>(flat: &'a [NavEntry], folder_slug: &str, url_slug: &str) -> PrevNext<'a> {
    let Some(index) = flat
        .iter()
        .position(|e| e.folder_slug == folder_slug && e.url_slug == url_slug)
    else {
        return PrevNext::default();
    };

    PrevNext {
        prev: index.checked_sub(1).and_then(|i| flat.get(i)),
        next: flat.get(index + 1),
    }
}

/// One breadcrumb; the current page has no link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Breadcrumbs for a docs page or course lesson: `Docs › Folder › Page`.
///
/// The folder crumb links to the folder's first file through `href`
/// ([`doc_href`] or [`course_href`]).
#[must_use]
pub fn folder_breadcrumbs(
    collection: Collection,
    folder: &ContentFolder,
    file: &ContentFile,
    href: fn(&str, &str) -> String,
) -> Vec<BreadcrumbItem> {
    let folder_crumb = match folder.files.first() {
        Some(first) => BreadcrumbItem::link(&folder.title, href(&folder.url_slug, &first.url_slug)),
        None => BreadcrumbItem::current(&folder.title),
    };

    vec![
        BreadcrumbItem::link(collection.label(), format!("/{}", collection.dir_name())),
        folder_crumb,
        BreadcrumbItem::current(&file.title),
    ]
}

/// Breadcrumbs for a blog post: `Blogs › Post`.
#[must_use]
pub fn blog_breadcrumbs(post: &BlogPost) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::link(Collection::Blogs.label(), "/blogs"),
        BreadcrumbItem::current(&post.title),
    ]
}

/// A suggested next read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedArticle {
    pub title: String,
    pub href: String,
    pub collection: Collection,
}

/// Related articles for a docs page.
///
/// Siblings in the same folder first, then the first two files of every
/// other folder, then blog posts; at most [`MAX_RELATED`].
#[must_use]
pub fn related_for_doc(
    docs: &[DocFolder],
    blogs: &[BlogPost],
    folder: &DocFolder,
    file: &ContentFile,
) -> Vec<RelatedArticle> {
    let siblings = folder
        .files
        .iter()
        .filter(|f| f.file_slug != file.file_slug)
        .map(|f| doc_article(folder, f));

    let others = docs
        .iter()
        .filter(|f| f.folder_name != folder.folder_name)
        .flat_map(leading_docs);

    siblings
        .chain(others)
        .chain(blogs.iter().map(blog_article))
        .take(MAX_RELATED)
        .collect()
}

/// Related articles for a blog post: other posts, then docs.
#[must_use]
pub fn related_for_blog(
    docs: &[DocFolder],
    blogs: &[BlogPost],
    post: &BlogPost,
) -> Vec<RelatedArticle> {
    blogs
        .iter()
        .filter(|p| p.file_slug != post.file_slug)
        .map(blog_article)
        .chain(docs.iter().flat_map(leading_docs))
        .take(MAX_RELATED)
        .collect()
}

fn leading_docs(folder: &DocFolder) -> impl Iterator<Item = RelatedArticle> + '_ {
    folder
        .files
        .iter()
        .take(RELATED_PER_FOLDER)
        .map(move |f| doc_article(folder, f))
}

fn doc_article(folder: &DocFolder, file: &ContentFile) -> RelatedArticle {
    RelatedArticle {
        title: file.title.clone(),
        href: doc_href(&folder.url_slug, &file.url_slug),
        collection: Collection::Docs,
    }
}

fn blog_article(post: &BlogPost) -> RelatedArticle {
    RelatedArticle {
        title: post.title.clone(),
        href: blog_href(&post.url_slug),
        collection: Collection::Blogs,
    }
}

/// Distinct keywords in first-seen order, deduplicated ignoring case.
#[must_use]
pub fn collect_keywords<'a, I>(keyword_lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut seen: Vec<String> = Vec::new();
    for keyword in keyword_lists.into_iter().flatten() {
        if !seen.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
            seen.push(keyword.clone());
        }
    }
    seen
}

/// Items carrying `keyword`, ignoring case.
#[must_use]
pub fn filter_by_keyword<'a, T, F>(items: &'a [T], keyword: &str, keywords: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &[String],
{
    items
        .iter()
        .filter(|item| keywords(item).iter().any(|k| k.eq_ignore_ascii_case(keyword)))
        .collect()
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

    fn storage() -> MockStorage {
        MockStorage::new()
            .with_file("docs/01_docker/01_intro.md", "")
            .with_file("docs/01_docker/02_images.md", "")
            .with_file("docs/01_docker/03_volumes.md", "")
            .with_file("docs/02_k8s/01_pods.md", "")
            .with_file("docs/02_k8s/02_services.md", "")
            .with_file("docs/02_k8s/03_ingress.md", "")
            .with_file("courses/01_html/01_basics.md", "")
            .with_file("courses/02_css/01_box.md", "")
            .with_file("blogs/01_hello.md", "")
            .with_file("blogs/02_release.md", "")
    }

    fn hrefs(entries: &[NavEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.href.as_str()).collect()
    }

    #[test]
    fn test_flatten_docs_in_tree_order() {
        let docs = build_docs_tree(&storage(), &TracingObserver);

        let flat = flatten_docs(&docs);

        assert_eq!(
            hrefs(&flat),
            vec![
                "/docker/intro",
                "/docker/images",
                "/docker/volumes",
                "/k8s/pods",
                "/k8s/services",
                "/k8s/ingress",
            ]
        );
        assert_eq!(flat[0].folder_name, "01_docker");
        assert_eq!(flat[0].file_slug, "01_intro");
        assert_eq!(flat[0].title, "Intro");
    }

    #[test]
    fn test_flatten_courses_hrefs() {
        let courses = build_courses_tree(&storage(), &TracingObserver);

        assert_eq!(
            hrefs(&flatten_courses(&courses)),
            vec!["/courses/html/basics", "/courses/css/box"]
        );
    }

    #[test]
    fn test_prev_next_boundaries() {
        let flat = flatten_docs(&build_docs_tree(&storage(), &TracingObserver));

        let first = prev_next(&flat, "docker", "intro");
        assert_eq!(first.prev, None);
        assert_eq!(first.next, Some(&flat[1]));

        let last = prev_next(&flat, "k8s", "ingress");
        assert_eq!(last.prev, Some(&flat[4]));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_prev_next_interior_adjacency() {
        let flat = flatten_docs(&build_docs_tree(&storage(), &TracingObserver));

        for i in 1..flat.len() - 1 {
            let nav = prev_next(&flat, &flat[i].folder_slug, &flat[i].url_slug);
            assert_eq!(nav.prev, Some(&flat[i - 1]));
            assert_eq!(nav.next, Some(&flat[i + 1]));
        }
    }

    #[test]
    fn test_prev_next_crosses_folders() {
        let flat = flatten_docs(&build_docs_tree(&storage(), &TracingObserver));

        let nav = prev_next(&flat, "docker", "volumes");

        assert_eq!(nav.next.unwrap().href, "/k8s/pods");
    }

    #[test]
    fn test_prev_next_unknown() {
        let flat = flatten_docs(&build_docs_tree(&storage(), &TracingObserver));

        assert_eq!(prev_next(&flat, "docker", "nope"), PrevNext::default());
        assert_eq!(prev_next(&[], "docker", "intro"), PrevNext::default());
    }

    #[test]
    fn test_folder_breadcrumbs() {
        let docs = build_docs_tree(&storage(), &TracingObserver);
        let folder = &docs[1];

        let crumbs = folder_breadcrumbs(Collection::Docs, folder, &folder.files[2], doc_href);

        assert_eq!(
            crumbs,
            vec![
                BreadcrumbItem::link("Docs", "/docs"),
                BreadcrumbItem::link("K8s", "/k8s/pods"),
                BreadcrumbItem::current("Ingress"),
            ]
        );
    }

    #[test]
    fn test_course_breadcrumbs() {
        let courses = build_courses_tree(&storage(), &TracingObserver);

        let crumbs = folder_breadcrumbs(
            Collection::Courses,
            &courses[1],
            &courses[1].files[0],
            course_href,
        );

        assert_eq!(crumbs[0], BreadcrumbItem::link("Courses", "/courses"));
        assert_eq!(crumbs[1].href.as_deref(), Some("/courses/css/box"));
    }

    #[test]
    fn test_related_for_doc_prefers_siblings() {
        let docs = build_docs_tree(&storage(), &TracingObserver);
        let blogs = build_blogs_list(&storage(), &TracingObserver);

        let related = related_for_doc(&docs, &blogs, &docs[0], &docs[0].files[0]);
        let titles: Vec<_> = related.iter().map(|r| r.href.as_str()).collect();

        assert_eq!(titles, vec!["/docker/images", "/docker/volumes", "/k8s/pods"]);
    }

    #[test]
    fn test_related_for_doc_falls_through_to_blogs() {
        let storage = MockStorage::new()
            .with_file("docs/01_solo/01_only.md", "")
            .with_file("blogs/hello.md", "");
        let docs = build_docs_tree(&storage, &TracingObserver);
        let blogs = build_blogs_list(&storage, &TracingObserver);

        let related = related_for_doc(&docs, &blogs, &docs[0], &docs[0].files[0]);

        assert_eq!(related.len(), 1);
        assert_eq!(related[0].href, "/blogs/hello");
        assert_eq!(related[0].collection, Collection::Blogs);
    }

    #[test]
    fn test_related_for_blog() {
        let docs = build_docs_tree(&storage(), &TracingObserver);
        let blogs = build_blogs_list(&storage(), &TracingObserver);

        let related = related_for_blog(&docs, &blogs, &blogs[0]);
        let hrefs: Vec<_> = related.iter().map(|r| r.href.as_str()).collect();

        assert_eq!(hrefs, vec!["/blogs/release", "/docker/intro", "/docker/images"]);
    }

    #[test]
    fn test_collect_keywords_dedupes_ignoring_case() {
        let lists = [
            vec!["Docker".to_owned(), "containers".to_owned()],
            vec!["docker".to_owned(), "k8s".to_owned()],
        ];

        let keywords = collect_keywords(lists.iter().map(Vec::as_slice));

        assert_eq!(keywords, vec!["Docker", "containers", "k8s"]);
    }

    #[test]
    fn test_filter_by_keyword() {
        let storage = MockStorage::new()
            .with_file("blogs/a.md", "")
            .with_file("blogs/b.md", "")
            .with_file("blogs/config.yaml", "- slug: b\n  keywords: [Rust]\n");
        let blogs = build_blogs_list(&storage, &TracingObserver);

        let matched = filter_by_keyword(&blogs, "rust", |p| p.keywords.as_slice());

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].file_slug, "b");
    }
}
