//! Blogs collection: flat `blogs/<post>.md`.

use std::path::Path;

use folio_storage::Storage;

use crate::config::{ConfigObserver, EntryOverride, load_collection_config};
use crate::model::{BlogPost, Collection};
use crate::naming::{filename_to_title, strip_md_extension, to_pretty_slug};
use crate::tree::{arrange_files, list_markdown};

/// Message shown by the blogs index when there are no posts.
pub const EMPTY_BLOGS_MESSAGE: &str = "No blog posts yet.";

/// Build the list of blog posts.
///
/// Posts listed in `blogs/config.yaml` come first in config order, the rest
/// follow by filename ascending.
pub fn build_blogs_list(storage: &dyn Storage, observer: &dyn ConfigObserver) -> Vec<BlogPost> {
    let root = Path::new(Collection::Blogs.dir_name());
    let filenames = list_markdown(storage, root);
    if filenames.is_empty() {
        return Vec::new();
    }

    let config = load_collection_config(storage, root, Collection::Blogs.config_key(), observer);
    let keys: Vec<&str> = config.slugs().collect();

    let posts: Vec<BlogPost> = arrange_files(filenames, &keys)
        .into_iter()
        .map(|(filename, pinned)| blog_post(filename, pinned.and_then(|i| config.get(keys[i]))))
        .collect();

    tracing::debug!(posts = posts.len(), "Built blogs list");
    posts
}

fn blog_post(filename: String, entry: Option<&EntryOverride>) -> BlogPost {
    let file_slug = strip_md_extension(&filename).to_owned();
    let entry = entry.cloned().unwrap_or_default();

    BlogPost {
        url_slug: to_pretty_slug(&file_slug),
        title: entry.heading.unwrap_or_else(|| filename_to_title(&filename)),
        file_slug,
        filename,
        description: entry.description,
        excerpt: entry.excerpt,
        keywords: entry.keywords,
        updated: entry.updated,
    }
}
