//! Docs collection: `docs/<folder>/<file>.md`.
//!
//! `docs/config.yaml` overrides folder titles, descriptions and keywords.
//! `docs/<folder>/config.yaml` overrides file headings and update dates and
//! pins file order.

use std::path::Path;

use folio_storage::Storage;

use crate::config::{
    CollectionConfig, ConfigObserver, load_collection_config, load_folder_config,
};
use crate::model::{Collection, DocFolder};
use crate::tree::{
    arrange_files, content_file, content_folder, derive_description, list_dirs, list_markdown,
};

/// Description used when a docs folder has no usable first line.
pub const DOCS_FALLBACK_DESCRIPTION: &str = "Documentation guide.";

/// Build the docs tree.
///
/// Folders are sorted by on-disk name; folders without markdown files are
/// left out. A missing `docs/` directory gives an empty tree.
pub fn build_docs_tree(storage: &dyn Storage, observer: &dyn ConfigObserver) -> Vec<DocFolder> {
    let root = Path::new(Collection::Docs.dir_name());
    let config = load_collection_config(storage, root, Collection::Docs.config_key(), observer);

    let tree: Vec<DocFolder> = list_dirs(storage, root)
        .into_iter()
        .filter_map(|name| build_folder(storage, root, &name, &config, observer))
        .collect();

    tracing::debug!(folders = tree.len(), "Built docs tree");
    tree
}

fn build_folder(
    storage: &dyn Storage,
    root: &Path,
    folder_name: &str,
    config: &CollectionConfig,
    observer: &dyn ConfigObserver,
) -> Option<DocFolder> {
    let dir = root.join(folder_name);
    let filenames = list_markdown(storage, &dir);
    if filenames.is_empty() {
        tracing::debug!(folder = folder_name, "Skipping docs folder without markdown");
        return None;
    }

    let first = filenames[..1].to_vec();
    let folder_config = load_folder_config(storage, &dir, observer);
    let keys: Vec<&str> = folder_config.slugs().collect();

    let files = arrange_files(filenames, &keys)
        .into_iter()
        .map(|(filename, pinned)| {
            let entry = pinned.and_then(|i| folder_config.get(keys[i]));
            content_file(
                filename,
                None,
                entry.and_then(|e| e.heading.clone()),
                entry.and_then(|e| e.updated),
            )
        })
        .collect();

    Some(content_folder(folder_name, files, config, || {
        derive_description(storage, &dir, &first, DOCS_FALLBACK_DESCRIPTION)
    }))
}
