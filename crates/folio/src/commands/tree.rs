//! `folio tree` command implementation.

use clap::{Args, ValueEnum};
use folio_content::{
    BlogPost, Collection, ContentFolder, EMPTY_BLOGS_MESSAGE, EMPTY_COURSES_MESSAGE,
    EMPTY_DOCS_MESSAGE, blog_href, course_href, doc_href,
};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Collection selector for `--collection`.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CollectionArg {
    Docs,
    Courses,
    Blogs,
}

impl From<CollectionArg> for Collection {
    fn from(arg: CollectionArg) -> Self {
        match arg {
            CollectionArg::Docs => Self::Docs,
            CollectionArg::Courses => Self::Courses,
            CollectionArg::Blogs => Self::Blogs,
        }
    }
}

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Only print one collection.
    #[arg(long, value_enum)]
    collection: Option<CollectionArg>,
}

impl TreeArgs {
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let (config, site) = global.load_site()?;
        output.muted(&format!(
            "{} ({})",
            config.site.name,
            config.content_resolved.root_dir.display()
        ));

        let selected: Vec<Collection> = match self.collection {
            Some(arg) => vec![arg.into()],
            None => vec![Collection::Docs, Collection::Courses, Collection::Blogs],
        };

        for collection in selected {
            output.highlight(collection.label());
            let lines = match collection {
                Collection::Docs => folder_lines(&site.docs(), doc_href, EMPTY_DOCS_MESSAGE),
                Collection::Courses => {
                    folder_lines(&site.courses(), course_href, EMPTY_COURSES_MESSAGE)
                }
                Collection::Blogs => blog_lines(&site.blogs()),
            };
            for line in lines {
                output.line(&line);
            }
        }
        Ok(())
    }
}

fn folder_lines(
    tree: &[ContentFolder],
    href: fn(&str, &str) -> String,
    empty_message: &str,
) -> Vec<String> {
    if tree.is_empty() {
        return vec![format!("  {empty_message}")];
    }
    let mut lines = Vec::new();
    for folder in tree {
        lines.push(format!("  {} [{}]", folder.title, folder.url_slug));
        for file in &folder.files {
            lines.push(format!(
                "    {}  {}",
                file.title,
                href(&folder.url_slug, &file.url_slug)
            ));
        }
    }
    lines
}

fn blog_lines(posts: &[BlogPost]) -> Vec<String> {
    if posts.is_empty() {
        return vec![format!("  {EMPTY_BLOGS_MESSAGE}")];
    }
    posts
        .iter()
        .map(|post| format!("  {}  {}", post.title, blog_href(&post.url_slug)))
        .collect()
}
