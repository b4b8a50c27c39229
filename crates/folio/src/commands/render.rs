//! `folio render` command implementation.

use clap::Args;
use folio_content::{Article, BreadcrumbItem, Listing, Page};
use folio_renderer::format_reading_time;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Public URL, e.g. `/docker/intro`, `/courses/css/box-model` or `/blogs`.
    url: String,

    /// Print the page as JSON.
    #[arg(long)]
    json: bool,

    /// On index pages, only list entries tagged with this keyword.
    #[arg(long)]
    keyword: Option<String>,
}

impl RenderArgs {
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let (_, site) = global.load_site()?;
        let page = match (site.render(&self.url)?, &self.keyword) {
            (Page::Listing(listing), Some(keyword)) => Page::Listing(listing.with_keyword(keyword)),
            (page, _) => page,
        };

        if self.json {
            output.line(&serde_json::to_string_pretty(&page)?);
            return Ok(());
        }

        match &page {
            Page::Article(article) => print_article(article, output),
            Page::Listing(listing) => print_listing(listing, output),
        }
        Ok(())
    }
}

fn print_article(article: &Article, output: &Output) {
    output.muted(&breadcrumb_trail(&article.breadcrumbs));
    output.highlight(&article.title);
    output.muted(&article_meta(article));
    output.line("");
    output.line(&article.html);

    if !article.toc.is_empty() {
        output.line("");
        output.highlight("On this page");
        for entry in &article.toc {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
            output.line(&format!("{indent}{}  #{}", entry.title, entry.id));
        }
    }

    if article.prev.is_some() || article.next.is_some() {
        output.line("");
    }
    if let Some(prev) = &article.prev {
        output.line(&format!("Previous: {}  {}", prev.title, prev.href));
    }
    if let Some(next) = &article.next {
        output.line(&format!("Next: {}  {}", next.title, next.href));
    }

    if !article.related.is_empty() {
        output.line("");
        output.highlight("Related");
        for related in &article.related {
            output.line(&format!("  {}  {}", related.title, related.href));
        }
    }

    if let Some(edit_url) = &article.edit_url {
        output.line("");
        output.muted(&format!("Edit this page: {edit_url}"));
    }
}

fn print_listing(listing: &Listing, output: &Output) {
    output.highlight(listing.title);
    if !listing.keywords.is_empty() {
        output.muted(&format!("Keywords: {}", listing.keywords.join(", ")));
    }
    if listing.entries.is_empty() {
        output.line(listing.empty_message);
        return;
    }
    for entry in &listing.entries {
        output.line(&format!("{}  {}", entry.title, entry.href));
        output.muted(&format!("  {}", entry.description));
    }
}

fn breadcrumb_trail(items: &[BreadcrumbItem]) -> String {
    items
        .iter()
        .map(|item| item.label.as_str())
        .collect::<Vec<_>>()
        .join(" › ")
}

/// `Updated 2025-01-05 · 3 min read`, without the date when unknown.
fn article_meta(article: &Article) -> String {
    let reading = format_reading_time(article.reading_time);
    match article.updated {
        Some(updated) => format!("Updated {} · {reading}", updated.format("%Y-%m-%d")),
        None => reading,
    }
}
