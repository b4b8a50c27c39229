//! `folio search` command implementation.

use clap::Args;
use folio_content::{SearchLimits, SearchPage};

use super::{GlobalArgs, search_limits};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Case-insensitive query; empty lists the first pages.
    #[arg(default_value = "")]
    query: String,

    /// Number of "load more" steps to apply.
    #[arg(long, default_value_t = 0)]
    more: usize,
}

impl SearchArgs {
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let (config, site) = global.load_site()?;
        let index = site.search_index();
        let visible = visible_count(&search_limits(&config), &self.query, self.more);

        let page = index.query(&self.query, visible);
        for line in result_lines(&page) {
            output.line(&line);
        }
        if page.total == 0 {
            output.warning(&format!("No results for \"{}\"", self.query.trim()));
        }
        Ok(())
    }
}

/// Visible result count after `more` load-more steps.
fn visible_count(limits: &SearchLimits, query: &str, more: usize) -> usize {
    (0..more).fold(limits.initial_visible(query), |visible, _| {
        limits.load_more(visible)
    })
}

fn result_lines(page: &SearchPage<'_>) -> Vec<String> {
    let mut lines: Vec<String> = page
        .items
        .iter()
        .map(|item| format!("[{}] {}  {}", item.kind.label(), item.title, item.href))
        .collect();
    if page.remaining > 0 {
        lines.push(format!("... {} more (use --more)", page.remaining));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{SearchItem, SearchKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_visible_count() {
        let limits = SearchLimits::default();

        assert_eq!(visible_count(&limits, "", 0), 5);
        assert_eq!(visible_count(&limits, "docker", 0), 10);
        assert_eq!(visible_count(&limits, "docker", 2), 30);
    }

    #[test]
    fn test_result_lines() {
        let item = SearchItem {
            title: "Box Model".to_owned(),
            href: "/courses/css/box-model".to_owned(),
            kind: SearchKind::Guide,
            keywords: Vec::new(),
        };
        let page = SearchPage {
            items: vec![&item],
            total: 3,
            remaining: 2,
        };

        assert_eq!(
            result_lines(&page),
            vec![
                "[Course] Box Model  /courses/css/box-model",
                "... 2 more (use --more)"
            ]
        );
    }
}
