//! Source-level markdown helpers that run before rendering.

use std::sync::LazyLock;

use regex::Regex;

/// Average reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 225;

static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Remove the first `# ` heading whose text equals `title`.
///
/// Comparison ignores case, surrounding whitespace and whitespace runs.
/// Pages already show their title above the body, so a leading H1 that
/// repeats it would appear twice. Leading blank lines left behind are
/// dropped too.
///
/// # Examples
///
/// ```
/// use folio_renderer::strip_first_matching_heading;
///
/// let md = "# Getting  Started\n\nBody";
/// assert_eq!(strip_first_matching_heading(md, "getting started"), "Body");
/// ```
#[must_use]
pub fn strip_first_matching_heading(markdown: &str, title: &str) -> String {
    let wanted = normalize(title);
    let mut found = false;

    let kept: Vec<&str> = markdown
        .split('\n')
        .filter(|line| {
            if found {
                return true;
            }
            match h1_text(line) {
                Some(text) if normalize(text) == wanted => {
                    found = true;
                    false
                }
                _ => true,
            }
        })
        .collect();

    kept.join("\n").trim_start_matches('\n').to_owned()
}

/// Text of a `# heading` line, or `None` for anything else.
fn h1_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim_start();
    (!text.is_empty()).then_some(text)
}

fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Estimated reading time in whole minutes, never less than one.
///
/// Fenced code blocks are not counted.
#[must_use]
pub fn reading_time(markdown: &str) -> usize {
    let prose = CODE_FENCE_RE.replace_all(markdown, "");
    let words = prose.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Human-readable reading time, e.g. `"4 min read"`.
#[must_use]
pub fn format_reading_time(minutes: usize) -> String {
    format!("{minutes} min read")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_matching_heading() {
        let md = "# Intro\n\nHello\n\n# Intro";

        assert_eq!(strip_first_matching_heading(md, "Intro"), "Hello\n\n# Intro");
    }

    #[test]
    fn test_strip_keeps_non_matching_heading() {
        let md = "# Something else\n\nHello";

        assert_eq!(strip_first_matching_heading(md, "Intro"), md);
    }

    #[test]
    fn test_strip_ignores_h2() {
        let md = "## Intro\n\nHello";

        assert_eq!(strip_first_matching_heading(md, "Intro"), md);
    }

    #[test]
    fn test_strip_after_other_content() {
        let md = "Lead\n# Intro\nBody";

        assert_eq!(strip_first_matching_heading(md, "intro"), "Lead\nBody");
    }

    #[test]
    fn test_strip_requires_space_after_hash() {
        let md = "#Intro\nBody";

        assert_eq!(strip_first_matching_heading(md, "Intro"), md);
    }

    #[test]
    fn test_reading_time_minimum() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time("a few words"), 1);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = "word ".repeat(226);

        assert_eq!(reading_time(&text), 2);
    }

    #[test]
    fn test_reading_time_excludes_code() {
        let code = "x ".repeat(1000);
        let md = format!("Intro text\n\n```\n{code}\n```\n");

        assert_eq!(reading_time(&md), 1);
    }

    #[test]
    fn test_format_reading_time() {
        assert_eq!(format_reading_time(1), "1 min read");
        assert_eq!(format_reading_time(7), "7 min read");
    }
}
