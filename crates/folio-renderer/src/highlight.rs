//! Syntax highlighting for fenced code blocks.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// CSS class prefix for highlighted spans (`hl-keyword`, `hl-string`, ...).
pub const CLASS_PREFIX: &str = "hl-";

/// Class-based syntax highlighter.
///
/// Emits `<span class="hl-...">` markup so the site stylesheet owns the
/// colours. Loading the syntax set is expensive; build one highlighter and
/// share it across renders.
pub struct Highlighter {
    syntaxes: SyntaxSet,
}

impl Highlighter {
    /// Create a highlighter with the bundled syntax definitions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Whether a fence language is known.
    #[must_use]
    pub fn supports(&self, language: &str) -> bool {
        self.syntaxes
            .find_syntax_by_token(canonical_language(language))
            .is_some()
    }

    /// Highlight `code` as `language`.
    ///
    /// Returns `None` for unknown languages; the caller escapes the code
    /// verbatim instead.
    #[must_use]
    pub fn highlight(&self, language: &str, code: &str) -> Option<String> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(canonical_language(language))?;
        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntaxes,
            ClassStyle::SpacedPrefixed {
                prefix: CLASS_PREFIX,
            },
        );

        for line in LinesWithEndings::from(code) {
            if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
                tracing::debug!(language, error = %e, "Highlighting failed, falling back to plain code");
                return None;
            }
        }

        Some(generator.finalize())
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("syntaxes", &self.syntaxes.syntaxes().len())
            .finish()
    }
}

/// Map fence aliases onto the token syntect knows.
fn canonical_language(language: &str) -> &str {
    match language {
        "sh" | "zsh" | "shell" | "console" => "bash",
        other => other,
    }
}
