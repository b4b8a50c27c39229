//! Render state machines and shared helpers.
//!
//! Each struct tracks one kind of context while events stream through the
//! renderer, so the renderer itself stays a flat event dispatcher.

use std::collections::HashMap;

use pulldown_cmark::{Alignment, HeadingLevel};

/// Outline entry for an `h2` or `h3` heading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level (2 or 3).
    pub level: u8,
    /// Anchor ID for linking.
    pub id: String,
    /// Heading plain text.
    pub title: String,
}

/// State for tracking code block rendering.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    language: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }
}

/// State for tracking table rendering.
#[derive(Default)]
pub(crate) struct TableState {
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    pub(crate) fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for image alt text capture.
#[derive(Default)]
pub(crate) struct ImageState {
    active: bool,
    alt_text: String,
}

impl ImageState {
    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn start(&mut self) {
        self.active = true;
        self.alt_text.clear();
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }

    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt_text)
    }
}

/// State for headings: buffers text and HTML until the heading closes,
/// then assigns a unique anchor ID and records the outline entry.
#[derive(Default)]
pub(crate) struct HeadingState {
    current_level: Option<u8>,
    text: String,
    html: String,
    toc: Vec<TocEntry>,
    id_counts: HashMap<String, usize>,
}

impl HeadingState {
    pub(crate) fn is_active(&self) -> bool {
        self.current_level.is_some()
    }

    pub(crate) fn start_heading(&mut self, level: u8) {
        self.current_level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    /// Finish the current heading. Returns `(level, id, html)`.
    pub(crate) fn complete_heading(&mut self) -> Option<(u8, String, String)> {
        let level = self.current_level.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);
        let id = self.unique_id(text.trim());

        if matches!(level, 2 | 3) {
            self.toc.push(TocEntry {
                level,
                id: id.clone(),
                title: text.trim().to_owned(),
            });
        }

        Some((level, id, html))
    }

    pub(crate) fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }

    fn unique_id(&mut self, text: &str) -> String {
        let base_id = heading_id(text);
        let count = self.id_counts.entry(base_id.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            base_id
        } else {
            format!("{base_id}-{}", *count - 1)
        }
    }
}

/// Anchor ID for heading text.
///
/// Lowercases, turns each whitespace run into `-`, then drops anything that
/// is not `[a-z0-9-]`.
///
/// # Examples
///
/// ```
/// use folio_renderer::heading_id;
///
/// assert_eq!(heading_id("Getting Started"), "getting-started");
/// assert_eq!(heading_id("What's new?"), "whats-new");
/// ```
#[must_use]
pub fn heading_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            id.push(c);
        }
    }

    id
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// URL schemes that run script or embed content when followed.
const UNSAFE_SCHEMES: [&str; 3] = ["javascript", "vbscript", "data"];

/// Link or image destination with script-capable schemes removed.
///
/// Relative URLs and other schemes pass through unchanged; an unsafe
/// destination becomes empty.
pub(crate) fn safe_url(url: &str) -> &str {
    let Some(colon) = url.find(':') else {
        return url;
    };
    // A colon after a path, query or fragment delimiter is not a scheme
    if url[..colon].contains(['/', '?', '#']) {
        return url;
    }
    // Browsers ignore whitespace and control characters inside a scheme
    let scheme: String = url[..colon]
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if UNSAFE_SCHEMES.contains(&scheme.as_str()) {
        ""
    } else {
        url
    }
}

/// Convert heading level enum to number (1-6).
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
