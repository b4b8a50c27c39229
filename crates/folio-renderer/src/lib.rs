//! Markdown rendering for folio pages.
//!
//! [`MarkdownRenderer`] turns pulldown-cmark events into semantic HTML5,
//! assigns anchor IDs to headings and collects an `h2`/`h3` outline.
//! Fenced code is highlighted through [`Highlighter`] (syntect, class-based
//! spans). [`strip_first_matching_heading`] and [`reading_time`] operate on
//! the markdown source before it is rendered.
//!
//! # Example
//!
//! ```
//! use folio_renderer::{Highlighter, MarkdownRenderer, reading_time};
//!
//! let markdown = "# Docker\n\n## Install\n\n```sh\nbrew install docker\n```";
//! let highlighter = Highlighter::new();
//! let result = MarkdownRenderer::new()
//!     .with_highlighter(&highlighter)
//!     .render_markdown(markdown);
//!
//! assert_eq!(result.toc.len(), 1);
//! assert_eq!(reading_time(markdown), 1);
//! ```

mod highlight;
mod renderer;
mod state;
mod text;

pub use highlight::{CLASS_PREFIX, Highlighter};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{TocEntry, escape_html, heading_id};
pub use text::{
    WORDS_PER_MINUTE, format_reading_time, reading_time, strip_first_matching_heading,
};
