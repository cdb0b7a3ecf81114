//! Markdown-lite renderer for contact notes.
//!
//! Converts the constrained plain text produced for contact notes and
//! categories into HTML fragments that are safe to insert as `innerHTML`.
//!
//! # Supported syntax
//!
//! - Bullets introduced by `-`, `•`, `*`, `+`, `◦` or `▪`, grouped into `<ul>`
//!   blocks by indentation
//! - `**strong**` and `*emphasis*`
//! - Section headers (`Label:` or short all-caps lines) and
//!   `Title: Date range • Duration` employment lines
//!
//! Everything else is escaped text. Rendering never fails.
//!
//! # Example
//!
//! ```
//! use notemark_renderer::NoteRenderer;
//!
//! let html = NoteRenderer::new().render("Interests:\n- **Sailing**\n- Chess");
//! assert!(html.contains("<ul><li><strong>Sailing</strong></li><li>Chess</li></ul>"));
//! ```

mod classify;
mod escape;
mod highlight;
mod inline;
mod list;
mod renderer;
mod synthesis;

pub use classify::{LineKind, classify_line};
pub use escape::escape_html;
pub use highlight::{DEFAULT_MARK_STYLE, Highlighter, highlight};
pub use inline::inline;
pub use list::ListItem;
pub use renderer::{
    DEFAULT_HEADER_MAX_LEN, DEFAULT_INDENT_EM, NoteRenderer, RenderOptions, render,
    render_optional,
};
pub use synthesis::{EMPTY_SYNTHESIS_HTML, SynthesisEntry, category_label, render_synthesis};
