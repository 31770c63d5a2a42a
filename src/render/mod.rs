//! Rendering of a finished [Layout](crate::layout::Layout).
//!
//! Rendering is a mechanical translation of the layout rows into output;
//! all positioning has been decided by the [layout](crate::layout) engine.
//!
//! * [`to_html`] - HTML document (or fragment) with a table of words and
//!   brackets, see [HtmlOptions]
//! * [`to_html_table`] - only the `<table>` element
//! * [`write_html_file`] - HTML written to a file
//! * [`to_json`] - the layout itself as pretty-printed JSON

pub mod html;
pub mod utils;

pub use html::{HtmlOptions, STYLESHEET, to_html, to_html_table, write_html_file};

use crate::layout::Layout;

/// Serializes `layout` as pretty-printed JSON.
///
/// # Example
/// ```
/// use synbox::layout::{Layout, LayoutConfig};
/// use synbox::render::to_json;
///
/// let tree = synbox::parse_bracket_str("(S (NP ellos) (VP leen))")?;
/// let layout = Layout::compute(&tree, &LayoutConfig::new())?;
/// let json = to_json(&layout)?;
/// assert!(json.contains("\"words\""));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn to_json(layout: &Layout) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(layout)
}
