//! HTML table rendering of a [Layout].

use crate::layout::{Layout, PlacementRow, RowSegment};
use crate::render::utils::escape_html;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Rough length of the markup of one table cell besides its text
const CELL_MARKUP_CHARS: usize = 110;

/// Extra buffer in HTML length/capacity estimate
const BUFFER_CHARS: usize = 200;

/// Stylesheet for the generated table. All selectors are scoped to
/// `.syn-table`, so a fragment can be embedded into other pages.
pub const STYLESHEET: &str = "\
.syn-table { border-collapse: collapse; width: auto; table-layout: auto; margin: 0 auto; }
.syn-table td { border: none; text-align: center; padding: 2px 8px 0 8px; font-family: sans-serif; height: 25px; white-space: nowrap; min-width: 40px; }
.syn-table .syn-word-row td { border: none; font-weight: bold; height: auto; padding-bottom: 2px; min-width: 40px; }
.syn-table .syn-high-level-row td { height: 30px; padding-top: 2px; padding-bottom: 2px; min-width: 40px; }
.syn-table .syn-high-level-line { border-top: 2px solid black; position: relative; display: block; height: 100%; min-width: 60px; border-top-left-radius: 15px; border-top-right-radius: 15px; }
.syn-table .syn-low-level-line { border-bottom: 2px solid black; position: relative; display: block; height: 100%; min-width: 60px; border-bottom-left-radius: 15px; border-bottom-right-radius: 15px; }
.syn-table .syn-low-label { position: absolute; bottom: 0; left: 50%; transform: translate(-50%, 100%); font-size: 0.7em; font-weight: bold; color: #004d40; background-color: white; padding: 1px 6px; white-space: nowrap; min-width: 30px; }
.syn-table .syn-high-label { position: absolute; top: 0; left: 50%; transform: translate(-50%, -100%); font-size: 0.7em; font-weight: bold; color: #004d40; background-color: white; padding: 1px 6px; white-space: nowrap; min-width: 30px; }
.syn-table .syn-empty-cell { border: none; }
";

/// Options for [to_html].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Title of the HTML document (ignored for fragments)
    pub title: String,
    /// Emit only the `<table>` instead of a full document
    pub fragment_only: bool,
    /// Embed the [STYLESHEET] in a `<style>` element
    pub include_style: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Syntactic Analysis".to_string(),
            fragment_only: false,
            include_style: true,
        }
    }
}

impl HtmlOptions {
    /// Full document with embedded style and the default title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Emits only the table, preceded by the `<style>` element if
    /// [`include_style`](Self::include_style) is set.
    pub fn fragment(mut self) -> Self {
        self.fragment_only = true;
        self
    }

    /// Leaves out the stylesheet.
    pub fn without_style(mut self) -> Self {
        self.include_style = false;
        self
    }
}

/// Bracket row flavour: classes used for rows drawn above or below words.
struct RowClasses {
    row: &'static str,
    line: &'static str,
    label: &'static str,
}

const ABOVE: RowClasses = RowClasses {
    row: "syn-high-level-row",
    line: "syn-high-level-line",
    label: "syn-high-label",
};

const BELOW: RowClasses = RowClasses {
    row: "syn-low-level-row",
    line: "syn-low-level-line",
    label: "syn-low-label",
};

/// Renders `layout` as HTML.
///
/// Rows are emitted top to bottom: the rows above the words (farthest
/// first), the word row, then the rows below the words (nearest first).
/// Every row has cells spanning exactly [`num_columns`](Layout::num_columns)
/// columns; uncovered columns become empty cells.
///
/// # Example
/// ```
/// use synbox::bracket::parse_str;
/// use synbox::layout::{Layout, LayoutConfig};
/// use synbox::render::{HtmlOptions, to_html};
///
/// let tree = parse_str("(S (SN_Sujeto ellos) (SV_Predicado leen))")?;
/// let config = LayoutConfig::new().with_high_level_labels(["SN_Sujeto", "SV_Predicado"]);
/// let layout = Layout::compute(&tree, &config)?;
///
/// let html = to_html(&layout, &HtmlOptions::new().fragment().without_style());
/// assert!(html.starts_with("<table class='syn-table'>"));
/// assert!(html.contains("<span class='syn-high-label'>SN_Sujeto</span>"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn to_html(layout: &Layout, options: &HtmlOptions) -> String {
    let mut html = String::with_capacity(estimate_html_len(layout, options));

    if !options.fragment_only {
        html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>");
        html.push_str(&escape_html(&options.title));
        html.push_str("</title>");
    }
    if options.include_style {
        html.push_str("<style>");
        html.push_str(STYLESHEET);
        html.push_str("</style>");
    }
    if !options.fragment_only {
        html.push_str("</head><body>");
    }

    push_table(&mut html, layout);

    if !options.fragment_only {
        html.push_str("</body></html>");
    }
    html
}

/// Renders only the `<table>` of `layout`, without style or document.
pub fn to_html_table(layout: &Layout) -> String {
    let mut html = String::with_capacity(estimate_table_len(layout));
    push_table(&mut html, layout);
    html
}

/// Writes `layout` as HTML to the file at `path`, creating or truncating it.
///
/// # Errors
/// Returns an I/O error if creating or writing the file fails.
pub fn write_html_file<P: AsRef<Path>>(path: P, layout: &Layout, options: &HtmlOptions) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(to_html(layout, options).as_bytes())?;
    writer.flush()
}

fn push_table(html: &mut String, layout: &Layout) {
    let num_columns = layout.num_columns();
    html.push_str("<table class='syn-table'>");

    for row in &layout.above {
        push_bracket_row(html, row, num_columns, &ABOVE);
    }

    html.push_str("<tr class='syn-word-row'>");
    for word in &layout.words {
        html.push_str("<td>");
        html.push_str(&escape_html(word));
        html.push_str("</td>");
    }
    html.push_str("</tr>");

    for row in layout.below_inward_out() {
        push_bracket_row(html, row, num_columns, &BELOW);
    }

    html.push_str("</table>");
}

fn push_bracket_row(html: &mut String, row: &PlacementRow, num_columns: usize, classes: &RowClasses) {
    html.push_str("<tr class='");
    html.push_str(classes.row);
    html.push_str("'>");

    for segment in row.segments(num_columns) {
        match segment {
            RowSegment::Gap(width) => {
                html.push_str(&format!("<td colspan='{width}' class='syn-empty-cell'></td>"));
            }
            RowSegment::Bracket(placement) => {
                html.push_str(&format!(
                    "<td colspan='{}'><div class='{}'><span class='{}'>{}</span></div></td>",
                    placement.column_width,
                    classes.line,
                    classes.label,
                    escape_html(&placement.label)
                ));
            }
        }
    }

    html.push_str("</tr>");
}

/// Estimates the length of the table markup of `layout`.
fn estimate_table_len(layout: &Layout) -> usize {
    let words: usize = layout.words.iter().map(|w| w.len() + CELL_MARKUP_CHARS).sum();
    let brackets: usize = layout
        .above
        .iter()
        .chain(&layout.below)
        // Every bracket may be preceded by a gap cell
        .map(|row| (2 * row.placements.len() + 1) * CELL_MARKUP_CHARS)
        .sum();
    words + brackets + BUFFER_CHARS
}

fn estimate_html_len(layout: &Layout, options: &HtmlOptions) -> usize {
    let style = if options.include_style { STYLESHEET.len() } else { 0 };
    estimate_table_len(layout) + style + options.title.len() + BUFFER_CHARS
}
