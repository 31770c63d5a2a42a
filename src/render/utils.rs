//! Utility functions for escaping text placed into HTML.

/// Checks if `text` contains characters with special meaning in HTML
/// text or attribute values.
///
/// # Examples
/// ```
/// # use synbox::render::utils::needs_escaping;
/// assert!(!needs_escaping("jóvenes"));
/// assert!(needs_escaping("<NP>"));
/// assert!(needs_escaping("rock'n'roll"));
/// ```
pub fn needs_escaping(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\''))
}

/// Escapes `text` for use in HTML text or single/double quoted attributes.
///
/// Only `&`, `<`, `>`, `"` and `'` are replaced; all other characters,
/// including non-ASCII ones, are kept as they are (output is UTF-8).
///
/// # Examples
/// ```
/// # use synbox::render::utils::escape_html;
/// assert_eq!(escape_html("N_Núcleo"), "N_Núcleo");
/// assert_eq!(escape_html("a<b&c"), "a&lt;b&amp;c");
/// assert_eq!(escape_html("'\""), "&#39;&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    if !needs_escaping(text) {
        return text.to_string();
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
