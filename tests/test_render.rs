use synbox::layout::{Layout, LayoutConfig};
use synbox::render::{HtmlOptions, STYLESHEET, to_html, to_html_table, to_json, write_html_file};
use synbox::{layout_str, render_html_str};

fn small_layout() -> Layout {
    let config = LayoutConfig::new().with_high_level_label("NP");
    layout_str("(S (NP x) (VP y z))", &config).unwrap()
}

#[test]
fn test_table_markup() {
    let html = to_html_table(&small_layout());
    let expected = concat!(
        "<table class='syn-table'>",
        "<tr class='syn-high-level-row'>",
        "<td colspan='1'><div class='syn-high-level-line'><span class='syn-high-label'>NP</span></div></td>",
        "<td colspan='2' class='syn-empty-cell'></td>",
        "</tr>",
        "<tr class='syn-word-row'><td>x</td><td>y</td><td>z</td></tr>",
        "<tr class='syn-low-level-row'>",
        "<td colspan='1' class='syn-empty-cell'></td>",
        "<td colspan='2'><div class='syn-low-level-line'><span class='syn-low-label'>VP</span></div></td>",
        "</tr>",
        "</table>"
    );
    assert_eq!(html, expected);
}

#[test]
fn test_fragment_without_style_is_table() {
    let layout = small_layout();
    let fragment = to_html(&layout, &HtmlOptions::new().fragment().without_style());
    assert_eq!(fragment, to_html_table(&layout));
}

#[test]
fn test_full_document() {
    let html = to_html(&small_layout(), &HtmlOptions::new().with_title("Análisis <1>"));
    assert!(html.starts_with("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>"));
    assert!(html.contains("<title>Análisis &lt;1&gt;</title>"));
    assert!(html.contains(STYLESHEET));
    assert!(html.ends_with("</table></body></html>"));
}

#[test]
fn test_fragment_with_style() {
    let html = to_html(&small_layout(), &HtmlOptions::new().fragment());
    assert!(html.starts_with("<style>"));
    assert!(!html.contains("<title>"));
    assert!(html.ends_with("</table>"));
}

#[test]
fn test_rows_top_to_bottom() {
    let config = LayoutConfig::new().with_high_level_labels(["SN_Sujeto", "SV_Predicado"]);
    let html = render_html_str(
        "(O (SN_Sujeto (Det Los) (N jóvenes)) (SV_Predicado (V leen) (SN (N libros))))",
        &config,
    )
    .unwrap();

    let high = html.find("syn-high-label'>SN_Sujeto").unwrap();
    let words = html.find("<tr class='syn-word-row'>").unwrap();
    let inner_noun = html.find("<td colspan='3' class='syn-empty-cell'></td>").unwrap();
    let outer_row = html.find("syn-low-label'>Det").unwrap();
    assert!(high < words);
    // Deepest row below the words comes first
    assert!(words < inner_noun);
    assert!(inner_noun < outer_row);
    assert!(html.contains("<td>jóvenes</td>"));
}

#[test]
fn test_every_row_spans_all_columns() {
    let config = LayoutConfig::new().with_high_level_label("X");
    let layout = layout_str("(S a (X b (Y c d)) e)", &config).unwrap();
    let html = to_html_table(&layout);

    for row in html.split("<tr").skip(1) {
        if row.starts_with(" class='syn-word-row'") {
            assert_eq!(row.matches("<td>").count(), 5);
            continue;
        }
        let columns: usize = row
            .split("colspan='")
            .skip(1)
            .map(|rest| rest[..rest.find('\'').unwrap()].parse::<usize>().unwrap())
            .sum();
        assert_eq!(columns, 5, "{row}");
    }
}

#[test]
fn test_escaping() {
    let config = LayoutConfig::new().with_high_level_label("<NP>");
    let html = render_html_str("(S (<NP> a&b) (VP 'c\"))", &config).unwrap();
    assert!(html.contains("<span class='syn-high-label'>&lt;NP&gt;</span>"));
    assert!(html.contains("<td>a&amp;b</td>"));
    assert!(html.contains("<td>&#39;c&quot;</td>"));
    assert!(!html.contains("<NP>"));
}

#[test]
fn test_no_brackets() {
    let html = to_html_table(&layout_str("(S word)", &LayoutConfig::new()).unwrap());
    assert_eq!(
        html,
        "<table class='syn-table'><tr class='syn-word-row'><td>word</td></tr></table>"
    );
}

#[test]
fn test_write_html_file() {
    let path = std::env::temp_dir().join(format!("synbox-test-{}.html", std::process::id()));
    let layout = small_layout();
    write_html_file(&path, &layout, &HtmlOptions::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, to_html(&layout, &HtmlOptions::default()));
}

#[test]
fn test_json() {
    let layout = small_layout();
    let json = to_json(&layout).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["words"], serde_json::json!(["x", "y", "z"]));
    assert_eq!(value["above"][0]["depth"], 1);
    assert_eq!(value["above"][0]["placements"][0]["label"], "NP");
    assert_eq!(value["below"][0]["placements"][0]["column_start"], 1);
    assert_eq!(value["below"][0]["placements"][0]["column_width"], 2);

    let parsed: Layout = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, layout);
}
