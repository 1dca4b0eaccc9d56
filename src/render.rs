//! HTML table rendering for parsed tables.

use crate::attributes::FilterSpec;
use crate::data::ParsedTable;
use std::fmt::Write;

/// Text shown for absent or empty cells.
const EMPTY_CELL: &str = "-";

/// Configuration for rendering a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Class attribute of the `<table>` element
    pub table_class: String,
    /// Tables with more rows than this get a row-count footer
    pub footer_threshold: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            table_class: "swiss-table".to_string(),
            footer_threshold: 2000,
        }
    }
}

/// Returns `true` for cell values rendered as hyperlinks: absolute URLs
/// (`http…`) and root-relative paths (`/…`).
#[inline]
pub fn is_link(value: &str) -> bool {
    value.starts_with("http") || value.starts_with('/')
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn push_cell(html: &mut String, value: &str) {
    let escaped = escape_html(value);
    if is_link(value) {
        let _ = write!(
            html,
            "<td><a href=\"{escaped}\" target=\"_blank\" rel=\"noopener\">{escaped}</a></td>"
        );
    } else {
        let _ = write!(html, "<td>{escaped}</td>");
    }
}

/// Render a table as HTML markup.
///
/// Every row is rendered; there is no pagination. `filter` is accepted but
/// does not restrict rows. Cells are looked up by header name, with `-` for
/// empty values.
///
/// ## Example
///
/// ```rust
/// use csv_modal_view::{parse_table, render_table, RenderConfig};
///
/// let table = parse_table("page,status\n/about,404\n").unwrap();
/// let html = render_table(&table, None, &RenderConfig::default());
///
/// assert!(html.contains("<th>page</th>"));
/// assert!(html.contains("<a href=\"/about\""));
/// assert!(html.contains("<td>404</td>"));
/// ```
pub fn render_table(
    table: &ParsedTable,
    filter: Option<&FilterSpec>,
    config: &RenderConfig,
) -> String {
    if let Some(filter) = filter {
        tracing::debug!(key = %filter.key, value = %filter.value, "row filter not applied");
    }

    let mut html = String::new();
    let _ = write!(
        html,
        "<table class=\"{}\"><thead><tr>",
        escape_html(&config.table_class)
    );
    for header in &table.headers {
        let _ = write!(html, "<th>{}</th>", escape_html(header));
    }
    html.push_str("</tr></thead><tbody>");

    for row in &table.rows {
        html.push_str("<tr>");
        for header in &table.headers {
            let value = row.get(header).filter(|v| !v.is_empty()).unwrap_or(EMPTY_CELL);
            push_cell(&mut html, value);
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");

    if table.rows.len() > config.footer_threshold {
        let _ = write!(
            html,
            "<p class=\"table-footer\">Showing all {} rows. Scroll to view.</p>",
            table.rows.len()
        );
    }

    html
}

/// Web-specific rendering implementation.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use web_sys::Element;

    /// Render a table directly into a DOM element, replacing its content.
    pub fn render_into(
        target: &Element,
        table: &ParsedTable,
        filter: Option<&FilterSpec>,
        config: &RenderConfig,
    ) {
        target.set_inner_html(&render_table(table, filter, config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RowRecord;
    use crate::parser::parse_table;

    fn table_with_rows(count: usize) -> ParsedTable {
        let headers = vec!["n".to_string()];
        let rows = (0..count)
            .map(|i| RowRecord::from_values(&headers, vec![i.to_string()]))
            .collect();
        ParsedTable::new(headers, rows)
    }

    #[test]
    fn test_render_structure() {
        let table = parse_table("a,b\n1,2\n3,4\n").unwrap();
        let html = render_table(&table, None, &RenderConfig::default());

        assert!(html.starts_with("<table class=\"swiss-table\"><thead><tr><th>a</th><th>b</th></tr></thead><tbody>"));
        assert!(html.contains("<tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td></tr>"));
        assert!(html.ends_with("</tbody></table>"));
    }

    #[test]
    fn test_url_becomes_link() {
        let table = parse_table("url,note\nhttps://example.com/x,plain text\n").unwrap();
        let html = render_table(&table, None, &RenderConfig::default());

        assert!(html.contains(
            "<td><a href=\"https://example.com/x\" target=\"_blank\" rel=\"noopener\">https://example.com/x</a></td>"
        ));
        assert!(html.contains("<td>plain text</td>"));
    }

    #[test]
    fn test_root_relative_path_becomes_link() {
        assert!(is_link("/docs/page"));
        assert!(is_link("http://example.com"));
        assert!(!is_link("docs/page"));
        assert!(!is_link("ftp://example.com"));
    }

    #[test]
    fn test_empty_cell_rendered_as_dash() {
        let table = parse_table("a,b,c\n1,,\n").unwrap();
        let html = render_table(&table, None, &RenderConfig::default());
        assert!(html.contains("<tr><td>1</td><td>-</td><td>-</td></tr>"));
    }

    #[test]
    fn test_cell_text_escaped() {
        let table = parse_table("a\n<b>bold</b> & co\n").unwrap();
        let html = render_table(&table, None, &RenderConfig::default());
        assert!(html.contains("<td>&lt;b&gt;bold&lt;/b&gt; &amp; co</td>"));
    }

    #[test]
    fn test_filter_is_not_applied() {
        let table = parse_table("type,page\nmissing_title,/a\nbroken_link,/b\n").unwrap();
        let filter = FilterSpec::parse("type=missing_title").unwrap();
        let config = RenderConfig::default();

        let filtered = render_table(&table, Some(&filter), &config);
        let unfiltered = render_table(&table, None, &config);

        assert_eq!(filtered, unfiltered);
        assert!(filtered.contains("broken_link"));
    }

    #[test]
    fn test_footer_threshold() {
        let config = RenderConfig::default();

        let html = render_table(&table_with_rows(2001), None, &config);
        assert!(html.contains("Showing all 2001 rows"));

        let html = render_table(&table_with_rows(2000), None, &config);
        assert!(!html.contains("Showing all"));
    }

    #[test]
    fn test_all_rows_rendered() {
        let html = render_table(&table_with_rows(2500), None, &RenderConfig::default());
        assert_eq!(html.matches("<tr>").count(), 2501);
    }

    #[test]
    fn test_duplicate_headers_show_last_value() {
        let table = parse_table("id,id\nfirst,second\n").unwrap();
        let html = render_table(&table, None, &RenderConfig::default());
        assert!(html.contains("<tr><td>second</td><td>second</td></tr>"));
    }
}
