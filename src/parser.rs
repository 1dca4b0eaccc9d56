//! Comma-separated text parsing.

use crate::data::{ParsedTable, RowRecord};
use thiserror::Error;

/// Error type for parsing operations.
///
/// Malformed lines never fail; they degrade into best-effort rows. Only input
/// without any header line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input contains no non-blank line to use as a header
    #[error("no header line: input is empty or blank")]
    EmptyInput,
}

/// Position of the splitter relative to double-quoted spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuoteState {
    /// Outside any quoted span; commas separate fields
    Unquoted,
    /// Inside a quoted span; commas are literal
    Quoted,
    /// Just read a `"` inside a quoted span: either a closing quote or the
    /// first half of an escaped `""`
    QuoteInQuoted,
}

/// Split one data line on commas that are not inside a quoted span.
///
/// Quote characters delimit spans and are dropped; `""` inside a span yields
/// a literal `"`. An unterminated quote runs to the end of the line. Fields
/// are returned untrimmed.
///
/// ## Example
///
/// ```rust
/// use csv_modal_view::split_quoted;
///
/// assert_eq!(split_quoted(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
/// ```
pub fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut state = QuoteState::Unquoted;

    for ch in line.chars() {
        state = match (state, ch) {
            (QuoteState::Unquoted | QuoteState::QuoteInQuoted, ',') => {
                fields.push(std::mem::take(&mut field));
                QuoteState::Unquoted
            }
            (QuoteState::Unquoted, '"') => QuoteState::Quoted,
            (QuoteState::Quoted, '"') => QuoteState::QuoteInQuoted,
            (QuoteState::QuoteInQuoted, '"') => {
                field.push('"');
                QuoteState::Quoted
            }
            (QuoteState::Quoted, c) => {
                field.push(c);
                QuoteState::Quoted
            }
            (QuoteState::Unquoted | QuoteState::QuoteInQuoted, c) => {
                field.push(c);
                QuoteState::Unquoted
            }
        };
    }

    fields.push(field);
    fields
}

/// Split the header line: every comma separates, names are trimmed and any
/// `"` characters removed.
fn parse_header(line: &str) -> Vec<String> {
    line.split(',')
        .map(|h| h.trim().replace('"', ""))
        .collect()
}

/// Parse comma-separated text into a [`ParsedTable`].
///
/// Blank and whitespace-only lines are discarded wherever they appear. The
/// first remaining line is the header; every later line becomes one row
/// with exactly one value per header.
///
/// ## Example
///
/// ```rust
/// use csv_modal_view::parse_table;
///
/// let table = parse_table("name,url\n\nHome,/index.html\n").unwrap();
/// assert_eq!(table.headers, vec!["name", "url"]);
/// assert_eq!(table.rows.len(), 1);
/// assert_eq!(table.rows[0].get("url"), Some("/index.html"));
/// ```
pub fn parse_table(text: &str) -> Result<ParsedTable, ParseError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header_line = lines.next().ok_or(ParseError::EmptyInput)?;
    let headers = parse_header(header_line);

    let rows = lines
        .map(|line| {
            let values = split_quoted(line)
                .into_iter()
                .map(|v| v.trim().to_string())
                .collect();
            RowRecord::from_values(&headers, values)
        })
        .collect();

    Ok(ParsedTable::new(headers, rows))
}
