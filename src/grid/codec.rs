//! Text ↔ grid codec
//!
//! Naive delimiter splitting, not RFC 4180: fields are split on the raw
//! delimiter with no quoting or escaping grammar, so a cell containing the
//! delimiter or a newline is not representable losslessly.

use super::error::TableError;

/// Field delimiter for the on-disk format
pub const DELIMITER: char = ',';

/// Parse delimited text into headers and data rows.
///
/// Lines are split on newline characters and zero-length lines are
/// discarded; a line of only delimiters still counts as a data row. The
/// first remaining line supplies the headers and fixes the column count.
/// Each field is trimmed of surrounding whitespace.
///
/// Data rows are normalized to the header width: short rows are
/// right-padded with empty cells, long rows are truncated. Ragged input
/// loads without error; strict width validation is not this format's job.
pub fn parse(text: &str) -> Result<(Vec<String>, Vec<Vec<String>>), TableError> {
    let mut lines = text.lines().filter(|line| !line.is_empty());

    let header_line = lines.next().ok_or(TableError::EmptyInput)?;
    let headers = split_fields(header_line);
    let column_count = headers.len();

    let rows = lines
        .map(|line| {
            let mut cells = split_fields(line);
            // Pad short rows, truncate long ones
            cells.resize(column_count, String::new());
            cells
        })
        .collect();

    Ok((headers, rows))
}

/// Serialize headers and rows back to delimited text.
///
/// One line per row, cells joined with the delimiter, lines joined with a
/// single `\n` and no trailing newline. A grid with no data rows
/// serializes to the header line alone.
pub fn serialize<'a, I>(headers: &[String], rows: I) -> String
where
    I: IntoIterator<Item = &'a [String]>,
{
    let sep = DELIMITER.to_string();
    let mut out = headers.join(&sep);
    for cells in rows {
        out.push('\n');
        out.push_str(&cells.join(&sep));
    }
    out
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(DELIMITER)
        .map(|field| field.trim().to_string())
        .collect()
}
