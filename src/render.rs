//! Plain-text table rendering for the command line
//!
//! Formats a document as an aligned grid for the `show` subcommand.
//! Column widths are derived from content and clamped to a min/max so one
//! long cell cannot blow out the whole layout. This is presentation glue
//! only; it never mutates the document.

use crate::grid::TableDocument;

const MIN_COLUMN_WIDTH: usize = 4;

/// Display options for [`render_table`]
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Upper bound on a column's display width, in characters
    pub max_column_width: usize,
    /// Prefix each data row with its zero-based index
    pub show_row_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_column_width: 40,
            show_row_numbers: false,
        }
    }
}

/// Render the document as an aligned text grid
pub fn render_table(doc: &TableDocument, opts: &RenderOptions) -> String {
    let max_width = opts.max_column_width.max(MIN_COLUMN_WIDTH);
    let widths = column_widths(doc, max_width);
    let gutter = if opts.show_row_numbers {
        // Wide enough for the largest row index
        doc.row_count().saturating_sub(1).to_string().len().max(1)
    } else {
        0
    };

    let mut out = String::new();

    if opts.show_row_numbers {
        out.push_str(&" ".repeat(gutter));
        out.push_str("  ");
    }
    push_line(&mut out, doc.headers(), &widths, max_width);

    out.push('\n');
    if opts.show_row_numbers {
        out.push_str(&"-".repeat(gutter));
        out.push_str("--");
    }
    out.push_str(&separator(&widths));

    for (i, row) in doc.rows().iter().enumerate() {
        out.push('\n');
        if opts.show_row_numbers {
            out.push_str(&format!("{:>width$}  ", i, width = gutter));
        }
        push_line(&mut out, row.cells(), &widths, max_width);
    }

    out
}

/// Per-column display widths: content-derived, clamped to min/max
fn column_widths(doc: &TableDocument, max_width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = doc
        .headers()
        .iter()
        .map(|h| h.chars().count().clamp(MIN_COLUMN_WIDTH, max_width))
        .collect();

    for row in doc.rows() {
        for (col, cell) in row.cells().iter().enumerate() {
            if col < widths.len() {
                let cell_width = cell.chars().count();
                widths[col] = widths[col].max(cell_width).min(max_width);
            }
        }
    }

    widths
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize], max_width: usize) {
    for (col, &width) in widths.iter().enumerate() {
        if col > 0 {
            out.push_str(" | ");
        }
        let cell = cells.get(col).map(String::as_str).unwrap_or("");
        out.push_str(&format!("{:<width$}", clip(cell, max_width), width = width));
    }
}

fn separator(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-")
}

/// Truncate a cell to the display width on a character boundary
fn clip(cell: &str, max_width: usize) -> String {
    if cell.chars().count() <= max_width {
        cell.to_string()
    } else {
        cell.chars().take(max_width.saturating_sub(1)).chain(['…']).collect()
    }
}
