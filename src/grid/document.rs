//! Table document model - the grid state and associated file metadata

use std::fs;
use std::path::{Path, PathBuf};

use super::codec;
use super::error::TableError;

/// Unique identifier for a row
///
/// Stable for the lifetime of the document and independent of the row's
/// position, so callers can resolve "this logical row" after other rows
/// have been removed. Assigned fresh at parse time, never derived from
/// cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(pub u64);

/// A single data row: one cell per column
#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    cells: Vec<String>,
}

impl Row {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// In-memory tabular document with an optional backing file
///
/// Owns the grid (headers + rows), the file association, and the dirty
/// flag. The grid is rectangular at all times: every row holds exactly
/// `column_count()` cells, and any mutator that changes the column set
/// rewrites every row before returning.
///
/// Row and column counts are computed from the live collections rather
/// than cached, so they cannot drift from the data they describe.
///
/// Mutators are total: an out-of-range index is silently absorbed as a
/// no-op rather than raised as an error, which keeps stale indices from an
/// interactive caller harmless. I/O methods report through [`TableError`].
#[derive(Debug, Clone, Default)]
pub struct TableDocument {
    headers: Vec<String>,
    rows: Vec<Row>,
    /// Path of the backing file (None for documents with no association yet)
    source_path: Option<PathBuf>,
    /// Whether in-memory state differs from the last successful load/save
    dirty: bool,
    next_row_id: u64,
}

impl TableDocument {
    /// Create a new empty document with no file association
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from raw delimited text, without a file association
    ///
    /// Used when content arrives from somewhere other than a file on disk
    /// (stdin, a paste buffer, a test).
    pub fn from_text(text: &str) -> Result<Self, TableError> {
        let (headers, cells) = codec::parse(text)?;
        let mut doc = Self::new();
        doc.headers = headers;
        doc.rows = doc.mint_rows(cells);
        Ok(doc)
    }

    // === Accessors ===

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Cell value at (row, col), or None when either index is out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.cells.get(col)).map(String::as_str)
    }

    /// Current position of the row with the given id
    pub fn row_index(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // === I/O ===

    /// Load the document from a file, replacing the entire grid.
    ///
    /// Reads the full text, parses it, and only then swaps the new content
    /// in: a failed read or parse leaves the document exactly as it was.
    /// On success the file becomes the document's association and the dirty
    /// flag is cleared.
    ///
    /// The file handle is held only for the duration of the read.
    pub fn load(&mut self, path: PathBuf) -> Result<(), TableError> {
        let text = fs::read_to_string(&path)?;
        let (headers, cells) = codec::parse(&text)?;

        tracing::debug!(
            rows = cells.len(),
            columns = headers.len(),
            "loaded table from {}",
            path.display()
        );

        self.headers = headers;
        self.rows = self.mint_rows(cells);
        self.source_path = Some(path);
        self.dirty = false;
        Ok(())
    }

    /// Write the document back to its associated file.
    ///
    /// Fails with [`TableError::NoActiveDocument`] when no association
    /// exists. On success the dirty flag is cleared.
    pub fn save(&mut self) -> Result<(), TableError> {
        let path = self.source_path.clone().ok_or(TableError::NoActiveDocument)?;
        self.write_to(&path)?;
        self.dirty = false;
        Ok(())
    }

    /// Write the document to `path` and make it the new association.
    ///
    /// The association and dirty flag are only updated after the write
    /// succeeds.
    pub fn save_as(&mut self, path: PathBuf) -> Result<(), TableError> {
        self.write_to(&path)?;
        self.source_path = Some(path);
        self.dirty = false;
        Ok(())
    }

    /// Serialize the current grid to delimited text.
    ///
    /// Pure serialization for a caller-chosen destination; does not touch
    /// the file association or the dirty flag.
    pub fn export(&self) -> String {
        codec::serialize(&self.headers, self.rows.iter().map(|r| r.cells.as_slice()))
    }

    fn write_to(&self, path: &Path) -> Result<(), TableError> {
        fs::write(path, self.export())?;
        tracing::debug!(
            rows = self.rows.len(),
            columns = self.headers.len(),
            "wrote table to {}",
            path.display()
        );
        Ok(())
    }

    // === Structural mutators ===

    /// Append an empty row
    pub fn add_row(&mut self) {
        let cells = vec![String::new(); self.headers.len()];
        let row = self.mint_row(cells);
        self.rows.push(row);
        self.dirty = true;
    }

    /// Remove the row at `index`; no-op when out of range
    pub fn delete_row(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        self.rows.remove(index);
        self.dirty = true;
    }

    /// Append a column, extending every existing row with an empty cell
    pub fn add_column(&mut self, name: &str) {
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.cells.push(String::new());
        }
        self.dirty = true;
    }

    /// Remove the column at `index` from the headers and from every row;
    /// no-op when out of range
    pub fn delete_column(&mut self, index: usize) {
        if index >= self.headers.len() {
            return;
        }
        self.headers.remove(index);
        for row in &mut self.rows {
            row.cells.remove(index);
        }
        self.dirty = true;
    }

    /// Set the cell at (row, col); no-op when either index is out of range
    pub fn update_cell(&mut self, row: usize, col: usize, value: &str) {
        if row >= self.rows.len() || col >= self.headers.len() {
            return;
        }
        self.rows[row].cells[col] = value.to_string();
        self.dirty = true;
    }

    /// Rename the header at `col`; no-op when out of range
    pub fn rename_header(&mut self, col: usize, name: &str) {
        if col >= self.headers.len() {
            return;
        }
        self.headers[col] = name.to_string();
        self.dirty = true;
    }

    // === Row identity ===

    fn mint_row(&mut self, cells: Vec<String>) -> Row {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        Row { id, cells }
    }

    fn mint_rows(&mut self, cells: Vec<Vec<String>>) -> Vec<Row> {
        cells.into_iter().map(|c| self.mint_row(c)).collect()
    }
}
