//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

use tabgrid::TableDocument;

/// Write `content` to a fresh temp file and return the handle
///
/// The caller keeps the handle alive for as long as the path is needed.
pub fn table_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Load a document from a temp file seeded with `content`
pub fn loaded_document(content: &str) -> (TableDocument, NamedTempFile) {
    let file = table_file(content);
    let mut doc = TableDocument::new();
    doc.load(file.path().to_path_buf()).unwrap();
    (doc, file)
}

pub const SAMPLE: &str = "Header1,Header2\nValue1,Value2\nValue3,Value4";
