//! Document I/O tests - load, save, save_as, export, fault mapping

mod common;

use std::fs;
use std::io::Write;

use common::{loaded_document, table_file, SAMPLE};
use tabgrid::{TableDocument, TableError};

// ========================================================================
// Load
// ========================================================================

#[test]
fn test_load_parses_grid_and_sets_association() {
    let (doc, file) = loaded_document(SAMPLE);

    assert_eq!(doc.headers(), ["Header1", "Header2"]);
    assert_eq!(doc.row_count(), 2);
    assert_eq!(doc.column_count(), 2);
    assert_eq!(doc.rows()[0].cells(), ["Value1", "Value2"]);
    assert_eq!(doc.rows()[1].cells(), ["Value3", "Value4"]);
    assert!(!doc.is_dirty());
    assert_eq!(doc.source_path(), Some(file.path()));
}

#[test]
fn test_load_replaces_previous_content() {
    let (mut doc, _keep) = loaded_document(SAMPLE);
    doc.add_row();
    assert!(doc.is_dirty());

    let other = table_file("x,y,z\n1,2,3");
    doc.load(other.path().to_path_buf()).unwrap();

    assert_eq!(doc.headers(), ["x", "y", "z"]);
    assert_eq!(doc.row_count(), 1);
    assert!(!doc.is_dirty());
    assert_eq!(doc.source_path(), Some(other.path()));
}

#[test]
fn test_load_normalizes_ragged_rows() {
    let (doc, _keep) = loaded_document("a,b,c\n1\n1,2,3,4,5");

    assert_eq!(doc.rows()[0].cells(), ["1", "", ""]);
    assert_eq!(doc.rows()[1].cells(), ["1", "2", "3"]);
}

#[test]
fn test_load_missing_file_is_access_error() {
    let mut doc = TableDocument::new();
    let err = doc
        .load("/nonexistent/path/table.csv".into())
        .unwrap_err();

    assert!(matches!(err, TableError::AccessError(_)));
}

#[test]
fn test_load_empty_file_is_empty_input() {
    let file = table_file("");
    let mut doc = TableDocument::new();

    assert_eq!(
        doc.load(file.path().to_path_buf()).unwrap_err(),
        TableError::EmptyInput
    );
}

#[test]
fn test_load_blank_lines_only_is_empty_input() {
    let file = table_file("\n\n\n");
    let mut doc = TableDocument::new();

    assert_eq!(
        doc.load(file.path().to_path_buf()).unwrap_err(),
        TableError::EmptyInput
    );
}

#[test]
fn test_load_non_utf8_is_invalid_format() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xFF, 0xFE, 0x00, 0x41]).unwrap();
    file.flush().unwrap();

    let mut doc = TableDocument::new();
    assert_eq!(
        doc.load(file.path().to_path_buf()).unwrap_err(),
        TableError::InvalidFormat
    );
}

#[test]
fn test_failed_load_leaves_document_untouched() {
    let (mut doc, file) = loaded_document(SAMPLE);
    doc.update_cell(0, 0, "edited");
    let before = doc.export();

    let empty = table_file("");
    assert!(doc.load(empty.path().to_path_buf()).is_err());

    assert_eq!(doc.export(), before);
    assert!(doc.is_dirty());
    assert_eq!(doc.source_path(), Some(file.path()));
}

// ========================================================================
// Save / save_as
// ========================================================================

#[test]
fn test_save_writes_back_and_clears_dirty() {
    let (mut doc, file) = loaded_document("Test1,Test2\nA,X\nC,D");
    doc.update_cell(0, 1, "B");
    assert!(doc.is_dirty());

    doc.save().unwrap();

    assert!(!doc.is_dirty());
    assert_eq!(fs::read_to_string(file.path()).unwrap(), "Test1,Test2\nA,B\nC,D");
}

#[test]
fn test_save_without_association_fails() {
    let mut doc = TableDocument::from_text("a\n1").unwrap();
    assert_eq!(doc.save().unwrap_err(), TableError::NoActiveDocument);
}

#[test]
fn test_save_as_retargets_association() {
    let (mut doc, original) = loaded_document(SAMPLE);
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("copy.csv");

    doc.add_column("Header3");
    doc.save_as(target.clone()).unwrap();

    assert!(!doc.is_dirty());
    assert_eq!(doc.source_path(), Some(target.as_path()));
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "Header1,Header2,Header3\nValue1,Value2,\nValue3,Value4,"
    );
    // Original file is untouched
    assert_eq!(fs::read_to_string(original.path()).unwrap(), SAMPLE);

    // Subsequent saves go to the new file
    doc.update_cell(0, 2, "new");
    doc.save().unwrap();
    assert!(fs::read_to_string(&target).unwrap().contains("new"));
}

#[test]
fn test_save_as_gives_unsaved_document_an_association() {
    let mut doc = TableDocument::from_text("a,b\n1,2").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("fresh.csv");

    doc.save_as(target.clone()).unwrap();

    assert_eq!(doc.source_path(), Some(target.as_path()));
    assert_eq!(fs::read_to_string(&target).unwrap(), "a,b\n1,2");
}

// ========================================================================
// Export and round trips
// ========================================================================

#[test]
fn test_export_does_not_touch_dirty_or_association() {
    let (mut doc, file) = loaded_document(SAMPLE);
    doc.add_row();

    let text = doc.export();

    assert!(text.starts_with("Header1,Header2\n"));
    assert!(doc.is_dirty());
    assert_eq!(doc.source_path(), Some(file.path()));
}

#[test]
fn test_disk_round_trip_is_lossless() {
    let (mut doc, _keep) = loaded_document(SAMPLE);
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("roundtrip.csv");

    doc.save_as(target.clone()).unwrap();

    let mut reloaded = TableDocument::new();
    reloaded.load(target).unwrap();

    assert_eq!(reloaded.headers(), doc.headers());
    assert_eq!(reloaded.row_count(), doc.row_count());
    for (a, b) in reloaded.rows().iter().zip(doc.rows()) {
        assert_eq!(a.cells(), b.cells());
    }
}
