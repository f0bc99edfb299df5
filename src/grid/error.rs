//! Error types for table parsing and document I/O

use std::io;

/// Errors surfaced by parsing and document I/O
///
/// Structural mutators never fail; out-of-range indices are absorbed as
/// no-ops. Everything that touches the backing file or the text codec
/// reports through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// No non-empty lines were found while parsing
    EmptyInput,
    /// Content could not be decoded as text
    InvalidFormat,
    /// The backing file reported a permissions fault
    AccessDenied,
    /// The backing file is unreachable for a reason other than permissions
    AccessError(String),
    /// `save` was called before any file association existed
    NoActiveDocument,
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "the file contains no data"),
            Self::InvalidFormat => write!(f, "invalid table format"),
            Self::AccessDenied => write!(f, "permission denied, check file permissions"),
            Self::AccessError(msg) => write!(f, "unable to access the file: {}", msg),
            Self::NoActiveDocument => write!(f, "no file is currently open"),
        }
    }
}

impl std::error::Error for TableError {}

impl From<io::Error> for TableError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::PermissionDenied => TableError::AccessDenied,
            // read_to_string reports non-UTF-8 content as InvalidData
            io::ErrorKind::InvalidData => TableError::InvalidFormat,
            _ => TableError::AccessError(e.to_string()),
        }
    }
}
