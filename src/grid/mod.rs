//! Tabular document engine
//!
//! Parses delimited text into a rectangular in-memory grid, supports
//! structural edits (row/column insertion and deletion, cell updates,
//! header renames), and serializes the grid back to delimited text.
//!
//! # Architecture
//!
//! ```text
//! TableDocument (stateful)
//! ├── headers + rows (rectangular grid, stable row ids)
//! ├── source_path + dirty flag (file association)
//! └── codec (pure text ↔ grid functions)
//!         ├── parse (split, trim, normalize row width)
//!         └── serialize (naive join, no quoting)
//! ```
//!
//! The presentation layer (a table editor UI, a CLI) drives the document
//! through its mutators and I/O methods and reads the grid back through
//! the accessors; nothing in here renders or prompts.

mod codec;
mod document;
mod error;

pub use codec::{parse, serialize, DELIMITER};
pub use document::{Row, RowId, TableDocument};
pub use error::TableError;
