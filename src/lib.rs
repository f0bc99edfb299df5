//! tabgrid - delimited-text table document engine
//!
//! This crate provides the data model behind an interactive table editor:
//! parsing delimited text into a rectangular grid, structural edits, and
//! serialization back to delimited text. The bundled binary is a thin
//! batch-editing front end over the same model.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod render;
pub mod tracing;

// Re-export commonly used types
pub use config::AppConfig;
pub use grid::{Row, RowId, TableDocument, TableError};
