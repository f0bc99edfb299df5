//! Command-line argument parsing for the table tool
//!
//! Every subcommand operates on one file: read-only inspection (`show`,
//! `export`) or a single structural edit written back in place (or to
//! `--out` for a save-as).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Edit delimited text tables from the command line
#[derive(Parser, Debug)]
#[command(name = "tabgrid", version, about = "Edit delimited text tables from the command line")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the table as an aligned grid
    Show {
        /// Table file to read
        file: PathBuf,

        /// Prefix each row with its index
        #[arg(long)]
        row_numbers: bool,
    },

    /// Print the table in its on-disk delimited form
    Export {
        /// Table file to read
        file: PathBuf,
    },

    /// Set the value of one cell
    Set {
        /// Table file to edit
        file: PathBuf,

        /// Row index (zero-based, data rows only)
        row: usize,

        /// Column index (zero-based)
        column: usize,

        /// New cell value
        value: String,

        /// Write the result here instead of back to FILE
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Append an empty row
    AddRow {
        /// Table file to edit
        file: PathBuf,

        /// Write the result here instead of back to FILE
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Delete the row at the given index
    DeleteRow {
        /// Table file to edit
        file: PathBuf,

        /// Row index (zero-based, data rows only)
        index: usize,

        /// Write the result here instead of back to FILE
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Append a column with the given header name
    AddColumn {
        /// Table file to edit
        file: PathBuf,

        /// Header name for the new column
        name: String,

        /// Write the result here instead of back to FILE
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Delete the column at the given index
    DeleteColumn {
        /// Table file to edit
        file: PathBuf,

        /// Column index (zero-based)
        index: usize,

        /// Write the result here instead of back to FILE
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Rename the header of the column at the given index
    RenameColumn {
        /// Table file to edit
        file: PathBuf,

        /// Column index (zero-based)
        index: usize,

        /// New header name
        name: String,

        /// Write the result here instead of back to FILE
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}
