use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use tabgrid::cli::{CliArgs, Command};
use tabgrid::config::AppConfig;
use tabgrid::render::{render_table, RenderOptions};
use tabgrid::TableDocument;

fn main() -> Result<()> {
    tabgrid::tracing::init();

    let args = CliArgs::parse();
    let config = AppConfig::load();

    match args.command {
        Command::Show { file, row_numbers } => {
            let doc = open(file)?;
            let opts = RenderOptions {
                max_column_width: config.max_column_width,
                show_row_numbers: row_numbers || config.show_row_numbers,
            };
            println!("{}", render_table(&doc, &opts));
        }
        Command::Export { file } => {
            let doc = open(file)?;
            println!("{}", doc.export());
        }
        Command::Set {
            file,
            row,
            column,
            value,
            out,
        } => {
            let mut doc = open(file)?;
            doc.update_cell(row, column, &value);
            write_back(&mut doc, out, &format!("cell ({}, {})", row, column))?;
        }
        Command::AddRow { file, out } => {
            let mut doc = open(file)?;
            doc.add_row();
            write_back(&mut doc, out, "row")?;
        }
        Command::DeleteRow { file, index, out } => {
            let mut doc = open(file)?;
            doc.delete_row(index);
            write_back(&mut doc, out, &format!("row {}", index))?;
        }
        Command::AddColumn { file, name, out } => {
            let mut doc = open(file)?;
            doc.add_column(&name);
            write_back(&mut doc, out, &format!("column {:?}", name))?;
        }
        Command::DeleteColumn { file, index, out } => {
            let mut doc = open(file)?;
            doc.delete_column(index);
            write_back(&mut doc, out, &format!("column {}", index))?;
        }
        Command::RenameColumn {
            file,
            index,
            name,
            out,
        } => {
            let mut doc = open(file)?;
            doc.rename_header(index, &name);
            write_back(&mut doc, out, &format!("column {}", index))?;
        }
    }

    Ok(())
}

fn open(path: PathBuf) -> Result<TableDocument> {
    let mut doc = TableDocument::new();
    doc.load(path.clone())
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok(doc)
}

/// Persist an edit, or report when an out-of-range index was absorbed.
///
/// Mutators never fail; they leave the document clean when the target
/// index did not exist. In that case nothing is written back.
fn write_back(doc: &mut TableDocument, out: Option<PathBuf>, target: &str) -> Result<()> {
    if !doc.is_dirty() {
        tracing::warn!("{} does not exist, nothing to do", target);
        println!("no change: {} does not exist", target);
        return Ok(());
    }

    match out {
        Some(path) => {
            doc.save_as(path.clone())
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            doc.save().context("failed to write the table back")?;
        }
    }
    Ok(())
}
