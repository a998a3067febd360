//! sheet_table - converts saved spreadsheet grid data into a typed table

use anyhow::{bail, Context, Result};
use clap::Parser;
use grid_table::{
    load_grid_data, Criteria, Grid, GridTableConverter, HeaderAlignment, SheetTable, SortOrder,
    TypedTable, Value, View,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheet_table")]
#[command(
    author,
    version,
    about = "Convert spreadsheet grid data into a typed table"
)]
struct Cli {
    /// Spreadsheet response or grid data JSON file
    input: PathBuf,

    /// Sheet index to convert (0-based, default: 0)
    #[arg(short, long, default_value = "0")]
    sheet: usize,

    /// Table name
    #[arg(short, long)]
    name: Option<String>,

    /// Table description
    #[arg(short, long)]
    description: Option<String>,

    /// How header and type-sample rows of different lengths are aligned
    /// (type-sample-row, widest)
    #[arg(long, default_value = "type-sample-row")]
    alignment: HeaderAlignment,

    /// Prefix for columns without a header name
    #[arg(long, default_value = "Column")]
    placeholder_prefix: String,

    /// Sort rows by this column name
    #[arg(long)]
    sort: Option<String>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    descending: bool,

    /// Print JSON instead of a text table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let data = load_grid_data(&cli.input, cli.sheet)
        .with_context(|| format!("Failed to load '{}'", cli.input.display()))?;

    let converter = GridTableConverter::new(Criteria {
        header_alignment: cli.alignment,
        placeholder_prefix: cli.placeholder_prefix.to_owned(),
    });
    let mut sheet = SheetTable::new(Grid::from(&data), cli.name.as_deref(), cli.description.as_deref())
        .with_converter(converter);
    if let Err(error) = sheet.parse() {
        tracing::debug!("Printing partial table after: {}", error);
    }

    let table = sheet.table();
    if table.is_empty() {
        tracing::warn!("Sheet produced an empty table");
        return Ok(());
    }

    let mut view = table.view();
    if let Some(column) = &cli.sort {
        let Some(index) = table.column_index(column) else {
            bail!("Column '{}' not found", column);
        };
        let order = if cli.descending { SortOrder::Descending } else { SortOrder::Ascending };
        view = view.sort_by(index, order);
    }

    let output = if cli.json { to_json(&table, &view)? } else { to_text(&table, &view) };
    io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonTable<'a> {
    name: &'a str,
    description: &'a str,
    columns: &'a [grid_table::Column],
    rows: Vec<&'a [Value]>,
}

fn to_json(table: &TypedTable, view: &View<'_>) -> Result<String> {
    let document = JsonTable {
        name: table.name(),
        description: table.description(),
        columns: table.columns(),
        rows: view.rows().collect(),
    };
    let mut json = serde_json::to_string_pretty(&document).context("Failed to serialize table")?;
    json.push('\n');
    Ok(json)
}

/// Renders a plain text table with a typed header line.
fn to_text(table: &TypedTable, view: &View<'_>) -> String {
    let header: Vec<String> = table
        .columns()
        .iter()
        .map(|column| format!("{} ({})", column.name, column.kind.as_str()))
        .collect();
    let body: Vec<Vec<String>> = view
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    if !table.name().is_empty() {
        output.push_str(&format!("# {}\n", table.name()));
    }
    if !table.description().is_empty() {
        output.push_str(&format!("# {}\n", table.description()));
    }
    push_line(&mut output, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut output, &rule, &widths);
    for row in &body {
        push_line(&mut output, row, &widths);
    }
    output
}

fn push_line(output: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    output.push_str(line.join(" | ").trim_end());
    output.push('\n');
}
