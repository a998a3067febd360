//! # Spreadsheet Input Module
//!
//! Models the grid data returned by a spreadsheet read and loads it from saved
//! JSON responses. Fetching the response is left to the caller; this module
//! only needs the already-materialized document.
pub mod cell;
pub mod criteria;
pub mod grid;

use crate::error::ResultMessage;
use crate::error::GridTableError;
use crate::spreadsheet::grid::GridData;
use crate::spreadsheet::grid::Spreadsheet;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Errors raised while selecting grid data out of a spreadsheet document.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// Requested sheet index is past the last sheet
    #[error("Sheet {index} not found")]
    SheetNotFound { index: usize },

    /// Sheet exists but carries no grid data (charts, pivot-only sheets)
    #[error("Sheet '{sheet}' has no grid data")]
    MissingGridData { sheet: String },
}

/// Opens a saved spreadsheet response.
pub fn load_spreadsheet<P: AsRef<Path>>(path: P) -> Result<Spreadsheet, GridTableError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(GridTableError::from).with_prefix(&path.display().to_string())?;
    let spreadsheet = Spreadsheet::from_reader(BufReader::new(file))
        .map_err(GridTableError::from)
        .with_prefix(&path.display().to_string())?;
    Ok(spreadsheet)
}

/// Loads grid data from a file holding either a full spreadsheet response or
/// a bare grid data object. `sheet` selects the sheet of a full response.
pub fn load_grid_data<P: AsRef<Path>>(path: P, sheet: usize) -> Result<GridData, GridTableError> {
    let path = path.as_ref();
    let prefix = path.display().to_string();
    let file = File::open(path).map_err(GridTableError::from).with_prefix(&prefix)?;
    let document: Value = serde_json::from_reader(BufReader::new(file))
        .map_err(GridTableError::from)
        .with_prefix(&prefix)?;
    if document.get("rowData").is_some() {
        let data = serde_json::from_value(document).map_err(GridTableError::from).with_prefix(&prefix)?;
        return Ok(data);
    }
    let spreadsheet: Spreadsheet = serde_json::from_value(document)
        .map_err(GridTableError::from)
        .with_prefix(&prefix)?;
    let data = spreadsheet.grid(sheet)
        .map_err(GridTableError::from)
        .with_prefix(&prefix)?;
    Ok(data.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::grid::Grid;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_bare_grid_data() {
        let file = write(r#"{ "rowData": [
            { "values": [{ "effectiveValue": { "stringValue": "A" } }] },
            { "values": [{ "effectiveValue": { "numberValue": 1 } }] }
        ]}"#);
        let data = load_grid_data(file.path(), 0).unwrap();
        assert_eq!(Grid::from(&data).row_count(), 2);
    }

    #[test]
    fn load_full_response() {
        let file = write(r#"{ "sheets": [
            { "data": [{ "rowData": [{ "values": [{ "effectiveValue": { "stringValue": "A" } }] }] }] }
        ]}"#);
        let data = load_grid_data(file.path(), 0).unwrap();
        assert_eq!(Grid::from(&data).row_count(), 1);

        let spreadsheet = load_spreadsheet(file.path()).unwrap();
        assert_eq!(spreadsheet.sheets.len(), 1);
    }

    #[test]
    fn load_reports_path_and_cause() {
        let file = write(r#"{ "sheets": [] }"#);
        let message = load_grid_data(file.path(), 2).unwrap_err().to_string();
        assert!(message.starts_with(&file.path().display().to_string()));
        assert!(message.ends_with("Sheet 2 not found"));

        let file = write("not json");
        assert!(load_grid_data(file.path(), 0).is_err());
    }
}
