//! Wire shape of the spreadsheet API's grid data and the [`Grid`] built from it.
//!
//! Only the fields the converter consumes are modelled; everything else in a
//! `spreadsheets.get` response is ignored during deserialization.
use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::SpreadsheetError;
use serde::Deserialize;
use std::io::Read;

/// Full `spreadsheets.get` response, fetched with grid data included.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    /// Spreadsheet identifier
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
    /// Spreadsheet-level properties (title)
    #[serde(default)]
    pub properties: Option<SpreadsheetProperties>,
    /// Sheets in tab order
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetProperties {
    #[serde(default)]
    pub title: Option<String>,
}

/// One sheet (tab) of a spreadsheet.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    #[serde(default)]
    pub properties: Option<SheetProperties>,
    /// Grid data blocks; empty for charts and other non-grid sheets
    #[serde(default)]
    pub data: Vec<GridData>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default)]
    pub title: Option<String>,
    /// `GRID`, `OBJECT` or `DATA_SOURCE`
    #[serde(default)]
    pub sheet_type: Option<String>,
}

/// A rectangular block of cell data.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridData {
    #[serde(default)]
    pub row_data: Vec<RowData>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    /// Cells of the row; trailing blank cells are omitted by the API
    #[serde(default)]
    pub values: Vec<CellData>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    /// Computed value of the cell, absent for blank cells
    #[serde(default)]
    pub effective_value: Option<ExtendedValue>,
}

/// Effective value with mutually exclusive optional sub-fields.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedValue {
    #[serde(default)]
    pub bool_value: Option<bool>,
    #[serde(default)]
    pub number_value: Option<f64>,
    #[serde(default)]
    pub string_value: Option<String>,
    #[serde(default)]
    pub formula_value: Option<String>,
    #[serde(default)]
    pub error_value: Option<ErrorValue>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorValue {
    /// Error type such as `DIVIDE_BY_ZERO` or `REF`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ExtendedValue {
    /// Renders a value that has none of the typed sub-fields populated.
    pub(crate) fn render(&self) -> String {
        if let Some(error) = &self.error_value {
            match (&error.kind, &error.message) {
                (Some(kind), Some(message)) => format!("{}: {}", kind, message),
                (Some(kind), None) => kind.to_owned(),
                (None, Some(message)) => message.to_owned(),
                (None, None) => String::new(),
            }
        } else if let Some(formula) = &self.formula_value {
            formula.to_owned()
        } else {
            String::new()
        }
    }
}

impl Spreadsheet {
    /// Deserializes a spreadsheet response from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Returns the first grid data block of the sheet at `index`.
    /// Sheets typed as anything but `GRID` never yield grid data.
    pub fn grid(&self, index: usize) -> Result<&GridData, SpreadsheetError> {
        let sheet = self.sheets
            .get(index)
            .ok_or(SpreadsheetError::SheetNotFound { index })?;
        let missing = || SpreadsheetError::MissingGridData { sheet: sheet.title(index) };
        if !sheet.is_grid() {
            return Err(missing());
        }
        sheet.data.first().ok_or_else(missing)
    }
}

impl Sheet {
    /// Returns true unless the sheet declares a non-grid type.
    pub fn is_grid(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|properties| properties.sheet_type.as_deref())
            .map_or(true, |sheet_type| sheet_type == "GRID")
    }

    /// Returns the sheet title, or a positional name when it has none.
    pub fn title(&self, index: usize) -> String {
        self.properties
            .as_ref()
            .and_then(|properties| properties.title.to_owned())
            .unwrap_or_else(|| format!("Sheet{}", index + 1))
    }
}

/// Ordered rows of cells, possibly ragged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::new(rows)
    }
}

impl From<&GridData> for Grid {
    fn from(data: &GridData) -> Self {
        let rows = data.row_data
            .iter()
            .map(|row| row.values.iter().map(Cell::from).collect())
            .collect();
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RESPONSE: &str = r#"{
        "spreadsheetId": "abc",
        "properties": { "title": "Inventory" },
        "sheets": [
            {
                "properties": { "title": "Items", "sheetType": "GRID" },
                "data": [{
                    "rowData": [
                        { "values": [
                            { "effectiveValue": { "stringValue": "Name" }, "formattedValue": "Name" },
                            { "effectiveValue": { "stringValue": "Count" } }
                        ]},
                        { "values": [
                            { "effectiveValue": { "stringValue": "Bolt" } },
                            { "effectiveValue": { "numberValue": 12 } }
                        ]},
                        {},
                        { "values": [
                            { "effectiveValue": { "boolValue": true } },
                            { "effectiveValue": { "errorValue": { "type": "REF", "message": "Bad ref" } } },
                            {}
                        ]}
                    ]
                }]
            },
            { "properties": { "title": "Chart", "sheetType": "OBJECT" } },
            {
                "properties": { "title": "Source", "sheetType": "DATA_SOURCE" },
                "data": [{ "rowData": [{ "values": [{ "effectiveValue": { "stringValue": "A" } }] }] }]
            }
        ]
    }"#;

    #[test]
    fn grid_from_response() {
        let spreadsheet = Spreadsheet::from_reader(RESPONSE.as_bytes()).unwrap();
        assert_eq!(spreadsheet.spreadsheet_id.as_deref(), Some("abc"));
        assert_eq!(spreadsheet.sheets[0].title(0), "Items");

        let grid = Grid::from(spreadsheet.grid(0).unwrap());
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.rows()[0], vec![Cell::from("Name"), Cell::from("Count")]);
        assert_eq!(grid.rows()[1], vec![Cell::from("Bolt"), Cell::Number(12.0)]);
        assert!(grid.rows()[2].is_empty());
        assert_eq!(grid.rows()[3], vec![
            Cell::Boolean(true),
            Cell::Unrepresented("REF: Bad ref".to_owned()),
            Cell::blank(),
        ]);
    }

    #[test]
    fn grid_missing_sheet_or_data() {
        let spreadsheet = Spreadsheet::from_reader(RESPONSE.as_bytes()).unwrap();
        assert!(matches!(
            spreadsheet.grid(1),
            Err(SpreadsheetError::MissingGridData { sheet }) if sheet == "Chart"
        ));
        assert!(!spreadsheet.sheets[2].is_grid());
        assert!(matches!(
            spreadsheet.grid(2),
            Err(SpreadsheetError::MissingGridData { sheet }) if sheet == "Source"
        ));
        assert!(spreadsheet.sheets[0].is_grid());
        assert!(matches!(
            spreadsheet.grid(5),
            Err(SpreadsheetError::SheetNotFound { index: 5 })
        ));
    }
}
