use crate::database::column::Column;
use crate::database::view::View;
use crate::spreadsheet::cell::Cell;
use serde::Serialize;
use std::fmt::Display;

/// A typed value of a table row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Number(f64),
    Text(String),
    /// String rendering of a cell without a boolean, number or string value
    Rendered(String),
    /// Padding for a row shorter than the column list
    Empty,
}

impl From<&Cell> for Value {
    fn from(cell: &Cell) -> Self {
        match cell {
            Cell::Boolean(value) => Value::Boolean(*value),
            Cell::Number(value) => Value::Number(*value),
            Cell::Text(value) => Value::Text(value.to_owned()),
            other => Value::Rendered(other.to_string()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(value) => write!(f, "{}", if *value { "TRUE" } else { "FALSE" }),
            Value::Number(value) => write!(f, "{}", value),
            Value::Text(value) | Value::Rendered(value) => write!(f, "{}", value),
            Value::Empty => Ok(()),
        }
    }
}

/// Typed table produced from a grid: column definitions plus positionally
/// aligned rows. Every row holds exactly one value per column.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TypedTable {
    /// Table name
    pub(crate) name: String,
    /// Free-form description
    pub(crate) description: String,
    /// Column definitions, fixed once inferred
    pub(crate) columns: Vec<Column>,
    /// Data rows in source order
    pub(crate) rows: Vec<Vec<Value>>,
}

impl TypedTable {
    /// Creates a table with metadata only.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Index of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|values| values.get(col))
    }

    /// Returns true when neither columns nor rows are populated.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Returns an unsorted, unfiltered view over all rows.
    pub fn view(&self) -> View<'_> {
        View::new(self)
    }
}
