use crate::spreadsheet::grid::CellData;
use crate::spreadsheet::grid::ExtendedValue;
use std::fmt::Display;

/// Tag of a cell's effective value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellType {
    /// Boolean values (true/false)
    Boolean,
    /// Double-precision numbers
    Number,
    /// String values
    Text,
    /// Errors, formulas without a computed value and blank cells
    Unrepresented,
}

impl CellType {
    /// Returns the lowercase name of the tag, used in diagnostics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CellType::Boolean => "boolean",
            CellType::Number => "number",
            CellType::Text => "text",
            CellType::Unrepresented => "unrepresented",
        }
    }
}

/// A single cell of a grid with exactly one populated effective value.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Boolean(bool),
    Number(f64),
    Text(String),
    /// Any other effective value, carrying its string rendering.
    Unrepresented(String),
}

impl Cell {
    /// Returns the tag of this cell.
    pub fn kind(&self) -> CellType {
        match self {
            Cell::Boolean(_) => CellType::Boolean,
            Cell::Number(_) => CellType::Number,
            Cell::Text(_) => CellType::Text,
            Cell::Unrepresented(_) => CellType::Unrepresented,
        }
    }

    /// Shorthand for a blank cell.
    pub fn blank() -> Self {
        Cell::Unrepresented(String::new())
    }
}

impl From<&ExtendedValue> for Cell {
    /// Picks the first populated sub-field in boolean, number, string order.
    fn from(value: &ExtendedValue) -> Self {
        if let Some(value) = value.bool_value {
            Cell::Boolean(value)
        } else if let Some(value) = value.number_value {
            Cell::Number(value)
        } else if let Some(value) = &value.string_value {
            Cell::Text(value.to_owned())
        } else {
            Cell::Unrepresented(value.render())
        }
    }
}

impl From<&CellData> for Cell {
    fn from(data: &CellData) -> Self {
        data.effective_value
            .as_ref()
            .map(Cell::from)
            .unwrap_or_else(Cell::blank)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Boolean(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Boolean(value) => write!(f, "{}", if *value { "TRUE" } else { "FALSE" }),
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Text(value) | Cell::Unrepresented(value) => write!(f, "{}", value),
        }
    }
}
