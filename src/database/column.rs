use crate::spreadsheet::cell::CellType;
use serde::Serialize;

/// Data type of a column, inferred from the type-sample row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Boolean values (true/false)
    Boolean,
    /// Double-precision floating point numbers
    Number,
    /// Strings
    Text,
    /// Untyped column, holds whatever the rows carry
    Object,
}

/// A column of a typed table with name and data type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Column {
    /// Column name (from header row or positional placeholder)
    pub name: String,
    /// Column data type
    pub kind: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnType) -> Self {
        Self { name: name.into(), kind }
    }
}

impl ColumnType {
    /// Returns the string representation of the column type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "bool",
            ColumnType::Number => "double",
            ColumnType::Text => "string",
            ColumnType::Object => "object",
        }
    }

    /// Infers column type from the tag of a type-sample cell.
    pub const fn from(cell_type: CellType) -> Self {
        match cell_type {
            CellType::Boolean => ColumnType::Boolean,
            CellType::Number => ColumnType::Number,
            CellType::Text => ColumnType::Text,
            CellType::Unrepresented => ColumnType::Object,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_type_from_cell_type() {
        assert_eq!(ColumnType::from(CellType::Boolean), ColumnType::Boolean);
        assert_eq!(ColumnType::from(CellType::Number), ColumnType::Number);
        assert_eq!(ColumnType::from(CellType::Text), ColumnType::Text);
        assert_eq!(ColumnType::from(CellType::Unrepresented), ColumnType::Object);
    }
}
