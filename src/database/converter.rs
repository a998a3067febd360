//! # Grid to Typed Table Conversion
//!
//! Row 0 of a grid names the columns, row 1 types them by example, and every
//! row from 1 onward (the type-sample row included) becomes a data row.
//! Values are taken as they are: a data row whose cell disagrees with the
//! inferred column type keeps its own value.
use crate::database::column::Column;
use crate::database::column::ColumnType;
use crate::database::table::TypedTable;
use crate::database::table::Value;
use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::cell::CellType;
use crate::spreadsheet::criteria::Criteria;
use crate::spreadsheet::criteria::HeaderAlignment;
use crate::spreadsheet::grid::Grid;
use std::cmp::max;
use thiserror::Error;

/// Conversion failures. The table built up to the failure is kept by the
/// in-place [`GridTableConverter::populate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Grid lacks either the header row or the type-sample row
    #[error("Sheet does not seem to contain a header row and at least one data row")]
    MissingHeaderOrDataRow { rows: usize },

    /// A data row carries more values than there are columns
    #[error("Row {row} has {found} values but the table has {expected} columns")]
    RaggedRow { row: usize, expected: usize, found: usize },
}

/// Non-fatal findings reported while building columns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionWarning {
    #[error("Data type of column {column} is not accounted for. Defaulting to object")]
    UnclassifiedCellType { column: usize },

    #[error("Header '{name}' of column {column} has no type sample and was dropped")]
    DroppedHeader { column: usize, name: String },

    #[error("Column {column} has no header name, using '{placeholder}'")]
    MissingHeader { column: usize, placeholder: String },

    #[error("Header '{name}' of column {column} has no type sample. Defaulting to object")]
    UntypedHeader { column: usize, name: String },
}

/// A converted table with the warnings raised along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub table: TypedTable,
    pub warnings: Vec<ConversionWarning>,
}

/// Converts grids into typed tables according to its [`Criteria`].
#[derive(Clone, Debug, Default)]
pub struct GridTableConverter {
    criteria: Criteria,
}

impl GridTableConverter {
    pub fn new(criteria: Criteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Converts `grid` into a typed table named `name`.
    pub fn convert(&self, grid: &Grid, name: &str, description: &str) -> Result<TypedTable, ConversionError> {
        self.convert_with_warnings(grid, name, description)
            .map(|conversion| conversion.table)
    }

    /// Same as [`convert`](Self::convert) but also hands back the warnings.
    pub fn convert_with_warnings(&self, grid: &Grid, name: &str, description: &str) -> Result<Conversion, ConversionError> {
        let mut table = TypedTable::new(name, description);
        let mut warnings = Vec::new();
        self.populate(grid, &mut table, &mut warnings)?;
        Ok(Conversion { table, warnings })
    }

    /// Fills `table` from `grid` in place. On failure `table` holds whatever
    /// was built before the failing step: columns without rows, or a prefix
    /// of the rows. Failures are logged before they are returned.
    pub fn populate(
        &self,
        grid: &Grid,
        table: &mut TypedTable,
        warnings: &mut Vec<ConversionWarning>,
    ) -> Result<(), ConversionError> {
        self.fill(grid, table, warnings).map_err(|error| {
            log_failure(&error);
            error
        })
    }

    fn fill(
        &self,
        grid: &Grid,
        table: &mut TypedTable,
        warnings: &mut Vec<ConversionWarning>,
    ) -> Result<(), ConversionError> {
        let rows = grid.rows();
        let (header, sample) = match rows {
            [header, sample, ..] => (header, sample),
            _ => return Err(ConversionError::MissingHeaderOrDataRow { rows: rows.len() }),
        };

        let reported = warnings.len();
        table.columns = self.columns(header, sample, warnings);
        for warning in &warnings[reported..] {
            tracing::warn!("{}", warning);
        }

        let width = table.columns.len();
        for (index, cells) in rows.iter().enumerate().skip(1) {
            if cells.len() > width {
                return Err(ConversionError::RaggedRow {
                    row: index,
                    expected: width,
                    found: cells.len(),
                });
            }
            let mut values: Vec<Value> = cells.iter().map(Value::from).collect();
            values.resize(width, Value::Empty);
            table.rows.push(values);
        }

        tracing::debug!(
            table = table.name.as_str(),
            columns = table.columns.len(),
            rows = table.rows.len(),
            "Converted grid"
        );
        Ok(())
    }

    /// Pairs header names with the types of the type-sample row.
    fn columns(&self, header: &[Cell], sample: &[Cell], warnings: &mut Vec<ConversionWarning>) -> Vec<Column> {
        let width = match self.criteria.header_alignment {
            HeaderAlignment::TypeSampleRow => sample.len(),
            HeaderAlignment::Widest => max(header.len(), sample.len()),
        };

        let mut columns = Vec::with_capacity(width);
        for index in 0..width {
            let name = match header.get(index).map(ToString::to_string) {
                Some(name) if !name.is_empty() => name,
                _ => {
                    let placeholder = self.criteria.placeholder(index);
                    warnings.push(ConversionWarning::MissingHeader {
                        column: index,
                        placeholder: placeholder.to_owned(),
                    });
                    placeholder
                }
            };
            let kind = match sample.get(index).map(Cell::kind) {
                Some(CellType::Unrepresented) => {
                    warnings.push(ConversionWarning::UnclassifiedCellType { column: index });
                    ColumnType::Object
                }
                Some(cell_type) => ColumnType::from(cell_type),
                None => {
                    warnings.push(ConversionWarning::UntypedHeader {
                        column: index,
                        name: name.to_owned(),
                    });
                    ColumnType::Object
                }
            };
            columns.push(Column::new(name, kind));
        }

        for (index, cell) in header.iter().enumerate().skip(width) {
            warnings.push(ConversionWarning::DroppedHeader {
                column: index,
                name: cell.to_string(),
            });
        }
        columns
    }
}

/// Converts without failing: problems are logged and the table is returned
/// as far as it got. An undersized grid yields an empty table.
pub fn convert_lenient(converter: &GridTableConverter, grid: &Grid, name: &str, description: &str) -> TypedTable {
    let mut table = TypedTable::new(name, description);
    let mut warnings = Vec::new();
    // Already logged by populate.
    let _ = converter.populate(grid, &mut table, &mut warnings);
    table
}

/// Logs a conversion error at the level matching its severity.
fn log_failure(error: &ConversionError) {
    match error {
        ConversionError::MissingHeaderOrDataRow { .. } => tracing::warn!("{}", error),
        ConversionError::RaggedRow { .. } => tracing::error!("{}", error),
    }
}
