//! # Grid Table
//!
//! Converts the grid data returned by a spreadsheet read into a strongly-typed
//! table: column names come from the header row, column types are inferred
//! from the type-sample row, and every row from the type-sample row onward is
//! materialized as a typed data row.
//!
//! ## Features
//!
//! - **Grid input**: deserializes the spreadsheet API's grid data JSON, either
//!   a full `spreadsheets.get` response or a bare grid data block
//! - **Type inference**: boolean, number and text columns, with an untyped
//!   object fallback for errors and blank type samples
//! - **Explicit alignment policy**: header and type-sample rows of different
//!   lengths are reconciled by [`HeaderAlignment`]
//! - **Strict or lenient**: [`GridTableConverter::convert`] returns a typed
//!   error, while [`SheetTable::parse`] logs and keeps a partial table
//! - **Views and change notification**: sorted / filtered projections and
//!   subscriber callbacks on table replacement
//!
//! ## Example
//!
//! ```
//! use grid_table::{Cell, Grid, GridTableConverter};
//!
//! let grid = Grid::from(vec![
//!     vec![Cell::from("Name"), Cell::from("Active")],
//!     vec![Cell::from("Alice"), Cell::Boolean(true)],
//! ]);
//! let table = GridTableConverter::default().convert(&grid, "people", "").unwrap();
//! assert_eq!(table.columns()[1].name, "Active");
//! ```
pub mod database;
pub mod error;
pub mod spreadsheet;

pub use crate::database::binding::Property;
pub use crate::database::binding::SheetTable;
pub use crate::database::binding::SubscriptionId;
pub use crate::database::column::Column;
pub use crate::database::column::ColumnType;
pub use crate::database::converter::convert_lenient;
pub use crate::database::converter::Conversion;
pub use crate::database::converter::ConversionError;
pub use crate::database::converter::ConversionWarning;
pub use crate::database::converter::GridTableConverter;
pub use crate::database::table::TypedTable;
pub use crate::database::table::Value;
pub use crate::database::view::SortOrder;
pub use crate::database::view::View;
pub use crate::error::GridTableError;
pub use crate::spreadsheet::cell::Cell;
pub use crate::spreadsheet::cell::CellType;
pub use crate::spreadsheet::criteria::Criteria;
pub use crate::spreadsheet::criteria::HeaderAlignment;
pub use crate::spreadsheet::grid::Grid;
pub use crate::spreadsheet::load_grid_data;
pub use crate::spreadsheet::load_spreadsheet;
