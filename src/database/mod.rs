//! # Typed Table Module
//!
//! Column definitions, typed rows, views and the conversion from grids.
pub mod binding;
pub mod column;
pub mod converter;
pub mod table;
pub mod view;
