//! Core types for inflammation data analysis
//!
//! This crate provides the data model shared by the inflammation workspace:
//! the rectangular [`Table`] of per-patient readings and the unified
//! [`Error`] type every other crate reports through.
//!
//! A table holds one row per patient and one column per day. Values are
//! `f64`, with `NaN` as the missing-reading sentinel; a table is never
//! mutated after construction.

pub mod error;
pub mod table;

pub use error::{Error, Result};
pub use table::Table;
