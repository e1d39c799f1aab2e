//! Pluggable data sources for inflammation datasets
//!
//! A [`DataSource`] discovers dataset files in a directory it owns and
//! parses each one into an [`inflammation_core::Table`]. Two interchangeable
//! implementations are provided, CSV-backed and JSON-backed; callers depend
//! only on [`DataSource::load_inflammation_data`] and never inspect file
//! extensions themselves.
//!
//! # Example
//!
//! ```rust,ignore
//! use inflammation_data::{data_source_for, SourceFormat};
//!
//! let source = data_source_for(SourceFormat::Csv, "/data/trial-02");
//! let tables = source.load_inflammation_data()?;
//! ```

mod csv_source;
mod discover;
mod json_source;
mod source;

pub use csv_source::CsvDataSource;
pub use json_source::{JsonDataSource, PatientRecord};
pub use source::{data_source_for, DataSource, SourceFormat};
