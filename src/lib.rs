//! Inflammation dataset analysis
//!
//! Ingests per-patient inflammation time series from a directory of dataset
//! files, computes per-day aggregate statistics across patients, normalizes
//! patient rows against their own peak, and reduces a whole collection of
//! datasets to a single standard-deviation-by-day series.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`inflammation_core`] — the rectangular [`Table`] model and [`Error`]
//! - [`inflammation_stats`] — pure statistics over a single table
//! - [`inflammation_data`] — pluggable CSV/JSON [`DataSource`]s
//! - [`inflammation_analysis`] — the cross-dataset [`analyse_data`] routine
//!
//! # Example
//!
//! ```rust,ignore
//! use inflammation::{analyse_data, CsvDataSource, NullVisualizer};
//!
//! let source = CsvDataSource::new("/data/trial-02");
//! let std_dev_by_day = analyse_data(&source, &NullVisualizer)?;
//! ```

pub use inflammation_analysis::{
    analyse_data, GraphData, NullVisualizer, Visualizer, STANDARD_DEVIATION_BY_DAY,
};
pub use inflammation_core::{Error, Result, Table};
pub use inflammation_data::{
    data_source_for, CsvDataSource, DataSource, JsonDataSource, PatientRecord, SourceFormat,
};
pub use inflammation_stats::{
    daily_max, daily_mean, daily_min, daily_std_dev, patient_normalise, std_dev,
};
