//! The data-source contract and construction-time format selection

use std::path::PathBuf;

use inflammation_core::{Result, Table};

use crate::csv_source::CsvDataSource;
use crate::json_source::JsonDataSource;

/// A source of inflammation datasets
///
/// Implementations own the directory they scan. Loading is synchronous and
/// sequential: files are parsed one at a time in discovery order, and any
/// failure aborts the whole call with no partial result.
pub trait DataSource {
    /// Load every dataset the source can discover, one table per file
    ///
    /// Fails with `NoDataFound` (naming the searched directory) when no
    /// files match the dataset pattern. Each call re-scans the directory;
    /// nothing is cached between calls.
    fn load_inflammation_data(&self) -> Result<Vec<Table>>;
}

/// On-disk format a data source reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-delimited numeric matrix, no header row
    Csv,
    /// Array of patient records with an `observations` field
    Json,
}

/// Construct a data source reading `format` files from `data_dir`
pub fn data_source_for(format: SourceFormat, data_dir: impl Into<PathBuf>) -> Box<dyn DataSource> {
    match format {
        SourceFormat::Csv => Box::new(CsvDataSource::new(data_dir)),
        SourceFormat::Json => Box::new(JsonDataSource::new(data_dir)),
    }
}
