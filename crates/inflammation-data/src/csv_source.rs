//! CSV-backed data source

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use inflammation_core::{Error, Result, Table};

use crate::discover::discover_files;
use crate::source::DataSource;

/// Loads all the inflammation CSV files within a specified directory
///
/// Dataset files are comma-delimited numeric matrices with no header row:
/// one row per patient, one column per day. `NaN` spellings are accepted as
/// the missing-reading sentinel.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    data_dir: PathBuf,
}

impl CsvDataSource {
    /// Create a source reading CSV datasets from `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get the directory this source scans
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl DataSource for CsvDataSource {
    #[instrument(skip(self), fields(dir = %self.data_dir.display()))]
    fn load_inflammation_data(&self) -> Result<Vec<Table>> {
        let files = discover_files(&self.data_dir, "csv")?;
        let mut tables = Vec::with_capacity(files.len());
        for path in &files {
            tables.push(parse_csv(path)?);
        }
        debug!(datasets = tables.len(), "loaded CSV inflammation data");
        Ok(tables)
    }
}

/// Parse one field as a reading
pub(crate) fn parse_reading(field: &str) -> Result<f64> {
    field
        .parse()
        .map_err(|_| Error::type_mismatch("a number", format!("{field:?}")))
}

fn parse_csv(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // The csv reader itself rejects ragged records
        let record = record.map_err(|e| Error::parse(path, format!("row {}: {e}", i + 1)))?;
        let row = record
            .iter()
            .map(parse_reading)
            .collect::<Result<Vec<f64>>>()
            .map_err(|e| Error::parse(path, format!("row {}: {e}", i + 1)))?;
        rows.push(row);
    }

    Table::from_rows(rows).map_err(|e| Error::parse(path, e.to_string()))
}
