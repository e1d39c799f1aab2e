//! JSON-backed data source

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use inflammation_core::{Error, Result, Table};

use crate::discover::discover_files;
use crate::source::DataSource;

/// One patient's readings as stored in a JSON dataset file
///
/// A dataset file is a JSON array of these records. JSON has no `NaN`
/// literal, so a missing reading is encoded as `null` and decodes to `NaN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub observations: Vec<Option<f64>>,
}

/// Loads all the inflammation JSON files within a specified directory
///
/// Encodes the same logical matrix as the CSV form and round-trips to the
/// same table values for equivalent data.
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    data_dir: PathBuf,
}

impl JsonDataSource {
    /// Create a source reading JSON datasets from `data_dir`
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

impl DataSource for JsonDataSource {
    #[instrument(skip(self), fields(dir = %self.data_dir.display()))]
    fn load_inflammation_data(&self) -> Result<Vec<Table>> {
        let files = discover_files(&self.data_dir, "json")?;
        let mut tables = Vec::with_capacity(files.len());
        for path in &files {
            tables.push(parse_json(path)?);
        }
        debug!(datasets = tables.len(), "loaded JSON inflammation data");
        Ok(tables)
    }
}

fn parse_json(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let records: Vec<PatientRecord> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::parse(path, e.to_string()))?;

    let rows = records
        .into_iter()
        .map(|record| {
            record
                .observations
                .into_iter()
                .map(|value| value.unwrap_or(f64::NAN))
                .collect()
        })
        .collect();

    Table::from_rows(rows).map_err(|e| Error::parse(path, e.to_string()))
}
