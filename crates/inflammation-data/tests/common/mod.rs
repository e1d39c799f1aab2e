//! Common test utilities for inflammation-data tests

use std::fs;
use std::path::Path;

/// Write a dataset fixture with the given name and contents
pub fn write_fixture(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Collect a table into per-patient rows for easy comparison
pub fn rows_of(table: &inflammation_core::Table) -> Vec<Vec<f64>> {
    table.rows().map(|row| row.to_vec()).collect()
}
