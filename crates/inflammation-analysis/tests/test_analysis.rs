//! Tests for the cross-dataset analysis

use std::cell::RefCell;
use std::fs;

use approx::assert_relative_eq;
use inflammation_analysis::{
    analyse_data, GraphData, NullVisualizer, Visualizer, STANDARD_DEVIATION_BY_DAY,
};
use inflammation_core::{Error, Result, Table};
use inflammation_data::{CsvDataSource, DataSource};
use tempfile::TempDir;

/// Serves canned tables in place of a directory scan
struct StubDataSource {
    tables: Vec<Vec<Vec<f64>>>,
}

impl DataSource for StubDataSource {
    fn load_inflammation_data(&self) -> Result<Vec<Table>> {
        self.tables.iter().cloned().map(Table::from_rows).collect()
    }
}

/// Fails every load, standing in for an empty data directory
struct FailingDataSource;

impl DataSource for FailingDataSource {
    fn load_inflammation_data(&self) -> Result<Vec<Table>> {
        Err(Error::no_data_found("/data/empty"))
    }
}

/// Records the graph data it is asked to render
#[derive(Default)]
struct RecordingVisualizer {
    rendered: RefCell<Vec<GraphData>>,
}

impl Visualizer for RecordingVisualizer {
    fn render(&self, graphs: &GraphData) {
        self.rendered.borrow_mut().push(graphs.clone());
    }
}

#[test]
fn test_analyse_data_stub_source() {
    let source = StubDataSource {
        tables: vec![vec![vec![0.0, 2.0, 0.0]], vec![vec![0.0, 1.0, 0.0]]],
    };

    let result = analyse_data(&source, &NullVisualizer).unwrap();

    assert_eq!(result.len(), 3);
    assert_relative_eq!(result[0], 0.0, epsilon = 1e-6);
    assert_relative_eq!(result[1], 0.25f64.sqrt(), epsilon = 1e-6);
    assert_relative_eq!(result[2], 0.0, epsilon = 1e-6);
}

#[test]
fn test_analyse_data_hands_named_series_to_visualizer() {
    let source = StubDataSource {
        tables: vec![vec![vec![0.0, 2.0, 0.0]], vec![vec![0.0, 1.0, 0.0]]],
    };
    let visualizer = RecordingVisualizer::default();

    let result = analyse_data(&source, &visualizer).unwrap();

    let rendered = visualizer.rendered.borrow();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].len(), 1);
    assert_eq!(rendered[0][STANDARD_DEVIATION_BY_DAY], result);
}

#[test]
fn test_analyse_data_propagates_source_failure() {
    let err = analyse_data(&FailingDataSource, &NullVisualizer).unwrap_err();
    match err {
        Error::NoDataFound { dir } => assert!(dir.ends_with("empty")),
        _ => panic!("Wrong error type"),
    }
}

#[test]
fn test_analyse_data_rejects_unequal_day_counts() {
    let source = StubDataSource {
        tables: vec![vec![vec![0.0, 2.0, 0.0]], vec![vec![0.0, 1.0]]],
    };

    let err = analyse_data(&source, &NullVisualizer).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_analyse_data_from_csv_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("inflammation-01.csv"), "0,2,0\n").unwrap();
    fs::write(dir.path().join("inflammation-02.csv"), "0,1,0\n").unwrap();

    let source = CsvDataSource::new(dir.path());
    let result = analyse_data(&source, &NullVisualizer).unwrap();

    assert_relative_eq!(result[0], 0.0, epsilon = 1e-6);
    assert_relative_eq!(result[1], 0.5, epsilon = 1e-6);
    assert_relative_eq!(result[2], 0.0, epsilon = 1e-6);
}
