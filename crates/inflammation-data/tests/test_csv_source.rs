//! Tests for the CSV-backed data source

mod common;

use common::{rows_of, write_fixture};
use inflammation_core::Error;
use inflammation_data::{CsvDataSource, DataSource};
use tempfile::TempDir;

#[test]
fn test_load_csv_datasets_in_sorted_order() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "inflammation-02.csv", "5,6\n7,8\n");
    write_fixture(dir.path(), "inflammation-01.csv", "1,2\n3,4\n");

    let source = CsvDataSource::new(dir.path());
    let tables = source.load_inflammation_data().unwrap();

    assert_eq!(tables.len(), 2);
    assert_eq!(rows_of(&tables[0]), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(rows_of(&tables[1]), vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
}

#[test]
fn test_load_ignores_other_files() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "inflammation-01.csv", "1,2\n");
    write_fixture(dir.path(), "readings.csv", "not,a,dataset\n");
    write_fixture(dir.path(), "inflammation-notes.txt", "free text\n");

    let source = CsvDataSource::new(dir.path());
    let tables = source.load_inflammation_data().unwrap();
    assert_eq!(tables.len(), 1);
}

#[test]
fn test_no_matching_files_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "readings.csv", "1,2\n");

    let source = CsvDataSource::new(dir.path());
    let err = source.load_inflammation_data().unwrap_err();
    match err {
        Error::NoDataFound { dir: searched } => assert_eq!(searched, dir.path()),
        _ => panic!("Wrong error type"),
    }
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let source = CsvDataSource::new(dir.path().join("does-not-exist"));
    assert!(matches!(
        source.load_inflammation_data().unwrap_err(),
        Error::Io(_)
    ));
}

#[test]
fn test_non_numeric_token_names_file_and_row() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "inflammation-01.csv", "1,2\n3,oops\n");

    let source = CsvDataSource::new(dir.path());
    let err = source.load_inflammation_data().unwrap_err();
    match err {
        Error::Parse { file, message } => {
            assert!(file.ends_with("inflammation-01.csv"));
            assert!(message.contains("row 2"));
            assert!(message.contains("oops"));
        }
        _ => panic!("Wrong error type"),
    }
}

#[test]
fn test_ragged_row_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "inflammation-01.csv", "1,2,3\n4,5\n");

    let source = CsvDataSource::new(dir.path());
    let err = source.load_inflammation_data().unwrap_err();
    match err {
        Error::Parse { file, message } => {
            assert!(file.ends_with("inflammation-01.csv"));
            assert!(message.contains("row 2"));
        }
        _ => panic!("Wrong error type"),
    }
}

#[test]
fn test_one_bad_file_aborts_the_whole_load() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "inflammation-01.csv", "1,2\n");
    write_fixture(dir.path(), "inflammation-02.csv", "bad\n");

    let source = CsvDataSource::new(dir.path());
    assert!(source.load_inflammation_data().is_err());
}

#[test]
fn test_nan_token_becomes_missing_reading() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "inflammation-01.csv", "1,NaN\n");

    let source = CsvDataSource::new(dir.path());
    let tables = source.load_inflammation_data().unwrap();
    assert_eq!(tables[0].get(0, 0), 1.0);
    assert!(tables[0].get(0, 1).is_nan());
}
