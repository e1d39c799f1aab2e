//! Rectangular tables of per-patient inflammation readings

use std::fmt;

use crate::error::{Error, Result};

/// A rectangular table of inflammation readings
///
/// Each row holds one patient's readings over a number of days and each
/// column holds a single day's readings across all patients. Values are
/// stored row-major; `NaN` marks a missing reading and may appear anywhere.
///
/// Rectangularity is enforced at construction, so every accessor can assume
/// all rows share the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Row-major cell values
    values: Vec<f64>,
    /// Number of patients (rows)
    patients: usize,
    /// Number of days (columns)
    days: usize,
}

impl Table {
    /// Build a table from per-patient rows
    ///
    /// Fails with `ShapeMismatch` when rows are ragged (naming the offending
    /// row) and with `InsufficientData` when there are no rows or no days.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let days = match rows.first() {
            Some(first) => first.len(),
            None => return Err(Error::empty_input("table construction")),
        };
        if days == 0 {
            return Err(Error::empty_input("table construction"));
        }

        let mut values = Vec::with_capacity(rows.len() * days);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != days {
                return Err(Error::shape_mismatch(days, row.len(), &format!("row {i}")));
            }
            values.extend_from_slice(row);
        }

        Ok(Self {
            values,
            patients: rows.len(),
            days,
        })
    }

    /// Get the number of patients (rows)
    pub fn patients(&self) -> usize {
        self.patients
    }

    /// Get the number of days (columns)
    pub fn days(&self) -> usize {
        self.days
    }

    /// Get a single reading
    ///
    /// Panics if `patient` or `day` is out of bounds.
    pub fn get(&self, patient: usize, day: usize) -> f64 {
        assert!(patient < self.patients && day < self.days);
        self.values[patient * self.days + day]
    }

    /// Get one patient's readings
    ///
    /// Panics if `patient` is out of bounds.
    pub fn row(&self, patient: usize) -> &[f64] {
        &self.values[patient * self.days..(patient + 1) * self.days]
    }

    /// Iterate over patients, one row slice each
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.days)
    }

    /// Iterate over one day's readings across all patients
    ///
    /// Panics if `day` is out of bounds.
    pub fn column(&self, day: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(day < self.days);
        self.values.iter().skip(day).step_by(self.days).copied()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table({} patients x {} days)", self.patients, self.days)
    }
}
