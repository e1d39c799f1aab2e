//! Daily aggregate statistics across patients
//!
//! Each function reduces one column (day) at a time across all patients
//! and returns a series with one value per day. Missing readings (`NaN`)
//! propagate into the affected day's aggregate; nothing is masked.

use inflammation_core::Table;

/// Calculate the mean inflammation for each day across all patients
pub fn daily_mean(table: &Table) -> Vec<f64> {
    let patients = table.patients() as f64;
    (0..table.days())
        .map(|day| table.column(day).sum::<f64>() / patients)
        .collect()
}

/// Calculate the maximum inflammation for each day across all patients
pub fn daily_max(table: &Table) -> Vec<f64> {
    (0..table.days())
        .map(|day| table.column(day).fold(f64::NEG_INFINITY, propagating_max))
        .collect()
}

/// Calculate the minimum inflammation for each day across all patients
pub fn daily_min(table: &Table) -> Vec<f64> {
    (0..table.days())
        .map(|day| table.column(day).fold(f64::INFINITY, propagating_min))
        .collect()
}

/// Calculate the population standard deviation for each day across all patients
pub fn daily_std_dev(table: &Table) -> Vec<f64> {
    let patients = table.patients() as f64;
    (0..table.days())
        .map(|day| {
            let mean = table.column(day).sum::<f64>() / patients;
            let variance = table
                .column(day)
                .map(|x| {
                    let diff = x - mean;
                    diff * diff
                })
                .sum::<f64>()
                / patients;
            variance.sqrt()
        })
        .collect()
}

// f64::max/min would skip NaN; a missing reading must poison the whole day.
fn propagating_max(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else if x > acc {
        x
    } else {
        acc
    }
}

fn propagating_min(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else if x < acc {
        x
    } else {
        acc
    }
}
