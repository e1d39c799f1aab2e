//! Spread statistics for 1D series

use inflammation_core::{Error, Result};

/// Calculate the population standard deviation of a 1D series
///
/// Divides by N rather than N - 1. Fails with `InsufficientData` on an
/// empty series; `NaN` elements propagate into the result.
pub fn std_dev(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(Error::empty_input("standard deviation"));
    }

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series
        .iter()
        .map(|x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    Ok(variance.sqrt())
}
