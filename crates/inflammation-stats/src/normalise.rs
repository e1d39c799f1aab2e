//! Per-patient normalization

use inflammation_core::{Error, Result, Table};

/// Rescale each patient's readings by that patient's own peak value
///
/// The per-row maximum ignores missing (`NaN`) readings. Any value still
/// `NaN` after division is replaced with 0, which covers rows whose maximum
/// is zero, rows with no readings at all, and individually missing cells.
/// Valid readings in non-degenerate rows land in `[0, 1]`.
///
/// Fails with `DomainViolation` if any reading is negative; readings are
/// non-negative by definition and a negative value means corrupt data.
pub fn patient_normalise(table: &Table) -> Result<Table> {
    for (patient, row) in table.rows().enumerate() {
        if let Some(day) = row.iter().position(|x| *x < 0.0) {
            return Err(Error::negative_reading(patient, day));
        }
    }

    let mut rows = Vec::with_capacity(table.patients());
    for row in table.rows() {
        // NaN seed: f64::max(NAN, x) returns x, so the fold yields NaN only
        // when the row has no non-missing readings.
        let peak = row
            .iter()
            .copied()
            .filter(|x| !x.is_nan())
            .fold(f64::NAN, f64::max);

        let normalised = row
            .iter()
            .map(|x| {
                let scaled = x / peak;
                if scaled.is_nan() {
                    0.0
                } else {
                    scaled
                }
            })
            .collect();
        rows.push(normalised);
    }

    Table::from_rows(rows)
}
