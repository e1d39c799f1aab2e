//! Statistical model functions for inflammation tables
//!
//! Pure, stateless functions over [`inflammation_core::Table`]: per-day
//! aggregates across patients, population standard deviation of a series,
//! and per-patient normalization. Every function allocates a fresh output
//! and never mutates its input.
//!
//! # Example
//!
//! ```rust
//! use inflammation_core::Table;
//! use inflammation_stats::{daily_mean, patient_normalise};
//!
//! let table = Table::from_rows(vec![
//!     vec![1.0, 2.0],
//!     vec![3.0, 4.0],
//!     vec![5.0, 6.0],
//! ]).unwrap();
//!
//! assert_eq!(daily_mean(&table), vec![3.0, 4.0]);
//! let normalised = patient_normalise(&table).unwrap();
//! assert_eq!(normalised.row(2), &[5.0 / 6.0, 1.0]);
//! ```

mod daily;
mod normalise;
mod spread;

pub use daily::{daily_max, daily_mean, daily_min, daily_std_dev};
pub use normalise::patient_normalise;
pub use spread::std_dev;
