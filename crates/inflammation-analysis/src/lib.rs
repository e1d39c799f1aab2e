//! Cross-dataset analysis of inflammation series
//!
//! Combines every dataset a [`inflammation_data::DataSource`] can load into
//! a single series: the standard deviation of the per-dataset daily means,
//! day by day. The result is handed to a [`Visualizer`] collaborator and
//! returned to the caller.

mod analyse;
mod view;

pub use analyse::{analyse_data, STANDARD_DEVIATION_BY_DAY};
pub use view::{GraphData, NullVisualizer, Visualizer};
