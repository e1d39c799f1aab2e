//! Standard deviation between datasets, day by day

use inflammation_core::{Result, Table};
use inflammation_data::DataSource;
use inflammation_stats::{daily_mean, daily_std_dev};
use tracing::{debug, instrument};

use crate::view::{GraphData, Visualizer};

/// Series name the analysis publishes to its visualizer
pub const STANDARD_DEVIATION_BY_DAY: &str = "standard deviation by day";

/// Calculate the standard deviation by day between datasets
///
/// Works out the mean inflammation value for each day across every dataset
/// the source can load, then the population standard deviation of those
/// means: one value per day. The resulting series is handed to `visualizer`
/// under the name [`STANDARD_DEVIATION_BY_DAY`] and returned.
///
/// Failures from the data source propagate unchanged; datasets whose
/// daily-mean series differ in length fail with `ShapeMismatch`. Partial
/// progress is discarded on any failure.
#[instrument(skip_all)]
pub fn analyse_data(source: &dyn DataSource, visualizer: &dyn Visualizer) -> Result<Vec<f64>> {
    let tables = source.load_inflammation_data()?;
    debug!(datasets = tables.len(), "computing daily means");

    let means_by_day: Vec<Vec<f64>> = tables.iter().map(daily_mean).collect();
    let stacked = Table::from_rows(means_by_day)?;

    let by_day = daily_std_dev(&stacked);
    debug!(days = by_day.len(), "computed standard deviation by day");

    let mut graphs = GraphData::new();
    graphs.insert(STANDARD_DEVIATION_BY_DAY.to_string(), by_day.clone());
    visualizer.render(&graphs);

    Ok(by_day)
}
