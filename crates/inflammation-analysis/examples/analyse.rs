//! Analyse a directory of inflammation CSV datasets and print the result

use inflammation_analysis::{analyse_data, GraphData, Visualizer};
use inflammation_core::Result;
use inflammation_data::CsvDataSource;

/// Prints each named series instead of plotting it
struct PrintVisualizer;

impl Visualizer for PrintVisualizer {
    fn render(&self, graphs: &GraphData) {
        for (name, series) in graphs {
            println!("{name}: {series:?}");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let source = CsvDataSource::new(data_dir);
    analyse_data(&source, &PrintVisualizer)?;
    Ok(())
}
