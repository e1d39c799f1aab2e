//! Visualization collaborator seam

use std::collections::BTreeMap;

/// Named 1D series handed to a visualizer, ordered by name
pub type GraphData = BTreeMap<String, Vec<f64>>;

/// Renders a set of named series as a visual artifact
///
/// Layout, styling, and backend are the collaborator's concern; analysis
/// only guarantees the content of `graphs`.
pub trait Visualizer {
    fn render(&self, graphs: &GraphData);
}

/// Discards its input; stands in where no rendering is wanted
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVisualizer;

impl Visualizer for NullVisualizer {
    fn render(&self, _graphs: &GraphData) {}
}
