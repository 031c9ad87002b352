// File: crates/figs-core/src/axis.rs
// Summary: Value axis model with a fixed display range.

/// Y axis with a fixed range; the range never adapts to the data.
#[derive(Clone, Debug)]
pub struct ValueAxis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub tick_step: f64,
}

impl ValueAxis {
    pub fn new(label: impl Into<String>, min: f64, max: f64, tick_step: f64) -> Self {
        Self { label: label.into(), min, max, tick_step }
    }

    /// The fixed [0, 30] "Paper count" axis used for the survey figures.
    pub fn paper_count() -> Self {
        Self::new("Paper count", 0.0, 30.0, 5.0)
    }

    pub fn ticks(&self) -> Vec<f64> {
        crate::grid::ticks(self.min, self.max, self.tick_step)
    }
}
