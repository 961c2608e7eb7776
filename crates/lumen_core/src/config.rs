//! Tracing configuration.

use lumen_math::Interval;
use serde::{Deserialize, Serialize};

/// Parameters shared by every intersection test in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Smallest ray parameter accepted as a hit. Admits grazing and
    /// near-origin hits while rejecting the ray's negative half and
    /// self-intersection at `t = 0`.
    pub t_min: f64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { t_min: 1e-6 }
    }
}

impl TraceConfig {
    /// Range of ray parameters a shape may report.
    pub fn root_range(&self) -> Interval {
        Interval::at_least(self.t_min)
    }
}
