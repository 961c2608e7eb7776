/// Closed range of acceptable ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Every finite or infinite `t`. NaN is still rejected.
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[min, +inf]`, the range a shape's roots are filtered against.
    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Inclusive at both ends. NaN is never contained.
    pub fn contains(&self, t: f64) -> bool {
        self.min <= t && t <= self.max
    }
}
