use std::cmp::Ordering;

/// Timing parameters for an interval of the map.
///
/// A point with `change` unset inherits its tempo from the preceding
/// non-inherited point; its `beat_len` is then negative and encodes the
/// slider velocity multiplier as `-100 / beat_len`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimingPoint {
    /// Start time in milliseconds.
    pub time: f64,
    /// Milliseconds per beat.
    pub beat_len: f64,
    /// Whether the point sets an absolute tempo.
    pub change: bool,
}

impl PartialOrd for TimingPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.time.partial_cmp(&other.time)
    }
}
