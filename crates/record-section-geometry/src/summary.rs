//! Order statistics of a waveform.

/// Copy `samples` and sort the copy in ascending numeric order.
///
/// The input slice is left untouched since its order is the time axis.
#[must_use]
pub fn sort_ascending(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Minimum, median and maximum of a waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub min: f64,
    /// Element at index `len / 2` of the sorted samples (the upper median for even lengths).
    pub median: f64,
    pub max: f64,
}

impl SampleSummary {
    /// Summary used when there are no samples at all.
    pub const UNDEFINED: Self = Self {
        min: f64::NAN,
        median: f64::NAN,
        max: f64::NAN,
    };

    /// Summarize samples that are already sorted ascending.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let median = sorted[sorted.len() / 2];
        Some(Self { min, median, max })
    }

    /// Summarize samples in any order.
    #[must_use]
    pub fn of(samples: &[f64]) -> Option<Self> {
        Self::from_sorted(&sort_ascending(samples))
    }

    /// Distance between the maximum and the minimum.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
