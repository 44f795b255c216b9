use crate::domain::{Grade, MetricType};

/// Bound a measured value is compared against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Value qualifies when `value >= min` (for `higher` metrics).
    Min(f64),
    /// Value qualifies when `value <= max` (for `lower` metrics).
    Max(f64),
}

impl Threshold {
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Threshold::Min(v) | Threshold::Max(v) => v,
        }
    }

    /// Metric type this threshold kind belongs to.
    pub const fn metric_type(self) -> MetricType {
        match self {
            Threshold::Min(_) => MetricType::Higher,
            Threshold::Max(_) => MetricType::Lower,
        }
    }
}

/// One row of a criterion list: the grade awarded when the threshold is met.
///
/// # Examples
///
/// ```
/// use paps_core::{Criterion, Grade, MetricType};
///
/// let row = Criterion::min(Grade::ONE, 80.0);
/// assert!(row.matches(MetricType::Higher, 85.0));
/// assert!(!row.matches(MetricType::Higher, 79.0));
/// // A `min` row never matches a `lower` metric.
/// assert!(!row.matches(MetricType::Lower, 85.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criterion {
    grade: Grade,
    threshold: Threshold,
}

impl Criterion {
    pub const fn new(grade: Grade, threshold: Threshold) -> Self {
        Self { grade, threshold }
    }

    /// Row for a `higher` metric.
    pub const fn min(grade: Grade, min: f64) -> Self {
        Self::new(grade, Threshold::Min(min))
    }

    /// Row for a `lower` metric.
    pub const fn max(grade: Grade, max: f64) -> Self {
        Self::new(grade, Threshold::Max(max))
    }

    #[inline]
    pub const fn grade(&self) -> Grade {
        self.grade
    }

    #[inline]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Whether `value` qualifies for this row's grade.
    #[inline]
    pub fn matches(&self, metric_type: MetricType, value: f64) -> bool {
        match (metric_type, self.threshold) {
            (MetricType::Higher, Threshold::Min(min)) => value >= min,
            (MetricType::Lower, Threshold::Max(max)) => value <= max,
            _ => false,
        }
    }
}
