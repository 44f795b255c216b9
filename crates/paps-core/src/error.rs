//! Error types for table construction.
//!
//! Grading itself never fails: gaps in the reference table degrade to
//! documented defaults. Only building a [`CriteriaTable`](crate::CriteriaTable)
//! from malformed data produces these errors.

use thiserror::Error;

use crate::domain::{GradeLevel, MetricType, Sex};

/// Main error type for PAPS table construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PapsError {
    /// A grade outside `1..=5`.
    #[error("Invalid grade {0}: grades range from 1 (best) to 5 (worst)")]
    InvalidGrade(u8),

    /// A criterion list with no entries.
    #[error("Empty criteria for {metric} ({sex}/{grade_level})")]
    EmptyCriteria {
        sex: Sex,
        grade_level: GradeLevel,
        metric: String,
    },

    /// A criterion list mixing `min` and `max` thresholds.
    #[error("Mixed min/max thresholds for {metric} ({sex}/{grade_level})")]
    MixedThresholds {
        sex: Sex,
        grade_level: GradeLevel,
        metric: String,
    },

    /// Threshold kind does not fit the metric's declared type.
    #[error("Criteria for {metric} ({sex}/{grade_level}) do not fit metric type '{metric_type}'")]
    ThresholdMismatch {
        sex: Sex,
        grade_level: GradeLevel,
        metric: String,
        metric_type: MetricType,
    },

    /// Grades or thresholds out of order at the given list position.
    #[error("Criteria for {metric} ({sex}/{grade_level}) are not monotonic at entry {index}")]
    UnorderedCriteria {
        sex: Sex,
        grade_level: GradeLevel,
        metric: String,
        index: usize,
    },

    /// A NaN threshold.
    #[error("Threshold for {metric} ({sex}/{grade_level}) at entry {index} is NaN")]
    NanThreshold {
        sex: Sex,
        grade_level: GradeLevel,
        metric: String,
        index: usize,
    },

    /// BMI boundaries not ascending (or NaN).
    #[error("BMI criteria for {sex}/{grade_level} must satisfy thin <= normal <= over <= obese")]
    InvalidBmiCriteria { sex: Sex, grade_level: GradeLevel },

    /// The same metric listed twice for one cohort.
    #[error("Metric {metric} listed more than once for {sex}/{grade_level}")]
    DuplicateMetric {
        sex: Sex,
        grade_level: GradeLevel,
        metric: String,
    },
}

/// Result type alias for PAPS table operations.
pub type Result<T> = std::result::Result<T, PapsError>;
