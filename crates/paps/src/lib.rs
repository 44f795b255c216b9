//! PAPS - Physical-Fitness Grading in Rust
//!
//! Turns raw assessment measurements into PAPS grades, weak/strong areas
//! and fitness-group scores.
//!
//! # Example
//!
//! ```rust
//! use paps::prelude::*;
//!
//! let evaluator = paps::default_evaluator().unwrap();
//! let measurement = Measurement::new(170.0, 60.0)
//!     .with_metric("shuttleRun", 70.0)
//!     .with_metric("sprint50m", 8.0);
//!
//! let summary = evaluator.generate_result_summary(GradeLevel::Middle1, Sex::Male, &measurement);
//! assert_eq!(summary.bmi_category, BmiCategory::Normal);
//! assert_eq!(summary.grade_of("shuttleRun"), Some(Grade::TWO));
//! ```

// Engine types
pub use paps_core::{
    calculate_bmi, calculate_bmi_grade, calculate_grade, classify_bmi, generate_result_summary,
    metric, AreaEntry, BmiCategory, BmiCriteria, CriteriaTable, CriteriaTableBuilder, Criterion,
    FitnessCategory, FitnessGroup, FitnessGroups, Grade, GradeLevel, Measurement, MetricGrade,
    MetricType, PapsError, PapsEvaluator, ParseTokenError, ResultSummary, Sex, Threshold,
};

// Table loading
pub use paps_config::{ConfigError, CriteriaDocument, PapsConfig};

mod engine;
pub use engine::{default_evaluator, evaluator_from_config};

#[cfg(feature = "console")]
pub use engine::init_console;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::{
        BmiCategory, FitnessGroup, FitnessGroups, Grade, GradeLevel, Measurement, MetricType,
        PapsEvaluator, ResultSummary, Sex,
    };
}
