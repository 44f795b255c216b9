//! PAPS Core - grading engine for student physical-fitness assessments
//!
//! This crate turns raw measurements into PAPS grades:
//! - Domain types for cohorts, grades and metrics
//! - The validated, read-only criteria table
//! - BMI calculation and classification
//! - Metric grading by ordered threshold matching
//! - Result summaries with weak/strong areas and fitness-group scores
//!
//! Every grading function is pure. Gaps in the table degrade to grade 5 or
//! a normal BMI category instead of failing.

pub mod bmi;
pub mod criteria;
pub mod domain;
pub mod error;
pub mod evaluator;
pub mod grading;
pub mod summary;

#[cfg(test)]
mod test_utils;

pub use bmi::{calculate_bmi, calculate_bmi_grade, classify_bmi, BmiCategory};
pub use criteria::{BmiCriteria, CriteriaTable, CriteriaTableBuilder, Criterion, Threshold};
pub use domain::{
    metric, FitnessCategory, FitnessGroup, Grade, GradeLevel, MetricType, ParseTokenError, Sex,
};
pub use error::PapsError;
pub use evaluator::PapsEvaluator;
pub use grading::calculate_grade;
pub use summary::{
    generate_result_summary, AreaEntry, FitnessGroups, Measurement, MetricGrade, ResultSummary,
};
