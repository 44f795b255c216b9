//! Shared-table facade over the grading functions.

use std::sync::Arc;

use crate::bmi::{self, BmiCategory};
use crate::criteria::CriteriaTable;
use crate::domain::{Grade, GradeLevel, Sex};
use crate::grading;
use crate::summary::{self, Measurement, ResultSummary};

/// Grading engine bound to one criteria table.
///
/// Cloning is cheap and clones share the table, so one evaluator can be
/// handed to any number of threads.
///
/// # Examples
///
/// ```
/// use paps_core::{CriteriaTable, GradeLevel, Measurement, PapsEvaluator, Sex, BmiCategory};
///
/// let evaluator = PapsEvaluator::new(CriteriaTable::default());
/// let summary = evaluator.generate_result_summary(
///     GradeLevel::High1,
///     Sex::Male,
///     &Measurement::new(175.0, 68.0),
/// );
/// // An empty table grades nothing and classifies every BMI as normal.
/// assert!(summary.grades.is_empty());
/// assert_eq!(summary.bmi_category, BmiCategory::Normal);
/// ```
#[derive(Debug, Clone)]
pub struct PapsEvaluator {
    table: Arc<CriteriaTable>,
}

impl PapsEvaluator {
    pub fn new(table: CriteriaTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn from_shared(table: Arc<CriteriaTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CriteriaTable {
        &self.table
    }

    pub fn calculate_bmi(&self, height_cm: f64, weight_kg: f64) -> f64 {
        bmi::calculate_bmi(height_cm, weight_kg)
    }

    pub fn classify_bmi(&self, bmi: f64, grade_level: GradeLevel, sex: Sex) -> BmiCategory {
        bmi::classify_bmi(&self.table, bmi, grade_level, sex)
    }

    pub fn calculate_grade(&self, grade_level: GradeLevel, sex: Sex, metric: &str, value: f64) -> Grade {
        grading::calculate_grade(&self.table, grade_level, sex, metric, value)
    }

    pub fn calculate_bmi_grade(&self, category: BmiCategory) -> Grade {
        bmi::calculate_bmi_grade(category)
    }

    pub fn available_metrics(&self, grade_level: GradeLevel, sex: Sex) -> &[String] {
        self.table.available_metrics(sex, grade_level)
    }

    pub fn generate_result_summary(
        &self,
        grade_level: GradeLevel,
        sex: Sex,
        measurement: &Measurement,
    ) -> ResultSummary {
        summary::generate_result_summary(&self.table, grade_level, sex, measurement)
    }
}

impl From<CriteriaTable> for PapsEvaluator {
    fn from(table: CriteriaTable) -> Self {
        Self::new(table)
    }
}
