//! Metric grading against ordered criterion lists.

use tracing::trace;

use crate::criteria::CriteriaTable;
use crate::domain::{Grade, GradeLevel, MetricType, Sex};

/// Grades a measured value for a cohort.
///
/// Criterion lists are ordered from grade 1 to grade 5 with monotonic
/// thresholds, so the first matching row is the best grade the value earns.
/// Values beyond either end clamp to grade 1 or grade 5.
///
/// Returns [`Grade::WORST`] when the cohort has no list for the metric, when
/// the metric type is undeclared, or when the metric is BMI (graded by
/// [`calculate_bmi_grade`](crate::calculate_bmi_grade) instead).
///
/// # Examples
///
/// ```
/// use paps_core::{calculate_grade, CriteriaTable, Criterion, Grade, GradeLevel, MetricType, Sex};
///
/// let table = CriteriaTable::builder()
///     .metric_type("sprint50m", MetricType::Lower)
///     .criteria(
///         Sex::Male,
///         GradeLevel::Middle1,
///         "sprint50m",
///         vec![
///             Criterion::max(Grade::ONE, 7.5),
///             Criterion::max(Grade::TWO, 8.0),
///             Criterion::max(Grade::FIVE, 60.0),
///         ],
///     )
///     .build()
///     .unwrap();
///
/// let grade = calculate_grade(&table, GradeLevel::Middle1, Sex::Male, "sprint50m", 7.8);
/// assert_eq!(grade, Grade::TWO);
/// assert_eq!(calculate_grade(&table, GradeLevel::Middle1, Sex::Male, "jump", 250.0), Grade::WORST);
/// ```
pub fn calculate_grade(
    table: &CriteriaTable,
    grade_level: GradeLevel,
    sex: Sex,
    metric: &str,
    value: f64,
) -> Grade {
    let Some(criteria) = table.criteria(sex, grade_level, metric) else {
        trace!(
            event = "grade_fallback",
            metric,
            sex = sex.as_str(),
            grade_level = grade_level.as_str(),
            "no criteria for metric"
        );
        return Grade::WORST;
    };

    let metric_type = match table.metric_type(metric) {
        Some(t @ (MetricType::Higher | MetricType::Lower)) => t,
        other => {
            trace!(
                event = "grade_fallback",
                metric,
                metric_type = ?other,
                "metric type is not gradable"
            );
            return Grade::WORST;
        }
    };

    criteria
        .iter()
        .find(|criterion| criterion.matches(metric_type, value))
        .map(|criterion| criterion.grade())
        .unwrap_or(Grade::WORST)
}
