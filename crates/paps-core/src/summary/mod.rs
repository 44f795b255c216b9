//! Result summaries: per-metric grades folded into areas and fitness groups.

mod groups;
mod measurement;


pub use groups::FitnessGroups;
pub use measurement::Measurement;

use tracing::debug;

use crate::bmi::{calculate_bmi, calculate_bmi_grade, classify_bmi, BmiCategory};
use crate::criteria::CriteriaTable;
use crate::domain::metric::BMI;
use crate::domain::{FitnessGroup, Grade, GradeLevel, Sex};
use crate::grading::calculate_grade;

use groups::GroupAccumulator;

/// Maximum number of weak or strong areas reported.
pub const MAX_AREAS: usize = 2;

/// Grade earned by one measured (or derived) metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricGrade {
    pub metric: String,
    pub value: f64,
    pub grade: Grade,
}

/// A metric singled out as notably weak or strong.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaEntry {
    pub metric: String,
    pub grade: Grade,
}

impl From<&MetricGrade> for AreaEntry {
    fn from(grade: &MetricGrade) -> Self {
        AreaEntry {
            metric: grade.metric.clone(),
            grade: grade.grade,
        }
    }
}

/// Output of one grading request, handed verbatim to storage and to the
/// recommendation layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResultSummary {
    pub grades: Vec<MetricGrade>,
    pub weak_areas: Vec<AreaEntry>,
    pub strong_areas: Vec<AreaEntry>,
    pub bmi_category: BmiCategory,
    pub fitness_groups: FitnessGroups,
}

impl ResultSummary {
    /// Grade of a metric, if it was graded.
    pub fn grade_of(&self, metric: &str) -> Option<Grade> {
        self.grades
            .iter()
            .find(|g| g.metric == metric)
            .map(|g| g.grade)
    }
}

/// Grades a measurement for a cohort and aggregates the result.
///
/// Only metrics listed as available for the cohort are graded, in list
/// order. BMI is always derived from height and weight; other metrics
/// without a supplied value are left out rather than defaulted.
///
/// # Examples
///
/// ```
/// use paps_core::{
///     generate_result_summary, BmiCategory, BmiCriteria, CriteriaTable, Criterion, Grade,
///     GradeLevel, Measurement, MetricType, Sex,
/// };
///
/// let (sex, level) = (Sex::Female, GradeLevel::Middle2);
/// let table = CriteriaTable::builder()
///     .metric_type("grip", MetricType::Higher)
///     .metric_type("bmi", MetricType::Bmi)
///     .available_metrics(sex, level, ["grip", "bmi"])
///     .criteria(sex, level, "grip", vec![
///         Criterion::min(Grade::ONE, 29.0),
///         Criterion::min(Grade::THREE, 20.0),
///         Criterion::min(Grade::FIVE, 0.0),
///     ])
///     .bmi_criteria(sex, level, BmiCriteria::new(16.9, 22.9, 24.9, 29.9))
///     .build()
///     .unwrap();
///
/// let measurement = Measurement::new(160.0, 50.0).with_metric("grip", 31.0);
/// let summary = generate_result_summary(&table, level, sex, &measurement);
///
/// assert_eq!(summary.bmi_category, BmiCategory::Normal);
/// assert_eq!(summary.grade_of("grip"), Some(Grade::ONE));
/// assert_eq!(summary.fitness_groups.strength_endurance, 5.0);
/// assert_eq!(summary.fitness_groups.obesity, 5.0);
/// ```
pub fn generate_result_summary(
    table: &CriteriaTable,
    grade_level: GradeLevel,
    sex: Sex,
    measurement: &Measurement,
) -> ResultSummary {
    let bmi = calculate_bmi(measurement.height_cm, measurement.weight_kg);
    let bmi_category = classify_bmi(table, bmi, grade_level, sex);
    let bmi_grade = calculate_bmi_grade(bmi_category);

    let grades: Vec<MetricGrade> = table
        .available_metrics(sex, grade_level)
        .iter()
        .filter_map(|metric| {
            if metric == BMI {
                return Some(MetricGrade {
                    metric: metric.clone(),
                    value: bmi,
                    grade: bmi_grade,
                });
            }
            measurement.metric(metric).map(|value| MetricGrade {
                metric: metric.clone(),
                value,
                grade: calculate_grade(table, grade_level, sex, metric, value),
            })
        })
        .collect();

    let weak_areas = weak_areas(&grades);
    let strong_areas = strong_areas(&grades);
    let fitness_groups = fitness_groups(table, &grades, bmi_grade);

    debug!(
        event = "summary",
        sex = sex.as_str(),
        grade_level = grade_level.as_str(),
        bmi,
        bmi_category = bmi_category.as_str(),
        graded = grades.len() as u64,
        weak = weak_areas.len() as u64,
        strong = strong_areas.len() as u64,
    );

    ResultSummary {
        grades,
        weak_areas,
        strong_areas,
        bmi_category,
        fitness_groups,
    }
}

/// Grades 4-5, worst first, at most [`MAX_AREAS`]. Ties keep list order.
pub fn weak_areas(grades: &[MetricGrade]) -> Vec<AreaEntry> {
    let mut weak: Vec<&MetricGrade> = grades.iter().filter(|g| g.grade.is_weak()).collect();
    weak.sort_by(|a, b| b.grade.cmp(&a.grade));
    weak.into_iter().take(MAX_AREAS).map(AreaEntry::from).collect()
}

/// Grades 1-2, best first, at most [`MAX_AREAS`]. Ties keep list order.
pub fn strong_areas(grades: &[MetricGrade]) -> Vec<AreaEntry> {
    let mut strong: Vec<&MetricGrade> = grades.iter().filter(|g| g.grade.is_strong()).collect();
    strong.sort_by(|a, b| a.grade.cmp(&b.grade));
    strong.into_iter().take(MAX_AREAS).map(AreaEntry::from).collect()
}

/// Folds metric grades into the five fitness groups.
///
/// The BMI row feeds obesity only, never cardio. After averaging, the BMI
/// points are merged into obesity once more as an extra sample.
pub fn fitness_groups(table: &CriteriaTable, grades: &[MetricGrade], bmi_grade: Grade) -> FitnessGroups {
    let mut acc = GroupAccumulator::default();
    for g in grades {
        if g.metric == BMI {
            acc.add(FitnessGroup::Obesity, g.grade);
        } else if let Some(category) = table.category(&g.metric) {
            acc.add(category.group(), g.grade);
        }
    }
    acc.finish(bmi_grade)
}
