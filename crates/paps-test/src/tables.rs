//! Hand-built criteria tables.

use paps_core::metric::{
    BMI, GRIP, JUMP, PUSH_UP, SHUTTLE_RUN, SIT_AND_REACH, SIT_UP, SPRINT_50M,
};
use paps_core::{BmiCriteria, CriteriaTable, Criterion, Grade, GradeLevel, MetricType, Sex};

/// `higher` list from grade 1-4 minimums and a grade-5 floor.
pub fn higher(mins: [f64; 4], floor: f64) -> Vec<Criterion> {
    let mut rows: Vec<Criterion> = mins
        .iter()
        .zip([Grade::ONE, Grade::TWO, Grade::THREE, Grade::FOUR])
        .map(|(&min, grade)| Criterion::min(grade, min))
        .collect();
    rows.push(Criterion::min(Grade::FIVE, floor));
    rows
}

/// `lower` list from grade 1-4 maximums and a grade-5 ceiling.
pub fn lower(maxes: [f64; 4], ceiling: f64) -> Vec<Criterion> {
    let mut rows: Vec<Criterion> = maxes
        .iter()
        .zip([Grade::ONE, Grade::TWO, Grade::THREE, Grade::FOUR])
        .map(|(&max, grade)| Criterion::max(grade, max))
        .collect();
    rows.push(Criterion::max(Grade::FIVE, ceiling));
    rows
}

/// `중1` boys only, matching the bundled thresholds for that cohort.
pub fn middle1_male_table() -> CriteriaTable {
    let (sex, level) = (Sex::Male, GradeLevel::Middle1);
    CriteriaTable::builder()
        .metric_type(SHUTTLE_RUN, MetricType::Higher)
        .metric_type(PUSH_UP, MetricType::Higher)
        .metric_type(SIT_UP, MetricType::Higher)
        .metric_type(GRIP, MetricType::Higher)
        .metric_type(SPRINT_50M, MetricType::Lower)
        .metric_type(JUMP, MetricType::Higher)
        .metric_type(SIT_AND_REACH, MetricType::Higher)
        .metric_type(BMI, MetricType::Bmi)
        .available_metrics(
            sex,
            level,
            [SHUTTLE_RUN, PUSH_UP, SIT_UP, GRIP, SPRINT_50M, JUMP, SIT_AND_REACH, BMI],
        )
        .criteria(sex, level, SHUTTLE_RUN, higher([80.0, 65.0, 50.0, 35.0], 0.0))
        .criteria(sex, level, PUSH_UP, higher([40.0, 30.0, 20.0, 12.0], 0.0))
        .criteria(sex, level, SIT_UP, higher([60.0, 45.0, 30.0, 20.0], 0.0))
        .criteria(sex, level, GRIP, higher([37.0, 30.0, 24.0, 19.0], 0.0))
        .criteria(sex, level, SPRINT_50M, lower([7.5, 8.0, 8.5, 9.2], 60.0))
        .criteria(sex, level, JUMP, higher([218.0, 196.0, 170.0, 150.0], 0.0))
        .criteria(sex, level, SIT_AND_REACH, higher([16.0, 11.0, 6.0, 1.0], -30.0))
        .bmi_criteria(sex, level, BmiCriteria::new(16.4, 22.9, 24.9, 29.9))
        .build()
        .expect("fixture table is valid")
}

/// A deliberately incomplete table: one girls' cohort with grip only, no
/// BMI boundaries, and an available metric that has no criteria.
pub fn sparse_table() -> CriteriaTable {
    let (sex, level) = (Sex::Female, GradeLevel::High2);
    CriteriaTable::builder()
        .metric_type(GRIP, MetricType::Higher)
        .metric_type(JUMP, MetricType::Higher)
        .available_metrics(sex, level, [GRIP, JUMP, BMI])
        .criteria(sex, level, GRIP, higher([31.0, 26.0, 21.0, 17.0], 0.0))
        .build()
        .expect("fixture table is valid")
}
