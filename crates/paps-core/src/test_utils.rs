//! Test utilities for paps-core
//!
//! Provides a small criteria table shared across the crate's test modules.

use crate::criteria::{BmiCriteria, CriteriaTable, CriteriaTableBuilder, Criterion};
use crate::domain::metric::{BMI, GRIP, JUMP, PUSH_UP, SHUTTLE_RUN, SIT_AND_REACH, SIT_UP, SPRINT_50M};
use crate::domain::{Grade, GradeLevel, MetricType, Sex};

/// `higher` criterion list from grade-1..grade-4 minimums; grade 5 takes the rest.
pub fn higher(mins: [f64; 4], floor: f64) -> Vec<Criterion> {
    vec![
        Criterion::min(Grade::ONE, mins[0]),
        Criterion::min(Grade::TWO, mins[1]),
        Criterion::min(Grade::THREE, mins[2]),
        Criterion::min(Grade::FOUR, mins[3]),
        Criterion::min(Grade::FIVE, floor),
    ]
}

/// `lower` criterion list from grade-1..grade-4 maximums; grade 5 takes the rest.
pub fn lower(maxes: [f64; 4], ceiling: f64) -> Vec<Criterion> {
    vec![
        Criterion::max(Grade::ONE, maxes[0]),
        Criterion::max(Grade::TWO, maxes[1]),
        Criterion::max(Grade::THREE, maxes[2]),
        Criterion::max(Grade::FOUR, maxes[3]),
        Criterion::max(Grade::FIVE, ceiling),
    ]
}

pub fn typed_builder() -> CriteriaTableBuilder {
    CriteriaTable::builder()
        .metric_type(SHUTTLE_RUN, MetricType::Higher)
        .metric_type(PUSH_UP, MetricType::Higher)
        .metric_type(SIT_UP, MetricType::Higher)
        .metric_type(GRIP, MetricType::Higher)
        .metric_type(SPRINT_50M, MetricType::Lower)
        .metric_type(JUMP, MetricType::Higher)
        .metric_type(SIT_AND_REACH, MetricType::Higher)
        .metric_type(BMI, MetricType::Bmi)
}

/// Middle-school first-year boys, fully configured.
pub fn middle1_male_table() -> CriteriaTable {
    let (sex, level) = (Sex::Male, GradeLevel::Middle1);
    typed_builder()
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
        .criteria(sex, level, SIT_AND_REACH, higher([16.0, 11.0, 6.0, 1.0], -50.0))
        .bmi_criteria(sex, level, BmiCriteria::new(16.4, 22.9, 24.9, 29.9))
        .build()
        .unwrap()
}
