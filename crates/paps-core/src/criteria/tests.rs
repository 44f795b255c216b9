//! Tests for criteria table construction and lookup.

use super::*;
use crate::domain::metric::{BMI, GRIP, SHUTTLE_RUN, SPRINT_50M};
use crate::domain::{FitnessCategory, Grade, GradeLevel, MetricType, Sex};
use crate::error::PapsError;
use crate::test_utils::{higher, lower, middle1_male_table, typed_builder};

const M1: GradeLevel = GradeLevel::Middle1;

#[test]
fn test_lookup_present_entries() {
    let table = middle1_male_table();

    let shuttle = table.criteria(Sex::Male, M1, SHUTTLE_RUN).unwrap();
    assert_eq!(shuttle.len(), 5);
    assert_eq!(shuttle[0].grade(), Grade::ONE);
    assert_eq!(shuttle[0].threshold(), Threshold::Min(80.0));

    assert_eq!(table.metric_type(SPRINT_50M), Some(MetricType::Lower));
    assert_eq!(table.available_metrics(Sex::Male, M1).len(), 8);
    assert_eq!(table.available_metrics(Sex::Male, M1)[0], SHUTTLE_RUN);
    assert!(table.bmi_criteria(Sex::Male, M1).is_some());
}

#[test]
fn test_sparse_entries_are_absent_not_errors() {
    let table = middle1_male_table();

    assert!(table.criteria(Sex::Female, M1, SHUTTLE_RUN).is_none());
    assert!(table.criteria(Sex::Male, GradeLevel::High3, GRIP).is_none());
    assert!(table.criteria(Sex::Male, M1, "unknownMetric").is_none());
    assert!(table.bmi_criteria(Sex::Female, M1).is_none());
    assert!(table.available_metrics(Sex::Female, GradeLevel::Elementary4).is_empty());
    assert_eq!(table.metric_type("unknownMetric"), None);
}

#[test]
fn test_empty_table() {
    let table = CriteriaTable::builder().build().unwrap();
    assert!(table.is_empty());
    assert_eq!(table.cohort_count(), 0);
}

#[test]
fn test_category_override() {
    let table = typed_builder()
        .metric_category("plank", FitnessCategory::Endurance)
        .metric_category(SHUTTLE_RUN, FitnessCategory::Power)
        .build()
        .unwrap();

    assert_eq!(table.category("plank"), Some(FitnessCategory::Endurance));
    assert_eq!(table.category(SHUTTLE_RUN), Some(FitnessCategory::Power));
    assert_eq!(table.category(GRIP), Some(FitnessCategory::Strength));
    assert_eq!(table.category(BMI), None);
}

#[test]
fn test_rejects_unordered_higher_thresholds() {
    let err = typed_builder()
        .criteria(Sex::Male, M1, GRIP, higher([30.0, 37.0, 24.0, 19.0], 0.0))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        PapsError::UnorderedCriteria {
            sex: Sex::Male,
            grade_level: M1,
            metric: GRIP.to_string(),
            index: 1,
        }
    );
}

#[test]
fn test_reports_first_violation_in_cohort_order() {
    let invalid_everywhere = || {
        let mut builder = typed_builder();
        for sex in [Sex::Female, Sex::Male] {
            for level in GradeLevel::ALL.iter().rev() {
                builder = builder
                    .criteria(sex, *level, SHUTTLE_RUN, higher([50.0, 80.0, 40.0, 30.0], 0.0))
                    .criteria(sex, *level, GRIP, higher([30.0, 37.0, 24.0, 19.0], 0.0));
            }
        }
        builder.build().unwrap_err()
    };

    let expected = PapsError::UnorderedCriteria {
        sex: Sex::Male,
        grade_level: GradeLevel::Elementary4,
        metric: GRIP.to_string(),
        index: 1,
    };
    for _ in 0..20 {
        assert_eq!(invalid_everywhere(), expected);
    }
}

#[test]
fn test_rejects_unordered_lower_thresholds() {
    let err = typed_builder()
        .criteria(Sex::Male, M1, SPRINT_50M, lower([7.5, 8.0, 8.0, 9.2], 60.0))
        .build()
        .unwrap_err();

    assert!(matches!(err, PapsError::UnorderedCriteria { index: 2, .. }));
}

#[test]
fn test_rejects_unordered_grades() {
    let criteria = vec![
        Criterion::min(Grade::TWO, 50.0),
        Criterion::min(Grade::ONE, 40.0),
    ];
    let err = typed_builder()
        .criteria(Sex::Male, M1, GRIP, criteria)
        .build()
        .unwrap_err();

    assert!(matches!(err, PapsError::UnorderedCriteria { index: 1, .. }));
}

#[test]
fn test_rejects_threshold_kind_against_declared_type() {
    let err = typed_builder()
        .criteria(Sex::Male, M1, SPRINT_50M, higher([9.0, 8.0, 7.0, 6.0], 0.0))
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        PapsError::ThresholdMismatch {
            metric_type: MetricType::Lower,
            ..
        }
    ));
}

#[test]
fn test_rejects_criteria_for_bmi_metric() {
    let err = typed_builder()
        .criteria(Sex::Male, M1, BMI, lower([18.0, 23.0, 25.0, 30.0], 99.0))
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        PapsError::ThresholdMismatch {
            metric_type: MetricType::Bmi,
            ..
        }
    ));
}

#[test]
fn test_rejects_mixed_thresholds() {
    let criteria = vec![
        Criterion::min(Grade::ONE, 50.0),
        Criterion::max(Grade::TWO, 40.0),
    ];
    let err = CriteriaTable::builder()
        .criteria(Sex::Female, M1, "untyped", criteria)
        .build()
        .unwrap_err();

    assert!(matches!(err, PapsError::MixedThresholds { .. }));
}

#[test]
fn test_rejects_empty_and_nan_criteria() {
    let err = typed_builder()
        .criteria(Sex::Male, M1, GRIP, Vec::new())
        .build()
        .unwrap_err();
    assert!(matches!(err, PapsError::EmptyCriteria { .. }));

    let err = typed_builder()
        .criteria(Sex::Male, M1, GRIP, higher([37.0, f64::NAN, 24.0, 19.0], 0.0))
        .build()
        .unwrap_err();
    assert!(matches!(err, PapsError::NanThreshold { index: 1, .. }));
}

#[test]
fn test_untyped_metric_criteria_are_accepted() {
    let table = CriteriaTable::builder()
        .criteria(Sex::Male, M1, "plank", higher([120.0, 90.0, 60.0, 30.0], 0.0))
        .build()
        .unwrap();

    assert!(table.criteria(Sex::Male, M1, "plank").is_some());
    assert_eq!(table.metric_type("plank"), None);
}

#[test]
fn test_rejects_unordered_bmi_criteria() {
    let err = typed_builder()
        .bmi_criteria(Sex::Female, M1, BmiCriteria::new(18.0, 17.0, 25.0, 30.0))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        PapsError::InvalidBmiCriteria {
            sex: Sex::Female,
            grade_level: M1,
        }
    );

    let err = typed_builder()
        .bmi_criteria(Sex::Female, M1, BmiCriteria::new(f64::NAN, 23.0, 25.0, 30.0))
        .build()
        .unwrap_err();
    assert!(matches!(err, PapsError::InvalidBmiCriteria { .. }));
}

#[test]
fn test_rejects_duplicate_available_metric() {
    let err = typed_builder()
        .available_metrics(Sex::Male, M1, [GRIP, SHUTTLE_RUN, GRIP])
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        PapsError::DuplicateMetric {
            sex: Sex::Male,
            grade_level: M1,
            metric: GRIP.to_string(),
        }
    );
}
