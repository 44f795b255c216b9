//! End-to-end grading against the bundled criteria table.

use paps_test::{good_middle1_male, mixed_middle1_male, poor_middle1_male, sparse_table};
use serde_json::Value;

use crate::prelude::*;
use crate::{default_evaluator, evaluator_from_config, AreaEntry, PapsConfig};

fn evaluator() -> PapsEvaluator {
    default_evaluator().expect("bundled table loads")
}

fn areas(entries: &[AreaEntry]) -> Vec<(&str, u8)> {
    entries
        .iter()
        .map(|e| (e.metric.as_str(), e.grade.value()))
        .collect()
}

#[test]
fn test_good_measurement_end_to_end() {
    let summary =
        evaluator().generate_result_summary(GradeLevel::Middle1, Sex::Male, &good_middle1_male());

    assert_eq!(summary.grade_of("shuttleRun"), Some(Grade::TWO));
    assert_eq!(summary.grade_of("pushUp"), Some(Grade::THREE));
    assert_eq!(summary.grade_of("grip"), Some(Grade::ONE));
    assert_eq!(summary.grade_of("bmi"), Some(Grade::ONE));
    assert_eq!(summary.bmi_category, BmiCategory::Normal);
    assert!(summary.weak_areas.is_empty());
    assert_eq!(areas(&summary.strong_areas), vec![("grip", 1), ("sitAndReach", 1)]);

    let groups = summary.fitness_groups;
    assert_eq!(groups.cardio, 4.0);
    assert_eq!(groups.flexibility, 5.0);
    assert_eq!(groups.strength_endurance, 4.0);
    assert_eq!(groups.power, 4.0);
    assert_eq!(groups.obesity, 5.0);
}

#[test]
fn test_poor_measurement_end_to_end() {
    let summary =
        evaluator().generate_result_summary(GradeLevel::Middle1, Sex::Male, &poor_middle1_male());

    assert!(summary
        .grades
        .iter()
        .filter(|g| g.metric != "bmi")
        .all(|g| g.grade == Grade::FIVE));
    assert_eq!(areas(&summary.weak_areas), vec![("shuttleRun", 5), ("pushUp", 5)]);
    assert_eq!(areas(&summary.strong_areas), vec![("bmi", 1)]);

    let groups = summary.fitness_groups;
    assert_eq!(groups.cardio, 1.0);
    assert_eq!(groups.strength_endurance, 1.0);
    assert_eq!(groups.power, 1.0);
    assert_eq!(groups.obesity, 5.0);
    assert_eq!(groups.weakest(), Some((FitnessGroup::Cardio, 1.0)));
}

#[test]
fn test_mixed_measurement_end_to_end() {
    let summary =
        evaluator().generate_result_summary(GradeLevel::Middle1, Sex::Male, &mixed_middle1_male());

    assert_eq!(areas(&summary.weak_areas), vec![("shuttleRun", 5), ("sprint50m", 5)]);
    assert_eq!(areas(&summary.strong_areas), vec![("bmi", 1), ("pushUp", 2)]);
    assert_eq!(summary.fitness_groups.strength_endurance, 3.3);
    assert_eq!(summary.fitness_groups.power, 1.5);
    assert_eq!(summary.fitness_groups.flexibility, 2.0);
}

#[test]
fn test_elementary_cohort_skips_push_up() {
    let evaluator = evaluator();
    let available = evaluator.available_metrics(GradeLevel::Elementary4, Sex::Female);
    assert!(!available.iter().any(|m| m == "pushUp"));

    let summary =
        evaluator.generate_result_summary(GradeLevel::Elementary4, Sex::Female, &good_middle1_male());
    assert_eq!(summary.grade_of("pushUp"), None);
    assert_eq!(summary.grades.len(), available.len());
}

#[test]
fn test_obese_measurement_serializes_category() {
    let measurement = Measurement::new(170.0, 78.0).with_metric("shuttleRun", 40.0);
    let summary = evaluator().generate_result_summary(GradeLevel::Middle1, Sex::Male, &measurement);

    assert_eq!(summary.bmi_category, BmiCategory::MildObese);
    assert_eq!(summary.grade_of("bmi"), Some(Grade::FOUR));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["bmiCategory"], Value::from("mild_obese"));
}

#[test]
fn test_summary_json_shape() {
    let summary =
        evaluator().generate_result_summary(GradeLevel::Middle1, Sex::Male, &mixed_middle1_male());
    let json = serde_json::to_value(&summary).unwrap();

    for key in ["grades", "weakAreas", "strongAreas", "bmiCategory", "fitnessGroups"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["weakAreas"][0]["metric"], Value::from("shuttleRun"));
    assert_eq!(json["weakAreas"][0]["grade"], Value::from(5));
    assert_eq!(json["fitnessGroups"]["strengthEndurance"], Value::from(3.3));
    assert_eq!(json["bmiCategory"], Value::from("normal"));
    assert_eq!(json["grades"].as_array().map(Vec::len), Some(summary.grades.len()));
}

#[test]
fn test_summary_is_deterministic() {
    let evaluator = evaluator();
    let first = serde_json::to_string(&evaluator.generate_result_summary(
        GradeLevel::Middle1,
        Sex::Male,
        &mixed_middle1_male(),
    ))
    .unwrap();
    let second = serde_json::to_string(&evaluator.generate_result_summary(
        GradeLevel::Middle1,
        Sex::Male,
        &mixed_middle1_male(),
    ))
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sparse_table_degrades_softly() {
    let evaluator = PapsEvaluator::new(sparse_table());
    let measurement = Measurement::new(165.0, 55.0)
        .with_metric("grip", 28.0)
        .with_metric("jump", 190.0);

    let summary = evaluator.generate_result_summary(GradeLevel::High2, Sex::Female, &measurement);

    assert_eq!(summary.grade_of("grip"), Some(Grade::TWO));
    assert_eq!(summary.grade_of("jump"), Some(Grade::FIVE));
    assert_eq!(summary.bmi_category, BmiCategory::Normal);
    assert_eq!(summary.grade_of("bmi"), Some(Grade::ONE));
}

#[test]
fn test_evaluator_from_missing_file_fails() {
    let config = PapsConfig::new().with_criteria_path("/nonexistent/paps.toml");
    assert!(evaluator_from_config(&config).is_err());
}
