//! Measurement presets.
//!
//! All presets use 170 cm / 60 kg (BMI 20.8, normal for every bundled
//! cohort from `중1` up), so they differ only in the graded metrics.

use paps_core::metric::{GRIP, JUMP, PUSH_UP, SHUTTLE_RUN, SIT_AND_REACH, SIT_UP, SPRINT_50M};
use paps_core::Measurement;

/// Above-average results across the board.
pub fn good_middle1_male() -> Measurement {
    Measurement::new(170.0, 60.0)
        .with_metric(SHUTTLE_RUN, 70.0)
        .with_metric(PUSH_UP, 25.0)
        .with_metric(SIT_UP, 45.0)
        .with_metric(GRIP, 40.0)
        .with_metric(SPRINT_50M, 8.0)
        .with_metric(JUMP, 210.0)
        .with_metric(SIT_AND_REACH, 16.0)
}

/// Grade-5 results on every metric.
pub fn poor_middle1_male() -> Measurement {
    Measurement::new(170.0, 60.0)
        .with_metric(SHUTTLE_RUN, 30.0)
        .with_metric(PUSH_UP, 10.0)
        .with_metric(SIT_UP, 15.0)
        .with_metric(GRIP, 15.0)
        .with_metric(SPRINT_50M, 11.0)
        .with_metric(JUMP, 140.0)
        .with_metric(SIT_AND_REACH, -5.0)
}

/// Strong upper body, weak cardio and power.
pub fn mixed_middle1_male() -> Measurement {
    Measurement::new(170.0, 60.0)
        .with_metric(SHUTTLE_RUN, 30.0)
        .with_metric(PUSH_UP, 35.0)
        .with_metric(SIT_UP, 55.0)
        .with_metric(GRIP, 20.0)
        .with_metric(SPRINT_50M, 9.5)
        .with_metric(JUMP, 150.0)
        .with_metric(SIT_AND_REACH, 5.0)
}
