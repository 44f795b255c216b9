//! Metric names, metric types and the fitness categories metrics roll up into.
//!
//! Metric names are open strings so that new measurements can be added to a
//! criteria document without code changes. The constants below name the
//! measurements the bundled table knows about.

use std::fmt;
use std::str::FromStr;

use super::ParseTokenError;

/// 왕복오래달리기 (PACER shuttle run, laps).
pub const SHUTTLE_RUN: &str = "shuttleRun";
/// 오래달리기-걷기 (long-distance run/walk, seconds).
pub const RUN_WALK: &str = "runWalk";
/// 스텝검사 (step test, physical efficiency index).
pub const STEP_TEST: &str = "stepTest";
/// 팔굽혀펴기 (push-ups, count).
pub const PUSH_UP: &str = "pushUp";
/// 윗몸말아올리기 (curl-ups, count).
pub const SIT_UP: &str = "sitUp";
/// 악력 (grip strength, kg).
pub const GRIP: &str = "grip";
/// 50m 달리기 (50 m sprint, seconds).
pub const SPRINT_50M: &str = "sprint50m";
/// 제자리멀리뛰기 (standing long jump, cm).
pub const JUMP: &str = "jump";
/// 앉아윗몸앞으로굽히기 (sit-and-reach, cm).
pub const SIT_AND_REACH: &str = "sitAndReach";
/// Body mass index, derived from height and weight rather than measured.
pub const BMI: &str = "bmi";

/// Korean display label for a metric; unknown metrics fall back to their name.
pub fn label(metric: &str) -> &str {
    match metric {
        SHUTTLE_RUN => "왕복오래달리기",
        RUN_WALK => "오래달리기-걷기",
        STEP_TEST => "스텝검사",
        PUSH_UP => "팔굽혀펴기",
        SIT_UP => "윗몸일으키기",
        GRIP => "악력",
        SPRINT_50M => "50m 달리기",
        JUMP => "제자리멀리뛰기",
        SIT_AND_REACH => "앉아윗몸앞으로굽히기",
        BMI => "BMI",
        other => other,
    }
}

/// How a metric's raw value relates to fitness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MetricType {
    /// Larger is better; criteria carry `min` thresholds.
    Higher,
    /// Smaller is better; criteria carry `max` thresholds.
    Lower,
    /// Graded through the BMI classifier, never by criterion lists.
    Bmi,
}

impl MetricType {
    pub const fn as_str(self) -> &'static str {
        match self {
            MetricType::Higher => "higher",
            MetricType::Lower => "lower",
            MetricType::Bmi => "bmi",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "higher" => Ok(MetricType::Higher),
            "lower" => Ok(MetricType::Lower),
            "bmi" => Ok(MetricType::Bmi),
            _ => Err(ParseTokenError::new("metric type", s)),
        }
    }
}

/// Fitness component a single metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitnessCategory {
    Cardio,
    Strength,
    Endurance,
    Flexibility,
    Power,
}

impl FitnessCategory {
    /// Built-in category of a known metric.
    ///
    /// BMI has no category: its row feeds the obesity group directly.
    pub fn for_metric(metric: &str) -> Option<FitnessCategory> {
        match metric {
            SHUTTLE_RUN | RUN_WALK | STEP_TEST => Some(FitnessCategory::Cardio),
            PUSH_UP | GRIP => Some(FitnessCategory::Strength),
            SIT_UP => Some(FitnessCategory::Endurance),
            SIT_AND_REACH => Some(FitnessCategory::Flexibility),
            SPRINT_50M | JUMP => Some(FitnessCategory::Power),
            _ => None,
        }
    }

    /// Summary bucket; strength and endurance share one.
    pub const fn group(self) -> FitnessGroup {
        match self {
            FitnessCategory::Cardio => FitnessGroup::Cardio,
            FitnessCategory::Strength | FitnessCategory::Endurance => {
                FitnessGroup::StrengthEndurance
            }
            FitnessCategory::Flexibility => FitnessGroup::Flexibility,
            FitnessCategory::Power => FitnessGroup::Power,
        }
    }
}

impl FromStr for FitnessCategory {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cardio" => Ok(FitnessCategory::Cardio),
            "strength" => Ok(FitnessCategory::Strength),
            "endurance" => Ok(FitnessCategory::Endurance),
            "flexibility" => Ok(FitnessCategory::Flexibility),
            "power" => Ok(FitnessCategory::Power),
            _ => Err(ParseTokenError::new("fitness category", s)),
        }
    }
}

/// One of the five summary buckets of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitnessGroup {
    Cardio,
    Flexibility,
    StrengthEndurance,
    Power,
    Obesity,
}

impl FitnessGroup {
    /// All groups in summary field order.
    pub const ALL: [FitnessGroup; 5] = [
        FitnessGroup::Cardio,
        FitnessGroup::Flexibility,
        FitnessGroup::StrengthEndurance,
        FitnessGroup::Power,
        FitnessGroup::Obesity,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            FitnessGroup::Cardio => 0,
            FitnessGroup::Flexibility => 1,
            FitnessGroup::StrengthEndurance => 2,
            FitnessGroup::Power => 3,
            FitnessGroup::Obesity => 4,
        }
    }

    /// Field name in serialized summaries.
    pub const fn as_str(self) -> &'static str {
        match self {
            FitnessGroup::Cardio => "cardio",
            FitnessGroup::Flexibility => "flexibility",
            FitnessGroup::StrengthEndurance => "strengthEndurance",
            FitnessGroup::Power => "power",
            FitnessGroup::Obesity => "obesity",
        }
    }

    /// Korean display label.
    pub const fn label(self) -> &'static str {
        match self {
            FitnessGroup::Cardio => "심폐지구력",
            FitnessGroup::Flexibility => "유연성",
            FitnessGroup::StrengthEndurance => "근력근지구력",
            FitnessGroup::Power => "순발력",
            FitnessGroup::Obesity => "비만",
        }
    }
}

impl fmt::Display for FitnessGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
