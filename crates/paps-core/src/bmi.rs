//! BMI calculation, classification and grade mapping.

use std::fmt;

use tracing::trace;

use crate::criteria::CriteriaTable;
use crate::domain::{Grade, GradeLevel, Sex};

/// Rounds to one decimal place, halves away from zero.
#[inline]
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Body mass index from height (cm) and weight (kg), rounded to one decimal.
///
/// Inputs are assumed positive; the caller validates them.
///
/// # Examples
///
/// ```
/// use paps_core::calculate_bmi;
///
/// assert_eq!(calculate_bmi(170.0, 70.0), 24.2);
/// assert_eq!(calculate_bmi(100.0, 30.0), 30.0);
/// ```
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_tenth(weight_kg / (height_m * height_m))
}

/// BMI category of a student relative to their cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BmiCategory {
    Thin,
    Normal,
    Overweight,
    MildObese,
    SevereObese,
}

impl BmiCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            BmiCategory::Thin => "thin",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::MildObese => "mild_obese",
            BmiCategory::SevereObese => "severe_obese",
        }
    }

    /// Korean display label.
    pub const fn label(self) -> &'static str {
        match self {
            BmiCategory::Thin => "저체중",
            BmiCategory::Normal => "정상",
            BmiCategory::Overweight => "과체중",
            BmiCategory::MildObese => "경도비만",
            BmiCategory::SevereObese => "고도비만",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a BMI against the cohort's boundaries.
///
/// Each boundary is inclusive on the lower bucket. A cohort without BMI
/// boundaries classifies as [`BmiCategory::Normal`].
pub fn classify_bmi(table: &CriteriaTable, bmi: f64, grade_level: GradeLevel, sex: Sex) -> BmiCategory {
    let Some(criteria) = table.bmi_criteria(sex, grade_level) else {
        trace!(
            event = "bmi_fallback",
            sex = sex.as_str(),
            grade_level = grade_level.as_str(),
            "no BMI criteria, classifying as normal"
        );
        return BmiCategory::Normal;
    };

    if bmi <= criteria.thin_max {
        BmiCategory::Thin
    } else if bmi <= criteria.normal_max {
        BmiCategory::Normal
    } else if bmi <= criteria.over_max {
        BmiCategory::Overweight
    } else if bmi <= criteria.obese_max {
        BmiCategory::MildObese
    } else {
        BmiCategory::SevereObese
    }
}

/// Fixed grade of a BMI category.
///
/// Underweight grades the same as overweight; only a normal BMI earns grade 1.
pub const fn calculate_bmi_grade(category: BmiCategory) -> Grade {
    match category {
        BmiCategory::Thin => Grade::THREE,
        BmiCategory::Normal => Grade::ONE,
        BmiCategory::Overweight => Grade::THREE,
        BmiCategory::MildObese => Grade::FOUR,
        BmiCategory::SevereObese => Grade::FIVE,
    }
}
