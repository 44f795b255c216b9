use std::fmt;
use std::str::FromStr;

use super::ParseTokenError;

/// School year of the measured student.
///
/// PAPS starts at the fourth elementary year, so the nine levels run from
/// `초4` to `고3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradeLevel {
    #[cfg_attr(feature = "serde", serde(rename = "초4", alias = "e4"))]
    Elementary4,
    #[cfg_attr(feature = "serde", serde(rename = "초5", alias = "e5"))]
    Elementary5,
    #[cfg_attr(feature = "serde", serde(rename = "초6", alias = "e6"))]
    Elementary6,
    #[cfg_attr(feature = "serde", serde(rename = "중1", alias = "m1"))]
    Middle1,
    #[cfg_attr(feature = "serde", serde(rename = "중2", alias = "m2"))]
    Middle2,
    #[cfg_attr(feature = "serde", serde(rename = "중3", alias = "m3"))]
    Middle3,
    #[cfg_attr(feature = "serde", serde(rename = "고1", alias = "h1"))]
    High1,
    #[cfg_attr(feature = "serde", serde(rename = "고2", alias = "h2"))]
    High2,
    #[cfg_attr(feature = "serde", serde(rename = "고3", alias = "h3"))]
    High3,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 9] = [
        GradeLevel::Elementary4,
        GradeLevel::Elementary5,
        GradeLevel::Elementary6,
        GradeLevel::Middle1,
        GradeLevel::Middle2,
        GradeLevel::Middle3,
        GradeLevel::High1,
        GradeLevel::High2,
        GradeLevel::High3,
    ];

    /// Canonical token (`초4` .. `고3`).
    pub const fn as_str(self) -> &'static str {
        match self {
            GradeLevel::Elementary4 => "초4",
            GradeLevel::Elementary5 => "초5",
            GradeLevel::Elementary6 => "초6",
            GradeLevel::Middle1 => "중1",
            GradeLevel::Middle2 => "중2",
            GradeLevel::Middle3 => "중3",
            GradeLevel::High1 => "고1",
            GradeLevel::High2 => "고2",
            GradeLevel::High3 => "고3",
        }
    }

    /// ASCII alias (`e4` .. `h3`).
    pub const fn ascii_alias(self) -> &'static str {
        match self {
            GradeLevel::Elementary4 => "e4",
            GradeLevel::Elementary5 => "e5",
            GradeLevel::Elementary6 => "e6",
            GradeLevel::Middle1 => "m1",
            GradeLevel::Middle2 => "m2",
            GradeLevel::Middle3 => "m3",
            GradeLevel::High1 => "h1",
            GradeLevel::High2 => "h2",
            GradeLevel::High3 => "h3",
        }
    }

    /// Korean display label, e.g. "중학교 1학년".
    pub const fn label(self) -> &'static str {
        match self {
            GradeLevel::Elementary4 => "초등학교 4학년",
            GradeLevel::Elementary5 => "초등학교 5학년",
            GradeLevel::Elementary6 => "초등학교 6학년",
            GradeLevel::Middle1 => "중학교 1학년",
            GradeLevel::Middle2 => "중학교 2학년",
            GradeLevel::Middle3 => "중학교 3학년",
            GradeLevel::High1 => "고등학교 1학년",
            GradeLevel::High2 => "고등학교 2학년",
            GradeLevel::High3 => "고등학교 3학년",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeLevel {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s || level.ascii_alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTokenError::new("grade level", s))
    }
}
