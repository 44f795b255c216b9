use std::fmt;

use crate::error::PapsError;

/// A PAPS grade from 1 (best) to 5 (worst).
///
/// # Examples
///
/// ```
/// use paps_core::Grade;
///
/// let grade = Grade::new(2).unwrap();
/// assert_eq!(grade.points(), 4);
/// assert!(Grade::new(6).is_err());
/// assert!(Grade::BEST < Grade::WORST);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Grade(u8);

impl Grade {
    pub const ONE: Grade = Grade(1);
    pub const TWO: Grade = Grade(2);
    pub const THREE: Grade = Grade(3);
    pub const FOUR: Grade = Grade(4);
    pub const FIVE: Grade = Grade(5);

    /// Best attainable grade.
    pub const BEST: Grade = Grade::ONE;

    /// Worst grade, also the fail-soft default.
    pub const WORST: Grade = Grade::FIVE;

    /// Creates a grade, rejecting values outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, PapsError> {
        if (1..=5).contains(&value) {
            Ok(Grade(value))
        } else {
            Err(PapsError::InvalidGrade(value))
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Aggregation points: grade 1 scores 5, grade 5 scores 1.
    #[inline]
    pub const fn points(self) -> u8 {
        6 - self.0
    }

    /// Grades 4 and 5.
    #[inline]
    pub const fn is_weak(self) -> bool {
        self.0 >= 4
    }

    /// Grades 1 and 2.
    #[inline]
    pub const fn is_strong(self) -> bool {
        self.0 <= 2
    }
}

impl TryFrom<u8> for Grade {
    type Error = PapsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Grade::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
