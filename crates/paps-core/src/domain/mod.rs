//! Domain vocabulary: who was measured, what was measured and how it grades.

mod grade;
mod grade_level;
pub mod metric;
mod sex;


pub use grade::Grade;
pub use grade_level::GradeLevel;
pub use metric::{FitnessCategory, FitnessGroup, MetricType};
pub use sex::Sex;

use thiserror::Error;

/// Error returned when a textual token names no known domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{token}'")]
pub struct ParseTokenError {
    kind: &'static str,
    token: String,
}

impl ParseTokenError {
    pub(crate) fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }

    /// What kind of token was expected (e.g. "sex").
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected token.
    pub fn token(&self) -> &str {
        &self.token
    }
}
