//! The PAPS reference table: per-cohort criterion lists and BMI boundaries.
//!
//! A [`CriteriaTable`] is built once through [`CriteriaTableBuilder`], which
//! validates ordering invariants up front, and is read-only afterwards.

mod bmi_criteria;
mod criterion;
mod table;

#[cfg(test)]
mod tests;

pub use bmi_criteria::BmiCriteria;
pub use criterion::{Criterion, Threshold};
pub use table::{CriteriaTable, CriteriaTableBuilder};
