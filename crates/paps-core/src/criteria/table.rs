use std::collections::{HashMap, HashSet};

use crate::domain::{FitnessCategory, GradeLevel, MetricType, Sex};
use crate::error::{PapsError, Result};

use super::{BmiCriteria, Criterion, Threshold};

type Cohort = (Sex, GradeLevel);

/// Everything the table knows about one (sex, grade level) pair.
#[derive(Debug, Clone, Default)]
struct CohortEntry {
    available: Vec<String>,
    criteria: HashMap<String, Vec<Criterion>>,
    bmi: Option<BmiCriteria>,
}

/// Immutable PAPS reference table.
///
/// The table is sparse: any cohort may lack available metrics, criterion
/// lists or BMI boundaries. Lookups return `None` (or an empty slice) for
/// such gaps; callers decide on the fallback.
///
/// # Examples
///
/// ```
/// use paps_core::{CriteriaTable, Criterion, Grade, GradeLevel, MetricType, Sex};
///
/// let table = CriteriaTable::builder()
///     .metric_type("grip", MetricType::Higher)
///     .criteria(
///         Sex::Female,
///         GradeLevel::High1,
///         "grip",
///         vec![
///             Criterion::min(Grade::ONE, 29.0),
///             Criterion::min(Grade::TWO, 24.0),
///             Criterion::min(Grade::FIVE, 0.0),
///         ],
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(table.criteria(Sex::Female, GradeLevel::High1, "grip").unwrap().len(), 3);
/// assert!(table.criteria(Sex::Male, GradeLevel::High1, "grip").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CriteriaTable {
    metric_types: HashMap<String, MetricType>,
    categories: HashMap<String, FitnessCategory>,
    cohorts: HashMap<Cohort, CohortEntry>,
}

impl CriteriaTable {
    pub fn builder() -> CriteriaTableBuilder {
        CriteriaTableBuilder::default()
    }

    /// Declared type of a metric.
    pub fn metric_type(&self, metric: &str) -> Option<MetricType> {
        self.metric_types.get(metric).copied()
    }

    /// Fitness category of a metric: table overrides first, then the
    /// built-in map.
    pub fn category(&self, metric: &str) -> Option<FitnessCategory> {
        self.categories
            .get(metric)
            .copied()
            .or_else(|| FitnessCategory::for_metric(metric))
    }

    /// Criterion list for a metric, ordered from grade 1 to grade 5.
    pub fn criteria(&self, sex: Sex, grade_level: GradeLevel, metric: &str) -> Option<&[Criterion]> {
        self.cohorts
            .get(&(sex, grade_level))
            .and_then(|entry| entry.criteria.get(metric))
            .map(Vec::as_slice)
    }

    /// BMI category boundaries for a cohort.
    pub fn bmi_criteria(&self, sex: Sex, grade_level: GradeLevel) -> Option<&BmiCriteria> {
        self.cohorts
            .get(&(sex, grade_level))
            .and_then(|entry| entry.bmi.as_ref())
    }

    /// Ordered list of metrics measured for a cohort; empty when none are configured.
    pub fn available_metrics(&self, sex: Sex, grade_level: GradeLevel) -> &[String] {
        self.cohorts
            .get(&(sex, grade_level))
            .map(|entry| entry.available.as_slice())
            .unwrap_or(&[])
    }

    /// Number of cohorts with any data.
    pub fn cohort_count(&self) -> usize {
        self.cohorts.len()
    }

    /// Number of metrics with a declared type.
    pub fn metric_count(&self) -> usize {
        self.metric_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cohorts.is_empty() && self.metric_types.is_empty()
    }
}

/// Collects table data and validates it once in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct CriteriaTableBuilder {
    table: CriteriaTable,
}

impl CriteriaTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares whether larger or smaller values of `metric` are better.
    pub fn metric_type(mut self, metric: impl Into<String>, metric_type: MetricType) -> Self {
        self.table.metric_types.insert(metric.into(), metric_type);
        self
    }

    /// Assigns `metric` to a fitness category, overriding the built-in map.
    pub fn metric_category(mut self, metric: impl Into<String>, category: FitnessCategory) -> Self {
        self.table.categories.insert(metric.into(), category);
        self
    }

    /// Sets the ordered list of metrics measured for a cohort.
    pub fn available_metrics<I, M>(mut self, sex: Sex, grade_level: GradeLevel, metrics: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.entry(sex, grade_level).available = metrics.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the criterion list of a metric for a cohort (grade 1 first).
    pub fn criteria(
        mut self,
        sex: Sex,
        grade_level: GradeLevel,
        metric: impl Into<String>,
        criteria: Vec<Criterion>,
    ) -> Self {
        self.entry(sex, grade_level)
            .criteria
            .insert(metric.into(), criteria);
        self
    }

    /// Sets the BMI boundaries for a cohort.
    pub fn bmi_criteria(mut self, sex: Sex, grade_level: GradeLevel, bmi: BmiCriteria) -> Self {
        self.entry(sex, grade_level).bmi = Some(bmi);
        self
    }

    fn entry(&mut self, sex: Sex, grade_level: GradeLevel) -> &mut CohortEntry {
        self.table.cohorts.entry((sex, grade_level)).or_default()
    }

    /// Validates ordering invariants and freezes the table.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: an empty or unordered criterion
    /// list, thresholds that contradict the metric type, unordered BMI
    /// boundaries, or a metric listed twice for a cohort. Cohorts are
    /// checked in sex then grade-level order, metrics by name.
    pub fn build(self) -> Result<CriteriaTable> {
        let table = self.table;
        let cohorts = Sex::ALL
            .iter()
            .flat_map(|&sex| GradeLevel::ALL.iter().map(move |&level| (sex, level)));
        for (sex, grade_level) in cohorts {
            let Some(entry) = table.cohorts.get(&(sex, grade_level)) else {
                continue;
            };
            let mut seen = HashSet::new();
            for metric in &entry.available {
                if !seen.insert(metric.as_str()) {
                    return Err(PapsError::DuplicateMetric {
                        sex,
                        grade_level,
                        metric: metric.clone(),
                    });
                }
            }

            let mut metrics: Vec<&String> = entry.criteria.keys().collect();
            metrics.sort();
            for metric in metrics {
                let criteria = &entry.criteria[metric];
                validate_criteria(
                    sex,
                    grade_level,
                    metric,
                    table.metric_types.get(metric).copied(),
                    criteria,
                )?;
            }

            if let Some(bmi) = &entry.bmi {
                if !bmi.is_ordered() {
                    return Err(PapsError::InvalidBmiCriteria { sex, grade_level });
                }
            }
        }
        Ok(table)
    }
}

fn validate_criteria(
    sex: Sex,
    grade_level: GradeLevel,
    metric: &str,
    metric_type: Option<MetricType>,
    criteria: &[Criterion],
) -> Result<()> {
    let Some(first) = criteria.first() else {
        return Err(PapsError::EmptyCriteria {
            sex,
            grade_level,
            metric: metric.to_string(),
        });
    };

    let kind = first.threshold().metric_type();
    if let Some(declared) = metric_type {
        if declared != kind {
            return Err(PapsError::ThresholdMismatch {
                sex,
                grade_level,
                metric: metric.to_string(),
                metric_type: declared,
            });
        }
    }

    for (index, criterion) in criteria.iter().enumerate() {
        if criterion.threshold().value().is_nan() {
            return Err(PapsError::NanThreshold {
                sex,
                grade_level,
                metric: metric.to_string(),
                index,
            });
        }
        if criterion.threshold().metric_type() != kind {
            return Err(PapsError::MixedThresholds {
                sex,
                grade_level,
                metric: metric.to_string(),
            });
        }
    }

    for (index, pair) in criteria.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        let ordered = prev.grade() < next.grade()
            && match (prev.threshold(), next.threshold()) {
                (Threshold::Min(a), Threshold::Min(b)) => a > b,
                (Threshold::Max(a), Threshold::Max(b)) => a < b,
                _ => false,
            };
        if !ordered {
            return Err(PapsError::UnorderedCriteria {
                sex,
                grade_level,
                metric: metric.to_string(),
                index: index + 1,
            });
        }
    }

    Ok(())
}
