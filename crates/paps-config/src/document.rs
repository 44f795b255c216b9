//! Serialized shape of a criteria table.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use paps_core::{
    BmiCriteria, CriteriaTable, CriteriaTableBuilder, Criterion, FitnessCategory, Grade,
    GradeLevel, MetricType, ParseTokenError, Sex,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ConfigError;

/// Criteria table bundled with the crate.
pub const EMBEDDED_CRITERIA: &str = include_str!("../data/paps_criteria.toml");

type PerCohort<T> = BTreeMap<String, BTreeMap<String, T>>;

/// A criteria table as written in TOML, YAML or JSON.
///
/// Keys are the raw tokens of the document (`male`, `중1`, `higher`, ...).
/// They are checked when the document is turned into a [`CriteriaTable`].
/// The camelCase spellings used by JSON exports (`availableMetrics`,
/// `thinMax`, ...) are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CriteriaDocument {
    /// Metric name to `higher` / `lower` / `bmi`.
    #[serde(default, alias = "metricType")]
    pub metric_type: BTreeMap<String, String>,

    /// Metric name to fitness category, extending the built-in map.
    #[serde(default, alias = "metricCategory")]
    pub metric_category: BTreeMap<String, String>,

    /// Sex to grade level to ordered metric names.
    #[serde(default, alias = "availableMetrics")]
    pub available_metrics: PerCohort<Vec<String>>,

    /// Sex to grade level to metric to criterion rows.
    #[serde(default)]
    pub criteria: PerCohort<BTreeMap<String, Vec<CriterionRecord>>>,

    /// Sex to grade level to BMI boundaries.
    #[serde(default, alias = "bmiCriteria")]
    pub bmi_criteria: PerCohort<BmiRecord>,
}

/// One criterion row; exactly one of `min` and `max` is set.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CriterionRecord {
    pub grade: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// BMI boundaries of one cohort.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BmiRecord {
    #[serde(alias = "thinMax")]
    pub thin_max: f64,
    #[serde(alias = "normalMax")]
    pub normal_max: f64,
    #[serde(alias = "overMax")]
    pub over_max: f64,
    #[serde(alias = "obeseMax")]
    pub obese_max: f64,
}

impl CriteriaDocument {
    /// Parses the bundled criteria table.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CRITERIA)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads a document, choosing the format from the file extension
    /// (`.toml`, `.yaml`/`.yml` or `.json`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "unsupported criteria format: {}",
                    path.display()
                )))
            }
        };
        let contents = std::fs::read_to_string(path)?;
        parse(&contents)
    }

    /// Validates the document and builds the immutable table.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] for unknown tokens or rows without exactly
    /// one threshold, [`ConfigError::Table`] for ordering violations.
    pub fn into_table(self) -> Result<CriteriaTable, ConfigError> {
        let mut builder = CriteriaTable::builder();

        for (metric, metric_type) in self.metric_type {
            let metric_type: MetricType = parse_token(&metric_type)?;
            builder = builder.metric_type(metric, metric_type);
        }

        for (metric, category) in self.metric_category {
            let category: FitnessCategory = parse_token(&category)?;
            builder = builder.metric_category(metric, category);
        }

        for (sex, level, metrics) in cohorts("available_metrics", self.available_metrics)? {
            builder = builder.available_metrics(sex, level, metrics);
        }

        for (sex, level, by_metric) in cohorts("criteria", self.criteria)? {
            for (metric, records) in by_metric {
                let criteria = records
                    .iter()
                    .map(|record| record.to_criterion(sex, level, &metric))
                    .collect::<Result<Vec<_>, _>>()?;
                builder = builder.criteria(sex, level, metric, criteria);
            }
        }

        for (sex, level, record) in cohorts("bmi_criteria", self.bmi_criteria)? {
            builder = builder.bmi_criteria(sex, level, record.into());
        }

        finish(builder)
    }
}

impl CriterionRecord {
    fn to_criterion(&self, sex: Sex, level: GradeLevel, metric: &str) -> Result<Criterion, ConfigError> {
        let grade = Grade::new(self.grade)?;
        match (self.min, self.max) {
            (Some(min), None) => Ok(Criterion::min(grade, min)),
            (None, Some(max)) => Ok(Criterion::max(grade, max)),
            _ => Err(ConfigError::Invalid(format!(
                "criterion for {metric} ({sex}/{level}) grade {} needs exactly one of min or max",
                self.grade
            ))),
        }
    }
}

impl From<BmiRecord> for BmiCriteria {
    fn from(r: BmiRecord) -> Self {
        BmiCriteria::new(r.thin_max, r.normal_max, r.over_max, r.obese_max)
    }
}

fn parse_token<T>(token: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseTokenError>,
{
    token
        .parse()
        .map_err(|e: ParseTokenError| ConfigError::Invalid(e.to_string()))
}

// Flattens `sex -> grade level -> T` into typed triples. A grade level
// spelled twice (`중1` and `m1`) is rejected rather than overwritten.
fn cohorts<T>(
    section: &str,
    nested: PerCohort<T>,
) -> Result<Vec<(Sex, GradeLevel, T)>, ConfigError> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (sex, by_level) in nested {
        let sex: Sex = parse_token(&sex)?;
        for (level, value) in by_level {
            let level: GradeLevel = parse_token(&level)?;
            if !seen.insert((sex, level)) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate cohort {sex}/{level} in {section}"
                )));
            }
            out.push((sex, level, value));
        }
    }
    Ok(out)
}

fn finish(builder: CriteriaTableBuilder) -> Result<CriteriaTable, ConfigError> {
    let table = builder.build()?;
    info!(
        event = "table_loaded",
        cohorts = table.cohort_count() as u64,
        metrics = table.metric_count() as u64,
    );
    Ok(table)
}
