//! Configuration system for the PAPS grading engine.
//!
//! Loads criteria tables from TOML, YAML or JSON documents, and the
//! engine's own settings from TOML or YAML, so that tables can be extended
//! with new cohorts and metrics without code changes.
//!
//! # Examples
//!
//! Build a table from a TOML document:
//!
//! ```
//! use paps_config::CriteriaDocument;
//! use paps_core::{Grade, GradeLevel, Sex};
//!
//! let table = CriteriaDocument::from_toml_str(r#"
//!     [metric_type]
//!     grip = "higher"
//!
//!     [available_metrics.female]
//!     "고1" = ["grip", "bmi"]
//!
//!     [criteria.female."고1"]
//!     grip = [
//!         { grade = 1, min = 29.0 },
//!         { grade = 3, min = 20.0 },
//!         { grade = 5, min = 0.0 },
//!     ]
//! "#).unwrap().into_table().unwrap();
//!
//! assert_eq!(table.available_metrics(Sex::Female, GradeLevel::High1).len(), 2);
//! assert_eq!(paps_core::calculate_grade(&table, GradeLevel::High1, Sex::Female, "grip", 25.0), Grade::THREE);
//! ```
//!
//! Fall back to the bundled table when no settings file exists:
//!
//! ```
//! use paps_config::PapsConfig;
//!
//! let config = PapsConfig::load("paps.toml").unwrap_or_default();
//! let table = config.load_table().unwrap();
//! assert!(!table.is_empty());
//! ```

mod document;


use std::path::{Path, PathBuf};

use paps_core::{CriteriaTable, PapsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use document::{BmiRecord, CriteriaDocument, CriterionRecord, EMBEDDED_CRITERIA};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid criteria table: {0}")]
    Table(#[from] PapsError),
}

/// Engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PapsConfig {
    /// Criteria document to load instead of the bundled table.
    #[serde(default)]
    pub criteria_path: Option<PathBuf>,

    /// `tracing` filter directive for console output (e.g. "paps_core=debug").
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl PapsConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the criteria document path.
    pub fn with_criteria_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.criteria_path = Some(path.into());
        self
    }

    /// Sets the console log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Loads the configured criteria table, or the bundled one.
    pub fn load_table(&self) -> Result<CriteriaTable, ConfigError> {
        match &self.criteria_path {
            Some(path) => load_table(path),
            None => embedded_table(),
        }
    }
}

/// Loads and validates a criteria document from a file.
pub fn load_table(path: impl AsRef<Path>) -> Result<CriteriaTable, ConfigError> {
    CriteriaDocument::from_file(path)?.into_table()
}

/// The bundled PAPS criteria table.
pub fn embedded_table() -> Result<CriteriaTable, ConfigError> {
    CriteriaDocument::embedded()?.into_table()
}
