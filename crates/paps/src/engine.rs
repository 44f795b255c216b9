//! Evaluator construction that hides table loading.

use paps_config::{ConfigError, PapsConfig};
use paps_core::PapsEvaluator;

/// Evaluator over the bundled PAPS criteria table.
pub fn default_evaluator() -> Result<PapsEvaluator, ConfigError> {
    evaluator_from_config(&PapsConfig::default())
}

/// Evaluator over the table selected by `config`.
pub fn evaluator_from_config(config: &PapsConfig) -> Result<PapsEvaluator, ConfigError> {
    Ok(PapsEvaluator::new(config.load_table()?))
}

/// Installs console output using the config's log filter, if any.
#[cfg(feature = "console")]
pub fn init_console(config: &PapsConfig) {
    match config.log_filter.as_deref() {
        Some(filter) => paps_console::init_with_filter(filter),
        None => paps_console::init(),
    }
}
