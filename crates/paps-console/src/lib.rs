//! Colorful console output for grading events.
//!
//! Provides a custom `tracing` layer that formats engine events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Criteria table loaded
//! - **DEBUG**: One line per generated result summary
//! - **TRACE**: Fail-soft fallbacks (missing criteria, missing BMI boundaries)

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "paps_core=info,paps_config=info";

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output, honoring `RUST_LOG`.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initializes console output with an explicit filter directive,
/// e.g. `"paps_core=debug"`. Invalid directives are ignored.
pub fn init_with_filter(directive: &str) {
    install(EnvFilter::new(directive));
}

fn install(filter: EnvFilter) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PapsConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 ____   _    ____  ____
|  _ \ / \  |  _ \/ ___|
| |_) / _ \ | |_) \___ \
|  __/ ___ \|  __/ ___) |
|_| /_/   \_\_|   |____/
"#;

    let version_line = format!("        v{} - Fitness Grading Engine\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats grading events with colors.
pub struct PapsConsoleLayer;

impl<S: Subscriber> Layer<S> for PapsConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("paps") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    sex: Option<String>,
    grade_level: Option<String>,
    metric: Option<String>,
    metric_type: Option<String>,
    bmi_category: Option<String>,
    bmi: Option<f64>,
    graded: Option<u64>,
    weak: Option<u64>,
    strong: Option<u64>,
    cohorts: Option<u64>,
    metrics: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "message" => self.message = Some(s),
            "metric_type" => self.metric_type = Some(s),
            other => self.set_text(other, &s),
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "bmi" {
            self.bmi = Some(value);
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "graded" => self.graded = Some(value),
            "weak" => self.weak = Some(value),
            "strong" => self.strong = Some(value),
            "cohorts" => self.cohorts = Some(value),
            "metrics" => self.metrics = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value);
    }
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: &str) {
        let value = Some(value.to_string());
        match name {
            "event" => self.event = value,
            "message" => self.message = value,
            "sex" => self.sex = value,
            "grade_level" => self.grade_level = value,
            "metric" => self.metric = value,
            "metric_type" => self.metric_type = value,
            "bmi_category" => self.bmi_category = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "table_loaded" => format_table_loaded(v),
        "summary" => format_summary(v),
        "grade_fallback" | "bmi_fallback" => format_fallback(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs()).bright_black().to_string()
}

fn format_cohort(v: &EventVisitor) -> String {
    match (v.sex.as_deref(), v.grade_level.as_deref()) {
        (Some(sex), Some(level)) => format!("{}/{}", sex, level),
        (Some(sex), None) => sex.to_string(),
        (None, Some(level)) => level.to_string(),
        (None, None) => "-".to_string(),
    }
}

fn format_table_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Criteria loaded │ {} cohorts │ {} metrics",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.cohorts.unwrap_or(0).bright_yellow(),
        v.metrics.unwrap_or(0).bright_yellow(),
    )
}

fn format_summary(v: &EventVisitor) -> String {
    let category = v.bmi_category.as_deref().unwrap_or("unknown");
    let weak = v.weak.unwrap_or(0);
    let strong = v.strong.unwrap_or(0);

    format!(
        "{} {} {} │ BMI {} {} │ {} graded │ {} weak │ {} strong",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_cohort(v).white().bold(),
        format!("{:.1}", v.bmi.unwrap_or(0.0)).bright_yellow(),
        format_bmi_category(category),
        v.graded.unwrap_or(0).white(),
        if weak > 0 {
            weak.bright_red().to_string()
        } else {
            weak.white().to_string()
        },
        if strong > 0 {
            strong.bright_green().to_string()
        } else {
            strong.white().to_string()
        },
    )
}

fn format_bmi_category(category: &str) -> String {
    let text = format!("({})", category);
    match category {
        "normal" => text.bright_green().to_string(),
        "thin" | "overweight" => text.yellow().to_string(),
        "mild_obese" | "severe_obese" => text.bright_red().to_string(),
        _ => text.white().to_string(),
    }
}

fn format_fallback(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let subject = v.metric.as_deref().unwrap_or("bmi");
    let reason = v.message.as_deref().unwrap_or("fallback");
    let mut output = format!(
        "{} {} {} │ {} │ {}",
        format_elapsed(),
        "↓".yellow(),
        subject.white(),
        format_cohort(v).bright_black(),
        reason.bright_black(),
    );
    if let Some(metric_type) = &v.metric_type {
        output.push_str(&format!(" │ type {}", metric_type.bright_black()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_summary_line() {
        let v = EventVisitor {
            sex: Some("male".into()),
            grade_level: Some("중1".into()),
            bmi: Some(20.8),
            bmi_category: Some("normal".into()),
            graded: Some(8),
            weak: Some(0),
            strong: Some(2),
            ..visitor("summary")
        };

        let line = format_event(&v, Level::DEBUG);
        assert!(line.contains("male/중1"));
        assert!(line.contains("20.8"));
        assert!(line.contains("(normal)"));
        assert!(line.contains("graded"));
    }

    #[test]
    fn test_table_loaded_line() {
        let v = EventVisitor {
            cohorts: Some(18),
            metrics: Some(10),
            ..visitor("table_loaded")
        };

        let line = format_event(&v, Level::INFO);
        assert!(line.contains("Criteria loaded"));
        assert!(line.contains("18"));
    }

    #[test]
    fn test_fallback_only_at_trace() {
        let v = EventVisitor {
            metric: Some("unknownMetric".into()),
            message: Some("no criteria for metric".into()),
            ..visitor("grade_fallback")
        };

        assert!(format_event(&v, Level::DEBUG).is_empty());
        let line = format_event(&v, Level::TRACE);
        assert!(line.contains("unknownMetric"));
        assert!(line.contains("no criteria for metric"));
    }

    #[test]
    fn test_unknown_events_are_silent() {
        assert!(format_event(&visitor("table_saved"), Level::INFO).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
    }

    #[test]
    fn test_cohort_formatting() {
        let mut v = visitor("bmi_fallback");
        assert_eq!(format_cohort(&v), "-");
        v.grade_level = Some("고2".into());
        assert_eq!(format_cohort(&v), "고2");
        v.sex = Some("female".into());
        assert_eq!(format_cohort(&v), "female/고2");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_with_filter("paps_core=trace");
        init();
        tracing::info!(target: "paps_core", event = "table_loaded", cohorts = 1u64, metrics = 1u64);
    }
}
