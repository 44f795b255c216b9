use std::collections::BTreeMap;

/// Raw measurements of one assessment session.
///
/// Values are taken as already validated by the caller: positive height and
/// weight, numeric metric values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub metrics: BTreeMap<String, f64>,
}

impl Measurement {
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm,
            weight_kg,
            metrics: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) one metric value.
    pub fn with_metric(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(metric.into(), value);
        self
    }

    pub fn metric(&self, metric: &str) -> Option<f64> {
        self.metrics.get(metric).copied()
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Measurement {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        self.metrics
            .extend(iter.into_iter().map(|(metric, value)| (metric.into(), value)));
    }
}
