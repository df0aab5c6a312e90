use super::LabelDescriptor;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// How values of a metric evolve over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetricKind {
    /// Monotonically non-decreasing counter since the entity started.
    Cumulative,

    /// Instantaneous value that may rise or fall between samples.
    Gauge,
}

/// Numeric representation of a metric's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum ValueType {
    #[serde(rename = "int64")]
    #[strum(serialize = "int64")]
    Int64,

    #[serde(rename = "double")]
    #[strum(serialize = "double")]
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum Units {
    #[serde(rename = "bytes")]
    #[strum(serialize = "bytes")]
    Bytes,

    #[serde(rename = "ms")]
    #[strum(serialize = "ms")]
    Milliseconds,

    #[serde(rename = "ns")]
    #[strum(serialize = "ns")]
    Nanoseconds,

    #[serde(rename = "count")]
    #[strum(serialize = "count")]
    Count,
}

/// Identity and semantics of one metric.
///
/// `name` is the join key used by every downstream mapping and never changes
/// once a metric is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDescriptor {
    pub name: &'static str,
    pub description: &'static str,

    /// Label dimensions the metric may carry; empty for scalar metrics.
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub labels: &'static [LabelDescriptor],

    #[serde(rename = "type")]
    pub kind: MetricKind,
    pub value_type: ValueType,
    pub units: Units,
}

impl MetricDescriptor {
    /// Whether the metric declares the label `key`.
    #[must_use]
    pub fn has_label(&self, key: &str) -> bool {
        self.labels.iter().any(|label| label.key == key)
    }
}
