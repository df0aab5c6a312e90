use super::{Labels, MetricKind, ValueType};
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};

/// A single measured value.
///
/// Exactly one of `int_value` and `float_value` is meaningful, selected by
/// `value_type`; the other is left at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub value_type: ValueType,
    #[serde(rename = "type")]
    pub kind: MetricKind,
    #[serde(default)]
    pub int_value: i64,
    #[serde(default)]
    pub float_value: f64,
}

impl MetricValue {
    #[must_use]
    pub const fn int(kind: MetricKind, value: i64) -> Self {
        Self {
            value_type: ValueType::Int64,
            kind,
            int_value: value,
            float_value: 0.0,
        }
    }

    #[must_use]
    pub const fn float(kind: MetricKind, value: f64) -> Self {
        Self {
            value_type: ValueType::Float,
            kind,
            int_value: 0,
            float_value: value,
        }
    }

    /// The meaningful value widened to `f64`.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "counters above 2^53 lose precision, which is fine for reporting")]
    pub const fn as_f64(&self) -> f64 {
        match self.value_type {
            ValueType::Int64 => self.int_value as f64,
            ValueType::Float => self.float_value,
        }
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.value_type {
            ValueType::Int64 => write!(f, "{}", self.int_value),
            ValueType::Float => write!(f, "{}", self.float_value),
        }
    }
}

/// One data point of a labeled metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledMetric {
    pub name: &'static str,
    pub labels: Labels,
    pub value: MetricValue,
}

/// Convert a raw unsigned counter, saturating at `i64::MAX`.
pub(crate) fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
