//! Turning one snapshot into data points
//!
//! [`derive_values`] walks [`ALL_METRICS`] in declaration order and asks each
//! metric for its values. Derived metrics have no extractor and are skipped;
//! their values are produced downstream.

use super::{ALL_METRICS, DerivationOptions, Extraction, LabeledMetric, Metric, MetricValue, family_for_name};
use crate::snapshot::{ContainerInfo, ContainerStats};

const LOG_TARGET: &str = "derivation";

/// A scalar value bound to the metric that produced it.
#[derive(Debug, Clone, Copy)]
pub struct ScalarPoint {
    pub metric: &'static Metric,
    pub value: MetricValue,
}

/// Every value extracted from one snapshot.
#[derive(Debug, Clone, Default)]
pub struct DerivedValues {
    pub scalars: Vec<ScalarPoint>,
    pub labeled: Vec<LabeledMetric>,
}

impl DerivedValues {
    /// The scalar value recorded for `name`, if any.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<MetricValue> {
        self.scalars.iter().find(|point| point.metric.name() == name).map(|point| point.value)
    }

    /// The labeled points recorded for `name`, in extraction order.
    pub fn labeled_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a LabeledMetric> + 'a {
        self.labeled.iter().filter(move |point| point.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scalars.len() + self.labeled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.labeled.is_empty()
    }
}

/// Extract every applicable value for one entity snapshot.
#[must_use]
pub fn derive_values(info: &ContainerInfo, stats: &ContainerStats, options: &DerivationOptions) -> DerivedValues {
    let mut values = DerivedValues::default();

    for metric in ALL_METRICS.iter().copied() {
        if !options.includes(family_for_name(metric.name())) {
            log::trace!(target: LOG_TARGET, "Skipping '{}': family not selected", metric.name());
            continue;
        }

        match &metric.extraction {
            Extraction::Scalar(_) => {
                if !metric.has_value(&info.spec) {
                    log::trace!(target: LOG_TARGET, "Skipping '{}' for '{}': capability absent", metric.name(), info.name);
                    continue;
                }

                if !options.emit_node_suppressed && metric.is_suppressed_for(info) {
                    log::trace!(target: LOG_TARGET, "Dropping node-suppressed '{}'", metric.name());
                    continue;
                }

                if let Some(value) = metric.get_value(info, stats) {
                    values.scalars.push(ScalarPoint { metric, value });
                }
            }

            Extraction::Labeled(_) => {
                if !options.labeled || !metric.has_labeled_value(&info.spec, stats) {
                    log::trace!(target: LOG_TARGET, "Skipping labeled '{}' for '{}'", metric.name(), info.name);
                    continue;
                }

                values.labeled.extend(metric.get_labeled_values(stats));
            }

            Extraction::Derived => {}
        }
    }

    log::debug!(
        target: LOG_TARGET,
        "Derived {} scalar and {} labeled values for {} '{}'",
        values.scalars.len(),
        values.labeled.len(),
        info.kind,
        info.name
    );

    values
}
