use super::{LabeledExtractor, LabeledMetric, MetricDescriptor, MetricValue, ScalarExtractor};
use crate::snapshot::{ContainerInfo, ContainerSpec, ContainerStats};

/// How values of a metric are obtained.
#[derive(Debug, Clone, Copy)]
pub enum Extraction {
    /// At most one value per entity per snapshot.
    Scalar(ScalarExtractor),

    /// Zero or more values per entity per snapshot, one per sub-resource instance.
    Labeled(LabeledExtractor),

    /// No extractor; values are produced downstream, e.g. by rate computation
    /// or from cluster state.
    Derived,
}

/// A registered metric: its descriptor plus the way its values are extracted.
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub descriptor: MetricDescriptor,
    pub extraction: Extraction,
}

impl Metric {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.descriptor.name
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.descriptor.description
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self.extraction, Extraction::Scalar(_))
    }

    #[must_use]
    pub const fn is_labeled(&self) -> bool {
        matches!(self.extraction, Extraction::Labeled(_))
    }

    #[must_use]
    pub const fn is_derived(&self) -> bool {
        matches!(self.extraction, Extraction::Derived)
    }

    /// Whether this scalar metric applies to an entity with `spec`'s capabilities.
    ///
    /// Always `false` for labeled and derived metrics.
    #[must_use]
    pub fn has_value(&self, spec: &ContainerSpec) -> bool {
        match &self.extraction {
            Extraction::Scalar(scalar) => scalar.has_value(spec),
            Extraction::Labeled(_) | Extraction::Derived => false,
        }
    }

    /// Extract this scalar metric's value, or `None` for labeled and derived metrics.
    ///
    /// For the node aggregate, counters sourced through a different path
    /// upstream come back as 0; see [`Self::is_suppressed_for`].
    #[must_use]
    pub fn get_value(&self, info: &ContainerInfo, stats: &ContainerStats) -> Option<MetricValue> {
        match &self.extraction {
            Extraction::Scalar(scalar) => Some(scalar.get_value(&self.descriptor, info, stats)),
            Extraction::Labeled(_) | Extraction::Derived => None,
        }
    }

    /// Whether [`Self::get_value`] yields the node-suppression zero for `info`
    /// instead of a reading.
    #[must_use]
    pub const fn is_suppressed_for(&self, info: &ContainerInfo) -> bool {
        match &self.extraction {
            Extraction::Scalar(scalar) => scalar.is_suppressed_for(info),
            Extraction::Labeled(_) | Extraction::Derived => false,
        }
    }

    /// Whether this labeled metric has values for the entity and snapshot.
    ///
    /// Always `false` for scalar and derived metrics.
    #[must_use]
    pub fn has_labeled_value(&self, spec: &ContainerSpec, stats: &ContainerStats) -> bool {
        match &self.extraction {
            Extraction::Labeled(labeled) => labeled.has_labeled_value(spec, stats),
            Extraction::Scalar(_) | Extraction::Derived => false,
        }
    }

    /// Extract one point per qualifying instance; empty for scalar and derived metrics.
    #[must_use]
    pub fn get_labeled_values(&self, stats: &ContainerStats) -> Vec<LabeledMetric> {
        match &self.extraction {
            Extraction::Labeled(labeled) => labeled.get_labeled_values(&self.descriptor, stats),
            Extraction::Scalar(_) | Extraction::Derived => Vec::new(),
        }
    }
}
