//! Metric catalog and value extraction from collector snapshots
//!
//! This module describes every metric the pipeline knows about and turns a
//! per-entity snapshot ([`ContainerInfo`](crate::snapshot::ContainerInfo) plus
//! [`ContainerStats`](crate::snapshot::ContainerStats)) into typed data points.
//!
//! # Implementation Model
//!
//! The core abstraction is the [`Metric`] type, which pairs a
//! [`MetricDescriptor`] with an [`Extraction`]:
//! - **Scalar**: at most one value per snapshot, gated on the entity's declared
//!   capabilities. Some counters report 0 for the node aggregate ([`NodePolicy`]).
//! - **Labeled**: one value per filesystem, disk partition or accelerator,
//!   each distinguished by its [`Labels`].
//! - **Derived**: no extractor; rates and cluster-state metrics are computed
//!   downstream and are only described here.
//!
//! Metric definitions are statically registered in `metric_def.rs` and grouped
//! in `catalog.rs`. Names are slash-namespaced (e.g. `memory/working_set`), and
//! each name belongs to at most one [`MetricFamily`]. The [`derive_values`]
//! function runs a snapshot through all registered extractors.

mod catalog;
mod derivation;
mod labeled;
mod labels;
mod metric;
mod metric_def;
mod metric_descriptor;
mod metric_family;
mod metric_value;
mod options;
mod scalar;

pub use catalog::{
    ADDITIONAL_METRICS, ALL_METRICS, CPU_METRICS, CUSTOM_METRIC_PREFIX, FILESYSTEM_METRICS, LABELED_METRICS, MEMORY_METRICS,
    NETWORK_METRICS, NODE_AUTOSCALING_METRICS, RATE_METRICS, RATE_METRICS_MAPPING, STANDARD_METRICS, family_for_name, find_metric,
    is_custom_metric, is_node_autoscaling_metric, metrics_in_family, rate_metric_for, validate_catalog,
};
pub use derivation::{DerivedValues, ScalarPoint, derive_values};
pub use labeled::{LabeledExtractor, LabeledSample};
pub use labels::{
    ACCELERATOR_CAPACITY_LABELS, ACCELERATOR_LABELS, LABEL_ACCELERATOR_ID, LABEL_ACCELERATOR_MAKE, LABEL_ACCELERATOR_MODEL,
    LABEL_RESOURCE_ID, LabelDescriptor, Labels, RESOURCE_LABELS,
};
pub use metric::{Extraction, Metric};
pub use metric_def::*;
pub use metric_descriptor::{MetricDescriptor, MetricKind, Units, ValueType};
pub use metric_family::MetricFamily;
pub use metric_value::{LabeledMetric, MetricValue};
pub use options::DerivationOptions;
pub use scalar::{NodePolicy, ScalarExtractor, uptime_at};
