//! Multi-instance extraction for labeled metrics
//!
//! A labeled metric yields one data point per sub-resource instance found in
//! a snapshot: one per filesystem, per disk partition, or per accelerator
//! device. Each point is told apart from its siblings by its label set.
//! A snapshot with no qualifying instance yields an empty sequence.

use super::metric_value::saturating_i64;
use super::{LABEL_ACCELERATOR_ID, LABEL_ACCELERATOR_MAKE, LABEL_ACCELERATOR_MODEL, LABEL_RESOURCE_ID};
use super::{LabeledMetric, Labels, MetricDescriptor, MetricValue};
use crate::snapshot::{AcceleratorStats, ContainerSpec, ContainerStats, FsStats};
use compact_str::CompactString;

/// Label set and raw value of one instance, before it is bound to a metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSample {
    pub labels: Labels,
    pub value: i64,
}

/// Applicability predicate and per-instance reader of a labeled metric.
#[derive(Debug, Clone, Copy)]
pub struct LabeledExtractor {
    /// Coarse capability or presence check for the whole entity.
    pub applies: fn(&ContainerSpec, &ContainerStats) -> bool,

    /// Reads one sample per qualifying instance.
    pub samples: fn(&ContainerStats) -> Vec<LabeledSample>,
}

impl LabeledExtractor {
    #[must_use]
    pub fn has_labeled_value(&self, spec: &ContainerSpec, stats: &ContainerStats) -> bool {
        (self.applies)(spec, stats)
    }

    /// Produce one [`LabeledMetric`] per qualifying instance in `stats`.
    ///
    /// Points carry the descriptor's kind, so disk I/O bytes are reported as
    /// cumulative counters rather than gauges.
    #[must_use]
    pub fn get_labeled_values(&self, descriptor: &MetricDescriptor, stats: &ContainerStats) -> Vec<LabeledMetric> {
        (self.samples)(stats)
            .into_iter()
            .map(|sample| LabeledMetric {
                name: descriptor.name,
                labels: sample.labels,
                value: MetricValue::int(descriptor.kind, sample.value),
            })
            .collect()
    }
}

pub(super) const fn has_filesystem(spec: &ContainerSpec, _stats: &ContainerStats) -> bool {
    spec.has_filesystem
}

pub(super) const fn has_disk_io(spec: &ContainerSpec, _stats: &ContainerStats) -> bool {
    spec.has_disk_io
}

pub(super) fn has_accelerators(_spec: &ContainerSpec, stats: &ContainerStats) -> bool {
    !stats.accelerators.is_empty()
}

fn resource_labels(resource_id: CompactString) -> Labels {
    Labels::from([(LABEL_RESOURCE_ID.key, resource_id)])
}

fn accelerator_labels(accelerator: &AcceleratorStats) -> Labels {
    Labels::from([
        (LABEL_ACCELERATOR_MAKE.key, accelerator.make.clone()),
        (LABEL_ACCELERATOR_MODEL.key, accelerator.model.clone()),
        (LABEL_ACCELERATOR_ID.key, accelerator.id.clone()),
    ])
}

/// One sample per filesystem, keyed by device.
pub(super) fn per_filesystem(stats: &ContainerStats, counter: fn(&FsStats) -> u64) -> Vec<LabeledSample> {
    stats
        .filesystem
        .iter()
        .map(|fs| LabeledSample {
            labels: resource_labels(fs.device.clone()),
            value: saturating_i64(counter(fs)),
        })
        .collect()
}

/// One sample per filesystem that reports inode counts; the others are skipped.
pub(super) fn per_filesystem_with_inodes(stats: &ContainerStats, counter: fn(&FsStats) -> u64) -> Vec<LabeledSample> {
    stats
        .filesystem
        .iter()
        .filter(|fs| fs.has_inodes)
        .map(|fs| LabeledSample {
            labels: resource_labels(fs.device.clone()),
            value: saturating_i64(counter(fs)),
        })
        .collect()
}

/// One sample per disk partition carrying the counter for `operation`.
///
/// A partition that does not report `operation` contributes a zero sample.
pub(super) fn per_disk(stats: &ContainerStats, operation: &str) -> Vec<LabeledSample> {
    stats
        .disk_io
        .io_service_bytes
        .iter()
        .map(|disk| LabeledSample {
            labels: resource_labels(disk.resource_id()),
            value: saturating_i64(disk.operation_bytes(operation)),
        })
        .collect()
}

/// One sample per attached accelerator device.
pub(super) fn per_accelerator(stats: &ContainerStats, counter: fn(&AcceleratorStats) -> u64) -> Vec<LabeledSample> {
    stats
        .accelerators
        .iter()
        .map(|accelerator| LabeledSample {
            labels: accelerator_labels(accelerator),
            value: saturating_i64(counter(accelerator)),
        })
        .collect()
}
