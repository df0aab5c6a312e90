//! Metric groups and the lookups built on them
//!
//! Every table here is a `static` over the metric definitions and is never
//! written after initialization, so lookups need no synchronization.

use super::metric_def::*;
use super::{Metric, MetricFamily, MetricKind};
use crate::Result;
use ohno::bail;
use std::collections::HashSet;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "   catalog";

/// Prefix reserved for application-defined metrics.
pub const CUSTOM_METRIC_PREFIX: &str = "custom/";

/// Metrics read directly from the collector's snapshot.
pub static STANDARD_METRICS: &[&Metric] = &[
    &UPTIME,
    &CPU_USAGE,
    &MEMORY_CACHE,
    &MEMORY_RSS,
    &MEMORY_USAGE,
    &MEMORY_WORKING_SET,
    &MEMORY_PAGE_FAULTS,
    &MEMORY_MAJOR_PAGE_FAULTS,
    &NETWORK_RX,
    &NETWORK_RX_ERRORS,
    &NETWORK_TX,
    &NETWORK_TX_ERRORS,
];

/// Metrics computed from cluster state outside this crate.
pub static ADDITIONAL_METRICS: &[&Metric] = &[&CPU_REQUEST, &CPU_LIMIT, &MEMORY_REQUEST, &MEMORY_LIMIT];

/// Per-second rates computed downstream from the cumulative metrics in [`RATE_METRICS_MAPPING`].
pub static RATE_METRICS: &[&Metric] = &[
    &CPU_USAGE_RATE,
    &NETWORK_RX_RATE,
    &NETWORK_TX_RATE,
    &DISK_IO_READ_RATE,
    &DISK_IO_WRITE_RATE,
];

/// Raw cumulative metric paired with the rate metric derived from it.
pub static RATE_METRICS_MAPPING: &[(&Metric, &Metric)] = &[
    (&CPU_USAGE, &CPU_USAGE_RATE),
    (&NETWORK_RX, &NETWORK_RX_RATE),
    (&NETWORK_TX, &NETWORK_TX_RATE),
    (&DISK_IO_READ, &DISK_IO_READ_RATE),
    (&DISK_IO_WRITE, &DISK_IO_WRITE_RATE),
];

/// Metrics with one data point per filesystem, disk partition or accelerator.
pub static LABELED_METRICS: &[&Metric] = &[
    &DISK_IO_READ,
    &DISK_IO_WRITE,
    &FILESYSTEM_USAGE,
    &FILESYSTEM_LIMIT,
    &FILESYSTEM_AVAILABLE,
    &FILESYSTEM_INODES,
    &FILESYSTEM_INODES_FREE,
    &ACCELERATOR_MEMORY_TOTAL,
    &ACCELERATOR_MEMORY_USED,
    &ACCELERATOR_DUTY_CYCLE,
];

/// Node-level metrics consumed by the cluster autoscaler.
pub static NODE_AUTOSCALING_METRICS: &[&Metric] = &[
    &NODE_CPU_CAPACITY,
    &NODE_MEMORY_CAPACITY,
    &NODE_CPU_ALLOCATABLE,
    &NODE_MEMORY_ALLOCATABLE,
    &NODE_CPU_UTILIZATION,
    &NODE_MEMORY_UTILIZATION,
    &NODE_CPU_RESERVATION,
    &NODE_MEMORY_RESERVATION,
];

pub static CPU_METRICS: &[&Metric] = &[
    &CPU_LIMIT,
    &CPU_REQUEST,
    &CPU_USAGE,
    &CPU_USAGE_RATE,
    &NODE_CPU_ALLOCATABLE,
    &NODE_CPU_CAPACITY,
    &NODE_CPU_RESERVATION,
    &NODE_CPU_UTILIZATION,
];

pub static FILESYSTEM_METRICS: &[&Metric] = &[
    &FILESYSTEM_AVAILABLE,
    &FILESYSTEM_LIMIT,
    &FILESYSTEM_USAGE,
    &FILESYSTEM_INODES,
    &FILESYSTEM_INODES_FREE,
];

pub static MEMORY_METRICS: &[&Metric] = &[
    &MEMORY_LIMIT,
    &MEMORY_MAJOR_PAGE_FAULTS,
    &MEMORY_PAGE_FAULTS,
    &MEMORY_REQUEST,
    &MEMORY_USAGE,
    &MEMORY_RSS,
    &MEMORY_CACHE,
    &MEMORY_WORKING_SET,
    &NODE_MEMORY_ALLOCATABLE,
    &NODE_MEMORY_CAPACITY,
    &NODE_MEMORY_UTILIZATION,
    &NODE_MEMORY_RESERVATION,
];

pub static NETWORK_METRICS: &[&Metric] = &[
    &NETWORK_RX,
    &NETWORK_RX_ERRORS,
    &NETWORK_RX_RATE,
    &NETWORK_TX,
    &NETWORK_TX_ERRORS,
    &NETWORK_TX_RATE,
];

/// Standard, additional, rate and labeled metrics, in declaration order.
pub static ALL_METRICS: LazyLock<Vec<&'static Metric>> = LazyLock::new(|| {
    STANDARD_METRICS
        .iter()
        .chain(ADDITIONAL_METRICS)
        .chain(RATE_METRICS)
        .chain(LABELED_METRICS)
        .copied()
        .collect()
});

/// The curated metric list of `family`; empty for [`MetricFamily::General`].
#[must_use]
pub fn metrics_in_family(family: MetricFamily) -> &'static [&'static Metric] {
    match family {
        MetricFamily::Cpu => CPU_METRICS,
        MetricFamily::Filesystem => FILESYSTEM_METRICS,
        MetricFamily::Memory => MEMORY_METRICS,
        MetricFamily::Network => NETWORK_METRICS,
        MetricFamily::General => &[],
    }
}

/// The family whose curated list contains `name`, or [`MetricFamily::General`].
#[must_use]
pub fn family_for_name(name: &str) -> MetricFamily {
    MetricFamily::iter()
        .find(|family| metrics_in_family(*family).iter().any(|metric| metric.name() == name))
        .unwrap_or_default()
}

#[must_use]
pub fn is_node_autoscaling_metric(name: &str) -> bool {
    NODE_AUTOSCALING_METRICS.iter().any(|metric| metric.name() == name)
}

/// The rate metric derived from the raw metric `name`, if one is defined.
#[must_use]
pub fn rate_metric_for(name: &str) -> Option<&'static Metric> {
    RATE_METRICS_MAPPING
        .iter()
        .find(|(raw, _)| raw.name() == name)
        .map(|(_, rate)| *rate)
}

/// Look up a registered or autoscaling metric by name.
#[must_use]
pub fn find_metric(name: &str) -> Option<&'static Metric> {
    ALL_METRICS
        .iter()
        .chain(NODE_AUTOSCALING_METRICS)
        .find(|metric| metric.name() == name)
        .copied()
}

#[must_use]
pub fn is_custom_metric(name: &str) -> bool {
    name.starts_with(CUSTOM_METRIC_PREFIX)
}

/// Check the structural invariants of the catalog.
///
/// Names are unique, every rate pairing goes from a registered cumulative
/// metric to a distinct registered gauge, and every family member is a
/// known metric belonging to no other family.
pub fn validate_catalog() -> Result<()> {
    let mut names = HashSet::new();
    for metric in ALL_METRICS.iter().chain(NODE_AUTOSCALING_METRICS) {
        if !names.insert(metric.name()) {
            bail!("metric '{}' is registered more than once", metric.name());
        }
    }

    let mut rate_targets = HashSet::new();
    for (raw, rate) in RATE_METRICS_MAPPING {
        if !names.contains(raw.name()) {
            bail!("rate source '{}' is not a registered metric", raw.name());
        }

        if raw.descriptor.kind != MetricKind::Cumulative {
            bail!("rate source '{}' is not cumulative", raw.name());
        }

        if !RATE_METRICS.iter().any(|metric| metric.name() == rate.name()) {
            bail!("rate target '{}' of '{}' is not a rate metric", rate.name(), raw.name());
        }

        if rate.descriptor.kind != MetricKind::Gauge {
            bail!("rate target '{}' is not a gauge", rate.name());
        }

        if !rate_targets.insert(rate.name()) {
            bail!("rate target '{}' is shared by more than one raw metric", rate.name());
        }
    }

    let mut assigned = HashSet::new();
    for family in MetricFamily::iter() {
        for metric in metrics_in_family(family) {
            if !names.contains(metric.name()) {
                bail!("{family} family member '{}' is not a registered metric", metric.name());
            }

            if !assigned.insert(metric.name()) {
                bail!("metric '{}' is assigned to more than one family", metric.name());
            }
        }
    }

    log::debug!(
        target: LOG_TARGET,
        "Validated {} metrics, {} rate pairings and {} family assignments",
        names.len(),
        rate_targets.len(),
        assigned.len()
    );

    Ok(())
}
