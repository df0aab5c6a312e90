//! Single-value extraction for scalar metrics

use super::metric_value::saturating_i64;
use super::{MetricDescriptor, MetricValue};
use crate::snapshot::{ContainerInfo, ContainerSpec, ContainerStats, InterfaceStats};
use chrono::{DateTime, Utc};

/// How a scalar metric behaves when the measured entity is the node aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePolicy {
    /// The raw snapshot field is reported for every entity kind.
    Reported,

    /// Nodes report 0. Node-level figures are sourced through a different
    /// accounting path upstream, so the zero means "not sourced here" rather
    /// than "measured as zero".
    Suppressed,
}

/// Applicability predicate and reader of a scalar metric.
#[derive(Debug, Clone, Copy)]
pub struct ScalarExtractor {
    /// Whether the metric's shape applies to an entity with the given capabilities.
    pub applies: fn(&ContainerSpec) -> bool,

    /// Reads the raw value out of a snapshot.
    pub read: fn(&ContainerInfo, &ContainerStats) -> i64,

    pub node_policy: NodePolicy,
}

impl ScalarExtractor {
    #[must_use]
    pub fn has_value(&self, spec: &ContainerSpec) -> bool {
        (self.applies)(spec)
    }

    /// Whether [`Self::get_value`] returns the node-suppression zero for `info`.
    #[must_use]
    pub const fn is_suppressed_for(&self, info: &ContainerInfo) -> bool {
        matches!(self.node_policy, NodePolicy::Suppressed) && info.is_node()
    }

    /// Read the value, honoring the node policy.
    ///
    /// Does not consult [`Self::has_value`]; callers check applicability first.
    #[must_use]
    pub fn get_value(&self, descriptor: &MetricDescriptor, info: &ContainerInfo, stats: &ContainerStats) -> MetricValue {
        let value = if self.is_suppressed_for(info) { 0 } else { (self.read)(info, stats) };
        MetricValue::int(descriptor.kind, value)
    }
}

pub(super) const fn has_creation_time(spec: &ContainerSpec) -> bool {
    spec.creation_time.is_some()
}

pub(super) const fn has_cpu(spec: &ContainerSpec) -> bool {
    spec.has_cpu
}

pub(super) const fn has_memory(spec: &ContainerSpec) -> bool {
    spec.has_memory
}

pub(super) const fn has_network(spec: &ContainerSpec) -> bool {
    spec.has_network
}

pub(super) fn uptime(info: &ContainerInfo, _stats: &ContainerStats) -> i64 {
    uptime_at(&info.spec, Utc::now())
}

/// Whole milliseconds elapsed between the entity's creation and `now`.
///
/// Returns 0 when the creation time is unknown. That 0 is not a reading:
/// the `uptime` metric is gated on `has_creation_time` and never reaches it.
#[must_use]
pub fn uptime_at(spec: &ContainerSpec, now: DateTime<Utc>) -> i64 {
    spec.creation_time.map_or(0, |created| (now - created).num_milliseconds())
}

/// Sum a per-interface counter across all network interfaces.
pub(super) fn network_total(stats: &ContainerStats, counter: fn(&InterfaceStats) -> u64) -> i64 {
    stats
        .network
        .interfaces
        .iter()
        .fold(0_i64, |total, interface| total.saturating_add(saturating_i64(counter(interface))))
}
