use super::labeled::{self, LabeledExtractor};
use super::metric_value::saturating_i64;
use super::scalar::{self, NodePolicy, ScalarExtractor};
use super::{ACCELERATOR_CAPACITY_LABELS, ACCELERATOR_LABELS, RESOURCE_LABELS};
use super::{Extraction, Metric, MetricDescriptor, MetricKind, Units, ValueType};
use crate::snapshot::{READ_OPERATION, WRITE_OPERATION};

macro_rules! scalar_metric {
    ($name:expr, $description:expr, $kind:ident, $units:ident, $applies:expr, $read:expr, $policy:ident) => {
        Metric {
            descriptor: MetricDescriptor {
                name: $name,
                description: $description,
                labels: &[],
                kind: MetricKind::$kind,
                value_type: ValueType::Int64,
                units: Units::$units,
            },
            extraction: Extraction::Scalar(ScalarExtractor {
                applies: $applies,
                read: $read,
                node_policy: NodePolicy::$policy,
            }),
        }
    };
}

macro_rules! labeled_metric {
    ($name:expr, $description:expr, $kind:ident, $units:ident, $labels:expr, $applies:expr, $samples:expr) => {
        Metric {
            descriptor: MetricDescriptor {
                name: $name,
                description: $description,
                labels: $labels,
                kind: MetricKind::$kind,
                value_type: ValueType::Int64,
                units: Units::$units,
            },
            extraction: Extraction::Labeled(LabeledExtractor {
                applies: $applies,
                samples: $samples,
            }),
        }
    };
}

macro_rules! derived_metric {
    ($name:expr, $description:expr, $kind:ident, $value_type:ident, $units:ident) => {
        derived_metric!($name, $description, $kind, $value_type, $units, &[])
    };
    ($name:expr, $description:expr, $kind:ident, $value_type:ident, $units:ident, $labels:expr) => {
        Metric {
            descriptor: MetricDescriptor {
                name: $name,
                description: $description,
                labels: $labels,
                kind: MetricKind::$kind,
                value_type: ValueType::$value_type,
                units: Units::$units,
            },
            extraction: Extraction::Derived,
        }
    };
}

// Standard metrics, read from the collector's snapshot.

pub static UPTIME: Metric = scalar_metric!(
    "uptime",
    "Number of milliseconds since the container was started",
    Cumulative,
    Milliseconds,
    scalar::has_creation_time,
    scalar::uptime,
    Reported
);

pub static CPU_USAGE: Metric = scalar_metric!(
    "cpu/usage",
    "Cumulative CPU usage on all cores",
    Cumulative,
    Nanoseconds,
    scalar::has_cpu,
    |_, stats| saturating_i64(stats.cpu.usage.total),
    Suppressed
);

pub static MEMORY_USAGE: Metric = scalar_metric!(
    "memory/usage",
    "Memory usage",
    Gauge,
    Bytes,
    scalar::has_memory,
    |_, stats| saturating_i64(stats.memory.usage),
    Suppressed
);

pub static MEMORY_CACHE: Metric = scalar_metric!(
    "memory/cache",
    "Cache memory",
    Gauge,
    Bytes,
    scalar::has_memory,
    |_, stats| saturating_i64(stats.memory.cache),
    Suppressed
);

pub static MEMORY_RSS: Metric = scalar_metric!(
    "memory/rss",
    "RSS memory",
    Gauge,
    Bytes,
    scalar::has_memory,
    |_, stats| saturating_i64(stats.memory.rss),
    Suppressed
);

pub static MEMORY_WORKING_SET: Metric = scalar_metric!(
    "memory/working_set",
    "Working set memory. Working set is the memory being used and not easily dropped by the kernel",
    Gauge,
    Bytes,
    scalar::has_memory,
    |_, stats| saturating_i64(stats.memory.working_set),
    Suppressed
);

pub static MEMORY_PAGE_FAULTS: Metric = scalar_metric!(
    "memory/page_faults",
    "Number of page faults",
    Cumulative,
    Count,
    scalar::has_memory,
    |_, stats| saturating_i64(stats.memory.container_data.pgfault),
    Suppressed
);

pub static MEMORY_MAJOR_PAGE_FAULTS: Metric = scalar_metric!(
    "memory/major_page_faults",
    "Number of major page faults",
    Cumulative,
    Count,
    scalar::has_memory,
    |_, stats| saturating_i64(stats.memory.container_data.pgmajfault),
    Suppressed
);

pub static NETWORK_RX: Metric = scalar_metric!(
    "network/rx",
    "Cumulative number of bytes received over the network",
    Cumulative,
    Bytes,
    scalar::has_network,
    |_, stats| scalar::network_total(stats, |interface| interface.rx_bytes),
    Suppressed
);

pub static NETWORK_RX_ERRORS: Metric = scalar_metric!(
    "network/rx_errors",
    "Cumulative number of errors while receiving over the network",
    Cumulative,
    Count,
    scalar::has_network,
    |_, stats| scalar::network_total(stats, |interface| interface.rx_errors),
    Suppressed
);

pub static NETWORK_TX: Metric = scalar_metric!(
    "network/tx",
    "Cumulative number of bytes sent over the network",
    Cumulative,
    Bytes,
    scalar::has_network,
    |_, stats| scalar::network_total(stats, |interface| interface.tx_bytes),
    Suppressed
);

pub static NETWORK_TX_ERRORS: Metric = scalar_metric!(
    "network/tx_errors",
    "Cumulative number of errors while sending over the network",
    Cumulative,
    Count,
    scalar::has_network,
    |_, stats| scalar::network_total(stats, |interface| interface.tx_errors),
    Suppressed
);

// Additional metrics, computed from cluster state outside this crate.

pub static CPU_REQUEST: Metric = derived_metric!(
    "cpu/request",
    "CPU request (the guaranteed amount of resources) in millicores. This metric is Kubernetes specific.",
    Gauge,
    Int64,
    Count
);

pub static CPU_LIMIT: Metric = derived_metric!("cpu/limit", "CPU hard limit in millicores.", Gauge, Int64, Count);

pub static MEMORY_REQUEST: Metric = derived_metric!(
    "memory/request",
    "Memory request (the guaranteed amount of resources) in bytes. This metric is Kubernetes specific.",
    Gauge,
    Int64,
    Bytes
);

pub static MEMORY_LIMIT: Metric = derived_metric!("memory/limit", "Memory hard limit in bytes.", Gauge, Int64, Bytes);

// Rate metrics, computed downstream from successive cumulative samples.

pub static CPU_USAGE_RATE: Metric = derived_metric!("cpu/usage_rate", "CPU usage on all cores in millicores", Gauge, Int64, Count);

/// Declared only: not part of any group and not mapped from its raw counter.
pub static MEMORY_PAGE_FAULTS_RATE: Metric = derived_metric!(
    "memory/page_faults_rate",
    "Rate of page faults in counts per second",
    Gauge,
    Float,
    Count
);

/// Declared only: not part of any group and not mapped from its raw counter.
pub static MEMORY_MAJOR_PAGE_FAULTS_RATE: Metric = derived_metric!(
    "memory/major_page_faults_rate",
    "Rate of major page faults in counts per second",
    Gauge,
    Float,
    Count
);

pub static NETWORK_RX_RATE: Metric = derived_metric!(
    "network/rx_rate",
    "Rate of bytes received over the network in bytes per second",
    Gauge,
    Float,
    Count
);

/// Declared only: not part of any group and not mapped from its raw counter.
pub static NETWORK_RX_ERRORS_RATE: Metric = derived_metric!(
    "network/rx_errors_rate",
    "Rate of errors receiving over the network in errors per second",
    Gauge,
    Float,
    Count
);

pub static NETWORK_TX_RATE: Metric = derived_metric!(
    "network/tx_rate",
    "Rate of bytes transmitted over the network in bytes per second",
    Gauge,
    Float,
    Count
);

/// Declared only: not part of any group and not mapped from its raw counter.
pub static NETWORK_TX_ERRORS_RATE: Metric = derived_metric!(
    "network/tx_errors_rate",
    "Rate of errors transmitting over the network in errors per second",
    Gauge,
    Float,
    Count
);

pub static DISK_IO_READ_RATE: Metric = derived_metric!(
    "disk/io_read_bytes_rate",
    "Rate of bytes read over disk in bytes per second",
    Gauge,
    Float,
    Count,
    RESOURCE_LABELS
);

pub static DISK_IO_WRITE_RATE: Metric = derived_metric!(
    "disk/io_write_bytes_rate",
    "Rate of bytes written over disk in bytes per second",
    Gauge,
    Float,
    Count,
    RESOURCE_LABELS
);

// Node autoscaling metrics.

pub static NODE_CPU_CAPACITY: Metric = derived_metric!("cpu/node_capacity", "Cpu capacity of a node", Gauge, Float, Count);

pub static NODE_MEMORY_CAPACITY: Metric = derived_metric!("memory/node_capacity", "Memory capacity of a node", Gauge, Float, Count);

pub static NODE_CPU_ALLOCATABLE: Metric = derived_metric!("cpu/node_allocatable", "Cpu allocatable of a node", Gauge, Float, Count);

pub static NODE_MEMORY_ALLOCATABLE: Metric =
    derived_metric!("memory/node_allocatable", "Memory allocatable of a node", Gauge, Float, Count);

pub static NODE_CPU_UTILIZATION: Metric = derived_metric!(
    "cpu/node_utilization",
    "Cpu utilization as a share of node capacity",
    Gauge,
    Float,
    Count
);

pub static NODE_MEMORY_UTILIZATION: Metric = derived_metric!(
    "memory/node_utilization",
    "Memory utilization as a share of memory capacity",
    Gauge,
    Float,
    Count
);

pub static NODE_CPU_RESERVATION: Metric = derived_metric!(
    "cpu/node_reservation",
    "Share of cpu that is reserved on the node",
    Gauge,
    Float,
    Count
);

pub static NODE_MEMORY_RESERVATION: Metric = derived_metric!(
    "memory/node_reservation",
    "Share of memory that is reserved on the node",
    Gauge,
    Float,
    Count
);

// Labeled metrics, one data point per filesystem, disk partition or accelerator.

pub static FILESYSTEM_USAGE: Metric = labeled_metric!(
    "filesystem/usage",
    "Total number of bytes consumed on a filesystem",
    Gauge,
    Bytes,
    RESOURCE_LABELS,
    labeled::has_filesystem,
    |stats| labeled::per_filesystem(stats, |fs| fs.usage)
);

pub static FILESYSTEM_LIMIT: Metric = labeled_metric!(
    "filesystem/limit",
    "The total size of filesystem in bytes",
    Gauge,
    Bytes,
    RESOURCE_LABELS,
    labeled::has_filesystem,
    |stats| labeled::per_filesystem(stats, |fs| fs.limit)
);

pub static FILESYSTEM_AVAILABLE: Metric = derived_metric!(
    "filesystem/available",
    "The number of available bytes remaining in a the filesystem",
    Gauge,
    Int64,
    Bytes,
    RESOURCE_LABELS
);

pub static FILESYSTEM_INODES: Metric = labeled_metric!(
    "filesystem/inodes",
    "Total number of inodes on a filesystem",
    Gauge,
    Bytes,
    RESOURCE_LABELS,
    labeled::has_filesystem,
    |stats| labeled::per_filesystem_with_inodes(stats, |fs| fs.inodes)
);

pub static FILESYSTEM_INODES_FREE: Metric = labeled_metric!(
    "filesystem/inodes_free",
    "Free number of inodes on a filesystem",
    Gauge,
    Bytes,
    RESOURCE_LABELS,
    labeled::has_filesystem,
    |stats| labeled::per_filesystem_with_inodes(stats, |fs| fs.inodes_free)
);

pub static DISK_IO_READ: Metric = labeled_metric!(
    "disk/io_read_bytes",
    "Cumulative number of bytes read over disk",
    Cumulative,
    Bytes,
    RESOURCE_LABELS,
    labeled::has_disk_io,
    |stats| labeled::per_disk(stats, READ_OPERATION)
);

pub static DISK_IO_WRITE: Metric = labeled_metric!(
    "disk/io_write_bytes",
    "Cumulative number of bytes write over disk",
    Cumulative,
    Bytes,
    RESOURCE_LABELS,
    labeled::has_disk_io,
    |stats| labeled::per_disk(stats, WRITE_OPERATION)
);

pub static ACCELERATOR_MEMORY_TOTAL: Metric = labeled_metric!(
    "accelerator/memory_total",
    "Total accelerator memory (in bytes)",
    Gauge,
    Bytes,
    ACCELERATOR_LABELS,
    labeled::has_accelerators,
    |stats| labeled::per_accelerator(stats, |accelerator| accelerator.memory_total)
);

pub static ACCELERATOR_MEMORY_USED: Metric = labeled_metric!(
    "accelerator/memory_used",
    "Total accelerator memory allocated (in bytes)",
    Gauge,
    Bytes,
    ACCELERATOR_LABELS,
    labeled::has_accelerators,
    |stats| labeled::per_accelerator(stats, |accelerator| accelerator.memory_used)
);

pub static ACCELERATOR_DUTY_CYCLE: Metric = labeled_metric!(
    "accelerator/duty_cycle",
    "Percent of time over the past sample period (10s) during which the accelerator was actively processing",
    Gauge,
    Count,
    ACCELERATOR_LABELS,
    labeled::has_accelerators,
    |stats| labeled::per_accelerator(stats, |accelerator| accelerator.duty_cycle)
);

/// Declared only: not part of any group, so no derivation walk visits it.
pub static NODE_ACCELERATOR_CAPACITY: Metric = derived_metric!(
    "accelerator/node_capacity",
    "Accelerator capacity of a node",
    Gauge,
    Float,
    Count,
    ACCELERATOR_CAPACITY_LABELS
);
