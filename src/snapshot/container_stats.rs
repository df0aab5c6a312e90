use crate::Result;
use chrono::{DateTime, Utc};
use compact_str::{CompactString, format_compact};
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the bytes-read counter in a partition's operation map.
pub const READ_OPERATION: &str = "Read";

/// Key of the bytes-written counter in a partition's operation map.
pub const WRITE_OPERATION: &str = "Write";

/// One usage snapshot of a monitored entity, as produced by the collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerStats {
    pub timestamp: Option<DateTime<Utc>>,
    pub cpu: CpuStats,
    pub memory: MemoryStats,
    pub network: NetworkStats,
    pub filesystem: Vec<FsStats>,
    pub disk_io: DiskIoStats,
    pub accelerators: Vec<AcceleratorStats>,
}

impl ContainerStats {
    /// Decode a usage snapshot produced by the collector.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).into_app_err("unable to parse container stats")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuStats {
    pub usage: CpuUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuUsage {
    /// Total CPU time consumed on all cores, in nanoseconds.
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStats {
    pub usage: u64,
    pub cache: u64,
    pub rss: u64,
    pub working_set: u64,
    pub container_data: MemoryStatsData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStatsData {
    pub pgfault: u64,
    pub pgmajfault: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkStats {
    pub interfaces: Vec<InterfaceStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceStats {
    pub name: CompactString,
    pub rx_bytes: u64,
    pub rx_errors: u64,
    pub tx_bytes: u64,
    pub tx_errors: u64,
}

/// Usage of one filesystem mounted into the entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsStats {
    pub device: CompactString,
    pub limit: u64,
    pub usage: u64,
    /// Whether `inodes` and `inodes_free` are populated for this filesystem.
    pub has_inodes: bool,
    pub inodes: u64,
    pub inodes_free: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskIoStats {
    pub io_service_bytes: Vec<PerDiskStats>,
}

/// Operation-keyed byte counters of one disk partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerDiskStats {
    pub device: CompactString,
    pub major: u64,
    pub minor: u64,
    pub stats: BTreeMap<CompactString, u64>,
}

impl PerDiskStats {
    /// Identifier used for the `resource_id` label.
    ///
    /// Falls back to `"<major>:<minor>"` when the device name is empty.
    #[must_use]
    pub fn resource_id(&self) -> CompactString {
        if self.device.is_empty() {
            format_compact!("{}:{}", self.major, self.minor)
        } else {
            self.device.clone()
        }
    }

    /// Counter recorded for `operation`, or 0 when the partition does not report it.
    #[must_use]
    pub fn operation_bytes(&self, operation: &str) -> u64 {
        self.stats.get(operation).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceleratorStats {
    pub make: CompactString,
    pub model: CompactString,
    pub id: CompactString,
    pub memory_total: u64,
    pub memory_used: u64,
    /// Percent of the last sample period the device was busy.
    pub duty_cycle: u64,
}
