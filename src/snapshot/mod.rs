//! Input types handed over by the stats collector
//!
//! A snapshot is a pair of a [`ContainerInfo`], describing which entity was
//! measured and which resource subsystems it accounts for, and a
//! [`ContainerStats`], holding the raw counters read during one sampling
//! interval. Every field defaults to zero or empty so that a partial
//! document from the collector still decodes.

mod container_info;
mod container_stats;

pub use container_info::{ContainerInfo, ContainerSpec, EntityKind, NODE_CONTAINER_NAME};
pub use container_stats::{
    AcceleratorStats, ContainerStats, CpuStats, CpuUsage, DiskIoStats, FsStats, InterfaceStats, MemoryStats, MemoryStatsData,
    NetworkStats, PerDiskStats, READ_OPERATION, WRITE_OPERATION,
};
