//! Integration tests for extracting values out of collector snapshots

use usage_metrics::metrics::{
    DISK_IO_READ, DISK_IO_WRITE, DerivationOptions, FILESYSTEM_INODES, FILESYSTEM_USAGE, LABELED_METRICS, MEMORY_USAGE, MetricKind,
    STANDARD_METRICS, UPTIME, ValueType, derive_values,
};
use usage_metrics::snapshot::{ContainerInfo, ContainerSpec, ContainerStats, FsStats};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn full_spec() -> ContainerSpec {
    ContainerSpec {
        creation_time: Some(chrono::Utc::now()),
        has_cpu: true,
        has_memory: true,
        has_network: true,
        has_filesystem: true,
        has_disk_io: true,
    }
}

const STATS_JSON: &str = r#"{
    "timestamp": "2024-05-01T12:00:00Z",
    "cpu": { "usage": { "total": 123456789 } },
    "memory": {
        "usage": 1048576,
        "cache": 4096,
        "rss": 8192,
        "working_set": 524288,
        "container_data": { "pgfault": 77, "pgmajfault": 3 }
    },
    "network": {
        "interfaces": [
            { "name": "eth0", "rx_bytes": 1000, "rx_errors": 1, "tx_bytes": 2000, "tx_errors": 2 },
            { "name": "eth1", "rx_bytes": 500, "rx_errors": 0, "tx_bytes": 250, "tx_errors": 1 }
        ]
    },
    "filesystem": [
        { "device": "/dev/sda1", "limit": 1000, "usage": 400, "has_inodes": true, "inodes": 64, "inodes_free": 60 },
        { "device": "/dev/sdb1", "limit": 2000, "usage": 100 }
    ],
    "disk_io": {
        "io_service_bytes": [
            { "device": "", "major": 8, "minor": 1, "stats": { "Write": 500 } },
            { "device": "/dev/sdb", "major": 8, "minor": 16, "stats": { "Read": 10, "Write": 20, "Sync": 5 } }
        ]
    },
    "accelerators": [
        { "make": "nvidia", "model": "tesla-p100", "id": "GPU-1", "memory_total": 16, "memory_used": 8, "duty_cycle": 40 },
        { "make": "nvidia", "model": "tesla-p100", "id": "GPU-2", "memory_total": 16, "memory_used": 2, "duty_cycle": 5 }
    ]
}"#;

#[test]
fn test_memory_usage_for_container_and_node() {
    init_logging();
    let mut stats = ContainerStats::default();
    stats.memory.usage = 1_048_576;

    let container = ContainerInfo::new("/kubepods/burstable/pod1/app", full_spec());
    let value = MEMORY_USAGE.get_value(&container, &stats).unwrap();
    assert_eq!(value.int_value, 1_048_576);
    assert_eq!(value.value_type, ValueType::Int64);
    assert_eq!(value.kind, MetricKind::Gauge);

    let node = ContainerInfo::new("/", full_spec());
    let value = MEMORY_USAGE.get_value(&node, &stats).unwrap();
    assert_eq!(value.int_value, 0);
    assert_eq!(value.kind, MetricKind::Gauge);
    assert!(MEMORY_USAGE.is_suppressed_for(&node));
}

#[test]
fn test_node_suppresses_every_counter_but_uptime() {
    init_logging();
    let stats = ContainerStats::from_json(STATS_JSON).unwrap();
    let node = ContainerInfo::new("/", full_spec());
    let container = ContainerInfo::new("/system.slice/docker.service", full_spec());

    for metric in STANDARD_METRICS {
        let node_value = metric.get_value(&node, &stats).unwrap();
        let container_value = metric.get_value(&container, &stats).unwrap();
        if metric.name() == UPTIME.name() {
            assert!(!metric.is_suppressed_for(&node));
            continue;
        }

        assert_eq!(node_value.int_value, 0, "'{}' is not suppressed on the node", metric.name());
        assert!(container_value.int_value > 0, "'{}' reads zero for a container", metric.name());
        assert_eq!(node_value.kind, container_value.kind);
    }
}

#[test]
fn test_capability_gating() {
    let spec = ContainerSpec {
        has_memory: true,
        ..ContainerSpec::default()
    };

    for metric in STANDARD_METRICS {
        assert_eq!(metric.has_value(&spec), metric.name().starts_with("memory/"), "'{}'", metric.name());
    }

    let stats = ContainerStats::from_json(STATS_JSON).unwrap();
    for metric in LABELED_METRICS {
        let expected = metric.is_labeled() && metric.name().starts_with("accelerator/");
        assert_eq!(metric.has_labeled_value(&spec, &stats), expected, "'{}'", metric.name());
    }
}

#[test]
fn test_labeled_cardinality() {
    let stats = ContainerStats::from_json(STATS_JSON).unwrap();

    assert_eq!(FILESYSTEM_USAGE.get_labeled_values(&stats).len(), 2);
    assert_eq!(FILESYSTEM_INODES.get_labeled_values(&stats).len(), 1);

    let empty = ContainerStats {
        filesystem: Vec::new(),
        ..stats
    };
    assert!(FILESYSTEM_USAGE.get_labeled_values(&empty).is_empty());
}

#[test]
fn test_filesystem_labels() {
    let stats = ContainerStats {
        filesystem: vec![FsStats {
            device: "/dev/nvme0n1p2".into(),
            usage: 31,
            ..FsStats::default()
        }],
        ..ContainerStats::default()
    };

    let points = FILESYSTEM_USAGE.get_labeled_values(&stats);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].name, "filesystem/usage");
    assert_eq!(points[0].labels.len(), 1);
    assert_eq!(points[0].labels["resource_id"], "/dev/nvme0n1p2");
    assert_eq!(points[0].value.int_value, 31);
    assert_eq!(points[0].value.kind, MetricKind::Gauge);
}

#[test]
fn test_disk_fallback_and_operation_demultiplex() {
    let stats = ContainerStats::from_json(STATS_JSON).unwrap();

    let reads = DISK_IO_READ.get_labeled_values(&stats);
    let writes = DISK_IO_WRITE.get_labeled_values(&stats);
    assert_eq!(reads.len(), 2);
    assert_eq!(writes.len(), 2);

    assert_eq!(reads[0].labels["resource_id"], "8:1");
    assert_eq!(reads[0].value.int_value, 0);
    assert_eq!(writes[0].labels["resource_id"], "8:1");
    assert_eq!(writes[0].value.int_value, 500);

    assert_eq!(reads[1].labels["resource_id"], "/dev/sdb");
    assert_eq!(reads[1].value.int_value, 10);
    assert_eq!(writes[1].value.int_value, 20);
    assert_eq!(writes[1].value.kind, MetricKind::Cumulative);
}

#[test]
fn test_derive_full_snapshot() {
    init_logging();
    let stats = ContainerStats::from_json(STATS_JSON).unwrap();
    let info = ContainerInfo::from_json(r#"{ "name": "/kubepods/pod1/app", "spec": { "has_cpu": true, "has_memory": true, "has_network": true, "has_filesystem": true, "has_disk_io": true } }"#).unwrap();

    let values = derive_values(&info, &stats, &DerivationOptions::default());

    // no creation time, so no uptime
    assert!(values.scalar("uptime").is_none());
    assert_eq!(values.scalars.len(), 11);
    assert_eq!(values.scalar("cpu/usage").map(|v| v.int_value), Some(123_456_789));
    assert_eq!(values.scalar("network/rx").map(|v| v.int_value), Some(1500));
    assert_eq!(values.scalar("network/tx_errors").map(|v| v.int_value), Some(3));
    assert_eq!(values.scalar("memory/page_faults").map(|v| v.int_value), Some(77));

    assert_eq!(values.labeled_for("disk/io_read_bytes").count(), 2);
    assert_eq!(values.labeled_for("filesystem/inodes_free").count(), 1);
    assert_eq!(values.labeled_for("accelerator/memory_used").count(), 2);

    assert!(values.labeled.iter().all(|point| point.name != "accelerator/node_capacity"));
    assert_eq!(values.labeled.len(), 2 + 2 + 2 + 2 + 1 + 1 + 2 + 2 + 2);

    let duty: Vec<i64> = values.labeled_for("accelerator/duty_cycle").map(|p| p.value.int_value).collect();
    assert_eq!(duty, vec![40, 5]);
}

#[test]
fn test_derive_from_options_file() {
    let options = DerivationOptions::from_toml(
        r#"
families = ["network"]
emit_node_suppressed = false
"#,
    )
    .unwrap();

    let stats = ContainerStats::from_json(STATS_JSON).unwrap();
    let node = ContainerInfo::new("/", full_spec());
    assert!(derive_values(&node, &stats, &options).is_empty());

    let container = ContainerInfo::new("/pod", full_spec());
    let values = derive_values(&container, &stats, &options);
    assert_eq!(values.scalars.len(), 4);
    assert!(values.labeled.is_empty());
}
