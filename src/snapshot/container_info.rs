use crate::Result;
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Name under which the collector reports the whole-host aggregate.
pub const NODE_CONTAINER_NAME: &str = "/";

/// Whether a monitored entity is an individual container or the node aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    #[default]
    Container,
    Node,
}

impl EntityKind {
    /// Classify an entity from the name the collector reports it under.
    #[must_use]
    pub fn for_container_name(name: &str) -> Self {
        if name == NODE_CONTAINER_NAME { Self::Node } else { Self::Container }
    }

    #[must_use]
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Node)
    }
}

/// Capability flags and creation time declared by an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSpec {
    /// When the entity was created; `None` until the collector knows it.
    pub creation_time: Option<DateTime<Utc>>,
    pub has_cpu: bool,
    pub has_memory: bool,
    pub has_network: bool,
    pub has_filesystem: bool,
    pub has_disk_io: bool,
}

/// Identity of a monitored entity plus its declared capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContainerInfoRepr")]
pub struct ContainerInfo {
    pub name: CompactString,
    pub kind: EntityKind,
    pub spec: ContainerSpec,
}

impl ContainerInfo {
    /// Create an entity whose kind is inferred from its name.
    #[must_use]
    pub fn new(name: impl Into<CompactString>, spec: ContainerSpec) -> Self {
        let name = name.into();
        Self {
            kind: EntityKind::for_container_name(&name),
            name,
            spec,
        }
    }

    /// Override the inferred entity kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn is_node(&self) -> bool {
        self.kind.is_node()
    }

    /// Decode an entity description produced by the collector.
    ///
    /// When the document carries no `kind`, it is inferred from `name`.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).into_app_err("unable to parse container info")
    }
}

#[derive(Deserialize)]
struct ContainerInfoRepr {
    name: CompactString,
    #[serde(default)]
    kind: Option<EntityKind>,
    #[serde(default)]
    spec: ContainerSpec,
}

impl From<ContainerInfoRepr> for ContainerInfo {
    fn from(repr: ContainerInfoRepr) -> Self {
        Self {
            kind: repr.kind.unwrap_or_else(|| EntityKind::for_container_name(&repr.name)),
            name: repr.name,
            spec: repr.spec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_root_name_is_node() {
        assert_eq!(EntityKind::for_container_name("/"), EntityKind::Node);
        assert_eq!(EntityKind::for_container_name("/kubepods/pod1"), EntityKind::Container);
        assert_eq!(EntityKind::for_container_name(""), EntityKind::Container);
    }

    #[test]
    fn test_new_infers_kind() {
        assert!(ContainerInfo::new("/", ContainerSpec::default()).is_node());
        assert!(!ContainerInfo::new("/system.slice/docker", ContainerSpec::default()).is_node());
    }

    #[test]
    fn test_with_kind_overrides_inference() {
        let info = ContainerInfo::new("/machine", ContainerSpec::default()).with_kind(EntityKind::Node);
        assert!(info.is_node());
    }

    #[test]
    fn test_from_json_infers_kind_from_name() {
        let info = ContainerInfo::from_json(r#"{"name": "/"}"#).unwrap();
        assert_eq!(info.kind, EntityKind::Node);
        assert_eq!(info.spec, ContainerSpec::default());
    }

    #[test]
    fn test_from_json_explicit_kind_wins() {
        let info = ContainerInfo::from_json(r#"{"name": "/", "kind": "container"}"#).unwrap();
        assert_eq!(info.kind, EntityKind::Container);
    }

    #[test]
    fn test_from_json_reads_spec() {
        let text = r#"{
            "name": "/kubepods/burstable/pod42",
            "spec": {
                "creation_time": "2024-01-01T00:00:00Z",
                "has_cpu": true,
                "has_memory": true,
                "has_disk_io": true
            }
        }"#;
        let info = ContainerInfo::from_json(text).unwrap();
        assert_eq!(info.kind, EntityKind::Container);
        assert!(info.spec.has_cpu);
        assert!(info.spec.has_memory);
        assert!(!info.spec.has_network);
        assert!(!info.spec.has_filesystem);
        assert!(info.spec.has_disk_io);
        assert_eq!(info.spec.creation_time, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ContainerInfo::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("unable to parse container info"));
    }

    #[test]
    fn test_entity_kind_wire_names() {
        assert_eq!(serde_json::to_string(&EntityKind::Node).unwrap(), r#""node""#);
        assert_eq!(serde_json::to_string(&EntityKind::Container).unwrap(), r#""container""#);
    }
}
