use compact_str::CompactString;
use serde::Serialize;
use std::collections::BTreeMap;

/// One label dimension a metric may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LabelDescriptor {
    pub key: &'static str,
    pub description: &'static str,
}

/// Label values of one data point, keyed by [`LabelDescriptor::key`].
pub type Labels = BTreeMap<&'static str, CompactString>;

pub const LABEL_RESOURCE_ID: LabelDescriptor = LabelDescriptor {
    key: "resource_id",
    description: "Identifier(s) specific to a metric",
};

pub const LABEL_ACCELERATOR_MAKE: LabelDescriptor = LabelDescriptor {
    key: "make",
    description: "Make of the accelerator (nvidia, amd, google etc.)",
};

pub const LABEL_ACCELERATOR_MODEL: LabelDescriptor = LabelDescriptor {
    key: "model",
    description: "Model of the accelerator (tesla-p100, tesla-k80 etc.)",
};

pub const LABEL_ACCELERATOR_ID: LabelDescriptor = LabelDescriptor {
    key: "accelerator_id",
    description: "ID of the accelerator",
};

/// Labels of per-filesystem and per-disk metrics.
pub const RESOURCE_LABELS: &[LabelDescriptor] = &[LABEL_RESOURCE_ID];

/// Labels of per-device accelerator metrics.
pub const ACCELERATOR_LABELS: &[LabelDescriptor] = &[LABEL_ACCELERATOR_MAKE, LABEL_ACCELERATOR_MODEL, LABEL_ACCELERATOR_ID];

/// Labels of node-level accelerator capacity, which is per make and model rather than per device.
pub const ACCELERATOR_CAPACITY_LABELS: &[LabelDescriptor] = &[LABEL_ACCELERATOR_MAKE, LABEL_ACCELERATOR_MODEL];
