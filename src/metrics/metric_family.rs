use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Resource family a metric is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetricFamily {
    Cpu,
    Filesystem,
    Memory,
    Network,
    #[default]
    General,
}
