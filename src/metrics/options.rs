use super::MetricFamily;
use crate::Result;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};

/// Controls which values [`derive_values`](super::derive_values) produces for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DerivationOptions {
    /// Families to derive; empty selects every family, including `general`.
    #[serde(default)]
    pub families: Vec<MetricFamily>,

    /// Whether labeled metrics are extracted
    #[serde(default = "default_labeled")]
    pub labeled: bool,

    /// Whether gated counters are still emitted as 0 for the node aggregate
    #[serde(default = "default_emit_node_suppressed")]
    pub emit_node_suppressed: bool,
}

const fn default_labeled() -> bool {
    true
}

const fn default_emit_node_suppressed() -> bool {
    true
}

impl Default for DerivationOptions {
    fn default() -> Self {
        Self {
            families: Vec::new(),
            labeled: default_labeled(),
            emit_node_suppressed: default_emit_node_suppressed(),
        }
    }
}

impl DerivationOptions {
    /// Parse options from TOML text; absent keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).into_app_err("unable to parse derivation options")
    }

    #[must_use]
    pub fn includes(&self, family: MetricFamily) -> bool {
        self.families.is_empty() || self.families.contains(&family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DerivationOptions::default();
        assert!(options.families.is_empty());
        assert!(options.labeled);
        assert!(options.emit_node_suppressed);
    }

    #[test]
    fn test_empty_toml_matches_default() {
        assert_eq!(DerivationOptions::from_toml("").unwrap(), DerivationOptions::default());
    }

    #[test]
    fn test_from_toml() {
        let options = DerivationOptions::from_toml(
            r#"
            families = ["cpu", "memory"]
            labeled = false
            emit_node_suppressed = false
            "#,
        )
        .unwrap();

        assert_eq!(options.families, vec![MetricFamily::Cpu, MetricFamily::Memory]);
        assert!(!options.labeled);
        assert!(!options.emit_node_suppressed);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = DerivationOptions::from_toml("colour = true").unwrap_err();
        assert!(err.to_string().contains("unable to parse derivation options"));
    }

    #[test]
    fn test_unknown_family_is_rejected() {
        let _ = DerivationOptions::from_toml(r#"families = ["gpu"]"#).unwrap_err();
    }

    #[test]
    fn test_includes() {
        let all = DerivationOptions::default();
        assert!(all.includes(MetricFamily::General));
        assert!(all.includes(MetricFamily::Network));

        let cpu_only = DerivationOptions {
            families: vec![MetricFamily::Cpu],
            ..DerivationOptions::default()
        };
        assert!(cpu_only.includes(MetricFamily::Cpu));
        assert!(!cpu_only.includes(MetricFamily::General));
        assert!(!cpu_only.includes(MetricFamily::Memory));
    }
}
