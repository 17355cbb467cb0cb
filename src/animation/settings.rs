use serde::Deserialize;

use crate::error::{CurveError, Result};

/// What `Curve::set_curve_type` does when the curve already has points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeChangePolicy {
    /// Keep the current type and return `InvalidOperation`
    #[default]
    Reject,
    /// Warn, switch type and reshape stored payloads to the new width
    WarnAndApply,
}

/// Behavior switches for a [`Curve`](super::Curve)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    pub type_change_policy: TypeChangePolicy,
}

impl CurveSettings {
    /// Parse from YAML string, missing keys fall back to defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| CurveError::Config(format!("YAML parse error: {}", e)))
    }
}
