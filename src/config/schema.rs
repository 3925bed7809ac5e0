//! YAML schema for declarative quantizer manifests

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quantizer::TensorRole;

/// Declarative description of the quantizers a model uses, keyed by
/// tensor name (e.g. `conv1.weight`, `conv1.act`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizerManifest {
    /// Tensor name → quantizer entry
    pub quantizers: BTreeMap<String, QuantizerEntry>,
}

/// One quantizer declaration: a format name, a role, and optional
/// overrides of the role defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizerEntry {
    /// Format name, resolved against a format registry (e.g. `e4m3`)
    pub format: String,

    /// Weight or activation role
    pub role: TensorRole,

    /// Override of the statistics warm-up window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collect_stats_steps: Option<u32>,

    /// Override of the scale floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_min_val: Option<f64>,
}

impl QuantizerEntry {
    /// Entry with a format name and role, no overrides.
    pub fn new(format: impl Into<String>, role: TensorRole) -> Self {
        Self {
            format: format.into(),
            role,
            collect_stats_steps: None,
            scaling_min_val: None,
        }
    }

    /// Set the statistics warm-up window override.
    pub fn with_collect_stats_steps(mut self, steps: u32) -> Self {
        self.collect_stats_steps = Some(steps);
        self
    }

    /// Set the scale floor override.
    pub fn with_scaling_min_val(mut self, min_val: f64) -> Self {
        self.scaling_min_val = Some(min_val);
        self
    }
}
