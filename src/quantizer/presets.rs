//! Built-in quantizer presets
//!
//! The supported format × role matrix, per-tensor with a
//! floating-point-restricted scale: weight and activation quantizers
//! for each of the five minifloat layouts. Presets are plain
//! constructors plus an explicit name → spec registry built once and
//! read-only afterwards.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::format::FloatFormat;
use crate::quantizer::{QuantizerSpec, RoleConfig};

/// Per-tensor 8-bit (e4m3) floating-point weight quantizer.
pub fn fp8e4m3_weight_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e4m3(), RoleConfig::weight())
}

/// Per-tensor 8-bit (e4m3) floating-point activation quantizer.
pub fn fp8e4m3_act_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e4m3(), RoleConfig::activation())
}

/// Per-tensor 8-bit (e5m2) floating-point weight quantizer.
pub fn fp8e5m2_weight_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e5m2(), RoleConfig::weight())
}

/// Per-tensor 8-bit (e5m2) floating-point activation quantizer.
pub fn fp8e5m2_act_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e5m2(), RoleConfig::activation())
}

/// Per-tensor 6-bit (e3m2) floating-point weight quantizer.
pub fn fp6e3m2_weight_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e3m2(), RoleConfig::weight())
}

/// Per-tensor 6-bit (e3m2) floating-point activation quantizer.
pub fn fp6e3m2_act_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e3m2(), RoleConfig::activation())
}

/// Per-tensor 6-bit (e2m3) floating-point weight quantizer.
pub fn fp6e2m3_weight_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e2m3(), RoleConfig::weight())
}

/// Per-tensor 6-bit (e2m3) floating-point activation quantizer.
pub fn fp6e2m3_act_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e2m3(), RoleConfig::activation())
}

/// Per-tensor 4-bit (e2m1) floating-point weight quantizer.
pub fn fp4_weight_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e2m1(), RoleConfig::weight())
}

/// Per-tensor 4-bit (e2m1) floating-point activation quantizer.
pub fn fp4_act_per_tensor_float() -> QuantizerSpec {
    QuantizerSpec::new(FloatFormat::e2m1(), RoleConfig::activation())
}

const PRESETS: &[(&str, fn() -> QuantizerSpec)] = &[
    ("fp8e4m3_weight_per_tensor_float", fp8e4m3_weight_per_tensor_float),
    ("fp8e4m3_act_per_tensor_float", fp8e4m3_act_per_tensor_float),
    ("fp8e5m2_weight_per_tensor_float", fp8e5m2_weight_per_tensor_float),
    ("fp8e5m2_act_per_tensor_float", fp8e5m2_act_per_tensor_float),
    ("fp6e3m2_weight_per_tensor_float", fp6e3m2_weight_per_tensor_float),
    ("fp6e3m2_act_per_tensor_float", fp6e3m2_act_per_tensor_float),
    ("fp6e2m3_weight_per_tensor_float", fp6e2m3_weight_per_tensor_float),
    ("fp6e2m3_act_per_tensor_float", fp6e2m3_act_per_tensor_float),
    ("fp4_weight_per_tensor_float", fp4_weight_per_tensor_float),
    ("fp4_act_per_tensor_float", fp4_act_per_tensor_float),
];

/// Read-only table of named quantizer presets.
#[derive(Clone, Debug, Default)]
pub struct PresetRegistry {
    presets: BTreeMap<String, QuantizerSpec>,
}

impl PresetRegistry {
    /// Registry holding the ten built-in per-tensor presets.
    pub fn builtin() -> Self {
        let presets = PRESETS
            .iter()
            .map(|(name, build)| (name.to_string(), build()))
            .collect();
        Self { presets }
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&QuantizerSpec> {
        self.presets.get(name)
    }

    /// Registered names, in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, spec)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuantizerSpec)> {
        self.presets.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Number of registered presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the registry holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Strict-merge every preset, surfacing any attribute collision
    /// between a format and a role as a load-time error.
    pub fn verify(&self) -> Result<()> {
        for spec in self.presets.values() {
            spec.attributes_checked()?;
        }
        Ok(())
    }
}
