//! Quantizer specs: format × role composition
//!
//! A [`QuantizerSpec`] is the merge of one [`FloatFormat`] and one
//! [`RoleConfig`]. The merge is an explicit, order-documented attribute
//! merge: role attributes first, format attributes second, so the
//! format's value wins on any key present in both. No key collides
//! today; [`QuantizerSpec::attributes_checked`] turns a future
//! collision into a load-time error instead of an implicit rule.
//!
//! The merged bundle is what an external resolver consumes to
//! instantiate the actual quantization kernels.

pub mod fp4;
pub mod presets;
mod role;

pub use presets::PresetRegistry;
pub use role::{
    KernelRef, ProxyKind, RestrictScalingType, RoleConfig, RoundingMode, ScalingImplType,
    ScalingStatsOp, TensorRole, ACT_COLLECT_STATS_STEPS, SCALING_MIN_VAL,
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::FloatFormat;

/// Flat attribute bundle keyed by attribute name.
pub type AttrBundle = serde_json::Map<String, serde_json::Value>;

/// Merge two bundles, later-wins: `overlay` values replace `base`
/// values on shared keys.
pub fn merge_attributes(base: AttrBundle, overlay: AttrBundle) -> AttrBundle {
    let mut merged = base;
    for (key, value) in overlay {
        merged.insert(key, value);
    }
    merged
}

/// Merge two bundles, rejecting any shared key.
///
/// # Errors
/// Returns [`Error::AttributeCollision`] naming the first key defined
/// on both sides.
pub fn merge_attributes_checked(base: AttrBundle, overlay: AttrBundle) -> Result<AttrBundle> {
    let mut merged = base;
    for (key, value) in overlay {
        if merged.contains_key(&key) {
            return Err(Error::AttributeCollision { key });
        }
        merged.insert(key, value);
    }
    Ok(merged)
}

/// A ready-to-use quantizer configuration: one numeric format plus one
/// role. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantizerSpec {
    /// Numeric format of the quantized values
    pub format: FloatFormat,
    /// Role defaults (scale derivation, proxy, kernel references)
    pub role: RoleConfig,
}

impl QuantizerSpec {
    /// Compose a format descriptor with a role config.
    pub fn new(format: FloatFormat, role: RoleConfig) -> Self {
        Self { format, role }
    }

    /// Exponent bias of the underlying format.
    pub fn exponent_bias(&self) -> u32 {
        self.format.exponent_bias()
    }

    /// Merged attribute bundle: role attributes overlaid with format
    /// attributes (format wins), plus the derived `exponent_bias`.
    pub fn attributes(&self) -> AttrBundle {
        let mut attrs = merge_attributes(self.role.attributes(), self.format.attributes());
        attrs.insert("exponent_bias".into(), self.format.exponent_bias().into());
        attrs
    }

    /// Strict variant of [`QuantizerSpec::attributes`]: any key defined
    /// by both the format and the role is an error.
    pub fn attributes_checked(&self) -> Result<AttrBundle> {
        let mut attrs =
            merge_attributes_checked(self.role.attributes(), self.format.attributes())?;
        if attrs.contains_key("exponent_bias") {
            return Err(Error::AttributeCollision {
                key: "exponent_bias".to_string(),
            });
        }
        attrs.insert("exponent_bias".into(), self.format.exponent_bias().into());
        Ok(attrs)
    }
}
