//! Dedicated FP4 (e2m1) quantizer surface
//!
//! Historical home of the two FP4 composites, kept for compatibility.
//! The canonical definitions live in [`crate::quantizer::presets`];
//! these wrappers delegate and yield identical specs.

use crate::quantizer::{presets, QuantizerSpec};

/// Per-tensor 4-bit (e2m1) floating-point weight quantizer.
#[deprecated(since = "0.1.0", note = "use quantizer::presets::fp4_weight_per_tensor_float")]
pub fn fp4_weight_per_tensor_float() -> QuantizerSpec {
    presets::fp4_weight_per_tensor_float()
}

/// Per-tensor 4-bit (e2m1) floating-point activation quantizer.
#[deprecated(since = "0.1.0", note = "use quantizer::presets::fp4_act_per_tensor_float")]
pub fn fp4_act_per_tensor_float() -> QuantizerSpec {
    presets::fp4_act_per_tensor_float()
}
