//! Role configuration: weight vs. activation quantizers
//!
//! A [`RoleConfig`] bundles the defaults that differ between quantizing
//! a static weight tensor and a dynamically-observed activation tensor:
//! how the scale factor is derived, which statistic seeds it, and which
//! runtime proxy wraps the quantized tensor.
//!
//! Everything here is declarative. The scale computation, clamping, and
//! rounding themselves run in the external kernels these fields name;
//! unsupported combinations surface when the resolver consumes the
//! bundle, not at declaration time.

use serde::{Deserialize, Serialize};

use crate::quantizer::AttrBundle;

/// Which numeric role a quantizer serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TensorRole {
    /// Static weight tensor, calibrated once
    Weight,
    /// Runtime activation tensor, observed batch by batch
    Activation,
}

/// How the scale factor is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScalingImplType {
    /// Recomputed from tensor statistics at calibration time
    #[default]
    Stats,
    /// Free trainable parameter
    Parameter,
    /// Trainable parameter initialized from observed statistics
    ParameterFromStats,
}

/// Statistic used to seed or compute the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScalingStatsOp {
    /// Maximum absolute value of the tensor
    #[default]
    #[serde(rename = "max")]
    AbsMax,
    /// Separate minimum and maximum
    MinMax,
    /// Mean absolute value
    Mean,
}

/// Numeric domain the scale factor is restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RestrictScalingType {
    /// Unrestricted floating-point scale
    #[default]
    Fp,
    /// Power-of-two scale
    Po2,
}

/// Rounding applied when mapping values onto the quantized grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to nearest
    #[default]
    Round,
    Floor,
    Ceil,
}

/// Runtime proxy that wraps tensors quantized under a spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxyKind {
    /// Proxy for float-quantized weights
    WeightFloatQuant,
    /// Proxy for float-quantized activations
    ActFloatQuant,
}

/// Reference to an external numeric kernel, by name.
///
/// The kernels themselves live outside this crate; a role config only
/// records which implementation the resolver should instantiate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelRef {
    /// Tensor-to-minifloat-grid quantization kernel
    FloatQuant,
    /// Scale computation/learning kernel for float formats
    FloatScaling,
    /// Elementwise tensor clamp
    TensorClamp,
    /// Float-specific clamp handling NaN/Inf per the saturation policy
    FloatClamp,
}

/// Scale floor preventing division by zero in scale-based dequantization.
pub const SCALING_MIN_VAL: f64 = 1e-10;

/// Warm-up window (in observed batches) over which an activation scale
/// is seeded from statistics before becoming a trainable parameter.
pub const ACT_COLLECT_STATS_STEPS: u32 = 300;

/// Defaults for one quantizer role.
///
/// Both roles share the signed format, round-to-nearest mapping, the
/// scale floor, and the pair of collaborating clamp kernels. They
/// differ in scale derivation: weights use a one-time statistic,
/// activations learn the scale from a statistics warm-up window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleConfig {
    /// Numeric role this config serves
    pub role: TensorRole,
    /// Signed format
    pub signed: bool,
    /// Value-to-grid rounding mode
    pub float_to_int_impl_type: RoundingMode,
    /// Scale floor
    pub scaling_min_val: f64,
    /// Statistic seeding the scale
    pub scaling_stats_op: ScalingStatsOp,
    /// Scale derivation strategy
    pub scaling_impl_type: ScalingImplType,
    /// Numeric domain of the scale
    pub restrict_scaling_type: RestrictScalingType,
    /// Statistics warm-up window, absent for one-shot calibration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collect_stats_steps: Option<u32>,
    /// Quantization kernel reference
    pub tensor_quant: KernelRef,
    /// Scale kernel reference
    pub float_scaling_impl: KernelRef,
    /// Elementwise clamp reference
    pub tensor_clamp_impl: KernelRef,
    /// Float clamp reference (NaN/Inf handling)
    pub float_clamp_impl: KernelRef,
    /// Runtime proxy wrapping the quantized tensor
    pub proxy: ProxyKind,
}

impl RoleConfig {
    /// Weight role: scale derived once from the tensor's max-abs
    /// statistic, restricted to a floating-point value.
    pub fn weight() -> Self {
        Self {
            role: TensorRole::Weight,
            signed: true,
            float_to_int_impl_type: RoundingMode::Round,
            scaling_min_val: SCALING_MIN_VAL,
            scaling_stats_op: ScalingStatsOp::AbsMax,
            scaling_impl_type: ScalingImplType::Stats,
            restrict_scaling_type: RestrictScalingType::Fp,
            collect_stats_steps: None,
            tensor_quant: KernelRef::FloatQuant,
            float_scaling_impl: KernelRef::FloatScaling,
            tensor_clamp_impl: KernelRef::TensorClamp,
            float_clamp_impl: KernelRef::FloatClamp,
            proxy: ProxyKind::WeightFloatQuant,
        }
    }

    /// Activation role: scale is a trainable parameter initialized from
    /// max-abs statistics collected over a 300-batch warm-up window.
    pub fn activation() -> Self {
        Self {
            role: TensorRole::Activation,
            scaling_impl_type: ScalingImplType::ParameterFromStats,
            collect_stats_steps: Some(ACT_COLLECT_STATS_STEPS),
            proxy: ProxyKind::ActFloatQuant,
            ..Self::weight()
        }
    }

    /// Flat attribute bundle for this role, keyed by attribute name.
    ///
    /// `collect_stats_steps` only appears when a warm-up window is set;
    /// a weight role simply has no such attribute.
    pub fn attributes(&self) -> AttrBundle {
        let mut attrs = AttrBundle::new();
        attrs.insert("role".into(), enum_str(&self.role));
        attrs.insert("signed".into(), self.signed.into());
        attrs.insert(
            "float_to_int_impl_type".into(),
            enum_str(&self.float_to_int_impl_type),
        );
        attrs.insert("scaling_min_val".into(), self.scaling_min_val.into());
        attrs.insert("scaling_stats_op".into(), enum_str(&self.scaling_stats_op));
        attrs.insert("scaling_impl_type".into(), enum_str(&self.scaling_impl_type));
        attrs.insert(
            "restrict_scaling_type".into(),
            enum_str(&self.restrict_scaling_type),
        );
        if let Some(steps) = self.collect_stats_steps {
            attrs.insert("collect_stats_steps".into(), steps.into());
        }
        attrs.insert("tensor_quant".into(), enum_str(&self.tensor_quant));
        attrs.insert("float_scaling_impl".into(), enum_str(&self.float_scaling_impl));
        attrs.insert("tensor_clamp_impl".into(), enum_str(&self.tensor_clamp_impl));
        attrs.insert("float_clamp_impl".into(), enum_str(&self.float_clamp_impl));
        attrs.insert("proxy".into(), enum_str(&self.proxy));
        attrs
    }
}

/// Serialize a unit enum variant to its wire name.
fn enum_str<T: Serialize>(value: &T) -> serde_json::Value {
    // Unit variants serialize to plain strings; this cannot fail.
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}
