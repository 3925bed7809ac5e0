//! Integration checks over the full preset matrix: every built-in
//! quantizer spec produces a complete, collision-free attribute bundle
//! with the expected derived values.

use cuantizar::quantizer::{ScalingImplType, TensorRole};
use cuantizar::{FloatFormat, FormatRegistry, PresetRegistry};

#[test]
fn every_builtin_format_satisfies_the_bit_width_sum() {
    for (name, format) in FormatRegistry::builtin().iter() {
        assert_eq!(
            1 + format.exponent_bit_width + format.mantissa_bit_width,
            format.bit_width,
            "{name}"
        );
    }
}

#[test]
fn builtin_format_table_matches_the_supported_layouts() {
    let registry = FormatRegistry::builtin();
    let expect = [
        ("e4m3", 8, 4, 3),
        ("e5m2", 8, 5, 2),
        ("e3m2", 6, 3, 2),
        ("e2m3", 6, 2, 3),
        ("e2m1", 4, 2, 1),
    ];
    assert_eq!(registry.len(), expect.len());
    for (name, bits, exponent, mantissa) in expect {
        let format = registry.get(name).unwrap();
        assert_eq!(format.bit_width, bits, "{name}");
        assert_eq!(format.exponent_bit_width, exponent, "{name}");
        assert_eq!(format.mantissa_bit_width, mantissa, "{name}");
        assert!(format.saturating, "{name}");
    }
}

#[test]
fn exponent_bias_follows_the_closed_formula() {
    for (bias, format) in [
        (7, FloatFormat::e4m3()),
        (15, FloatFormat::e5m2()),
        (3, FloatFormat::e3m2()),
        (1, FloatFormat::e2m3()),
        (1, FloatFormat::e2m1()),
    ] {
        assert_eq!(format.exponent_bias(), bias, "{format}");
    }
}

#[test]
fn every_preset_bundle_is_the_union_of_its_parents() {
    for (name, spec) in PresetRegistry::builtin().iter() {
        let attrs = spec.attributes();

        for (key, value) in spec.format.attributes() {
            assert_eq!(attrs[&key], value, "{name}: format attribute {key}");
        }
        for (key, value) in spec.role.attributes() {
            assert_eq!(attrs[&key], value, "{name}: role attribute {key}");
        }
        assert_eq!(
            attrs.len(),
            spec.format.attributes().len() + spec.role.attributes().len() + 1,
            "{name}: unexpected extra attributes"
        );
        assert_eq!(
            attrs["exponent_bias"].as_u64().unwrap(),
            u64::from(spec.exponent_bias()),
            "{name}"
        );
    }
}

#[test]
fn every_preset_strict_merges_without_collision() {
    for (name, spec) in PresetRegistry::builtin().iter() {
        let checked = spec
            .attributes_checked()
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(checked, spec.attributes(), "{name}");
    }
}

#[test]
fn weight_presets_calibrate_once_and_act_presets_learn_over_a_window() {
    for (name, spec) in PresetRegistry::builtin().iter() {
        let attrs = spec.attributes();
        match spec.role.role {
            TensorRole::Weight => {
                assert_eq!(spec.role.scaling_impl_type, ScalingImplType::Stats, "{name}");
                assert_eq!(attrs["scaling_impl_type"], "stats", "{name}");
                assert!(!attrs.contains_key("collect_stats_steps"), "{name}");
            }
            TensorRole::Activation => {
                assert_eq!(
                    spec.role.scaling_impl_type,
                    ScalingImplType::ParameterFromStats,
                    "{name}"
                );
                assert_eq!(attrs["scaling_impl_type"], "parameter_from_stats", "{name}");
                assert_eq!(attrs["collect_stats_steps"], 300, "{name}");
            }
        }
    }
}

#[test]
fn every_preset_shares_the_common_defaults() {
    for (name, spec) in PresetRegistry::builtin().iter() {
        let attrs = spec.attributes();
        assert_eq!(attrs["signed"], true, "{name}");
        assert_eq!(attrs["float_to_int_impl_type"], "round", "{name}");
        assert_eq!(attrs["scaling_stats_op"], "max", "{name}");
        assert_eq!(attrs["restrict_scaling_type"], "fp", "{name}");
        assert_eq!(attrs["saturating"], true, "{name}");
        assert_eq!(attrs["tensor_quant"], "float_quant", "{name}");
        assert_eq!(attrs["float_scaling_impl"], "float_scaling", "{name}");
        assert_eq!(attrs["tensor_clamp_impl"], "tensor_clamp", "{name}");
        assert_eq!(attrs["float_clamp_impl"], "float_clamp", "{name}");
        assert_eq!(attrs["scaling_min_val"].as_f64().unwrap(), 1e-10, "{name}");
    }
}

#[test]
fn manifest_resolution_agrees_with_the_preset_table() {
    let yaml = r#"
quantizers:
  blocks.0.attn.weight:
    format: e4m3
    role: weight
  blocks.0.attn.act:
    format: e4m3
    role: activation
  blocks.0.mlp.weight:
    format: e5m2
    role: weight
  head.weight:
    format: e2m1
    role: weight
  head.act:
    format: e2m1
    role: activation
"#;
    let manifest = cuantizar::config::parse_manifest(yaml).unwrap();
    cuantizar::config::validate_manifest(&manifest).unwrap();
    let specs = cuantizar::config::resolve(&manifest, &FormatRegistry::builtin()).unwrap();

    let presets = PresetRegistry::builtin();
    let pairs = [
        ("blocks.0.attn.weight", "fp8e4m3_weight_per_tensor_float"),
        ("blocks.0.attn.act", "fp8e4m3_act_per_tensor_float"),
        ("blocks.0.mlp.weight", "fp8e5m2_weight_per_tensor_float"),
        ("head.weight", "fp4_weight_per_tensor_float"),
        ("head.act", "fp4_act_per_tensor_float"),
    ];
    for (tensor, preset) in pairs {
        assert_eq!(
            specs[tensor].attributes(),
            presets.get(preset).unwrap().attributes(),
            "{tensor} should resolve to {preset}"
        );
    }
}
