//! Declarative YAML quantizer configuration
//!
//! Describes a model's quantizers in YAML and resolves them into
//! [`QuantizerSpec`]s against a format registry.
//!
//! # Example
//!
//! ```yaml
//! quantizers:
//!   conv1.weight:
//!     format: e4m3
//!     role: weight
//!
//!   conv1.act:
//!     format: e5m2
//!     role: activation
//!     collect_stats_steps: 500
//! ```

mod schema;
mod validate;

pub use schema::{QuantizerEntry, QuantizerManifest};
pub use validate::{validate_manifest, ValidationError};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::format::FormatRegistry;
use crate::quantizer::{QuantizerSpec, RoleConfig, TensorRole};

/// Parse a quantizer manifest from YAML text.
pub fn parse_manifest(yaml: &str) -> Result<QuantizerManifest> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a quantizer manifest from a YAML file.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<QuantizerManifest> {
    let text = fs::read_to_string(path)?;
    parse_manifest(&text)
}

/// Resolve a manifest into quantizer specs against a format registry.
///
/// Each entry's format name is looked up in `formats`; role defaults
/// come from the entry's role, with the entry's overrides applied on
/// top.
///
/// # Errors
/// Returns [`Error::UnknownFormat`] for a format name the registry
/// does not hold. Declaration is unchecked; resolution is where
/// failures surface.
pub fn resolve(
    manifest: &QuantizerManifest,
    formats: &FormatRegistry,
) -> Result<BTreeMap<String, QuantizerSpec>> {
    let mut resolved = BTreeMap::new();
    for (tensor, entry) in &manifest.quantizers {
        let format = formats
            .get(&entry.format)
            .copied()
            .ok_or_else(|| Error::UnknownFormat(entry.format.clone()))?;

        let mut role = match entry.role {
            TensorRole::Weight => RoleConfig::weight(),
            TensorRole::Activation => RoleConfig::activation(),
        };
        if let Some(steps) = entry.collect_stats_steps {
            role.collect_stats_steps = Some(steps);
        }
        if let Some(min_val) = entry.scaling_min_val {
            role.scaling_min_val = min_val;
        }

        resolved.insert(tensor.clone(), QuantizerSpec::new(format, role));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantizer::{presets, ScalingImplType};
    use approx::assert_abs_diff_eq;
    use std::io::Write;

    const MANIFEST: &str = r#"
quantizers:
  conv1.weight:
    format: e4m3
    role: weight
  conv1.act:
    format: e4m3
    role: activation
  head.weight:
    format: e2m1
    role: weight
"#;

    #[test]
    fn test_resolve_against_builtin_registry() {
        let manifest = parse_manifest(MANIFEST).unwrap();
        let specs = resolve(&manifest, &FormatRegistry::builtin()).unwrap();

        assert_eq!(specs.len(), 3);
        assert_eq!(
            specs["conv1.weight"],
            presets::fp8e4m3_weight_per_tensor_float()
        );
        assert_eq!(specs["conv1.act"], presets::fp8e4m3_act_per_tensor_float());
        assert_eq!(
            specs["head.weight"],
            presets::fp4_weight_per_tensor_float()
        );
    }

    #[test]
    fn test_resolved_bundles_match_presets() {
        let manifest = parse_manifest(MANIFEST).unwrap();
        let specs = resolve(&manifest, &FormatRegistry::builtin()).unwrap();
        assert_eq!(
            specs["conv1.act"].attributes(),
            presets::fp8e4m3_act_per_tensor_float().attributes()
        );
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let yaml = r#"
quantizers:
  conv1.act:
    format: e5m2
    role: activation
    collect_stats_steps: 500
    scaling_min_val: 1e-8
"#;
        let manifest = parse_manifest(yaml).unwrap();
        let specs = resolve(&manifest, &FormatRegistry::builtin()).unwrap();

        let spec = &specs["conv1.act"];
        assert_eq!(spec.role.collect_stats_steps, Some(500));
        assert_abs_diff_eq!(spec.role.scaling_min_val, 1e-8);
        // untouched defaults survive the overrides
        assert_eq!(
            spec.role.scaling_impl_type,
            ScalingImplType::ParameterFromStats
        );
    }

    #[test]
    fn test_resolve_unknown_format() {
        let yaml = r#"
quantizers:
  fc.weight:
    format: e9m9
    role: weight
"#;
        let manifest = parse_manifest(yaml).unwrap();
        let err = resolve(&manifest, &FormatRegistry::builtin()).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(name) if name == "e9m9"));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        assert!(parse_manifest("quantizers: [not, a, map]").is_err());
        assert!(parse_manifest(":::").is_err());
    }

    #[test]
    fn test_load_manifest_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();

        let manifest = load_manifest(file.path()).unwrap();
        assert_eq!(manifest.quantizers.len(), 3);
    }

    #[test]
    fn test_load_manifest_missing_file() {
        let err = load_manifest("/nonexistent/quantizers.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
