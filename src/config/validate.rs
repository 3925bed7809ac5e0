//! Manifest validation

use super::schema::QuantizerManifest;
use crate::quantizer::TensorRole;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Manifest declares no quantizers")]
    EmptyManifest,

    #[error("Empty tensor name in manifest")]
    EmptyTensorName,

    #[error("Invalid scale floor for {tensor}: {value} (must be > 0.0)")]
    InvalidScalingMinVal { tensor: String, value: f64 },

    #[error("Invalid stats window for {tensor}: 0 (must be > 0)")]
    InvalidStatsWindow { tensor: String },

    #[error("Stats window set on weight quantizer {tensor}: weights are calibrated once, not over a window")]
    StatsWindowOnWeight { tensor: String },
}

/// Validate a quantizer manifest.
///
/// Checks:
/// - At least one quantizer is declared, each under a non-empty name
/// - Numeric overrides are in valid ranges
/// - A statistics window only appears on activation quantizers
///
/// Format names are NOT resolved here; an unknown format surfaces when
/// the manifest is resolved against a registry.
pub fn validate_manifest(manifest: &QuantizerManifest) -> Result<(), ValidationError> {
    if manifest.quantizers.is_empty() {
        return Err(ValidationError::EmptyManifest);
    }

    for (tensor, entry) in &manifest.quantizers {
        if tensor.is_empty() {
            return Err(ValidationError::EmptyTensorName);
        }

        if let Some(min_val) = entry.scaling_min_val {
            if min_val <= 0.0 {
                return Err(ValidationError::InvalidScalingMinVal {
                    tensor: tensor.clone(),
                    value: min_val,
                });
            }
        }

        match entry.collect_stats_steps {
            Some(0) => {
                return Err(ValidationError::InvalidStatsWindow {
                    tensor: tensor.clone(),
                });
            }
            Some(_) if entry.role == TensorRole::Weight => {
                return Err(ValidationError::StatsWindowOnWeight {
                    tensor: tensor.clone(),
                });
            }
            _ => {}
        }
    }

    Ok(())
}
