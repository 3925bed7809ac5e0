//! # Cuantizar: Minifloat Quantizer Configuration
//!
//! Cuantizar declares the configuration side of floating-point
//! quantization: minifloat format descriptors (e4m3, e5m2, e3m2, e2m3,
//! e2m1), role configurations for weight and activation tensors, and
//! their composition into ready-to-use quantizer specs.
//!
//! ## Architecture
//!
//! - **format**: Format descriptors and the explicit format registry
//! - **quantizer**: Role configs, attribute merge, composed specs, presets
//! - **config**: Declarative YAML quantizer manifests
//!
//! The numeric kernels that consume these specs (value-to-grid
//! quantization, clamping, scale learning) live outside this crate;
//! a spec records which kernels the resolver should instantiate and
//! with which parameters.
//!
//! ## Example
//!
//! ```
//! use cuantizar::{FloatFormat, QuantizerSpec, RoleConfig};
//!
//! let spec = QuantizerSpec::new(FloatFormat::e2m1(), RoleConfig::weight());
//! assert_eq!(spec.format.bit_width, 4);
//! assert_eq!(spec.exponent_bias(), 1);
//!
//! let attrs = spec.attributes();
//! assert_eq!(attrs["scaling_impl_type"], "stats");
//! ```

pub mod config;
pub mod format;
pub mod quantizer;

pub mod error;

// Re-export commonly used types
pub use error::{Error, Result};
pub use format::{FloatFormat, FormatRegistry};
pub use quantizer::{PresetRegistry, QuantizerSpec, RoleConfig, TensorRole};
