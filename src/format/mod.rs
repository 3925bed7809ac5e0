//! Minifloat format descriptors
//!
//! A [`FloatFormat`] describes a low-precision floating-point layout:
//! total bit-width, exponent width, mantissa width, and whether
//! out-of-range values saturate to the largest representable magnitude
//! instead of overflowing to infinity.
//!
//! Formats are pure value descriptors. The mapping from real values to
//! the float grid lives in the numeric kernels that consume these
//! descriptors, not here.

mod registry;

pub use registry::FormatRegistry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::quantizer::AttrBundle;

/// Layout of a custom low-precision floating-point format.
///
/// Invariant: `1 (sign) + exponent_bit_width + mantissa_bit_width ==
/// bit_width`. [`FloatFormat::new`] enforces this; the named
/// constructors ([`FloatFormat::e4m3`] etc.) are known-valid layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatFormat {
    /// Total storage bits, including the sign bit
    pub bit_width: u32,
    /// Bits allocated to the exponent
    pub exponent_bit_width: u32,
    /// Bits allocated to the mantissa
    pub mantissa_bit_width: u32,
    /// Clamp out-of-range values to the max representable magnitude
    /// instead of mapping them to infinity
    pub saturating: bool,
}

impl FloatFormat {
    /// Create a format descriptor, checking the bit-width invariant.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFormat`] when the widths do not add up
    /// (`1 + exponent + mantissa != bit_width`) or when the exponent
    /// field is empty.
    pub fn new(
        bit_width: u32,
        exponent_bit_width: u32,
        mantissa_bit_width: u32,
        saturating: bool,
    ) -> Result<Self> {
        let format = Self {
            bit_width,
            exponent_bit_width,
            mantissa_bit_width,
            saturating,
        };
        format.validate()?;
        Ok(format)
    }

    /// Re-check the bit-width invariant on an existing descriptor.
    pub fn validate(&self) -> Result<()> {
        if self.exponent_bit_width == 0 {
            return Err(Error::InvalidFormat {
                name: self.to_string(),
                reason: "exponent field must be at least 1 bit".to_string(),
            });
        }
        if 1 + self.exponent_bit_width + self.mantissa_bit_width != self.bit_width {
            return Err(Error::InvalidFormat {
                name: self.to_string(),
                reason: format!(
                    "1 (sign) + {} (exponent) + {} (mantissa) != {} (bit_width)",
                    self.exponent_bit_width, self.mantissa_bit_width, self.bit_width
                ),
            });
        }
        Ok(())
    }

    /// 8-bit float, 4 exponent bits, 3 mantissa bits (saturating)
    pub fn e4m3() -> Self {
        Self {
            bit_width: 8,
            exponent_bit_width: 4,
            mantissa_bit_width: 3,
            saturating: true,
        }
    }

    /// 8-bit float, 5 exponent bits, 2 mantissa bits (saturating)
    pub fn e5m2() -> Self {
        Self {
            bit_width: 8,
            exponent_bit_width: 5,
            mantissa_bit_width: 2,
            saturating: true,
        }
    }

    /// 6-bit float, 3 exponent bits, 2 mantissa bits (saturating)
    pub fn e3m2() -> Self {
        Self {
            bit_width: 6,
            exponent_bit_width: 3,
            mantissa_bit_width: 2,
            saturating: true,
        }
    }

    /// 6-bit float, 2 exponent bits, 3 mantissa bits (saturating)
    pub fn e2m3() -> Self {
        Self {
            bit_width: 6,
            exponent_bit_width: 2,
            mantissa_bit_width: 3,
            saturating: true,
        }
    }

    /// 4-bit float, 2 exponent bits, 1 mantissa bit (saturating)
    pub fn e2m1() -> Self {
        Self {
            bit_width: 4,
            exponent_bit_width: 2,
            mantissa_bit_width: 1,
            saturating: true,
        }
    }

    /// Exponent bias: `2^(exponent_bit_width - 1) - 1`.
    ///
    /// Computed on demand from the exponent width, never stored.
    pub fn exponent_bias(&self) -> u32 {
        (1 << (self.exponent_bit_width - 1)) - 1
    }

    /// Number of codepoints the layout can encode (`2^bit_width`).
    pub fn num_codepoints(&self) -> u64 {
        1u64 << self.bit_width
    }

    /// Flat attribute bundle for this format, keyed by attribute name.
    pub fn attributes(&self) -> AttrBundle {
        let mut attrs = AttrBundle::new();
        attrs.insert("bit_width".into(), self.bit_width.into());
        attrs.insert("exponent_bit_width".into(), self.exponent_bit_width.into());
        attrs.insert("mantissa_bit_width".into(), self.mantissa_bit_width.into());
        attrs.insert("saturating".into(), self.saturating.into());
        attrs
    }
}

impl fmt::Display for FloatFormat {
    /// Renders the conventional `eXmY` name, e.g. `e4m3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "e{}m{}",
            self.exponent_bit_width, self.mantissa_bit_width
        )
    }
}

impl FromStr for FloatFormat {
    type Err = Error;

    /// Parse an `eXmY` name into a saturating format descriptor with
    /// the implied bit-width (`1 + X + Y`).
    fn from_str(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix('e')
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))?;
        let (exp, mant) = rest
            .split_once('m')
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))?;
        let exponent_bit_width: u32 = exp
            .parse()
            .map_err(|_| Error::UnknownFormat(s.to_string()))?;
        let mantissa_bit_width: u32 = mant
            .parse()
            .map_err(|_| Error::UnknownFormat(s.to_string()))?;
        Self::new(
            1 + exponent_bit_width + mantissa_bit_width,
            exponent_bit_width,
            mantissa_bit_width,
            true,
        )
    }
}
