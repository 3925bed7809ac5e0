//! Float format registry
//!
//! Explicit name → descriptor table for the supported minifloat
//! layouts. Populated once at startup, read-only afterwards.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::format::FloatFormat;

/// Read-only table of named float formats.
#[derive(Clone, Debug, Default)]
pub struct FormatRegistry {
    formats: BTreeMap<String, FloatFormat>,
}

impl FormatRegistry {
    /// Registry holding the five supported layouts: e4m3, e5m2, e3m2,
    /// e2m3, e2m1.
    pub fn builtin() -> Self {
        let mut formats = BTreeMap::new();
        for format in [
            FloatFormat::e4m3(),
            FloatFormat::e5m2(),
            FloatFormat::e3m2(),
            FloatFormat::e2m3(),
            FloatFormat::e2m1(),
        ] {
            formats.insert(format.to_string(), format);
        }
        Self { formats }
    }

    /// Build a registry from descriptors, keyed by their `eXmY` name.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateFormat`] when two descriptors share a
    /// name, and re-runs each descriptor's bit-width validation.
    pub fn from_formats(formats: impl IntoIterator<Item = FloatFormat>) -> Result<Self> {
        let mut table = BTreeMap::new();
        for format in formats {
            format.validate()?;
            let name = format.to_string();
            if table.insert(name.clone(), format).is_some() {
                return Err(Error::DuplicateFormat(name));
            }
        }
        Ok(Self { formats: table })
    }

    /// Look up a format by name.
    pub fn get(&self, name: &str) -> Option<&FloatFormat> {
        self.formats.get(name)
    }

    /// Registered names, in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, format)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FloatFormat)> {
        self.formats.iter().map(|(name, format)| (name.as_str(), format))
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether the registry holds no formats.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
