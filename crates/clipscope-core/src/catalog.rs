//! Shaper catalog.
//!
//! The catalog is the single source of truth for shaper identifiers, display
//! names and descriptions. The set is fixed; entries appear in registration
//! order everywhere they are listed.

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

use crate::error::CoreError;
use crate::shaper::ShaperKind;
use crate::waveform::{SignalConfig, Waveform, generate};

/// Describes a shaper in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaperDescriptor {
    /// Unique identifier (e.g. `"softTanh"`).
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Brief description of the curve.
    pub description: &'static str,
    /// The transfer function behind this entry.
    pub kind: ShaperKind,
}

impl ShaperDescriptor {
    /// Build the descriptor for a shaper kind.
    pub const fn of(kind: ShaperKind) -> Self {
        Self {
            key: kind.key(),
            name: kind.name(),
            description: kind.description(),
            kind,
        }
    }

    /// Evaluate `f(x, knee)` for this shaper.
    #[inline]
    pub fn shape(&self, x: f32, knee: f32) -> f32 {
        self.kind.shape(x, knee)
    }

    /// Strip the function, leaving what a listing needs.
    pub const fn info(&self) -> ShaperInfo {
        ShaperInfo {
            key: self.key,
            name: self.name,
            description: self.description,
        }
    }
}

/// Key, name and description of a shaper, as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaperInfo {
    /// Unique identifier.
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Brief description.
    pub description: &'static str,
}

/// Registry of all available shapers.
pub struct ShaperCatalog {
    entries: Vec<ShaperDescriptor>,
}

impl Default for ShaperCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaperCatalog {
    /// Create a catalog with every built-in shaper registered.
    pub fn new() -> Self {
        let mut catalog = Self {
            entries: Vec::with_capacity(ShaperKind::ALL.len()),
        };
        for kind in ShaperKind::ALL {
            catalog.register(ShaperDescriptor::of(kind));
        }
        catalog
    }

    fn register(&mut self, descriptor: ShaperDescriptor) {
        debug_assert!(
            self.get(descriptor.key).is_none(),
            "duplicate shaper key {}",
            descriptor.key
        );
        self.entries.push(descriptor);
    }

    /// All shapers in registration order.
    pub fn all(&self) -> &[ShaperDescriptor] {
        &self.entries
    }

    /// Key, name and description of every shaper, in registration order.
    pub fn list(&self) -> Vec<ShaperInfo> {
        self.entries.iter().map(ShaperDescriptor::info).collect()
    }

    /// All keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|d| d.key)
    }

    /// Find a shaper by key, ignoring ASCII case.
    pub fn get(&self, key: &str) -> Option<&ShaperDescriptor> {
        self.entries
            .iter()
            .find(|d| d.key.eq_ignore_ascii_case(key))
    }

    /// Resolve a key to its shaper kind.
    pub fn kind(&self, key: &str) -> Result<ShaperKind, CoreError> {
        self.get(key)
            .map(|d| d.kind)
            .ok_or_else(|| CoreError::UnknownShaper(key.to_string()))
    }

    /// Generate a shaped waveform for the shaper registered under `key`.
    pub fn generate(&self, key: &str, config: &SignalConfig) -> Result<Waveform, CoreError> {
        generate(self.kind(key)?, config)
    }

    /// Number of registered shapers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
