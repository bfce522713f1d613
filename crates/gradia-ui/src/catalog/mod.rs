//! Preset catalogs authored in `.gpml`.
//!
//! # Format
//!
//! ```gpml
//! Preset "sunset-glow" {
//!     shape: rectangle              // rectangle | circle
//!
//!     Layer "radial-gradient" {     // any gradient function name
//!         position: "30% 70%"
//!         shape: ellipse            // radial shape
//!         size: closest-side        // radial size
//!         blend: screen
//!         Stop { color: #ffedd5  at: 0  opacity: 60 }
//!         Stop { color: transparent  at: 40  unit: px }
//!     }
//! }
//! ```
//!
//! Layers are listed top to bottom. Omitted fields fall back to the same
//! defaults as a freshly added layer.

mod builder;
mod error;

pub use error::CatalogError;

use gradia_engine::preset::Preset;

/// Source of the catalog compiled into the binary.
pub const BUILTIN_GPML: &str = include_str!("../../presets/builtin.gpml");

/// Preset the editor opens with.
pub const DEFAULT_PRESET: &str = "arctic-aurora";

/// Name-addressed preset collection, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in presets.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.parse_and_register(BUILTIN_GPML)?;
        Ok(catalog)
    }

    /// Parses `src` and registers every preset in it. Returns how many were
    /// registered. Nothing is registered when any preset is invalid.
    pub fn parse_and_register(&mut self, src: &str) -> Result<usize, CatalogError> {
        let doc = gradia_gpml::parse_str(src)?;
        let presets = builder::build_presets(&doc)?;
        let count = presets.len();
        for preset in presets {
            self.register(preset);
        }
        Ok(count)
    }

    /// Adds `preset`, replacing an existing preset with the same name in place.
    pub fn register(&mut self, preset: Preset) {
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(slot) => {
                log::debug!("replacing preset {:?}", preset.name);
                *slot = preset;
            }
            None => self.presets.push(preset),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
