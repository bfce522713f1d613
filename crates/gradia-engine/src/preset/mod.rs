//! Preset data: a named bundle of layer specs used to bulk-load the store.
//!
//! Presets are plain data. Authoring and parsing them is the job of the
//! `.gpml` catalog in `gradia-ui`.

use std::fmt;
use std::str::FromStr;

use crate::paint::{BlendMode, ColorStop, GradientKind, ParseKeywordError, RadialShape, RadialSize};

/// Outline of the preview surface a preset was designed for.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PreviewShape {
    #[default]
    Rectangle,
    Circle,
}

impl PreviewShape {
    pub const fn as_str(self) -> &'static str {
        match self {
            PreviewShape::Rectangle => "rectangle",
            PreviewShape::Circle => "circle",
        }
    }
}

impl fmt::Display for PreviewShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewShape {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(PreviewShape::Rectangle),
            "circle" => Ok(PreviewShape::Circle),
            _ => Err(ParseKeywordError { expected: "preview shape", input: s.to_string() }),
        }
    }
}

/// A partial layer. `None` fields take the same defaults as
/// [`LayerStore::add_layer`](crate::store::LayerStore::add_layer).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerSpec {
    pub kind: GradientKind,
    pub angle: Option<i32>,
    pub position: Option<String>,
    pub radial_shape: Option<RadialShape>,
    pub radial_size: Option<RadialSize>,
    pub stops: Vec<ColorStop>,
    pub blend_mode: Option<BlendMode>,
}

impl LayerSpec {
    pub fn new(kind: GradientKind, stops: Vec<ColorStop>) -> Self {
        Self { kind, stops, ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub shape: PreviewShape,
    pub layers: Vec<LayerSpec>,
}

impl Preset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), shape: PreviewShape::default(), layers: Vec::new() }
    }

    pub fn with_shape(mut self, shape: PreviewShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn layer(mut self, spec: LayerSpec) -> Self {
        self.layers.push(spec);
        self
    }
}
