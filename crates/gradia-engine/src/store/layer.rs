use std::fmt;
use std::str::FromStr;

use crate::paint::{BlendMode, ColorStop, GradientKind, RadialShape, RadialSize};

// ── LayerId ───────────────────────────────────────────────────────────────

/// Store-assigned layer identity, rendered as `layer-<n>`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LayerId(u32);

impl LayerId {
    #[inline]
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayerIdError(pub String);

impl fmt::Display for ParseLayerIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid layer id {:?} (expected layer-<n>)", self.0)
    }
}

impl std::error::Error for ParseLayerIdError {}

impl FromStr for LayerId {
    type Err = ParseLayerIdError;

    /// Accepts `layer-3` as well as the bare number `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("layer-").unwrap_or(s);
        digits
            .parse::<u32>()
            .map(LayerId)
            .map_err(|_| ParseLayerIdError(s.to_string()))
    }
}

// ── Direction ─────────────────────────────────────────────────────────────

/// Reorder direction. `Up` moves toward the front of the sequence (the
/// topmost composited layer).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
}

// ── Layer ─────────────────────────────────────────────────────────────────

/// One gradient layer of the composited background.
///
/// `angle` applies to linear and conic kinds, `position` to radial and conic
/// kinds, `radial_*` to radial kinds only. Identity and color stops are only
/// mutable through [`LayerStore`](super::LayerStore) so stop ordering cannot
/// be broken from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: LayerId,
    pub kind: GradientKind,
    pub angle: i32,
    pub position: String,
    pub radial_shape: RadialShape,
    pub radial_size: RadialSize,
    stops: Vec<ColorStop>,
    pub blend_mode: BlendMode,
}

impl Layer {
    pub const DEFAULT_ANGLE: i32 = 90;
    pub const DEFAULT_POSITION: &'static str = "center";
    pub const MIN_STOPS: usize = 2;

    /// A layer of `kind` with the editor defaults: 90deg, centered, and the
    /// two-stop purple gradient.
    pub(crate) fn new(id: LayerId, kind: GradientKind) -> Self {
        Self {
            id,
            kind,
            angle: Self::DEFAULT_ANGLE,
            position: Self::DEFAULT_POSITION.to_string(),
            radial_shape: RadialShape::default(),
            radial_size: RadialSize::default(),
            stops: Self::default_stops(),
            blend_mode: BlendMode::default(),
        }
    }

    pub fn default_stops() -> Vec<ColorStop> {
        vec![ColorStop::new("#667eea", 0.0), ColorStop::new("#764ba2", 100.0)]
    }

    #[inline]
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Color stops in ascending position order.
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Replaces the stop list. Lists shorter than [`MIN_STOPS`](Self::MIN_STOPS)
    /// are refused; accepted lists are sorted.
    pub(crate) fn set_stops(&mut self, stops: Vec<ColorStop>) -> bool {
        if stops.len() < Self::MIN_STOPS {
            return false;
        }
        self.stops = stops;
        self.sort_stops();
        true
    }

    pub(crate) fn stops_mut(&mut self) -> &mut Vec<ColorStop> {
        &mut self.stops
    }

    /// Stable ascending sort by position; ties keep their relative order.
    pub(crate) fn sort_stops(&mut self) {
        self.stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    }
}

// ── LayerUpdate ───────────────────────────────────────────────────────────

/// Partial set of layer fields merged by [`LayerStore::update_layer`](super::LayerStore::update_layer).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerUpdate {
    pub kind: Option<GradientKind>,
    pub angle: Option<i32>,
    pub position: Option<String>,
    pub radial_shape: Option<RadialShape>,
    pub radial_size: Option<RadialSize>,
    pub stops: Option<Vec<ColorStop>>,
    pub blend_mode: Option<BlendMode>,
}

impl LayerUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: GradientKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn angle(mut self, angle: i32) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn radial_shape(mut self, shape: RadialShape) -> Self {
        self.radial_shape = Some(shape);
        self
    }

    pub fn radial_size(mut self, size: RadialSize) -> Self {
        self.radial_size = Some(size);
        self
    }

    pub fn stops(mut self, stops: Vec<ColorStop>) -> Self {
        self.stops = Some(stops);
        self
    }

    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = Some(mode);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(self, layer: &mut Layer) {
        if let Some(kind) = self.kind {
            layer.kind = kind;
        }
        if let Some(angle) = self.angle {
            layer.angle = angle;
        }
        if let Some(position) = self.position {
            layer.position = position;
        }
        if let Some(shape) = self.radial_shape {
            layer.radial_shape = shape;
        }
        if let Some(size) = self.radial_size {
            layer.radial_size = size;
        }
        if let Some(stops) = self.stops {
            if !layer.set_stops(stops) {
                log::debug!("{}: ignoring stop list shorter than {}", layer.id, Layer::MIN_STOPS);
            }
        }
        if let Some(mode) = self.blend_mode {
            layer.blend_mode = mode;
        }
    }
}
