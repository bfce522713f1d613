use std::str::FromStr;

use gradia_engine::paint::{BlendMode, ColorStop, GradientKind, RadialShape, RadialSize, StopUnit};
use gradia_engine::preset::{LayerSpec, Preset, PreviewShape};
use gradia_engine::store::Layer;
use gradia_gpml::{Document, Node, Value};

use super::error::CatalogError;

/// Turns every root node of `doc` into a [`Preset`].
pub(crate) fn build_presets(doc: &Document) -> Result<Vec<Preset>, CatalogError> {
    doc.nodes.iter().map(build_preset).collect()
}

// ── Preset ────────────────────────────────────────────────────────────────

fn build_preset(node: &Node) -> Result<Preset, CatalogError> {
    if node.kind != "Preset" {
        return Err(CatalogError::invalid("", node, format!("expected Preset, found {}", node.kind)));
    }
    let Some(name) = node.label.as_deref().filter(|n| !n.is_empty()) else {
        return Err(CatalogError::invalid("", node, "Preset needs a name: Preset \"my-preset\" { ... }"));
    };

    let mut preset = Preset::new(name);
    for prop in &node.props {
        match prop.key.as_str() {
            "shape" => preset.shape = keyword::<PreviewShape>(name, node, &prop.key, &prop.value)?,
            other => return Err(CatalogError::invalid(name, node, format!("unknown preset property {other:?}"))),
        }
    }

    for child in &node.children {
        match child.kind.as_str() {
            "Layer" => preset.layers.push(build_layer(name, child)?),
            other => {
                return Err(CatalogError::invalid(name, child, format!("unexpected {other} inside Preset")));
            }
        }
    }

    log::trace!("built preset {name:?} with {} layers", preset.layers.len());
    Ok(preset)
}

// ── Layer ─────────────────────────────────────────────────────────────────

fn build_layer(preset: &str, node: &Node) -> Result<LayerSpec, CatalogError> {
    let Some(label) = node.label.as_deref() else {
        return Err(CatalogError::invalid(preset, node, "Layer needs a gradient type: Layer \"linear-gradient\""));
    };
    let kind = GradientKind::parse(label);
    if let GradientKind::Other(name) = &kind {
        // Compiles through the linear fallback.
        log::warn!("preset {preset:?}: unknown gradient type {name:?} at {}:{}", node.line, node.col);
    }

    let mut spec = LayerSpec::new(kind, Vec::new());
    for prop in &node.props {
        let value = &prop.value;
        match prop.key.as_str() {
            "angle" => spec.angle = Some(integer(preset, node, "angle", value)?),
            "position" => spec.position = Some(text(preset, node, "position", value)?.to_string()),
            "shape" => spec.radial_shape = Some(keyword::<RadialShape>(preset, node, "shape", value)?),
            "size" => spec.radial_size = Some(keyword::<RadialSize>(preset, node, "size", value)?),
            "blend" => spec.blend_mode = Some(keyword::<BlendMode>(preset, node, "blend", value)?),
            other => {
                return Err(CatalogError::invalid(preset, node, format!("unknown layer property {other:?}")));
            }
        }
    }

    for child in &node.children {
        match child.kind.as_str() {
            "Stop" => spec.stops.push(build_stop(preset, child)?),
            other => {
                return Err(CatalogError::invalid(preset, child, format!("unexpected {other} inside Layer")));
            }
        }
    }

    if spec.stops.len() < Layer::MIN_STOPS {
        return Err(CatalogError::invalid(
            preset,
            node,
            format!("a layer needs at least {} stops, found {}", Layer::MIN_STOPS, spec.stops.len()),
        ));
    }
    Ok(spec)
}

// ── Stop ──────────────────────────────────────────────────────────────────

fn build_stop(preset: &str, node: &Node) -> Result<ColorStop, CatalogError> {
    let mut color = None;
    let mut position = None;
    let mut opacity = ColorStop::MAX_OPACITY;
    let mut unit = StopUnit::default();

    for prop in &node.props {
        let value = &prop.value;
        match prop.key.as_str() {
            "color" => {
                color = Some(match value {
                    Value::Color(hex) => hex.clone(),
                    Value::Ident(kw) if kw == "transparent" => kw.clone(),
                    other => {
                        return Err(CatalogError::invalid(
                            preset,
                            node,
                            format!("color must be a #hex literal or transparent, got {}", other.type_name()),
                        ));
                    }
                })
            }
            "at" => position = Some(number(preset, node, "at", value)?),
            "opacity" => {
                let v = integer(preset, node, "opacity", value)?;
                opacity = u8::try_from(v)
                    .ok()
                    .filter(|o| *o <= ColorStop::MAX_OPACITY)
                    .ok_or_else(|| CatalogError::invalid(preset, node, format!("opacity {v} is outside 0..=100")))?;
            }
            "unit" => unit = keyword::<StopUnit>(preset, node, "unit", value)?,
            other => {
                return Err(CatalogError::invalid(preset, node, format!("unknown stop property {other:?}")));
            }
        }
    }

    let color = color.ok_or_else(|| CatalogError::invalid(preset, node, "Stop is missing color"))?;
    let position = position.ok_or_else(|| CatalogError::invalid(preset, node, "Stop is missing at"))?;
    Ok(ColorStop::new(color, position).with_opacity(opacity).with_unit(unit))
}

// ── Value helpers ─────────────────────────────────────────────────────────

fn number(preset: &str, node: &Node, key: &str, value: &Value) -> Result<f32, CatalogError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(CatalogError::invalid(preset, node, format!("{key} must be a number, got {}", other.type_name()))),
    }
}

fn integer(preset: &str, node: &Node, key: &str, value: &Value) -> Result<i32, CatalogError> {
    let n = number(preset, node, key, value)?;
    if n.fract() != 0.0 || n < i32::MIN as f32 || n > i32::MAX as f32 {
        return Err(CatalogError::invalid(preset, node, format!("{key} must be a whole number, got {n}")));
    }
    Ok(n as i32)
}

fn text<'v>(preset: &str, node: &Node, key: &str, value: &'v Value) -> Result<&'v str, CatalogError> {
    match value {
        Value::Str(s) | Value::Ident(s) => Ok(s),
        other => Err(CatalogError::invalid(preset, node, format!("{key} must be text, got {}", other.type_name()))),
    }
}

fn keyword<T>(preset: &str, node: &Node, key: &str, value: &Value) -> Result<T, CatalogError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = text(preset, node, key, value)?;
    s.parse::<T>().map_err(|e| CatalogError::invalid(preset, node, format!("{key}: {e}")))
}
