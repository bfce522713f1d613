use crate::paint::{hex_to_rgb, ColorStop, GradientKind};
use crate::store::Layer;

/// Output for an empty layer list, both for preview and export.
pub const EMPTY_BACKGROUND: &str = "background: white;";

/// Both render-cycle outputs for one layer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledStyle {
    /// Value for the preview surface's `background`.
    pub background: String,
    /// Value for the preview surface's `background-blend-mode`; `None` when
    /// there are no layers.
    pub blend_modes: Option<String>,
    /// Exported declaration text.
    pub css: String,
}

pub fn compile(layers: &[Layer]) -> CompiledStyle {
    CompiledStyle {
        background: generate_background_style(layers),
        blend_modes: (!layers.is_empty()).then(|| blend_mode_list(layers)),
        css: generate_gradient_css(layers),
    }
}

// ── Stops ─────────────────────────────────────────────────────────────────

/// Formats one stop for a gradient of `kind`.
///
/// - conic kinds place stops in `deg`, ignore the stop's unit, and emit the
///   color as written (no alpha folding)
/// - linear kinds drop the position entirely at exactly 0 and 100
/// - other kinds write a bare `0` for position 0
/// - `transparent` is emitted as the keyword; translucent hex colors become
///   `rgba()`
pub fn format_color_stop(stop: &ColorStop, kind: &GradientKind) -> String {
    let angle_based = kind.is_angle_based();
    let unit = if angle_based { "deg" } else { stop.unit.as_str() };

    let position = if kind.is_linear() && (stop.position == 0.0 || stop.position == 100.0) {
        None
    } else if stop.position == 0.0 && !angle_based {
        Some("0".to_string())
    } else {
        Some(format!("{}{}", stop.position, unit))
    };

    let color = if stop.is_transparent() {
        "transparent".to_string()
    } else if !stop.is_opaque() && !angle_based {
        hex_to_rgb(&stop.color).to_css_rgba(f32::from(stop.opacity) / 100.0)
    } else {
        stop.color.clone()
    };

    match position {
        Some(position) => format!("{color} {position}"),
        None => color,
    }
}

/// Comma-joined stop list.
pub fn format_color_stops(stops: &[ColorStop], kind: &GradientKind) -> String {
    stops
        .iter()
        .map(|stop| format_color_stop(stop, kind))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Layers ────────────────────────────────────────────────────────────────

/// Serializes one layer as a CSS gradient function call.
pub fn generate_single_gradient(layer: &Layer) -> String {
    let stops = format_color_stops(layer.stops(), &layer.kind);
    let name = layer.kind.as_str();

    match layer.kind {
        GradientKind::Linear | GradientKind::RepeatingLinear => {
            format!("{name}({}deg, {stops})", layer.angle)
        }
        GradientKind::Radial | GradientKind::RepeatingRadial => format!(
            "{name}({} {} at {}, {stops})",
            layer.radial_shape, layer.radial_size, layer.position
        ),
        GradientKind::Conic | GradientKind::RepeatingConic => {
            format!("{name}(from {}deg at {}, {stops})", layer.angle, layer.position)
        }
        GradientKind::Other(_) => format!("linear-gradient(90deg, {stops})"),
    }
}

/// Background value for the live preview: gradients joined by `", "`.
pub fn generate_background_style(layers: &[Layer]) -> String {
    if layers.is_empty() {
        return EMPTY_BACKGROUND.to_string();
    }
    layers.iter().map(generate_single_gradient).collect::<Vec<_>>().join(", ")
}

/// Blend modes in layer order, joined by `", "`.
pub fn blend_mode_list(layers: &[Layer]) -> String {
    layers.iter().map(|l| l.blend_mode.as_str()).collect::<Vec<_>>().join(", ")
}

/// Exported declaration text:
///
/// ```text
/// background:
///   <gradient>,
///   <gradient>;
/// background-blend-mode: <mode>, <mode>;
/// ```
pub fn generate_gradient_css(layers: &[Layer]) -> String {
    if layers.is_empty() {
        return EMPTY_BACKGROUND.to_string();
    }
    let gradients = layers.iter().map(generate_single_gradient).collect::<Vec<_>>();
    format!(
        "background:\n  {};\nbackground-blend-mode: {};",
        gradients.join(",\n  "),
        blend_mode_list(layers)
    )
}
