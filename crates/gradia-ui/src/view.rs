//! Pure projection of [`Editor`] state into what a front-end draws.
//!
//! Nothing here mutates. A front-end calls [`render`] after every consumed
//! event and redraws from the returned [`ViewModel`].

use gradia_engine::compile::{compile, generate_background_style};
use gradia_engine::paint::{BlendMode, GradientKind, RadialShape, RadialSize, StopUnit};
use gradia_engine::preset::PreviewShape;
use gradia_engine::store::{Layer, LayerId};

use crate::app::Editor;
use crate::position::parse_position;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Layer list, top to bottom.
    pub layers: Vec<LayerItem>,
    /// Form for the selected layer, if any.
    pub form: Option<LayerForm>,
    pub preview: PreviewView,
    /// Exported CSS text, as "copy CSS" would write it.
    pub css: String,
}

/// One row of the layer list.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerItem {
    pub id: LayerId,
    pub label: String,
    /// Background value drawing this layer alone.
    pub preview: String,
    pub active: bool,
    pub can_move_up: bool,
    pub can_move_down: bool,
    pub can_delete: bool,
}

/// Which layer controls apply to the current gradient type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub angle: bool,
    pub position: bool,
    pub radial_shape: bool,
    pub radial_size: bool,
}

impl Controls {
    pub fn for_kind(kind: &GradientKind) -> Self {
        if kind.is_angle_based() {
            Controls { angle: true, position: true, ..Controls::default() }
        } else if kind.is_radial() {
            Controls { position: true, radial_shape: true, radial_size: true, ..Controls::default() }
        } else {
            Controls { angle: true, ..Controls::default() }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StopRow {
    pub index: usize,
    pub color: String,
    pub position: f32,
    pub unit: StopUnit,
    pub opacity: u8,
    pub can_remove: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerForm {
    pub id: LayerId,
    pub kind: GradientKind,
    pub angle: i32,
    /// Slider offsets from center, see [`parse_position`].
    pub position_x: i32,
    pub position_y: i32,
    pub blend_mode: BlendMode,
    pub radial_shape: RadialShape,
    pub radial_size: RadialSize,
    pub controls: Controls,
    pub stops: Vec<StopRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub background: String,
    /// `None` when there are no layers.
    pub blend_modes: Option<String>,
    pub shape: PreviewShape,
}

pub fn render(editor: &Editor) -> ViewModel {
    let store = &editor.store;
    let count = store.len();
    let selected = store.selected();

    let layers = store
        .layers()
        .iter()
        .enumerate()
        .map(|(i, layer)| LayerItem {
            id: layer.id(),
            label: layer.kind.label().to_string(),
            preview: generate_background_style(std::slice::from_ref(layer)),
            active: selected == Some(layer.id()),
            can_move_up: i > 0,
            can_move_down: i + 1 < count,
            can_delete: count > 1,
        })
        .collect();

    let compiled = compile(store.layers());

    ViewModel {
        layers,
        form: store.selected_layer().map(layer_form),
        preview: PreviewView {
            background: compiled.background,
            blend_modes: compiled.blend_modes,
            shape: editor.preview_shape,
        },
        css: compiled.css,
    }
}

fn layer_form(layer: &Layer) -> LayerForm {
    let (position_x, position_y) = parse_position(&layer.position);
    let removable = layer.stops().len() > Layer::MIN_STOPS;
    LayerForm {
        id: layer.id(),
        kind: layer.kind.clone(),
        angle: layer.angle,
        position_x,
        position_y,
        blend_mode: layer.blend_mode,
        radial_shape: layer.radial_shape,
        radial_size: layer.radial_size,
        controls: Controls::for_kind(&layer.kind),
        stops: layer
            .stops()
            .iter()
            .enumerate()
            .map(|(index, s)| StopRow {
                index,
                color: s.color.clone(),
                position: s.position,
                unit: s.unit,
                opacity: s.opacity,
                can_remove: removable,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Application;
    use crate::clipboard::MemoryClipboard;
    use crate::event::EditorEvent;

    fn blank() -> Editor {
        Application::new().blank().clipboard(MemoryClipboard::new()).build().unwrap()
    }

    #[test]
    fn controls_by_kind() {
        let conic = Controls::for_kind(&GradientKind::RepeatingConic);
        assert!(conic.angle && conic.position && !conic.radial_shape && !conic.radial_size);

        let linear = Controls::for_kind(&GradientKind::Linear);
        assert_eq!(linear, Controls { angle: true, ..Controls::default() });

        let radial = Controls::for_kind(&GradientKind::Radial);
        assert!(!radial.angle && radial.position && radial.radial_shape && radial.radial_size);

        let other = Controls::for_kind(&GradientKind::parse("mesh-gradient"));
        assert_eq!(other, linear);

        let odd_radial = Controls::for_kind(&GradientKind::parse("fancy-radial-gradient"));
        assert_eq!(odd_radial, radial);
    }

    #[test]
    fn single_layer_list() {
        let view = blank().render();
        assert_eq!(view.layers.len(), 1);
        let item = &view.layers[0];
        assert_eq!(item.label, "Linear");
        assert_eq!(item.preview, "linear-gradient(90deg, #667eea, #764ba2)");
        assert!(item.active);
        assert!(!item.can_move_up && !item.can_move_down && !item.can_delete);
    }

    #[test]
    fn list_flags_follow_order_and_selection() {
        let mut editor = blank();
        editor.dispatch(EditorEvent::AddLayer);
        editor.dispatch(EditorEvent::AddLayer);
        let view = editor.render();
        let flags: Vec<_> = view.layers.iter().map(|l| (l.active, l.can_move_up, l.can_move_down)).collect();
        assert_eq!(flags, vec![(false, false, true), (false, true, true), (true, true, false)]);
        assert!(view.layers.iter().all(|l| l.can_delete));
    }

    #[test]
    fn form_reflects_selected_layer() {
        let mut editor = blank();
        editor.dispatch(EditorEvent::SetKind(GradientKind::Radial));
        editor.dispatch(EditorEvent::SetPositionX(-20));
        editor.dispatch(EditorEvent::AddColorStop);

        let form = editor.render().form.unwrap();
        assert_eq!(form.kind, GradientKind::Radial);
        assert_eq!((form.position_x, form.position_y), (-20, 0));
        assert!(form.controls.radial_size);
        assert_eq!(form.stops.len(), 3);
        assert_eq!(form.stops[1].color, "#ffffff");
        assert!(form.stops.iter().all(|s| s.can_remove));
    }

    #[test]
    fn two_stops_cannot_be_removed() {
        let form = blank().render().form.unwrap();
        assert!(form.stops.iter().all(|s| !s.can_remove));
    }

    #[test]
    fn preview_and_css_agree() {
        let mut editor = blank();
        editor.dispatch(EditorEvent::SetBlendMode(BlendMode::Screen));
        editor.dispatch(EditorEvent::SetPreviewShape(PreviewShape::Circle));
        let view = editor.render();
        assert_eq!(view.preview.background, "linear-gradient(90deg, #667eea, #764ba2)");
        assert_eq!(view.preview.blend_modes.as_deref(), Some("screen"));
        assert_eq!(view.preview.shape, PreviewShape::Circle);
        assert!(view.css.ends_with("background-blend-mode: screen;"));
    }

    #[test]
    fn preset_view() {
        let mut editor = blank();
        editor.dispatch(EditorEvent::LoadPreset("lava-flow".into()));
        let view = editor.render();
        assert_eq!(view.layers.len(), 2);
        assert!(view.layers[0].active);
        assert_eq!(view.form.map(|f| f.id), Some(view.layers[0].id));
    }
}
