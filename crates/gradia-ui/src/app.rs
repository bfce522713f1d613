use gradia_engine::compile::generate_gradient_css;
use gradia_engine::paint::{ColorStop, GradientKind};
use gradia_engine::preset::PreviewShape;
use gradia_engine::store::{Direction, LayerStore, LayerUpdate};

use crate::catalog::{CatalogError, PresetCatalog, DEFAULT_PRESET};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::event::{EditorEvent, EventResult};
use crate::notify::Notification;
use crate::position::{format_position, parse_position};
use crate::view::{render, ViewModel};

// ── Application ───────────────────────────────────────────────────────────

/// Editor builder.
///
/// ```rust,ignore
/// let mut editor = Application::new()
///     .catalog(std::fs::read_to_string("team.gpml")?)
///     .initial_preset("lava-flow")
///     .build()?;
/// editor.dispatch(EditorEvent::AddLayer);
/// println!("{}", editor.render().css);
/// ```
pub struct Application {
    builtin_presets: bool,
    catalogs:        Vec<String>,
    initial_preset:  Option<String>,
    clipboard:       Option<Box<dyn Clipboard>>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            builtin_presets: true,
            catalogs:        Vec::new(),
            initial_preset:  Some(DEFAULT_PRESET.to_string()),
            clipboard:       None,
        }
    }

    /// Register additional `.gpml` source. Presets with an existing name
    /// replace the earlier definition.
    pub fn catalog(mut self, src: impl Into<String>) -> Self {
        self.catalogs.push(src.into());
        self
    }

    /// Start from an empty catalog instead of the built-in presets.
    pub fn without_builtin_presets(mut self) -> Self {
        self.builtin_presets = false;
        self
    }

    /// Preset loaded at startup. Defaults to `arctic-aurora`.
    pub fn initial_preset(mut self, name: impl Into<String>) -> Self {
        self.initial_preset = Some(name.into());
        self
    }

    /// Start with a single default layer instead of a preset.
    pub fn blank(mut self) -> Self {
        self.initial_preset = None;
        self
    }

    /// Where "copy CSS" writes to. Defaults to the system clipboard.
    pub fn clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    pub fn build(self) -> Result<Editor, CatalogError> {
        let mut catalog = if self.builtin_presets {
            PresetCatalog::builtin()?
        } else {
            PresetCatalog::new()
        };
        for src in &self.catalogs {
            let n = catalog.parse_and_register(src)?;
            log::debug!("registered {n} presets from extra catalog");
        }

        let clipboard = self.clipboard.unwrap_or_else(|| Box::new(SystemClipboard::new()));
        let mut editor = Editor::new(catalog, clipboard);

        let loaded = match self.initial_preset {
            Some(name) => editor.dispatch(EditorEvent::LoadPreset(name)).is_consumed(),
            None => false,
        };
        if !loaded {
            editor.store.add_layer(GradientKind::Linear);
        }
        Ok(editor)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── Editor ────────────────────────────────────────────────────────────────

/// Editor application state: the layer store plus everything around it.
///
/// Drive it with [`dispatch`](Self::dispatch) and call [`render`](Self::render)
/// after every consumed event.
pub struct Editor {
    pub(crate) store:         LayerStore,
    pub(crate) catalog:       PresetCatalog,
    pub(crate) preview_shape: PreviewShape,
    clipboard:                Box<dyn Clipboard>,
    notifications:            Vec<Notification>,
}

impl Editor {
    /// An editor with an empty store. Most callers want [`Application`].
    pub fn new(catalog: PresetCatalog, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            store: LayerStore::new(),
            catalog,
            preview_shape: PreviewShape::default(),
            clipboard,
            notifications: Vec::new(),
        }
    }

    pub fn store(&self) -> &LayerStore {
        &self.store
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn preview_shape(&self) -> PreviewShape {
        self.preview_shape
    }

    /// Pure view of the current state.
    pub fn render(&self) -> ViewModel {
        render(self)
    }

    /// Drain queued notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, event: EditorEvent) -> EventResult {
        log::trace!("dispatch {event:?}");
        match event {
            EditorEvent::AddLayer => {
                self.store.add_layer(GradientKind::Linear);
                EventResult::Consumed
            }
            EditorEvent::SelectLayer(id) => {
                self.store.select(id);
                (self.store.selected() == Some(id)).into()
            }
            EditorEvent::RemoveLayer(id) => {
                // The editor always keeps one layer to edit.
                if self.store.len() <= 1 || self.store.get_layer(id).is_none() {
                    return EventResult::Ignored;
                }
                self.store.remove_layer(id);
                EventResult::Consumed
            }
            EditorEvent::MoveLayer(id, direction) => {
                let Some(index) = self.store.index_of(id) else {
                    return EventResult::Ignored;
                };
                self.store.move_layer(id, direction);
                let moved = match direction {
                    Direction::Up => index > 0,
                    Direction::Down => index + 1 < self.store.len(),
                };
                moved.into()
            }

            EditorEvent::SetKind(kind) => self.update_selected(LayerUpdate::new().kind(kind)),
            EditorEvent::SetAngle(angle) => self.update_selected(LayerUpdate::new().angle(angle)),
            EditorEvent::SetPositionX(x) => self.set_position(|_, y| (x, y)),
            EditorEvent::SetPositionY(y) => self.set_position(|x, _| (x, y)),
            EditorEvent::SetBlendMode(mode) => self.update_selected(LayerUpdate::new().blend_mode(mode)),
            EditorEvent::SetRadialShape(shape) => {
                self.update_selected(LayerUpdate::new().radial_shape(shape))
            }
            EditorEvent::SetRadialSize(size) => self.update_selected(LayerUpdate::new().radial_size(size)),

            EditorEvent::AddColorStop => match self.store.selected() {
                Some(id) => {
                    self.store.add_default_color_stop(id);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            EditorEvent::SetStopColor { index, color } => self.edit_stop(index, |s| s.color = color),
            EditorEvent::SetStopPosition { index, position } => {
                if !position.is_finite() {
                    log::debug!("ignoring non-finite stop position {position}");
                    return EventResult::Ignored;
                }
                self.edit_stop(index, |s| s.position = position)
            }
            EditorEvent::SetStopUnit { index, unit } => self.edit_stop(index, |s| s.unit = unit),
            EditorEvent::SetStopOpacity { index, opacity } => {
                self.edit_stop(index, |s| s.opacity = opacity.min(ColorStop::MAX_OPACITY))
            }
            EditorEvent::RemoveColorStop(index) => {
                let Some(layer) = self.store.selected_layer() else {
                    return EventResult::Ignored;
                };
                let (id, before) = (layer.id(), layer.stops().len());
                self.store.remove_color_stop(id, index);
                let after = self.store.get_layer(id).map_or(before, |l| l.stops().len());
                (after < before).into()
            }

            EditorEvent::SetPreviewShape(shape) => {
                self.preview_shape = shape;
                EventResult::Consumed
            }
            EditorEvent::CopyCss => {
                self.copy_css();
                EventResult::Consumed
            }
            EditorEvent::LoadPreset(name) => self.load_preset(&name),
        }
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    fn update_selected(&mut self, update: LayerUpdate) -> EventResult {
        match self.store.selected() {
            Some(id) => {
                self.store.update_layer(id, update);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Re-derives the position string from the slider offsets, keeping the
    /// axis that is not being edited.
    fn set_position(&mut self, f: impl FnOnce(i32, i32) -> (i32, i32)) -> EventResult {
        let Some(layer) = self.store.selected_layer() else {
            return EventResult::Ignored;
        };
        let (x, y) = parse_position(&layer.position);
        let (x, y) = f(x, y);
        self.update_selected(LayerUpdate::new().position(format_position(x, y)))
    }

    fn edit_stop(&mut self, index: usize, f: impl FnOnce(&mut ColorStop)) -> EventResult {
        let Some(layer) = self.store.selected_layer() else {
            return EventResult::Ignored;
        };
        let Some(mut stop) = layer.stops().get(index).cloned() else {
            return EventResult::Ignored;
        };
        let id = layer.id();
        f(&mut stop);
        self.store.update_color_stop(id, index, stop).is_some().into()
    }

    fn copy_css(&mut self) {
        let css = generate_gradient_css(self.store.layers());
        match self.clipboard.write_text(&css) {
            Ok(()) => {
                log::info!("copied {} bytes of CSS", css.len());
                self.notifications.push(Notification::info("CSS copied to clipboard"));
            }
            Err(e) => {
                log::warn!("copy failed: {e}");
                self.notifications.push(Notification::error(format!("Could not copy CSS: {e}")));
            }
        }
    }

    fn load_preset(&mut self, name: &str) -> EventResult {
        let Some(preset) = self.catalog.get(name) else {
            log::warn!("unknown preset {name:?}");
            return EventResult::Ignored;
        };
        self.store.load_preset(preset);
        self.preview_shape = preset.shape;
        log::info!("loaded preset {name:?}");
        self.notifications.push(Notification::info(format!("Preset \"{name}\" loaded")));
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradia_engine::paint::{BlendMode, StopUnit};
    use gradia_engine::store::LayerId;

    use crate::clipboard::{ClipboardError, MemoryClipboard};
    use crate::notify::NotificationKind;

    fn blank() -> Editor {
        Application::new().blank().clipboard(MemoryClipboard::new()).build().unwrap()
    }

    fn selected_stops(editor: &Editor) -> Vec<(String, f32)> {
        editor
            .store()
            .selected_layer()
            .unwrap()
            .stops()
            .iter()
            .map(|s| (s.color.clone(), s.position))
            .collect()
    }

    // ── startup ───────────────────────────────────────────────────────────

    #[test]
    fn default_startup_loads_arctic_aurora() {
        let mut editor = Application::new().clipboard(MemoryClipboard::new()).build().unwrap();
        assert_eq!(editor.store().len(), 3);
        assert_eq!(editor.store().selected(), Some(editor.store().layers()[0].id()));
        let notes = editor.take_notifications();
        assert_eq!(notes, vec![Notification::info("Preset \"arctic-aurora\" loaded")]);
        assert!(editor.take_notifications().is_empty());
    }

    #[test]
    fn blank_startup_has_one_default_layer() {
        let editor = blank();
        assert_eq!(editor.store().len(), 1);
        assert_eq!(
            editor.render().css,
            "background:\n  linear-gradient(90deg, #667eea, #764ba2);\nbackground-blend-mode: normal;"
        );
    }

    #[test]
    fn unknown_initial_preset_falls_back_to_default_layer() {
        let editor = Application::new()
            .initial_preset("nope")
            .clipboard(MemoryClipboard::new())
            .build()
            .unwrap();
        assert_eq!(editor.store().len(), 1);
    }

    #[test]
    fn extra_catalog_is_registered() {
        let src = r#"Preset "mine" { shape: circle
            Layer "conic-gradient" { Stop { color: #000000 at: 0 } Stop { color: #ffffff at: 360 } } }"#;
        let editor = Application::new()
            .without_builtin_presets()
            .catalog(src)
            .initial_preset("mine")
            .clipboard(MemoryClipboard::new())
            .build()
            .unwrap();
        assert_eq!(editor.catalog().len(), 1);
        assert_eq!(editor.preview_shape(), PreviewShape::Circle);
        assert_eq!(
            editor.render().preview.background,
            "conic-gradient(from 90deg at center, #000000 0deg, #ffffff 360deg)"
        );
    }

    #[test]
    fn bad_extra_catalog_fails_build() {
        let result = Application::new().catalog("Preset {").clipboard(MemoryClipboard::new()).build();
        assert!(result.is_err());
    }

    // ── layers ────────────────────────────────────────────────────────────

    #[test]
    fn last_layer_cannot_be_removed() {
        let mut editor = blank();
        let only = editor.store().layers()[0].id();
        assert_eq!(editor.dispatch(EditorEvent::RemoveLayer(only)), EventResult::Ignored);
        assert_eq!(editor.store().len(), 1);

        editor.dispatch(EditorEvent::AddLayer);
        assert!(editor.dispatch(EditorEvent::RemoveLayer(only)).is_consumed());
        assert_eq!(editor.store().len(), 1);
    }

    #[test]
    fn move_reports_boundaries() {
        let mut editor = blank();
        editor.dispatch(EditorEvent::AddLayer);
        let top = editor.store().layers()[0].id();
        let bottom = editor.store().layers()[1].id();
        assert_eq!(editor.dispatch(EditorEvent::MoveLayer(top, Direction::Up)), EventResult::Ignored);
        assert_eq!(editor.dispatch(EditorEvent::MoveLayer(bottom, Direction::Down)), EventResult::Ignored);
        assert!(editor.dispatch(EditorEvent::MoveLayer(bottom, Direction::Up)).is_consumed());
        assert_eq!(editor.store().layers()[0].id(), bottom);
    }

    #[test]
    fn select_unknown_is_ignored() {
        let mut editor = blank();
        let ghost: LayerId = "layer-9".parse().unwrap();
        assert_eq!(editor.dispatch(EditorEvent::SelectLayer(ghost)), EventResult::Ignored);
        assert_eq!(editor.dispatch(EditorEvent::RemoveLayer(ghost)), EventResult::Ignored);
    }

    #[test]
    fn field_events_edit_selected_layer() {
        let mut editor = blank();
        editor.dispatch(EditorEvent::SetKind(GradientKind::Radial));
        editor.dispatch(EditorEvent::SetBlendMode(BlendMode::Multiply));
        editor.dispatch(EditorEvent::SetAngle(45));
        let layer = editor.store().selected_layer().unwrap();
        assert_eq!(layer.kind, GradientKind::Radial);
        assert_eq!(layer.blend_mode, BlendMode::Multiply);
        assert_eq!(layer.angle, 45);
    }

    #[test]
    fn position_sliders_keep_other_axis() {
        let mut editor = blank();
        editor.dispatch(EditorEvent::SetPositionX(20));
        assert_eq!(editor.store().selected_layer().unwrap().position, "70% 50%");
        editor.dispatch(EditorEvent::SetPositionY(-30));
        assert_eq!(editor.store().selected_layer().unwrap().position, "70% 20%");
    }

    // ── stops ─────────────────────────────────────────────────────────────

    #[test]
    fn stop_events() {
        let mut editor = blank();
        editor.dispatch(EditorEvent::AddColorStop);
        assert_eq!(selected_stops(&editor)[1], ("#ffffff".to_string(), 50.0));

        editor.dispatch(EditorEvent::SetStopColor { index: 1, color: "#ff0000".into() });
        editor.dispatch(EditorEvent::SetStopPosition { index: 1, position: 5.0 });
        assert_eq!(selected_stops(&editor)[1], ("#ff0000".to_string(), 5.0));

        editor.dispatch(EditorEvent::SetStopOpacity { index: 1, opacity: 200 });
        editor.dispatch(EditorEvent::SetStopUnit { index: 1, unit: StopUnit::Px });
        let stop = editor.store().selected_layer().unwrap().stops()[1].clone();
        assert_eq!(stop.opacity, 100);
        assert_eq!(stop.unit, StopUnit::Px);

        assert!(editor.dispatch(EditorEvent::RemoveColorStop(1)).is_consumed());
        assert_eq!(editor.dispatch(EditorEvent::RemoveColorStop(0)), EventResult::Ignored);
        assert_eq!(selected_stops(&editor).len(), 2);
    }

    #[test]
    fn non_finite_stop_position_is_ignored() {
        let mut editor = blank();
        let before = selected_stops(&editor);
        for position in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let result = editor.dispatch(EditorEvent::SetStopPosition { index: 0, position });
            assert_eq!(result, EventResult::Ignored);
        }
        assert_eq!(selected_stops(&editor), before);
        assert!(!editor.render().css.contains("inf"));
    }

    #[test]
    fn stop_event_out_of_range_is_ignored() {
        let mut editor = blank();
        let result = editor.dispatch(EditorEvent::SetStopColor { index: 7, color: "#000000".into() });
        assert_eq!(result, EventResult::Ignored);
    }

    // ── presets / clipboard ───────────────────────────────────────────────

    #[test]
    fn loading_preset_resets_ids_and_shape() {
        let mut editor = blank();
        editor.dispatch(EditorEvent::AddLayer);
        editor.dispatch(EditorEvent::AddLayer);
        assert!(editor.dispatch(EditorEvent::LoadPreset("chip".into())).is_consumed());
        assert_eq!(editor.preview_shape(), PreviewShape::Circle);
        assert_eq!(editor.store().len(), 4);
        editor.dispatch(EditorEvent::AddLayer);
        assert_eq!(editor.store().layers()[4].id().to_string(), "layer-4");
    }

    #[test]
    fn unknown_preset_is_silent_noop() {
        let mut editor = blank();
        let before = editor.render();
        assert_eq!(editor.dispatch(EditorEvent::LoadPreset("nope".into())), EventResult::Ignored);
        assert_eq!(editor.render(), before);
        assert!(editor.take_notifications().is_empty());
    }

    #[test]
    fn copy_writes_exported_css() {
        let clip = MemoryClipboard::new();
        let mut editor = Application::new().blank().clipboard(clip.clone()).build().unwrap();
        editor.dispatch(EditorEvent::SetAngle(45));
        editor.dispatch(EditorEvent::CopyCss);

        assert_eq!(clip.contents(), Some(editor.render().css));
        assert_eq!(editor.take_notifications(), vec![Notification::info("CSS copied to clipboard")]);
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError("no display".into()))
        }
    }

    #[test]
    fn copy_failure_is_reported() {
        let mut editor = Application::new().blank().clipboard(BrokenClipboard).build().unwrap();
        editor.dispatch(EditorEvent::CopyCss);
        let notes = editor.take_notifications();
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert!(notes[0].message.contains("no display"));
    }
}
