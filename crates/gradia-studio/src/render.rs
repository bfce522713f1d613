//! Plain-text rendering of the view model.

use std::fmt;

use gradia_ui::prelude::*;

/// Terminal form of a [`ViewModel`].
pub struct TextView<'a>(pub &'a ViewModel);

pub fn render_view(view: &ViewModel) -> String {
    TextView(view).to_string()
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(out, "── Layers ({}) ──", view.layers.len())?;
        for item in &view.layers {
            let marker = if item.active { '>' } else { ' ' };
            writeln!(out, "{marker} {:<9} {:<17} {}", item.id.to_string(), item.label, item.preview)?;
        }

        if let Some(form) = &view.form {
            write_form(out, form)?;
        }

        writeln!(out, "── Preview ({}) ──", view.preview.shape)?;
        writeln!(out, "  background: {}", view.preview.background)?;
        if let Some(modes) = &view.preview.blend_modes {
            writeln!(out, "  background-blend-mode: {modes}")?;
        }
        Ok(())
    }
}

fn write_form(out: &mut fmt::Formatter<'_>, form: &LayerForm) -> fmt::Result {
    writeln!(out, "── {} ──", form.id)?;
    writeln!(out, "  type   {}", form.kind)?;
    if form.controls.angle {
        writeln!(out, "  angle  {}deg", form.angle)?;
    }
    if form.controls.position {
        writeln!(out, "  x/y    {:+} {:+}", form.position_x, form.position_y)?;
    }
    if form.controls.radial_shape {
        writeln!(out, "  shape  {}", form.radial_shape)?;
    }
    if form.controls.radial_size {
        writeln!(out, "  size   {}", form.radial_size)?;
    }
    writeln!(out, "  blend  {}", form.blend_mode)?;

    // Conic stops are placed in degrees whatever their stored unit.
    let conic = form.controls.angle && form.controls.position;
    for stop in &form.stops {
        let unit = if conic { "deg" } else { stop.unit.as_str() };
        writeln!(
            out,
            "  [{}] {} {}{unit} {}%",
            stop.index, stop.color, stop.position, stop.opacity
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_blank_editor() {
        let editor = Application::new().blank().clipboard(MemoryClipboard::new()).build().unwrap();
        let text = render_view(&editor.render());
        assert!(text.starts_with("── Layers (1) ──\n> layer-0"));
        assert!(text.contains("  angle  90deg\n"));
        assert!(!text.contains("  shape"));
        assert!(text.contains("  [1] #764ba2 100% 100%\n"));
        assert!(text.ends_with("  background-blend-mode: normal\n"));
    }

    #[test]
    fn radial_form_shows_shape_controls() {
        let mut editor = Application::new().blank().clipboard(MemoryClipboard::new()).build().unwrap();
        editor.dispatch(EditorEvent::SetKind(GradientKind::Radial));
        let text = render_view(&editor.render());
        assert!(text.contains("  shape  circle\n"));
        assert!(text.contains("  x/y    +0 +0\n"));
        assert!(!text.contains("  angle"));
    }

    #[test]
    fn conic_stops_show_degrees() {
        let mut editor = Application::new().blank().clipboard(MemoryClipboard::new()).build().unwrap();
        editor.dispatch(EditorEvent::SetKind(GradientKind::Conic));
        editor.dispatch(EditorEvent::SetStopUnit { index: 1, unit: StopUnit::Px });
        let text = render_view(&editor.render());
        assert!(text.contains("  [0] #667eea 0deg 100%\n"));
        assert!(text.contains("  [1] #764ba2 100deg 100%\n"));
        assert!(!text.contains("px"));
    }
}
