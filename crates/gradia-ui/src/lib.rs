//! Gradia UI: editor state, event dispatch, and a pure view model on top of
//! `gradia-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use gradia_ui::prelude::*;
//!
//! let mut editor = Application::new().build()?;
//!
//! // In your input handler:
//! if editor.dispatch(EditorEvent::SetAngle(135)).is_consumed() {
//!     let view = editor.render();
//!     // Redraw the layer list, the form, and the preview from `view`.
//! }
//! for note in editor.take_notifications() {
//!     println!("{note}");
//! }
//! ```
//!
//! # Presets
//!
//! Presets are authored in `.gpml`. The built-in catalog ships with the crate;
//! add your own with [`Application::catalog`]. See [`catalog`] for the format.

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod event;
pub mod notify;
pub mod position;
pub mod view;

pub use app::{Application, Editor};

/// Everything a front-end needs.
pub mod prelude {
    pub use crate::app::{Application, Editor};
    pub use crate::catalog::{CatalogError, PresetCatalog, DEFAULT_PRESET};
    pub use crate::clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
    pub use crate::event::{EditorEvent, EventResult};
    pub use crate::notify::{Notification, NotificationKind};
    pub use crate::view::{Controls, LayerForm, LayerItem, PreviewView, StopRow, ViewModel};

    // Engine types that appear in events and views.
    pub use gradia_engine::paint::{BlendMode, ColorStop, GradientKind, RadialShape, RadialSize, StopUnit};
    pub use gradia_engine::preset::PreviewShape;
    pub use gradia_engine::store::{Direction, LayerId};
}
