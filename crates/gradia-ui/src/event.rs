use gradia_engine::paint::{BlendMode, GradientKind, RadialShape, RadialSize, StopUnit};
use gradia_engine::preset::PreviewShape;
use gradia_engine::store::{Direction, LayerId};

/// Every interaction the editor understands.
///
/// Events that edit "the layer" act on the current selection; stop events
/// address stops by their index in the selected layer's sorted stop list.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Append a default linear layer and select it.
    AddLayer,
    SelectLayer(LayerId),
    RemoveLayer(LayerId),
    MoveLayer(LayerId, Direction),

    SetKind(GradientKind),
    SetAngle(i32),
    /// Horizontal offset from center, in percent points.
    SetPositionX(i32),
    /// Vertical offset from center, in percent points.
    SetPositionY(i32),
    SetBlendMode(BlendMode),
    SetRadialShape(RadialShape),
    SetRadialSize(RadialSize),

    /// Add a `#ffffff` stop at 50%.
    AddColorStop,
    SetStopColor { index: usize, color: String },
    SetStopPosition { index: usize, position: f32 },
    SetStopUnit { index: usize, unit: StopUnit },
    SetStopOpacity { index: usize, opacity: u8 },
    RemoveColorStop(usize),

    SetPreviewShape(PreviewShape),
    CopyCss,
    LoadPreset(String),
}

/// Result returned by [`Editor::dispatch`](crate::app::Editor::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event changed state; re-render.
    Consumed,
    /// The event was refused or had nothing to act on.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

impl From<bool> for EventResult {
    fn from(consumed: bool) -> Self {
        if consumed { EventResult::Consumed } else { EventResult::Ignored }
    }
}
