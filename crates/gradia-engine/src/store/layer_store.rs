use crate::paint::{ColorStop, GradientKind};
use crate::preset::{LayerSpec, Preset};

use super::layer::{Direction, Layer, LayerId, LayerUpdate};

/// Ordered layer collection with identity and selection.
///
/// Index 0 is the topmost layer of the composited background. Lookups that
/// miss are silent no-ops; nothing in here can fail.
///
/// The store itself places no lower bound on the number of layers. Keeping
/// at least one layer around is editor policy (see `gradia-ui`).
#[derive(Debug, Clone, Default)]
pub struct LayerStore {
    layers: Vec<Layer>,
    selected: Option<LayerId>,
    next_id: u32,
}

impl LayerStore {
    /// Default color of a stop added from the editor.
    pub const NEW_STOP_COLOR: &'static str = "#ffffff";
    /// Default position of a stop added from the editor.
    pub const NEW_STOP_POSITION: f32 = 50.0;

    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get_layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id() == id)
    }

    pub fn get_layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id() == id)
    }

    /// Position of `id` in sequence order.
    pub fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id() == id)
    }

    #[inline]
    pub fn selected(&self) -> Option<LayerId> {
        self.selected
    }

    pub fn selected_layer(&self) -> Option<&Layer> {
        self.selected.and_then(|id| self.get_layer(id))
    }

    /// Selects `id` if it exists.
    pub fn select(&mut self, id: LayerId) {
        if self.get_layer(id).is_some() {
            self.selected = Some(id);
        }
    }

    // ── Layer lifecycle ───────────────────────────────────────────────────

    fn allocate_id(&mut self) -> LayerId {
        let id = LayerId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a default layer of `kind` and selects it.
    pub fn add_layer(&mut self, kind: GradientKind) -> &Layer {
        let id = self.allocate_id();
        log::debug!("{id}: added {kind}");
        self.layers.push(Layer::new(id, kind));
        self.selected = Some(id);
        &self.layers[self.layers.len() - 1]
    }

    /// Removes `id`. A removed selection falls back to the first remaining
    /// layer, or to nothing when the store is empty.
    pub fn remove_layer(&mut self, id: LayerId) {
        let before = self.layers.len();
        self.layers.retain(|l| l.id() != id);
        if self.layers.len() == before {
            return;
        }
        log::debug!("{id}: removed");
        if self.selected == Some(id) {
            self.selected = self.layers.first().map(Layer::id);
        }
    }

    /// Merges `update` into `id` in place.
    pub fn update_layer(&mut self, id: LayerId, update: LayerUpdate) {
        if let Some(layer) = self.get_layer_mut(id) {
            log::trace!("{id}: update {update:?}");
            update.apply(layer);
        }
    }

    /// Swaps `id` with its neighbour. No-op at either end of the sequence.
    pub fn move_layer(&mut self, id: LayerId, direction: Direction) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let other = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.layers.len() => index + 1,
            _ => return,
        };
        self.layers.swap(index, other);
        log::debug!("{id}: moved {direction:?} to index {other}");
    }

    /// Clears everything, restarts identity at zero, and appends one layer
    /// per spec. The first loaded layer becomes the selection.
    pub fn load_layers<I>(&mut self, specs: I)
    where
        I: IntoIterator<Item = LayerSpec>,
    {
        self.layers.clear();
        self.selected = None;
        self.next_id = 0;

        for spec in specs {
            let id = self.allocate_id();
            let mut layer = Layer::new(id, spec.kind);
            if let Some(angle) = spec.angle {
                layer.angle = angle;
            }
            if let Some(position) = spec.position {
                layer.position = position;
            }
            if let Some(shape) = spec.radial_shape {
                layer.radial_shape = shape;
            }
            if let Some(size) = spec.radial_size {
                layer.radial_size = size;
            }
            if let Some(mode) = spec.blend_mode {
                layer.blend_mode = mode;
            }
            if !layer.set_stops(spec.stops) {
                log::debug!("{id}: spec has fewer than {} stops, using defaults", Layer::MIN_STOPS);
            }
            self.layers.push(layer);
        }

        self.selected = self.layers.first().map(Layer::id);
        log::debug!("loaded {} layers", self.layers.len());
    }

    pub fn load_preset(&mut self, preset: &Preset) {
        log::debug!("loading preset {:?}", preset.name);
        self.load_layers(preset.layers.iter().cloned());
    }

    // ── Color stops ───────────────────────────────────────────────────────

    /// Appends an opaque percent stop and re-sorts.
    pub fn add_color_stop(&mut self, id: LayerId, color: impl Into<String>, position: f32) {
        if let Some(layer) = self.get_layer_mut(id) {
            layer.stops_mut().push(ColorStop::new(color, position));
            layer.sort_stops();
            log::trace!("{id}: added stop at {position}");
        }
    }

    /// [`add_color_stop`](Self::add_color_stop) with the editor defaults.
    pub fn add_default_color_stop(&mut self, id: LayerId) {
        self.add_color_stop(id, Self::NEW_STOP_COLOR, Self::NEW_STOP_POSITION);
    }

    /// Replaces the stop at `index` and re-sorts.
    ///
    /// `index` addresses the current (sorted) order. Because the edit may move
    /// the stop, the index it ends up at is returned so callers can keep
    /// addressing the same logical stop. `None` when the layer or index does
    /// not exist.
    pub fn update_color_stop(&mut self, id: LayerId, index: usize, stop: ColorStop) -> Option<usize> {
        let layer = self.get_layer_mut(id)?;
        let stops = layer.stops_mut();
        if index >= stops.len() {
            return None;
        }

        // A stable sort orders by (position, previous index).
        let position = stop.position;
        let new_index = stops
            .iter()
            .enumerate()
            .filter(|&(j, s)| {
                j != index && (s.position < position || (s.position == position && j < index))
            })
            .count();

        stops[index] = ColorStop { opacity: stop.opacity.min(ColorStop::MAX_OPACITY), ..stop };
        layer.sort_stops();
        log::trace!("{id}: stop {index} updated, now at {new_index}");
        Some(new_index)
    }

    /// Deletes the stop at `index` unless that would leave fewer than two.
    pub fn remove_color_stop(&mut self, id: LayerId, index: usize) {
        let Some(layer) = self.get_layer_mut(id) else {
            return;
        };
        let stops = layer.stops_mut();
        if stops.len() <= Layer::MIN_STOPS || index >= stops.len() {
            log::trace!("{id}: refusing to remove stop {index}");
            return;
        }
        stops.remove(index);
    }
}
