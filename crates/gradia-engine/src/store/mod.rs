//! Layer store.
//!
//! An ordered, identity-keyed collection of gradient layers plus the current
//! selection. Every stop mutation re-sorts the affected layer by position, so
//! readers can rely on ascending stop order at all times.

mod layer;
mod layer_store;

pub use layer::{Direction, Layer, LayerId, LayerUpdate, ParseLayerIdError};
pub use layer_store::LayerStore;
