//! Gradia engine crate.
//!
//! Owns the gradient layer model, the layer store, and the compiler that turns
//! an ordered list of layers into CSS background text. Nothing in here touches
//! a terminal, a clipboard, or any other platform surface.

pub mod paint;
pub mod store;
pub mod compile;
pub mod preset;

pub mod logging;
