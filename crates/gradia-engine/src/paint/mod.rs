//! Paint model shared between the store, the compiler, and the UI.
//!
//! Scope:
//! - hex color decoding (`Rgb`)
//! - color stops and the CSS keyword enums a layer is made of
//!
//! Layer identity and ordering live in `store`.

pub mod color;
pub mod gradient;

pub use color::{hex_to_rgb, Rgb};
pub use gradient::{
    BlendMode, ColorStop, GradientKind, ParseKeywordError, RadialShape, RadialSize, StopUnit,
};
