//! Gradient compiler: layers in, CSS text out.
//!
//! Pure functions only. The same layers always produce the same strings, and
//! nothing here can fail: unknown gradient kinds fall back to a 90deg linear
//! gradient and malformed hex colors decode as black.

mod css;

pub use css::{
    blend_mode_list, compile, format_color_stop, format_color_stops, generate_background_style,
    generate_gradient_css, generate_single_gradient, CompiledStyle, EMPTY_BACKGROUND,
};
