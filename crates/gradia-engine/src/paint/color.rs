use std::fmt;

/// Straight 8-bit sRGB triple decoded from a hex color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Decodes `#rrggbb` or `rrggbb` (case-insensitive).
    ///
    /// Only the 6-digit form is accepted; shorthand (`#fff`) and alpha
    /// (`#rrggbbaa`) forms return `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats as a CSS `rgba()` value with `alpha` in `[0, 1]`.
    pub fn to_css_rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Decodes a hex color, degrading to black for anything malformed.
#[inline]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    Rgb::from_hex(hex).unwrap_or_else(Rgb::black)
}
