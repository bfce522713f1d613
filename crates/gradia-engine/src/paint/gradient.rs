use std::fmt;
use std::str::FromStr;

// ── Keyword parsing ───────────────────────────────────────────────────────

/// Rejected CSS keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeywordError {
    /// What kind of keyword was expected (`"blend mode"`, `"stop unit"`, …).
    pub expected: &'static str,
    pub input: String,
}

impl fmt::Display for ParseKeywordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} {:?}", self.expected, self.input)
    }
}

impl std::error::Error for ParseKeywordError {}

/// Declares a fieldless enum that maps one-to-one onto CSS keywords.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $kw:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The CSS keyword.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $kw ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $kw => Ok($name::$variant), )+
                    _ => Err(ParseKeywordError { expected: $what, input: s.to_string() }),
                }
            }
        }
    };
}

keyword_enum! {
    /// Unit attached to a color stop position in non-angular gradients.
    StopUnit ("stop unit") {
        Percent => "%",
        Px => "px",
    }
}

impl Default for StopUnit {
    fn default() -> Self {
        StopUnit::Percent
    }
}

keyword_enum! {
    /// `<radial-shape>`.
    RadialShape ("radial shape") {
        Circle => "circle",
        Ellipse => "ellipse",
    }
}

impl Default for RadialShape {
    fn default() -> Self {
        RadialShape::Circle
    }
}

keyword_enum! {
    /// `<radial-extent>` sizing keyword.
    RadialSize ("radial size") {
        ClosestSide => "closest-side",
        ClosestCorner => "closest-corner",
        FarthestSide => "farthest-side",
        FarthestCorner => "farthest-corner",
    }
}

impl Default for RadialSize {
    fn default() -> Self {
        RadialSize::FarthestCorner
    }
}

keyword_enum! {
    /// `<blend-mode>` applied between a layer and everything beneath it.
    BlendMode ("blend mode") {
        Normal => "normal",
        Multiply => "multiply",
        Screen => "screen",
        Overlay => "overlay",
        Darken => "darken",
        Lighten => "lighten",
        ColorDodge => "color-dodge",
        ColorBurn => "color-burn",
        HardLight => "hard-light",
        SoftLight => "soft-light",
        Difference => "difference",
        Exclusion => "exclusion",
        Hue => "hue",
        Saturation => "saturation",
        Color => "color",
        Luminosity => "luminosity",
    }
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::Normal
    }
}

// ── GradientKind ──────────────────────────────────────────────────────────

/// CSS gradient function of a layer.
///
/// `Other` keeps names the editor does not know about. They are never
/// rejected; the compiler falls back to a plain linear gradient for them.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
    RepeatingLinear,
    RepeatingRadial,
    RepeatingConic,
    Other(String),
}

impl GradientKind {
    /// Every known gradient function, in menu order.
    pub const KNOWN: [GradientKind; 6] = [
        GradientKind::Linear,
        GradientKind::Radial,
        GradientKind::Conic,
        GradientKind::RepeatingLinear,
        GradientKind::RepeatingRadial,
        GradientKind::RepeatingConic,
    ];

    pub fn parse(name: &str) -> Self {
        match name {
            "linear-gradient" => GradientKind::Linear,
            "radial-gradient" => GradientKind::Radial,
            "conic-gradient" => GradientKind::Conic,
            "repeating-linear-gradient" => GradientKind::RepeatingLinear,
            "repeating-radial-gradient" => GradientKind::RepeatingRadial,
            "repeating-conic-gradient" => GradientKind::RepeatingConic,
            other => GradientKind::Other(other.to_string()),
        }
    }

    /// CSS function name.
    pub fn as_str(&self) -> &str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
            GradientKind::Conic => "conic-gradient",
            GradientKind::RepeatingLinear => "repeating-linear-gradient",
            GradientKind::RepeatingRadial => "repeating-radial-gradient",
            GradientKind::RepeatingConic => "repeating-conic-gradient",
            GradientKind::Other(name) => name,
        }
    }

    /// Human-readable label for layer lists.
    pub fn label(&self) -> &str {
        match self {
            GradientKind::Linear => "Linear",
            GradientKind::Radial => "Radial",
            GradientKind::Conic => "Conic",
            GradientKind::RepeatingLinear => "Repeating Linear",
            GradientKind::RepeatingRadial => "Repeating Radial",
            GradientKind::RepeatingConic => "Repeating Conic",
            GradientKind::Other(name) => name,
        }
    }

    /// True for gradients whose stops are placed by angle (conic variants).
    ///
    /// Matches on the function name, so an unknown `*conic*` name counts too.
    pub fn is_angle_based(&self) -> bool {
        self.as_str().contains("conic")
    }

    /// `linear-gradient` and `repeating-linear-gradient`.
    pub fn is_linear(&self) -> bool {
        matches!(self, GradientKind::Linear | GradientKind::RepeatingLinear)
    }

    /// Radial variants, by function name like [`is_angle_based`](Self::is_angle_based).
    pub fn is_radial(&self) -> bool {
        self.as_str().contains("radial")
    }
}

impl Default for GradientKind {
    fn default() -> Self {
        GradientKind::Linear
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for GradientKind {
    fn from(name: &str) -> Self {
        GradientKind::parse(name)
    }
}

// ── ColorStop ─────────────────────────────────────────────────────────────

/// A single gradient color stop.
///
/// `color` is either a hex literal or the keyword `transparent`; it is kept
/// verbatim so the exported CSS shows exactly what the user picked.
/// `opacity` is a percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub color: String,
    pub position: f32,
    pub opacity: u8,
    pub unit: StopUnit,
}

impl ColorStop {
    pub const MAX_OPACITY: u8 = 100;

    /// Fully opaque stop measured in percent.
    pub fn new(color: impl Into<String>, position: f32) -> Self {
        Self { color: color.into(), position, opacity: Self::MAX_OPACITY, unit: StopUnit::Percent }
    }

    /// Sets opacity, clamped to `0..=100`.
    pub fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = opacity.min(Self::MAX_OPACITY);
        self
    }

    pub fn with_unit(mut self, unit: StopUnit) -> Self {
        self.unit = unit;
        self
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.color == "transparent"
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.opacity >= Self::MAX_OPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_round_trip_through_names() {
        for kind in GradientKind::KNOWN {
            assert_eq!(GradientKind::parse(kind.as_str()), kind);
        }
    }

    #[test]
    fn unknown_kind_is_kept_verbatim() {
        let kind = GradientKind::parse("mesh-gradient");
        assert_eq!(kind, GradientKind::Other("mesh-gradient".into()));
        assert_eq!(kind.as_str(), "mesh-gradient");
        assert_eq!(kind.label(), "mesh-gradient");
        assert!(!kind.is_angle_based());
    }

    #[test]
    fn angle_based_follows_conic_in_name() {
        assert!(GradientKind::Conic.is_angle_based());
        assert!(GradientKind::RepeatingConic.is_angle_based());
        assert!(GradientKind::Other("super-conic".into()).is_angle_based());
        assert!(!GradientKind::RepeatingRadial.is_angle_based());
    }

    #[test]
    fn radial_follows_radial_in_name() {
        assert!(GradientKind::RepeatingRadial.is_radial());
        assert!(GradientKind::Other("elliptical-radial".into()).is_radial());
        assert!(!GradientKind::Conic.is_radial());
    }

    #[test]
    fn labels() {
        assert_eq!(GradientKind::RepeatingLinear.label(), "Repeating Linear");
        assert_eq!(GradientKind::Conic.label(), "Conic");
    }

    #[test]
    fn blend_modes_parse_hyphenated_keywords() {
        assert_eq!("color-dodge".parse::<BlendMode>(), Ok(BlendMode::ColorDodge));
        assert_eq!(BlendMode::SoftLight.to_string(), "soft-light");
        assert_eq!(BlendMode::ALL.len(), 16);
    }

    #[test]
    fn bad_keyword_reports_input() {
        let err = "fuzzy".parse::<BlendMode>().unwrap_err();
        assert_eq!(err.input, "fuzzy");
        assert_eq!(err.to_string(), "unknown blend mode \"fuzzy\"");
    }

    #[test]
    fn stop_defaults() {
        let s = ColorStop::new("#ffffff", 50.0);
        assert_eq!(s.opacity, 100);
        assert_eq!(s.unit, StopUnit::Percent);
        assert!(s.is_opaque());
    }

    #[test]
    fn stop_opacity_is_clamped() {
        assert_eq!(ColorStop::new("#000000", 0.0).with_opacity(250).opacity, 100);
    }
}
