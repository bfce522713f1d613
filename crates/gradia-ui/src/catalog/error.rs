use std::fmt;

use gradia_gpml::ParseError;

/// Failure to turn `.gpml` source into presets.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The source is not valid `.gpml` syntax.
    Parse(ParseError),
    /// The syntax is fine but a node does not describe a valid preset.
    Invalid {
        /// Name of the preset being built, or empty when the root node has none.
        preset: String,
        message: String,
        line: usize,
        col: usize,
    },
}

impl CatalogError {
    pub(crate) fn invalid(preset: &str, node: &gradia_gpml::Node, message: impl Into<String>) -> Self {
        CatalogError::Invalid {
            preset: preset.to_string(),
            message: message.into(),
            line: node.line,
            col: node.col,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => e.fmt(f),
            CatalogError::Invalid { preset, message, line, col } if preset.is_empty() => {
                write!(f, "invalid preset at {line}:{col}: {message}")
            }
            CatalogError::Invalid { preset, message, line, col } => {
                write!(f, "invalid preset {preset:?} at {line}:{col}: {message}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            CatalogError::Invalid { .. } => None,
        }
    }
}

impl From<ParseError> for CatalogError {
    fn from(e: ParseError) -> Self {
        CatalogError::Parse(e)
    }
}
