// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"70% 80%"`
    Str(String),
    /// Numeric literal: `45`, `-10`, `12.5`
    Number(f32),
    /// Color literal as written, including the `#`: `#00ff88`
    Color(String),
    /// Unquoted identifier: keywords such as `screen` or `farthest-corner`
    Ident(String),
}

impl Value {
    /// Short name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Ident(_) => "identifier",
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A `Kind "label" { ... }` node.
///
/// ```gpml
/// Layer "radial-gradient" {
///     position: "30% 20%"
///     Stop { color: #00d4ff  at: 0  opacity: 60 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node kind: `"Preset"`, `"Layer"`, `"Stop"`.
    pub kind: String,
    /// Optional inline string label.
    pub label: Option<String>,
    pub props: Vec<Prop>,
    pub children: Vec<Node>,
    /// 1-based line of the node's kind identifier.
    pub line: usize,
    /// 1-based column of the node's kind identifier.
    pub col: usize,
}

impl Node {
    /// Look up a property value by key.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f32` if it is a `Number`.
    pub fn prop_f32(&self, key: &str) -> Option<f32> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is a `Str` or `Ident`.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// The top-level parse result: every root node in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
}
