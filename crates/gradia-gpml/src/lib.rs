//! Lexer, parser, and AST for the **Gradient Preset Markup Language** (`.gpml`).
//!
//! A `.gpml` file is a flat list of nodes. The catalog loader in `gradia-ui`
//! gives meaning to `Preset`, `Layer`, and `Stop`; this crate only knows the
//! node syntax, so linters and editors can use it without the engine.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Node`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token`, `TokenWithPos` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use gradia_gpml::parse_str;
//!
//! let src = r#"
//!     Preset "sunrise" {
//!         shape: rectangle
//!         Layer "linear-gradient" {
//!             angle: 180
//!             Stop { color: #ff7e5f  at: 0 }
//!             Stop { color: #feb47b  at: 100 }
//!         }
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.nodes[0].label.as_deref(), Some("sunrise"));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Document, Node, Prop, Value};
pub use error::ParseError;
pub use parser::parse_str;
