//! Lexer, parser, AST and writer for **bezel style documents** (`.bstyle`).
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! editors and converters without pulling in the geometry engine.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Node`, `Item`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//! | [`writer`] | `Display` impls producing canonical text |
//!
//! # Quick start
//!
//! ```rust
//! use bezel_doc::parse_str;
//!
//! let src = r#"
//!     AppearanceBorder {
//!         BorderVisibility: "Left, Top"
//!         CornerShape { TopLeft: Round  Radius: 10 }
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.root.name, "AppearanceBorder");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod writer;

pub use ast::{Document, Item, Node, Prop, Value};
pub use error::ParseError;
pub use parser::parse_str;
