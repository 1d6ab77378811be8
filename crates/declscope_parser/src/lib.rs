//! # declscope_parser
//!
//! Front end layer for declscope.
//!
//! This crate provides:
//! - A `Parser` trait for front ends that build declaration trees
//! - A C++ front end built on `tree-sitter-cpp`
//!
//! ## Architecture
//!
//! Front ends convert source text into `DeclNode` trees allocated in an
//! `AstArena`. The C++ front end is purely syntactic: it recognises
//! declarations, template specializations and calls from the concrete
//! syntax tree and resolves qualified names from lexical scopes only.
//!
//! ## Example
//!
//! ```rust
//! use declscope_ast::{AstArena, NodeKind};
//! use declscope_parser::{CppParser, Parser};
//!
//! let arena = AstArena::new();
//! let parser = CppParser::new();
//! let source = "template <typename T> class Y {}; template <> class Y<int> {};";
//!
//! let unit = parser.parse(&arena, source).unwrap();
//! assert_eq!(unit.kind, NodeKind::TranslationUnit);
//! assert_eq!(unit.children[1].kind, NodeKind::Specialization);
//! ```

mod cpp;
mod error;
mod scope;
mod traits;

pub use cpp::CppParser;
pub use error::ParseError;
pub use traits::Parser;
