//! # declscope_core
//!
//! Filtered traversal and reporting engine for declscope.
//!
//! This crate provides:
//! - `NameFilter`, a compiled predicate over qualified names
//! - `FilteredTraversal`, which hands matching subtrees to a visitor
//! - `DeclPrinter`, a visitor reporting specializations and calls
//! - `Driver` and the frontend actions run over parsed sources
//!
//! ## Example
//!
//! ```rust
//! use declscope_core::{PrintAction, PrintOptions, run_tool_on_code};
//!
//! let source = "class X {}; template <typename T> class Y {}; template <> class Y<int> {};";
//! let mut action = PrintAction::new(Vec::new(), PrintOptions::default());
//!
//! assert!(run_tool_on_code(&mut action, source));
//! let out = action.into_inner().unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "specialization\tY<int>\n");
//! ```

pub mod driver;
mod error;
pub mod filter;
pub mod printer;
pub mod traversal;

pub use driver::{
    DEFAULT_FILE_NAME, Driver, FrontendAction, PrintAction, SyntaxOnlyAction, TranslationUnit,
    run_tool_on_code,
};
pub use error::ToolError;
pub use filter::{FilterError, NameFilter};
pub use printer::{DeclPrinter, PrintOptions};
pub use traversal::FilteredTraversal;

pub use declscope_parser::ParseError;
