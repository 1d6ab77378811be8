//! # declscope_ast
//!
//! Declaration tree definitions for declscope.
//!
//! This crate provides the tree types that front ends produce and that the
//! filtering traversal walks. The tree is a read-only view of a translation
//! unit: declarations, template specializations and call expressions, each
//! optionally carrying a qualified name.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation
//! - All nodes for a single translation unit are allocated in one arena
//! - Nodes are `Copy` and borrow their children and names from the arena
//! - Memory is freed all at once when the arena is dropped
//!
//! ## Example
//!
//! ```rust
//! use declscope_ast::{AstArena, DeclNode, NodeKind, Span};
//!
//! let arena = AstArena::new();
//!
//! let record = DeclNode::new_named(NodeKind::Record, Span::new(0, 11), "X", "X", &[]);
//! let children = arena.alloc_slice_copy(&[record]);
//! let unit = DeclNode::new_parent(NodeKind::TranslationUnit, Span::new(0, 11), children);
//!
//! assert_eq!(unit.qualified_name(), "");
//! assert_eq!(unit.children[0].qualified_name(), "X");
//! ```

mod arena;
pub mod dump;
mod node;
mod node_kind;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use dump::dump_tree;
pub use node::{CallData, CallStyle, DeclNode, NodeData, TagKind};
pub use node_kind::NodeKind;
pub use span::Span;

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor, dispatch_node, walk_children, walk_node};
