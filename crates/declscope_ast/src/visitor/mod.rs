//! Visitor pattern for declaration tree traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - Per-kind callbacks, all defaulting to "continue"
//! - [`walk_node`] - Unfiltered pre-order walk of a node and its subtree
//! - [`walk_children`] - Walk every child of a node
//! - [`dispatch_node`] - Fire the kind-specific callback for one node
//!
//! # Example
//!
//! ```rust
//! use declscope_ast::{AstArena, CallStyle, DeclNode, NodeKind, Span};
//! use declscope_ast::visitor::{Visitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! struct CallCounter {
//!     calls: usize,
//! }
//!
//! impl<'a> Visitor<'a> for CallCounter {
//!     fn visit_call_expr(&mut self, _node: &DeclNode<'a>) -> VisitResult {
//!         self.calls += 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let call = DeclNode::new_call(Span::new(14, 18), CallStyle::Plain, "f", &[]);
//! let body = arena.alloc_slice_copy(&[call]);
//! let main = DeclNode::new_named(NodeKind::Function, Span::new(0, 22), "main", "main", body);
//!
//! let mut counter = CallCounter { calls: 0 };
//! walk_node(&mut counter, &main);
//! assert_eq!(counter.calls, 1);
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{dispatch_node, walk_children, walk_node};
