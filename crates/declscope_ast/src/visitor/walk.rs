//! Walk functions for tree traversal.
//!
//! These functions drive a [`Visitor`] over a subtree in pre-order without
//! any filtering. Filtered walks are built on top of them.

use std::ops::ControlFlow;

use crate::{DeclNode, NodeKind};

use super::visit::{VisitResult, Visitor};

/// Walks a node and its whole subtree.
///
/// This function:
/// 1. Calls `enter_node` on the visitor
/// 2. Fires the kind-specific action via [`dispatch_node`]
/// 3. Walks the children if the action returned `Continue`
/// 4. Calls `exit_node` on the visitor
///
/// # Returns
///
/// `ControlFlow::Continue(())` to continue traversal, or `ControlFlow::Break(())` to stop.
pub fn walk_node<'a, V>(visitor: &mut V, node: &DeclNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.enter_node(node)?;
    dispatch_node(visitor, node)?;
    walk_children(visitor, node)?;
    visitor.exit_node(node)
}

/// Fires the kind-specific action for a single node.
///
/// Does not touch the node's children or the enter/exit hooks.
pub fn dispatch_node<'a, V>(visitor: &mut V, node: &DeclNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    match node.kind {
        NodeKind::TranslationUnit => visitor.visit_translation_unit(node),
        NodeKind::Namespace => visitor.visit_namespace(node),
        NodeKind::Record => visitor.visit_record(node),
        NodeKind::Enum => visitor.visit_enum(node),
        NodeKind::ClassTemplate => visitor.visit_class_template(node),
        NodeKind::FunctionTemplate => visitor.visit_function_template(node),
        NodeKind::Specialization => visitor.visit_specialization(node),
        NodeKind::PartialSpecialization => visitor.visit_partial_specialization(node),
        NodeKind::Function => visitor.visit_function(node),
        NodeKind::Var => visitor.visit_var(node),
        NodeKind::CallExpr => visitor.visit_call_expr(node),
    }
}

/// Walks all children of a node.
///
/// Supports early termination via `ControlFlow::Break`.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: &DeclNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in node.children {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}
