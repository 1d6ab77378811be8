//! Visitor trait for traversing declaration trees.
//!
//! Each `visit_*` method is an action for one node kind. Actions do not walk
//! children themselves: the walker descends after the action returns
//! `Continue`, so a visitor only overrides the kinds it reports on.

use std::ops::ControlFlow;

use crate::DeclNode;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue the walk
/// - `ControlFlow::Break(())` - stop the whole traversal
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing declaration trees without modification.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes to their arena allocator.
///
/// # Control Flow
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop. A `Break` propagates out of every
/// enclosing walk, so use the `?` operator when calling walk functions.
pub trait Visitor<'a>: Sized {
    /// Called before the kind-specific action of any node.
    #[inline]
    fn enter_node(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a node and all its children have been walked.
    #[inline]
    fn exit_node(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    // === Declaration contexts ===

    /// Visit the root of a translation unit.
    fn visit_translation_unit(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a namespace definition.
    fn visit_namespace(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a class, struct or union definition.
    fn visit_record(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit an enumeration definition.
    fn visit_enum(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    // === Templates ===

    /// Visit a primary class template.
    fn visit_class_template(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a function template.
    fn visit_function_template(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit an explicit class template specialization.
    fn visit_specialization(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a partial class template specialization.
    fn visit_partial_specialization(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    // === Other declarations ===

    /// Visit a function definition or prototype.
    fn visit_function(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a variable or field declarator.
    fn visit_var(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    // === Expressions ===

    /// Visit a call expression.
    fn visit_call_expr(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }
}
