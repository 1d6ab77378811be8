//! Filtered traversal over declaration trees.
//!
//! [`FilteredTraversal`] walks a tree in pre-order and tests each node's
//! qualified name against a [`NameFilter`]. Nodes on the path to a match are
//! skipped silently. Once a node matches, the node and its whole subtree are
//! handed to the inner visitor through [`walk_node`], with no further
//! filtering inside that subtree.

use std::ops::ControlFlow;

use declscope_ast::{DeclNode, VisitResult, Visitor, walk_node};
use tracing::{debug, trace};

use crate::{FilterError, NameFilter};

/// Wraps a visitor so that it only sees subtrees rooted at matching names.
pub struct FilteredTraversal<'v, V> {
    inner: &'v mut V,
    filter: NameFilter,
}

impl<'v, V> FilteredTraversal<'v, V> {
    /// Compiles `spec` and wraps `inner`.
    ///
    /// Fails without touching `inner` if `spec` is not a valid expression.
    pub fn new(inner: &'v mut V, spec: &str) -> Result<Self, FilterError> {
        let filter = NameFilter::new(spec)?;
        Ok(Self::with_filter(inner, filter))
    }

    /// Wraps `inner` with an already compiled filter.
    pub fn with_filter(inner: &'v mut V, filter: NameFilter) -> Self {
        Self { inner, filter }
    }

    /// Traverses the tree rooted at `root`.
    ///
    /// Returns `Break` if the inner visitor stopped the walk.
    pub fn traverse<'a>(&mut self, root: &DeclNode<'a>) -> VisitResult
    where
        V: Visitor<'a>,
    {
        let name = root.qualified_name();
        if self.filter.matches(name) {
            debug!(
                kind = %root.kind,
                qualified = name,
                span = %root.span,
                "filter matched, visiting subtree"
            );
            return walk_node(&mut *self.inner, root);
        }

        trace!(kind = %root.kind, qualified = name, "filtered out");
        for child in root.children {
            self.traverse(child)?;
        }
        ControlFlow::Continue(())
    }
}
