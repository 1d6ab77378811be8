//! DeclNode definition.
//!
//! The core tree node type used throughout declscope.

use crate::{NodeKind, Span};

/// A node in the declaration tree.
///
/// `DeclNode` is a read-only view of one declaration or expression. It is
/// `Copy` and borrows its children, names and extra data from an
/// [`AstArena`](crate::AstArena).
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties this node to its arena allocator,
/// ensuring that all child references remain valid.
///
/// # Example
///
/// ```rust
/// use declscope_ast::{AstArena, DeclNode, NodeKind, Span};
///
/// let arena = AstArena::new();
///
/// let spec = DeclNode::new_named(
///     NodeKind::Specialization,
///     Span::new(46, 70),
///     "Y<int>",
///     "Y<int>",
///     &[],
/// );
/// let children = arena.alloc_slice_copy(&[spec]);
/// let unit = DeclNode::new_parent(NodeKind::TranslationUnit, Span::new(0, 70), children);
///
/// assert!(unit.has_children());
/// assert_eq!(unit.children[0].qualified_name(), "Y<int>");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DeclNode<'a> {
    /// The kind of this node.
    pub kind: NodeKind,

    /// Byte span in the source text.
    pub span: Span,

    /// Child nodes in source order.
    pub children: &'a [DeclNode<'a>],

    /// Name as spelled at the declaration (e.g. `Y<int>`).
    pub name: Option<&'a str>,

    /// Fully scoped name (e.g. `ns::Y<int>`).
    pub qualified: Option<&'a str>,

    /// Additional kind-specific data.
    pub data: NodeData<'a>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeData<'a> {
    #[default]
    None,
    Record(TagKind),
    Call(CallData<'a>),
}

/// The tag keyword a record was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Class,
    Struct,
    Union,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallData<'a> {
    pub style: CallStyle,
    /// The callee expression as spelled in the source.
    pub callee: &'a str,
}

/// Syntactic shape of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallStyle {
    /// `f(x)`, `ns::f(x)`, `f<T>(x)`.
    Plain,
    /// `obj.f(x)` or `ptr->f(x)`.
    Member,
}

impl CallStyle {
    /// Returns the kind label used in reports.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            CallStyle::Plain => "CallExpr",
            CallStyle::Member => "CXXMemberCallExpr",
        }
    }
}

impl TagKind {
    /// Returns the source keyword for this tag.
    #[inline]
    pub const fn keyword(&self) -> &'static str {
        match self {
            TagKind::Class => "class",
            TagKind::Struct => "struct",
            TagKind::Union => "union",
        }
    }
}

impl<'a> DeclNode<'a> {
    /// Creates a new unnamed node with children.
    #[inline]
    pub const fn new_parent(kind: NodeKind, span: Span, children: &'a [DeclNode<'a>]) -> Self {
        Self {
            kind,
            span,
            children,
            name: None,
            qualified: None,
            data: NodeData::None,
        }
    }

    /// Creates a new named node with children.
    #[inline]
    pub const fn new_named(
        kind: NodeKind,
        span: Span,
        name: &'a str,
        qualified: &'a str,
        children: &'a [DeclNode<'a>],
    ) -> Self {
        Self {
            kind,
            span,
            children,
            name: Some(name),
            qualified: Some(qualified),
            data: NodeData::None,
        }
    }

    /// Creates a new call expression node.
    #[inline]
    pub const fn new_call(
        span: Span,
        style: CallStyle,
        callee: &'a str,
        children: &'a [DeclNode<'a>],
    ) -> Self {
        Self {
            kind: NodeKind::CallExpr,
            span,
            children,
            name: None,
            qualified: None,
            data: NodeData::Call(CallData { style, callee }),
        }
    }

    /// Returns this node with its extra data replaced.
    #[inline]
    pub fn with_data(mut self, data: NodeData<'a>) -> Self {
        self.data = data;
        self
    }

    /// Returns the fully qualified name, or `""` for unnamed nodes.
    #[inline]
    pub fn qualified_name(&self) -> &'a str {
        self.qualified.unwrap_or("")
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the call data of a call expression.
    #[inline]
    pub fn call(&self) -> Option<&CallData<'a>> {
        match &self.data {
            NodeData::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Returns the report label of a call expression.
    ///
    /// Call nodes built without call data fall back to `CallExpr`.
    pub fn call_label(&self) -> Option<&'static str> {
        if self.kind != NodeKind::CallExpr {
            return None;
        }
        Some(self.call().map_or(CallStyle::Plain.label(), |c| c.style.label()))
    }

    /// Counts this node and all of its descendants.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DeclNode::subtree_len)
            .sum::<usize>()
    }
}
