//! Node kind definitions for the declaration tree.

/// Kinds of nodes in the declaration tree.
///
/// The set is small and closed: a front end maps everything it does not
/// model onto the nearest enclosing kind, so visitors dispatch on a plain
/// `match` rather than on concrete node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NodeKind {
    /// Root of a translation unit.
    TranslationUnit,
    /// Namespace definition.
    Namespace,
    /// Class, struct or union definition.
    Record,
    /// Enumeration definition.
    Enum,
    /// Primary class template (wraps its `Record`).
    ClassTemplate,
    /// Function template (wraps its `Function`).
    FunctionTemplate,
    /// Explicit (full) class template specialization or instantiation.
    Specialization,
    /// Partial class template specialization.
    PartialSpecialization,
    /// Function definition or prototype.
    Function,
    /// Variable, field or other declarator.
    Var,
    /// Call expression.
    CallExpr,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::TranslationUnit => "TranslationUnit",
            NodeKind::Namespace => "Namespace",
            NodeKind::Record => "Record",
            NodeKind::Enum => "Enum",
            NodeKind::ClassTemplate => "ClassTemplate",
            NodeKind::FunctionTemplate => "FunctionTemplate",
            NodeKind::Specialization => "Specialization",
            NodeKind::PartialSpecialization => "PartialSpecialization",
            NodeKind::Function => "Function",
            NodeKind::Var => "Var",
            NodeKind::CallExpr => "CallExpr",
        };
        write!(f, "{}", name)
    }
}
