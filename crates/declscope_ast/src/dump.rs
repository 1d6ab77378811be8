//! Indented structural dump of a subtree.
//!
//! One line per node: `<indent><Kind> <start..end>` followed by the qualified
//! name for named nodes, or the callee for calls. Children are indented by two
//! spaces per level. The format is meant for humans and may change.

use std::fmt::{self, Write};
use std::ops::ControlFlow;

use crate::visitor::{VisitResult, Visitor, walk_node};
use crate::{DeclNode, NodeData};

/// Renders `node` and its descendants into a string.
pub fn dump_tree(node: &DeclNode<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree(&mut out, node);
    out
}

/// Renders `node` and its descendants into `out`.
pub fn write_tree<W: Write>(out: &mut W, node: &DeclNode<'_>) -> fmt::Result {
    let mut dumper = TreeDumper {
        out,
        depth: 0,
        error: None,
    };
    let _ = walk_node(&mut dumper, node);
    match dumper.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct TreeDumper<'w, W> {
    out: &'w mut W,
    depth: usize,
    error: Option<fmt::Error>,
}

impl<W: Write> TreeDumper<'_, W> {
    fn line(&mut self, node: &DeclNode<'_>) -> fmt::Result {
        write!(self.out, "{:indent$}{} {}", "", node.kind, node.span, indent = self.depth * 2)?;
        match node.data {
            NodeData::Call(call) => {
                write!(self.out, " {} '{}'", call.style.label(), call.callee)?
            }
            NodeData::Record(tag) => {
                write!(self.out, " {} '{}'", tag.keyword(), node.qualified_name())?
            }
            NodeData::None if node.qualified.is_some() => {
                write!(self.out, " '{}'", node.qualified_name())?
            }
            NodeData::None => {}
        }
        writeln!(self.out)
    }
}

impl<'a, W: Write> Visitor<'a> for TreeDumper<'_, W> {
    fn enter_node(&mut self, node: &DeclNode<'a>) -> VisitResult {
        if let Err(e) = self.line(node) {
            self.error = Some(e);
            return ControlFlow::Break(());
        }
        self.depth += 1;
        ControlFlow::Continue(())
    }

    fn exit_node(&mut self, _node: &DeclNode<'a>) -> VisitResult {
        self.depth -= 1;
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstArena, CallStyle, NodeKind, Span, TagKind};

    #[test]
    fn dumps_nested_calls_with_indentation() {
        let arena = AstArena::new();
        let inner = DeclNode::new_call(Span::new(4, 10), CallStyle::Plain, "Tick", &[]);
        let args = arena.alloc_slice_copy(&[inner]);
        let outer = DeclNode::new_call(Span::new(2, 11), CallStyle::Plain, "g", args);

        insta::assert_snapshot!(dump_tree(&outer), @r"
        CallExpr <2..11> CallExpr 'g'
          CallExpr <4..10> CallExpr 'Tick'
        ");
    }

    #[test]
    fn dumps_named_and_unnamed_nodes() {
        let arena = AstArena::new();
        let call = DeclNode::new_call(Span::new(30, 40), CallStyle::Member, "obj.run", &[]);
        let body = arena.alloc_slice_copy(&[call]);
        let method =
            DeclNode::new_named(NodeKind::Function, Span::new(20, 44), "go", "ns::S::go", body);
        let members = arena.alloc_slice_copy(&[method]);
        let record = DeclNode::new_named(NodeKind::Record, Span::new(14, 46), "S", "ns::S", members)
            .with_data(NodeData::Record(TagKind::Struct));
        let decls = arena.alloc_slice_copy(&[record]);
        let ns = DeclNode::new_named(NodeKind::Namespace, Span::new(0, 48), "ns", "ns", decls);
        let units = arena.alloc_slice_copy(&[ns]);
        let unit = DeclNode::new_parent(NodeKind::TranslationUnit, Span::new(0, 48), units);

        insta::assert_snapshot!(dump_tree(&unit), @r"
        TranslationUnit <0..48>
          Namespace <0..48> 'ns'
            Record <14..46> struct 'ns::S'
              Function <20..44> 'ns::S::go'
                CallExpr <30..40> CXXMemberCallExpr 'obj.run'
        ");
    }
}
