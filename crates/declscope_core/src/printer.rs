//! Line-oriented reporting of declarations of interest.

use std::io::{self, Write};
use std::ops::ControlFlow;

use declscope_ast::{DeclNode, VisitResult, Visitor, dump_tree};

/// Options for the print action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Filter expression applied to qualified names. Empty disables filtering.
    pub filter: String,
    /// Follow each `call expr` line with a dump of the call's subtree.
    pub dump_calls: bool,
}

impl PrintOptions {
    /// Creates options with the given filter expression.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Self::default()
        }
    }
}

/// Visitor that writes one tab-separated line per node of interest.
///
/// Output lines:
///
/// ```text
/// specialization\t<qualified name>
/// partial specialization\t<qualified name>
/// call expr\t<kind label>
/// ```
///
/// The first write error stops the traversal and is kept until
/// [`DeclPrinter::finish`].
pub struct DeclPrinter<W> {
    out: W,
    dump_calls: bool,
    lines: usize,
    error: Option<io::Error>,
}

impl<W: Write> DeclPrinter<W> {
    /// Creates a printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            dump_calls: false,
            lines: 0,
            error: None,
        }
    }

    /// Enables or disables subtree dumps after call lines.
    pub fn dump_calls(mut self, enabled: bool) -> Self {
        self.dump_calls = enabled;
        self
    }

    /// Number of report lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Takes the pending write error, if any, so the printer can be reused.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Flushes the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Flushes the sink and returns it, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn report(&mut self, what: &str, detail: &str) -> VisitResult {
        self.emit(|out| writeln!(out, "{what}\t{detail}"))?;
        self.lines += 1;
        ControlFlow::Continue(())
    }

    /// Writes without counting a report line.
    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) -> VisitResult {
        if self.error.is_some() {
            return ControlFlow::Break(());
        }
        if let Err(e) = write(&mut self.out) {
            self.error = Some(e);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

impl<'a, W: Write> Visitor<'a> for DeclPrinter<W> {
    fn visit_specialization(&mut self, node: &DeclNode<'a>) -> VisitResult {
        self.report("specialization", node.qualified_name())
    }

    fn visit_partial_specialization(&mut self, node: &DeclNode<'a>) -> VisitResult {
        self.report("partial specialization", node.qualified_name())
    }

    fn visit_call_expr(&mut self, node: &DeclNode<'a>) -> VisitResult {
        self.report("call expr", node.call_label().unwrap_or("CallExpr"))?;
        if self.dump_calls {
            let dump = dump_tree(node);
            self.emit(|out| out.write_all(dump.as_bytes()))?;
        }
        ControlFlow::Continue(())
    }
}
