//! Driver and frontend actions.
//!
//! The [`Driver`] turns source text into a declaration tree through a
//! [`Parser`] and hands the resulting [`TranslationUnit`] to a
//! [`FrontendAction`]. A run succeeds when the front end built a tree and the
//! action completed without error.

use std::io::{self, Write};
use std::path::Path;

use declscope_ast::{AstArena, DeclNode};
use declscope_parser::{CppParser, Parser};
use tracing::{debug, info, warn};

use crate::{DeclPrinter, FilteredTraversal, NameFilter, PrintOptions, ToolError};

/// File name used when source text has no file of its own.
pub const DEFAULT_FILE_NAME: &str = "input.cc";

/// A parsed translation unit handed to a frontend action.
#[derive(Debug, Clone, Copy)]
pub struct TranslationUnit<'a> {
    /// Name the source was read from.
    pub file_name: &'a str,
    /// The source text.
    pub source: &'a str,
    /// Root of the declaration tree.
    pub root: DeclNode<'a>,
}

/// An action run over each successfully parsed translation unit.
pub trait FrontendAction {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Processes one translation unit.
    fn handle_translation_unit(&mut self, unit: &TranslationUnit<'_>) -> Result<(), ToolError>;
}

/// Builds trees with a front end and runs actions over them.
pub struct Driver {
    parser: Box<dyn Parser>,
}

impl Driver {
    /// Creates a driver using the C++ front end.
    pub fn new() -> Self {
        Self::with_parser(CppParser::new())
    }

    /// Creates a driver using a custom front end.
    pub fn with_parser(parser: impl Parser + 'static) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }

    /// Name of the front end in use.
    pub fn parser_name(&self) -> &str {
        self.parser.name()
    }

    /// Returns true if the front end claims files with this path's extension.
    pub fn supports(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.parser.can_parse(ext))
    }

    /// Parses `source` and runs `action` over the result.
    ///
    /// The action is not invoked when parsing fails.
    pub fn execute(
        &self,
        action: &mut dyn FrontendAction,
        source: &str,
        file_name: &str,
    ) -> Result<(), ToolError> {
        let arena = AstArena::with_capacity(source.len());
        let root = self.parser.parse(&arena, source)?;
        debug!(
            file = file_name,
            parser = self.parser.name(),
            arena_bytes = arena.allocated_bytes(),
            "parsed translation unit"
        );

        let unit = TranslationUnit {
            file_name,
            source,
            root,
        };
        action.handle_translation_unit(&unit)?;
        debug!(file = file_name, action = action.name(), "action completed");
        Ok(())
    }

    /// Like [`Driver::execute`], reporting only whether the run succeeded.
    pub fn run(&self, action: &mut dyn FrontendAction, source: &str, file_name: &str) -> bool {
        match self.execute(action, source, file_name) {
            Ok(()) => true,
            Err(e) => {
                warn!(file = file_name, action = action.name(), "{}", e);
                false
            }
        }
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `action` over `source` with the default C++ front end.
///
/// Returns true if the source parsed and the action succeeded.
pub fn run_tool_on_code(action: &mut dyn FrontendAction, source: &str) -> bool {
    Driver::new().run(action, source, DEFAULT_FILE_NAME)
}

/// Prints specializations and calls under names matching a filter.
pub struct PrintAction<W> {
    printer: DeclPrinter<W>,
    options: PrintOptions,
}

impl<W: Write> PrintAction<W> {
    /// Creates a print action writing to `out`.
    pub fn new(out: W, options: PrintOptions) -> Self {
        let printer = DeclPrinter::new(out).dump_calls(options.dump_calls);
        Self { printer, options }
    }

    /// Number of report lines written across all units.
    pub fn lines_written(&self) -> usize {
        self.printer.lines_written()
    }

    /// Flushes and returns the output sink.
    pub fn into_inner(self) -> io::Result<W> {
        self.printer.finish()
    }
}

impl<W: Write> FrontendAction for PrintAction<W> {
    fn name(&self) -> &str {
        "print"
    }

    fn handle_translation_unit(&mut self, unit: &TranslationUnit<'_>) -> Result<(), ToolError> {
        // Compiled per unit so that a malformed expression fails before any output.
        let filter = NameFilter::new(&self.options.filter)?;
        let before = self.printer.lines_written();

        let stopped = FilteredTraversal::with_filter(&mut self.printer, filter)
            .traverse(&unit.root)
            .is_break();
        if stopped {
            return Err(match self.printer.take_error() {
                Some(e) => ToolError::Output(e),
                None => ToolError::action("traversal stopped early"),
            });
        }
        self.printer.flush()?;

        info!(
            file = unit.file_name,
            lines = self.printer.lines_written() - before,
            "printed declarations"
        );
        Ok(())
    }
}

/// Checks that the source parses, without running any traversal.
#[derive(Debug, Default)]
pub struct SyntaxOnlyAction {
    units: usize,
}

impl SyntaxOnlyAction {
    /// Creates a syntax-only action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of translation units that parsed.
    pub fn units_checked(&self) -> usize {
        self.units
    }
}

impl FrontendAction for SyntaxOnlyAction {
    fn name(&self) -> &str {
        "syntax-only"
    }

    fn handle_translation_unit(&mut self, unit: &TranslationUnit<'_>) -> Result<(), ToolError> {
        self.units += 1;
        debug!(file = unit.file_name, bytes = unit.source.len(), "syntax ok");
        Ok(())
    }
}
