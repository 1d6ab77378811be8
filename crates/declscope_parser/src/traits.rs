//! Parser trait definition.

use declscope_ast::{AstArena, DeclNode};

use crate::ParseError;

/// Trait for front ends that turn source text into a declaration tree.
///
/// # Example
///
/// ```rust,ignore
/// use declscope_parser::Parser;
/// use declscope_ast::AstArena;
///
/// struct MyParser;
///
/// impl Parser for MyParser {
///     fn name(&self) -> &str {
///         "my-parser"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["myext"]
///     }
///
///     fn parse<'a>(
///         &self,
///         arena: &'a AstArena,
///         source: &str,
///     ) -> Result<DeclNode<'a>, ParseError> {
///         todo!()
///     }
/// }
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["cpp", "hpp"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a declaration tree.
    ///
    /// # Returns
    ///
    /// The root `DeclNode` (a translation unit), or an error if the source
    /// could not be parsed.
    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<DeclNode<'a>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
