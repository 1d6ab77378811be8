//! Tool error types.

use declscope_parser::ParseError;
use thiserror::Error;

use crate::FilterError;

/// Errors that can occur while running a frontend action.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The front end could not build a tree.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The filter expression did not compile.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// The action itself reported a failure.
    #[error("Action error: {0}")]
    Action(String),
}

impl ToolError {
    /// Creates an action error.
    pub fn action(message: impl Into<String>) -> Self {
        Self::Action(message.into())
    }

    /// Returns true if the error is fatal for the whole run rather than
    /// for a single translation unit.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Filter(_) | Self::Output(_))
    }
}
