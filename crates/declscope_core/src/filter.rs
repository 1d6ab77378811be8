//! Name filters for declaration traversal.
//!
//! A [`NameFilter`] is compiled once from a textual expression and then
//! tested against qualified names. Matching is an unanchored search, so
//! `Y` matches both `Y` and `ns::Y<int>`.

use regex::Regex;
use thiserror::Error;

/// Errors that can occur while compiling a filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The expression is not a valid regular expression.
    #[error("malformed filter expression: {pattern}: {cause}")]
    MalformedPattern {
        /// The expression as given.
        pattern: String,
        /// Why it failed to compile.
        cause: String,
    },
}

/// A compiled predicate over qualified names.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: String,
    regex: Option<Regex>,
}

impl NameFilter {
    /// Compiles `spec` into a filter.
    ///
    /// An empty `spec` produces a filter that accepts every name, including
    /// the empty name of unnamed nodes.
    pub fn new(spec: &str) -> Result<Self, FilterError> {
        if spec.is_empty() {
            return Ok(Self::match_all());
        }

        let regex = Regex::new(spec).map_err(|e| FilterError::MalformedPattern {
            pattern: spec.to_string(),
            cause: e.to_string(),
        })?;

        Ok(Self {
            pattern: spec.to_string(),
            regex: Some(regex),
        })
    }

    /// A filter that accepts every name.
    pub fn match_all() -> Self {
        Self {
            pattern: String::new(),
            regex: None,
        }
    }

    /// Returns true if `name` passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(name),
            None => true,
        }
    }

    /// Returns the expression this filter was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if this filter accepts everything.
    pub fn is_match_all(&self) -> bool {
        self.regex.is_none()
    }
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::match_all()
    }
}
