//! Lexical scope tracking for qualified names.

/// Scope segment used for members of an unnamed namespace.
pub(crate) const ANONYMOUS_NAMESPACE: &str = "(anonymous namespace)";

/// Stack of enclosing namespace and record names.
#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    segments: Vec<String>,
}

impl ScopeStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    /// Joins the current scope and `name` with `::`.
    pub(crate) fn qualify(&self, name: &str) -> String {
        if self.segments.is_empty() {
            return name.to_string();
        }
        let mut qualified = self.segments.join("::");
        qualified.push_str("::");
        qualified.push_str(name);
        qualified
    }

    pub(crate) fn depth(&self) -> usize {
        self.segments.len()
    }
}

/// Collapses runs of whitespace so multi-line spellings print on one line.
pub(crate) fn normalize_spelling(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify_at_global_scope() {
        let scope = ScopeStack::new();
        assert_eq!(scope.qualify("X"), "X");
    }

    #[test]
    fn test_qualify_nested() {
        let mut scope = ScopeStack::new();
        scope.push("outer");
        scope.push(ANONYMOUS_NAMESPACE);
        assert_eq!(scope.qualify("Y<int>"), "outer::(anonymous namespace)::Y<int>");

        scope.pop();
        assert_eq!(scope.depth(), 1);
        assert_eq!(scope.qualify("f"), "outer::f");
    }

    #[test]
    fn test_normalize_spelling() {
        assert_eq!(normalize_spelling("Clock<T,\n      Tick>"), "Clock<T, Tick>");
        assert_eq!(normalize_spelling("  Y<int> "), "Y<int>");
    }
}
