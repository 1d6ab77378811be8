//! C++ front end using tree-sitter-cpp.
//!
//! The concrete syntax tree is lowered into a declaration tree. Only
//! declarations, template specializations and calls survive lowering; every
//! other construct is transparent and contributes its lowered children to the
//! enclosing node. No semantic analysis takes place: names are qualified from
//! lexical scopes, and a specialization is recognised from its spelling.

use declscope_ast::{AstArena, CallStyle, DeclNode, NodeData, NodeKind, Span, TagKind};
use tracing::debug;
use tree_sitter::Node;

use crate::scope::{ANONYMOUS_NAMESPACE, ScopeStack, normalize_spelling};
use crate::{ParseError, Parser};

/// C++ parser implementation.
pub struct CppParser;

impl CppParser {
    /// Creates a new C++ parser.
    pub fn new() -> Self {
        Self
    }

    fn language() -> tree_sitter::Language {
        tree_sitter_cpp::LANGUAGE.into()
    }
}

impl Default for CppParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for CppParser {
    fn name(&self) -> &str {
        "cpp"
    }

    fn extensions(&self) -> &[&str] {
        &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h", "ipp", "tpp"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<DeclNode<'a>, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&Self::language())
            .map_err(|e| ParseError::unavailable(format!("Failed to load C++ grammar: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::internal("tree-sitter returned no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(syntax_error(root, source));
        }

        let mut lowering = Lowering::new(arena, source);
        let unit = lowering.lower_unit(root);
        debug_assert_eq!(lowering.scope.depth(), 0);
        debug!(
            nodes = unit.subtree_len(),
            bytes = source.len(),
            "lowered translation unit"
        );
        Ok(unit)
    }
}

/// Builds a parse error pointing at the first error or missing node.
fn syntax_error(root: Node<'_>, source: &str) -> ParseError {
    let Some(node) = first_error(root) else {
        return ParseError::invalid_source("syntax error");
    };
    let pos = node.start_position();
    let message = if node.is_missing() {
        format!(
            "missing `{}` at line {}, column {}",
            node.kind(),
            pos.row + 1,
            pos.column + 1
        )
    } else {
        let snippet: String = source
            .get(node.byte_range())
            .unwrap_or("")
            .chars()
            .take(40)
            .collect();
        format!(
            "unexpected `{}` at line {}, column {}",
            normalize_spelling(&snippet),
            pos.row + 1,
            pos.column + 1
        )
    };
    ParseError::invalid_source_at(message, node.start_byte())
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn span_of(node: Node<'_>) -> Span {
    Span::new(node.start_byte() as u32, node.end_byte() as u32)
}

fn is_record_specifier(kind: &str) -> bool {
    matches!(kind, "class_specifier" | "struct_specifier" | "union_specifier")
}

fn tag_kind(kind: &str) -> TagKind {
    match kind {
        "struct_specifier" => TagKind::Struct,
        "union_specifier" => TagKind::Union,
        _ => TagKind::Class,
    }
}

/// True for `Y<int>` and `ns::Y<int>` style record names.
fn has_template_args(name: Node<'_>) -> bool {
    match name.kind() {
        "template_type" => true,
        "qualified_identifier" => name.child_by_field_name("name").is_some_and(has_template_args),
        _ => false,
    }
}

/// Finds the name inside a (possibly nested) declarator.
fn declarator_name(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "identifier" | "field_identifier" | "qualified_identifier" | "operator_name"
        | "destructor_name" | "template_function" | "type_identifier" | "operator_cast" => {
            Some(node)
        }
        _ => node
            .child_by_field_name("declarator")
            .or_else(|| named_children(node).pop())
            .and_then(declarator_name),
    }
}

/// True if the declarator declares a function (after pointer/reference wrappers).
fn is_function_declarator(node: Node<'_>) -> bool {
    match node.kind() {
        "function_declarator" => true,
        "pointer_declarator" | "reference_declarator" | "attributed_declarator" => node
            .child_by_field_name("declarator")
            .or_else(|| named_children(node).pop())
            .is_some_and(is_function_declarator),
        _ => false,
    }
}

/// True if a `declaration` inside a template declares a function.
fn declares_function(declaration: Node<'_>) -> bool {
    declaration
        .child_by_field_name("declarator")
        .is_some_and(is_function_declarator)
}

struct Lowering<'a, 's> {
    arena: &'a AstArena,
    source: &'s str,
    scope: ScopeStack,
}

impl<'a, 's> Lowering<'a, 's> {
    fn new(arena: &'a AstArena, source: &'s str) -> Self {
        Self {
            arena,
            source,
            scope: ScopeStack::new(),
        }
    }

    fn text(&self, node: Node<'_>) -> String {
        normalize_spelling(self.source.get(node.byte_range()).unwrap_or(""))
    }

    fn alloc(&self, nodes: Vec<DeclNode<'a>>) -> &'a [DeclNode<'a>] {
        if nodes.is_empty() {
            return &[];
        }
        self.arena.alloc_slice_fill_iter(nodes)
    }

    /// Creates a named node, qualifying `name` against the current scope.
    fn named(
        &self,
        kind: NodeKind,
        span: Span,
        name: &str,
        children: &'a [DeclNode<'a>],
    ) -> DeclNode<'a> {
        let qualified = self.scope.qualify(name);
        DeclNode::new_named(
            kind,
            span,
            self.arena.alloc_str(name),
            self.arena.alloc_str(&qualified),
            children,
        )
    }

    fn lower_unit(&mut self, root: Node<'_>) -> DeclNode<'a> {
        let children = self.lower_children(root);
        DeclNode::new_parent(NodeKind::TranslationUnit, span_of(root), children)
    }

    fn lower_children(&mut self, node: Node<'_>) -> &'a [DeclNode<'a>] {
        let mut out = Vec::new();
        self.lower_named_children_into(node, &mut out);
        self.alloc(out)
    }

    fn lower_named_children_into(&mut self, node: Node<'_>, out: &mut Vec<DeclNode<'a>>) {
        for child in named_children(node) {
            self.lower_into(child, out);
        }
    }

    fn lower_into(&mut self, node: Node<'_>, out: &mut Vec<DeclNode<'a>>) {
        match node.kind() {
            "namespace_definition" => out.push(self.lower_namespace(node)),
            kind if is_record_specifier(kind) => {
                // Without a body this is a forward declaration or an elaborated type.
                if node.child_by_field_name("body").is_some() {
                    let name = node.child_by_field_name("name").map(|n| self.text(n));
                    out.push(self.lower_record(node, NodeKind::Record, name.as_deref()));
                }
            }
            "enum_specifier" => self.lower_enum(node, out),
            "template_declaration" => self.lower_template(node, out),
            "template_instantiation" => self.lower_instantiation(node, out),
            "function_definition" => out.push(self.lower_function(node)),
            "declaration" | "field_declaration" => self.lower_declaration(node, out),
            "call_expression" => out.push(self.lower_call(node)),
            "comment" => {}
            _ => self.lower_named_children_into(node, out),
        }
    }

    fn lower_namespace(&mut self, node: Node<'_>) -> DeclNode<'a> {
        let name = node.child_by_field_name("name").map(|n| self.text(n));
        let span = span_of(node);

        let segment = name.clone().unwrap_or_else(|| ANONYMOUS_NAMESPACE.to_string());
        let decl_name = name.map(|name| (name, self.scope.qualify(&segment)));

        self.scope.push(segment);
        let children = match node.child_by_field_name("body") {
            Some(body) => self.lower_children(body),
            None => &[],
        };
        self.scope.pop();

        match decl_name {
            Some((name, qualified)) => DeclNode::new_named(
                NodeKind::Namespace,
                span,
                self.arena.alloc_str(&name),
                self.arena.alloc_str(&qualified),
                children,
            ),
            None => DeclNode::new_parent(NodeKind::Namespace, span, children),
        }
    }

    /// Lowers a record specifier; its members are qualified by the record's name.
    fn lower_record(&mut self, node: Node<'_>, kind: NodeKind, name: Option<&str>) -> DeclNode<'a> {
        let span = span_of(node);
        let data = NodeData::Record(tag_kind(node.kind()));
        let body = node.child_by_field_name("body");

        let decl = match name {
            Some(name) => {
                self.scope.push(name);
                let children = match body {
                    Some(body) => self.lower_children(body),
                    None => &[],
                };
                self.scope.pop();
                self.named(kind, span, name, children)
            }
            None => {
                let children = match body {
                    Some(body) => self.lower_children(body),
                    None => &[],
                };
                DeclNode::new_parent(kind, span, children)
            }
        };
        decl.with_data(data)
    }

    fn lower_enum(&mut self, node: Node<'_>, out: &mut Vec<DeclNode<'a>>) {
        let Some(body) = node.child_by_field_name("body") else {
            return;
        };
        let children = self.lower_children(body);
        let span = span_of(node);
        let decl = match node.child_by_field_name("name") {
            Some(name) => self.named(NodeKind::Enum, span, &self.text(name), children),
            None => DeclNode::new_parent(NodeKind::Enum, span, children),
        };
        out.push(decl);
    }

    fn lower_template(&mut self, node: Node<'_>, out: &mut Vec<DeclNode<'a>>) {
        // `template <>` introduces an explicit specialization.
        let explicit = node
            .child_by_field_name("parameters")
            .is_none_or(|params| params.named_child_count() == 0);

        for inner in named_children(node) {
            match inner.kind() {
                "template_parameter_list" | "requires_clause" | "comment" => {}
                kind if is_record_specifier(kind) => {
                    out.push(self.lower_templated_record(node, inner, explicit));
                }
                "function_definition" => {
                    out.push(self.lower_templated_function(node, inner, explicit));
                }
                "declaration" if declares_function(inner) => {
                    let mut decls = Vec::new();
                    self.lower_declaration(inner, &mut decls);
                    for decl in decls {
                        out.push(self.wrap_function_template(node, decl, explicit));
                    }
                }
                _ => self.lower_into(inner, out),
            }
        }
    }

    fn lower_templated_record(
        &mut self,
        template: Node<'_>,
        record: Node<'_>,
        explicit: bool,
    ) -> DeclNode<'a> {
        let name_node = record.child_by_field_name("name");
        let name = name_node.map(|n| self.text(n));
        let span = span_of(template);

        if name_node.is_some_and(has_template_args) {
            let kind = if explicit {
                NodeKind::Specialization
            } else {
                NodeKind::PartialSpecialization
            };
            let mut decl = self.lower_record(record, kind, name.as_deref());
            decl.span = span;
            return decl;
        }

        let children = if record.child_by_field_name("body").is_some() {
            let inner = self.lower_record(record, NodeKind::Record, name.as_deref());
            self.alloc(vec![inner])
        } else {
            &[]
        };
        match name {
            Some(name) => self.named(NodeKind::ClassTemplate, span, &name, children),
            None => DeclNode::new_parent(NodeKind::ClassTemplate, span, children),
        }
    }

    fn lower_templated_function(
        &mut self,
        template: Node<'_>,
        function: Node<'_>,
        explicit: bool,
    ) -> DeclNode<'a> {
        let decl = self.lower_function(function);
        self.wrap_function_template(template, decl, explicit)
    }

    /// Wraps a lowered function in a `FunctionTemplate` node.
    ///
    /// Explicit function specializations stay plain functions.
    fn wrap_function_template(
        &self,
        template: Node<'_>,
        function: DeclNode<'a>,
        explicit: bool,
    ) -> DeclNode<'a> {
        if explicit {
            return function;
        }
        let children = self.arena.alloc_slice_copy(&[function]);
        let mut decl =
            DeclNode::new_parent(NodeKind::FunctionTemplate, span_of(template), children);
        decl.name = function.name;
        decl.qualified = function.qualified;
        decl
    }

    /// `template class Y<int>;` is reported like an explicit specialization.
    fn lower_instantiation(&mut self, node: Node<'_>, out: &mut Vec<DeclNode<'a>>) {
        for inner in named_children(node) {
            if !is_record_specifier(inner.kind()) {
                continue;
            }
            let name = inner
                .child_by_field_name("name")
                .filter(|n| has_template_args(*n));
            if let Some(name) = name {
                let name = self.text(name);
                out.push(
                    self.named(NodeKind::Specialization, span_of(node), &name, &[])
                        .with_data(NodeData::Record(tag_kind(inner.kind()))),
                );
            }
        }
    }

    fn lower_function(&mut self, node: Node<'_>) -> DeclNode<'a> {
        let span = span_of(node);
        let name = node
            .child_by_field_name("declarator")
            .and_then(declarator_name)
            .map(|n| self.text(n));

        let mut children = Vec::new();
        for child in named_children(node) {
            // Constructor initializers and the body may contain calls.
            if matches!(
                child.kind(),
                "field_initializer_list" | "compound_statement" | "try_statement"
            ) {
                self.lower_into(child, &mut children);
            }
        }
        let children = self.alloc(children);

        match name {
            Some(name) => self.named(NodeKind::Function, span, &name, children),
            None => DeclNode::new_parent(NodeKind::Function, span, children),
        }
    }

    fn lower_declaration(&mut self, node: Node<'_>, out: &mut Vec<DeclNode<'a>>) {
        // `struct S { ... } s;` defines a record in the type position.
        if let Some(ty) = node.child_by_field_name("type") {
            self.lower_into(ty, out);
        }

        let declarators: Vec<Node<'_>> = {
            let mut cursor = node.walk();
            node.children_by_field_name("declarator", &mut cursor).collect()
        };
        let default_value = node.child_by_field_name("default_value");

        let count = declarators.len();
        for (i, declarator) in declarators.into_iter().enumerate() {
            let default_value = if i + 1 == count { default_value } else { None };
            out.push(self.lower_declarator(declarator, default_value));
        }
        if count == 0 {
            if let Some(value) = default_value {
                self.lower_into(value, out);
            }
        }
    }

    fn lower_declarator(
        &mut self,
        declarator: Node<'_>,
        default_value: Option<Node<'_>>,
    ) -> DeclNode<'a> {
        let span = span_of(declarator);
        let kind = if is_function_declarator(declarator) {
            NodeKind::Function
        } else {
            NodeKind::Var
        };

        let mut children = Vec::new();
        if let Some(value) = declarator.child_by_field_name("value") {
            self.lower_into(value, &mut children);
        }
        if let Some(value) = default_value {
            self.lower_into(value, &mut children);
        }
        let children = self.alloc(children);

        match declarator_name(declarator) {
            Some(name) => self.named(kind, span, &self.text(name), children),
            None => DeclNode::new_parent(kind, span, children),
        }
    }

    fn lower_call(&mut self, node: Node<'_>) -> DeclNode<'a> {
        let function = node.child_by_field_name("function");
        let style = match function.map(|f| f.kind()) {
            Some("field_expression") => CallStyle::Member,
            _ => CallStyle::Plain,
        };
        let callee = function.map(|f| self.text(f)).unwrap_or_default();

        let mut children = Vec::new();
        if let Some(function) = function {
            // `a.get().run()` nests the inner call in the callee.
            self.lower_into(function, &mut children);
        }
        if let Some(arguments) = node.child_by_field_name("arguments") {
            self.lower_named_children_into(arguments, &mut children);
        }
        let children = self.alloc(children);

        DeclNode::new_call(span_of(node), style, self.arena.alloc_str(&callee), children)
    }
}
