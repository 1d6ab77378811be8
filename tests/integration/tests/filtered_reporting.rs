//! Integration tests for filtered reporting
//!
//! Runs the C++ front end, the filtered traversal and the printer together
//! over a namespace-heavy source and compares the report with an
//! independent reading of the tree.

use std::fs;
use std::ops::ControlFlow;
use std::path::PathBuf;

use declscope_ast::{AstArena, DeclNode, NodeKind, VisitResult, Visitor};
use declscope_core::{
    FilteredTraversal, NameFilter, PrintAction, PrintOptions, run_tool_on_code,
};
use declscope_parser::{CppParser, Parser};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

fn print(source: &str, filter: &str) -> (bool, String) {
    let mut action = PrintAction::new(Vec::new(), PrintOptions::with_filter(filter));
    let ok = run_tool_on_code(&mut action, source);
    let out = action.into_inner().unwrap();
    (ok, String::from_utf8(out).unwrap())
}

/// Reference reading: a node is reported when it is of interest and it or
/// one of its ancestors matches the filter.
fn expected_report(node: &DeclNode<'_>, filter: &NameFilter, unlocked: bool, out: &mut String) {
    let unlocked = unlocked || filter.matches(node.qualified_name());
    if unlocked {
        match node.kind {
            NodeKind::Specialization => {
                out.push_str(&format!("specialization\t{}\n", node.qualified_name()));
            }
            NodeKind::PartialSpecialization => {
                out.push_str(&format!("partial specialization\t{}\n", node.qualified_name()));
            }
            NodeKind::CallExpr => {
                out.push_str(&format!("call expr\t{}\n", node.call_label().unwrap()));
            }
            _ => {}
        }
    }
    for child in node.children {
        expected_report(child, filter, unlocked, out);
    }
}

#[test]
fn empty_filter_reports_every_node_of_interest() {
    let (ok, out) = print(&fixture("library.cpp"), "");

    assert!(ok);
    assert_eq!(
        out,
        "specialization\tgeometry::Vec<bool>\n\
         partial specialization\tgeometry::Vec<T*>\n\
         partial specialization\tgeometry::detail::Storage<T, 0>\n\
         call expr\tCallExpr\n\
         specialization\t(anonymous namespace)::Hash<int>\n\
         call expr\tCXXMemberCallExpr\n\
         call expr\tCallExpr\n\
         call expr\tCallExpr\n"
    );
}

#[rstest]
#[case("")]
#[case("^geometry$")]
#[case("detail")]
#[case("Vec<")]
#[case("^run$")]
#[case("main")]
#[case("Hash")]
#[case("area")]
#[case("NoSuchName")]
fn report_matches_reference_reading(#[case] filter: &str) {
    let source = fixture("library.cpp");
    let (ok, out) = print(&source, filter);
    assert!(ok);

    let arena = AstArena::new();
    let unit = CppParser::new().parse(&arena, &source).unwrap();
    let mut expected = String::new();
    expected_report(&unit, &NameFilter::new(filter).unwrap(), false, &mut expected);

    assert_eq!(out, expected);
}

#[test]
fn namespace_match_reports_whole_namespace() {
    let (ok, out) = print(&fixture("library.cpp"), "^geometry$");

    assert!(ok);
    assert_eq!(
        out,
        "specialization\tgeometry::Vec<bool>\n\
         partial specialization\tgeometry::Vec<T*>\n\
         partial specialization\tgeometry::detail::Storage<T, 0>\n\
         call expr\tCallExpr\n"
    );
}

#[test]
fn empty_filter_is_never_narrower_than_any_other() {
    let source = fixture("library.cpp");
    let (_, all) = print(&source, "");

    for filter in ["detail", "Vec", "run", "Hash"] {
        let (_, narrowed) = print(&source, filter);
        for line in narrowed.lines() {
            assert!(all.contains(line), "{line:?} missing from unfiltered report");
        }
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let source = fixture("library.cpp");
    assert_eq!(print(&source, "detail|main"), print(&source, "detail|main"));
}

#[test]
fn malformed_filter_produces_no_output() {
    let (ok, out) = print(&fixture("library.cpp"), "(");

    assert!(!ok);
    assert_eq!(out, "");
}

/// Collects qualified names of the functions it is shown.
#[derive(Default)]
struct FunctionNames {
    names: Vec<String>,
}

impl<'a> Visitor<'a> for FunctionNames {
    fn visit_function(&mut self, node: &DeclNode<'a>) -> VisitResult {
        self.names.push(node.qualified_name().to_string());
        ControlFlow::Continue(())
    }
}

#[test]
fn custom_visitor_sees_only_matching_subtrees() {
    let source = fixture("library.cpp");
    let arena = AstArena::new();
    let unit = CppParser::new().parse(&arena, &source).unwrap();

    let mut visitor = FunctionNames::default();
    let result = FilteredTraversal::new(&mut visitor, "^geometry::Shape$")
        .unwrap()
        .traverse(&unit);

    assert!(result.is_continue());
    assert_eq!(
        visitor.names,
        vec!["geometry::Shape::~Shape", "geometry::Shape::area"]
    );
}
