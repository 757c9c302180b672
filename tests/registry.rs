// Printer-registry extension scenarios: overrides, missing printers, and
// custom expression bridges.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use svelte_ast_print::ast::{Node, NodeKind, Root};
use svelte_ast_print::{
    Expression, ExpressionRenderer, FormatOptions, NodePrinter, PrintContext, PrintError,
    PrinterRegistry, PrinterRegistryBuilder, RawSourceRenderer, Visit,
};

/// Replaces every text node with a fixed marker.
struct RedactingTextPrinter;

impl NodePrinter for RedactingTextPrinter {
    fn enter(
        &self,
        _node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        context.write("[redacted]");
        Ok(Visit::Handled)
    }
}

#[test]
fn override_replaces_a_standard_printer() {
    let registry = PrinterRegistry::builder()
        .with(NodeKind::Text, Box::new(RedactingTextPrinter))
        .build();
    let root = Root {
        fragment: fragment(vec![element("p", vec![], vec![text("secret")])]),
        ..Root::default()
    };
    let printed = svelte_ast_print::print_with_registry(
        &root,
        &compact(),
        &registry,
        &RawSourceRenderer,
    )
    .unwrap();
    assert_eq!(printed, "<p>[redacted]</p>");
}

/// Prefixes every text node with the configured indent unit, exercising the
/// formatting-options hook available to custom printers.
struct IndentingTextPrinter;

impl NodePrinter for IndentingTextPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let indent = context.options().indent.clone();
        context.write(&indent);
        if let Node::Text(text) = node {
            context.write(&text.data);
        }
        Ok(Visit::Handled)
    }
}

#[test]
fn custom_printers_can_read_format_options() {
    let registry = PrinterRegistry::builder()
        .with(NodeKind::Text, Box::new(IndentingTextPrinter))
        .build();
    let options = FormatOptions::new().with_indent(">>").with_line_end("");
    let root = Root {
        fragment: fragment(vec![element("p", vec![], vec![text("body")])]),
        ..Root::default()
    };
    let printed =
        svelte_ast_print::print_with_registry(&root, &options, &registry, &RawSourceRenderer)
            .unwrap();
    assert_eq!(printed, "<p>>>body</p>");
}

#[test]
fn missing_printer_is_an_unknown_construct_error() {
    let registry = PrinterRegistryBuilder::empty().build();
    let root = Root {
        fragment: fragment(vec![text("hi")]),
        ..Root::default()
    };
    let result =
        svelte_ast_print::print_with_registry(&root, &compact(), &registry, &RawSourceRenderer);
    match result {
        Err(PrintError::UnknownConstruct(name)) => assert_eq!(name, "Text"),
        other => panic!("expected UnknownConstruct, got {other:?}"),
    }
}

#[test]
fn empty_element_name_is_malformed() {
    let root = Root {
        fragment: fragment(vec![element("", vec![], vec![])]),
        ..Root::default()
    };
    let result = svelte_ast_print::print_with_registry(
        &root,
        &compact(),
        &PrinterRegistry::standard(),
        &RawSourceRenderer,
    );
    match result {
        Err(PrintError::Malformed { node, .. }) => assert_eq!(node, "RegularElement"),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn const_tag_reducing_to_empty_is_malformed() {
    use svelte_ast_print::ast::ConstTag;
    let root = Root {
        fragment: fragment(vec![Node::ConstTag(ConstTag { declaration: "const ;".into() })]),
        ..Root::default()
    };
    let result = svelte_ast_print::print_with_registry(
        &root,
        &compact(),
        &PrinterRegistry::standard(),
        &RawSourceRenderer,
    );
    assert!(matches!(result, Err(PrintError::Malformed { node: "ConstTag", .. })));
}

#[test]
fn miswired_registry_fails_fast_instead_of_guessing() {
    use svelte_ast_print::print::printers::ElementPrinter;
    // A registry that dispatches text nodes to the element printer must
    // refuse the node rather than emit something shaped like an element.
    let registry = PrinterRegistry::builder()
        .with(NodeKind::Text, Box::new(ElementPrinter))
        .build();
    let root = Root {
        fragment: fragment(vec![text("hi")]),
        ..Root::default()
    };
    let result =
        svelte_ast_print::print_with_registry(&root, &compact(), &registry, &RawSourceRenderer);
    assert!(matches!(result, Err(PrintError::Malformed { .. })));
}

/// Bridge that rejects everything, standing in for a strict script unparser.
struct FailingRenderer;

impl ExpressionRenderer for FailingRenderer {
    fn render(
        &self,
        _expression: &Expression,
        _options: &FormatOptions,
    ) -> Result<String, PrintError> {
        Err(PrintError::Expression("unsupported node".into()))
    }
}

#[test]
fn bridge_failures_propagate_unchanged() {
    let root = Root {
        fragment: fragment(vec![expression_tag("temp")]),
        ..Root::default()
    };
    let result = svelte_ast_print::print_with_registry(
        &root,
        &compact(),
        &PrinterRegistry::standard(),
        &FailingRenderer,
    );
    assert!(matches!(result, Err(PrintError::Expression(_))));
}

/// Bridge that wraps rendered expressions, proving the bridge seam is used
/// for every embedded expression.
struct TaggingRenderer;

impl ExpressionRenderer for TaggingRenderer {
    fn render(
        &self,
        expression: &Expression,
        _options: &FormatOptions,
    ) -> Result<String, PrintError> {
        Ok(format!("expr!({})", expression.source))
    }
}

#[test]
fn custom_bridge_renders_embedded_expressions() {
    let root = Root {
        fragment: fragment(vec![element(
            "div",
            vec![expression_attribute("class", "getClass()")],
            vec![expression_tag("temp")],
        )]),
        ..Root::default()
    };
    let printed = svelte_ast_print::print_with_registry(
        &root,
        &compact(),
        &PrinterRegistry::standard(),
        &TaggingRenderer,
    )
    .unwrap();
    assert_eq!(printed, "<div class={expr!(getClass())}>{expr!(temp)}</div>");
}
