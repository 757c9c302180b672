// Tree-building helpers shared by the integration tests.
//
// The markup parser is an external collaborator, so scenarios build the
// trees it would produce and assert on the exact printed token sequence.

#![allow(dead_code)]

use svelte_ast_print::ast::{
    Attribute, AttributeNode, AttributeValue, Comment, Directive, DirectiveKind, Element,
    ElementKind, ExpressionTag, Fragment, Node, Text,
};
use svelte_ast_print::{Expression, FormatOptions};

/// Options matching the original round-trip suite: single-line output.
pub fn compact() -> FormatOptions {
    FormatOptions::new().with_indent("").with_line_end("")
}

pub fn fragment(nodes: Vec<Node>) -> Fragment {
    Fragment { nodes }
}

pub fn text(data: &str) -> Node {
    Node::Text(Text { data: data.into() })
}

pub fn comment(data: &str) -> Node {
    Node::Comment(Comment { data: data.into() })
}

pub fn expression_tag(source: &str) -> Node {
    Node::ExpressionTag(ExpressionTag {
        expression: Expression::from(source),
    })
}

pub fn element_of(kind: ElementKind, name: &str, attributes: Vec<AttributeNode>, children: Vec<Node>) -> Node {
    Node::Element(Element {
        kind,
        name: name.into(),
        attributes,
        fragment: fragment(children),
        this: None,
    })
}

pub fn element(name: &str, attributes: Vec<AttributeNode>, children: Vec<Node>) -> Node {
    element_of(ElementKind::Regular, name, attributes, children)
}

pub fn component(name: &str, attributes: Vec<AttributeNode>, children: Vec<Node>) -> Node {
    element_of(ElementKind::Component, name, attributes, children)
}

pub fn text_attribute(name: &str, value: &str) -> AttributeNode {
    AttributeNode::Attribute(Attribute {
        name: name.into(),
        value: AttributeValue::Text(value.into()),
    })
}

pub fn expression_attribute(name: &str, source: &str) -> AttributeNode {
    AttributeNode::Attribute(Attribute {
        name: name.into(),
        value: AttributeValue::Expression(Expression::from(source)),
    })
}

pub fn directive(kind: DirectiveKind, name: &str, expression: Option<&str>) -> AttributeNode {
    AttributeNode::Directive(Directive {
        kind,
        name: name.into(),
        expression: expression.map(Expression::from),
    })
}
