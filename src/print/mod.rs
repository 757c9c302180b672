// Markup tree → source text printer.
//
// A single depth-first pass over the tree. Each node dispatches to its
// registered printer's `enter`, children are visited unless the printer
// decided otherwise, then `leave` runs. Output accumulates in one
// append-only sink on the context.

pub mod attributes;
pub mod printers;
pub mod registry;

use crate::ast::{Fragment, Node};
use crate::error::PrintError;
use crate::expr::{Expression, ExpressionRenderer, RawSourceRenderer};
use self::registry::{PrinterRegistry, Visit};

/// Formatting options threaded through every printer and the expression
/// bridge. Printers must honor these instead of hardcoding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indent unit. Default: two spaces.
    pub indent: String,
    /// Line-ending string. Default: `"\n"`.
    pub line_end: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            line_end: "\n".into(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indent unit.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the line-ending string.
    pub fn with_line_end(mut self, line_end: impl Into<String>) -> Self {
        self.line_end = line_end.into();
        self
    }

    /// Options producing single-line output (empty indent and line end).
    pub fn compact() -> Self {
        Self {
            indent: String::new(),
            line_end: String::new(),
        }
    }
}

/// Shared traversal state: the output sink, formatting options, printer
/// registry, and the expression bridge. Printers may only append to the
/// sink and request recursion through [`PrintContext::print_fragment`].
pub struct PrintContext<'a> {
    out: String,
    options: &'a FormatOptions,
    registry: &'a PrinterRegistry,
    expressions: &'a dyn ExpressionRenderer,
}

impl<'a> PrintContext<'a> {
    pub(crate) fn new(
        options: &'a FormatOptions,
        registry: &'a PrinterRegistry,
        expressions: &'a dyn ExpressionRenderer,
    ) -> Self {
        Self {
            out: String::new(),
            options,
            registry,
            expressions,
        }
    }

    /// Append text to the output sink.
    pub fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Append the configured line-ending string.
    pub fn line_end(&mut self) {
        self.out.push_str(&self.options.line_end);
    }

    /// The formatting options for this print call. Custom printers that
    /// emit their own whitespace read the indent unit from here.
    pub fn options(&self) -> &FormatOptions {
        self.options
    }

    /// Render an embedded expression through the bridge.
    pub fn expression(&self, expression: &Expression) -> Result<String, PrintError> {
        self.expressions.render(expression, self.options)
    }

    /// Print a fragment in place. Control-block printers use this to recurse
    /// into the branch fragments they own, returning [`Visit::Handled`] from
    /// `enter` so the generic traversal does not visit them again.
    pub fn print_fragment(&mut self, fragment: &Fragment) -> Result<(), PrintError> {
        for node in &fragment.nodes {
            self.print_node(node, None)?;
        }
        Ok(())
    }

    /// Dispatch one node: registry lookup, `enter`, optional descent, `leave`.
    pub fn print_node(&mut self, node: &Node, parent: Option<&Node>) -> Result<(), PrintError> {
        let printer = self
            .registry
            .lookup(node.kind())
            .ok_or(PrintError::UnknownConstruct(node.kind().name()))?;

        #[cfg(feature = "tracing")]
        tracing::trace!(kind = node.kind().name(), "enter");

        match printer.enter(node, parent, self)? {
            Visit::Descend => self.descend(node)?,
            Visit::Skip | Visit::Handled => {}
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(kind = node.kind().name(), "leave");

        printer.leave(node, parent, self)
    }

    /// Visit a node's child fragments in document order. Attributes are not
    /// tree children; the element printer emits them itself.
    fn descend(&mut self, node: &Node) -> Result<(), PrintError> {
        match node {
            Node::Fragment(fragment) => self.visit_children(&fragment.nodes, node),
            Node::Element(el) => self.visit_children(&el.fragment.nodes, node),
            Node::EachBlock(block) => self.visit_children(&block.body.nodes, node),
            Node::KeyBlock(block) => self.visit_children(&block.fragment.nodes, node),
            Node::SnippetBlock(block) => self.visit_children(&block.body.nodes, node),
            Node::IfBlock(block) => {
                self.visit_children(&block.consequent.nodes, node)?;
                if let Some(alternate) = &block.alternate {
                    self.visit_children(&alternate.nodes, node)?;
                }
                Ok(())
            }
            Node::AwaitBlock(block) => {
                for branch in [&block.pending, &block.then, &block.catch].into_iter().flatten() {
                    self.visit_children(&branch.nodes, node)?;
                }
                Ok(())
            }
            // Leaf nodes.
            Node::Text(_)
            | Node::Comment(_)
            | Node::ExpressionTag(_)
            | Node::HtmlTag(_)
            | Node::DebugTag(_)
            | Node::ConstTag(_)
            | Node::RenderTag(_) => Ok(()),
        }
    }

    fn visit_children(&mut self, children: &[Node], parent: &Node) -> Result<(), PrintError> {
        for child in children {
            self.print_node(child, Some(parent))?;
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// Print a markup fragment with the standard registry and raw-source bridge.
pub fn print_fragment(fragment: &Fragment, options: &FormatOptions) -> Result<String, PrintError> {
    print_fragment_with(fragment, options, &PrinterRegistry::standard(), &RawSourceRenderer)
}

/// Print a markup fragment with a caller-supplied registry and bridge.
/// Surrounding whitespace is trimmed from the result.
pub fn print_fragment_with(
    fragment: &Fragment,
    options: &FormatOptions,
    registry: &PrinterRegistry,
    expressions: &dyn ExpressionRenderer,
) -> Result<String, PrintError> {
    let mut context = PrintContext::new(options, registry, expressions);
    context.print_fragment(fragment)?;
    Ok(context.finish().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Element, ElementKind, Text};

    fn element(name: &str, children: Vec<Node>) -> Node {
        Node::Element(Element {
            kind: ElementKind::Regular,
            name: name.into(),
            attributes: vec![],
            fragment: Fragment { nodes: children },
            this: None,
        })
    }

    #[test]
    fn test_default_options() {
        let options = FormatOptions::default();
        assert_eq!(options.indent, "  ");
        assert_eq!(options.line_end, "\n");
    }

    #[test]
    fn test_options_builder() {
        let options = FormatOptions::new().with_indent("\t").with_line_end("\r\n");
        assert_eq!(options.indent, "\t");
        assert_eq!(options.line_end, "\r\n");
    }

    #[test]
    fn test_nested_elements_visit_in_document_order() {
        let fragment = Fragment {
            nodes: vec![element(
                "main",
                vec![element("span", vec![Node::Text(Text { data: "hi".into() })])],
            )],
        };
        let printed = print_fragment(&fragment, &FormatOptions::compact()).unwrap();
        assert_eq!(printed, "<main><span>hi</span></main>");
    }

    #[test]
    fn test_result_is_trimmed() {
        let fragment = Fragment {
            nodes: vec![Node::Text(Text { data: "  padded  ".into() })],
        };
        let printed = print_fragment(&fragment, &FormatOptions::compact()).unwrap();
        assert_eq!(printed, "padded");
    }
}
