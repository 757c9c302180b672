// Per-construct printers.
//
// One printer per node-kind family. Element families share one printer, as
// do all leaf tags that only differ in their keyword. Control blocks that
// own their branch fragments ({#if}, {#await}) recurse manually and return
// `Visit::Handled` so the traversal does not emit them twice.

use crate::ast::{Node, NodeKind};
use crate::error::PrintError;
use crate::print::attributes::print_attribute;
use crate::print::registry::{NodePrinter, Visit};
use crate::print::PrintContext;

/// The standard printer for a node kind.
pub fn standard_printer(kind: NodeKind) -> Box<dyn NodePrinter> {
    match kind {
        NodeKind::Fragment => Box::new(FragmentPrinter),
        NodeKind::Text => Box::new(TextPrinter),
        NodeKind::Comment => Box::new(CommentPrinter),
        NodeKind::ExpressionTag => Box::new(ExpressionTagPrinter),
        NodeKind::HtmlTag => Box::new(HtmlTagPrinter),
        NodeKind::DebugTag => Box::new(DebugTagPrinter),
        NodeKind::ConstTag => Box::new(ConstTagPrinter),
        NodeKind::RenderTag => Box::new(RenderTagPrinter),
        NodeKind::RegularElement
        | NodeKind::Component
        | NodeKind::SlotElement
        | NodeKind::TitleElement
        | NodeKind::SvelteSelf
        | NodeKind::SvelteWindow
        | NodeKind::SvelteDocument
        | NodeKind::SvelteBody
        | NodeKind::SvelteHead
        | NodeKind::SvelteElement
        | NodeKind::SvelteComponent
        | NodeKind::SvelteFragment => Box::new(ElementPrinter),
        NodeKind::IfBlock => Box::new(IfBlockPrinter),
        NodeKind::EachBlock => Box::new(EachBlockPrinter),
        NodeKind::AwaitBlock => Box::new(AwaitBlockPrinter),
        NodeKind::KeyBlock => Box::new(KeyBlockPrinter),
        NodeKind::SnippetBlock => Box::new(SnippetBlockPrinter),
    }
}

/// Dispatch reached a printer with a node of the wrong shape. Only possible
/// through a miswired custom registry; fail fast rather than guess.
fn mismatch(expected: &'static str) -> PrintError {
    PrintError::Malformed {
        node: expected,
        reason: "printer dispatched on a node of a different kind",
    }
}

macro_rules! expect_node {
    ($node:expr, $variant:ident) => {
        match $node {
            Node::$variant(inner) => inner,
            _ => return Err(mismatch(stringify!($variant))),
        }
    };
}

/// No-op printer for the transparent `Fragment` wrapper.
pub struct FragmentPrinter;

impl NodePrinter for FragmentPrinter {
    fn enter(
        &self,
        _node: &Node,
        _parent: Option<&Node>,
        _context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        Ok(Visit::Descend)
    }
}

/// Raw character data, emitted verbatim.
pub struct TextPrinter;

impl NodePrinter for TextPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let text = expect_node!(node, Text);
        context.write(&text.data);
        Ok(Visit::Handled)
    }
}

/// `<!-- comment -->`. Whitespace-only comments produce no output.
pub struct CommentPrinter;

impl NodePrinter for CommentPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let comment = expect_node!(node, Comment);
        let data = comment.data.trim();
        if !data.is_empty() {
            context.write(&format!("<!-- {data} -->"));
            context.line_end();
        }
        Ok(Visit::Handled)
    }
}

/// `{expression}` interpolation in text position.
pub struct ExpressionTagPrinter;

impl NodePrinter for ExpressionTagPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let tag = expect_node!(node, ExpressionTag);
        let expression = context.expression(&tag.expression)?;
        context.write(&format!("{{{expression}}}"));
        Ok(Visit::Handled)
    }
}

/// `{@html expression}`.
pub struct HtmlTagPrinter;

impl NodePrinter for HtmlTagPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let tag = expect_node!(node, HtmlTag);
        let expression = context.expression(&tag.expression)?;
        context.write(&format!("{{@html {expression}}}"));
        Ok(Visit::Handled)
    }
}

/// `{@debug id1, id2}`, or bare `{@debug}` for an empty identifier list.
pub struct DebugTagPrinter;

impl NodePrinter for DebugTagPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let tag = expect_node!(node, DebugTag);
        if tag.identifiers.is_empty() {
            context.write("{@debug}");
            return Ok(Visit::Handled);
        }
        let identifiers = tag
            .identifiers
            .iter()
            .map(|identifier| context.expression(identifier))
            .collect::<Result<Vec<_>, _>>()?;
        context.write(&format!("{{@debug {}}}", identifiers.join(", ")));
        Ok(Visit::Handled)
    }
}

/// `{@const declaration}` with the `const` keyword and trailing semicolon
/// stripped from the rendered declaration.
pub struct ConstTagPrinter;

impl NodePrinter for ConstTagPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let tag = expect_node!(node, ConstTag);
        let declaration = context.expression(&tag.declaration)?;
        let declaration = declaration.trim();
        // Strip the keyword only as a whole word: an identifier that merely
        // starts with `const` must pass through untouched.
        let declaration = match declaration.strip_prefix("const") {
            Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
            _ => declaration,
        };
        let declaration = declaration.strip_suffix(';').unwrap_or(declaration).trim_end();
        if declaration.is_empty() {
            return Err(PrintError::Malformed {
                node: "ConstTag",
                reason: "declaration is empty after stripping `const` and `;`",
            });
        }
        context.write(&format!("{{@const {declaration}}}"));
        Ok(Visit::Handled)
    }
}

/// `{@render expression}`.
pub struct RenderTagPrinter;

impl NodePrinter for RenderTagPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let tag = expect_node!(node, RenderTag);
        let expression = context.expression(&tag.expression)?;
        context.write(&format!("{{@render {expression}}}"));
        Ok(Visit::Handled)
    }
}

/// Elements, components, slots, and the reserved `svelte:*` family.
pub struct ElementPrinter;

impl NodePrinter for ElementPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let element = expect_node!(node, Element);
        if element.name.is_empty() {
            return Err(PrintError::Malformed {
                node: NodeKind::from(element.kind).name(),
                reason: "element has an empty tag name",
            });
        }

        context.write(&format!("<{}", element.name));

        // `<svelte:element this={...}>` / `<svelte:component this={...}>`.
        if let Some(this) = &element.this {
            let expression = context.expression(this)?;
            context.write(&format!(" this={{{expression}}}"));
        }

        for attribute in &element.attributes {
            print_attribute(attribute, context)?;
        }

        if element.self_closes() {
            context.write("/>");
        } else {
            context.write(">");
        }
        context.line_end();
        Ok(Visit::Descend)
    }

    fn leave(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<(), PrintError> {
        let element = expect_node!(node, Element);
        if element.is_void() || element.self_closes() {
            return Ok(());
        }
        context.write(&format!("</{}>", element.name));
        Ok(())
    }
}

/// `{#if}` / `{:else if}` / `{:else}` chains. Branch fragments are printed
/// by manual recursion; `{/if}` closes only the chain root.
pub struct IfBlockPrinter;

impl NodePrinter for IfBlockPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let block = expect_node!(node, IfBlock);
        let test = context.expression(&block.test)?;

        if block.elseif {
            context.write(&format!("{{:else if {test}}}"));
            context.print_fragment(&block.consequent)?;
            context.line_end();
        } else {
            context.write(&format!("{{#if {test}}}"));
            context.line_end();
            context.print_fragment(&block.consequent)?;
        }

        if let Some(alternate) = &block.alternate {
            // An alternate that continues the chain starts with its own
            // `{:else if}`; only a terminal alternate gets `{:else}`.
            let continues_chain = alternate
                .nodes
                .iter()
                .any(|node| matches!(node, Node::IfBlock(inner) if inner.elseif));
            if !continues_chain {
                context.write("{:else}");
            }
            context.line_end();
            context.print_fragment(alternate)?;
        }

        Ok(Visit::Handled)
    }

    fn leave(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<(), PrintError> {
        let block = expect_node!(node, IfBlock);
        if !block.elseif {
            context.write("{/if}");
            context.line_end();
        }
        Ok(())
    }
}

/// `{#each expression as context, index (key)}` ... `{/each}`.
pub struct EachBlockPrinter;

impl NodePrinter for EachBlockPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let block = expect_node!(node, EachBlock);
        let expression = context.expression(&block.expression)?;
        context.write(&format!("{{#each {expression}"));

        if let Some(binding) = &block.context {
            let binding = context.expression(binding)?;
            context.write(&format!(" as {binding}"));
        }
        if let Some(index) = &block.index {
            context.write(&format!(", {index}"));
        }
        if let Some(key) = &block.key {
            let key = context.expression(key)?;
            context.write(&format!(" ({key})"));
        }
        context.write("}");
        Ok(Visit::Descend)
    }

    fn leave(
        &self,
        _node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<(), PrintError> {
        context.write("{/each}");
        Ok(())
    }
}

/// `{#await}` with pending/then/catch regions, all manually recursed.
/// Legacy `{#await expr then v}` shorthands normalize to the block form.
pub struct AwaitBlockPrinter;

impl NodePrinter for AwaitBlockPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let block = expect_node!(node, AwaitBlock);
        let expression = context.expression(&block.expression)?;
        context.write(&format!("{{#await {expression}}}"));

        if let Some(pending) = &block.pending {
            context.print_fragment(pending)?;
        }

        if let Some(then) = &block.then {
            match &block.value {
                Some(value) => {
                    let value = context.expression(value)?;
                    context.write(&format!("{{:then {value}}}"));
                }
                None => context.write("{:then}"),
            }
            context.print_fragment(then)?;
        }

        if let Some(catch) = &block.catch {
            match &block.error {
                Some(error) => {
                    let error = context.expression(error)?;
                    context.write(&format!("{{:catch {error}}}"));
                }
                None => context.write("{:catch}"),
            }
            context.print_fragment(catch)?;
        }

        Ok(Visit::Handled)
    }

    fn leave(
        &self,
        _node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<(), PrintError> {
        context.write("{/await}");
        Ok(())
    }
}

/// `{#key expression}` ... `{/key}`.
pub struct KeyBlockPrinter;

impl NodePrinter for KeyBlockPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let block = expect_node!(node, KeyBlock);
        let expression = context.expression(&block.expression)?;
        context.write(&format!("{{#key {expression}}}"));
        Ok(Visit::Descend)
    }

    fn leave(
        &self,
        _node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<(), PrintError> {
        context.write("{/key}");
        Ok(())
    }
}

/// `{#snippet name(param1, param2)}` ... `{/snippet}`.
pub struct SnippetBlockPrinter;

impl NodePrinter for SnippetBlockPrinter {
    fn enter(
        &self,
        node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError> {
        let block = expect_node!(node, SnippetBlock);
        let name = context.expression(&block.expression)?;
        let parameters = block
            .parameters
            .iter()
            .map(|parameter| context.expression(parameter))
            .collect::<Result<Vec<_>, _>>()?;
        context.write(&format!("{{#snippet {name}({})}}", parameters.join(", ")));
        Ok(Visit::Descend)
    }

    fn leave(
        &self,
        _node: &Node,
        _parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<(), PrintError> {
        context.write("{/snippet}");
        Ok(())
    }
}
