// Attribute and directive printing.
//
// Attributes are not tree children: the element printer (and the script
// printer) emit them in order through this module. Dispatch is by attribute
// kind; embedded expressions always go through the bridge.

use crate::ast::{Attribute, AttributeNode, AttributeValue, Directive, DirectiveKind, StyleValue};
use crate::error::PrintError;
use crate::print::PrintContext;

/// Emit one attribute-position construct, leading space included.
pub(crate) fn print_attribute(
    attribute: &AttributeNode,
    context: &mut PrintContext,
) -> Result<(), PrintError> {
    match attribute {
        AttributeNode::Attribute(attribute) => print_plain(attribute, context),
        AttributeNode::Spread(spread) => {
            let expression = context.expression(&spread.expression)?;
            context.write(&format!(" {{...{expression}}}"));
            Ok(())
        }
        AttributeNode::Directive(directive) => print_directive(directive, context),
    }
}

fn print_plain(attribute: &Attribute, context: &mut PrintContext) -> Result<(), PrintError> {
    let name = &attribute.name;
    match &attribute.value {
        AttributeValue::True => context.write(&format!(" {name}")),
        AttributeValue::Text(text) => context.write(&format!(" {name}=\"{text}\"")),
        AttributeValue::Expression(expression) => {
            let expression = context.expression(expression)?;
            context.write(&format!(" {name}={{{expression}}}"));
        }
        // `{name}` shorthand always prints fully expanded.
        AttributeValue::Shorthand => context.write(&format!(" {name}={{{name}}}")),
    }
    Ok(())
}

fn print_directive(directive: &Directive, context: &mut PrintContext) -> Result<(), PrintError> {
    let prefix = directive.kind.prefix();
    let name = &directive.name;

    // `style:` carries its own value slot and ignores the expression field.
    if let DirectiveKind::Style(value) = &directive.kind {
        match value {
            StyleValue::None => context.write(&format!(" style:{name}")),
            StyleValue::Text(text) => context.write(&format!(" style:{name}=\"{text}\"")),
            StyleValue::Expression(expression) => {
                let expression = context.expression(expression)?;
                context.write(&format!(" style:{name}={{{expression}}}"));
            }
        }
        return Ok(());
    }

    match &directive.expression {
        Some(expression) => {
            let expression = context.expression(expression)?;
            context.write(&format!(" {prefix}:{name}={{{expression}}}"));
        }
        None => match directive.kind {
            // `bind:value` / `class:active` shorthands expand to `={name}`.
            DirectiveKind::Bind | DirectiveKind::Class => {
                context.write(&format!(" {prefix}:{name}={{{name}}}"));
            }
            _ => context.write(&format!(" {prefix}:{name}")),
        },
    }
    Ok(())
}
