// Document assembly: scripts first, then markup.
//
// Mirrors the source order the parser accepts: module script, instance
// script, markup fragment, joined with the configured line ending and
// trimmed as a whole.

use crate::ast::{Root, Script};
use crate::error::PrintError;
use crate::expr::ExpressionRenderer;
use crate::print::attributes::print_attribute;
use crate::print::registry::PrinterRegistry;
use crate::print::{print_fragment_with, FormatOptions, PrintContext};

/// Print a whole parsed component: `module + lineEnd + instance + lineEnd +
/// markup`, trimmed. Missing scripts contribute nothing but keep the order.
pub(crate) fn print_document(
    root: &Root,
    options: &FormatOptions,
    registry: &PrinterRegistry,
    expressions: &dyn ExpressionRenderer,
) -> Result<String, PrintError> {
    let module = root
        .module
        .as_ref()
        .map(|script| print_script_block(script, options, registry, expressions))
        .transpose()?
        .unwrap_or_default();
    let instance = root
        .instance
        .as_ref()
        .map(|script| print_script_block(script, options, registry, expressions))
        .transpose()?
        .unwrap_or_default();
    let markup = print_fragment_with(&root.fragment, options, registry, expressions)?;

    let mut result = String::new();
    result.push_str(&module);
    result.push_str(&options.line_end);
    result.push_str(&instance);
    result.push_str(&options.line_end);
    result.push_str(&markup);
    Ok(result.trim().to_string())
}

/// Print one `<script>` block: opening tag with its attributes, the bridged
/// statement content, closing tag.
pub(crate) fn print_script_block(
    script: &Script,
    options: &FormatOptions,
    registry: &PrinterRegistry,
    expressions: &dyn ExpressionRenderer,
) -> Result<String, PrintError> {
    let mut context = PrintContext::new(options, registry, expressions);
    context.write("<script");
    for attribute in &script.attributes {
        print_attribute(attribute, &mut context)?;
    }
    context.write(">");
    let content = expressions.render_script(&script.content, options)?;
    context.write(&content);
    context.write("</script>");
    Ok(context.finish())
}
