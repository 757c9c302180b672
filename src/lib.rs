// svelte-ast-print — Svelte template AST pretty-printer.
//
// Architecture:
//   parsed component tree → per-node printers (registry dispatch) → source text
//
// The markup parser and the embedded-script unparser are external
// collaborators: trees come in already parsed, and every script fragment is
// rendered through the `ExpressionRenderer` bridge. Reference
// implementation: svelte-ast-printer (https://github.com/vardario/svelte-ast-printer).

pub mod ast;
mod document;
mod error;
mod expr;
pub mod print;

pub use error::PrintError;
pub use expr::{Expression, ExpressionRenderer, RawSourceRenderer};
pub use print::registry::{NodePrinter, PrinterRegistry, PrinterRegistryBuilder, Visit};
pub use print::{FormatOptions, PrintContext};

use ast::{Fragment, Root, Script};

/// Print a parsed component back to source text using default options.
///
/// # Examples
///
/// ```
/// use svelte_ast_print::ast::{Fragment, Node, Root, Text};
///
/// let root = Root {
///     module: None,
///     instance: None,
///     fragment: Fragment {
///         nodes: vec![Node::Text(Text { data: "Hello, world!".into() })],
///     },
/// };
/// let printed = svelte_ast_print::print(&root).unwrap();
/// assert_eq!(printed, "Hello, world!");
/// ```
pub fn print(root: &Root) -> Result<String, PrintError> {
    print_with(root, &FormatOptions::default())
}

/// Print a parsed component with custom formatting options.
pub fn print_with(root: &Root, options: &FormatOptions) -> Result<String, PrintError> {
    document::print_document(root, options, &PrinterRegistry::standard(), &RawSourceRenderer)
}

/// Print a parsed component with a caller-supplied printer registry and
/// expression bridge.
pub fn print_with_registry(
    root: &Root,
    options: &FormatOptions,
    registry: &PrinterRegistry,
    expressions: &dyn ExpressionRenderer,
) -> Result<String, PrintError> {
    document::print_document(root, options, registry, expressions)
}

/// Print only the markup fragment of a component.
pub fn print_markup(fragment: &Fragment, options: &FormatOptions) -> Result<String, PrintError> {
    print::print_fragment(fragment, options)
}

/// Print one `<script>` block.
pub fn print_script(script: &Script, options: &FormatOptions) -> Result<String, PrintError> {
    document::print_script_block(script, options, &PrinterRegistry::standard(), &RawSourceRenderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{Node, Text};

    #[test]
    fn test_print_empty_component() {
        let root = Root::default();
        assert_eq!(print(&root).unwrap(), "");
    }

    #[test]
    fn test_print_markup_only() {
        let root = Root {
            fragment: Fragment {
                nodes: vec![Node::Text(Text { data: "Hello".into() })],
            },
            ..Root::default()
        };
        assert_eq!(print(&root).unwrap(), "Hello");
    }

    #[test]
    fn test_options_are_honored() {
        let root = Root::default();
        let options = FormatOptions::new().with_indent("").with_line_end("");
        assert_eq!(print_with(&root, &options).unwrap(), "");
    }
}
