// Embedded-expression bridge.
//
// The printer never interprets script content: every expression, binding
// pattern, and statement block goes through an `ExpressionRenderer`. The
// default renderer emits the raw source captured by the parser; a caller
// with a real script unparser can plug it in at the same seam.

use crate::error::PrintError;
use crate::print::FormatOptions;

/// An embedded script fragment (expression, binding pattern, declaration,
/// or statement block), opaque to the markup printer.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub source: String,
}

impl Expression {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }
}

impl From<&str> for Expression {
    fn from(source: &str) -> Self {
        Expression::new(source)
    }
}

impl From<String> for Expression {
    fn from(source: String) -> Self {
        Expression::new(source)
    }
}

/// Renders embedded script fragments to text.
///
/// Failures propagate unchanged to the caller of the print operation; the
/// markup printer never recovers from a bridge error.
pub trait ExpressionRenderer {
    /// Render a single expression with the shared formatting options.
    fn render(&self, expression: &Expression, options: &FormatOptions) -> Result<String, PrintError>;

    /// Render a `<script>` statement block. Defaults to [`render`].
    ///
    /// [`render`]: ExpressionRenderer::render
    fn render_script(
        &self,
        content: &Expression,
        options: &FormatOptions,
    ) -> Result<String, PrintError> {
        self.render(content, options)
    }
}

/// Default bridge: emits the raw source text the parser captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSourceRenderer;

impl ExpressionRenderer for RawSourceRenderer {
    fn render(&self, expression: &Expression, _options: &FormatOptions) -> Result<String, PrintError> {
        if expression.source.trim().is_empty() {
            return Err(PrintError::Expression("empty expression fragment".into()));
        }
        Ok(expression.source.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_source_passthrough() {
        let options = FormatOptions::default();
        let rendered = RawSourceRenderer
            .render(&Expression::from("a > 100"), &options)
            .unwrap();
        assert_eq!(rendered, "a > 100");
    }

    #[test]
    fn test_empty_fragment_is_an_error() {
        let options = FormatOptions::default();
        let result = RawSourceRenderer.render(&Expression::from("   "), &options);
        assert!(matches!(result, Err(PrintError::Expression(_))));
    }

    #[test]
    fn test_render_script_defaults_to_render() {
        let options = FormatOptions::default();
        let rendered = RawSourceRenderer
            .render_script(&Expression::from("let a;"), &options)
            .unwrap();
        assert_eq!(rendered, "let a;");
    }
}
