//! HTML document wrapping a rendered flowchart.

use depchart_error::{Error, Result};

/// Token replaced by the diagram text.
pub const MERMAID_PLACEHOLDER: &str = "%MERMAID_SOURCE%";

/// Built-in page that loads Mermaid and styles `library` nodes.
pub const FLOWCHART_TEMPLATE: &str = include_str!("../templates/flowchart.html");

/// Substitute `diagram` at the first placeholder of `template`.
pub fn render_document(template: &str, diagram: &str) -> Result<String> {
    if !template.contains(MERMAID_PLACEHOLDER) {
        return Err(Error::template_invalid(format!(
            "template has no {MERMAID_PLACEHOLDER} placeholder"
        ))
        .with_operation("html::render_document"));
    }
    Ok(template.replacen(MERMAID_PLACEHOLDER, diagram, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use depchart_error::ErrorKind;

    #[test]
    fn test_builtin_template_has_placeholder() {
        assert_eq!(FLOWCHART_TEMPLATE.matches(MERMAID_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_render_document() {
        let html = render_document(FLOWCHART_TEMPLATE, "graph LR\nNode0[\"A.sol\"]").unwrap();
        assert!(html.contains("<pre class=\"mermaid\">\ngraph LR\nNode0[\"A.sol\"]\n"));
        assert!(!html.contains(MERMAID_PLACEHOLDER));
    }

    #[test]
    fn test_only_first_placeholder_replaced() {
        let html = render_document("a %MERMAID_SOURCE% b %MERMAID_SOURCE%", "X").unwrap();
        assert_eq!(html, "a X b %MERMAID_SOURCE%");
    }

    #[test]
    fn test_missing_placeholder() {
        let err = render_document("<html></html>", "graph LR").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TemplateInvalid);
    }
}
