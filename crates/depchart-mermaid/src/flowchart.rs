//! Mermaid flowchart statement helpers.

use crate::ids::NodeId;

/// Header declaring a left-to-right flowchart.
pub const FLOWCHART_HEADER: &str = "graph LR";

/// Statements are joined with the platform line terminator.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Escape a label for use inside `["..."]`.
///
/// Mermaid has no backslash escapes in quoted labels. Characters it would
/// read as syntax or markup are written as `#...;` entity codes, which it
/// decodes back to the literal character when drawing.
pub fn escape_label(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '#' => out.push_str("#35;"),
            '"' => out.push_str("#quot;"),
            '<' => out.push_str("#lt;"),
            '>' => out.push_str("#gt;"),
            '&' => out.push_str("#amp;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Builder collecting flowchart statements in emission order.
pub struct FlowchartBuilder {
    statements: Vec<String>,
}

impl FlowchartBuilder {
    pub fn new() -> Self {
        Self {
            statements: vec![FLOWCHART_HEADER.to_string()],
        }
    }

    /// `Node0["label"]`
    pub fn node(&mut self, id: NodeId, label: &str) -> &mut Self {
        self.statements.push(node_ref(id, label));
        self
    }

    /// `Node0["from"] --> Node1["to"]`
    pub fn edge(&mut self, from: NodeId, from_label: &str, to: NodeId, to_label: &str) -> &mut Self {
        self.statements.push(format!(
            "{} --> {}",
            node_ref(from, from_label),
            node_ref(to, to_label)
        ));
        self
    }

    /// `class Node0 name`
    pub fn class(&mut self, id: NodeId, class: &str) -> &mut Self {
        self.statements.push(format!("class {id} {class}"));
        self
    }

    /// Number of statements after the header.
    pub(crate) fn len(&self) -> usize {
        self.statements.len() - 1
    }

    /// Finish building and return the diagram text.
    pub fn build(self) -> String {
        self.statements.join(LINE_ENDING)
    }
}

impl Default for FlowchartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn node_ref(id: NodeId, label: &str) -> String {
    format!("{id}[\"{}\"]", escape_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::NodeIds;

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("contracts/A.sol"), "contracts/A.sol");
        assert_eq!(escape_label("say \"hi\".sol"), "say #quot;hi#quot;.sol");
        assert_eq!(escape_label("a<b>.sol"), "a#lt;b#gt;.sol");
        assert_eq!(escape_label("R&D.sol"), "R#amp;D.sol");
    }

    #[test]
    fn test_escape_label_hash_first() {
        // a literal entity in a name must not be decoded by Mermaid
        assert_eq!(escape_label("#quot;.sol"), "#35;quot;.sol");
        assert_eq!(escape_label("v#2.sol"), "v#35;2.sol");
    }

    #[test]
    fn test_statement_forms() {
        let mut ids = NodeIds::new();
        let a = ids.get_or_insert("A.sol");
        let b = ids.get_or_insert("B.sol");

        let mut chart = FlowchartBuilder::new();
        assert_eq!(chart.len(), 0);
        chart.node(a, "A.sol").edge(a, "A.sol", b, "B.sol").class(b, "library");
        assert_eq!(chart.len(), 3);
        assert_eq!(
            chart.build(),
            [
                "graph LR",
                "Node0[\"A.sol\"]",
                "Node0[\"A.sol\"] --> Node1[\"B.sol\"]",
                "class Node1 library",
            ]
            .join(LINE_ENDING)
        );
    }

    #[test]
    fn test_empty_chart_is_header_only() {
        assert_eq!(FlowchartBuilder::new().build(), "graph LR");
    }
}
