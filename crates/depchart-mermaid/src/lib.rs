//! Flowchart rendering for dependency graphs.
//!
//! This crate transforms a [`DependencyGraph`] into Mermaid flowchart text and
//! wraps that text in a viewable HTML page.
//!
//! # Module Structure
//!
//! - [`ids`]: Stable per-render node identifiers
//! - [`flowchart`]: Statement builder and label escaping
//! - [`html`]: Document template substitution

pub mod flowchart;
pub mod html;
pub mod ids;

use std::collections::BTreeSet;
use std::fmt;

use depchart_core::{DependencyGraph, FilePolicy, NoPolicy, ResolvedFile, is_class_name};
use tracing::{debug, warn};

pub use flowchart::{FlowchartBuilder, LINE_ENDING, escape_label};
pub use html::{FLOWCHART_TEMPLATE, MERMAID_PLACEHOLDER, render_document};
pub use ids::{NodeId, NodeIds};

/// Class attached to every library dependency node.
pub const LIBRARY_CLASS: &str = "library";

// ============================================================================
// Render Options
// ============================================================================

/// Options for flowchart rendering. Every field defaults independently.
#[derive(Clone)]
pub struct RenderOptions<'a> {
    /// If set, only these source names are traversed as roots.
    pub scope: Option<BTreeSet<String>>,
    /// If true, library dependencies are drawn as nodes and edges.
    pub include_libraries: bool,
    /// Project-supplied ignore and classify decisions.
    pub policy: &'a dyn FilePolicy,
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self {
            scope: None,
            include_libraries: false,
            policy: &NoPolicy,
        }
    }
}

impl fmt::Debug for RenderOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("scope", &self.scope)
            .field("include_libraries", &self.include_libraries)
            .finish_non_exhaustive()
    }
}

impl<'a> RenderOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope<I, S>(mut self, source_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = Some(source_names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_include_libraries(mut self, include_libraries: bool) -> Self {
        self.include_libraries = include_libraries;
        self
    }

    pub fn with_policy(mut self, policy: &'a dyn FilePolicy) -> Self {
        self.policy = policy;
        self
    }

    fn in_scope(&self, file: &ResolvedFile) -> bool {
        self.scope
            .as_ref()
            .is_none_or(|scope| scope.contains(&file.source_name))
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Render the dependency graph as a left-to-right Mermaid flowchart.
///
/// Project files are visited as roots in graph order; each root is declared
/// even when it has no edges, then its dependencies are emitted in their
/// native order. Libraries are never roots and only show up as dependency
/// targets when `include_libraries` is set, always with the `library` class.
/// Files the policy ignores never appear in any statement, and classifier
/// labels that are not valid Mermaid class names are dropped.
///
/// Output is identical for identical inputs and never fails, including for
/// graphs with cycles or self-dependencies.
pub fn render_flowchart<G>(graph: &G, options: &RenderOptions<'_>) -> String
where
    G: DependencyGraph + ?Sized,
{
    let policy = options.policy;
    let mut ids = NodeIds::new();
    let mut chart = FlowchartBuilder::new();
    let mut roots = 0usize;
    let mut edges = 0usize;

    for file in graph.resolved_files() {
        if !options.in_scope(file) || file.is_library() || policy.ignore(file) {
            continue;
        }

        let node = ids.get_or_insert(&file.source_name);
        // declared here so files without imports still show up
        chart.node(node, &file.source_name);
        roots += 1;
        if let Some(class) = policy_class(policy, file) {
            chart.class(node, &class);
        }

        for dep in graph.dependencies(file) {
            let is_library = dep.is_library();
            if is_library && !options.include_libraries {
                continue;
            }
            if policy.ignore(dep) {
                continue;
            }

            let dep_node = ids.get_or_insert(&dep.source_name);
            chart.edge(node, &file.source_name, dep_node, &dep.source_name);
            edges += 1;

            if is_library {
                chart.class(dep_node, LIBRARY_CLASS);
            } else if let Some(class) = policy_class(policy, dep) {
                chart.class(dep_node, &class);
            }
        }
    }

    debug!(
        roots,
        edges,
        nodes = ids.len(),
        statements = chart.len(),
        "rendered flowchart"
    );
    chart.build()
}

fn policy_class(policy: &dyn FilePolicy, file: &ResolvedFile) -> Option<String> {
    let class = policy.classify(file)?;
    if is_class_name(&class) {
        Some(class)
    } else {
        warn!(source_name = %file.source_name, class = %class, "skipping invalid class name");
        None
    }
}
