//! Dependency graph provider and its in-memory implementation.

use std::collections::HashMap;

use depchart_error::{Error, Result};
use tracing::debug;

use crate::file::ResolvedFile;

/// A resolved dependency graph supplied by the host build.
///
/// Both accessors must return items in the graph's own order; renderers rely on
/// that order to produce deterministic output. Cycles and self-dependencies are
/// allowed.
pub trait DependencyGraph {
    /// All files of the graph, in native order.
    fn resolved_files(&self) -> &[ResolvedFile];

    /// Direct dependencies (outgoing edges) of `file`, in native order.
    ///
    /// Returns an empty list for files the graph does not know.
    fn dependencies(&self, file: &ResolvedFile) -> Vec<&ResolvedFile>;
}

/// In-memory dependency graph keyed by source name.
#[derive(Debug, Default, Clone)]
pub struct ProjectGraph {
    files: Vec<ResolvedFile>,
    index: HashMap<String, usize>,
    edges: Vec<Vec<usize>>,
}

impl ProjectGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return its position in the graph.
    ///
    /// Source names are identities, so adding the same name twice is an error.
    pub fn add_file(&mut self, file: ResolvedFile) -> Result<usize> {
        if self.index.contains_key(&file.source_name) {
            return Err(Error::graph_invalid("duplicate source name")
                .with_operation("graph::add_file")
                .with_context("source_name", file.source_name));
        }
        let idx = self.files.len();
        self.index.insert(file.source_name.clone(), idx);
        self.files.push(file);
        self.edges.push(Vec::new());
        Ok(idx)
    }

    /// Record that `from` depends on `to`.
    ///
    /// Both files must already be present. A repeated edge keeps its first
    /// position in `from`'s dependency list.
    pub fn add_dependency(&mut self, from: &str, to: &str) -> Result<()> {
        let from_idx = self.position(from).ok_or_else(|| {
            Error::graph_invalid("dependency declared by an unknown file")
                .with_operation("graph::add_dependency")
                .with_context("file", from)
        })?;
        let to_idx = self.position(to).ok_or_else(|| {
            Error::graph_invalid("dependency on a file missing from the graph")
                .with_operation("graph::add_dependency")
                .with_context("file", from)
                .with_context("dependency", to)
        })?;

        let deps = &mut self.edges[from_idx];
        if deps.contains(&to_idx) {
            debug!(from, to, "skipping repeated dependency edge");
            return Ok(());
        }
        deps.push(to_idx);
        Ok(())
    }

    pub fn file(&self, source_name: &str) -> Option<&ResolvedFile> {
        self.position(source_name).map(|idx| &self.files[idx])
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    fn position(&self, source_name: &str) -> Option<usize> {
        self.index.get(source_name).copied()
    }
}

impl DependencyGraph for ProjectGraph {
    fn resolved_files(&self) -> &[ResolvedFile] {
        &self.files
    }

    fn dependencies(&self, file: &ResolvedFile) -> Vec<&ResolvedFile> {
        let Some(idx) = self.position(&file.source_name) else {
            return Vec::new();
        };
        self.edges[idx].iter().map(|&dep| &self.files[dep]).collect()
    }
}
