//! JSON manifest describing a resolved dependency graph.
//!
//! The host build writes one entry per resolved file, in the order it wants the
//! files rendered:
//!
//! ```json
//! {
//!   "files": [
//!     { "sourceName": "contracts/A.sol", "dependencies": ["contracts/B.sol"] },
//!     { "sourceName": "contracts/B.sol" }
//!   ]
//! }
//! ```

use std::path::Path;

use depchart_error::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::file::{LibraryInfo, ResolvedFile};
use crate::graph::ProjectGraph;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphManifest {
    pub files: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ManifestEntry {
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<LibraryInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl GraphManifest {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| {
            Error::new(ErrorKind::DeserializationFailed, e.to_string())
                .with_operation("manifest::parse")
                .with_context("line", e.line().to_string())
                .set_source(e)
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::from(e)
                .with_operation("manifest::load")
                .with_context("path", path.display().to_string())
        })?;
        Self::from_json(&text).map_err(|e| {
            e.with_operation("manifest::load")
                .with_context("path", path.display().to_string())
        })
    }

    /// Build the in-memory graph, rejecting duplicate names and edges to
    /// files that are not listed.
    pub fn into_graph(self) -> Result<ProjectGraph> {
        let mut graph = ProjectGraph::new();
        let mut edges = Vec::with_capacity(self.files.len());

        for entry in self.files {
            let file = ResolvedFile {
                source_name: entry.source_name,
                library: entry.library,
            };
            edges.push((file.source_name.clone(), entry.dependencies));
            graph.add_file(file)?;
        }

        for (from, deps) in &edges {
            for to in deps {
                graph.add_dependency(from, to)?;
            }
        }

        debug!(
            files = graph.len(),
            edges = graph.edge_count(),
            "built dependency graph from manifest"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DependencyGraph;

    #[test]
    fn test_parse_minimal_entry() {
        let manifest = GraphManifest::from_json(r#"{"files":[{"sourceName":"A.sol"}]}"#).unwrap();
        assert_eq!(manifest.files.len(), 1);
        assert!(manifest.files[0].library.is_none());
        assert!(manifest.files[0].dependencies.is_empty());
    }

    #[test]
    fn test_forward_references_resolve() {
        let manifest = GraphManifest::from_json(
            r#"{"files":[
                {"sourceName":"A.sol","dependencies":["B.sol"]},
                {"sourceName":"B.sol","dependencies":["A.sol"]}
            ]}"#,
        )
        .unwrap();
        let graph = manifest.into_graph().unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 2);

        let b = graph.file("B.sol").unwrap().clone();
        assert_eq!(graph.dependencies(&b)[0].source_name, "A.sol");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = GraphManifest::from_json(r#"{"files":[{"sourceName":"A.sol","lib":true}]}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
    }

    #[test]
    fn test_dangling_dependency_rejected() {
        let manifest = GraphManifest::from_json(
            r#"{"files":[{"sourceName":"A.sol","dependencies":["Nope.sol"]}]}"#,
        )
        .unwrap();
        let err = manifest.into_graph().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GraphInvalid);
    }
}
