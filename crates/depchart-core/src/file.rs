//! Resolved source files.
use std::fmt;

use serde::{Deserialize, Serialize};

/// The external package a library file was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A node of the dependency graph: a project or library file that the host
/// build has already located and named.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedFile {
    /// Unique name used both as the diagram label and as the file's identity.
    pub source_name: String,
    pub library: Option<LibraryInfo>,
}

impl ResolvedFile {
    /// A file that belongs to the project under analysis.
    pub fn project(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            library: None,
        }
    }

    /// A file pulled in from an external package.
    pub fn library(source_name: impl Into<String>, library: LibraryInfo) -> Self {
        Self {
            source_name: source_name.into(),
            library: Some(library),
        }
    }

    pub fn is_library(&self) -> bool {
        self.library.is_some()
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl fmt::Display for ResolvedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.library {
            Some(LibraryInfo {
                name,
                version: Some(version),
            }) => write!(f, "{} ({}@{})", self.source_name, name, version),
            Some(LibraryInfo {
                name,
                version: None,
            }) => write!(f, "{} ({})", self.source_name, name),
            None => f.write_str(&self.source_name),
        }
    }
}
