pub mod config;
pub mod file;
pub mod graph;
pub mod manifest;
pub mod policy;

pub use config::{ClassRuleConfig, DiagramsConfig, PathsConfig, ProjectConfig};
pub use depchart_error::{Error, ErrorKind, Result};
pub use file::{LibraryInfo, ResolvedFile};
pub use graph::{DependencyGraph, ProjectGraph};
pub use manifest::{GraphManifest, ManifestEntry};
pub use policy::{ClassRule, FilePolicy, NoPolicy, RuleSet, is_class_name};
