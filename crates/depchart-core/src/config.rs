//! Project configuration read from `depchart.toml`.
//!
//! Every field is optional and defaulted on its own, so an absent file, an
//! empty file and a file with a single key are all valid.

use std::path::{Path, PathBuf};

use depchart_error::{Error, ErrorKind, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::policy::{ClassRule, RuleSet};

pub const CONFIG_FILE_NAME: &str = "depchart.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub paths: PathsConfig,
    pub diagrams: DiagramsConfig,
}

/// Locations the host environment provides, relative to the project root.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Dependency graph manifest written by the build.
    pub graph: PathBuf,
    /// Directory receiving the generated document.
    pub cache: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            graph: PathBuf::from("cache/dependency-graph.json"),
            cache: PathBuf::from("cache"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramsConfig {
    /// Regexes over source names; matching files are left out of the diagram.
    pub ignore: Vec<String>,
    /// Ordered class rules; the first match decides a node's class.
    pub classes: Vec<ClassRuleConfig>,
    /// Custom HTML template containing the diagram placeholder.
    pub template: Option<PathBuf>,
    /// Open the document in the system viewer once written.
    pub open: bool,
}

impl Default for DiagramsConfig {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            classes: Vec::new(),
            template: None,
            open: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassRuleConfig {
    pub pattern: String,
    pub class: String,
}

impl ProjectConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            Error::new(ErrorKind::DeserializationFailed, e.message().to_string())
                .with_operation("config::parse")
                .set_source(e)
        })
    }

    /// Load `<root>/depchart.toml`, falling back to defaults when it is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(path = %path.display(), "no project config, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|e| {
            Error::from(e)
                .with_operation("config::load")
                .with_context("path", path.display().to_string())
        })?;
        let config = Self::from_toml(&text).map_err(|e| {
            e.with_operation("config::load")
                .with_context("path", path.display().to_string())
        })?;

        info!(
            path = %path.display(),
            ignore = config.diagrams.ignore.len(),
            classes = config.diagrams.classes.len(),
            "loaded project config"
        );
        Ok(config)
    }

    /// Compile the ignore and class settings into a policy.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let mut rules = RuleSet::new();
        for pattern in &self.diagrams.ignore {
            rules = rules.with_ignore(pattern)?;
        }
        for class in &self.diagrams.classes {
            rules = rules.with_class(ClassRule::new(&class.pattern, class.class.clone())?);
        }
        Ok(rules)
    }

    pub fn graph_path(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.graph)
    }

    pub fn cache_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.cache)
    }

    pub fn template_path(&self, root: &Path) -> Option<PathBuf> {
        self.diagrams.template.as_ref().map(|t| root.join(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::ResolvedFile;
    use crate::policy::FilePolicy;
    use pretty_assertions::assert_eq;
    use textwrap::dedent;

    #[test]
    fn test_empty_config_is_default() {
        let config = ProjectConfig::from_toml("").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert!(config.diagrams.open);
        assert_eq!(config.paths.cache, PathBuf::from("cache"));
    }

    #[test]
    fn test_full_config() {
        let text = dedent(
            r#"
            [paths]
            graph = "out/graph.json"

            [diagrams]
            ignore = ["^contracts/test/"]
            open = false
            template = "docs/chart.html"

            [[diagrams.classes]]
            pattern = "^contracts/interfaces/"
            class = "interface"
            "#,
        );
        let config = ProjectConfig::from_toml(&text).unwrap();

        let root = Path::new("/project");
        assert_eq!(config.graph_path(root), PathBuf::from("/project/out/graph.json"));
        assert_eq!(config.cache_dir(root), PathBuf::from("/project/cache"));
        assert_eq!(
            config.template_path(root),
            Some(PathBuf::from("/project/docs/chart.html"))
        );
        assert!(!config.diagrams.open);

        let rules = config.rule_set().unwrap();
        assert!(rules.ignore(&ResolvedFile::project("contracts/test/A.sol")));
        assert_eq!(
            rules.classify(&ResolvedFile::project("contracts/interfaces/IA.sol")),
            Some("interface".to_string())
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ProjectConfig::from_toml("[diagrams]\nignored = []\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
    }

    #[test]
    fn test_bad_pattern_surfaces_on_compile() {
        let config = ProjectConfig::from_toml("[diagrams]\nignore = [\"[\"]\n").unwrap();
        let err = config.rule_set().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
