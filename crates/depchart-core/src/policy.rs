//! Per-file decisions supplied by the project being diagrammed.

use depchart_error::{Error, Result};
use regex::Regex;

use crate::file::ResolvedFile;

/// Pluggable per-file decision logic.
///
/// Both methods are optional; the defaults hide nothing and classify nothing.
/// Implementations must be pure: a renderer may call them several times for
/// the same file.
pub trait FilePolicy {
    /// Return true to suppress the file and every edge pointing at it.
    fn ignore(&self, _file: &ResolvedFile) -> bool {
        false
    }

    /// Visual class to attach to the file's node, if any.
    fn classify(&self, _file: &ResolvedFile) -> Option<String> {
        None
    }
}

/// Policy that keeps every file and assigns no classes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPolicy;

impl FilePolicy for NoPolicy {}

/// A source-name pattern mapped to a visual class.
#[derive(Debug, Clone)]
pub struct ClassRule {
    pattern: Regex,
    class: String,
}

impl ClassRule {
    pub fn new(pattern: &str, class: impl Into<String>) -> Result<Self> {
        let class = class.into();
        if !is_class_name(&class) {
            return Err(
                Error::config_invalid("class names must be letters, digits, '_' or '-'")
                    .with_operation("policy::class_rule")
                    .with_context("class", class),
            );
        }
        Ok(Self {
            pattern: compile(pattern)?,
            class,
        })
    }

    fn matches(&self, file: &ResolvedFile) -> bool {
        self.pattern.is_match(&file.source_name)
    }
}

/// Regex-driven policy built from project configuration.
///
/// A file is ignored when any ignore pattern matches its source name; its
/// class comes from the first class rule that matches.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    ignore: Vec<Regex>,
    classes: Vec<ClassRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore(mut self, pattern: &str) -> Result<Self> {
        self.ignore.push(compile(pattern)?);
        Ok(self)
    }

    pub fn with_class(mut self, rule: ClassRule) -> Self {
        self.classes.push(rule);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ignore.is_empty() && self.classes.is_empty()
    }
}

impl FilePolicy for RuleSet {
    fn ignore(&self, file: &ResolvedFile) -> bool {
        self.ignore.iter().any(|re| re.is_match(&file.source_name))
    }

    fn classify(&self, file: &ResolvedFile) -> Option<String> {
        self.classes
            .iter()
            .find(|rule| rule.matches(file))
            .map(|rule| rule.class.clone())
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        Error::config_invalid(e.to_string())
            .with_operation("policy::compile")
            .with_context("pattern", pattern)
            .set_source(e)
    })
}

/// Whether `name` can be written unquoted in a Mermaid `class` statement.
pub fn is_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
