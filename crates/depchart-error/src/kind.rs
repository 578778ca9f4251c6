//! Error kinds for depchart operations

use strum::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on the kind to decide how to report a failure; the message
/// and context carry the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid argument passed on the command line or to a function
    InvalidArgument,

    // =========================================================================
    // Project input errors
    // =========================================================================
    /// Invalid project configuration (bad regex, bad class name, ...)
    ConfigInvalid,

    /// The dependency graph manifest is inconsistent
    GraphInvalid,

    /// The HTML template cannot host a diagram
    TemplateInvalid,

    /// Deserialization of a manifest or config file failed
    DeserializationFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// The system viewer could not be launched
    ViewerFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ConfigInvalid.to_string(), "ConfigInvalid");
        assert_eq!(ErrorKind::GraphInvalid.as_str(), "GraphInvalid");
    }
}
