//! Output handling: template loading, document persistence and viewing.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use depchart_core::{Error, Result};
use depchart_mermaid::FLOWCHART_TEMPLATE;

/// Name of the generated document inside the cache directory.
pub const DOCUMENT_FILE_NAME: &str = "graph.html";

/// Read a custom template, or fall back to the built-in one.
pub fn load_template(path: Option<&Path>) -> Result<Cow<'static, str>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(FLOWCHART_TEMPLATE));
    };

    if !path.is_file() {
        return Err(Error::file_not_found(path.display().to_string())
            .with_operation("output::load_template"));
    }
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::from(e)
            .with_operation("output::load_template")
            .with_context("path", path.display().to_string())
    })?;
    debug!(path = %path.display(), "loaded custom template");
    Ok(Cow::Owned(text))
}

/// Write `html` to `<cache_dir>/graph.html`, creating directories as needed.
pub fn write_document(cache_dir: &Path, html: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(cache_dir).map_err(|e| {
        Error::from(e)
            .with_operation("output::write_document")
            .with_context("dir", cache_dir.display().to_string())
    })?;

    let path = cache_dir.join(DOCUMENT_FILE_NAME);
    std::fs::write(&path, html).map_err(|e| {
        Error::from(e)
            .with_operation("output::write_document")
            .with_context("path", path.display().to_string())
    })?;

    info!(path = %path.display(), bytes = html.len(), "document written");
    Ok(path)
}

/// Hand the document to the platform's default opener without waiting for it.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    let program = command.get_program().to_string_lossy().into_owned();

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            Error::viewer_failed(format!("failed to launch {program}"))
                .with_operation("output::open_in_viewer")
                .with_context("path", path.display().to_string())
                .set_source(e)
        })?;

    info!(program = %program, path = %path.display(), "opened document");
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(windows)]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", windows)))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use depchart_core::ErrorKind;

    #[test]
    fn test_builtin_template_by_default() {
        let template = load_template(None).unwrap();
        assert!(matches!(template, Cow::Borrowed(_)));
    }

    #[test]
    fn test_missing_custom_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_template(Some(&dir.path().join("nope.html"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }

    #[test]
    fn test_write_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("a").join("b");

        let path = write_document(&cache, "first").unwrap();
        assert_eq!(path, cache.join(DOCUMENT_FILE_NAME));
        write_document(&cache, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_into_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("cache");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = write_document(&blocker, "html").unwrap_err();
        assert_eq!(err.operation(), "output::write_document");
    }
}
