//! depchart command-line interface.
//!
pub mod output;
pub mod pipeline;

use std::path::PathBuf;

use depchart_core::Result;

pub use output::{DOCUMENT_FILE_NAME, load_template, open_in_viewer, write_document};
pub use pipeline::{FlowchartOutput, generate_flowchart};

/// Options for running depchart.
#[derive(Debug, Clone)]
pub struct DepchartOptions {
    /// Project root holding `depchart.toml` and the dependency graph manifest.
    pub root: PathBuf,
    /// Source names to render as roots; empty means every project file.
    pub source_names: Vec<String>,
    pub include_libraries: bool,
}

impl Default for DepchartOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_names: Vec::new(),
            include_libraries: false,
        }
    }
}

/// Main entry point: render the flowchart document, write it to the cache
/// directory and open it when the project asks for that.
///
/// Returns the path of the written document.
pub fn run_main(opts: &DepchartOptions) -> Result<PathBuf> {
    let output = generate_flowchart(opts)?;
    let path = write_document(&output.cache_dir, &output.html)?;

    if output.open {
        open_in_viewer(&path)?;
    }

    Ok(path)
}
