//! Core processing pipeline: config → graph → flowchart → document.

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use depchart_core::{Error, GraphManifest, ProjectConfig, ProjectGraph, Result};
use depchart_mermaid::{RenderOptions, render_document, render_flowchart};

use crate::DepchartOptions;
use crate::output::load_template;

/// Everything produced for one run, before anything is written.
#[derive(Debug, Clone)]
pub struct FlowchartOutput {
    /// Mermaid flowchart text.
    pub diagram: String,
    /// Document with the flowchart substituted into the template.
    pub html: String,
    /// Directory the document belongs in.
    pub cache_dir: PathBuf,
    /// Whether the project wants the document opened after writing.
    pub open: bool,
}

/// Run the pipeline for one project.
///
/// 1. Load project configuration
/// 2. Load the dependency graph manifest
/// 3. Validate the requested roots
/// 4. Render the flowchart
/// 5. Substitute it into the document template
pub fn generate_flowchart(opts: &DepchartOptions) -> Result<FlowchartOutput> {
    let root = opts.root.as_path();

    // 1. Config
    let config = ProjectConfig::load(root)?;
    let rules = config.rule_set()?;

    // 2. Graph
    let load_start = Instant::now();
    let graph = GraphManifest::load(&config.graph_path(root))?.into_graph()?;
    info!(
        "Graph loading: {:.2}s ({} files, {} edges)",
        load_start.elapsed().as_secs_f64(),
        graph.len(),
        graph.edge_count()
    );

    // 3. Roots
    check_source_names(&graph, &opts.source_names)?;

    // 4. Render
    let render_start = Instant::now();
    let mut render_options = RenderOptions::new()
        .with_include_libraries(opts.include_libraries)
        .with_policy(&rules);
    if !opts.source_names.is_empty() {
        render_options = render_options.with_scope(opts.source_names.iter().cloned());
    }
    let diagram = render_flowchart(&graph, &render_options);
    info!(
        "Flowchart rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    // 5. Document
    let template = load_template(config.template_path(root).as_deref())?;
    let html = render_document(&template, &diagram)?;

    Ok(FlowchartOutput {
        diagram,
        html,
        cache_dir: config.cache_dir(root),
        open: config.diagrams.open,
    })
}

/// Every requested root must name a project file of the graph.
fn check_source_names(graph: &ProjectGraph, source_names: &[String]) -> Result<()> {
    for name in source_names {
        let Some(file) = graph.file(name) else {
            return Err(Error::source_not_found(name.as_str())
                .with_operation("pipeline::check_source_names"));
        };
        if file.is_library() {
            return Err(
                Error::invalid_argument("library files are never rendered as roots")
                    .with_operation("pipeline::check_source_names")
                    .with_context("source_name", name.as_str()),
            );
        }
    }
    Ok(())
}
