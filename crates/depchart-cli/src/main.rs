use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use depchart::{DepchartOptions, run_main};
use depchart_core::Result;

#[derive(Parser, Debug)]
#[command(
    name = "depchart",
    about = "depchart: draw a project's file dependencies as a flowchart",
    version
)]
pub struct Cli {
    /// Source names to use as roots (default: every project file)
    #[arg(value_name = "SOURCE_NAME")]
    source_names: Vec<String>,

    /// Draw dependencies on library files as well
    #[arg(long = "include-libraries", default_value_t = false)]
    include_libraries: bool,

    /// Project root containing depchart.toml and the dependency graph
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = DepchartOptions {
        root: args.root,
        source_names: args.source_names,
        include_libraries: args.include_libraries,
    };

    match run_main(&opts) {
        Ok(path) => {
            eprintln!("Flowchart written to {}", path.display());
        }
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            return Err(e);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
