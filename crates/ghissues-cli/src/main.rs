mod generate;
mod root;

use clap::Parser;
use ghissues_core::paths::project_tasks_path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ghissues",
    about = "Format .github/project_tasks.json as GitHub issues, gh commands, and JSON",
    version
)]
struct Cli {
    /// Project root (default: auto-detect from .github/ or .git/)
    #[arg(long, env = "GHISSUES_ROOT")]
    root: Option<PathBuf>,

    /// Project tasks file (default: <root>/.github/project_tasks.json)
    #[arg(long, env = "GHISSUES_FILE")]
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let path = cli
        .file
        .unwrap_or_else(|| project_tasks_path(&root::resolve_root(cli.root.as_deref())));

    if let Err(e) = generate::run(&path) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
