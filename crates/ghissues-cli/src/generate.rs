use anyhow::Context;
use ghissues_core::{
    issue::generate_issues,
    project::ProjectTasks,
    render::{render_json, CliCommands, Listing},
};
use std::path::Path;

pub fn run(path: &Path) -> anyhow::Result<()> {
    println!("Reading project tasks from: {}", path.display());

    let project = ProjectTasks::load(path)?;
    tracing::debug!(milestones = project.len(), "parsed project tasks");
    for key in project.milestone_keys() {
        tracing::debug!(milestone = %key, "queued milestone");
    }

    let issues = generate_issues(&project)
        .with_context(|| format!("failed to format issues from {}", path.display()))?;

    // Render everything up front so a failure leaves no partial blocks on stdout.
    let listing = Listing(&issues).to_string();
    let commands = CliCommands(&issues).to_string();
    let json = render_json(&issues).context("failed to serialize issues")?;

    println!("Found {} tasks to convert to issues\n", issues.len());
    print!("{listing}");
    print!("{commands}");
    print!("{json}");

    tracing::info!(issues = issues.len(), "formatted issues");
    Ok(())
}
