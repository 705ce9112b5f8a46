use crate::issue::{IssueExport, IssueRecord};
use std::fmt;

const WIDE_RULE: usize = 80;
const NARROW_RULE: usize = 40;

// ---------------------------------------------------------------------------
// Human-readable listing
// ---------------------------------------------------------------------------

pub struct Listing<'a>(pub &'a [IssueRecord]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = "=".repeat(WIDE_RULE);
        writeln!(f, "{wide}")?;
        writeln!(f, "FORMATTED GITHUB ISSUES FROM PROJECT_TASKS.JSON")?;
        writeln!(f, "{wide}")?;
        writeln!(f)?;

        for (i, issue) in self.0.iter().enumerate() {
            writeln!(f, "Issue #{}", i + 1)?;
            writeln!(f, "{}", "-".repeat(NARROW_RULE))?;
            writeln!(f, "Title: {}", issue.title)?;
            writeln!(f)?;
            writeln!(f, "Body:")?;
            writeln!(f, "{}", issue.body)?;
            writeln!(f)?;
            writeln!(f, "Metadata:")?;
            writeln!(f, "  Milestone: {}", issue.milestone)?;
            writeln!(f, "  Phase: {}", issue.phase)?;
            writeln!(f, "  Status: {}", issue.task.status)?;
            writeln!(f)?;
            writeln!(f, "{wide}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// `gh issue create` commands
// ---------------------------------------------------------------------------

pub struct CliCommands<'a>(pub &'a [IssueRecord]);

impl fmt::Display for CliCommands<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GITHUB CLI COMMANDS TO CREATE ISSUES:")?;
        writeln!(f, "{}", "-".repeat(NARROW_RULE))?;
        writeln!(f)?;

        for (i, issue) in self.0.iter().enumerate() {
            writeln!(f, "# Issue {}: {}", i + 1, issue.task.name)?;
            writeln!(f, "gh issue create \\")?;
            writeln!(f, "  --title \"{}\" \\", escape_title(&issue.title))?;
            writeln!(f, "  --body \"{}\"", escape_body(&issue.body))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Only `"` is escaped; backslashes and shell metacharacters pass through.
pub fn escape_title(title: &str) -> String {
    title.replace('"', "\\\"")
}

/// Like [`escape_title`], and newlines become the two characters `\n`.
pub fn escape_body(body: &str) -> String {
    escape_title(body).replace('\n', "\\n")
}

// ---------------------------------------------------------------------------
// JSON export
// ---------------------------------------------------------------------------

/// Pretty JSON array of [`IssueExport`]s. serde_json leaves non-ASCII
/// characters unescaped.
pub fn export_json(issues: &[IssueRecord]) -> serde_json::Result<String> {
    let exports: Vec<IssueExport> = issues.iter().map(IssueExport::from).collect();
    serde_json::to_string_pretty(&exports)
}

pub fn render_json(issues: &[IssueRecord]) -> serde_json::Result<String> {
    Ok(format!(
        "JSON OUTPUT:\n{}\n{}\n",
        "-".repeat(NARROW_RULE),
        export_json(issues)?
    ))
}
