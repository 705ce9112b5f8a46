use crate::error::Result;
use crate::project::{ProjectTasks, Task};
use serde::{Deserialize, Serialize};

/// A GitHub issue derived from one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub title: String,
    pub body: String,
    pub milestone: String,
    pub phase: String,
    pub task: Task,
}

/// The subset of an [`IssueRecord`] emitted for programmatic use. Field order
/// is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueExport {
    pub title: String,
    pub body: String,
    pub milestone: String,
    pub phase: String,
}

impl From<&IssueRecord> for IssueExport {
    fn from(issue: &IssueRecord) -> Self {
        Self {
            title: issue.title.clone(),
            body: issue.body.clone(),
            milestone: issue.milestone.clone(),
            phase: issue.phase.clone(),
        }
    }
}

pub fn format_title(milestone_key: &str, task_name: &str) -> String {
    format!("[{milestone_key}] {task_name}")
}

/// Issue body in the layout the issue import tooling expects. The trailing
/// `<comments>` block is left empty for manual annotation.
pub fn format_body(task: &Task, phase: &str) -> String {
    format!(
        "### Description\n\
         {description}\n\
         \n\
         **Success Criteria:** {success_criteria}\n\
         \n\
         **Unit Tests:** {unit_tests}\n\
         \n\
         **Phase:** {phase}\n\
         \n\
         \n\
         ## Comments on the Issue (you are @copilot in this section)\n\
         \n\
         <comments>\n\
         \n\
         </comments>",
        description = task.description,
        success_criteria = task.success_criteria,
        unit_tests = task.unit_tests,
    )
}

/// One issue per task, flattened in milestone order then task order.
pub fn generate_issues(project: &ProjectTasks) -> Result<Vec<IssueRecord>> {
    let mut issues = Vec::new();
    for milestone in project.milestones()? {
        for task in milestone.tasks {
            issues.push(IssueRecord {
                title: format_title(&milestone.key, &task.name),
                body: format_body(&task, &milestone.phase),
                milestone: milestone.key.clone(),
                phase: milestone.phase.clone(),
                task,
            });
        }
    }
    Ok(issues)
}
