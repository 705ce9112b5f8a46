use crate::error::{IssueError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// One unit of work inside a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub success_criteria: String,
    pub unit_tests: String,
    pub status: String,
}

impl Task {
    /// Fields are read in the order the formatter consumes them, so the first
    /// absent key is the one reported.
    fn from_value(value: &Value, index: usize, milestone_location: &str) -> Result<Self> {
        let entry = format!("task #{}", index + 1);
        let obj = value.as_object().ok_or_else(|| IssueError::InvalidField {
            key: entry.clone(),
            location: milestone_location.to_string(),
            expected: "an object".to_string(),
        })?;
        let location = format!("{entry} of {milestone_location}");
        Ok(Self {
            name: require_text(obj, "name", &location)?,
            description: require_text(obj, "description", &location)?,
            success_criteria: require_text(obj, "success_criteria", &location)?,
            unit_tests: require_text(obj, "unit_tests", &location)?,
            status: require_text(obj, "status", &location)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Milestone
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub key: String,
    pub phase: String,
    pub tasks: Vec<Task>,
}

impl Milestone {
    fn from_value(key: &str, value: &Value) -> Result<Self> {
        let location = format!("milestone '{key}'");
        let obj = value.as_object().ok_or_else(|| IssueError::InvalidField {
            key: key.to_string(),
            location: "project tasks".to_string(),
            expected: "an object".to_string(),
        })?;

        let phase = require_text(obj, "phase", &location)?;
        let tasks = require(obj, "tasks", &location)?
            .as_array()
            .ok_or_else(|| IssueError::InvalidField {
                key: "tasks".to_string(),
                location: location.clone(),
                expected: "an array".to_string(),
            })?
            .iter()
            .enumerate()
            .map(|(i, task)| Task::from_value(task, i, &location))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            key: key.to_string(),
            phase,
            tasks,
        })
    }
}

// ---------------------------------------------------------------------------
// ProjectTasks
// ---------------------------------------------------------------------------

/// The parsed `project_tasks.json` document: milestone key to milestone, in
/// the order the keys appear in the file.
#[derive(Debug, Clone, Default)]
pub struct ProjectTasks {
    milestones: Map<String, Value>,
}

impl ProjectTasks {
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(IssueError::FileNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data).map_err(IssueError::MalformedInput)?;
        match value {
            Value::Object(milestones) => Ok(Self { milestones }),
            other => Err(IssueError::MalformedInput(serde::de::Error::custom(
                format!("expected a JSON object at the top level, found {}", kind(&other)),
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    pub fn milestone_keys(&self) -> impl Iterator<Item = &str> {
        self.milestones.keys().map(String::as_str)
    }

    /// Resolve every milestone in document order. Fails on the first missing
    /// or malformed field; no partial result is returned.
    pub fn milestones(&self) -> Result<Vec<Milestone>> {
        self.milestones
            .iter()
            .map(|(key, value)| Milestone::from_value(key, value))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Field lookup
// ---------------------------------------------------------------------------

fn require<'a>(obj: &'a Map<String, Value>, key: &str, location: &str) -> Result<&'a Value> {
    obj.get(key).ok_or_else(|| IssueError::MissingField {
        key: key.to_string(),
        location: location.to_string(),
    })
}

/// Strings are taken verbatim; any other JSON value is rendered compactly.
fn require_text(obj: &Map<String, Value>, key: &str, location: &str) -> Result<String> {
    Ok(match require(obj, key, location)? {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
