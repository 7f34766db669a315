//! Project and completed-project models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::repository::{Draft, Record};

/// Lifecycle status of an open project.
///
/// Statuses outside the known set are kept verbatim so a saved board with an
/// unexpected value still loads and saves back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
    Unlisted(String),
}

impl ProjectStatus {
    /// The statuses offered in the admin form.
    pub const OPTIONS: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Unlisted(name) => name,
        }
    }

    pub fn is_listed(&self) -> bool {
        !matches!(self, ProjectStatus::Unlisted(_))
    }

    /// Title-cased badge text, e.g. "In Progress".
    pub fn label(&self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "planning" => ProjectStatus::Planning,
            "in-progress" => ProjectStatus::InProgress,
            "on-hold" => ProjectStatus::OnHold,
            "completed" => ProjectStatus::Completed,
            _ => ProjectStatus::Unlisted(value),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        match value {
            ProjectStatus::Unlisted(name) => name,
            listed => listed.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only the listed statuses are accepted.
impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ProjectStatus::from(s.to_string()) {
            ProjectStatus::Unlisted(other) => Err(format!("Unknown project status: {}", other)),
            listed => Ok(listed),
        }
    }
}

/// An open project on the Projects board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Percent complete, 0 to 100; absent when the form left it blank
    #[serde(default)]
    pub progress: Option<u8>,
    pub owner: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub progress: Option<u8>,
    pub owner: String,
    pub start_date: String,
    pub target_end_date: Option<String>,
}

impl Record for Project {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Draft for NewProject {
    type Record = Project;

    fn build(self, id: i64) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            progress: self.progress,
            owner: self.owner,
            start_date: self.start_date,
            target_end_date: self.target_end_date,
        }
    }
}

/// A finished project shown in the Completed section.
///
/// This is its own collection: a project created as completed gets a copy
/// here, and the two records are independent afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedProject {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub impact: String,
    /// ISO-8601 date, e.g. "2025-12-15"
    pub completed_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompletedProject {
    pub title: String,
    pub description: String,
    pub impact: String,
    pub completed_date: String,
}

impl Record for CompletedProject {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Draft for NewCompletedProject {
    type Record = CompletedProject;

    fn build(self, id: i64) -> CompletedProject {
        CompletedProject {
            id,
            title: self.title,
            description: self.description,
            impact: self.impact,
            completed_date: self.completed_date,
        }
    }
}
