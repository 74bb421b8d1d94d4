//! Project domain model
//!
//! Projects are the cards on the board. They are created active and move
//! between the active and finished lists; nothing else about them changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProjectId;

/// Status of a project, which also names the list it is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Finished,
}

impl ProjectStatus {
    /// Both statuses in board order
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }

    /// Returns the other status
    pub fn other(&self) -> Self {
        match self {
            ProjectStatus::Active => ProjectStatus::Finished,
            ProjectStatus::Finished => ProjectStatus::Active,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Invalid project status '{0}': expected 'active' or 'finished'")]
pub struct StatusParseError(String);

impl FromStr for ProjectStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "finished" => Ok(ProjectStatus::Finished),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// A project record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new active project
    pub(crate) fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human-readable head count, e.g. "1 person" or "3 people"
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.people)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project(people: u32) -> Project {
        Project::new(ProjectId::generate("Test"), "Test", "A test project", people)
    }

    #[test]
    fn new_project_is_active() {
        let project = make_project(2);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.title, "Test");
        assert_eq!(project.description, "A test project");
    }

    #[test]
    fn people_label_singular() {
        assert_eq!(make_project(1).people_label(), "1 person");
    }

    #[test]
    fn people_label_plural() {
        assert_eq!(make_project(3).people_label(), "3 people");
        assert_eq!(make_project(0).people_label(), "0 people");
    }

    #[test]
    fn status_parse() {
        assert_eq!("active".parse::<ProjectStatus>().unwrap(), ProjectStatus::Active);
        assert_eq!("FINISHED".parse::<ProjectStatus>().unwrap(), ProjectStatus::Finished);
        assert_eq!(" finished ".parse::<ProjectStatus>().unwrap(), ProjectStatus::Finished);
        assert!("done".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn status_other() {
        assert_eq!(ProjectStatus::Active.other(), ProjectStatus::Finished);
        assert_eq!(ProjectStatus::Finished.other(), ProjectStatus::Active);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Finished).unwrap(),
            "\"finished\""
        );
    }

    #[test]
    fn serde_roundtrip() {
        let project = make_project(4);
        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, project);
    }
}
