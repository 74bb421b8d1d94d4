//! Script runner
//!
//! Drives a fresh board from a line-oriented script, one command per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! add Build API | Design the REST API | 3
//! move #1 finished
//! list
//! ```
//!
//! `move` takes a project ID (`p-7f2b4c1`) or a 1-based position in
//! insertion order (`#1`). The whole script is parsed before anything runs.

use std::cell::Cell;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;

use super::output::Output;
use crate::board::{Board, FormField, ProjectForm};
use crate::domain::{Project, ProjectId, ProjectStatus, StatusParseError};
use crate::store::MoveOutcome;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: expected 'add <title> | <description> | <people>'")]
    MalformedAdd { line: usize },

    #[error("line {line}: expected 'move <id|#n> <active|finished>'")]
    MalformedMove { line: usize },

    #[error("line {line}: invalid project reference '{reference}'")]
    InvalidReference { line: usize, reference: String },

    #[error("line {line}: {source}")]
    InvalidStatus {
        line: usize,
        #[source]
        source: StatusParseError,
    },
}

/// How a script names a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRef {
    Id(ProjectId),
    /// 1-based position in insertion order
    Position(usize),
}

impl ProjectRef {
    fn parse(s: &str, line: usize) -> Result<Self, ScriptError> {
        let invalid = || ScriptError::InvalidReference {
            line,
            reference: s.to_string(),
        };

        match s.strip_prefix('#') {
            Some(n) => match n.parse::<usize>() {
                Ok(pos) if pos > 0 => Ok(ProjectRef::Position(pos)),
                _ => Err(invalid()),
            },
            None => s.parse().map(ProjectRef::Id).map_err(|_| invalid()),
        }
    }

    fn resolve<'a>(&'a self, projects: &'a [Project]) -> Option<&'a ProjectId> {
        match self {
            ProjectRef::Id(id) => Some(id),
            ProjectRef::Position(pos) => projects.get(pos - 1).map(|p| &p.id),
        }
    }
}

/// One script command
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Add(ProjectForm),
    Move {
        target: ProjectRef,
        status: ProjectStatus,
    },
    List,
}

/// Parses a script into `(line number, step)` pairs
pub fn parse(source: &str) -> Result<Vec<(usize, Step)>, ScriptError> {
    let mut steps = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let (command, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
        let rest = rest.trim();

        let step = match command {
            "add" => {
                let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
                let [title, description, people] = fields.as_slice() else {
                    return Err(ScriptError::MalformedAdd { line });
                };
                Step::Add(ProjectForm::new(*title, *description, *people))
            }
            "move" => {
                let args: Vec<&str> = rest.split_whitespace().collect();
                let [reference, status] = args.as_slice() else {
                    return Err(ScriptError::MalformedMove { line });
                };
                Step::Move {
                    target: ProjectRef::parse(reference, line)?,
                    status: status
                        .parse::<ProjectStatus>()
                        .map_err(|source| ScriptError::InvalidStatus { line, source })?,
                }
            }
            "list" => Step::List,
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: other.to_string(),
                })
            }
        };

        steps.push((line, step));
    }

    Ok(steps)
}

/// What happened on one script line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Added {
        line: usize,
        id: ProjectId,
        title: String,
    },
    Rejected {
        line: usize,
        field: FormField,
        message: String,
    },
    Moved {
        line: usize,
        id: Option<ProjectId>,
        status: ProjectStatus,
        outcome: MoveOutcome,
    },
    Listed {
        line: usize,
    },
}

/// Result of a script run
#[derive(Debug, Serialize)]
pub struct Report {
    pub notifications: usize,
    pub events: Vec<Event>,
    pub active: Vec<Project>,
    pub finished: Vec<Project>,
}

/// Runs parsed steps against a board
///
/// Rejected input is reported and the run continues, like the form does.
pub fn execute(board: &mut Board, steps: &[(usize, Step)], output: &Output) -> Report {
    let notifications = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&notifications);
    let subscription = board
        .store_mut()
        .subscribe(move |_| counter.set(counter.get() + 1));

    let mut events = Vec::with_capacity(steps.len());

    for (line, step) in steps {
        let line = *line;
        let event = match step {
            Step::Add(form) => match board.submit(form) {
                Ok(id) => {
                    output.line(&format!("Created project: {} - {}", id, form.title));
                    Event::Added {
                        line,
                        id,
                        title: form.title.clone(),
                    }
                }
                Err(err) => {
                    output.alert(&err.to_string());
                    Event::Rejected {
                        line,
                        field: err.field(),
                        message: err.to_string(),
                    }
                }
            },
            Step::Move { target, status } => {
                let id = target.resolve(board.store().projects()).cloned();
                let outcome = match &id {
                    Some(id) => board.drop_project(*status, id),
                    None => MoveOutcome::NotFound,
                };

                output.line(&describe_move(target, id.as_ref(), *status, outcome));
                Event::Moved {
                    line,
                    id,
                    status: *status,
                    outcome,
                }
            }
            Step::List => {
                output.board(board);
                Event::Listed { line }
            }
        };

        events.push(event);
    }

    board.store_mut().unsubscribe(subscription);

    Report {
        notifications: notifications.get(),
        events,
        active: board.list(ProjectStatus::Active).projects().to_vec(),
        finished: board.list(ProjectStatus::Finished).projects().to_vec(),
    }
}

fn describe_move(
    target: &ProjectRef,
    id: Option<&ProjectId>,
    status: ProjectStatus,
    outcome: MoveOutcome,
) -> String {
    match (outcome, id) {
        (MoveOutcome::Moved, Some(id)) => format!("Moved {} to {}", id, status),
        (MoveOutcome::Unchanged, Some(id)) => format!("Unchanged: {} is already {}", id, status),
        _ => match target {
            ProjectRef::Id(id) => format!("Project not found: {}", id),
            ProjectRef::Position(pos) => format!("Project not found: #{}", pos),
        },
    }
}

/// Reads a script from a file, or stdin when the path is `-`
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        return Ok(source);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read script: {}", path.display()))
}

/// Runs the `run` command
pub fn run(output: &Output, board: &mut Board, path: &Path) -> Result<()> {
    let source = read_source(path)?;
    let steps = parse(&source)?;
    tracing::debug!(steps = steps.len(), script = %path.display(), "script parsed");

    let report = execute(board, &steps, output);
    tracing::debug!(notifications = report.notifications, "script finished");

    if output.is_json() {
        output.data(&report);
    } else {
        output.line("");
        output.board(board);
    }

    Ok(())
}
