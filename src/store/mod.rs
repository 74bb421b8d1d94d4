//! # Project Store
//!
//! In-memory project collection with synchronous change notification.
//!
//! ## Notification Model
//!
//! Every mutation that changes state triggers exactly one notification
//! round. Subscribers are invoked in registration order, each with the full
//! project sequence in insertion order, before the mutator returns.
//!
//! | Operation | Notifies |
//! |-----------|----------|
//! | [`ProjectStore::add_project`] | always |
//! | [`ProjectStore::move_project`] | only when the status changes |
//! | [`ProjectStore::subscribe`] | never (no replay) |
//!
//! Mutators take `&mut self`, so a subscriber cannot reach back into the
//! store while a notification round is running.

mod subscriber;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::domain::{Project, ProjectId, ProjectStatus};

pub use subscriber::{Listener, SubscriptionId, View};

/// Result of a [`ProjectStore::move_project`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Status changed and subscribers were notified
    Moved,
    /// Project already had the requested status
    Unchanged,
    /// No project with that ID
    NotFound,
}

impl MoveOutcome {
    /// Returns true if the move changed state
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

/// The project store
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ProjectStore {
    /// Creates an empty store with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a project and notifies subscribers
    ///
    /// Input is stored as given; validation belongs to the caller.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let title = title.into();
        let id = ProjectId::generate(&title);
        let project = Project::new(id.clone(), title, description, people);

        tracing::debug!(id = %id, title = %project.title, people, "project added");

        self.projects.push(project);
        self.notify();
        id
    }

    /// Registers a listener for future notifications
    pub fn subscribe(&mut self, listener: impl FnMut(&[Project]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));

        tracing::debug!(subscription = %id, "subscriber registered");
        id
    }

    /// Subscribes a shared view
    ///
    /// The store keeps its own handle to the view, so the caller can keep
    /// reading it between notifications.
    pub fn attach<V: View + 'static>(&mut self, view: Rc<RefCell<V>>) -> SubscriptionId {
        self.subscribe(move |projects| view.borrow_mut().on_snapshot(projects))
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        let removed = self.listeners.len() != len_before;

        if removed {
            tracing::debug!(subscription = %id, "subscriber removed");
        }
        removed
    }

    /// Changes a project's status, notifying subscribers if it changed
    pub fn move_project(&mut self, id: &ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!(id = %id, "move ignored: project not found");
            return MoveOutcome::NotFound;
        };

        if project.status == new_status {
            tracing::debug!(id = %id, status = %new_status, "move ignored: status unchanged");
            return MoveOutcome::Unchanged;
        }

        project.status = new_status;
        tracing::debug!(id = %id, status = %new_status, "project moved");

        self.notify();
        MoveOutcome::Moved
    }

    /// Returns all projects in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a project by ID
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Iterates over projects with the given status, in insertion order
    pub fn with_status(&self, status: ProjectStatus) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| p.status == status)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Runs one notification round
    fn notify(&mut self) {
        tracing::trace!(
            subscribers = self.listeners.len(),
            projects = self.projects.len(),
            "notifying subscribers"
        );

        let snapshot = self.projects.as_slice();
        for (_, listener) in self.listeners.iter_mut() {
            listener(snapshot);
        }
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
