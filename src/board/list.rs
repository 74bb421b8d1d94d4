//! Status-filtered project list view

use crate::domain::{Project, ProjectStatus};
use crate::store::View;

/// One column of the board
#[derive(Debug, Clone)]
pub struct ProjectList {
    status: ProjectStatus,
    assigned: Vec<Project>,
    droppable: bool,
    renders: usize,
}

impl ProjectList {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            assigned: Vec::new(),
            droppable: false,
            renders: 0,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Projects shown in this list, in store order
    pub fn projects(&self) -> &[Project] {
        &self.assigned
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Heading text, e.g. "ACTIVE PROJECTS"
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    /// Status assigned to a project dropped onto this list
    pub fn drop_status(&self) -> ProjectStatus {
        self.status
    }

    /// A dragged project is hovering over this list
    pub fn drag_over(&mut self) {
        self.droppable = true;
    }

    /// A dragged project left this list
    pub fn drag_leave(&mut self) {
        self.droppable = false;
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Number of snapshots rendered so far
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl View for ProjectList {
    fn on_snapshot(&mut self, projects: &[Project]) {
        self.assigned = projects
            .iter()
            .filter(|p| p.status == self.status)
            .cloned()
            .collect();
        self.renders += 1;

        tracing::trace!(list = %self.status, shown = self.assigned.len(), "list rendered");
    }
}
