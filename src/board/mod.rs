//! # Board
//!
//! Application context tying the store to its views.
//!
//! A [`Board`] owns one [`ProjectStore`] and the two [`ProjectList`] views
//! (active, then finished), attached as subscribers when the board is built.
//! Front ends talk to the board; the board talks to the store.
//!
//! ## Flows
//!
//! - Submit: [`ProjectForm::gather`] → [`ProjectStore::add_project`] → both
//!   lists re-render.
//! - Drag and drop: [`Board::drag_over`] / [`Board::drag_leave`] toggle the
//!   target highlight; [`Board::drop_project`] moves the project to the
//!   target list's status.

mod form;
mod list;

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::config::InputRules;
use crate::domain::{ProjectId, ProjectStatus};
use crate::store::{MoveOutcome, ProjectStore};

pub use form::{FormField, InputError, ProjectDraft, ProjectForm};
pub use list::ProjectList;

/// The project board
pub struct Board {
    store: ProjectStore,
    rules: InputRules,
    active: Rc<RefCell<ProjectList>>,
    finished: Rc<RefCell<ProjectList>>,
}

impl Board {
    /// Creates an empty board with both lists subscribed
    pub fn new(rules: InputRules) -> Self {
        let mut store = ProjectStore::new();
        let active = Rc::new(RefCell::new(ProjectList::new(ProjectStatus::Active)));
        let finished = Rc::new(RefCell::new(ProjectList::new(ProjectStatus::Finished)));

        store.attach(Rc::clone(&active));
        store.attach(Rc::clone(&finished));

        Self {
            store,
            rules,
            active,
            finished,
        }
    }

    /// Validates the form and adds the project
    pub fn submit(&mut self, form: &ProjectForm) -> Result<ProjectId, InputError> {
        let draft = form.gather(&self.rules)?;
        Ok(self.add_draft(draft))
    }

    /// Adds an already validated project
    pub fn add_draft(&mut self, draft: ProjectDraft) -> ProjectId {
        self.store
            .add_project(draft.title, draft.description, draft.people)
    }

    /// Marks the list for `status` as a drop target
    pub fn drag_over(&mut self, status: ProjectStatus) {
        self.list_cell(status).borrow_mut().drag_over();
    }

    /// Clears the drop-target mark on the list for `status`
    pub fn drag_leave(&mut self, status: ProjectStatus) {
        self.list_cell(status).borrow_mut().drag_leave();
    }

    /// Drops a project onto the list for `target`
    pub fn drop_project(&mut self, target: ProjectStatus, id: &ProjectId) -> MoveOutcome {
        let status = {
            let mut list = self.list_cell(target).borrow_mut();
            list.drag_leave();
            list.drop_status()
        };
        self.store.move_project(id, status)
    }

    /// Returns the list view for a status
    pub fn list(&self, status: ProjectStatus) -> Ref<'_, ProjectList> {
        self.list_cell(status).borrow()
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Mutable store access, for registering extra subscribers
    pub fn store_mut(&mut self) -> &mut ProjectStore {
        &mut self.store
    }

    pub fn rules(&self) -> &InputRules {
        &self.rules
    }

    fn list_cell(&self, status: ProjectStatus) -> &Rc<RefCell<ProjectList>> {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(InputRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(board: &mut Board, title: &str) -> ProjectId {
        board
            .submit(&ProjectForm::new(title, "A long enough description", "3"))
            .unwrap()
    }

    #[test]
    fn new_board_has_two_subscribed_lists() {
        let board = Board::default();

        assert_eq!(board.store().subscriber_count(), 2);
        assert!(board.list(ProjectStatus::Active).is_empty());
        assert!(board.list(ProjectStatus::Finished).is_empty());
    }

    #[test]
    fn submit_renders_into_active_list() {
        let mut board = Board::default();
        let id = submit(&mut board, "Build API");

        let active = board.list(ProjectStatus::Active);
        assert_eq!(active.len(), 1);
        assert_eq!(active.projects()[0].id, id);
        assert_eq!(active.render_count(), 1);
        assert_eq!(board.list(ProjectStatus::Finished).render_count(), 1);
    }

    #[test]
    fn invalid_submit_leaves_store_untouched() {
        let mut board = Board::default();
        let result = board.submit(&ProjectForm::new("Build API", "short", "3"));

        assert!(result.is_err());
        assert!(board.store().is_empty());
        assert_eq!(board.list(ProjectStatus::Active).render_count(), 0);
    }

    #[test]
    fn drop_moves_between_lists() {
        let mut board = Board::default();
        let first = submit(&mut board, "First");
        let second = submit(&mut board, "Second");

        board.drag_over(ProjectStatus::Finished);
        assert!(board.list(ProjectStatus::Finished).is_droppable());

        let outcome = board.drop_project(ProjectStatus::Finished, &first);
        assert_eq!(outcome, MoveOutcome::Moved);
        assert!(!board.list(ProjectStatus::Finished).is_droppable());

        let active = board.list(ProjectStatus::Active);
        assert_eq!(active.len(), 1);
        assert_eq!(active.projects()[0].id, second);

        let finished = board.list(ProjectStatus::Finished);
        assert_eq!(finished.len(), 1);
        assert_eq!(finished.projects()[0].id, first);
    }

    #[test]
    fn drop_on_same_list_does_not_rerender() {
        let mut board = Board::default();
        let id = submit(&mut board, "First");

        let outcome = board.drop_project(ProjectStatus::Active, &id);
        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(board.list(ProjectStatus::Active).render_count(), 1);
    }

    #[test]
    fn drag_leave_clears_highlight() {
        let mut board = Board::default();
        board.drag_over(ProjectStatus::Active);
        board.drag_leave(ProjectStatus::Active);

        assert!(!board.list(ProjectStatus::Active).is_droppable());
    }

    #[test]
    fn extra_subscribers_see_board_changes() {
        let mut board = Board::default();
        let seen = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&seen);
        board
            .store_mut()
            .subscribe(move |projects| *counter.borrow_mut() = projects.len());

        submit(&mut board, "First");
        submit(&mut board, "Second");

        assert_eq!(*seen.borrow(), 2);
    }
}
