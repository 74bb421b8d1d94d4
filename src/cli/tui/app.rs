//! TUI application state and key handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use super::event::{Event, EventHandler};
use super::ui::Terminal;
use super::views;
use crate::board::{Board, FormField, ProjectForm};
use crate::domain::{Project, ProjectId, ProjectStatus};
use crate::store::MoveOutcome;

const HELP: &str = "h/l:list j/k:select n:new space:pick up/drop esc:cancel q:quit";

/// Input mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing the new-project form, cursor in the given field
    Form(FormField),
    /// Modal message, dismissed by any key
    Alert(String),
}

/// A project being carried between lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drag {
    pub id: ProjectId,
    pub title: String,
    /// List the project is currently held over
    pub over: ProjectStatus,
}

/// Application state
pub struct App {
    board: Board,
    form: ProjectForm,
    input_mode: InputMode,
    /// List with keyboard focus
    focus: ProjectStatus,
    /// Selected index in the active and finished lists
    selected: [usize; 2],
    drag: Option<Drag>,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            form: ProjectForm::default(),
            input_mode: InputMode::Normal,
            focus: ProjectStatus::Active,
            selected: [0, 0],
            drag: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal, events: &EventHandler) -> Result<()> {
        while !self.should_quit() {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize | Event::Tick => {}
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        views::kanban::draw(frame, self);

        match &self.input_mode {
            InputMode::Normal => {}
            InputMode::Form(field) => views::popup::draw_form(frame, self.form(), *field, self.board.rules()),
            InputMode::Alert(message) => views::popup::draw_alert(frame, message),
        }
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode.clone() {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Form(field) => self.handle_form_key(key, field),
            InputMode::Alert(_) => self.input_mode = InputMode::Normal,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('h') | KeyCode::Left => self.switch_list(ProjectStatus::Active),
            KeyCode::Char('l') | KeyCode::Right => self.switch_list(ProjectStatus::Finished),
            KeyCode::Tab | KeyCode::BackTab => self.switch_list(self.focus.other()),

            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),

            KeyCode::Char('n') => {
                self.cancel_drag();
                self.status_message = None;
                self.input_mode = InputMode::Form(FormField::Title);
            }

            KeyCode::Char(' ') => {
                if self.drag.is_some() {
                    self.drop_held();
                } else {
                    self.pick_up();
                }
            }
            KeyCode::Enter => {
                if self.drag.is_some() {
                    self.drop_held();
                }
            }
            KeyCode::Esc => {
                if self.drag.is_some() {
                    self.cancel_drag();
                    self.status_message = Some("Move cancelled".to_string());
                }
            }

            KeyCode::Char('?') => self.status_message = Some(HELP.to_string()),

            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, field: FormField) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Tab | KeyCode::Down => self.input_mode = InputMode::Form(field.next()),
            KeyCode::BackTab | KeyCode::Up => self.input_mode = InputMode::Form(field.prev()),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Backspace => {
                self.form.field_mut(field).pop();
            }
            KeyCode::Char(c) => self.form.field_mut(field).push(c),
            _ => {}
        }
    }

    /// Submits the form; the form is cleared whether or not it was valid
    fn submit_form(&mut self) {
        let result = self.board.submit(&self.form);
        let title = std::mem::take(&mut self.form.title);
        self.form.clear();

        match result {
            Ok(_) => {
                self.input_mode = InputMode::Normal;
                self.focus = ProjectStatus::Active;
                self.selected[0] = self.board.list(ProjectStatus::Active).len().saturating_sub(1);
                self.status_message = Some(format!("Added: {}", title));
            }
            Err(err) => {
                self.input_mode = InputMode::Alert(err.to_string());
            }
        }
    }

    /// Moves focus to a list, carrying the held project along
    fn switch_list(&mut self, status: ProjectStatus) {
        if let Some(drag) = &mut self.drag {
            if drag.over != status {
                self.board.drag_leave(drag.over);
                self.board.drag_over(status);
                drag.over = status;
            }
        }
        self.focus = status;
        self.clamp_selection();
    }

    fn move_selection(&mut self, delta: isize) {
        if self.drag.is_some() {
            return;
        }

        let len = self.board.list(self.focus).len();
        if len == 0 {
            return;
        }

        let index = &mut self.selected[list_index(self.focus)];
        *index = (*index as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Starts dragging the selected project
    fn pick_up(&mut self) {
        let Some(project) = self.selected_project().cloned() else {
            return;
        };

        self.board.drag_over(self.focus);
        self.status_message = Some(format!(
            "Moving '{}': h/l to choose a list, space to drop, esc to cancel",
            project.title
        ));
        self.drag = Some(Drag {
            id: project.id,
            title: project.title,
            over: self.focus,
        });
    }

    /// Drops the held project onto the list it is over
    fn drop_held(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        let outcome = self.board.drop_project(drag.over, &drag.id);
        self.status_message = Some(match outcome {
            MoveOutcome::Moved => format!("Moved '{}' to {}", drag.title, drag.over),
            MoveOutcome::Unchanged => format!("'{}' is already {}", drag.title, drag.over),
            MoveOutcome::NotFound => format!("'{}' no longer exists", drag.title),
        });

        self.focus = drag.over;
        if let Some(pos) = self
            .board
            .list(drag.over)
            .projects()
            .iter()
            .position(|p| p.id == drag.id)
        {
            self.selected[list_index(drag.over)] = pos;
        }
        self.clamp_selection();
    }

    fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.board.drag_leave(drag.over);
        }
    }

    /// Keeps both selections inside their lists
    fn clamp_selection(&mut self) {
        for status in ProjectStatus::ALL {
            let len = self.board.list(status).len();
            let index = &mut self.selected[list_index(status)];
            if *index >= len {
                *index = len.saturating_sub(1);
            }
        }
    }

    // Public accessors for views

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    pub fn focus(&self) -> ProjectStatus {
        self.focus
    }

    pub fn selected(&self, status: ProjectStatus) -> usize {
        self.selected[list_index(status)]
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let index = self.selected(self.focus);
        self.board
            .store()
            .with_status(self.focus)
            .nth(index)
    }

    pub fn drag(&self) -> Option<&Drag> {
        self.drag.as_ref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn list_index(status: ProjectStatus) -> usize {
    match status {
        ProjectStatus::Active => 0,
        ProjectStatus::Finished => 1,
    }
}
