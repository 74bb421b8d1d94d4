//! TUI views

pub mod kanban;
pub mod popup;
