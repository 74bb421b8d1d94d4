//! Project Board - a two-list project tracker
//!
//! Projects are created through a validated form, held in a single
//! observable store, and moved between the active and finished lists by
//! drag-and-drop. Every mutation pushes a fresh snapshot to each subscribed
//! view, which keeps only the projects matching its own status.

pub mod board;
pub mod cli;
pub mod config;
pub mod domain;
pub mod store;

pub use board::{Board, ProjectForm};
pub use domain::{Project, ProjectId, ProjectStatus};
pub use store::{MoveOutcome, ProjectStore};
