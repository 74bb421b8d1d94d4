//! Domain models for the project board
//!
//! Contains the project records and field validation, without any I/O
//! or presentation concerns.

mod id;
mod project;
pub mod validation;

pub use id::{IdError, ProjectId};
pub use project::{Project, ProjectStatus, StatusParseError};
pub use validation::{validate, Validatable, Value};
