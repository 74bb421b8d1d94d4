//! New-project form and its validation rules

use serde::Serialize;
use thiserror::Error;

use crate::config::InputRules;
use crate::domain::validation::parse_number;
use crate::domain::Validatable;

/// Form field, used to report which input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    #[default]
    Title,
    Description,
    People,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Description, FormField::People];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::People => "People",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        }
    }
}

/// Rejected form input
///
/// The message never says which field failed; `field` is kept for logs.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Invalid input, please try again!")]
    Invalid { field: FormField },
}

impl InputError {
    pub fn field(&self) -> FormField {
        match self {
            InputError::Invalid { field } => *field,
        }
    }
}

/// Validated form contents, ready for the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Raw text typed into the new-project form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectForm {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Returns the text of a field
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    /// Returns the text of a field for editing
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    /// Empties every field
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    /// Validates the form against the rules
    pub fn gather(&self, rules: &InputRules) -> Result<ProjectDraft, InputError> {
        let people = parse_number(&self.people);

        let checks = [
            (FormField::Title, Validatable::new(self.title.as_str()).required()),
            (
                FormField::Description,
                Validatable::new(self.description.as_str())
                    .required()
                    .min_length(rules.description_min_length),
            ),
            (
                FormField::People,
                Validatable::new(people)
                    .required()
                    .min(f64::from(rules.people_min))
                    .max(f64::from(rules.people_max)),
            ),
        ];

        if let Some((field, _)) = checks.iter().find(|(_, check)| !check.is_valid()) {
            tracing::debug!(field = field.label(), "form input rejected");
            return Err(InputError::Invalid { field: *field });
        }

        // A zero bound is ignored, so the count can still be out of range here
        let Some(people) = people_count(people) else {
            tracing::debug!(people, "people count out of range");
            return Err(InputError::Invalid {
                field: FormField::People,
            });
        };

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }
}

/// Integer part of a people count, if it fits in a `u32`
fn people_count(people: f64) -> Option<u32> {
    let whole = people.trunc();
    (0.0..=f64::from(u32::MAX))
        .contains(&whole)
        .then_some(whole as u32)
}
