//! Field validation
//!
//! Checks a single text or numeric value against an optional set of
//! constraints. Every constraint that is present must hold; absent ones are
//! satisfied.
//!
//! Bounds are strict: a text of exactly `min_length` characters fails, as does
//! a number equal to `min`. A constraint set to zero (or NaN for numeric
//! bounds) counts as absent. Both behaviours are relied on by the form rules
//! in [`crate::board`].

use std::fmt;

/// A value to validate
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// A value together with the constraints it must satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates a validatable value with no constraints
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Shorthand for [`validate`]
    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

/// Length constraints of zero are treated as absent
fn length_bound(bound: Option<usize>) -> Option<usize> {
    bound.filter(|&n| n != 0)
}

/// Numeric constraints of zero or NaN are treated as absent
fn numeric_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|n| *n != 0.0 && !n.is_nan())
}

/// Reads a number the way a numeric form field does
///
/// Blank input is zero; anything unparsable is NaN, which fails every bound.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Returns true if the value satisfies every present constraint
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required && input.value.to_string().trim().is_empty() {
        tracing::trace!(value = %input.value, "required constraint failed");
        is_valid = false;
    }

    if let Value::Text(text) = &input.value {
        let len = text.chars().count();

        if let Some(min_length) = length_bound(input.min_length) {
            if len <= min_length {
                tracing::trace!(len, min_length, "min_length constraint failed");
                is_valid = false;
            }
        }

        if let Some(max_length) = length_bound(input.max_length) {
            if len >= max_length {
                tracing::trace!(len, max_length, "max_length constraint failed");
                is_valid = false;
            }
        }
    }

    if let Value::Number(n) = input.value {
        // NaN never satisfies a bound
        if let Some(min) = numeric_bound(input.min) {
            if n.is_nan() || n <= min {
                tracing::trace!(value = n, min, "min constraint failed");
                is_valid = false;
            }
        }

        if let Some(max) = numeric_bound(input.max) {
            if n.is_nan() || n >= max {
                tracing::trace!(value = n, max, "max constraint failed");
                is_valid = false;
            }
        }
    }

    is_valid
}
