//! Validator command

use anyhow::Result;
use clap::Args;

use super::output::Output;
use crate::domain::validation::parse_number;
use crate::domain::{Validatable, Value};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Value to check
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Treat the value as a number
    #[arg(long)]
    pub number: bool,

    /// Value must not be blank
    #[arg(long)]
    pub required: bool,

    /// Text must be longer than this
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Text must be shorter than this
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Number must be greater than this
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Number must be less than this
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<f64>,
}

impl CheckArgs {
    /// Numbers are read like a form field: blank is zero, garbage is NaN
    fn validatable(&self) -> Validatable {
        let value = if self.number {
            Value::Number(parse_number(&self.value))
        } else {
            Value::Text(self.value.clone())
        };

        Validatable {
            value,
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }
}

pub fn run(args: &CheckArgs, output: &Output) -> Result<()> {
    let input = args.validatable();
    let valid = input.is_valid();
    tracing::debug!(value = %input.value, valid, "value checked");

    if output.is_json() {
        output.data(&serde_json::json!({
            "value": args.value,
            "valid": valid,
        }));
    } else if valid {
        output.success("valid");
    }

    if !valid {
        anyhow::bail!("invalid");
    }

    Ok(())
}
