//! Output formatting for CLI commands

use serde::Serialize;

use crate::board::Board;
use crate::config;
use crate::domain::{Project, ProjectStatus};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<config::OutputFormat> for OutputFormat {
    fn from(format: config::OutputFormat) -> Self {
        match format {
            config::OutputFormat::Text => OutputFormat::Text,
            config::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints a user-facing alert (text only, ignored in JSON mode)
    pub fn alert(&self, message: &str) {
        if self.format == OutputFormat::Text {
            eprintln!("{}", message);
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        let json = match self.format {
            OutputFormat::Text => serde_json::to_string_pretty(data),
            OutputFormat::Json => serde_json::to_string(data),
        };
        if let Ok(json) = json {
            println!("{}", json);
        }
    }

    /// Prints a line (text only, ignored in JSON mode)
    pub fn line(&self, message: &str) {
        if self.format == OutputFormat::Text {
            println!("{}", message);
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints both lists of the board as text
    pub fn board(&self, board: &Board) {
        if self.is_json() {
            return;
        }

        for status in ProjectStatus::ALL {
            let list = board.list(status);
            println!("{} ({})", list.heading(), list.len());
            println!("{}", "-".repeat(60));

            if list.is_empty() {
                println!("  (none)");
            }
            for project in list.projects() {
                print_project(project);
            }
            println!();
        }
    }
}

fn print_project(project: &Project) {
    println!(
        "  {:<10} {} ({} assigned)",
        project.id,
        project.title,
        project.people_label()
    );
    println!("  {:<10} {}", "", project.description);
}
