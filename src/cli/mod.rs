//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `tui` (default) | Interactive board with form and drag-and-drop |
//! | `run <script>` | Drive a fresh board from a script |
//! | `check <value>` | Run the field validator |
//! | `config` | Show effective configuration |
//! | `init` | Create `.board/config.toml` |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Logging
//!
//! Use `--verbose` (or `-v`) for debug logs on stderr, or set `BOARD_LOG`
//! to any `tracing` filter:
//! ```bash
//! BOARD_LOG=project_board=trace board run demo.board
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod check;
mod output;
pub mod script;
mod tui;

pub use app::{run, Cli, Commands, LOG_ENV};
pub use output::{Output, OutputFormat};
