//! Project Board - track active and finished projects

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = project_board::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
