// src/exec/outcome.rs

use std::io;

/// Classified result of one command execution.
///
/// Checked in this precedence: an elapsed deadline wins over everything,
/// then a non-zero exit, then any other spawn/IO failure.
#[derive(Debug)]
pub enum RunOutcome {
    Success,
    /// Non-zero exit. Processes killed by a signal report `-1`.
    ExitCode(i32),
    TimedOut,
    Failed(io::Error),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }
}
