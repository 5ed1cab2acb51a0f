// src/engine/status.rs

//! Pure mapping from a run outcome to the status line (or a fatal error).

use std::fmt;

use crate::config::CommandSpec;
use crate::errors::{Result, WatchError};
use crate::exec::RunOutcome;

/// Status annotation shown in the frame header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Clean exit with output: nothing to annotate.
    Clear,
    NoOutput,
    ExitCode(i32),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Clear => Ok(()),
            Status::NoOutput => f.write_str("no output"),
            Status::ExitCode(code) => write!(f, "exit code {code}"),
        }
    }
}

/// Classify one run.
///
/// A non-zero exit is recoverable and becomes a status. A timeout or any
/// other execution failure ends the loop.
pub fn classify(outcome: RunOutcome, output_is_empty: bool, spec: &CommandSpec) -> Result<Status> {
    match outcome {
        RunOutcome::ExitCode(code) => Ok(Status::ExitCode(code)),
        RunOutcome::TimedOut => Err(WatchError::Timeout(spec.timeout)),
        RunOutcome::Failed(source) => Err(WatchError::Exec {
            program: spec.program.clone(),
            args: spec.args.clone(),
            source,
        }),
        RunOutcome::Success if output_is_empty => Ok(Status::NoOutput),
        RunOutcome::Success => Ok(Status::Clear),
    }
}
