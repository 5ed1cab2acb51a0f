// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] runs the configured program with `tokio::process::Command`
//!   under a deadline, capturing stdout and stderr into one buffer.
//! - [`outcome`] holds the classified result of a run.

pub mod command;
pub mod outcome;

pub use command::CommandRunner;
pub use outcome::RunOutcome;
