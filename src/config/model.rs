// src/config/model.rs

//! Validated runtime configuration.

use std::time::Duration;

use crate::types::ScreenKind;
use crate::watch::WatchSet;

/// The command to re-run each cycle. Fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Program followed by its arguments, as typed on the command line.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// Everything the watch loop needs, built once at startup.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub command: CommandSpec,
    /// Sleep before every cycle, including the first.
    pub delay: Duration,
    /// `None` when no paths were given; the command then runs every cycle.
    pub watch: Option<WatchSet>,
    pub screen: ScreenKind,
}
