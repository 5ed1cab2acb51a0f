// src/engine/mod.rs

//! The watch loop.
//!
//! - [`status`] is the pure part: it turns a [`RunOutcome`](crate::exec::RunOutcome)
//!   into a status line or a fatal error, and is unit tested without
//!   processes or Tokio.
//! - [`scheduler`] is the async shell that sleeps, polls the watched paths,
//!   runs the command and pushes frames to the screen.
//!
//! Cycles never overlap: each one finishes (or fails) before the next sleep
//! starts.

pub mod scheduler;
pub mod status;

pub use scheduler::{CycleReport, Scheduler};
pub use status::{classify, Status};
