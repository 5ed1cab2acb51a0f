// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Every variant here is fatal to the watch loop. The one recoverable
//! execution result (a non-zero exit code) is not an error at all; it is a
//! [`RunOutcome`](crate::exec::RunOutcome) that ends up as a status line.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("No command specified.")]
    NoCommand,

    #[error("Unknown screen type: {0}")]
    UnknownScreen(String),

    #[error("invalid path {path:?}: {source}")]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error walking {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("error reading {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("timeout after {0:?}")]
    Timeout(Duration),

    #[error("executing {program:?} with args {args:?}: {source}")]
    Exec {
        program: String,
        args: Vec<String>,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WatchError {
    /// Process exit code to use when this error ends the program.
    pub fn exit_code(&self) -> i32 {
        match self {
            WatchError::UnknownScreen(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, WatchError>;
