// src/config/mod.rs

//! Runtime configuration.
//!
//! The only configuration source is the command line. [`model`] defines the
//! validated, immutable [`WatchConfig`]; [`validate`] turns parsed
//! [`CliArgs`](crate::cli::CliArgs) into one.

pub mod model;
pub mod validate;

pub use model::{CommandSpec, WatchConfig};
