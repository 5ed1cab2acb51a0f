// src/watch/mod.rs

//! Polling change detection for watched paths.
//!
//! This module is responsible for:
//! - Fingerprinting byte streams ([`hash`]).
//! - Splitting the configured path list into files and directories
//!   ([`paths::WatchSet`]).
//! - Re-hashing every watched file once per cycle and answering "did
//!   anything change since the last poll?" ([`paths::PathWatcher`]).
//!
//! There are no OS-level file notifications here; the scheduler calls
//! [`PathWatcher::update`] on its own clock.

pub mod hash;
pub mod paths;
pub mod walker;

pub use hash::{checksum, Fingerprint, Fingerprinter};
pub use paths::{PathWatcher, WatchSet};
