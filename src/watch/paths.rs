// src/watch/paths.rs

//! The configured watch set and the polling watcher built on it.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::debug;

use crate::errors::{Result, WatchError};
use crate::watch::hash::{Fingerprint, Fingerprinter};
use crate::watch::walker::enumerate_files;

/// Configured paths, split once at startup.
///
/// `dirs` are re-walked on every poll, so files created inside them later on
/// are picked up without restarting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSet {
    pub files: Vec<PathBuf>,
    pub dirs: Vec<PathBuf>,
}

impl WatchSet {
    /// Parse a whitespace-separated path list.
    ///
    /// Returns `Ok(None)` for an empty (or all-blank) list. Every listed path
    /// must exist.
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for p in raw.split_whitespace() {
            let path = PathBuf::from(p);
            let meta = fs::metadata(&path).map_err(|source| WatchError::InvalidPath {
                path: path.clone(),
                source,
            })?;
            if meta.is_dir() {
                dirs.push(path);
            } else {
                files.push(path);
            }
        }

        if files.is_empty() && dirs.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self { files, dirs }))
    }
}

/// Polls a [`WatchSet`] and reports whether its content changed.
///
/// A watcher without a set is disabled: `update` does nothing and
/// `has_changed` is always true, so the command runs on every cycle.
#[derive(Debug)]
pub struct PathWatcher {
    set: Option<Arc<WatchSet>>,
    hash: Fingerprinter,
    prev: Fingerprint,
}

impl PathWatcher {
    pub fn new(set: Option<WatchSet>) -> Self {
        Self {
            set: set.map(Arc::new),
            hash: Fingerprinter::new(),
            prev: Fingerprint::ZERO,
        }
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.set.is_some()
    }

    /// Re-hash every watched file.
    ///
    /// A blocking walker enumerates paths and hands them over a channel of
    /// capacity one; this side reads and hashes them in arrival order. Any
    /// walk or read error aborts the update.
    pub async fn update(&mut self) -> Result<()> {
        let Some(set) = self.set.clone() else {
            return Ok(());
        };

        self.prev = self.hash.sum();
        self.hash.reset();

        let (tx, mut rx) = mpsc::channel::<Result<PathBuf>>(1);
        let producer = tokio::task::spawn_blocking(move || enumerate_files(&set, &tx));

        let mut count = 0usize;
        while let Some(item) = rx.recv().await {
            let path = item?;
            let data = tokio::fs::read(&path)
                .await
                .map_err(|source| WatchError::Read { path, source })?;
            self.hash.write(&data);
            count += 1;
        }

        producer.await.context("joining path walker")?;

        debug!(
            files = count,
            prev = %self.prev,
            current = %self.hash.sum(),
            "watch paths updated"
        );
        Ok(())
    }

    pub fn has_changed(&self) -> bool {
        if self.set.is_none() {
            return true;
        }
        self.prev != self.hash.sum()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.hash.sum()
    }
}
