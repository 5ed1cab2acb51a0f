// src/watch/walker.rs

//! Producer half of the path-update pipeline.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::trace;
use walkdir::WalkDir;

use crate::errors::{Result, WatchError};
use crate::watch::paths::WatchSet;

/// Send every file of `set` down `tx`, in hashing order.
///
/// Explicit files come first, in configured order. Each directory follows,
/// walked depth-first with siblings sorted by file name; only regular files
/// are sent (symlinks are not followed). The first walk error is sent as an
/// `Err` and ends enumeration.
///
/// Must run on a blocking thread: it uses `blocking_send`. Returns early if
/// the receiver has gone away.
pub fn enumerate_files(set: &WatchSet, tx: &mpsc::Sender<Result<PathBuf>>) {
    for file in &set.files {
        if tx.blocking_send(Ok(file.clone())).is_err() {
            return;
        }
    }

    for dir in &set.dirs {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let item = match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    trace!(path = ?entry.path(), "walked file");
                    Ok(entry.into_path())
                }
                Ok(_) => continue,
                Err(source) => {
                    let path = source
                        .path()
                        .map(|p| p.to_path_buf())
                        .unwrap_or_else(|| dir.clone());
                    Err(WatchError::Walk { path, source })
                }
            };

            let failed = item.is_err();
            if tx.blocking_send(item).is_err() || failed {
                return;
            }
        }
    }
}
