// src/engine/scheduler.rs

use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use crate::engine::status::{classify, Status};
use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::screen::Screen;
use crate::watch::PathWatcher;

/// What a single evaluation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
    /// Watched paths were unchanged; the command did not run.
    Skipped,
    /// The command ran. `redrawn` says whether a frame was written.
    Ran { status: Status, redrawn: bool },
}

/// The poll loop: sleep, check paths, maybe run, maybe redraw.
///
/// Owns the runner, the path watcher and the screen; nothing else touches
/// them while the loop is alive.
pub struct Scheduler<S: Screen> {
    runner: CommandRunner,
    paths: PathWatcher,
    screen: S,
    delay: Duration,
    executed: bool,
}

impl<S: Screen> fmt::Debug for Scheduler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("runner", &self.runner)
            .field("paths", &self.paths)
            .field("delay", &self.delay)
            .field("executed", &self.executed)
            .finish_non_exhaustive()
    }
}

impl<S: Screen> Scheduler<S> {
    pub fn new(runner: CommandRunner, paths: PathWatcher, screen: S, delay: Duration) -> Self {
        Self {
            runner,
            paths,
            screen,
            delay,
            executed: false,
        }
    }

    /// Run cycles until one fails. Never returns `Ok`.
    ///
    /// Every cycle starts with the delay, the first one included.
    pub async fn run(&mut self) -> Result<()> {
        info!(delay = ?self.delay, "watch loop started");
        loop {
            tokio::time::sleep(self.delay).await;
            self.cycle().await?;
        }
    }

    /// One evaluation, without the leading sleep.
    ///
    /// Path evaluation always precedes execution, which always precedes the
    /// redraw. A frame is written when the output changed or when this is
    /// the first execution ever, so the screen is never left blank.
    pub async fn cycle(&mut self) -> Result<CycleReport> {
        self.paths.update().await?;
        if !self.paths.has_changed() {
            debug!("watched paths unchanged; skipping cycle");
            return Ok(CycleReport::Skipped);
        }

        let outcome = self.runner.run().await;
        let output_is_empty = self.runner.output().is_empty();
        let status = classify(outcome, output_is_empty, self.runner.spec())?;
        self.screen.set_status(&status.to_string());

        let first = !self.executed;
        self.executed = true;

        let redrawn = self.runner.has_changed() || first;
        if redrawn {
            self.screen.write_frame(self.runner.frame())?;
        } else {
            debug!(%status, "output unchanged; not redrawing");
        }

        Ok(CycleReport::Ran { status, redrawn })
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }
}
