// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod screen;
pub mod types;
pub mod watch;

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::config::WatchConfig;
use crate::engine::Scheduler;
use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::screen::Screen;
use crate::watch::PathWatcher;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the screen chosen in the config (name + setup)
/// - command runner, path watcher and scheduler
/// - Ctrl-C / SIGTERM handling
///
/// Returns `Ok(())` only after a shutdown signal. Fatal errors from the loop
/// are returned after the screen has been torn down.
pub async fn run(config: WatchConfig) -> Result<()> {
    let screen = config.screen.build();
    run_with_screen(config, screen).await
}

/// Same as [`run`], but rendering to a caller-provided screen.
pub async fn run_with_screen<S: Screen>(config: WatchConfig, screen: S) -> Result<()> {
    // Signal → stop the loop. If the listener fails the sender is dropped and
    // the shutdown future never resolves, so the loop keeps running.
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            warn!(error = %e, "failed to listen for shutdown signals");
            return;
        }
        let _ = stop_tx.send(());
    });

    let shutdown = async move {
        if stop_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    run_with_shutdown(config, screen, shutdown).await
}

/// Run the watch loop until `shutdown` resolves or a fatal error occurs.
///
/// Resolution of `shutdown` ends the loop with `Ok(())`. The screen is set
/// up once before the first cycle and torn down once on the way out.
pub async fn run_with_shutdown<S, F>(config: WatchConfig, mut screen: S, shutdown: F) -> Result<()>
where
    S: Screen,
    F: Future<Output = ()>,
{
    debug!(argv = ?config.command.argv(), "watching");
    debug!(delay = ?config.delay, "delay");
    debug!(timeout = ?config.command.timeout, "timeout");

    screen.set_name(&config.command.program);
    screen.setup()?;

    let runner = CommandRunner::new(config.command);
    let paths = PathWatcher::new(config.watch);
    let mut scheduler = Scheduler::new(runner, paths, screen, config.delay);

    let result = tokio::select! {
        res = scheduler.run() => res,
        () = shutdown => {
            info!("shutdown requested");
            Ok(())
        }
    };

    // Exactly one teardown, whichever way the loop ended.
    if let Err(e) = scheduler.screen_mut().teardown() {
        warn!(error = %e, "screen teardown failed");
    }

    result
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res,
            _ = term.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}
