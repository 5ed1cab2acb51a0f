#![cfg(unix)]

mod common;
use crate::common::builders::WatchConfigBuilder;
use crate::common::{init_tracing, RecordingScreen};

use std::error::Error;
use std::fs;

use tempfile::tempdir;

use watch::engine::{CycleReport, Scheduler, Status};
use watch::errors::WatchError;
use watch::exec::CommandRunner;
use watch::watch::PathWatcher;

type TestResult = Result<(), Box<dyn Error>>;

fn scheduler_for(builder: WatchConfigBuilder) -> (Scheduler<RecordingScreen>, RecordingScreen) {
    let cfg = builder.build();
    let screen = RecordingScreen::new();
    let scheduler = Scheduler::new(
        CommandRunner::new(cfg.command),
        PathWatcher::new(cfg.watch),
        screen.clone(),
        cfg.delay,
    );
    (scheduler, screen)
}

#[tokio::test]
async fn first_execution_always_draws_even_with_empty_output() -> TestResult {
    init_tracing();

    let (mut sched, screen) = scheduler_for(WatchConfigBuilder::new("true"));

    let report = sched.cycle().await?;
    assert_eq!(
        report,
        CycleReport::Ran {
            status: Status::NoOutput,
            redrawn: true
        }
    );

    let log = screen.log();
    assert_eq!(log.frames, vec![("no output".to_string(), Vec::new())]);
    Ok(())
}

#[tokio::test]
async fn identical_output_is_not_redrawn() -> TestResult {
    init_tracing();

    let (mut sched, screen) = scheduler_for(WatchConfigBuilder::shell("printf A"));

    let first = sched.cycle().await?;
    assert!(matches!(first, CycleReport::Ran { redrawn: true, .. }));

    for _ in 0..3 {
        let again = sched.cycle().await?;
        assert_eq!(
            again,
            CycleReport::Ran {
                status: Status::Clear,
                redrawn: false
            }
        );
    }

    assert_eq!(screen.frame_texts(), vec!["A"]);
    // Status is still pushed every cycle, just never flushed to a frame.
    assert_eq!(screen.log().statuses.len(), 4);
    Ok(())
}

#[tokio::test]
async fn changed_output_is_redrawn() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let source = dir.path().join("source.txt");
    fs::write(&source, "one")?;

    let (mut sched, screen) = scheduler_for(
        WatchConfigBuilder::new("cat").arg(&source.display().to_string()),
    );

    sched.cycle().await?;
    sched.cycle().await?;
    fs::write(&source, "two")?;
    let report = sched.cycle().await?;

    assert!(matches!(report, CycleReport::Ran { redrawn: true, .. }));
    assert_eq!(screen.frame_texts(), vec!["one", "two"]);
    Ok(())
}

#[tokio::test]
async fn non_zero_exit_is_reported_and_the_loop_continues() -> TestResult {
    init_tracing();

    let (mut sched, screen) = scheduler_for(WatchConfigBuilder::shell("echo failing; exit 3"));

    for _ in 0..3 {
        let report = sched.cycle().await?;
        assert!(matches!(
            report,
            CycleReport::Ran {
                status: Status::ExitCode(3),
                ..
            }
        ));
    }

    let log = screen.log();
    assert!(log.statuses.iter().all(|s| s == "exit code 3"));
    assert_eq!(log.frames.len(), 1);
    assert_eq!(log.frames[0].0, "exit code 3");
    assert_eq!(log.frames[0].1, b"failing\n");
    Ok(())
}

#[tokio::test]
async fn missing_executable_is_fatal() -> TestResult {
    init_tracing();

    let (mut sched, screen) =
        scheduler_for(WatchConfigBuilder::new("definitely-not-a-real-program-4711").arg("x"));

    match sched.cycle().await {
        Err(WatchError::Exec { program, args, .. }) => {
            assert_eq!(program, "definitely-not-a-real-program-4711");
            assert_eq!(args, vec!["x"]);
        }
        other => panic!("expected Exec error, got {other:?}"),
    }
    assert_eq!(screen.frame_count(), 0);
    Ok(())
}

#[tokio::test]
async fn unchanged_paths_skip_execution() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let input = dir.path().join("input.txt");
    let runs = dir.path().join("runs.log");
    fs::write(&input, "x")?;

    // Each execution appends a line outside the watched set.
    let script = format!("echo run >> {}; cat {}", runs.display(), input.display());
    let (mut sched, screen) = scheduler_for(WatchConfigBuilder::shell(&script).watch(&input));

    assert!(matches!(sched.cycle().await?, CycleReport::Ran { .. }));
    assert_eq!(sched.cycle().await?, CycleReport::Skipped);
    assert_eq!(sched.cycle().await?, CycleReport::Skipped);

    fs::write(&input, "y")?;
    assert!(matches!(
        sched.cycle().await?,
        CycleReport::Ran { redrawn: true, .. }
    ));

    assert_eq!(fs::read_to_string(&runs)?.lines().count(), 2);
    assert_eq!(screen.frame_texts(), vec!["x", "y"]);
    Ok(())
}

/// `watch -p ./data echo hello` with an empty `./data`: the first poll goes
/// from zero to zero, so nothing runs and no frame is forced.
#[tokio::test]
async fn empty_watched_dir_does_not_run_on_cycle_one() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let data = dir.path().join("data");
    fs::create_dir(&data)?;

    let (mut sched, screen) = scheduler_for(
        WatchConfigBuilder::new("echo").arg("hello").watch(&data),
    );

    assert_eq!(sched.cycle().await?, CycleReport::Skipped);
    assert_eq!(sched.cycle().await?, CycleReport::Skipped);
    assert_eq!(screen.frame_count(), 0);
    assert!(screen.log().statuses.is_empty());

    fs::write(data.join("item.txt"), "1")?;
    let report = sched.cycle().await?;

    // First execution ever, so it draws.
    assert_eq!(
        report,
        CycleReport::Ran {
            status: Status::Clear,
            redrawn: true
        }
    );
    assert_eq!(screen.frame_texts(), vec!["hello\n"]);
    Ok(())
}

#[tokio::test]
async fn first_run_after_skips_draws_even_if_output_matches_empty() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let data = dir.path().join("data");
    fs::create_dir(&data)?;

    let (mut sched, screen) = scheduler_for(WatchConfigBuilder::new("true").watch(&data));

    assert_eq!(sched.cycle().await?, CycleReport::Skipped);
    fs::write(data.join("f"), "content")?;
    sched.cycle().await?;

    assert_eq!(screen.frame_count(), 1);
    Ok(())
}
