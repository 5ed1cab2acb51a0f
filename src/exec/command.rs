// src/exec/command.rs

//! Single-command runner with a deadline and combined output capture.

use std::io::{self, Read};
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info};

use crate::config::CommandSpec;
use crate::exec::outcome::RunOutcome;
use crate::watch::hash::{checksum, Fingerprint};

/// Owns one command's execution lifecycle and its captured output.
///
/// The buffer survives between runs: at the start of [`run`](Self::run) its
/// fingerprint becomes the "previous" value, and only then is it cleared.
/// Before the first run the buffer is empty, so the previous fingerprint is
/// [`Fingerprint::ZERO`].
#[derive(Debug)]
pub struct CommandRunner {
    spec: CommandSpec,
    buf: Vec<u8>,
    prev: Fingerprint,
}

impl CommandRunner {
    pub fn new(spec: CommandSpec) -> Self {
        Self {
            spec,
            buf: Vec::new(),
            prev: Fingerprint::ZERO,
        }
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Execute the command once and classify the result.
    ///
    /// Stdout and stderr share one pipe, so the buffer holds the bytes in
    /// exactly the order the process wrote them. If the deadline elapses first the child is killed
    /// (it is spawned with `kill_on_drop`) and [`RunOutcome::TimedOut`] is
    /// returned, whatever state the process was in.
    pub async fn run(&mut self) -> RunOutcome {
        self.prev = checksum(&self.buf);
        self.buf.clear();

        debug!(
            program = %self.spec.program,
            args = ?self.spec.args,
            timeout = ?self.spec.timeout,
            "running command"
        );

        let mut cmd = Command::new(&self.spec.program);
        cmd.args(&self.spec.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let outcome =
            match tokio::time::timeout(self.spec.timeout, capture(cmd, &mut self.buf)).await {
                Err(_elapsed) => RunOutcome::TimedOut,
                Ok(Err(err)) => RunOutcome::Failed(err),
                Ok(Ok(status)) if status.success() => RunOutcome::Success,
                Ok(Ok(status)) => RunOutcome::ExitCode(status.code().unwrap_or(-1)),
            };

        info!(
            program = %self.spec.program,
            bytes = self.buf.len(),
            ?outcome,
            "command finished"
        );
        outcome
    }

    /// True iff the output captured by the latest run differs from the
    /// output that was in the buffer before it.
    pub fn has_changed(&self) -> bool {
        self.prev != checksum(&self.buf)
    }

    /// Captured output with surrounding whitespace trimmed.
    ///
    /// Only meant for emptiness checks; change detection uses the raw bytes.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim().to_string()
    }

    /// Raw captured bytes, exactly as the process wrote them.
    pub fn frame(&self) -> &[u8] {
        &self.buf
    }
}

/// Spawn `cmd` with stdout and stderr on one pipe, drain it into `buf`
/// until every write end is closed, then reap.
async fn capture(mut cmd: Command, buf: &mut Vec<u8>) -> io::Result<ExitStatus> {
    let (mut reader, writer) = io::pipe()?;
    cmd.stdout(writer.try_clone()?).stderr(writer);

    let mut child = cmd.spawn()?;
    // Release the parent's write ends or the read below never sees EOF.
    drop(cmd);

    let out = tokio::task::spawn_blocking(move || {
        let mut out = Vec::new();
        reader.read_to_end(&mut out).map(|_| out)
    })
    .await
    .map_err(io::Error::other)??;
    buf.extend_from_slice(&out);

    child.wait().await
}
