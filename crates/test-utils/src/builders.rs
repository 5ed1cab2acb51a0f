#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use watch::config::{CommandSpec, WatchConfig};
use watch::types::ScreenKind;
use watch::watch::WatchSet;

/// Builder for `WatchConfig` to simplify test setup.
///
/// Defaults are tuned for tests: a 10ms delay and a 5s timeout.
pub struct WatchConfigBuilder {
    program: String,
    args: Vec<String>,
    timeout: Duration,
    delay: Duration,
    paths: Vec<String>,
}

impl WatchConfigBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            timeout: Duration::from_secs(5),
            delay: Duration::from_millis(10),
            paths: Vec::new(),
        }
    }

    /// `sh -c <script>`.
    pub fn shell(script: &str) -> Self {
        Self::new("sh").arg("-c").arg(script)
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn watch(mut self, path: impl AsRef<Path>) -> Self {
        self.paths.push(path.as_ref().display().to_string());
        self
    }

    pub fn command_spec(&self) -> CommandSpec {
        CommandSpec::new(self.program.clone(), self.args.clone(), self.timeout)
    }

    pub fn build(self) -> WatchConfig {
        let watch = WatchSet::parse(&self.paths.join(" "))
            .expect("Failed to build watch set from builder paths");
        WatchConfig {
            command: self.command_spec(),
            delay: self.delay,
            watch,
            screen: ScreenKind::Plain,
        }
    }
}
