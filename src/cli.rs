// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

const BANNER: &str = r"               _       _
__      ____ _| |_ ___| |__
\ \ /\ / / _' | __/ __| '_ \
 \ V  V / (_| | || (__| | | |
  \_/\_/ \__,_|\__\___|_| |_|";

const LONG_ABOUT: &str = "\
Watch a command and its output. There is a delay between commands (-d)
and if a timeout (-t) is reached then watch will exit.

The paths (-p) are a space separated list of paths to watch for changes.
Directories are searched recursively. When no changes are detected the
command is not run.

The screen type determines how the output is displayed. The default, plain,
will just print the output to stdout with no formatting.";

const SCREEN_HELP: &str = "\
Screen types:
    plain
        Plain text output.
    vt100
        VT100 terminal output.";

/// Command-line arguments for `watch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watch",
    version,
    about = "Re-run a command periodically and redraw when its output changes.",
    long_about = LONG_ABOUT,
    before_help = BANNER,
    after_help = SCREEN_HELP
)]
pub struct CliArgs {
    /// Delay in seconds between commands.
    #[arg(short = 'd', long, value_name = "SECONDS", default_value_t = 1)]
    pub delay: u64,

    /// Command timeout in seconds.
    #[arg(short = 't', long, value_name = "SECONDS", default_value_t = 60)]
    pub timeout: u64,

    /// Paths to watch for changes (optional, space separated).
    #[arg(short = 'p', long, value_name = "PATHS")]
    pub paths: Option<String>,

    /// Screen type (plain, vt100).
    #[arg(short = 's', long, value_name = "TYPE", default_value = "plain")]
    pub screen: String,

    /// Verbose output (same as `--log-level debug`).
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `-v`, then `WATCH_LOG`, then `warn` is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// The command to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliArgs {
    /// Level requested on the command line, if any. `--log-level` beats `-v`.
    pub fn requested_log_level(&self) -> Option<LogLevel> {
        match (self.log_level, self.verbose) {
            (Some(lvl), _) => Some(lvl),
            (None, true) => Some(LogLevel::Debug),
            (None, false) => None,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
