// src/config/validate.rs

use std::time::Duration;

use crate::cli::CliArgs;
use crate::config::model::{CommandSpec, WatchConfig};
use crate::errors::{Result, WatchError};
use crate::types::ScreenKind;
use crate::watch::WatchSet;

impl TryFrom<CliArgs> for WatchConfig {
    type Error = WatchError;

    /// Checks run in a fixed order: command present, watch paths exist,
    /// then the screen name. The first failure wins.
    fn try_from(args: CliArgs) -> std::result::Result<Self, Self::Error> {
        let command = command_spec(args.command, args.timeout)?;
        let watch = WatchSet::parse(args.paths.as_deref().unwrap_or_default())?;
        let screen = screen_kind(&args.screen)?;

        Ok(WatchConfig {
            command,
            delay: Duration::from_secs(args.delay),
            watch,
            screen,
        })
    }
}

fn command_spec(argv: Vec<String>, timeout_secs: u64) -> Result<CommandSpec> {
    let mut argv = argv.into_iter();
    let Some(program) = argv.next() else {
        return Err(WatchError::NoCommand);
    };
    Ok(CommandSpec::new(
        program,
        argv.collect(),
        Duration::from_secs(timeout_secs),
    ))
}

fn screen_kind(name: &str) -> Result<ScreenKind> {
    name.parse().map_err(WatchError::UnknownScreen)
}
