use std::fmt;
use std::str::FromStr;

/// Which display backend renders the frames.
///
/// - `Plain`: header plus output, appended to stdout (default).
/// - `Vt100`: clears the terminal before every frame and hides the cursor
///   for the duration of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenKind {
    #[default]
    Plain,
    Vt100,
}

impl FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(ScreenKind::Plain),
            "vt100" => Ok(ScreenKind::Vt100),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenKind::Plain => f.write_str("plain"),
            ScreenKind::Vt100 => f.write_str("vt100"),
        }
    }
}
