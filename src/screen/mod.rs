// src/screen/mod.rs

//! Display backends.
//!
//! The scheduler only talks to the [`Screen`] trait. The concrete backends
//! are a closed set chosen by [`ScreenKind`]:
//!
//! - [`PlainScreen`] appends a header and the output to the writer.
//! - [`Vt100Screen`] clears the terminal before each frame and hides the
//!   cursor between `setup` and `teardown`.
//!
//! Both are generic over `std::io::Write` so tests can render into a
//! `Vec<u8>`.

use std::io::{self, Write};

use chrono::Local;

use crate::types::ScreenKind;

pub mod plain;
pub mod vt100;

pub use plain::PlainScreen;
pub use vt100::Vt100Screen;

/// Render target for the watch loop.
pub trait Screen: Send {
    /// Name shown in every frame header. Set once, before `setup`.
    fn set_name(&mut self, name: &str);

    /// Status shown in the next frame header. Empty means "no status".
    fn set_status(&mut self, status: &str);

    /// Draw one full frame of command output.
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;

    fn setup(&mut self) -> io::Result<()>;

    fn teardown(&mut self) -> io::Result<()>;
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    fn set_name(&mut self, name: &str) {
        (**self).set_name(name)
    }

    fn set_status(&mut self, status: &str) {
        (**self).set_status(status)
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        (**self).write_frame(frame)
    }

    fn setup(&mut self) -> io::Result<()> {
        (**self).setup()
    }

    fn teardown(&mut self) -> io::Result<()> {
        (**self).teardown()
    }
}

impl ScreenKind {
    /// Build the backend for this kind, writing to stdout.
    pub fn build(self) -> Box<dyn Screen> {
        match self {
            ScreenKind::Plain => Box::new(PlainScreen::new(io::stdout())),
            ScreenKind::Vt100 => Box::new(Vt100Screen::new(io::stdout())),
        }
    }
}

/// Bracketed part of the header: `[HH:MM:SS status]`.
pub(crate) fn header_suffix(status: &str) -> String {
    let mut suffix = format!("[{}", Local::now().format("%H:%M:%S"));
    if !status.is_empty() {
        suffix.push(' ');
        suffix.push_str(status);
    }
    suffix.push(']');
    suffix
}

/// Header line, a blank line, then the frame bytes verbatim.
pub(crate) fn write_body<W: Write>(out: &mut W, status: &str, frame: &[u8]) -> io::Result<()> {
    write!(out, " {}\n\n", header_suffix(status))?;
    out.write_all(frame)?;
    out.flush()
}
