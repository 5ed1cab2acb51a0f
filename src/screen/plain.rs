// src/screen/plain.rs

use std::io::{self, Write};

use super::{write_body, Screen};

/// Plain text output: every frame is appended below the previous one.
#[derive(Debug)]
pub struct PlainScreen<W: Write> {
    out: W,
    name: String,
    status: String,
}

impl<W: Write> PlainScreen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            name: String::new(),
            status: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Screen for PlainScreen<W> {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        write!(self.out, "WATCH {}", self.name)?;
        write_body(&mut self.out, &self.status, frame)
    }

    fn setup(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn teardown(&mut self) -> io::Result<()> {
        Ok(())
    }
}
