// src/screen/vt100.rs

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, ExecutableCommand, QueueableCommand,
};

use super::{write_body, Screen};

/// VT100 output: each frame replaces the previous one in place.
#[derive(Debug)]
pub struct Vt100Screen<W: Write> {
    out: W,
    name: String,
    status: String,
}

impl<W: Write> Vt100Screen<W> {
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

impl<W: Write + Send> Screen for Vt100Screen<W> {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(SetAttribute(Attribute::Bold))?;
        self.out.queue(Print(format!("WATCH {}", self.name)))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        write_body(&mut self.out, &self.status, frame)
    }

    fn setup(&mut self) -> io::Result<()> {
        self.out.execute(cursor::Hide)?;
        Ok(())
    }

    fn teardown(&mut self) -> io::Result<()> {
        self.out.execute(cursor::Show)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_hides_and_teardown_shows_the_cursor() {
        let mut screen = Vt100Screen::new(Vec::new());
        screen.setup().unwrap();
        screen.teardown().unwrap();

        let bytes = screen.into_inner();
        assert_eq!(bytes, b"\x1b[?25l\x1b[?25h");
    }

    #[test]
    fn frame_clears_then_draws_bold_header() {
        let mut screen = Vt100Screen::new(Vec::new());
        screen.set_name("make");
        screen.set_status("exit code 2");
        screen.write_frame(b"error: nope\n").unwrap();

        let text = String::from_utf8(screen.into_inner()).unwrap();
        let clear = text.find("\x1b[2J").expect("clear sequence");
        let name = text.find("WATCH make").expect("header");
        assert!(clear < name);
        assert!(text.contains(" exit code 2]\n\nerror: nope\n"), "{text:?}");
    }
}
