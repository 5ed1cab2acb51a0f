use std::io;
use std::sync::{Arc, Mutex};

use watch::screen::Screen;

/// Everything a [`RecordingScreen`] has been asked to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLog {
    pub name: Option<String>,
    /// Every status pushed, in order, including ones never drawn.
    pub statuses: Vec<String>,
    /// `(status at draw time, frame bytes)` per written frame.
    pub frames: Vec<(String, Vec<u8>)>,
    pub setups: usize,
    pub teardowns: usize,
}

/// A fake screen that:
/// - records name, statuses and frames
/// - counts setup/teardown calls
///
/// Clones share the same log, so a test can keep one handle while the
/// scheduler owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingScreen {
    log: Arc<Mutex<ScreenLog>>,
    status: String,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> ScreenLog {
        self.log.lock().unwrap().clone()
    }

    pub fn frame_count(&self) -> usize {
        self.log.lock().unwrap().frames.len()
    }

    /// Frames as lossy UTF-8, for readable assertions.
    pub fn frame_texts(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .frames
            .iter()
            .map(|(_, bytes)| String::from_utf8_lossy(bytes).into_owned())
            .collect()
    }
}

impl Screen for RecordingScreen {
    fn set_name(&mut self, name: &str) {
        self.log.lock().unwrap().name = Some(name.to_string());
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.log.lock().unwrap().statuses.push(status.to_string());
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.log
            .lock()
            .unwrap()
            .frames
            .push((self.status.clone(), frame.to_vec()));
        Ok(())
    }

    fn setup(&mut self) -> io::Result<()> {
        self.log.lock().unwrap().setups += 1;
        Ok(())
    }

    fn teardown(&mut self) -> io::Result<()> {
        self.log.lock().unwrap().teardowns += 1;
        Ok(())
    }
}
