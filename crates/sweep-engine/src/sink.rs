//! [`RenderSink`] implementations: terminal, text buffer, and no-op.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use sweep_core::{Frame, RenderSink};
use tracing::warn;

/// ANSI "erase display" followed by "cursor home".
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes each frame to a terminal, then pauses for the step delay.
///
/// Write failures are not fatal to the run: the first one is logged and
/// kept for [`take_error`](TerminalSink::take_error), and later frames
/// are dropped.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
    delay: Duration,
    clear: bool,
    error: Option<io::Error>,
}

impl TerminalSink<io::Stdout> {
    /// A sink on standard output that clears the screen before each frame.
    pub fn stdout(delay: Duration) -> Self {
        Self::new(io::stdout(), delay)
    }
}

impl<W: Write> TerminalSink<W> {
    /// A sink on `out` that clears the screen before each frame.
    pub fn new(out: W, delay: Duration) -> Self {
        Self {
            out,
            delay,
            clear: true,
            error: None,
        }
    }

    /// Whether to emit the ANSI clear sequence before each frame.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Pause after each frame.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The first write error, if any, leaving `None` behind.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        write!(self.out, "{frame}")?;
        self.out.flush()
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn present(&mut self, frame: &Frame) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_frame(frame) {
            warn!(error = %e, "frame output failed; further frames dropped");
            self.error = Some(e);
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Keeps the text of every frame.
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    frames: Vec<String>,
}

impl BufferSink {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered text of each frame, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Rendered text of the most recent frame.
    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl RenderSink for BufferSink {
    fn present(&mut self, frame: &Frame) {
        self.frames.push(frame.to_string());
    }
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _frame: &Frame) {}
}
