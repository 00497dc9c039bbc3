//! Output handlers for the read loop.
//!
//! Results go to stdout when run interactively and to a buffer in tests.
//! Uses enum dispatch; the set of destinations is fixed.

use std::io::{self, Write};

use parking_lot::Mutex;

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{msg}")
    }

    /// Print without newline, flushing so prompts appear before input.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{msg}")?;
        stdout.flush()
    }
}

/// Captures output in memory.
pub struct BufferOutput {
    buffer: Mutex<String>,
}

impl BufferOutput {
    pub fn new() -> Self {
        BufferOutput {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    /// Everything captured so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Output destination.
pub enum Output {
    Stdout(StdoutOutput),
    Buffer(BufferOutput),
}

impl Output {
    pub fn println(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => {
                h.println(msg);
                Ok(())
            }
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => {
                h.print(msg);
                Ok(())
            }
        }
    }

    /// Captured output; empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }
}

/// Output to stdout.
pub fn stdout_output() -> Output {
    Output::Stdout(StdoutOutput)
}

/// Output captured in a buffer.
pub fn buffer_output() -> Output {
    Output::Buffer(BufferOutput::new())
}

#[cfg(test)]
mod tests;
