//! Terminal control and output sinks.
//!
//! The progress bar only needs three things from a terminal: its width and a
//! way in and out of the mode it renders in. [`CrosstermTerminal`] talks to
//! the real one; [`FixedTerminal`] pretends, for tests and for callers that
//! write somewhere other than a tty.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Terminal capabilities the progress bar relies on.
pub trait Terminal: Send {
    /// Current width in columns.
    fn width(&self) -> io::Result<u16>;
    fn enter_render_mode(&mut self) -> io::Result<()>;
    fn leave_render_mode(&mut self) -> io::Result<()>;
}

/// The process's controlling terminal, via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermTerminal {
    raw_mode: bool,
    entered: bool,
}

impl CrosstermTerminal {
    /// `raw_mode` decides whether render mode switches the tty to raw input.
    pub fn new(raw_mode: bool) -> Self {
        Self {
            raw_mode,
            entered: false,
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn width(&self) -> io::Result<u16> {
        crossterm::terminal::size().map(|(cols, _)| cols)
    }

    fn enter_render_mode(&mut self) -> io::Result<()> {
        if self.raw_mode && !self.entered {
            crossterm::terminal::enable_raw_mode()?;
            self.entered = true;
        }
        Ok(())
    }

    fn leave_render_mode(&mut self) -> io::Result<()> {
        if self.entered {
            crossterm::terminal::disable_raw_mode()?;
            self.entered = false;
        }
        Ok(())
    }
}

/// A terminal of constant width with no modes.
#[derive(Debug, Clone, Copy)]
pub struct FixedTerminal {
    pub width: u16,
}

impl FixedTerminal {
    pub fn new(width: u16) -> Self {
        Self { width }
    }
}

impl Terminal for FixedTerminal {
    fn width(&self) -> io::Result<u16> {
        Ok(self.width)
    }

    fn enter_render_mode(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn leave_render_mode(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An in-memory sink whose clones all share one buffer.
///
/// Hand one clone to the progress bar and keep another to read back what
/// was written.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        // A panic while holding the lock leaves plain bytes behind; keep going.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
