//! The shared drawing surface.
//!
//! Progress counters, the terminal and the output sink live behind one mutex,
//! so computing a line and writing it is atomic with respect to the spinner
//! task. Neither side can interleave a half-written frame into the other's.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::render::{bar_line, complete_line, message_line, spinner_frame};
use crate::state::ProgressState;
use crate::style::Styler;
use crate::terminal::Terminal;

pub(crate) type SharedScreen = Arc<Mutex<Screen>>;

pub(crate) struct Screen {
    pub(crate) state: ProgressState,
    terminal: Box<dyn Terminal>,
    out: Box<dyn Write + Send>,
    styler: Styler,
    fallback_width: u16,
    sink_closed: bool,
}

/// Lock the screen, recovering it if a previous holder panicked.
pub(crate) fn lock(screen: &SharedScreen) -> MutexGuard<'_, Screen> {
    screen.lock().unwrap_or_else(|e| e.into_inner())
}

impl Screen {
    pub(crate) fn new(
        state: ProgressState,
        terminal: Box<dyn Terminal>,
        out: Box<dyn Write + Send>,
        styler: Styler,
        fallback_width: u16,
    ) -> Self {
        Self {
            state,
            terminal,
            out,
            styler,
            fallback_width,
            sink_closed: false,
        }
    }

    pub(crate) fn shared(self) -> SharedScreen {
        Arc::new(Mutex::new(self))
    }

    fn width(&self) -> u16 {
        match self.terminal.width() {
            Ok(width) => width,
            Err(e) => {
                debug!(error = %e, fallback = self.fallback_width, "terminal width unavailable");
                self.fallback_width
            }
        }
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Write on behalf of the caller. A dead sink is reported once and then
    /// ignored; the caller's counters keep moving regardless.
    fn write_best_effort(&mut self, text: &str) {
        if let Err(e) = self.write(text) {
            if !self.sink_closed {
                warn!(error = %e, "progress output unavailable, rendering disabled");
            }
            self.sink_closed = true;
        }
    }

    /// Advance the spinner and draw its frame. Errors go back to the spinner
    /// task, which stops on them.
    pub(crate) fn tick(&mut self) -> io::Result<()> {
        self.state.advance_spinner();
        let frame = spinner_frame(self.state.glyph());
        self.write(&frame)
    }

    /// Optionally print `message` as a permanent line, then redraw the bar.
    pub(crate) fn draw_bar(&mut self, message: Option<&str>) {
        let width = self.width();
        if let Some(message) = message {
            let line = message_line(message, width);
            self.write_best_effort(&line);
        }
        let line = bar_line(&self.state, width, &self.styler);
        self.write_best_effort(&line);
    }

    pub(crate) fn draw_complete(&mut self) {
        let width = self.width();
        let line = complete_line(self.state.max(), width, &self.styler);
        self.write_best_effort(&line);
    }

    pub(crate) fn enter_render_mode(&mut self) {
        if let Err(e) = self.terminal.enter_render_mode() {
            warn!(error = %e, "could not enter terminal render mode");
        }
    }

    pub(crate) fn leave_render_mode(&mut self) {
        if let Err(e) = self.terminal.leave_render_mode() {
            warn!(error = %e, "could not restore terminal mode");
        }
    }
}
