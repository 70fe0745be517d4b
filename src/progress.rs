//! The public progress bar.

use std::io::Write;

use tracing::debug;

use crate::config::ProgressConfig;
use crate::error::{ProgressError, Result};
use crate::screen::{Screen, SharedScreen, lock};
use crate::spinner::SpinnerLoop;
use crate::state::ProgressState;
use crate::style::Styler;
use crate::terminal::{CrosstermTerminal, Terminal};

/// A single-line progress bar with a spinner that animates on its own.
///
/// The spinner starts with the bar and runs on the current tokio runtime
/// until [`stop`](Self::stop) or [`print_complete`](Self::print_complete).
///
/// ```no_run
/// # async fn run() -> terminal_progress::Result<()> {
/// use terminal_progress::TerminalProgress;
///
/// let mut bar = TerminalProgress::new(3)?;
/// for step in ["fetch", "build", "test"] {
///     bar.print_progress(Some(step));
/// }
/// bar.print_complete().await;
/// # Ok(())
/// # }
/// ```
pub struct TerminalProgress {
    screen: SharedScreen,
    spinner: Option<SpinnerLoop>,
}

impl TerminalProgress {
    /// Draw on stdout, sized to the controlling terminal.
    pub fn new(max: i64) -> Result<Self> {
        let config = ProgressConfig::default();
        let terminal = CrosstermTerminal::new(config.raw_mode);
        Self::with_config(max, config, terminal, std::io::stdout())
    }

    /// Draw on any sink, sized by any terminal.
    pub fn with_config(
        max: i64,
        config: ProgressConfig,
        terminal: impl Terminal + 'static,
        out: impl Write + Send + 'static,
    ) -> Result<Self> {
        let state = ProgressState::new(max)?;
        tokio::runtime::Handle::try_current().map_err(|e| {
            ProgressError::EnvironmentUnavailable {
                reason: e.to_string(),
            }
        })?;

        let mut screen = Screen::new(
            state,
            Box::new(terminal),
            Box::new(out),
            Styler::new(config.color),
            config.fallback_width,
        );
        screen.enter_render_mode();
        let screen = screen.shared();

        let spinner = SpinnerLoop::start(screen.clone(), config.interval);
        debug!(max, "progress bar started");

        Ok(Self {
            screen,
            spinner: Some(spinner),
        })
    }

    pub fn current(&self) -> u64 {
        lock(&self.screen).state.current()
    }

    pub fn max(&self) -> u64 {
        lock(&self.screen).state.max()
    }

    /// Draw the bar for the work done so far, then count one more step.
    ///
    /// A `message` is printed first as a permanent line above the bar.
    pub fn print_progress(&mut self, message: Option<&str>) {
        let mut screen = lock(&self.screen);
        screen.draw_bar(message);
        screen.state.advance();
    }

    /// Stop the spinner and print the full bar as a permanent line.
    ///
    /// Works after [`stop`](Self::stop) too; the line is still printed.
    pub async fn print_complete(&mut self) {
        self.stop().await;
        let mut screen = lock(&self.screen);
        screen.state.complete();
        screen.draw_complete();
        debug!(max = screen.state.max(), "progress bar complete");
    }

    /// Replace the total and redraw.
    pub fn set_max(&mut self, new_max: i64) -> Result<()> {
        let mut screen = lock(&self.screen);
        screen.state.set_max(new_max)?;
        screen.draw_bar(None);
        Ok(())
    }

    /// Add to the total and redraw.
    pub fn grow_max(&mut self, delta: i64) -> Result<()> {
        let mut screen = lock(&self.screen);
        screen.state.grow_max(delta)?;
        screen.draw_bar(None);
        Ok(())
    }

    /// Stop the spinner and restore the terminal. Does nothing if already
    /// stopped.
    pub async fn stop(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop().await;
            lock(&self.screen).leave_render_mode();
            debug!("spinner stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.spinner.as_ref().is_some_and(SpinnerLoop::is_running)
    }
}

impl Drop for TerminalProgress {
    fn drop(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abort();
            lock(&self.screen).leave_render_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{FixedTerminal, SharedBuffer};

    fn bar(max: i64) -> (TerminalProgress, SharedBuffer) {
        let buf = SharedBuffer::new();
        let config = ProgressConfig {
            color: false,
            raw_mode: false,
            ..ProgressConfig::default()
        };
        let bar = TerminalProgress::with_config(max, config, FixedTerminal::new(40), buf.clone())
            .unwrap();
        (bar, buf)
    }

    #[tokio::test]
    async fn fresh_bar_is_running_at_zero() {
        let (mut bar, _) = bar(10);
        assert_eq!(bar.current(), 0);
        assert_eq!(bar.max(), 10);
        assert!(bar.is_running());
        bar.stop().await;
    }

    #[test]
    fn new_without_runtime_is_environment_error() {
        let buf = SharedBuffer::new();
        let err = TerminalProgress::with_config(
            5,
            ProgressConfig::default(),
            FixedTerminal::new(40),
            buf,
        )
        .err()
        .unwrap();
        assert!(matches!(err, ProgressError::EnvironmentUnavailable { .. }));
    }

    #[test]
    fn invalid_max_is_checked_before_runtime() {
        let err = TerminalProgress::with_config(
            0,
            ProgressConfig::default(),
            FixedTerminal::new(40),
            SharedBuffer::new(),
        )
        .err()
        .unwrap();
        assert!(err.is_invalid_argument());
    }

    #[tokio::test]
    async fn stop_twice_is_a_no_op() {
        let (mut bar, _) = bar(3);
        bar.stop().await;
        assert!(!bar.is_running());
        bar.stop().await;
        assert!(!bar.is_running());
    }

    #[tokio::test]
    async fn set_max_redraws_without_advancing() {
        let (mut bar, buf) = bar(10);
        bar.print_progress(None);
        bar.stop().await;
        buf.clear();

        bar.set_max(20).unwrap();
        assert_eq!(bar.current(), 1);
        assert!(buf.contents().contains(" 1/20: ["));
    }

    #[tokio::test]
    async fn complete_sets_current_to_max() {
        let (mut bar, _) = bar(4);
        bar.print_progress(None);
        bar.print_complete().await;
        assert_eq!(bar.current(), 4);
        assert!(!bar.is_running());
    }

    #[tokio::test]
    async fn drop_while_running_does_not_panic() {
        let (bar, _) = bar(3);
        drop(bar);
    }
}
