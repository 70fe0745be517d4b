//! A single-line, in-place terminal progress bar.
//!
//! [`TerminalProgress`] draws `completed/total` as a proportional bar sized to
//! the terminal, next to a braille spinner that keeps turning on its own
//! schedule so the line looks alive between updates.

pub mod config;
pub mod consts;
pub mod error;
pub mod logging;
pub mod progress;
pub mod render;
mod screen;
pub mod spinner;
pub mod state;
pub mod style;
pub mod terminal;

pub use config::ProgressConfig;
pub use error::{ProgressError, Result};
pub use progress::TerminalProgress;
pub use terminal::{CrosstermTerminal, FixedTerminal, SharedBuffer, Terminal};
