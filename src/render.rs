//! Bar geometry and line rendering.
//!
//! Everything here is pure: callers supply the counters, the terminal width
//! and the spinner glyph, and get back the exact text to write. Overwrite
//! lines end in `\r`, permanent lines in `\r\n` so they also land correctly
//! while the terminal is in raw mode.

use crate::consts::{FILL_CHAR, SUFFIX};
use crate::state::ProgressState;
use crate::style::{FillStyle, Styler};

/// How a line of the given terminal width splits into prefix, bar and suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    pub prefix: String,
    pub max_bar_width: usize,
    pub filled: usize,
    pub blank: usize,
}

impl Geometry {
    /// Geometry of an in-flight bar. `current` is clamped to `max`.
    pub fn compute(current: u64, max: u64, terminal_width: u16, glyph: char) -> Self {
        let current = current.min(max);
        let digits = max.to_string().len();
        let prefix = format!("  {glyph} {current:>digits$}/{max}: [");
        Self::split(prefix, current, max, terminal_width)
    }

    /// Geometry of the final `max/max` bar.
    pub fn complete(max: u64, terminal_width: u16) -> Self {
        let prefix = format!("    {max}/{max}: [");
        Self::split(prefix, max, max, terminal_width)
    }

    pub fn for_state(state: &ProgressState, terminal_width: u16) -> Self {
        Self::compute(
            state.effective_current(),
            state.max(),
            terminal_width,
            state.glyph(),
        )
    }

    fn split(prefix: String, current: u64, max: u64, terminal_width: u16) -> Self {
        let used = prefix.chars().count() + SUFFIX.chars().count();
        let max_bar_width = usize::from(terminal_width).saturating_sub(used);
        let ratio = if max == 0 {
            0.0
        } else {
            current as f64 / max as f64
        };
        let filled = ((ratio * max_bar_width as f64) as usize).min(max_bar_width);
        Self {
            prefix,
            max_bar_width,
            filled,
            blank: max_bar_width - filled,
        }
    }

    fn body(&self, styler: &Styler, style: FillStyle) -> String {
        let fill: String = std::iter::repeat_n(FILL_CHAR, self.filled).collect();
        format!(
            "{}{}{}",
            self.prefix,
            styler.paint(&fill, style),
            " ".repeat(self.blank)
        )
    }
}

/// The bar as an overwrite line.
pub fn bar_line(state: &ProgressState, terminal_width: u16, styler: &Styler) -> String {
    let geometry = Geometry::for_state(state, terminal_width);
    format!("{}{SUFFIX}\r", geometry.body(styler, FillStyle::Progress))
}

/// The spinner-only frame drawn by the animation loop.
pub fn spinner_frame(glyph: char) -> String {
    format!("  {glyph}\r")
}

/// Blank out the current line, then print `message` as a permanent line.
pub fn message_line(message: &str, terminal_width: u16) -> String {
    format!("{}\r{message}\r\n", " ".repeat(usize::from(terminal_width)))
}

/// The final, permanent `max/max` bar.
pub fn complete_line(max: u64, terminal_width: u16, styler: &Styler) -> String {
    let geometry = Geometry::complete(max, terminal_width);
    format!("{}{SUFFIX}\r\n", geometry.body(styler, FillStyle::Complete))
}
