//! Project-wide constants.

use std::time::Duration;

/// Braille spinner frames, in rotation order.
pub const SPINNER_GLYPHS: [char; 8] = ['⣷', '⣯', '⣟', '⡿', '⢿', '⣻', '⣽', '⣾'];

/// Glyph shown before the spinner has ticked. The rotation restarts after it.
pub const RESTING_GLYPH: char = SPINNER_GLYPHS[SPINNER_GLYPHS.len() - 1];

/// Spinner frame interval (16 frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_micros(62_500);

/// Character used for the filled part of the bar.
pub const FILL_CHAR: char = '=';

/// Closing bracket of the bar.
pub const SUFFIX: &str = "]";

/// Width assumed when the terminal cannot report one.
pub const FALLBACK_WIDTH: u16 = 80;
