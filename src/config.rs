use std::time::Duration;

use crate::consts::{FALLBACK_WIDTH, FRAME_INTERVAL};

/// How a progress bar draws itself.
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Delay between spinner frames.
    pub interval: Duration,
    /// Color the fill characters.
    pub color: bool,
    /// Put the tty in raw mode while the bar is live.
    pub raw_mode: bool,
    /// Width used when the terminal can't report its own.
    pub fallback_width: u16,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            interval: FRAME_INTERVAL,
            color: true,
            raw_mode: true,
            fallback_width: FALLBACK_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_consts() {
        let config = ProgressConfig::default();
        assert_eq!(config.interval, FRAME_INTERVAL);
        assert_eq!(config.fallback_width, 80);
        assert!(config.color);
        assert!(config.raw_mode);
    }

    #[test]
    fn struct_update_overrides_fields() {
        let config = ProgressConfig {
            color: false,
            ..ProgressConfig::default()
        };
        assert!(!config.color);
        assert!(config.raw_mode);
    }
}
