//! Progress counters and spinner phase.

use std::num::NonZeroU64;

use crate::consts::{RESTING_GLYPH, SPINNER_GLYPHS};
use crate::error::{ProgressError, Result};

/// Completed/total work plus the spinner's position in its rotation.
///
/// `max` is never zero and `current` never exceeds it.
#[derive(Debug, Clone)]
pub struct ProgressState {
    current: u64,
    max: NonZeroU64,
    /// `None` until the spinner ticks for the first time.
    phase: Option<usize>,
}

fn positive(name: &'static str, value: i64) -> Result<NonZeroU64> {
    u64::try_from(value)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| ProgressError::invalid(name, value))
}

impl ProgressState {
    pub fn new(max: i64) -> Result<Self> {
        Ok(Self {
            current: 0,
            max: positive("max", max)?,
            phase: None,
        })
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn max(&self) -> u64 {
        self.max.get()
    }

    /// The value to display: `current` clamped to `max`.
    pub fn effective_current(&self) -> u64 {
        self.current.min(self.max.get())
    }

    pub fn advance(&mut self) {
        self.current = self.current.saturating_add(1).min(self.max.get());
    }

    pub fn complete(&mut self) {
        self.current = self.max.get();
    }

    /// Replace `max`, pulling `current` down if it no longer fits.
    pub fn set_max(&mut self, new_max: i64) -> Result<()> {
        self.max = positive("new_max", new_max)?;
        self.current = self.current.min(self.max.get());
        Ok(())
    }

    pub fn grow_max(&mut self, delta: i64) -> Result<()> {
        let step = positive("delta", delta)?;
        self.max = self
            .max
            .checked_add(step.get())
            .ok_or_else(|| ProgressError::invalid("delta", delta))?;
        Ok(())
    }

    pub fn advance_spinner(&mut self) {
        self.phase = Some(match self.phase {
            Some(i) => (i + 1) % SPINNER_GLYPHS.len(),
            None => 0,
        });
    }

    pub fn glyph(&self) -> char {
        self.phase.map_or(RESTING_GLYPH, |i| SPINNER_GLYPHS[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_zero() {
        let state = ProgressState::new(10).unwrap();
        assert_eq!(state.current(), 0);
        assert_eq!(state.max(), 10);
    }

    #[test]
    fn new_rejects_non_positive() {
        for max in [0, -1, -100] {
            let err = ProgressState::new(max).unwrap_err();
            assert!(err.is_invalid_argument(), "max = {max}");
        }
    }

    #[test]
    fn advance_never_passes_max() {
        let mut state = ProgressState::new(3).unwrap();
        for n in 1..=10u64 {
            state.advance();
            assert_eq!(state.current(), n.min(3));
        }
    }

    #[test]
    fn complete_jumps_to_max() {
        let mut state = ProgressState::new(9).unwrap();
        state.advance();
        state.complete();
        assert_eq!(state.current(), 9);
        assert_eq!(state.effective_current(), 9);
    }

    #[test]
    fn set_max_reclamps_current() {
        let mut state = ProgressState::new(10).unwrap();
        for _ in 0..8 {
            state.advance();
        }
        state.set_max(5).unwrap();
        assert_eq!(state.max(), 5);
        assert_eq!(state.current(), 5);
    }

    #[test]
    fn set_max_rejects_non_positive_and_keeps_max() {
        let mut state = ProgressState::new(7).unwrap();
        assert!(state.set_max(0).unwrap_err().is_invalid_argument());
        assert!(state.set_max(-4).unwrap_err().is_invalid_argument());
        assert_eq!(state.max(), 7);
    }

    #[test]
    fn grow_max_adds() {
        let mut state = ProgressState::new(7).unwrap();
        state.grow_max(3).unwrap();
        assert_eq!(state.max(), 10);
    }

    #[test]
    fn grow_max_rejects_non_positive_and_keeps_max() {
        let mut state = ProgressState::new(7).unwrap();
        assert!(state.grow_max(0).unwrap_err().is_invalid_argument());
        assert!(state.grow_max(-1).unwrap_err().is_invalid_argument());
        assert_eq!(state.max(), 7);
    }

    #[test]
    fn grow_max_rejects_overflow() {
        let mut state = ProgressState::new(i64::MAX).unwrap();
        state.grow_max(i64::MAX).unwrap();
        assert!(state.grow_max(2).unwrap_err().is_invalid_argument());
        assert_eq!(state.max(), (i64::MAX as u64) * 2);
    }

    #[test]
    fn spinner_starts_resting_then_cycles() {
        let mut state = ProgressState::new(1).unwrap();
        assert_eq!(state.glyph(), RESTING_GLYPH);

        let seen: Vec<char> = (0..16)
            .map(|_| {
                state.advance_spinner();
                state.glyph()
            })
            .collect();
        assert_eq!(&seen[..8], &SPINNER_GLYPHS);
        assert_eq!(&seen[8..], &SPINNER_GLYPHS);
    }
}
