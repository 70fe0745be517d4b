use owo_colors::OwoColorize;

/// Which part of the bar a run of fill characters belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStyle {
    /// In-flight bar, redrawn in place.
    Progress,
    /// Final bar printed by completion.
    Complete,
}

/// Wraps fill text in display colors. Layout is computed before styling, so
/// escape sequences never count toward the bar width.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, style: FillStyle) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match style {
            FillStyle::Progress => format!("{}", text.bright_cyan()),
            FillStyle::Complete => format!("{}", text.bright_yellow()),
        }
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new(true)
    }
}
