//! Formatters and glyphs handed to every prompt.

use crate::{
    colors::Colors,
    config::{Config, Glyphs},
};

/// Everything a prompt needs to draw itself.
///
/// Passed in at construction; no prompt reads global styling state.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Style formatters, all identity when color support is off
    pub colors: Colors,
    /// Markers and the mask character
    pub glyphs: Glyphs,
}

impl Theme {
    /// Creates a theme with default glyphs.
    #[must_use]
    pub fn new(colors_enabled: bool) -> Self {
        Self {
            colors: Colors::new(colors_enabled),
            glyphs: Glyphs::default(),
        }
    }

    /// Resolves the configured color mode once and takes the configured glyphs.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            colors: Colors::new(config.color.enabled()),
            glyphs: config.glyphs.clone(),
        }
    }

    #[must_use]
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }
}
