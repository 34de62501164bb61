//! Free text prompt.

use std::io;

use super::{HeaderLayout, KeyOutcome, Prompt, PromptError, PromptState};
use crate::{buffer::TextBuffer, keys::Key, terminal::Screen, theme::Theme};

/// State of a text prompt: the line being typed.
#[derive(Debug, Clone, Default)]
pub struct TextState {
    buffer: TextBuffer,
}

impl TextState {
    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    fn summary(&self, theme: &Theme) -> String {
        self.buffer
            .display_value(&self.buffer.resolve_value(), theme.glyphs.mask)
    }
}

/// Applies the editing keys shared by the text and confirmation prompts.
///
/// Returns false for keys the buffer does not handle.
pub(super) fn edit(buffer: &mut TextBuffer, key: &Key, screen: &mut Screen<'_>) -> io::Result<bool> {
    let shift = match key {
        Key::Left => buffer.move_left(),
        Key::Right => buffer.move_right(),
        Key::Backspace => buffer.backspace(),
        Key::Delete => buffer.delete_forward(),
        Key::Space => buffer.insert(" "),
        Key::Literal(text) => buffer.insert(text),
        _ => return Ok(false),
    };
    screen.move_horizontally(shift)?;
    Ok(true)
}

impl PromptState for TextState {
    type Output = String;

    fn render(&self, screen: &mut Screen<'_>, theme: &Theme, rerender: bool) -> io::Result<()> {
        self.buffer.render(screen, theme, rerender)
    }

    fn handle_key(&mut self, key: &Key, screen: &mut Screen<'_>) -> io::Result<KeyOutcome> {
        if *key == Key::Enter {
            return Ok(KeyOutcome::Submit);
        }
        edit(&mut self.buffer, key, screen)?;
        Ok(KeyOutcome::Continue)
    }

    fn close(
        &self,
        screen: &mut Screen<'_>,
        theme: &Theme,
        error: Option<&PromptError>,
    ) -> io::Result<String> {
        self.buffer.erase(screen)?;
        Ok(error.map_or_else(|| self.summary(theme), ToString::to_string))
    }

    /// The typed text, or the default when nothing was typed.
    fn resolve(self) -> String {
        self.buffer.resolve_value()
    }
}

impl Prompt<TextState> {
    /// A single-line text prompt.
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self::from_state(TextState::default(), message, "", HeaderLayout::Inline)
    }

    /// Shown dimmed while empty and returned if nothing is typed.
    #[must_use]
    pub fn with_default(mut self, value: &str) -> Self {
        self.state.buffer = std::mem::take(&mut self.state.buffer).with_placeholder(value);
        self
    }

    /// Pre-fills the line; the cursor starts after it.
    #[must_use]
    pub fn with_initial_value(mut self, value: &str) -> Self {
        self.state.buffer = std::mem::take(&mut self.state.buffer).with_content(value);
        self
    }

    /// Masks the input, e.g. for passwords.
    #[must_use]
    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.state.buffer = std::mem::take(&mut self.state.buffer).with_masked(sensitive);
        self
    }
}
