//! Single-line editable text buffer.
//!
//! Every editing operation returns the number of columns the terminal caret
//! has to move to stay on the logical cursor (negative is left). The owning
//! prompt applies that shift; rendering then redraws the whole line.

use std::io;

use crate::{terminal::Screen, theme::Theme};

/// Code points plus a cursor offset, `0 <= cursor <= content.len()`.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: Vec<char>,
    cursor: usize,
    placeholder: Vec<char>,
    masked: bool,
}

impl TextBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the buffer; the cursor lands after the last code point.
    #[must_use]
    pub fn with_content(mut self, text: &str) -> Self {
        self.content = text.chars().collect();
        self.cursor = self.content.len();
        self
    }

    /// Dimmed text shown while the buffer is empty.
    #[must_use]
    pub fn with_placeholder(mut self, text: &str) -> Self {
        self.placeholder = text.chars().collect();
        self
    }

    /// Renders every code point as the theme's mask glyph without touching the content.
    #[must_use]
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    #[must_use]
    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// The typed text.
    #[must_use]
    pub fn value(&self) -> String {
        self.content.iter().collect()
    }

    /// The typed text, or the placeholder when nothing was typed.
    #[must_use]
    pub fn resolve_value(&self) -> String {
        if self.content.is_empty() {
            self.placeholder.iter().collect()
        } else {
            self.value()
        }
    }

    /// What the terminal shows for `chars`: the chars themselves or the mask.
    fn display(&self, chars: &[char], mask: char) -> String {
        if self.masked {
            std::iter::repeat_n(mask, chars.len()).collect()
        } else {
            chars.iter().collect()
        }
    }

    /// Display form of `value`, masked when the buffer is.
    #[must_use]
    pub fn display_value(&self, value: &str, mask: char) -> String {
        let chars: Vec<char> = value.chars().collect();
        self.display(&chars, mask)
    }

    pub fn move_left(&mut self) -> isize {
        if self.cursor == 0 {
            return 0;
        }
        self.cursor = self.cursor.saturating_sub(1);
        -1
    }

    pub fn move_right(&mut self) -> isize {
        if self.cursor >= self.content.len() {
            return 0;
        }
        self.cursor = self.cursor.saturating_add(1);
        1
    }

    /// Splices `text` in at the cursor and advances past it.
    ///
    /// Carriage returns, as produced by pasting several lines, become spaces.
    /// Leading spaces are dropped while the buffer is empty, so a lone space
    /// is a no-op there.
    pub fn insert(&mut self, text: &str) -> isize {
        let leading = self.content.is_empty();
        let chars: Vec<char> = text
            .chars()
            .map(|c| if c == '\r' { ' ' } else { c })
            .skip_while(|&c| leading && c == ' ')
            .collect();

        if chars.is_empty() {
            return 0;
        }

        let inserted = chars.len();
        let at = self.cursor.min(self.content.len());
        self.content.splice(at..at, chars);
        self.cursor = at.saturating_add(inserted);
        columns(inserted)
    }

    /// Removes the code point before the cursor.
    pub fn backspace(&mut self) -> isize {
        if self.cursor == 0 {
            return 0;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.content.remove(self.cursor);
        -1
    }

    /// Removes the code point under the cursor; the caret stays put.
    pub fn delete_forward(&mut self) -> isize {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
        0
    }

    /// Redraws the whole line.
    ///
    /// Expects the terminal caret on the logical cursor when `rerender` is
    /// set, and at the start of the buffer otherwise. Leaves the caret on the
    /// logical cursor.
    pub fn render(&self, screen: &mut Screen<'_>, theme: &Theme, rerender: bool) -> io::Result<()> {
        let mask = theme.glyphs.mask;
        if rerender {
            screen.move_horizontally(-columns(self.cursor))?;
        }
        screen.clear_to_end_of_line()?;

        if self.content.is_empty() && !self.placeholder.is_empty() {
            screen.print(&theme.colors.dim.paint(&self.display(&self.placeholder, mask)))?;
            return screen.move_horizontally(-columns(self.placeholder.len()));
        }

        screen.print(&self.display(&self.content, mask))?;
        screen.move_horizontally(-columns(self.content.len().saturating_sub(self.cursor)))
    }

    /// Clears the line from the buffer's first column, leaving the caret there.
    pub fn erase(&self, screen: &mut Screen<'_>) -> io::Result<()> {
        screen.move_horizontally(-columns(self.cursor))?;
        screen.clear_to_end_of_line()
    }
}

fn columns(count: usize) -> isize {
    isize::try_from(count).unwrap_or(isize::MAX)
}
