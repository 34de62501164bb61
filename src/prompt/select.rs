//! Single selection from a fixed list.

use std::{fmt, io};

use super::{HeaderLayout, KeyOutcome, Prompt, PromptError, PromptState};
use crate::{
    colors::Formatter, keys::Key, selection::SelectionCursor, terminal::Screen, theme::Theme,
};

pub(super) type NameFn<T> = Box<dyn Fn(&T) -> String>;
pub(super) type ColorFn<T> = Box<dyn Fn(&T) -> Formatter>;

/// State of a select prompt.
pub struct SelectState<T> {
    cursor: SelectionCursor<T>,
    name: NameFn<T>,
    color: Option<ColorFn<T>>,
}

impl<T> fmt::Debug for SelectState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectState")
            .field("len", &self.cursor.len())
            .field("index", &self.cursor.index())
            .finish_non_exhaustive()
    }
}

impl<T> SelectState<T> {
    #[must_use]
    pub fn cursor(&self) -> &SelectionCursor<T> {
        &self.cursor
    }

    fn label(&self, entry: &T) -> String {
        let name = (self.name)(entry);
        match &self.color {
            Some(color) => color(entry).paint(&name),
            None => name,
        }
    }
}

impl<T> PromptState for SelectState<T> {
    type Output = Option<T>;

    fn render(&self, screen: &mut Screen<'_>, theme: &Theme, rerender: bool) -> io::Result<()> {
        let colors = &theme.colors;
        let pointer = colors.cyan.paint(&format!("{}  ", theme.glyphs.pointer));

        self.cursor.render(screen, rerender, |row| {
            let label = self.label(row.entry);
            if row.active {
                format!("{pointer} {}", colors.underline.paint(&label))
            } else {
                format!("    {label}")
            }
        })
    }

    fn handle_key(&mut self, key: &Key, _screen: &mut Screen<'_>) -> io::Result<KeyOutcome> {
        match key {
            Key::Left => self.cursor.jump_first(),
            Key::Right => self.cursor.jump_last(),
            Key::Up => self.cursor.move_up(),
            Key::Down => self.cursor.move_down(),
            Key::Enter => return Ok(KeyOutcome::Submit),
            _ => {}
        }
        Ok(KeyOutcome::Continue)
    }

    fn close(
        &self,
        screen: &mut Screen<'_>,
        _theme: &Theme,
        error: Option<&PromptError>,
    ) -> io::Result<String> {
        self.cursor.erase(screen)?;
        screen.show_cursor()?;

        if let Some(err) = error {
            return Ok(err.to_string());
        }
        Ok(self
            .cursor
            .current()
            .map_or_else(|| "none".to_string(), |entry| (self.name)(entry)))
    }

    /// The entry under the cursor; `None` only for an empty list.
    fn resolve(self) -> Option<T> {
        self.cursor.resolve_single()
    }
}

impl<T> Prompt<SelectState<T>> {
    /// Pick one of `entries`, each shown as `name(entry)`.
    #[must_use]
    pub fn select<F>(message: impl Into<String>, entries: Vec<T>, name: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        let state = SelectState {
            cursor: SelectionCursor::new(entries),
            name: Box::new(name),
            color: None,
        };
        Self::from_state(
            state,
            message,
            "› - Use arrow-keys. Return to submit.",
            HeaderLayout::Above,
        )
    }

    /// Styles each entry's name with the formatter `color(entry)` returns.
    #[must_use]
    pub fn with_color<F>(mut self, color: F) -> Self
    where
        F: Fn(&T) -> Formatter + 'static,
    {
        self.state.color = Some(Box::new(color));
        self
    }

    /// Places the cursor on `index` (clamped) instead of the first entry.
    #[must_use]
    pub fn with_starting_cursor(mut self, index: usize) -> Self {
        self.state.cursor.set_index(index);
        self
    }
}
