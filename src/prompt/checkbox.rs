//! Multiple selection with check marks.

use std::{fmt, io};

use super::{
    HeaderLayout, KeyOutcome, Prompt, PromptError, PromptState,
    select::{ColorFn, NameFn},
};
use crate::{
    colors::Formatter, keys::Key, selection::SelectionCursor, terminal::Screen, theme::Theme,
};

/// State of a checkbox prompt.
pub struct CheckboxState<T> {
    cursor: SelectionCursor<T>,
    name: NameFn<T>,
    color: Option<ColorFn<T>>,
}

impl<T> fmt::Debug for CheckboxState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxState")
            .field("len", &self.cursor.len())
            .field("index", &self.cursor.index())
            .field("checked", &self.cursor.checked_entries().count())
            .finish_non_exhaustive()
    }
}

impl<T> CheckboxState<T> {
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

impl<T> PromptState for CheckboxState<T> {
    type Output = Vec<T>;

    fn render(&self, screen: &mut Screen<'_>, theme: &Theme, rerender: bool) -> io::Result<()> {
        let colors = &theme.colors;
        let mark = &theme.glyphs.checked;
        let hover = format!("[{}]", colors.gray.paint(mark));
        let filled = format!("[{mark}]");

        self.cursor.render(screen, rerender, |row| {
            let mut label = self.label(row.entry);
            let mut checkbox: &str = "[ ]";
            if row.active {
                checkbox = hover.as_str();
                label = colors.underline.paint(&label);
            }
            if row.checked {
                checkbox = filled.as_str();
            }
            format!("  {checkbox} {label}")
        })
    }

    fn handle_key(&mut self, key: &Key, _screen: &mut Screen<'_>) -> io::Result<KeyOutcome> {
        match key {
            Key::Up => self.cursor.move_up(),
            Key::Down => self.cursor.move_down(),
            Key::Left => self.cursor.set_all_checked(false),
            Key::Right => self.cursor.set_all_checked(true),
            Key::Space => self.cursor.toggle_current(),
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

        let names: Vec<String> = self.cursor.checked_entries().map(|e| (self.name)(e)).collect();
        if names.is_empty() {
            return Ok("none".to_string());
        }
        Ok(names.join(", "))
    }

    /// The checked entries in list order.
    fn resolve(self) -> Vec<T> {
        self.cursor.resolve_checked()
    }
}

impl<T> Prompt<CheckboxState<T>> {
    /// Check any number of `entries`, each shown as `name(entry)`.
    #[must_use]
    pub fn checkbox<F>(message: impl Into<String>, entries: Vec<T>, name: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        let state = CheckboxState {
            cursor: SelectionCursor::new(entries),
            name: Box::new(name),
            color: None,
        };
        Self::from_state(
            state,
            message,
            "› - Space to toggle, ←/→ for none/all. Return to submit.",
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

    /// Starts with every entry matching `predicate` checked.
    #[must_use]
    pub fn with_checked<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.state.cursor.check_where(predicate);
        self
    }

    /// Places the cursor on `index` (clamped) instead of the first entry.
    #[must_use]
    pub fn with_starting_cursor(mut self, index: usize) -> Self {
        self.state.cursor.set_index(index);
        self
    }
}
