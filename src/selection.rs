//! Wrapping cursor over a fixed list of entries, with optional check marks.

use std::io;

use crate::terminal::Screen;

/// One entry as handed to a row renderer.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a, T> {
    pub entry: &'a T,
    pub active: bool,
    pub checked: bool,
}

/// Index over `entries`, always `< entries.len()` when the list is non-empty.
#[derive(Debug, Clone)]
pub struct SelectionCursor<T> {
    entries: Vec<T>,
    checked: Vec<bool>,
    index: usize,
}

impl<T> SelectionCursor<T> {
    #[must_use]
    pub fn new(entries: Vec<T>) -> Self {
        let checked = vec![false; entries.len()];
        Self {
            entries,
            checked,
            index: 0,
        }
    }

    /// Starts on `index`, clamped to the last entry.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.set_index(index);
        self
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.entries.len().saturating_sub(1));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.index)
    }

    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_up(&mut self) {
        let count = self.entries.len();
        if count > 0 {
            self.index = (self.index + count - 1) % count;
        }
    }

    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_down(&mut self) {
        let count = self.entries.len();
        if count > 0 {
            self.index = (self.index + 1) % count;
        }
    }

    pub fn jump_first(&mut self) {
        self.index = 0;
    }

    pub fn jump_last(&mut self) {
        self.index = self.entries.len().saturating_sub(1);
    }

    pub fn toggle_current(&mut self) {
        if let Some(flag) = self.checked.get_mut(self.index) {
            *flag = !*flag;
        }
    }

    pub fn set_checked(&mut self, index: usize, value: bool) {
        if let Some(flag) = self.checked.get_mut(index) {
            *flag = value;
        }
    }

    /// Checks every entry matching `predicate`, leaving the others as they are.
    pub fn check_where<P>(&mut self, predicate: P)
    where
        P: Fn(&T) -> bool,
    {
        for (entry, flag) in self.entries.iter().zip(self.checked.iter_mut()) {
            if predicate(entry) {
                *flag = true;
            }
        }
    }

    pub fn set_all_checked(&mut self, value: bool) {
        self.checked.fill(value);
    }

    /// Checked entries in list order.
    pub fn checked_entries(&self) -> impl Iterator<Item = &T> {
        self.entries
            .iter()
            .zip(&self.checked)
            .filter_map(|(entry, &checked)| checked.then_some(entry))
    }

    /// The entry under the cursor, consuming the list.
    #[must_use]
    pub fn resolve_single(self) -> Option<T> {
        self.entries.into_iter().nth(self.index)
    }

    /// Every checked entry in list order; empty when none are checked.
    #[must_use]
    pub fn resolve_checked(self) -> Vec<T> {
        self.entries
            .into_iter()
            .zip(self.checked)
            .filter_map(|(entry, checked)| checked.then_some(entry))
            .collect()
    }

    /// Draws one line per entry.
    ///
    /// The first render hides the caret and starts on the current line. A
    /// rerender climbs `len - 1` lines first. The last line has no trailing
    /// newline, so the caret always ends on the last entry's line.
    pub fn render<F>(&self, screen: &mut Screen<'_>, rerender: bool, mut line: F) -> io::Result<()>
    where
        F: FnMut(Row<'_, T>) -> String,
    {
        if rerender {
            screen.up(self.entries.len().saturating_sub(1))?;
        } else {
            screen.hide_cursor()?;
        }

        let last = self.entries.len().saturating_sub(1);
        for (index, entry) in self.entries.iter().enumerate() {
            screen.start_of_line()?;
            screen.clear_to_end_of_line()?;
            screen.print(&line(Row {
                entry,
                active: index == self.index,
                checked: self.is_checked(index),
            }))?;
            if index != last {
                screen.newline()?;
            }
        }
        Ok(())
    }

    /// Clears every entry line, leaving the caret at the start of the first one.
    pub fn erase(&self, screen: &mut Screen<'_>) -> io::Result<()> {
        screen.clear_line()?;
        for _ in 1..self.entries.len() {
            screen.up(1)?;
            screen.clear_line()?;
        }
        screen.start_of_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> SelectionCursor<String> {
        SelectionCursor::new((1..=n).map(|i| format!("Item {i}")).collect())
    }

    #[test]
    fn test_move_down_is_cyclic() {
        for n in 1..6 {
            let mut cursor = items(n);
            cursor.move_down();
            let start = cursor.index();
            for _ in 0..n {
                cursor.move_down();
                assert!(cursor.index() < n);
            }
            assert_eq!(cursor.index(), start);
        }
    }

    #[test]
    fn test_move_up_wraps_below_zero() {
        let mut cursor = items(4);
        cursor.move_up();
        assert_eq!(cursor.index(), 3);
        cursor.move_up();
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_jumps() {
        let mut cursor = items(4);
        cursor.jump_last();
        assert_eq!(cursor.current().map(String::as_str), Some("Item 4"));
        cursor.jump_first();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_empty_list_navigation_is_safe() {
        let mut cursor: SelectionCursor<u8> = SelectionCursor::new(Vec::new());
        cursor.move_up();
        cursor.move_down();
        cursor.jump_last();
        cursor.toggle_current();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.current().is_none());
        assert!(cursor.resolve_single().is_none());
    }

    #[test]
    fn test_with_index_clamps() {
        assert_eq!(items(3).with_index(10).index(), 2);
        assert_eq!(items(3).with_index(1).index(), 1);
    }

    #[test]
    fn test_toggle_current() {
        let mut cursor = items(3);
        cursor.move_down();
        cursor.toggle_current();
        assert!(cursor.is_checked(1));
        cursor.toggle_current();
        assert!(!cursor.is_checked(1));
    }

    #[test]
    fn test_set_all_checked() {
        let mut cursor = items(3);
        cursor.set_all_checked(true);
        assert_eq!(cursor.clone().resolve_checked(), vec!["Item 1", "Item 2", "Item 3"]);

        cursor.set_all_checked(false);
        assert!(cursor.resolve_checked().is_empty());
    }

    #[test]
    fn test_check_where() {
        let mut cursor = items(4);
        cursor.check_where(|item| item.ends_with('2') || item.ends_with('3'));
        assert_eq!(cursor.resolve_checked(), vec!["Item 2", "Item 3"]);
    }

    #[test]
    fn test_resolve_checked_keeps_order() {
        let mut cursor = items(4);
        cursor.set_checked(3, true);
        cursor.set_checked(0, true);
        assert_eq!(cursor.checked_entries().count(), 2);
        assert_eq!(cursor.resolve_checked(), vec!["Item 1", "Item 4"]);
    }

    #[test]
    fn test_render_climbs_len_minus_one_on_rerender() {
        let cursor = items(3);
        let mut out = Vec::new();
        let mut screen = Screen::new(&mut out);
        cursor
            .render(&mut screen, true, |row| (*row.entry).clone())
            .unwrap();
        screen.flush().unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("\x1b[2A"));
        assert_eq!(out.matches("\r\n").count(), 2);
        assert!(out.ends_with("Item 3"));
    }

    #[test]
    fn test_first_render_hides_caret() {
        let cursor = items(2);
        let mut out = Vec::new();
        let mut screen = Screen::new(&mut out);
        cursor
            .render(&mut screen, false, |row| {
                format!("{}{}", if row.active { ">" } else { " " }, row.entry)
            })
            .unwrap();
        screen.flush().unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("\x1b[?25l"));
        assert!(out.contains(">Item 1"));
        assert!(out.contains(" Item 2"));
    }
}
