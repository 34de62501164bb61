//! Decoded key events and the sources that produce them.

use std::{collections::VecDeque, io};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key event as seen by the prompts.
///
/// `Literal` carries the typed text; a paste arrives as one `Literal` holding
/// every pasted character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Delete,
    Space,
    Literal(String),
    Enter,
    Escape,
    Interrupt,
}

impl Key {
    /// Shorthand for a single typed character.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::Literal(c.to_string())
    }

    /// Builds the event for pasted text.
    ///
    /// Line breaks are normalized to `\r`, the form keyboard input uses.
    #[must_use]
    pub fn paste(text: &str) -> Self {
        Self::Literal(text.replace("\r\n", "\r").replace('\n', "\r"))
    }

    /// Name for logs; never includes the typed text.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
            Self::Space => "space",
            Self::Literal(_) => "literal",
            Self::Enter => "enter",
            Self::Escape => "escape",
            Self::Interrupt => "interrupt",
        }
    }

    /// One `Literal` per character of `text`, as if typed.
    pub fn typed(text: &str) -> impl Iterator<Item = Key> + '_ {
        text.chars().map(|c| if c == ' ' { Key::Space } else { Key::char(c) })
    }
}

/// Blocking supplier of key events.
pub trait KeySource {
    /// Waits for and returns the next key.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read or is exhausted.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Reads keys from the terminal through crossterm.
///
/// The terminal must already be in raw mode, see
/// [`TerminalSession`](crate::terminal::TerminalSession).
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(decoded) = decode(&key) {
                        return Ok(decoded);
                    }
                }
                Event::Paste(text) => return Ok(Key::paste(&text)),
                _ => {}
            }
        }
    }
}

/// Maps a crossterm key event onto a [`Key`], skipping releases and unsupported keys.
#[must_use]
pub fn decode(key: &KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Key::Interrupt),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::char(c)),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        _ => None,
    }
}

/// Pre-recorded key sequence.
///
/// Returns `UnexpectedEof` once drained, which ends any prompt still waiting.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_decode_ctrl_c_is_interrupt() {
        let key = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode(&key), Some(Key::Interrupt));
    }

    #[test]
    fn test_decode_plain_chars() {
        assert_eq!(
            decode(&press(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Key::char('x'))
        );
        assert_eq!(
            decode(&press(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Some(Key::char('X'))
        );
        assert_eq!(
            decode(&press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Key::Space)
        );
    }

    #[test]
    fn test_decode_skips_other_control_chords() {
        assert_eq!(decode(&press(KeyCode::Char('a'), KeyModifiers::CONTROL)), None);
        assert_eq!(decode(&press(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_decode_skips_release() {
        let mut key = press(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(decode(&key), None);
    }

    #[test]
    fn test_decode_navigation() {
        assert_eq!(decode(&press(KeyCode::Esc, KeyModifiers::NONE)), Some(Key::Escape));
        assert_eq!(decode(&press(KeyCode::Left, KeyModifiers::NONE)), Some(Key::Left));
        assert_eq!(decode(&press(KeyCode::Delete, KeyModifiers::NONE)), Some(Key::Delete));
    }

    #[test]
    fn test_paste_normalizes_line_breaks() {
        assert_eq!(Key::paste("a\r\nb\nc\rd"), Key::Literal("a\rb\rc\rd".into()));
    }

    #[test]
    fn test_typed_maps_spaces() {
        let keys: Vec<Key> = Key::typed("a b").collect();
        assert_eq!(keys, vec![Key::char('a'), Key::Space, Key::char('b')]);
    }

    #[test]
    fn test_scripted_keys_drain_then_eof() {
        let mut keys = ScriptedKeys::new([Key::Up]);
        assert_eq!(keys.next_key().unwrap(), Key::Up);
        assert_eq!(keys.remaining(), 0);
        let err = keys.next_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
