//! Yes/no confirmation prompt.

use std::io;

use super::{HeaderLayout, KeyOutcome, Prompt, PromptError, PromptState, text::edit};
use crate::{buffer::TextBuffer, keys::Key, terminal::Screen, theme::Theme};

const ACCEPT: &[&str] = &["y", "ye", "yes"];
const DECLINE: &[&str] = &["n", "no"];

/// State of a confirmation prompt: the typed answer and how to read it.
#[derive(Debug, Clone)]
pub struct ConfirmState {
    buffer: TextBuffer,
    default: Option<bool>,
    accept: Vec<String>,
    decline: Vec<String>,
}

impl ConfirmState {
    fn new(default: Option<bool>) -> Self {
        Self {
            buffer: TextBuffer::new(),
            default,
            accept: ACCEPT.iter().map(ToString::to_string).collect(),
            decline: DECLINE.iter().map(ToString::to_string).collect(),
        }
    }

    /// Reads the typed answer, case-insensitively.
    ///
    /// An empty answer takes the default; anything outside both
    /// vocabularies is an error.
    pub fn decision(&self) -> Result<bool, String> {
        let text = self.buffer.value().to_lowercase();

        if text.is_empty() {
            return self
                .default
                .ok_or_else(|| "an answer is required".to_string());
        }
        if self.accept.contains(&text) {
            return Ok(true);
        }
        if self.decline.contains(&text) {
            return Ok(false);
        }
        Err(format!("invalid value: {text}"))
    }
}

impl PromptState for ConfirmState {
    type Output = bool;

    fn render(&self, screen: &mut Screen<'_>, theme: &Theme, _rerender: bool) -> io::Result<()> {
        // the caret sits at offset 0 before the first render, so the rerender path fits both
        self.buffer.render(screen, theme, true)
    }

    fn handle_key(&mut self, key: &Key, screen: &mut Screen<'_>) -> io::Result<KeyOutcome> {
        if *key == Key::Enter {
            return Ok(match self.decision() {
                Ok(_) => KeyOutcome::Submit,
                Err(reason) => KeyOutcome::Rejected(reason),
            });
        }
        edit(&mut self.buffer, key, screen)?;
        Ok(KeyOutcome::Continue)
    }

    fn close(
        &self,
        screen: &mut Screen<'_>,
        _theme: &Theme,
        error: Option<&PromptError>,
    ) -> io::Result<String> {
        self.buffer.erase(screen)?;
        if let Some(err) = error {
            return Ok(err.to_string());
        }
        let answer = if self.decision().unwrap_or(false) { "yes" } else { "no" };
        Ok(answer.to_string())
    }

    /// The answer; an unreadable one counts as `false`.
    fn resolve(self) -> bool {
        self.decision().unwrap_or(false)
    }
}

impl Prompt<ConfirmState> {
    /// A yes/no question. `default` answers an empty submission.
    #[must_use]
    pub fn confirm(message: impl Into<String>, default: Option<bool>) -> Self {
        let hint = match default {
            Some(true) => "[Y/n] ",
            Some(false) => "[y/N] ",
            None => "[y/n] ",
        };
        Self::from_state(ConfirmState::new(default), message, hint, HeaderLayout::Inline)
    }

    /// Replaces the accepted and declined words. Matching is case-insensitive.
    #[must_use]
    pub fn with_vocabulary<A, D>(mut self, accept: A, decline: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.state.accept = accept.into_iter().map(|w| w.into().to_lowercase()).collect();
        self.state.decline = decline.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(default: Option<bool>, text: &str) -> ConfirmState {
        let mut state = ConfirmState::new(default);
        state.buffer.insert(text);
        state
    }

    #[test]
    fn test_empty_answer_uses_default() {
        assert_eq!(typed(Some(false), "").decision(), Ok(false));
        assert_eq!(typed(Some(true), "").decision(), Ok(true));
        assert!(typed(None, "").decision().is_err());
    }

    #[test]
    fn test_vocabulary_is_case_insensitive() {
        for word in ["y", "Ye", "YES"] {
            assert_eq!(typed(Some(false), word).decision(), Ok(true), "{word}");
        }
        for word in ["n", "NO"] {
            assert_eq!(typed(Some(true), word).decision(), Ok(false), "{word}");
        }
    }

    #[test]
    fn test_unknown_word_is_rejected() {
        assert!(typed(Some(true), "maybe").decision().is_err());
        assert!(!typed(Some(true), "maybe").resolve());
    }

    #[test]
    fn test_enter_on_invalid_keeps_prompt_open() {
        let mut state = typed(None, "nope");
        let mut out = Vec::new();
        let mut screen = Screen::new(&mut out);

        let outcome = state.handle_key(&Key::Enter, &mut screen).unwrap();
        assert!(matches!(outcome, KeyOutcome::Rejected(_)));

        // the buffer is left intact for correction
        assert_eq!(state.buffer.value(), "nope");
    }
}
