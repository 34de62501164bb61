//! Prompt lifecycle shared by every variant.
//!
//! A [`Prompt`] prints its header, renders the variant once, then feeds key
//! events to the variant until one of them submits. Interrupt and Escape are
//! handled here and never reach the variant. Every handled key is followed by
//! a rerender. On the way out the variant erases itself and the prompt prints
//! a single completion line.
//!
//! Only one prompt may be open at a time; opening another while one is
//! reading keys is the caller's responsibility to avoid.

mod checkbox;
mod confirm;
mod select;
mod text;

use std::io;

use derive_more::{Display, Error};
use log::{debug, info, trace};

pub use checkbox::CheckboxState;
pub use confirm::ConfirmState;
pub use select::SelectState;
pub use text::TextState;

use crate::{
    keys::{CrosstermKeys, Key, KeySource},
    terminal::{Screen, TerminalSession},
    theme::Theme,
};

/// Why a prompt ended without a submission.
#[derive(Debug, Display, Error)]
pub enum PromptError {
    /// Ctrl+C
    #[display("terminated with SIGINT (130)")]
    Interrupted,
    /// Escape
    #[display("canceled")]
    Cancelled,
    #[display("terminal I/O failed: {_0}")]
    Io(#[error(source)] io::Error),
}

impl PromptError {
    /// True for the two user-initiated endings, Interrupt and Escape.
    #[must_use]
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Self::Interrupted | Self::Cancelled)
    }
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// What a variant made of one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep reading keys
    Continue,
    /// Stop; the current state is the answer
    Submit,
    /// The submission was not accepted; keep reading keys
    Rejected(String),
}

/// Where the input area sits relative to the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// Input continues on the header line
    Inline,
    /// Input starts on the line below the header
    Above,
}

/// Variant-specific state plus its render, key and close behavior.
pub trait PromptState {
    type Output;

    /// Draws the input area. `rerender` is false only for the first call.
    fn render(&self, screen: &mut Screen<'_>, theme: &Theme, rerender: bool) -> io::Result<()>;

    /// Applies one key; Interrupt and Escape never arrive here.
    fn handle_key(&mut self, key: &Key, screen: &mut Screen<'_>) -> io::Result<KeyOutcome>;

    /// Erases the input area and returns the summary for the completion line.
    fn close(
        &self,
        screen: &mut Screen<'_>,
        theme: &Theme,
        error: Option<&PromptError>,
    ) -> io::Result<String>;

    /// Extracts the typed result.
    fn resolve(self) -> Self::Output;
}

/// One interactive question.
pub struct Prompt<S> {
    state: S,
    message: String,
    hint: String,
    layout: HeaderLayout,
    show_header: bool,
    show_summary: bool,
    theme: Theme,
}

impl<S: PromptState> Prompt<S> {
    pub(crate) fn from_state(
        state: S,
        message: impl Into<String>,
        hint: impl Into<String>,
        layout: HeaderLayout,
    ) -> Self {
        Self {
            state,
            message: message.into(),
            hint: hint.into(),
            layout,
            show_header: true,
            show_summary: true,
            theme: Theme::default(),
        }
    }

    /// Replaces the gray text shown after the prompt message.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn without_header(mut self) -> Self {
        self.show_header = false;
        self
    }

    #[must_use]
    pub fn without_summary(mut self) -> Self {
        self.show_summary = false;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Runs the prompt against an injected key source and screen.
    ///
    /// Returns the final state on submission. The completion line is drawn
    /// on every path, including cancellation.
    ///
    /// # Errors
    ///
    /// [`PromptError::Interrupted`] on Ctrl+C, [`PromptError::Cancelled`] on
    /// Escape, [`PromptError::Io`] if the key source or the screen fails.
    pub fn open(
        mut self,
        keys: &mut dyn KeySource,
        screen: &mut Screen<'_>,
    ) -> Result<S, PromptError> {
        info!("prompt opened: {}", self.message);

        let outcome = self.start(screen).and_then(|()| self.dispatch(keys, screen));
        let finished = self.finish(screen, outcome.as_ref().err());

        match (outcome, finished) {
            (Err(err), _) => {
                info!("prompt closed: {err}");
                Err(err)
            }
            (Ok(()), Err(err)) => Err(err.into()),
            (Ok(()), Ok(())) => {
                info!("prompt submitted: {}", self.message);
                Ok(self.state)
            }
        }
    }

    /// Runs the prompt on the real terminal, in raw mode for its duration.
    ///
    /// # Errors
    ///
    /// See [`Prompt::open`].
    pub fn interact(self) -> Result<S, PromptError> {
        let _session = TerminalSession::new()?;
        let mut stdout = io::stdout();
        let mut screen = Screen::new(&mut stdout);
        self.open(&mut CrosstermKeys::new(), &mut screen)
    }

    /// [`Prompt::interact`] followed by [`PromptState::resolve`].
    ///
    /// # Errors
    ///
    /// See [`Prompt::open`].
    pub fn ask(self) -> Result<S::Output, PromptError> {
        self.interact().map(PromptState::resolve)
    }

    fn start(&self, screen: &mut Screen<'_>) -> Result<(), PromptError> {
        if self.show_header {
            let colors = &self.theme.colors;
            screen.print(&format!(
                "{} {}: {}",
                colors.cyan.paint(&self.theme.glyphs.prompt),
                self.message,
                colors.gray.paint(&self.hint),
            ))?;
            if self.layout == HeaderLayout::Above {
                screen.newline()?;
            }
        }

        self.state.render(screen, &self.theme, false)?;
        screen.flush()?;
        Ok(())
    }

    fn dispatch(
        &mut self,
        keys: &mut dyn KeySource,
        screen: &mut Screen<'_>,
    ) -> Result<(), PromptError> {
        loop {
            let key = keys.next_key()?;
            debug!("key: {}", key.name());

            match key {
                Key::Interrupt => return Err(PromptError::Interrupted),
                Key::Escape => return Err(PromptError::Cancelled),
                _ => {}
            }

            match self.state.handle_key(&key, screen)? {
                KeyOutcome::Submit => return Ok(()),
                KeyOutcome::Continue => {}
                KeyOutcome::Rejected(reason) => debug!("submission rejected: {reason}"),
            }

            trace!("rerender");
            self.state.render(screen, &self.theme, true)?;
            screen.flush()?;
        }
    }

    fn finish(&self, screen: &mut Screen<'_>, error: Option<&PromptError>) -> io::Result<()> {
        let summary = self.state.close(screen, &self.theme, error)?;

        if self.show_header {
            if self.layout == HeaderLayout::Above {
                screen.up(1)?;
            }
            screen.clear_line()?;
        }
        screen.start_of_line()?;

        if self.show_summary {
            let colors = &self.theme.colors;
            let glyphs = &self.theme.glyphs;
            let marker = if error.is_some() {
                colors.red.paint(&glyphs.failed)
            } else {
                colors.green.paint(&glyphs.completed)
            };
            screen.print(&format!(
                "{marker} {}: {}",
                self.message,
                colors.gray.paint(&summary),
            ))?;
            screen.newline()?;
        }

        screen.flush()
    }
}
