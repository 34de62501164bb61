//! Interactive terminal prompts: free text, confirmation, single select and checkbox.
//!
//! ```no_run
//! use promptkit::Prompt;
//!
//! let email = Prompt::text("What's your e-mail")
//!     .with_default("example@mail.com")
//!     .ask()?;
//! let proceed = Prompt::confirm("Continue", Some(false)).ask()?;
//! # Ok::<(), promptkit::PromptError>(())
//! ```

pub mod buffer;
pub mod colors;
mod common;
pub mod config;
pub mod keys;
mod logging;
pub mod prompt;
pub mod selection;
pub mod terminal;
pub mod theme;

pub use buffer::TextBuffer;
pub use colors::{Colors, Formatter};
pub use common::{PROJECT_NAME, PROJECT_VERSION};
pub use config::{ColorMode, Config, Glyphs, init_configuration, show_configuration};
pub use keys::{CrosstermKeys, Key, KeySource, ScriptedKeys};
pub use logging::Logging;
pub use prompt::{
    CheckboxState, ConfirmState, HeaderLayout, KeyOutcome, Prompt, PromptError, PromptState,
    SelectState, TextState,
};
pub use selection::SelectionCursor;
pub use terminal::{Screen, TerminalSession};
pub use theme::Theme;
