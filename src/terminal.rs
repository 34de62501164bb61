//! Terminal output primitives and RAII raw-mode session.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand,
    cursor::{Hide, MoveLeft, MoveRight, MoveToColumn, MoveUp, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    style::Print,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};

/// Cursor-relative writer used by every prompt.
///
/// Commands are queued on the underlying writer and only reach the terminal
/// on [`Screen::flush`].
pub struct Screen<'a> {
    out: &'a mut dyn Write,
}

impl<'a> Screen<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        if !text.is_empty() {
            self.out.queue(Print(text))?;
        }
        Ok(())
    }

    /// Moves the cursor `offset` columns, right when positive, left when negative.
    pub fn move_horizontally(&mut self, offset: isize) -> io::Result<()> {
        let columns = clamp_u16(offset.unsigned_abs());
        if columns == 0 {
            return Ok(());
        }
        if offset > 0 {
            self.out.queue(MoveRight(columns))?;
        } else {
            self.out.queue(MoveLeft(columns))?;
        }
        Ok(())
    }

    pub fn up(&mut self, lines: usize) -> io::Result<()> {
        let lines = clamp_u16(lines);
        if lines > 0 {
            self.out.queue(MoveUp(lines))?;
        }
        Ok(())
    }

    pub fn clear_to_end_of_line(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    pub fn clear_line(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::CurrentLine))?;
        Ok(())
    }

    pub fn start_of_line(&mut self) -> io::Result<()> {
        self.out.queue(MoveToColumn(0))?;
        Ok(())
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.out.queue(Hide)?;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.out.queue(Show)?;
        Ok(())
    }

    /// Ends the current line. Raw mode does not translate `\n`, so the carriage return is explicit.
    pub fn newline(&mut self) -> io::Result<()> {
        self.print("\r\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// RAII guard for interactive input.
///
/// Enables raw mode and bracketed paste on creation; restores cursor
/// visibility, disables paste and leaves raw mode on drop, on every exit path.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    /// Puts the terminal into raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot switch modes.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let session = Self { _private: () };
        execute!(io::stdout(), EnableBracketedPaste)?;
        log::debug!("terminal session started");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Restore terminal state, ignoring errors during cleanup
        let _ = execute!(io::stdout(), DisableBracketedPaste, Show);
        let _ = disable_raw_mode();
        log::debug!("terminal session released");
    }
}
