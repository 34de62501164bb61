//! Named ANSI formatters sharing one color-support flag.

mod formatter;

use std::borrow::Cow;

pub use formatter::Formatter;

/// The full set of style formatters.
///
/// Built once with [`Colors::new`]; when `enabled` is false every member is
/// the identity formatter.
#[derive(Debug, Clone)]
pub struct Colors {
    pub enabled: bool,
    pub reset: Formatter,
    pub bold: Formatter,
    pub dim: Formatter,
    pub italic: Formatter,
    pub underline: Formatter,
    pub inverse: Formatter,
    pub hidden: Formatter,
    pub strikethrough: Formatter,
    pub black: Formatter,
    pub red: Formatter,
    pub green: Formatter,
    pub yellow: Formatter,
    pub blue: Formatter,
    pub magenta: Formatter,
    pub cyan: Formatter,
    pub white: Formatter,
    pub gray: Formatter,
    pub bg_black: Formatter,
    pub bg_red: Formatter,
    pub bg_green: Formatter,
    pub bg_yellow: Formatter,
    pub bg_blue: Formatter,
    pub bg_magenta: Formatter,
    pub bg_cyan: Formatter,
    pub bg_white: Formatter,
    pub red_bright: Formatter,
    pub green_bright: Formatter,
    pub yellow_bright: Formatter,
    pub blue_bright: Formatter,
    pub magenta_bright: Formatter,
    pub cyan_bright: Formatter,
    pub white_bright: Formatter,
    pub bg_black_bright: Formatter,
    pub bg_red_bright: Formatter,
    pub bg_green_bright: Formatter,
    pub bg_yellow_bright: Formatter,
    pub bg_blue_bright: Formatter,
    pub bg_magenta_bright: Formatter,
    pub bg_cyan_bright: Formatter,
    pub bg_white_bright: Formatter,
}

const FG_CLOSE: &str = "\x1b[39m";
const BG_CLOSE: &str = "\x1b[49m";

impl Colors {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        let init = |open: &'static str, close: &'static str, replace: Option<&'static str>| {
            if enabled {
                Formatter::new(open, close, replace.map(Cow::Borrowed))
            } else {
                Formatter::plain()
            }
        };
        let fg = |open: &'static str| init(open, FG_CLOSE, None);
        let bg = |open: &'static str| init(open, BG_CLOSE, None);

        Self {
            enabled,
            reset: init("\x1b[0m", "\x1b[0m", None),
            bold: init("\x1b[1m", "\x1b[22m", Some("\x1b[22m\x1b[1m")),
            dim: init("\x1b[2m", "\x1b[22m", Some("\x1b[22m\x1b[2m")),
            italic: init("\x1b[3m", "\x1b[23m", None),
            underline: init("\x1b[4m", "\x1b[24m", None),
            inverse: init("\x1b[7m", "\x1b[27m", None),
            hidden: init("\x1b[8m", "\x1b[28m", None),
            strikethrough: init("\x1b[9m", "\x1b[29m", None),
            black: fg("\x1b[30m"),
            red: fg("\x1b[31m"),
            green: fg("\x1b[32m"),
            yellow: fg("\x1b[33m"),
            blue: fg("\x1b[34m"),
            magenta: fg("\x1b[35m"),
            cyan: fg("\x1b[36m"),
            white: fg("\x1b[37m"),
            gray: fg("\x1b[90m"),
            bg_black: bg("\x1b[40m"),
            bg_red: bg("\x1b[41m"),
            bg_green: bg("\x1b[42m"),
            bg_yellow: bg("\x1b[43m"),
            bg_blue: bg("\x1b[44m"),
            bg_magenta: bg("\x1b[45m"),
            bg_cyan: bg("\x1b[46m"),
            bg_white: bg("\x1b[47m"),
            red_bright: fg("\x1b[91m"),
            green_bright: fg("\x1b[92m"),
            yellow_bright: fg("\x1b[93m"),
            blue_bright: fg("\x1b[94m"),
            magenta_bright: fg("\x1b[95m"),
            cyan_bright: fg("\x1b[96m"),
            white_bright: fg("\x1b[97m"),
            bg_black_bright: bg("\x1b[100m"),
            bg_red_bright: bg("\x1b[101m"),
            bg_green_bright: bg("\x1b[102m"),
            bg_yellow_bright: bg("\x1b[103m"),
            bg_blue_bright: bg("\x1b[104m"),
            bg_magenta_bright: bg("\x1b[105m"),
            bg_cyan_bright: bg("\x1b[106m"),
            bg_white_bright: bg("\x1b[107m"),
        }
    }

    /// Looks up a formatter by its snake_case name, e.g. `"bg_red"`.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Formatter> {
        let f = match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "reset" => &self.reset,
            "bold" => &self.bold,
            "dim" => &self.dim,
            "italic" => &self.italic,
            "underline" => &self.underline,
            "inverse" => &self.inverse,
            "hidden" => &self.hidden,
            "strikethrough" => &self.strikethrough,
            "black" => &self.black,
            "red" => &self.red,
            "green" => &self.green,
            "yellow" => &self.yellow,
            "blue" => &self.blue,
            "magenta" => &self.magenta,
            "cyan" => &self.cyan,
            "white" => &self.white,
            "gray" | "grey" | "black_bright" => &self.gray,
            "bg_black" => &self.bg_black,
            "bg_red" => &self.bg_red,
            "bg_green" => &self.bg_green,
            "bg_yellow" => &self.bg_yellow,
            "bg_blue" => &self.bg_blue,
            "bg_magenta" => &self.bg_magenta,
            "bg_cyan" => &self.bg_cyan,
            "bg_white" => &self.bg_white,
            "red_bright" => &self.red_bright,
            "green_bright" => &self.green_bright,
            "yellow_bright" => &self.yellow_bright,
            "blue_bright" => &self.blue_bright,
            "magenta_bright" => &self.magenta_bright,
            "cyan_bright" => &self.cyan_bright,
            "white_bright" => &self.white_bright,
            "bg_black_bright" => &self.bg_black_bright,
            "bg_red_bright" => &self.bg_red_bright,
            "bg_green_bright" => &self.bg_green_bright,
            "bg_yellow_bright" => &self.bg_yellow_bright,
            "bg_blue_bright" => &self.bg_blue_bright,
            "bg_magenta_bright" => &self.bg_magenta_bright,
            "bg_cyan_bright" => &self.bg_cyan_bright,
            "bg_white_bright" => &self.bg_white_bright,
            _ => return None,
        };
        Some(f)
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::new(true)
    }
}
