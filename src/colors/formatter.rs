//! Nesting-safe ANSI style wrapper.

use std::borrow::Cow;

/// Wraps text in an opening and closing escape sequence.
///
/// Any closing sequence already present in the input is swapped for the
/// `replace` sequence, so an inner style ending does not terminate the outer
/// one. A formatter built with [`Formatter::plain`] passes text through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    codes: Option<Codes>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Codes {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
    replace: Cow<'static, str>,
}

impl Formatter {
    /// Creates a formatter. `replace` falls back to `open` when `None`.
    #[must_use]
    pub fn new<O, C>(open: O, close: C, replace: Option<Cow<'static, str>>) -> Self
    where
        O: Into<Cow<'static, str>>,
        C: Into<Cow<'static, str>>,
    {
        let open = open.into();
        let replace = replace.unwrap_or_else(|| open.clone());
        Self {
            codes: Some(Codes {
                open,
                close: close.into(),
                replace,
            }),
        }
    }

    /// Identity formatter used when color support is off.
    #[must_use]
    pub const fn plain() -> Self {
        Self { codes: None }
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.codes.is_none()
    }

    /// Applies the style to `input`.
    #[must_use]
    pub fn paint(&self, input: &str) -> String {
        let Some(codes) = &self.codes else {
            return input.to_string();
        };

        let body = match first_close(input, &codes.close) {
            Some(index) => replace_close(input, &codes.close, &codes.replace, index),
            None => Cow::Borrowed(input),
        };

        let mut out = String::with_capacity(
            codes
                .open
                .len()
                .saturating_add(body.len())
                .saturating_add(codes.close.len()),
        );
        out.push_str(&codes.open);
        out.push_str(&body);
        out.push_str(&codes.close);
        out
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::plain()
    }
}

fn first_close(input: &str, close: &str) -> Option<usize> {
    if close.is_empty() {
        return None;
    }
    input.find(close)
}

/// Rewrites every `close` in `input` to `replace`, starting at `index`.
///
/// Scanning resumes after each matched token, so a `replace` that itself
/// contains `close` is never rewritten again.
#[allow(clippy::arithmetic_side_effects, clippy::string_slice)]
fn replace_close<'a>(input: &'a str, close: &str, replace: &str, index: usize) -> Cow<'a, str> {
    let mut result = String::with_capacity(input.len().saturating_add(replace.len()));
    let mut cursor = 0;
    let mut next = Some(index);

    while let Some(found) = next {
        result.push_str(&input[cursor..found]);
        result.push_str(replace);
        cursor = found + close.len();
        next = input[cursor..].find(close).map(|offset| offset + cursor);
    }

    result.push_str(&input[cursor..]);
    Cow::Owned(result)
}
