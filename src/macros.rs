//! Utility macros for the highlighter.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a handler that emits the whole match
//! - `MK_CAPTURE_HANDLER!` - Creates a handler that emits only the first capture group
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a handler that classifies the entire match as `$kind` and
/// advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// pattern(r"^\s+", MK_DEFAULT_HANDLER!(TokenKind::Text), false)
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer<'_>, captures: &Captures<'_>| {
            let value = &captures[0];
            lexer.push(MK_TOKEN!($kind, String::from(value)));
            lexer.advance_n(value.len());
        }
    };
}

/// Creates a handler for patterns whose regex has to look past the token
/// (the trailing `=` of an attribute, the delimiter after a tag name).
/// Only capture group 1 is emitted and consumed; the rest of the match is
/// left for the next scan step.
#[macro_export]
macro_rules! MK_CAPTURE_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer<'_>, captures: &Captures<'_>| {
            let value = captures.get(1).map_or(&captures[0], |group| group.as_str());
            lexer.push(MK_TOKEN!($kind, String::from(value)));
            lexer.advance_n(value.len());
        }
    };
}
