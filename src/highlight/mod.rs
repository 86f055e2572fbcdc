//! Presentation side of the highlighter.
//!
//! Consumes the lexer's token stream:
//!
//! - `codeblock` splits a sample into numbered, tokenized lines
//! - `palette` maps token kinds to colors for dark and light themes
//! - `render` writes the result to a terminal

pub mod codeblock;
pub mod palette;
pub mod render;
