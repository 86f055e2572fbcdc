//! Lexical analysis for the code-sample highlighter.
//!
//! This module contains the tokenizer that classifies source text for
//! colorized display. It handles:
//!
//! - Priority-ordered regex patterns, tried at the cursor
//! - Per-language keyword sets with a JavaScript fallback
//! - Markup (JSX) tags and attributes for markup-flavored languages
//! - Lossless output: every input character lands in exactly one token
//!
//! Lexing never fails. Characters no pattern accepts become `text` tokens.

pub mod languages;
pub mod lexer;
pub mod tokens;
