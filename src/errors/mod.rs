//! Error types for the fallible edges of the highlighter.
//!
//! Tokenizing never fails; errors only come from:
//!
//! - Parsing theme colors from hex strings
//! - Command-line argument handling
//! - Reading the source file to display

pub mod errors;
