use colored::Colorize;

use crate::lexer::tokens::Token;

use super::{codeblock::Codeblock, palette::Palette};

const GUTTER: &str = "│";

fn header(codeblock: &Codeblock) -> String {
    match codeblock.get_title() {
        Some(title) => format!("{} [{}]", title, codeblock.get_language()),
        None => format!("[{}]", codeblock.get_language()),
    }
}

fn render_with<F>(codeblock: &Codeblock, header_style: F, paint: impl Fn(&Token) -> String) -> String
where
    F: Fn(String) -> String,
{
    let mut result = header_style(header(codeblock));
    result.push('\n');

    let width = codeblock.line_number_width();

    for line in codeblock.lines() {
        if codeblock.shows_line_numbers() {
            result.push_str(&format!("{:>width$} {} ", line.number, GUTTER));
        }

        for token in &line.tokens {
            result.push_str(&paint(token));
        }

        result.push('\n');
    }

    result
}

/// Renders the code block with 24-bit ANSI colors from `palette`.
pub fn render_ansi(codeblock: &Codeblock, palette: &Palette) -> String {
    render_with(
        codeblock,
        |header| header.bold().to_string(),
        |token| palette.color(token.kind).paint(&token.value).to_string(),
    )
}

/// Same layout as [`render_ansi`] without any escape codes.
pub fn render_plain(codeblock: &Codeblock) -> String {
    render_with(codeblock, |header| header, |token| token.value.clone())
}
