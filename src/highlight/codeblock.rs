use crate::lexer::{
    languages::Language,
    lexer::tokenize_language,
    tokens::{Token, TokenKind},
};

pub const DEFAULT_LANGUAGE: &str = "tsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine {
    /// 1-based.
    pub number: usize,
    pub tokens: Vec<Token>,
}

impl HighlightedLine {
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.value.as_str()).collect()
    }
}

/// A code sample prepared for display: the sample is trimmed, split into
/// lines, and each line tokenized on its own.
#[derive(Debug, Clone)]
pub struct Codeblock {
    code: String,
    language: String,
    title: Option<String>,
    show_line_numbers: bool,
}

impl Codeblock {
    pub fn new(code: impl Into<String>) -> Codeblock {
        Codeblock {
            code: code.into(),
            language: String::from(DEFAULT_LANGUAGE),
            title: None,
            show_line_numbers: false,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Codeblock {
        self.language = language.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Codeblock {
        self.title = Some(title.into());
        self
    }

    pub fn show_line_numbers(mut self, show: bool) -> Codeblock {
        self.show_line_numbers = show;
        self
    }

    pub fn get_language(&self) -> &str {
        &self.language
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn shows_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    fn source_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.code
            .trim()
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }

    pub fn line_count(&self) -> usize {
        self.source_lines().count()
    }

    pub fn lines(&self) -> Vec<HighlightedLine> {
        let language = Language::from_name(&self.language);

        self.source_lines()
            .enumerate()
            .map(|(index, line)| {
                // Blank lines still need one renderable element.
                let tokens = if line.trim().is_empty() {
                    vec![Token::new(TokenKind::Text, " ")]
                } else {
                    tokenize_language(line, language)
                };

                HighlightedLine {
                    number: index + 1,
                    tokens,
                }
            })
            .collect()
    }

    /// Digits needed for the widest line number.
    pub fn line_number_width(&self) -> usize {
        self.line_count().to_string().len()
    }
}
