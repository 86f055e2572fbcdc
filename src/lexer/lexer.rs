use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::trace;

use crate::{MK_CAPTURE_HANDLER, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    languages::Language,
    tokens::{Token, TokenKind},
};

pub type RegexHandler = fn(&mut Lexer<'_>, &Captures<'_>);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
    markup_only: bool,
}

impl RegexPattern {
    fn applies_to(&self, language: Language) -> bool {
        !self.markup_only || language.is_markup()
    }
}

fn pattern(regex: &str, handler: RegexHandler, markup_only: bool) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).unwrap(),
        handler,
        markup_only,
    }
}

lazy_static! {
    // Every pattern is anchored at the cursor; earlier entries win.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^(?://.*|/\*(?s:.*?)\*/|/\*(?s:.*))", MK_DEFAULT_HANDLER!(TokenKind::Comment), false),
        pattern(
            r#"^(?:"(?:[^"\\]|\\(?s:.)?)*"?|'(?:[^'\\]|\\(?s:.)?)*'?|`(?:[^`\\]|\\(?s:.)?)*`?)"#,
            MK_DEFAULT_HANDLER!(TokenKind::String),
            false,
        ),
        pattern(r"^[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?\b", MK_DEFAULT_HANDLER!(TokenKind::Number), false),
        pattern(r"^(</?[A-Za-z][A-Za-z0-9]*)(?:[\s>/]|$)", MK_CAPTURE_HANDLER!(TokenKind::Tag), true),
        pattern(r"^([A-Za-z][A-Za-z0-9]*)\s*=(?:[^=>]|$)", MK_CAPTURE_HANDLER!(TokenKind::Attribute), true),
        pattern(r"^([A-Za-z_$][A-Za-z0-9_$]*)\s*\(", function_handler, false),
        pattern(r"^\.([A-Za-z_$][A-Za-z0-9_$]*)", property_handler, false),
        pattern(r"^[+\-*/%=!<>&|^~?:]+", MK_DEFAULT_HANDLER!(TokenKind::Operator), false),
        pattern(r"^[{}\[\]();,.@#\\]", MK_DEFAULT_HANDLER!(TokenKind::Punctuation), false),
        pattern(r"^[A-Za-z_$][A-Za-z0-9_$]*", symbol_handler, false),
        pattern(r"^\s+", MK_DEFAULT_HANDLER!(TokenKind::Text), false),
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    language: Language,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, language: Language) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            language,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(n > 0, "lexer must always make progress");
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn classify_word(&self, word: &str) -> TokenKind {
        if self.language.is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Variable
        }
    }

    /// Consumes a single character no pattern accepts.
    fn stray(&mut self) {
        if let Some(c) = self.at() {
            trace!(character = ?c, position = self.pos, "unmatched character");
            self.push(MK_TOKEN!(TokenKind::Text, c.to_string()));
            self.advance_n(c.len_utf8());
        }
    }
}

fn symbol_handler(lexer: &mut Lexer<'_>, captures: &Captures<'_>) {
    let value = &captures[0];
    let kind = lexer.classify_word(value);

    lexer.push(MK_TOKEN!(kind, String::from(value)));
    lexer.advance_n(value.len());
}

// Call position wins over the keyword table: `if (` is a function token.
fn function_handler(lexer: &mut Lexer<'_>, captures: &Captures<'_>) {
    let value = &captures[1];

    lexer.push(MK_TOKEN!(TokenKind::Function, String::from(value)));
    lexer.advance_n(value.len());
}

fn property_handler(lexer: &mut Lexer<'_>, captures: &Captures<'_>) {
    let name = &captures[1];

    lexer.push(MK_TOKEN!(TokenKind::Punctuation, String::from(".")));
    lexer.push(MK_TOKEN!(TokenKind::Property, String::from(name)));
    lexer.advance_n(captures[0].len());
}

/// Splits `source` into classified tokens for the named language.
///
/// Unknown language names use the JavaScript keywords. The result is
/// lossless: concatenating every token's value yields `source`.
pub fn tokenize(source: &str, language: &str) -> Vec<Token> {
    tokenize_language(source, Language::from_name(language))
}

pub fn tokenize_language(source: &str, language: Language) -> Vec<Token> {
    let mut lex = Lexer::new(source, language);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let matched = PATTERNS
            .iter()
            .filter(|pattern| pattern.applies_to(language))
            .find_map(|pattern| {
                pattern
                    .regex
                    .captures(remainder)
                    .map(|captures| (pattern.handler, captures))
            });

        match matched {
            Some((handler, captures)) => handler(&mut lex, &captures),
            None => lex.stray(),
        }
    }

    lex.tokens
}
