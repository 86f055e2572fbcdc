//! Property-based tests for the tokenizer.
//!
//! These use proptest to generate arbitrary and code-shaped input and
//! verify that tokenizing:
//! 1. Is lossless: the token values concatenate back to the input
//! 2. Always makes progress: no token is empty
//! 3. Never panics, whatever the language identifier

use codeblock::{
    lexer::tokens::{Token, TokenKind},
    tokenize,
};
use proptest::prelude::*;

fn joined(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}

fn language_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::from("javascript")),
        Just(String::from("typescript")),
        Just(String::from("jsx")),
        Just(String::from("tsx")),
        Just(String::new()),
        "[a-z]{0,8}",
    ]
}

/// Fragments that exercise every pattern, including unterminated ones.
fn code_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("const "),
            Just("x"),
            Just("foo("),
            Just(".bar"),
            Just("<View"),
            Just("</Text>"),
            Just("style="),
            Just("=="),
            Just("=>"),
            Just("\""),
            Just("'"),
            Just("`"),
            Just("\\"),
            Just("//"),
            Just("/*"),
            Just("*/"),
            Just("42"),
            Just("3.5e-2"),
            Just(" "),
            Just("\t"),
            Just("{}"),
            Just(";"),
            Just("é"),
            Just("🦀"),
        ],
        0..24,
    )
    .prop_map(|fragments| fragments.concat())
}

proptest! {
    #[test]
    fn lossless_for_any_string(source in any::<String>(), language in language_strategy()) {
        let tokens = tokenize(&source, &language);
        prop_assert_eq!(joined(&tokens), source);
    }

    #[test]
    fn lossless_for_code_like_input(source in code_strategy(), language in language_strategy()) {
        let tokens = tokenize(&source, &language);
        prop_assert_eq!(joined(&tokens), source);
    }

    #[test]
    fn tokens_are_never_empty(source in code_strategy(), language in language_strategy()) {
        let tokens = tokenize(&source, &language);
        prop_assert!(tokens.iter().all(|token| !token.value.is_empty()));
        prop_assert!(tokens.len() <= source.len());
    }

    #[test]
    fn line_comments_swallow_the_rest(body in "[^\n]{0,40}") {
        let source = format!("// {body}");
        let tokens = tokenize(&source, "typescript");
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::Comment, source.clone())]);
    }
}
