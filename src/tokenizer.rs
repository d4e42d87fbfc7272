//! Text to tokens.
//!
//! Whitespace separates tokens and is dropped. Punctuation is kept, each mark
//! as its own token: `"`, `...`, `--`, `-`, `,`, `.`, `?`, `!`, `;`, `:`, a
//! run of `*`, and the brackets `( ) [ ] { } < >`. Longer marks win, so
//! `...` is one token rather than three.
//!
//! Case is preserved; rules compare function words case-insensitively and the
//! lexicon lowercases its lookups.

use crate::tape::{Tape, TapeError};

pub fn tokenize(text: &str) -> Vec<String> {
    let delimiters = regex!(r#"\s+|"|\.\.\.|--|-|,|\.|\?|!|;|:|\*+|[()\[\]{}<>]"#);

    let mut tokens = Vec::new();
    let mut last = 0;
    for mark in delimiters.find_iter(text) {
        push_piece(&mut tokens, &text[last..mark.start()]);
        push_piece(&mut tokens, mark.as_str());
        last = mark.end();
    }
    push_piece(&mut tokens, &text[last..]);
    tokens
}

// Blank pieces (whitespace delimiters, gaps between adjacent marks) are dropped.
fn push_piece(tokens: &mut Vec<String>, piece: &str) {
    if !piece.trim().is_empty() {
        tokens.push(piece.to_string());
    }
}

/// Tokenize `text` onto a fresh tape. Fails for blank text.
pub fn tape_from_text(text: &str) -> Result<Tape, TapeError> {
    Tape::new(tokenize(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("the boy kicks the ball", &["the", "boy", "kicks", "the", "ball"])]
    #[case("  red,  blue and green ", &["red", ",", "blue", "and", "green"])]
    #[case("A, B, and C.", &["A", ",", "B", ",", "and", "C", "."])]
    #[case("wait... what?!", &["wait", "...", "what", "?", "!"])]
    #[case("well-known -- mostly", &["well", "-", "known", "--", "mostly"])]
    #[case("say \"hi\" (twice)", &["say", "\"", "hi", "\"", "(", "twice", ")"])]
    #[case("**bold** [x]{y}<z>;:", &["**", "bold", "**", "[", "x", "]", "{", "y", "}", "<", "z", ">", ";", ":"])]
    fn splits_on_whitespace_and_punctuation(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(text), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   \t\n ")]
    fn blank_text_has_no_tokens(#[case] text: &str) {
        assert!(tokenize(text).is_empty());
        assert_eq!(tape_from_text(text), Err(TapeError::Empty));
    }

    #[test]
    fn tape_starts_at_first_token() {
        let tape = tape_from_text("the ball").unwrap();
        assert_eq!(tape.len(), 2);
        assert!(tape.at_start());
        assert!(tape.element() == "the");
    }
}
