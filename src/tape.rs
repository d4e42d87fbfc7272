//! Read-only token tape.
//!
//! A `Tape` is the cursor every grammar rule reads from. It pairs a shared,
//! immutable token sequence with a position index:
//!
//! ```text
//! tokens:   "the"  "red"  "ball"  <end>
//! position:   0      1      2       3 == len
//!                    ^
//!                    element() -> Symbol::Token("red")
//! ```
//!
//! Cloning a tape is O(1): the tokens live behind an `Arc` and only the index
//! is copied. Rules never advance the tape they were handed; they advance a
//! clone and return it on success, so a failed attempt leaves nothing behind
//! for the caller to undo.

use std::fmt;
use std::sync::Arc;

/// Structural tape errors. Grammar mismatches are never reported through this
/// type; they are failed `Outcome`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TapeError {
    #[error("a tape needs at least one token")]
    Empty,
    #[error("already at the end of the tape")]
    EndOfTape,
    #[error("already at the start of the tape")]
    StartOfTape,
}

/// What sits under the read head: a token, or the end-of-tape marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'a> {
    Token(&'a str),
    EndOfTape,
}

impl<'a> Symbol<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Symbol::Token(token) => Some(token),
            Symbol::EndOfTape => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Symbol::EndOfTape)
    }

    /// ASCII case-insensitive comparison, used for function words ("The", "AND").
    pub fn is_word(&self, word: &str) -> bool {
        self.as_str().is_some_and(|token| token.eq_ignore_ascii_case(word))
    }
}

impl PartialEq<&str> for Symbol<'_> {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Symbol::Token(token) if token == other)
    }
}

/// Cursor over an ordered, non-empty token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    tokens: Arc<[String]>,
    position: usize,
}

impl Tape {
    /// Build a tape positioned at the first token.
    pub fn new<I, S>(tokens: I) -> Result<Self, TapeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Arc<[String]> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(TapeError::Empty);
        }
        Ok(Tape { tokens, position: 0 })
    }

    /// Same tokens, different read position (clamped to `len`).
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position.min(self.tokens.len());
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: empty tapes cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    pub fn at_end(&self) -> bool {
        self.position == self.tokens.len()
    }

    /// Peek at the current symbol without moving.
    pub fn element(&self) -> Symbol<'_> {
        match self.tokens.get(self.position) {
            Some(token) => Symbol::Token(token),
            None => Symbol::EndOfTape,
        }
    }

    /// Move forward one token and return the new current symbol.
    pub fn advance(&mut self) -> Result<Symbol<'_>, TapeError> {
        if self.at_end() {
            return Err(TapeError::EndOfTape);
        }
        self.position += 1;
        Ok(self.element())
    }

    /// Move back one token and return the new current symbol.
    pub fn prev(&mut self) -> Result<Symbol<'_>, TapeError> {
        if self.at_start() {
            return Err(TapeError::StartOfTape);
        }
        self.position -= 1;
        Ok(self.element())
    }

    pub fn rewind(&mut self) -> Symbol<'_> {
        self.position = 0;
        self.element()
    }

    /// A duplicate of this tape moved forward by one token.
    pub fn advanced(&self) -> Result<Tape, TapeError> {
        let mut next = self.clone();
        next.advance()?;
        Ok(next)
    }

    /// The current token together with a duplicate positioned just after it.
    ///
    /// This is the read primitive of every leaf rule: the caller keeps its own
    /// tape untouched and only promotes the returned one on a match.
    pub fn step(&self) -> Result<(&str, Tape), TapeError> {
        let token = self.element().as_str().ok_or(TapeError::EndOfTape)?;
        Ok((token, self.advanced()?))
    }

    /// Tokens before the read head.
    pub fn consumed(&self) -> &[String] {
        &self.tokens[..self.position]
    }

    /// Tokens from the read head to the end.
    pub fn remaining(&self) -> &[String] {
        &self.tokens[self.position..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Renders the tokens with a `^` marking the read head, e.g. `A , ^B and C`.
impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            if idx == self.position {
                f.write_str("^")?;
            }
            f.write_str(token)?;
        }
        if self.at_end() {
            f.write_str(" ^")?;
        }
        Ok(())
    }
}
