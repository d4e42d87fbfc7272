//! A backtracking parser for a small English grammar.
//!
//! Text is split into tokens, loaded onto a [`Tape`] and handed to a grammar
//! [`Rule`]. Rules try alternatives on duplicates of the tape, so a failed
//! attempt never consumes input, and build a tree of [`Node`]s on success.
//!
//! ```
//! let result = syntagma::parse("The boy kicks the red ball").unwrap();
//! assert!(result.complete());
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod grammar;
mod lexicon;
mod tape;
mod tokenizer;

pub use api::{
    Options, ParseDetails, ParseResult, ParseResultVerbose, parse, parse_verbose, parse_verbose_with, parse_with,
};
pub use engine::{Config, Element, Handler, ListFlags, MachineDef, Outcome, Step, first_of, in_order, run_machine};
pub use grammar::Rule;
pub use lexicon::{Dictionary, Lexicon, WordClass};
pub use tape::{Symbol, Tape, TapeError};
pub use tokenizer::{tape_from_text, tokenize};

use serde::{Serialize, Serializer};
use std::fmt;

// --- Parse tree -------------------------------------------------------------

/// Output of a successful rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// Any single token, unclassified.
    Dummy(String),
    Word {
        #[serde(serialize_with = "serialize_class")]
        class: WordClass,
        text: String,
    },
    /// Two or more items joined by "and".
    CompoundAnd(Vec<Node>),
    /// Two or more items joined by "or".
    CompoundOr(Vec<Node>),
    NounClause(NounClause),
    /// Raw output of `in_order`, one node per step.
    Sequence(Vec<Node>),
    PrepPhrase {
        preposition: Box<Node>,
        object: Box<Node>,
    },
    VerbObject {
        verb: Box<Node>,
        object: Box<Node>,
    },
    Statement {
        subject: Box<Node>,
        predicate: Box<Node>,
    },
}

/// `[determiner] adjectives noun phrases`. The determiner is not kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NounClause {
    pub noun: Option<Box<Node>>,
    pub adjectives: Vec<Node>,
    pub phrases: Vec<Node>,
}

fn serialize_class<S: Serializer>(class: &WordClass, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&class.describe())
}

impl Node {
    /// Short variant name, for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Node::Dummy(_) => "Dummy",
            Node::Word { .. } => "Word",
            Node::CompoundAnd(_) => "CompoundAnd",
            Node::CompoundOr(_) => "CompoundOr",
            Node::NounClause(_) => "NounClause",
            Node::Sequence(_) => "Sequence",
            Node::PrepPhrase { .. } => "PrepPhrase",
            Node::VerbObject { .. } => "VerbObject",
            Node::Statement { .. } => "Statement",
        }
    }

    /// Direct children in reading order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Dummy(_) | Node::Word { .. } => Vec::new(),
            Node::CompoundAnd(items) | Node::CompoundOr(items) | Node::Sequence(items) => items.iter().collect(),
            Node::NounClause(clause) => {
                clause.adjectives.iter().chain(clause.noun.as_deref()).chain(clause.phrases.iter()).collect()
            }
            Node::PrepPhrase { preposition: first, object: second }
            | Node::VerbObject { verb: first, object: second }
            | Node::Statement { subject: first, predicate: second } => vec![&**first, &**second],
        }
    }

    /// Token text of the leaves, in reading order.
    pub fn words(&self) -> Vec<&str> {
        match self {
            Node::Dummy(text) | Node::Word { text, .. } => vec![text.as_str()],
            _ => self.children().into_iter().flat_map(Node::words).collect(),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, nodes: &[&Node], sep: &str) -> fmt::Result {
    for (idx, node) in nodes.iter().enumerate() {
        if idx > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

/// Compact bracketed form, e.g. `S(NP(boy) VP(kicks NP(red ball)))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, sep) = match self {
            Node::Dummy(text) | Node::Word { text, .. } => return f.write_str(text),
            Node::CompoundAnd(_) => ("and(", ", "),
            Node::CompoundOr(_) => ("or(", ", "),
            Node::NounClause(_) => ("NP(", " "),
            Node::Sequence(_) => ("[", " "),
            Node::PrepPhrase { .. } => ("PP(", " "),
            Node::VerbObject { .. } => ("VP(", " "),
            Node::Statement { .. } => ("S(", " "),
        };
        let close = if matches!(self, Node::Sequence(_)) { "]" } else { ")" };

        f.write_str(open)?;
        write_joined(f, &self.children(), sep)?;
        f.write_str(close)
    }
}
