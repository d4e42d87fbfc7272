//! Single-token rules.

use crate::Node;
use crate::engine::{Config, Outcome};
use crate::lexicon::WordClass;
use crate::tape::Tape;

/// Accepts any one token.
pub(super) fn dummy(tape: &Tape) -> Outcome {
    match tape.step() {
        Ok((token, rest)) => Outcome::succeed(rest, Node::Dummy(token.to_string())),
        Err(err) => Outcome::fail(format!("Dummy: {err}"), tape.clone()),
    }
}

/// Accepts one token the lexicon puts in `class`.
pub(super) fn word(rule: &str, class: WordClass, tape: &Tape, config: &Config) -> Outcome {
    let Ok((token, rest)) = tape.step() else {
        return Outcome::fail(format!("{rule}: end of tape"), tape.clone());
    };

    let found = config.lexicon().classify(token);
    if found.contains(class) {
        return Outcome::succeed(rest, Node::Word { class, text: token.to_string() });
    }
    Outcome::fail(format!("{rule}: {token:?} is {}", found.describe()), tape.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_consumes_anything_but_the_end() {
        let tape = Tape::new([","]).unwrap();
        let out = dummy(&tape);
        assert_eq!(out.output(), Some(&Node::Dummy(",".into())));
        assert!(out.tape().at_end());

        let end = dummy(out.tape());
        assert!(end.failed());
        assert_eq!(end.message(), Some("Dummy: already at the end of the tape"));
    }

    #[test]
    fn word_reports_what_the_token_was() {
        let tape = Tape::new(["kicks"]).unwrap();
        let out = word("Adjective", WordClass::ADJECTIVE, &tape, &Config::new());
        assert!(out.failed());
        assert_eq!(out.tape(), &tape);
        assert_eq!(out.message(), Some("Adjective: \"kicks\" is transitive verb"));
    }

    #[test]
    fn word_keeps_original_spelling() {
        let tape = Tape::new(["Red", "ball"]).unwrap();
        let out = word("Adjective", WordClass::ADJECTIVE, &tape, &Config::new());
        assert_eq!(out.output(), Some(&Node::Word { class: WordClass::ADJECTIVE, text: "Red".into() }));
        assert_eq!(out.tape().position(), 1);
    }
}
