//! The processor protocol and its combinators.
//!
//! Every grammar rule is an [`Element`]: given a tape and the parse config it
//! returns an [`Outcome`]. Rules borrow the tape and never advance it in
//! place, so trying an alternative needs no bookkeeping:
//!
//! ```text
//!            tape (position 3)
//!               │
//!   first_of ───┼── A.process(&tape) ──✗   (A's clone is dropped)
//!               ├── B.process(&tape) ──✓── returned verbatim
//!               └── C                     (never tried)
//! ```
//!
//! `in_order` threads the tape through a sequence of steps and gives up on the
//! first miss, reporting the *original* tape.

use super::config::Config;
use super::outcome::Outcome;
use crate::Node;
use crate::tape::Tape;

/// A grammar rule.
pub trait Element {
    fn name(&self) -> &'static str;

    /// Try to recognize this rule at the head of `tape`.
    ///
    /// On failure the returned outcome must carry a tape equal to `tape`.
    fn process(&self, tape: &Tape, config: &Config) -> Outcome;
}

/// Ordered alternation: the first candidate that succeeds wins.
///
/// Order matters: this is first-match, not longest-match. When every
/// candidate fails the result is one failure at `tape` whose message lists
/// each candidate's reason.
pub fn first_of<E: Element>(candidates: &[E], tape: &Tape, config: &Config) -> Outcome {
    let mut misses = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let outcome = candidate.process(tape, config);
        if outcome.succeeded() {
            return outcome;
        }
        tracing::debug!(rule = candidate.name(), position = tape.position(), "alternative did not match");
        misses.push(format!("{}: {}", candidate.name(), outcome.message().unwrap_or("no match")));
    }

    Outcome::fail(format!("no alternative matched [{}]", misses.join("; ")), tape.clone())
}

/// Sequential composition: run every step, each starting where the last one
/// stopped. Succeeds with a [`Node::Sequence`] of the step outputs.
pub fn in_order<E: Element>(steps: &[E], tape: &Tape, config: &Config) -> Outcome {
    let mut current = tape.clone();
    let mut outputs = Vec::with_capacity(steps.len());

    for step in steps {
        let outcome = step.process(&current, config);
        if outcome.failed() {
            let reason = outcome.message().unwrap_or("no match");
            return Outcome::fail(
                format!("{} failed at token {}: {reason}", step.name(), current.position()),
                tape.clone(),
            );
        }
        let (next, output) = outcome.into_parts();
        current = next;
        outputs.extend(output);
    }

    Outcome::succeed(current, Node::Sequence(outputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Matches one literal token.
    struct Literal(&'static str);

    impl Element for Literal {
        fn name(&self) -> &'static str {
            self.0
        }

        fn process(&self, tape: &Tape, _config: &Config) -> Outcome {
            match tape.step() {
                Ok((token, rest)) if token == self.0 => Outcome::succeed(rest, Node::Dummy(token.to_string())),
                _ => Outcome::fail(format!("expected {}", self.0), tape.clone()),
            }
        }
    }

    /// Consumes any two tokens and tags the output, to tell candidates apart.
    struct Pair;

    impl Element for Pair {
        fn name(&self) -> &'static str {
            "Pair"
        }

        fn process(&self, tape: &Tape, _config: &Config) -> Outcome {
            let Ok((a, rest)) = tape.step() else { return Outcome::fail("empty", tape.clone()) };
            let Ok((b, rest)) = rest.step() else { return Outcome::fail("short", tape.clone()) };
            let output = Node::Sequence(vec![Node::Dummy(a.to_string()), Node::Dummy(b.to_string())]);
            Outcome::succeed(rest, output)
        }
    }

    enum Either {
        Literal(Literal),
        Pair(Pair),
    }

    impl Element for Either {
        fn name(&self) -> &'static str {
            match self {
                Either::Literal(l) => l.name(),
                Either::Pair(p) => p.name(),
            }
        }

        fn process(&self, tape: &Tape, config: &Config) -> Outcome {
            match self {
                Either::Literal(l) => l.process(tape, config),
                Either::Pair(p) => p.process(tape, config),
            }
        }
    }

    fn tape(tokens: &[&str]) -> Tape {
        Tape::new(tokens.iter().copied()).unwrap()
    }

    #[test]
    fn first_of_prefers_earlier_candidates() {
        let t = tape(&["A", "B"]);
        let config = Config::new();

        let literal_first = first_of(&[Either::Literal(Literal("A")), Either::Pair(Pair)], &t, &config);
        assert_eq!(literal_first.output(), Some(&Node::Dummy("A".into())));
        assert_eq!(literal_first.tape().position(), 1);

        let pair_first = first_of(&[Either::Pair(Pair), Either::Literal(Literal("A"))], &t, &config);
        assert_eq!(pair_first.tape().position(), 2);
    }

    #[test]
    fn first_of_skips_failures_without_leaking_progress() {
        let t = tape(&["B"]);
        let out = first_of(&[Literal("A"), Literal("B")], &t, &Config::new());
        assert!(out.succeeded());
        assert_eq!(out.output(), Some(&Node::Dummy("B".into())));
    }

    #[test]
    fn first_of_aggregates_failures_at_the_input_tape() {
        let t = tape(&["A", "C"]).with_position(1);
        let out = first_of(&[Literal("A"), Literal("B")], &t, &Config::new());
        assert!(out.failed());
        assert_eq!(out.tape(), &t);
        let message = out.message().unwrap();
        assert!(message.contains("A: expected A"));
        assert!(message.contains("B: expected B"));
    }

    #[test]
    fn in_order_threads_the_tape() {
        let t = tape(&["A", "B", "C"]);
        let out = in_order(&[Literal("A"), Literal("B")], &t, &Config::new());
        assert!(out.succeeded());
        assert_eq!(out.tape().position(), 2);
        assert_eq!(out.output(), Some(&Node::Sequence(vec![Node::Dummy("A".into()), Node::Dummy("B".into())])));
    }

    #[test]
    fn in_order_rolls_back_on_late_failure() {
        let t = tape(&["A", "B", "X"]);
        let out = in_order(&[Literal("A"), Literal("B"), Literal("C")], &t, &Config::new());
        assert!(out.failed());
        assert_eq!(out.tape().position(), 0);
        assert_eq!(out.message(), Some("C failed at token 2: expected C"));
    }
}
