//! Rules that only choose between or chain other rules.

use super::rule::Rule;
use crate::Node;
use crate::engine::{Config, Element, Outcome, first_of, in_order};
use crate::tape::Tape;

/// Split the `Sequence` of a two-step `in_order` into its halves.
fn pair(node: Node, build: fn(Box<Node>, Box<Node>) -> Node) -> Node {
    match node {
        Node::Sequence(parts) => match <[Node; 2]>::try_from(parts) {
            Ok([first, second]) => build(Box::new(first), Box::new(second)),
            Err(parts) => Node::Sequence(parts),
        },
        other => other,
    }
}

pub(super) fn sentence(tape: &Tape, config: &Config) -> Outcome {
    first_of(&[Rule::Statement, Rule::Question, Rule::Command], tape, config)
}

pub(super) fn statement(tape: &Tape, config: &Config) -> Outcome {
    in_order(&[Rule::SubjectClause, Rule::VerbObjectClause], tape, config)
        .map_output(|node| pair(node, |subject, predicate| Node::Statement { subject, predicate }))
}

pub(super) fn subject_clause(tape: &Tape, config: &Config) -> Outcome {
    let candidates = [Rule::NounClause, Rule::PronounClause, Rule::GerundClause, Rule::PrepNounPhrase];
    first_of(&candidates, tape, config)
}

/// One noun clause or a list of them, else a pronoun.
pub(super) fn object_clause(tape: &Tape, config: &Config) -> Outcome {
    first_of(&[Rule::Compound, Rule::PronounClause], tape, &config.with_subclass(Rule::NounClause))
}

pub(super) fn verb_object_clause(tape: &Tape, config: &Config) -> Outcome {
    first_of(&[Rule::TransitiveVerbObjectClause, Rule::IntransitiveVerbObjectClause], tape, config)
}

pub(super) fn transitive_verb_object_clause(tape: &Tape, config: &Config) -> Outcome {
    in_order(&[Rule::TransitiveVerb, Rule::ObjectClause], tape, config)
        .map_output(|node| pair(node, |verb, object| Node::VerbObject { verb, object }))
}

pub(super) fn noun(tape: &Tape, config: &Config) -> Outcome {
    first_of(&[Rule::SingularNoun, Rule::PluralNoun], tape, config)
}

pub(super) fn prep_adjectival_phrase(tape: &Tape, config: &Config) -> Outcome {
    first_of(&[Rule::PrepNounClause, Rule::PrepWord], tape, config)
}

pub(super) fn prep_noun_clause(tape: &Tape, config: &Config) -> Outcome {
    in_order(&[Rule::Preposition, Rule::NounClause], tape, config)
        .map_output(|node| pair(node, |preposition, object| Node::PrepPhrase { preposition, object }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_builds_from_two_parts_only() {
        let two = Node::Sequence(vec![Node::Dummy("a".into()), Node::Dummy("b".into())]);
        let built = pair(two, |verb, object| Node::VerbObject { verb, object });
        assert!(matches!(built, Node::VerbObject { .. }));

        let three = Node::Sequence(vec![Node::Dummy("a".into()); 3]);
        assert_eq!(pair(three.clone(), |verb, object| Node::VerbObject { verb, object }), three);
    }
}
