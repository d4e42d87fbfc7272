use super::compound::{self, Conjunction};
use super::{dispatch, leaves, noun_clause};
use crate::engine::{Config, Element, Outcome};
use crate::lexicon::WordClass;
use crate::tape::Tape;

/// Every rule of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // Single tokens.
    Dummy,
    Adjective,
    SingularNoun,
    PluralNoun,
    Preposition,
    /// One word standing for a whole adjectival phrase ("outside").
    PrepWord,
    TransitiveVerb,

    // Lists. `CompoundAnd` / `CompoundOr` need a `subclass` in the config.
    CompoundAnd,
    CompoundOr,
    /// Any list of the `subclass` rule, or a single one.
    Compound,

    // Clauses.
    NounClause,
    Noun,
    PrepAdjectivalPhrase,
    PrepNounClause,
    Sentence,
    Statement,
    SubjectClause,
    ObjectClause,
    VerbObjectClause,
    TransitiveVerbObjectClause,

    // Known to the grammar but never matched.
    Question,
    Command,
    PronounClause,
    GerundClause,
    PrepNounPhrase,
    IntransitiveVerbObjectClause,
}

impl Rule {
    pub const ALL: [Rule; 26] = [
        Rule::Dummy,
        Rule::Adjective,
        Rule::SingularNoun,
        Rule::PluralNoun,
        Rule::Preposition,
        Rule::PrepWord,
        Rule::TransitiveVerb,
        Rule::CompoundAnd,
        Rule::CompoundOr,
        Rule::Compound,
        Rule::NounClause,
        Rule::Noun,
        Rule::PrepAdjectivalPhrase,
        Rule::PrepNounClause,
        Rule::Sentence,
        Rule::Statement,
        Rule::SubjectClause,
        Rule::ObjectClause,
        Rule::VerbObjectClause,
        Rule::TransitiveVerbObjectClause,
        Rule::Question,
        Rule::Command,
        Rule::PronounClause,
        Rule::GerundClause,
        Rule::PrepNounPhrase,
        Rule::IntransitiveVerbObjectClause,
    ];

    /// Whether the rule can match anything at all.
    pub fn is_implemented(self) -> bool {
        !matches!(
            self,
            Rule::Question
                | Rule::Command
                | Rule::PronounClause
                | Rule::GerundClause
                | Rule::PrepNounPhrase
                | Rule::IntransitiveVerbObjectClause
        )
    }

    /// List rules cannot run without a `subclass` item rule.
    pub fn needs_subclass(self) -> bool {
        matches!(self, Rule::CompoundAnd | Rule::CompoundOr | Rule::Compound)
    }
}

impl Element for Rule {
    fn name(&self) -> &'static str {
        match self {
            Rule::Dummy => "Dummy",
            Rule::Adjective => "Adjective",
            Rule::SingularNoun => "SingularNoun",
            Rule::PluralNoun => "PluralNoun",
            Rule::Preposition => "Preposition",
            Rule::PrepWord => "PrepWord",
            Rule::TransitiveVerb => "TransitiveVerb",
            Rule::CompoundAnd => "CompoundAnd",
            Rule::CompoundOr => "CompoundOr",
            Rule::Compound => "Compound",
            Rule::NounClause => "NounClause",
            Rule::Noun => "Noun",
            Rule::PrepAdjectivalPhrase => "PrepAdjectivalPhrase",
            Rule::PrepNounClause => "PrepNounClause",
            Rule::Sentence => "Sentence",
            Rule::Statement => "Statement",
            Rule::SubjectClause => "SubjectClause",
            Rule::ObjectClause => "ObjectClause",
            Rule::VerbObjectClause => "VerbObjectClause",
            Rule::TransitiveVerbObjectClause => "TransitiveVerbObjectClause",
            Rule::Question => "Question",
            Rule::Command => "Command",
            Rule::PronounClause => "PronounClause",
            Rule::GerundClause => "GerundClause",
            Rule::PrepNounPhrase => "PrepNounPhrase",
            Rule::IntransitiveVerbObjectClause => "IntransitiveVerbObjectClause",
        }
    }

    fn process(&self, tape: &Tape, config: &Config) -> Outcome {
        let name = self.name();
        let outcome = match self {
            Rule::Dummy => leaves::dummy(tape),
            Rule::Adjective => leaves::word(name, WordClass::ADJECTIVE, tape, config),
            Rule::SingularNoun => leaves::word(name, WordClass::SINGULAR_NOUN, tape, config),
            Rule::PluralNoun => leaves::word(name, WordClass::PLURAL_NOUN, tape, config),
            Rule::Preposition => leaves::word(name, WordClass::PREPOSITION, tape, config),
            Rule::PrepWord => leaves::word(name, WordClass::PREP_PHRASE, tape, config),
            Rule::TransitiveVerb => leaves::word(name, WordClass::TRANSITIVE_VERB, tape, config),

            Rule::CompoundAnd => compound::list(name, Conjunction::And, tape, config),
            Rule::CompoundOr => compound::list(name, Conjunction::Or, tape, config),
            Rule::Compound => compound::compound(tape, config),

            Rule::NounClause => noun_clause::noun_clause(tape, config),
            Rule::Noun => dispatch::noun(tape, config),
            Rule::PrepAdjectivalPhrase => dispatch::prep_adjectival_phrase(tape, config),
            Rule::PrepNounClause => dispatch::prep_noun_clause(tape, config),
            Rule::Sentence => dispatch::sentence(tape, config),
            Rule::Statement => dispatch::statement(tape, config),
            Rule::SubjectClause => dispatch::subject_clause(tape, config),
            Rule::ObjectClause => dispatch::object_clause(tape, config),
            Rule::VerbObjectClause => dispatch::verb_object_clause(tape, config),
            Rule::TransitiveVerbObjectClause => dispatch::transitive_verb_object_clause(tape, config),

            Rule::Question
            | Rule::Command
            | Rule::PronounClause
            | Rule::GerundClause
            | Rule::PrepNounPhrase
            | Rule::IntransitiveVerbObjectClause => Outcome::unimplemented(name, tape.clone()),
        };

        tracing::trace!(rule = name, from = tape.position(), to = outcome.tape().position(), ok = outcome.succeeded());
        outcome
    }
}
