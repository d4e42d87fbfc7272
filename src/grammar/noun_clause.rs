//! Noun clauses.
//!
//! ```text
//! definite:           the    [adjectives] (singular|plural noun) [phrase]*
//! indefinite single:  a|an   [adjectives] singular noun          [phrase]*
//! indefinite plural:         [adjectives] plural noun            [phrase]*
//! ```
//!
//! Every constituent is read through `Compound`, so "the red and blue balls
//! in the box, on the table or under the bed" is one clause with a compound
//! adjective and a compound phrase.

use super::rule::Rule;
use crate::engine::{Config, Element, Handler, MachineDef, Outcome, Step, run_machine};
use crate::tape::Tape;
use crate::{Node, NounClause};
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClauseState {
    Start,
    DefAdj,
    DefNoun,
    DefAdjPhr,
    IndefSAdj,
    IndefSNoun,
    IndefSAdjPhr,
    IndefPNoun,
    IndefPAdjPhr,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Noun,
    Adjectives,
    Phrases,
}

#[derive(Debug, Default)]
struct ClauseAcc {
    noun: Vec<Node>,
    adjectives: Vec<Node>,
    phrases: Vec<Node>,
    /// Output of the last constituent, until it is merged into a slot.
    output: Vec<Node>,
}

impl ClauseAcc {
    fn merge_into(&mut self, slot: Slot) {
        let output = mem::take(&mut self.output);
        match slot {
            Slot::Noun => self.noun.extend(output),
            Slot::Adjectives => self.adjectives.extend(output),
            Slot::Phrases => self.phrases.extend(output),
        }
    }

    /// Read `rule` (or a compound of it) into the transient output.
    fn read(&mut self, rule: Rule, tape: &Tape, config: &Config) -> Option<Tape> {
        let outcome = Rule::Compound.process(tape, &config.with_subclass(rule));
        if outcome.failed() {
            return None;
        }
        let (next, output) = outcome.into_parts();
        self.output.extend(output);
        Some(next)
    }
}

type ClauseStep = Step<ClauseState, ClauseAcc>;

enum Determiner {
    Definite,
    Indefinite,
}

fn determiner(tape: &Tape) -> Option<Determiner> {
    let symbol = tape.element();
    if symbol.is_word("the") {
        Some(Determiner::Definite)
    } else if symbol.is_word("a") || symbol.is_word("an") {
        Some(Determiner::Indefinite)
    } else {
        None
    }
}

/// Merge `rule` into `slot` if it is there; move on to `next` either way.
fn optional(rule: Rule, slot: Slot, next: ClauseState, tape: Tape, mut acc: ClauseAcc, config: &Config) -> ClauseStep {
    match acc.read(rule, &tape, config) {
        Some(advanced) => {
            acc.merge_into(slot);
            Step::to(next, advanced, acc)
        }
        None => Step::to(next, tape, acc),
    }
}

fn required(rule: Rule, slot: Slot, next: ClauseState, tape: Tape, mut acc: ClauseAcc, config: &Config) -> ClauseStep {
    match acc.read(rule, &tape, config) {
        Some(advanced) => {
            acc.merge_into(slot);
            Step::to(next, advanced, acc)
        }
        None => Step::to(ClauseState::Failed, tape, acc),
    }
}

/// Trailing phrases: stay in `state` while they keep coming.
fn phrases(state: ClauseState, tape: Tape, mut acc: ClauseAcc, config: &Config) -> ClauseStep {
    match acc.read(Rule::PrepAdjectivalPhrase, &tape, config) {
        Some(advanced) => {
            acc.merge_into(Slot::Phrases);
            Step::to(state, advanced, acc)
        }
        None => Step::to(ClauseState::Succeeded, tape, acc),
    }
}

fn start(tape: Tape, acc: ClauseAcc, config: &Config) -> ClauseStep {
    let next = match determiner(&tape) {
        Some(Determiner::Definite) => ClauseState::DefAdj,
        Some(Determiner::Indefinite) => ClauseState::IndefSAdj,
        None => return optional(Rule::Adjective, Slot::Adjectives, ClauseState::IndefPNoun, tape, acc, config),
    };
    match tape.advanced() {
        Ok(advanced) => Step::to(next, advanced, acc),
        Err(_) => Step::to(ClauseState::Failed, tape, acc),
    }
}

fn def_adj(tape: Tape, acc: ClauseAcc, config: &Config) -> ClauseStep {
    optional(Rule::Adjective, Slot::Adjectives, ClauseState::DefNoun, tape, acc, config)
}

fn def_noun(tape: Tape, acc: ClauseAcc, config: &Config) -> ClauseStep {
    required(Rule::Noun, Slot::Noun, ClauseState::DefAdjPhr, tape, acc, config)
}

fn def_adj_phr(tape: Tape, acc: ClauseAcc, config: &Config) -> ClauseStep {
    phrases(ClauseState::DefAdjPhr, tape, acc, config)
}

fn indef_s_adj(tape: Tape, acc: ClauseAcc, config: &Config) -> ClauseStep {
    optional(Rule::Adjective, Slot::Adjectives, ClauseState::IndefSNoun, tape, acc, config)
}

fn indef_s_noun(tape: Tape, acc: ClauseAcc, config: &Config) -> ClauseStep {
    required(Rule::SingularNoun, Slot::Noun, ClauseState::IndefSAdjPhr, tape, acc, config)
}

fn indef_s_adj_phr(tape: Tape, acc: ClauseAcc, config: &Config) -> ClauseStep {
    phrases(ClauseState::IndefSAdjPhr, tape, acc, config)
}

fn indef_p_noun(tape: Tape, acc: ClauseAcc, config: &Config) -> ClauseStep {
    required(Rule::PluralNoun, Slot::Noun, ClauseState::IndefPAdjPhr, tape, acc, config)
}

fn indef_p_adj_phr(tape: Tape, acc: ClauseAcc, config: &Config) -> ClauseStep {
    phrases(ClauseState::IndefPAdjPhr, tape, acc, config)
}

fn clause_handler(state: ClauseState) -> Option<Handler<ClauseState, ClauseAcc>> {
    match state {
        ClauseState::Start => Some(start),
        ClauseState::DefAdj => Some(def_adj),
        ClauseState::DefNoun => Some(def_noun),
        ClauseState::DefAdjPhr => Some(def_adj_phr),
        ClauseState::IndefSAdj => Some(indef_s_adj),
        ClauseState::IndefSNoun => Some(indef_s_noun),
        ClauseState::IndefSAdjPhr => Some(indef_s_adj_phr),
        ClauseState::IndefPNoun => Some(indef_p_noun),
        ClauseState::IndefPAdjPhr => Some(indef_p_adj_phr),
        ClauseState::Succeeded | ClauseState::Failed => None,
    }
}

fn clause_finish(_: ClauseState, acc: ClauseAcc) -> Node {
    Node::NounClause(NounClause {
        noun: acc.noun.into_iter().next().map(Box::new),
        adjectives: acc.adjectives,
        phrases: acc.phrases,
    })
}

const CLAUSE: MachineDef<ClauseState, ClauseAcc> = MachineDef {
    name: "NounClause",
    start: ClauseState::Start,
    pass: &[ClauseState::Succeeded],
    fail: &[ClauseState::Failed],
    handler: clause_handler,
    finish: clause_finish,
};

pub(super) fn noun_clause(tape: &Tape, config: &Config) -> Outcome {
    run_machine(&CLAUSE, tape, ClauseAcc::default(), config)
}
