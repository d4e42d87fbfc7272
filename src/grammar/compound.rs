//! Compound lists: `A`, `A and B`, `A, B and C`, `A, B, and C`.
//!
//! ```text
//!          (not compound)                    .------------.          (compound)
//!               ^                            |            | item        ^
//!       item    |      ","         item      v     ","    |             | item
//! (Item1) --> (Delimiter1) --> (Item2) --> (DelimiterN) --> (ItemN)    (ItemL)
//!               |                            |               |          ^
//!               | "and"                      | "and"         | "and"    |
//!               '----------------------------'---------------+----------'
//! ```
//!
//! With `ALLOW_SPACE_DELIMITERS`, `Delimiter1` first tries a second item with
//! no delimiter at all and, on success, keeps reading items in `ItemSpacedN`.
//! With `ALLOW_COMMAS_ONLY`, running out of delimiters in `DelimiterN` is a
//! complete list instead of a failure.

use super::rule::Rule;
use crate::Node;
use crate::engine::{Config, Element, Handler, ListFlags, MachineDef, Outcome, Step, run_machine};
use crate::tape::{Symbol, Tape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Item1,
    Delimiter1,
    Item2,
    DelimiterN,
    ItemN,
    ItemL,
    ItemSpacedN,
    SuccessNotCompound,
    SuccessCompound,
    Failed,
}

/// The word that joins the last two items of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    fn word(self) -> &'static str {
        match self {
            Conjunction::And => "and",
            Conjunction::Or => "or",
        }
    }

    fn matches(self, symbol: Symbol<'_>) -> bool {
        symbol.is_word(self.word())
    }
}

struct ListAcc {
    item: Rule,
    /// `None` until the first "and"/"or" is read (`Compound` only).
    conjunction: Option<Conjunction>,
    require_list: bool,
    /// Settle for the first item when the list breaks off (`Compound` only).
    fallback: bool,
    after_first: Option<Tape>,
    items: Vec<Node>,
}

impl ListAcc {
    /// Parse one item at `tape`, keeping its output. `None` when it does not match.
    fn take_item(&mut self, tape: &Tape, config: &Config) -> Option<Tape> {
        let outcome = self.item.process(tape, config);
        if outcome.failed() {
            return None;
        }
        let (next, output) = outcome.into_parts();
        self.items.extend(output);
        Some(next)
    }
}

enum Delimiter {
    Comma,
    Conjunction(Conjunction),
    Other,
}

fn delimiter(tape: &Tape, conjunction: Option<Conjunction>) -> Delimiter {
    let symbol = tape.element();
    if symbol == "," {
        return Delimiter::Comma;
    }
    [Conjunction::And, Conjunction::Or]
        .into_iter()
        .filter(|candidate| conjunction.is_none_or(|c| c == *candidate))
        .find(|candidate| candidate.matches(symbol))
        .map_or(Delimiter::Other, Delimiter::Conjunction)
}

type ListStep = Step<ListState, ListAcc>;

/// Skip the delimiter under the read head and move to `state`.
fn consume(state: ListState, tape: Tape, acc: ListAcc) -> ListStep {
    match tape.advanced() {
        Ok(next) => Step::to(state, next, acc),
        Err(_) => stop(tape, acc),
    }
}

/// Skip a conjunction, which fixes the list's conjunction from here on.
fn conjunction(found: Conjunction, tape: Tape, mut acc: ListAcc) -> ListStep {
    acc.conjunction = Some(found);
    consume(ListState::ItemL, tape, acc)
}

/// The list broke off: fail, or fall back to the first item when allowed.
fn stop(tape: Tape, mut acc: ListAcc) -> ListStep {
    match acc.after_first.take() {
        Some(after_first) => {
            acc.items.truncate(1);
            Step::to(ListState::SuccessNotCompound, after_first, acc)
        }
        None => Step::to(ListState::Failed, tape, acc),
    }
}

/// Parse an item and go to `on_match`, or stop the list.
fn required_item(on_match: ListState, tape: Tape, mut acc: ListAcc, config: &Config) -> ListStep {
    match acc.take_item(&tape, config) {
        Some(next) => Step::to(on_match, next, acc),
        None => stop(tape, acc),
    }
}

fn item_1(tape: Tape, mut acc: ListAcc, config: &Config) -> ListStep {
    match acc.take_item(&tape, config) {
        Some(next) => {
            if acc.fallback {
                acc.after_first = Some(next.clone());
            }
            Step::to(ListState::Delimiter1, next, acc)
        }
        None => Step::to(ListState::Failed, tape, acc),
    }
}

fn delimiter_1(tape: Tape, mut acc: ListAcc, config: &Config) -> ListStep {
    if config.allows(ListFlags::ALLOW_SPACE_DELIMITERS) {
        if let Some(next) = acc.take_item(&tape, config) {
            return Step::to(ListState::ItemSpacedN, next, acc);
        }
    }

    match delimiter(&tape, acc.conjunction) {
        Delimiter::Comma => consume(ListState::Item2, tape, acc),
        Delimiter::Conjunction(found) => conjunction(found, tape, acc),
        Delimiter::Other if acc.require_list => stop(tape, acc),
        Delimiter::Other => Step::to(ListState::SuccessNotCompound, tape, acc),
    }
}

fn item_2(tape: Tape, acc: ListAcc, config: &Config) -> ListStep {
    required_item(ListState::DelimiterN, tape, acc, config)
}

fn delimiter_n(tape: Tape, acc: ListAcc, config: &Config) -> ListStep {
    match delimiter(&tape, acc.conjunction) {
        Delimiter::Comma => consume(ListState::ItemN, tape, acc),
        Delimiter::Conjunction(found) => conjunction(found, tape, acc),
        Delimiter::Other if config.allows(ListFlags::ALLOW_COMMAS_ONLY) => {
            Step::to(ListState::SuccessCompound, tape, acc)
        }
        Delimiter::Other => stop(tape, acc),
    }
}

// After a comma: either the serial-comma conjunction or another item.
fn item_n(tape: Tape, acc: ListAcc, config: &Config) -> ListStep {
    if let Delimiter::Conjunction(found) = delimiter(&tape, acc.conjunction) {
        return conjunction(found, tape, acc);
    }
    required_item(ListState::DelimiterN, tape, acc, config)
}

fn item_l(tape: Tape, acc: ListAcc, config: &Config) -> ListStep {
    // "A and and B"
    if let Delimiter::Conjunction(_) = delimiter(&tape, acc.conjunction) {
        return stop(tape, acc);
    }
    required_item(ListState::SuccessCompound, tape, acc, config)
}

fn item_spaced_n(tape: Tape, mut acc: ListAcc, config: &Config) -> ListStep {
    match acc.take_item(&tape, config) {
        Some(next) => Step::to(ListState::ItemSpacedN, next, acc),
        None => Step::to(ListState::SuccessCompound, tape, acc),
    }
}

fn list_handler(state: ListState) -> Option<Handler<ListState, ListAcc>> {
    match state {
        ListState::Item1 => Some(item_1),
        ListState::Delimiter1 => Some(delimiter_1),
        ListState::Item2 => Some(item_2),
        ListState::DelimiterN => Some(delimiter_n),
        ListState::ItemN => Some(item_n),
        ListState::ItemL => Some(item_l),
        ListState::ItemSpacedN => Some(item_spaced_n),
        ListState::SuccessNotCompound | ListState::SuccessCompound | ListState::Failed => None,
    }
}

fn list_finish(state: ListState, acc: ListAcc) -> Node {
    let items = match state {
        // A lone item is passed through unwrapped.
        ListState::SuccessNotCompound => match <[Node; 1]>::try_from(acc.items) {
            Ok([item]) => return item,
            Err(items) => items,
        },
        _ => acc.items,
    };
    // Lists without a conjunction ("A, B, C" or "A B C") count as "and".
    match acc.conjunction.unwrap_or(Conjunction::And) {
        Conjunction::And => Node::CompoundAnd(items),
        Conjunction::Or => Node::CompoundOr(items),
    }
}

const LIST: MachineDef<ListState, ListAcc> = MachineDef {
    name: "CompoundList",
    start: ListState::Item1,
    pass: &[ListState::SuccessNotCompound, ListState::SuccessCompound],
    fail: &[ListState::Failed],
    handler: list_handler,
    finish: list_finish,
};

/// Run the list machine for `rule` (`CompoundAnd` / `CompoundOr`).
///
/// # Panics
///
/// When `config` has no `subclass` item rule.
pub(super) fn list(rule: &'static str, conjunction: Conjunction, tape: &Tape, config: &Config) -> Outcome {
    let item = config.item_rule(rule);
    let acc = ListAcc {
        item,
        conjunction: Some(conjunction),
        require_list: config.allows(ListFlags::REQUIRE_LIST),
        fallback: false,
        after_first: None,
        items: Vec::new(),
    };
    let config = config.with_flags(config.flags() - ListFlags::REQUIRE_LIST);

    run_machine(&LIST, tape, acc, &config)
}

/// A list joined by any conjunction, or else a bare item.
///
/// One pass of the list machine: the first "and"/"or" it meets picks the
/// conjunction, and a list that breaks off leaves just its first item. Each
/// item is parsed once.
pub(super) fn compound(tape: &Tape, config: &Config) -> Outcome {
    let item = config.item_rule("Compound");
    let acc = ListAcc { item, conjunction: None, require_list: false, fallback: true, after_first: None, items: Vec::new() };
    let config = config.with_flags(config.flags() - ListFlags::REQUIRE_LIST);

    run_machine(&LIST, tape, acc, &config)
}
