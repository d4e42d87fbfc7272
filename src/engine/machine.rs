//! Table-driven state machines.
//!
//! A machine is described by a [`MachineDef`]: a start state, the terminal
//! pass/fail states, a handler per non-terminal state and a `finish` function
//! that turns the accumulator into an output node. [`run_machine`] drives it:
//!
//! ```text
//!   state = start
//!   loop:
//!     state ∈ pass  ─→ succeed(tape, finish(state, acc))
//!     state ∈ fail  ─→ fail(<original tape>)
//!     otherwise     ─→ (state, tape, acc) = handler(state)(tape, acc, config)
//! ```
//!
//! Handlers own the tape and the accumulator while they run and hand both back
//! in the returned [`Step`]. A transition that reads nothing returns the tape
//! it was given. On a fail state the driver drops its working copy and reports
//! the caller's tape.

use super::config::Config;
use super::outcome::Outcome;
use crate::Node;
use crate::tape::Tape;
use std::fmt;

/// One transition: the next state plus the (possibly advanced) tape and acc.
#[derive(Debug)]
pub struct Step<S, A> {
    pub state: S,
    pub tape: Tape,
    pub acc: A,
}

impl<S, A> Step<S, A> {
    pub fn to(state: S, tape: Tape, acc: A) -> Self {
        Step { state, tape, acc }
    }
}

pub type Handler<S, A> = fn(Tape, A, &Config) -> Step<S, A>;

pub struct MachineDef<S: 'static, A> {
    pub name: &'static str,
    pub start: S,
    pub pass: &'static [S],
    pub fail: &'static [S],
    /// `None` for a non-terminal state is a broken table and panics.
    pub handler: fn(S) -> Option<Handler<S, A>>,
    pub finish: fn(S, A) -> Node,
}

impl<S: PartialEq, A> MachineDef<S, A> {
    pub fn is_pass(&self, state: &S) -> bool {
        self.pass.contains(state)
    }

    pub fn is_fail(&self, state: &S) -> bool {
        self.fail.contains(state)
    }
}

/// Run `def` from its start state over `tape`.
///
/// # Panics
///
/// When a non-terminal state has no handler.
pub fn run_machine<S, A>(def: &MachineDef<S, A>, tape: &Tape, acc: A, config: &Config) -> Outcome
where
    S: Copy + PartialEq + fmt::Debug + 'static,
{
    let mut state = def.start;
    let mut current = tape.clone();
    let mut acc = acc;

    loop {
        if def.is_pass(&state) {
            tracing::trace!(machine = def.name, ?state, position = current.position(), "accepted");
            return Outcome::succeed(current, (def.finish)(state, acc));
        }
        if def.is_fail(&state) {
            tracing::trace!(machine = def.name, ?state, position = current.position(), "rejected");
            return Outcome::fail(
                format!("{} stopped in state {state:?} at token {}", def.name, current.position()),
                tape.clone(),
            );
        }

        let Some(handler) = (def.handler)(state) else {
            panic!("{}: no handler for non-terminal state {state:?}", def.name);
        };
        let step = handler(current, acc, config);
        tracing::trace!(machine = def.name, from = ?state, to = ?step.state, position = step.tape.position());

        state = step.state;
        current = step.tape;
        acc = step.acc;
    }
}
