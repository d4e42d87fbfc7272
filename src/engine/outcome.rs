//! The result record every rule and combinator returns.
//!
//! An `Outcome` is either a success carrying the advanced tape and one output
//! node, or a failure carrying the tape the rule was *given* plus an optional
//! diagnostic. Constructors are the only way to build one, which keeps the two
//! invariants in one place:
//!
//! - a failure never carries output;
//! - a failure never carries a tape advanced past the caller's position.
//!
//! The second invariant is the caller's side: rules pass their input tape to
//! [`Outcome::fail`].

use crate::Node;
use crate::tape::Tape;

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    tape: Tape,
    output: Option<Node>,
    success: bool,
    message: Option<String>,
}

impl Outcome {
    pub fn succeed(tape: Tape, output: Node) -> Self {
        Outcome { tape, output: Some(output), success: true, message: None }
    }

    pub fn fail(message: impl Into<String>, tape: Tape) -> Self {
        Outcome { tape, output: None, success: false, message: Some(message.into()) }
    }

    /// The failure a rule without an implementation reports.
    pub fn unimplemented(rule: &str, tape: Tape) -> Self {
        Outcome::fail(format!("{rule} has not yet been implemented"), tape)
    }

    pub fn succeeded(&self) -> bool {
        self.success
    }

    pub fn failed(&self) -> bool {
        !self.success
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn output(&self) -> Option<&Node> {
        self.output.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn into_parts(self) -> (Tape, Option<Node>) {
        (self.tape, self.output)
    }

    /// Rewrite the output of a success; failures pass through untouched.
    pub fn map_output(mut self, f: impl FnOnce(Node) -> Node) -> Self {
        self.output = self.output.map(f);
        self
    }
}
