//! Backtracking parse engine.
//!
//! The engine knows nothing about English. It provides the protocol grammar
//! rules speak and the two drivers they are built from; the rules themselves
//! live in `crate::grammar`.
//!
//! ## How the parts work together
//!
//! ```text
//!  tokens ── Tape::new ──┐
//!                        v
//!              rule.process(&tape, &config)           (element.rs)
//!                 │            │
//!                 │            ├─ first_of / in_order  combinators
//!                 │            └─ run_machine          (machine.rs)
//!                 │                  └─ handler per state, sub-rules via process
//!                 v
//!              Outcome { tape, output, success, message }   (outcome.rs)
//! ```
//!
//! Every call receives an immutable borrow of the tape. Progress is made on
//! clones, and only a successful outcome returns an advanced tape, so
//! backtracking is simply "ignore the failed outcome and try the next thing at
//! the same tape".
//!
//! ## Responsibilities by module
//!
//! - `outcome.rs`: the result record and its constructors.
//! - `element.rs`: the `Element` trait plus ordered alternation (`first_of`)
//!   and sequencing (`in_order`).
//! - `machine.rs`: a table-driven state machine driver for rules that need more
//!   than alternation and sequencing.
//! - `config.rs`: the configuration bag (`subclass`, list flags, lexicon).
//!
//! ## Debugging
//!
//! Rule misses are logged at `debug`, machine transitions at `trace`. Set
//! `SYNTAGMA_LOG=syntagma=trace` when running the CLI to see them.

#[path = "engine/config.rs"]
mod config;
#[path = "engine/element.rs"]
mod element;
#[path = "engine/machine.rs"]
mod machine;
#[path = "engine/outcome.rs"]
mod outcome;

pub use config::{Config, ListFlags};
pub use element::{Element, first_of, in_order};
pub use machine::{Handler, MachineDef, Step, run_machine};
pub use outcome::Outcome;
