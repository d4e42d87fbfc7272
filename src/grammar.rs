//! The English grammar.
//!
//! All rules are variants of one closed [`Rule`] enum; `Rule::process` is the
//! single dispatch point. Rules fall in three groups:
//!
//! - leaves (`leaves.rs`): one token, classified by the config's lexicon;
//! - state machines: compound lists (`compound.rs`) and noun clauses
//!   (`noun_clause.rs`), both driven by `engine::run_machine`;
//! - dispatchers (`dispatch.rs`): `first_of` / `in_order` over other rules.
//!
//! ```text
//! Sentence ─ Statement ─┬─ SubjectClause ── NounClause
//!                       └─ VerbObjectClause ── TransitiveVerb + ObjectClause
//!                                                               └─ Compound(NounClause)
//! NounClause ── [the|a|an] Compound(Adjective) Compound(Noun) Compound(PrepAdjectivalPhrase)*
//! PrepAdjectivalPhrase ── Preposition + NounClause | PrepWord
//! ```

#[path = "grammar/compound.rs"]
mod compound;
#[path = "grammar/dispatch.rs"]
mod dispatch;
#[path = "grammar/leaves.rs"]
mod leaves;
#[path = "grammar/noun_clause.rs"]
mod noun_clause;
#[path = "grammar/rule.rs"]
mod rule;


pub use rule::Rule;
