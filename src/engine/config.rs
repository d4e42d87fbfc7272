//! The configuration bag threaded through a parse.
//!
//! A `Config` is created once per parse and handed (by reference) to every
//! rule. It is never mutated; a rule that needs different settings for a
//! sub-rule derives a copy with [`Config::with_subclass`] or
//! [`Config::with_flags`]. Copies are cheap: the lexicon sits behind an `Arc`.
//!
//! ## Keys
//!
//! - `subclass`: the rule that recognizes one item of a list. Required by the
//!   list rules; asking for it when it is unset is a caller bug and panics.
//! - `flags` (`ListFlags`): grammar variants of the list rules.
//! - `lexicon`: the word classifier used by leaf rules.

use crate::grammar::Rule;
use crate::lexicon::{Dictionary, Lexicon};
use std::fmt;
use std::sync::Arc;

bitflags::bitflags! {
    /// Grammar variants honoured by the compound-list rules.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ListFlags: u8 {
        /// Accept `A, B, C` (commas but no final conjunction).
        const ALLOW_COMMAS_ONLY      = 1 << 0;
        /// Accept `A B C` (items separated by whitespace alone).
        const ALLOW_SPACE_DELIMITERS = 1 << 1;
        /// A lone item is not a list: fail instead of passing it through.
        const REQUIRE_LIST           = 1 << 2;
    }
}

#[derive(Clone)]
pub struct Config {
    subclass: Option<Rule>,
    flags: ListFlags,
    lexicon: Arc<dyn Lexicon>,
}

impl Config {
    pub fn new() -> Self {
        Config { subclass: None, flags: ListFlags::empty(), lexicon: Dictionary::shared() }
    }

    pub fn with_subclass(&self, rule: Rule) -> Self {
        Config { subclass: Some(rule), ..self.clone() }
    }

    pub fn with_flags(&self, flags: ListFlags) -> Self {
        Config { flags, ..self.clone() }
    }

    pub fn with_lexicon(&self, lexicon: Arc<dyn Lexicon>) -> Self {
        Config { lexicon, ..self.clone() }
    }

    pub fn subclass(&self) -> Option<Rule> {
        self.subclass
    }

    /// The list item rule, for rules that cannot run without one.
    ///
    /// # Panics
    ///
    /// When no `subclass` was configured. That is a defect in the calling
    /// rule, not a parse failure, so it is not reported as an `Outcome`.
    pub fn item_rule(&self, caller: &str) -> Rule {
        match self.subclass {
            Some(rule) => rule,
            None => panic!("{caller} requires a `subclass` item rule in its Config"),
        }
    }

    pub fn flags(&self) -> ListFlags {
        self.flags
    }

    pub fn allows(&self, flag: ListFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("subclass", &self.subclass)
            .field("flags", &self.flags)
            .field("lexicon", &"<lexicon>")
            .finish()
    }
}
