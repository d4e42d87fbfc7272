//! Word classification for leaf rules.
//!
//! Leaf rules (adjective, noun, preposition, ...) do not know any words
//! themselves. They ask the `Lexicon` carried in the parse `Config` which
//! classes a token belongs to, and match when the class they stand for is
//! among them. A token may belong to several classes ("outside" is both a
//! preposition and a one-word adjectival phrase).
//!
//! `Dictionary` is the stock implementation: a lowercase word -> class map.
//! `Dictionary::english()` is a deliberately tiny English word list, enough
//! for the sentence shapes the grammar understands.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

bitflags::bitflags! {
    /// Word classes a token can belong to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WordClass: u8 {
        const SINGULAR_NOUN   = 1 << 0;
        const PLURAL_NOUN     = 1 << 1;
        const ADJECTIVE       = 1 << 2;
        const PREPOSITION     = 1 << 3;
        /// A single word standing in for a whole adjectival phrase ("outside").
        const PREP_PHRASE     = 1 << 4;
        const TRANSITIVE_VERB = 1 << 5;
    }
}

impl WordClass {
    /// Human-readable label: `SINGULAR_NOUN | ADJECTIVE` -> `"singular noun/adjective"`.
    pub fn describe(self) -> String {
        if self.is_empty() {
            return "unknown".to_string();
        }
        self.iter_names().map(|(name, _)| name.to_ascii_lowercase().replace('_', " ")).collect::<Vec<_>>().join("/")
    }
}

/// Source of word classes for leaf rules.
pub trait Lexicon: Send + Sync {
    /// All classes `token` belongs to (empty when unknown).
    fn classify(&self, token: &str) -> WordClass;
}

// Default English word lists.
const SINGULAR_NOUNS: &[&str] = &[
    "ball", "beach", "block", "box", "boy", "cat", "center", "city", "corner", "dog", "girl", "house", "reed",
    "sandwich", "table", "tower",
];

const PLURAL_NOUNS: &[&str] = &[
    "balls", "beaches", "blocks", "boxes", "boys", "cats", "cities", "corners", "dogs", "girls", "houses", "reeds",
    "sandwiches", "tables", "towers",
];

const ADJECTIVES: &[&str] =
    &["beautiful", "big", "blue", "green", "happy", "little", "new", "old", "quiet", "red", "small", "tall"];

const PREPOSITIONS: &[&str] = &[
    "among", "at", "behind", "beside", "by", "in", "inside", "near", "of", "on", "outside", "over", "under", "with",
];

const PREP_PHRASES: &[&str] = &["downstairs", "inside", "nearby", "outside", "upstairs"];

const TRANSITIVE_VERBS: &[&str] = &[
    "eat", "eats", "find", "finds", "kick", "kicks", "like", "likes", "put", "puts", "see", "sees", "throw", "throws",
];

static ENGLISH: Lazy<Arc<Dictionary>> = Lazy::new(|| Arc::new(Dictionary::english()));

/// Lowercase word -> class map.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, WordClass>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English word list.
    pub fn english() -> Self {
        Dictionary::new()
            .with(WordClass::SINGULAR_NOUN, SINGULAR_NOUNS.iter().copied())
            .with(WordClass::PLURAL_NOUN, PLURAL_NOUNS.iter().copied())
            .with(WordClass::ADJECTIVE, ADJECTIVES.iter().copied())
            .with(WordClass::PREPOSITION, PREPOSITIONS.iter().copied())
            .with(WordClass::PREP_PHRASE, PREP_PHRASES.iter().copied())
            .with(WordClass::TRANSITIVE_VERB, TRANSITIVE_VERBS.iter().copied())
    }

    /// Shared handle to the English dictionary, built once per process.
    pub fn shared() -> Arc<dyn Lexicon> {
        let english: Arc<Dictionary> = Arc::clone(&ENGLISH);
        english
    }

    /// Builder form of [`Dictionary::insert`] for a batch of words.
    pub fn with<I, S>(mut self, class: WordClass, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(class, word.as_ref());
        }
        self
    }

    /// Add `class` to `word`, keeping any classes it already had.
    pub fn insert(&mut self, class: WordClass, word: &str) {
        *self.entries.entry(word.to_lowercase()).or_insert(WordClass::empty()) |= class;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lexicon for Dictionary {
    fn classify(&self, token: &str) -> WordClass {
        self.entries.get(&token.to_lowercase()).copied().unwrap_or(WordClass::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_dictionary_classifies_case_insensitively() {
        let dict = Dictionary::english();
        assert_eq!(dict.classify("Boy"), WordClass::SINGULAR_NOUN);
        assert_eq!(dict.classify("balls"), WordClass::PLURAL_NOUN);
        assert_eq!(dict.classify("kicks"), WordClass::TRANSITIVE_VERB);
        assert!(dict.classify("zebra").is_empty());
    }

    #[test]
    fn words_can_hold_several_classes() {
        let dict = Dictionary::english();
        let outside = dict.classify("outside");
        assert!(outside.contains(WordClass::PREPOSITION));
        assert!(outside.contains(WordClass::PREP_PHRASE));
    }

    #[test]
    fn insert_merges_classes() {
        let mut dict = Dictionary::new().with(WordClass::ADJECTIVE, ["Light"]);
        dict.insert(WordClass::SINGULAR_NOUN, "light");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.classify("LIGHT"), WordClass::ADJECTIVE | WordClass::SINGULAR_NOUN);
    }

    #[test]
    fn describe_lists_flag_names() {
        assert_eq!(WordClass::SINGULAR_NOUN.describe(), "singular noun");
        assert_eq!((WordClass::ADJECTIVE | WordClass::PREPOSITION).describe(), "adjective/preposition");
        assert_eq!(WordClass::empty().describe(), "unknown");
    }

    #[test]
    fn shared_dictionary_is_reused() {
        let a = Dictionary::shared();
        let b = Dictionary::shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.classify("red"), WordClass::ADJECTIVE);
    }
}
