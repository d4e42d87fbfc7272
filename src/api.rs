use crate::engine::{Config, Element, ListFlags};
use crate::grammar::Rule;
use crate::lexicon::Lexicon;
use crate::tape::TapeError;
use crate::tokenizer::tape_from_text;
use crate::{Node, Tape};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Options that affect parsing behavior.
#[derive(Clone, Default)]
pub struct Options {
    /// Grammar variants of the list rules.
    pub flags: ListFlags,
    /// Word classifier; the built-in English dictionary when `None`.
    pub lexicon: Option<Arc<dyn Lexicon>>,
    /// Item rule for list rules invoked directly (`CompoundAnd`, `Compound`, ...).
    pub subclass: Option<Rule>,
}

impl Options {
    /// The parse config these options describe.
    pub fn config(&self) -> Config {
        let mut config = Config::new().with_flags(self.flags);
        if let Some(lexicon) = &self.lexicon {
            config = config.with_lexicon(Arc::clone(lexicon));
        }
        if let Some(rule) = self.subclass {
            config = config.with_subclass(rule);
        }
        config
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("flags", &self.flags)
            .field("lexicon", &self.lexicon.as_ref().map(|_| "<lexicon>"))
            .field("subclass", &self.subclass)
            .finish()
    }
}

/// Result from [`parse`] and [`parse_with`].
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed input text.
    pub text: String,
    pub success: bool,
    /// The tree built by the rule, on success.
    pub node: Option<Node>,
    /// Number of tokens the rule consumed.
    pub consumed: usize,
    /// Tokens left after the rule stopped.
    pub remaining: Vec<String>,
    /// Why the rule failed, on failure.
    pub message: Option<String>,
    /// Total elapsed time spent tokenizing + parsing.
    pub elapsed: Duration,
}

impl ParseResult {
    /// The rule matched and nothing was left over.
    pub fn complete(&self) -> bool {
        self.success && self.remaining.is_empty()
    }
}

/// Additional details returned by [`parse_verbose`] and [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    pub rule: &'static str,
    pub tokens: Vec<String>,
    pub tokenize: Duration,
    pub grammar: Duration,
    pub total: Duration,
}

/// Result from [`parse_verbose`] and [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub result: ParseResult,
    pub details: ParseDetails,
}

/// Parse `text` as a sentence with default [`Options`].
///
/// # Example
/// ```
/// use syntagma::parse;
///
/// let out = parse("the boys see a big dog").unwrap();
/// assert!(out.success);
/// ```
pub fn parse(text: &str) -> Result<ParseResult, TapeError> {
    parse_with(text, Rule::Sentence, &Options::default())
}

/// Parse `text` with `rule` and `options`.
///
/// Grammar failures are reported in the result; the error case is reserved
/// for text that yields no tokens at all.
pub fn parse_with(text: &str, rule: Rule, options: &Options) -> Result<ParseResult, TapeError> {
    Ok(parse_verbose_with(text, rule, options)?.result)
}

pub fn parse_verbose(text: &str) -> Result<ParseResultVerbose, TapeError> {
    parse_verbose_with(text, Rule::Sentence, &Options::default())
}

/// Parse `text` with `rule`/`options` and return timing and token details.
pub fn parse_verbose_with(text: &str, rule: Rule, options: &Options) -> Result<ParseResultVerbose, TapeError> {
    let started = Instant::now();
    let tape = tape_from_text(text)?;
    let tokenized = started.elapsed();

    let config = options.config();
    let outcome = rule.process(&tape, &config);
    let total = started.elapsed();

    tracing::debug!(rule = rule.name(), success = outcome.succeeded(), position = outcome.tape().position(), "parsed");

    let details = ParseDetails {
        rule: rule.name(),
        tokens: tape.tokens().to_vec(),
        tokenize: tokenized,
        grammar: total - tokenized,
        total,
    };

    let success = outcome.succeeded();
    let message = outcome.message().map(str::to_string);
    let (end, node): (Tape, _) = outcome.into_parts();
    let result = ParseResult {
        text: text.to_string(),
        success,
        node,
        consumed: end.position(),
        remaining: end.remaining().to_vec(),
        message,
        elapsed: total,
    };

    Ok(ParseResultVerbose { result, details })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Dictionary, WordClass};

    #[test]
    fn parse_accepts_a_full_sentence() {
        let res = parse("The boy kicks the ball").unwrap();
        assert!(res.complete());
        assert_eq!(res.consumed, 5);
        assert_eq!(res.message, None);
        assert_eq!(res.node.unwrap().to_string(), "S(NP(boy) VP(kicks NP(ball)))");
    }

    #[test]
    fn parse_reports_failure_without_consuming() {
        let res = parse("kicks the ball").unwrap();
        assert!(!res.success);
        assert_eq!(res.consumed, 0);
        assert_eq!(res.remaining, ["kicks", "the", "ball"]);
        assert!(res.message.unwrap().contains("Question has not yet been implemented"));
    }

    #[test]
    fn partial_parse_leaves_remaining_tokens() {
        let res = parse_with("the red ball .", Rule::NounClause, &Options::default()).unwrap();
        assert!(res.success);
        assert!(!res.complete());
        assert_eq!(res.remaining, ["."]);
    }

    #[test]
    fn blank_input_is_an_error() {
        assert_eq!(parse("  ").unwrap_err(), TapeError::Empty);
    }

    #[test]
    fn options_reach_the_rules() {
        let options = Options {
            flags: ListFlags::ALLOW_COMMAS_ONLY,
            lexicon: Some(Arc::new(Dictionary::new().with(WordClass::ADJECTIVE, ["x", "y", "z"]))),
            subclass: Some(Rule::Adjective),
        };
        let res = parse_with("x , y , z", Rule::CompoundAnd, &options).unwrap();
        assert!(res.complete());
        assert!(matches!(res.node, Some(Node::CompoundAnd(ref items)) if items.len() == 3));
    }

    #[test]
    fn verbose_includes_tokens_and_timing() {
        let res = parse_verbose("the boys see a big dog").unwrap();
        assert!(res.result.success);
        assert_eq!(res.details.rule, "Sentence");
        assert_eq!(res.details.tokens.len(), 6);
        assert_eq!(res.result.elapsed, res.details.total);
        assert!(res.details.tokenize <= res.details.total);
    }
}
