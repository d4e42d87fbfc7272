mod debug_report;

use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use syntagma::{ListFlags, Options, Rule, parse_verbose_with};
use tracing_subscriber::EnvFilter;

/// Parse English text with a backtracking grammar and print the tree.
///
/// Exit codes: 0 parsed, 1 no parse, 2 invalid arguments or missing input.
#[derive(Debug, Parser)]
#[command(name = "syntagma", version)]
struct Cli {
    /// Input text to parse. Reads stdin when neither this nor --input is given.
    #[arg(conflicts_with = "input")]
    words: Vec<String>,

    /// Input text to parse, as a single argument.
    #[arg(short, long)]
    input: Option<String>,

    /// Grammar rule to run.
    #[arg(long, value_enum, default_value_t = RuleArg::Sentence)]
    rule: RuleArg,

    /// Item rule for the list rules (compound, compound-and, compound-or).
    #[arg(long, value_enum, default_value_t = RuleArg::NounClause)]
    item: RuleArg,

    /// Accept "A, B, C" without a final conjunction.
    #[arg(long)]
    commas_only: bool,

    /// Accept "A B C" with no delimiters at all.
    #[arg(long)]
    space_delimiters: bool,

    /// Print the result as JSON instead of a report.
    #[arg(long)]
    json: bool,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    Sentence,
    Statement,
    NounClause,
    ObjectClause,
    Compound,
    CompoundAnd,
    CompoundOr,
    Adjective,
    Noun,
    PrepAdjectivalPhrase,
    Dummy,
}

impl From<RuleArg> for Rule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Sentence => Rule::Sentence,
            RuleArg::Statement => Rule::Statement,
            RuleArg::NounClause => Rule::NounClause,
            RuleArg::ObjectClause => Rule::ObjectClause,
            RuleArg::Compound => Rule::Compound,
            RuleArg::CompoundAnd => Rule::CompoundAnd,
            RuleArg::CompoundOr => Rule::CompoundOr,
            RuleArg::Adjective => Rule::Adjective,
            RuleArg::Noun => Rule::Noun,
            RuleArg::PrepAdjectivalPhrase => Rule::PrepAdjectivalPhrase,
            RuleArg::Dummy => Rule::Dummy,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let input = match read_input(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut flags = ListFlags::empty();
    flags.set(ListFlags::ALLOW_COMMAS_ONLY, cli.commas_only);
    flags.set(ListFlags::ALLOW_SPACE_DELIMITERS, cli.space_delimiters);
    let rule = Rule::from(cli.rule);
    let subclass = rule.needs_subclass().then(|| Rule::from(cli.item));
    let options = Options { flags, lexicon: None, subclass };

    let run = match parse_verbose_with(&input, rule, &options) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    if cli.json {
        let report = serde_json::json!({
            "text": run.result.text,
            "rule": run.details.rule,
            "success": run.result.success,
            "complete": run.result.complete(),
            "consumed": run.result.consumed,
            "remaining": run.result.remaining,
            "message": run.result.message,
            "node": run.result.node,
            "tree": run.result.node.as_ref().map(ToString::to_string),
        });
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(1);
            }
        }
    } else {
        let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };
        debug_report::print_run(&run, color);
    }

    if run.result.success { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

/// Logs go to stderr, filtered by `SYNTAGMA_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SYNTAGMA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn read_input(cli: &Cli) -> Result<String, String> {
    let input = match (&cli.input, cli.words.is_empty()) {
        (Some(text), _) => text.clone(),
        (None, false) => cli.words.join(" "),
        (None, true) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
            buffer
        }
    };

    if input.trim().is_empty() {
        return Err("error: no input provided (pass text as arguments, --input, or stdin)".to_string());
    }
    Ok(input)
}
