use syntagma::{Node, ParseResultVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(run: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let (result, details) = (&run.result, &run.details);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\" as {}", result.text.trim(), details.rule), ansi::CYAN)));

    // Tokens, split at the read head
    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    let (consumed, remaining) = details.tokens.split_at(result.consumed.min(details.tokens.len()));
    println!(
        "  {} {} {}",
        palette.paint(consumed.join(" "), ansi::GREEN),
        palette.dim("│"),
        if remaining.is_empty() { palette.dim("(all consumed)") } else { palette.paint(remaining.join(" "), ansi::YELLOW) },
    );

    // Outcome
    println!("\n{}", palette.paint("━━━ Outcome ━━━", ansi::GRAY));
    if result.complete() {
        println!("  {}", palette.paint("✓ parsed", ansi::GREEN));
    } else if result.success {
        println!("  {} {}", palette.paint("✓ parsed prefix", ansi::YELLOW), palette.dim(format!("({} tokens left)", remaining.len())));
    } else {
        println!("  {}", palette.paint("✗ no parse", ansi::RED));
        if let Some(message) = &result.message {
            println!("  {}", palette.dim(message));
        }
        println!("\n{}", palette.dim("  Tip: Set SYNTAGMA_LOG=syntagma=debug to see every rule that was tried"));
    }

    if let Some(node) = &result.node {
        println!("\n{}", palette.paint("━━━ Tree ━━━", ansi::GRAY));
        println!("  {}", palette.bold(node.to_string()));
        print_tree(node, 1, &palette);
    }

    // Timing
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Tokenize: {}  │  Grammar: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(format!("{:?}", details.tokenize)),
        palette.paint(format!("{:?}", details.grammar), ansi::CYAN),
    );
    println!();
}

fn print_tree(node: &Node, depth: usize, palette: &ansi::Palette) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Word { class, text } => {
            println!("{indent}{} {}", palette.paint(text, ansi::GREEN), palette.dim(format!("({})", class.describe())));
        }
        Node::Dummy(text) => println!("{indent}{} {}", palette.paint(text, ansi::GREEN), palette.dim("(token)")),
        _ => {
            println!("{indent}{}", palette.paint(node.label(), ansi::BLUE));
            for child in node.children() {
                print_tree(child, depth + 1, palette);
            }
        }
    }
}
