use std::{collections::HashMap, error::Error, fmt::Display, fs, io, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;
use stringkit::{
    BASE62, CaseStyle, CaseTransformOptions, DEFAULT_DECIMALS, DEFAULT_SEPARATOR, Entropy,
    StringKit, ValidationRule, count_occurrences, format_bytes, format_number,
    random_string, template, validate_string,
};

mod steps;
use steps::{Step, StepError, run_chain};

mod terminal;
use terminal::Terminal;

#[derive(Parser)]
#[command(
    name = "stringkit",
    version,
    about = "Convert, format and validate text from the command line"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Log at debug level (RUST_LOG overrides)")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Convert text to a naming convention")]
    Case {
        #[arg(help = "camel, pascal, kebab, snake or constant")]
        style: CaseStyle,
        text: String,
        #[arg(long, help = "Keep a leading run of underscores (camel only)")]
        preserve_leading: bool,
        #[arg(long, help = "Keep a trailing run of underscores (camel only)")]
        preserve_trailing: bool,
    },
    #[command(
        about = "Apply steps in order",
        long_about = "Apply steps in order. Steps: camel, pascal, kebab, snake, constant, \
                      capitalize, title, reverse, strip, escape, unescape, slugify, \
                      truncate=N, pad=N[:left|right|both[:C]]"
    )]
    Chain {
        text: String,
        #[arg(required = true, num_args = 1..)]
        steps: Vec<String>,
    },
    #[command(about = "Run a predicate; exits 1 when it does not hold")]
    Check { kind: CheckKind, text: String },
    #[command(about = "Count non-overlapping occurrences of a substring")]
    Count { text: String, needle: String },
    #[command(about = "Validate text against a rule; exits 1 on violations")]
    Validate {
        text: String,
        #[command(flatten)]
        rule: RuleArgs,
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
    #[command(about = "Humanize a byte count")]
    Bytes {
        bytes: u64,
        #[arg(long, default_value_t = DEFAULT_DECIMALS)]
        decimals: u32,
    },
    #[command(about = "Group the digits of a number")]
    Number {
        #[arg(allow_hyphen_values = true)]
        number: f64,
        #[arg(long, default_value = DEFAULT_SEPARATOR)]
        separator: String,
    },
    #[command(about = "Generate a random string (not for secrets)")]
    Random {
        length: usize,
        #[arg(long, default_value = BASE62)]
        charset: String,
        #[arg(long, help = "Seed for a reproducible result")]
        seed: Option<u64>,
    },
    #[command(about = "Fill {{name}} tokens")]
    Template {
        text: String,
        #[arg(long = "set", value_name = "KEY=VALUE")]
        values: Vec<String>,
    },
    #[command(about = "Prompt until the answer passes a rule")]
    Ask {
        question: String,
        #[command(flatten)]
        rule: RuleArgs,
    },
    #[command(about = "Print a short tour of the library")]
    Demo,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CheckKind {
    Email,
    Alpha,
    Alnum,
    Url,
    Numeric,
    Palindrome,
}

#[derive(Args)]
struct RuleArgs {
    #[arg(long, help = "Minimum length in characters")]
    min: Option<usize>,
    #[arg(long, help = "Maximum length in characters")]
    max: Option<usize>,
    #[arg(long, help = "Regular expression the text must match")]
    pattern: Option<String>,
    #[arg(long, help = "Accept the empty string")]
    allow_empty: bool,
    #[arg(long, value_name = "FILE", help = "JSON rule: {\"minLength\":..,\"pattern\":..}")]
    rules: Option<String>,
}

impl RuleArgs {
    /// Loads the rule file if any, then applies the inline flags on top.
    fn to_rule(&self) -> Result<ValidationRule, CliError> {
        let mut rule = match &self.rules {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                serde_json::from_str::<ValidationRule>(&raw)?
            }
            None => ValidationRule::new(),
        };

        if let Some(min) = self.min {
            rule = rule.min_length(min);
        }
        if let Some(max) = self.max {
            rule = rule.max_length(max);
        }
        if let Some(pattern) = &self.pattern {
            rule = rule
                .with_pattern_str(pattern)
                .map_err(|e| CliError::Pattern(e.to_string()))?;
        }
        if self.allow_empty {
            rule = rule.allow_empty(true);
        }

        debug!("using rule {:?}", rule);
        Ok(rule)
    }
}

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Json(serde_json::Error),
    Pattern(String),
    Step(StepError),
    Assignment(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Json(e) => write!(f, "Invalid rule file: {}", e),
            Self::Pattern(e) => write!(f, "Invalid pattern: {}", e),
            Self::Step(e) => write!(f, "{}", e),
            Self::Assignment(s) => write!(f, "Invalid value {} => KEY=VALUE", s),
        }
    }
}

impl Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<StepError> for CliError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

/// Splits `KEY=VALUE` pairs into a map. Later keys win.
fn parse_assignments(pairs: &[String]) -> Result<HashMap<String, String>, CliError> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(CliError::Assignment(pair.clone())),
        })
        .collect()
}

fn check(kind: CheckKind, text: &str) -> bool {
    let kit = StringKit::of(text);
    match kind {
        CheckKind::Email => kit.is_email(),
        CheckKind::Alpha => kit.is_alpha(),
        CheckKind::Alnum => kit.is_alphanumeric(),
        CheckKind::Url => kit.is_url(),
        CheckKind::Numeric => kit.is_numeric(),
        CheckKind::Palindrome => kit.is_palindrome(),
    }
}

fn demo() {
    println!("String toolkit tour\n");

    println!("Case conversions:");
    println!(
        "  snake_case -> camelCase: {}",
        StringKit::of("hello_world_example").to_camel_case_default()
    );
    println!(
        "  chained kebab -> Pascal: {}",
        StringKit::of("the quick brown fox")
            .to_kebab_case()
            .to_pascal_case()
    );

    println!("\nValidation:");
    println!("  email: {}", StringKit::of("test@example.com").is_email());
    println!("  alphanumeric: {}", StringKit::of("hello123").is_alphanumeric());

    println!("\nManipulation:");
    println!(
        "  truncate: {}",
        StringKit::of("This is a very long text that needs truncation").truncate(20)
    );
    println!(
        "  capitalize, strip, reverse: {}",
        StringKit::of("  Hello World  ")
            .capitalize()
            .remove_whitespace()
            .reverse()
    );

    println!("\nFormatting:");
    println!("  bytes: {}", format_bytes(1048576, DEFAULT_DECIMALS));
    println!(
        "  slug: {}",
        StringKit::of("Hello World! & Special Characters").slugify()
    );

    println!("\nPipeline:");
    println!(
        "  {}",
        StringKit::of("  The Quick Brown Fox Jumps Over The Lazy Dog  ")
            .title_case()
            .remove_whitespace()
            .to_snake_case()
            .to_constant_case()
    );
}

/// Runs one command. `Ok(false)` means a check or validation did not pass.
fn run(command: Command) -> Result<bool, CliError> {
    match command {
        Command::Case {
            style,
            text,
            preserve_leading,
            preserve_trailing,
        } => {
            let converted = match style {
                CaseStyle::Camel => {
                    let options = CaseTransformOptions::default()
                        .preserve_leading_underscore(preserve_leading)
                        .preserve_trailing_underscore(preserve_trailing);
                    StringKit::of(text).to_camel_case(&options)
                }
                other => StringKit::of(text).to_case(other),
            };
            println!("{}", converted);
        }
        Command::Chain { text, steps } => {
            let steps = steps
                .iter()
                .map(|raw| raw.parse::<Step>())
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", run_chain(&text, &steps));
        }
        Command::Check { kind, text } => {
            let holds = check(kind, &text);
            println!("{}", holds);
            return Ok(holds);
        }
        Command::Count { text, needle } => {
            println!("{}", count_occurrences(&text, &needle));
        }
        Command::Validate { text, rule, json } => {
            let report = validate_string(&text, &rule.to_rule()?);
            if json {
                println!("{}", report.to_json()?);
            } else if report.valid {
                println!("valid");
            } else {
                for error in &report.errors {
                    println!("{}", error);
                }
            }
            return Ok(report.valid);
        }
        Command::Bytes { bytes, decimals } => {
            println!("{}", format_bytes(bytes, decimals));
        }
        Command::Number { number, separator } => {
            println!("{}", format_number(number, &separator));
        }
        Command::Random {
            length,
            charset,
            seed,
        } => {
            let value = match seed {
                Some(seed) => Entropy::seeded(seed).string(length, &charset),
                None => random_string(length, &charset),
            };
            println!("{}", value);
        }
        Command::Template { text, values } => {
            println!("{}", template(&text, &parse_assignments(&values)?));
        }
        Command::Ask { question, rule } => {
            let terminal = Terminal::ask(&question, &rule.to_rule()?)?;
            println!("{}", terminal.answer);
        }
        Command::Demo => demo(),
    }

    Ok(true)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}
