//! Pipeline steps accepted by `stringkit chain`.
//!
//! A step is a bare name (`camel`, `slugify`, ...) or a name with arguments:
//! `truncate=N` and `pad=N[:left|right|both[:C]]`.
use std::{error::Error, fmt::Display, str::FromStr};

use stringkit::{CaseStyle, PadDirection, PadOptions, ParseOptionError, StringKit};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Case(CaseStyle),
    Capitalize,
    Title,
    Reverse,
    Strip,
    Escape,
    Unescape,
    Slugify,
    Truncate(usize),
    Pad(usize, PadOptions),
}

#[derive(Debug)]
pub enum StepError {
    Unknown(String),
    MissingLength(String),
    InvalidLength(String),
    InvalidFill(String),
    Option(ParseOptionError),
}

impl Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(s) => write!(f, "Unknown step {} => see `stringkit chain --help`", s),
            Self::MissingLength(s) => write!(f, "Step {} needs a length => {}=N", s, s),
            Self::InvalidLength(s) => write!(f, "Invalid length {} => expected a whole number", s),
            Self::InvalidFill(s) => write!(f, "Invalid fill {} => expected a single character", s),
            Self::Option(e) => write!(f, "{}", e),
        }
    }
}

impl Error for StepError {}

impl From<ParseOptionError> for StepError {
    fn from(e: ParseOptionError) -> Self {
        Self::Option(e)
    }
}

fn parse_length(raw: &str) -> Result<usize, StepError> {
    raw.parse()
        .map_err(|_| StepError::InvalidLength(raw.to_string()))
}

fn parse_pad(args: &str) -> Result<Step, StepError> {
    let mut parts = args.splitn(3, ':');
    let length = parse_length(parts.next().unwrap_or_default())?;
    let mut options = PadOptions::default();

    if let Some(direction) = parts.next() {
        options = options.direction(direction.parse::<PadDirection>()?);
    }
    if let Some(fill) = parts.next() {
        let mut chars = fill.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => options = options.fill(c),
            _ => return Err(StepError::InvalidFill(fill.to_string())),
        }
    }

    Ok(Step::Pad(length, options))
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, args) = match s.split_once('=') {
            Some((name, args)) => (name, Some(args)),
            None => (s, None),
        };

        match (name, args) {
            ("truncate", Some(args)) => Ok(Step::Truncate(parse_length(args)?)),
            ("pad", Some(args)) => parse_pad(args),
            ("truncate" | "pad", None) => Err(StepError::MissingLength(name.to_string())),
            ("capitalize", None) => Ok(Step::Capitalize),
            ("title", None) => Ok(Step::Title),
            ("reverse", None) => Ok(Step::Reverse),
            ("strip", None) => Ok(Step::Strip),
            ("escape", None) => Ok(Step::Escape),
            ("unescape", None) => Ok(Step::Unescape),
            ("slugify", None) => Ok(Step::Slugify),
            (name, None) => name
                .parse::<CaseStyle>()
                .map(Step::Case)
                .map_err(|_| StepError::Unknown(s.to_string())),
            _ => Err(StepError::Unknown(s.to_string())),
        }
    }
}

impl Step {
    pub fn apply(&self, kit: &StringKit) -> StringKit {
        match self {
            Step::Case(style) => kit.to_case(*style),
            Step::Capitalize => kit.capitalize(),
            Step::Title => kit.title_case(),
            Step::Reverse => kit.reverse(),
            Step::Strip => kit.remove_whitespace(),
            Step::Escape => kit.escape_html(),
            Step::Unescape => kit.unescape_html(),
            Step::Slugify => kit.slugify(),
            Step::Truncate(length) => kit.truncate(*length),
            Step::Pad(length, options) => kit.pad(*length, options),
        }
    }
}

/// Runs `steps` in order, starting from `input`.
pub fn run_chain(input: &str, steps: &[Step]) -> StringKit {
    steps
        .iter()
        .fold(StringKit::of(input), |kit, step| step.apply(&kit))
}
