//! # Case Conversion
//!
//! Converts identifiers between the common naming conventions:
//! `camelCase`, `PascalCase`, `kebab-case`, `snake_case` and `CONSTANT_CASE`.
//!
//! Every converter returns the input unchanged when it is empty.
//!
//! ## Normalization
//!
//! [`to_camel_case`] lower-cases the whole body before re-capitalizing the
//! characters that follow a separator, so an input that is already camelCase
//! loses its internal capitals (`"helloWorld"` becomes `"helloworld"`).
//! [`to_pascal_case`] keeps a dedicated branch for already camelCase input that
//! only upper-cases the first character. Both behaviours are relied upon by
//! callers and are kept as they are.
//!
//! ## Example
//! ```rust
//! use stringkit::case::{to_camel_case, to_kebab_case, to_pascal_case, CaseTransformOptions};
//!
//! assert_eq!(to_camel_case("hello_world", &CaseTransformOptions::default()), "helloWorld");
//! assert_eq!(to_pascal_case("helloWorld"), "HelloWorld");
//! assert_eq!(to_kebab_case("helloWorld"), "hello-world");
//! ```
use std::{fmt::Display, str::FromStr, sync::LazyLock};

use regex::{Captures, Regex};

use crate::ParseOptionError;

static SEPARATOR_THEN_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+(.)").expect("separator regex should compile"));

static INVALID_IDENT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^a-zA-Z_$]").expect("ident start regex should compile"));

static LOWER_UPPER_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("boundary regex should compile"));

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("separator run regex should compile"));

static ALREADY_CAMEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").expect("camel regex should compile"));

/// Options accepted by [`to_camel_case`].
///
/// - `preserve_leading_underscore`: keep a leading run of `_` as-is.
/// - `preserve_trailing_underscore`: keep a trailing run of `_` as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CaseTransformOptions {
    pub preserve_leading_underscore: bool,
    pub preserve_trailing_underscore: bool,
}

impl CaseTransformOptions {
    pub fn preserve_leading_underscore(mut self, yes: bool) -> Self {
        self.preserve_leading_underscore = yes;
        self
    }

    pub fn preserve_trailing_underscore(mut self, yes: bool) -> Self {
        self.preserve_trailing_underscore = yes;
        self
    }
}

/// Naming conventions known to this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Camel,
    Pascal,
    Kebab,
    Snake,
    Constant,
}

impl CaseStyle {
    /// Converts `input` to this style. Camel case uses the default options.
    pub fn apply(&self, input: &str) -> String {
        match self {
            Self::Camel => to_camel_case(input, &CaseTransformOptions::default()),
            Self::Pascal => to_pascal_case(input),
            Self::Kebab => to_kebab_case(input),
            Self::Snake => to_snake_case(input),
            Self::Constant => to_constant_case(input),
        }
    }
}

impl Display for CaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Camel => write!(f, "camel"),
            Self::Pascal => write!(f, "pascal"),
            Self::Kebab => write!(f, "kebab"),
            Self::Snake => write!(f, "snake"),
            Self::Constant => write!(f, "constant"),
        }
    }
}

impl FromStr for CaseStyle {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Self::Camel),
            "pascal" | "pascalcase" => Ok(Self::Pascal),
            "kebab" | "kebab-case" => Ok(Self::Kebab),
            "snake" | "snake_case" => Ok(Self::Snake),
            "constant" | "constant_case" => Ok(Self::Constant),
            _ => Err(ParseOptionError::UnknownCaseStyle(s.to_string())),
        }
    }
}

/// Upper-cases the first character of `input` and leaves the rest untouched.
fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a string to camelCase.
///
/// Separators (any run of non-alphanumeric characters) are removed and the
/// character that follows each run is upper-cased. A leading character that
/// cannot start an identifier is dropped.
pub fn to_camel_case(input: &str, options: &CaseTransformOptions) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut leading = "";
    let mut trailing = "";
    let mut body = input;

    if options.preserve_leading_underscore && input.starts_with('_') {
        let run = input.len() - input.trim_start_matches('_').len();
        leading = &input[..run];
        body = &input[run..];
    }

    if options.preserve_trailing_underscore && input.ends_with('_') {
        let run = input.len() - input.trim_end_matches('_').len();
        trailing = &input[input.len() - run..];
        // An all-underscore input already moved into `leading`; the body is then empty.
        body = &body[..body.len().saturating_sub(run)];
    }

    let lowered = body.to_lowercase();
    let joined = SEPARATOR_THEN_CHAR.replace_all(&lowered, |caps: &Captures| caps[1].to_uppercase());
    let result = INVALID_IDENT_START.replace(&joined, "");

    format!("{leading}{result}{trailing}")
}

/// Converts a string to PascalCase.
///
/// Input that already looks like camelCase keeps its internal capitalization.
pub fn to_pascal_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    if ALREADY_CAMEL.is_match(input) {
        return upper_first(input);
    }

    upper_first(&to_camel_case(input, &CaseTransformOptions::default()))
}

/// Shared implementation of kebab and snake case.
fn separate_words(input: &str, separator: char) -> String {
    if input.is_empty() {
        return String::new();
    }

    let boundary = format!("${{1}}{separator}${{2}}");
    let split = LOWER_UPPER_BOUNDARY.replace_all(input, boundary.as_str());
    let collapsed = NON_ALPHANUMERIC_RUN.replace_all(&split, separator.to_string().as_str());

    collapsed.to_lowercase().trim_matches(separator).to_string()
}

/// Converts a string to kebab-case.
pub fn to_kebab_case(input: &str) -> String {
    separate_words(input, '-')
}

/// Converts a string to snake_case.
pub fn to_snake_case(input: &str) -> String {
    separate_words(input, '_')
}

/// Converts a string to CONSTANT_CASE.
pub fn to_constant_case(input: &str) -> String {
    to_snake_case(input).to_uppercase()
}
