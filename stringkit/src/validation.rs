//! # Validation
//!
//! Boolean predicates for common formats plus a declarative [`ValidationRule`]
//! that reports every violation instead of stopping at the first one.
//!
//! ## Features
//! - Fixed-pattern checks: [`is_email`], [`is_alpha`], [`is_alphanumeric`], [`is_numeric`]
//! - Absolute URL detection with [`is_url`]
//! - Rule evaluation with [`validate_string`], returning a [`ValidationResult`]
//!
//! ## Rule order
//! Checks always run in the same order and all of them run:
//! emptiness, `min_length`, `max_length`, `pattern`.
//!
//! ## Example
//! ```rust
//! use stringkit::Regex;
//! use stringkit::validation::{validate_string, ValidationRule};
//!
//! let rule = ValidationRule::new()
//!     .min_length(5)
//!     .pattern(Regex::new(r"^\d+$").unwrap());
//!
//! let report = validate_string("x", &rule);
//! assert!(!report.valid);
//! assert_eq!(
//!     report.errors,
//!     vec![
//!         "String must be at least 5 characters long",
//!         "String does not match required pattern",
//!     ]
//! );
//! ```
use std::{error::Error, fmt::Display, sync::LazyLock};

use log::{debug, trace};
use regex::Regex;
use url::Url;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));

static ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("alpha regex should compile"));

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("alphanumeric regex should compile"));

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("decimal regex should compile")
});

/// Local part, `@`, then a domain containing at least one dot. No whitespace anywhere.
pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Non-empty and ASCII letters only.
pub fn is_alpha(input: &str) -> bool {
    ALPHA.is_match(input)
}

/// Non-empty and ASCII letters or digits only.
pub fn is_alphanumeric(input: &str) -> bool {
    ALPHANUMERIC.is_match(input)
}

/// Accepts absolute URLs of any scheme that carry a non-empty host.
///
/// `ftp://files.example.com` passes, `example.com` and `http://` do not.
pub fn is_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// The whole string is one finite decimal number: optional sign, digits with
/// at most one decimal point, optional exponent. Surrounding whitespace is rejected.
pub fn is_numeric(input: &str) -> bool {
    DECIMAL.is_match(input) && input.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Constraints evaluated by [`validate_string`].
///
/// Every field is optional; `allow_empty` defaults to `false`, meaning the
/// empty string is reported as a violation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ValidationRule {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    #[cfg_attr(feature = "serde", serde(with = "pattern_source"))]
    pub pattern: Option<Regex>,
    pub allow_empty: bool,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compiles `source` and uses it as the pattern.
    ///
    /// # Errors
    /// Returns the [`regex::Error`] when `source` is not a valid expression.
    pub fn with_pattern_str(self, source: &str) -> Result<Self, regex::Error> {
        Ok(self.pattern(Regex::new(source)?))
    }

    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// The individual checks of this rule, in evaluation order.
    fn constraints(&self) -> Vec<Constraint<'_>> {
        let mut constraints = Vec::with_capacity(4);
        if !self.allow_empty {
            constraints.push(Constraint::NotEmpty);
        }
        if let Some(min) = self.min_length {
            constraints.push(Constraint::MinLength(min));
        }
        if let Some(max) = self.max_length {
            constraints.push(Constraint::MaxLength(max));
        }
        if let Some(pattern) = &self.pattern {
            constraints.push(Constraint::Pattern(pattern));
        }
        constraints
    }
}

/// A single failed check of a [`ValidationRule`].
///
/// The `Display` output is the message stored in [`ValidationResult::errors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    Empty,
    TooShort(usize),
    TooLong(usize),
    PatternMismatch,
}

impl Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "String cannot be empty"),
            Self::TooShort(n) => write!(f, "String must be at least {} characters long", n),
            Self::TooLong(n) => write!(f, "String must be no more than {} characters long", n),
            Self::PatternMismatch => write!(f, "String does not match required pattern"),
        }
    }
}

impl Error for RuleViolation {}

/// Outcome of [`validate_string`]: `valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_violations(violations: &[RuleViolation]) -> Self {
        Self {
            valid: violations.is_empty(),
            errors: violations.iter().map(ToString::to_string).collect(),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        impl ValidationResult {
            /// Renders the report as a JSON object: `{"valid":false,"errors":[...]}`.
            pub fn to_json(&self) -> Result<String, serde_json::Error> {
                serde_json::to_string(self)
            }
        }

        /// (De)serializes an optional [`Regex`] through its source string.
        mod pattern_source {
            use regex::Regex;
            use serde::{Deserialize, Deserializer, Serializer, de::Error};

            pub fn serialize<S: Serializer>(
                pattern: &Option<Regex>,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                match pattern {
                    Some(regex) => serializer.serialize_some(regex.as_str()),
                    None => serializer.serialize_none(),
                }
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Option<Regex>, D::Error> {
                Option::<String>::deserialize(deserializer)?
                    .map(|source| Regex::new(&source).map_err(D::Error::custom))
                    .transpose()
            }
        }
    }
}

/// Trait for a single check against an input string.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), RuleViolation>;
}

enum Constraint<'a> {
    NotEmpty,
    MinLength(usize),
    MaxLength(usize),
    Pattern(&'a Regex),
}

impl Validate for Constraint<'_> {
    fn validate(&self, input: &str) -> Result<(), RuleViolation> {
        match self {
            Constraint::NotEmpty => {
                if input.is_empty() {
                    Err(RuleViolation::Empty)
                } else {
                    Ok(())
                }
            }
            Constraint::MinLength(min) => {
                if input.chars().count() < *min {
                    Err(RuleViolation::TooShort(*min))
                } else {
                    Ok(())
                }
            }
            Constraint::MaxLength(max) => {
                if input.chars().count() > *max {
                    Err(RuleViolation::TooLong(*max))
                } else {
                    Ok(())
                }
            }
            Constraint::Pattern(pattern) => {
                if pattern.is_match(input) {
                    Ok(())
                } else {
                    Err(RuleViolation::PatternMismatch)
                }
            }
        }
    }
}

/// Runs every check of `rule` against `input` and collects all failures.
pub fn validate_string(input: &str, rule: &ValidationRule) -> ValidationResult {
    let violations: Vec<RuleViolation> = rule
        .constraints()
        .iter()
        .filter_map(|constraint| constraint.validate(input).err())
        .collect();

    trace!("validated {} chars, {} violation(s)", input.chars().count(), violations.len());
    if !violations.is_empty() {
        debug!("validation failed: {:?}", violations);
    }

    ValidationResult::from_violations(&violations)
}
