//! # StringKit
//!
//! Stateless text transformation, formatting and validation helpers, with an
//! immutable fluent builder to chain them.
//!
//! ## Features
//!
//! - **Case conversion** - camelCase, PascalCase, kebab-case, snake_case, CONSTANT_CASE
//! - **Manipulation** - truncation, capitalization, title case, reversal,
//!   whitespace removal, occurrence counting, palindromes, HTML escaping
//! - **Formatting** - padding, `{{token}}` templates, thousands grouping,
//!   byte sizes, slugs
//! - **Random strings** - from any charset, with an injectable generator
//! - **Validation** - email/alpha/alphanumeric/url/numeric predicates and
//!   rules that report every violation
//! - **Fluent builder** - [`StringKit`], where every transformation returns a new value
//!
//! ("serde" feature)
//! - `Serialize`/`Deserialize` for the option structs, [`ValidationRule`] and
//!   [`ValidationResult`], plus [`ValidationResult::to_json`]
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! stringkit = "0.1"
//! stringkit = { version = "0.1", features = ["serde"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Free functions
//!
//! ```rust
//! use stringkit::{format_bytes, to_camel_case, truncate, CaseTransformOptions};
//!
//! assert_eq!(to_camel_case("hello_world_example", &CaseTransformOptions::default()), "helloWorldExample");
//! assert_eq!(truncate("This is a very long text", 10, "..."), "This is...");
//! assert_eq!(format_bytes(1048576, 2), "1 MB");
//! ```
//!
//! ### Chaining
//!
//! ```rust
//! use stringkit::StringKit;
//!
//! let constant = StringKit::of("  The Quick Brown Fox  ")
//!     .title_case()
//!     .remove_whitespace()
//!     .to_snake_case()
//!     .to_constant_case();
//!
//! assert_eq!(constant.to_string(), "THE_QUICK_BROWN_FOX");
//! ```
//!
//! ### Rule validation
//!
//! ```rust
//! use stringkit::{validate_string, ValidationRule};
//!
//! let rule = ValidationRule::new().min_length(3).max_length(10);
//! let report = validate_string("hi", &rule);
//!
//! assert!(!report.valid);
//! assert_eq!(report.errors, vec!["String must be at least 3 characters long"]);
//! ```
//!
//! ## Error Handling
//!
//! Transformations never fail: degenerate input such as an empty string or a
//! length shorter than the ellipsis produces a value, not an error. Fallible
//! calls are limited to building inputs, e.g. compiling a pattern with
//! [`ValidationRule::with_pattern_str`] or parsing a [`PadDirection`] /
//! [`CaseStyle`] from text ([`ParseOptionError`]).
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade (`trace` for each validation and
//! random draw, `debug` for failed validations). Install any logger to see it.
use std::{error::Error, fmt::Display};

pub mod case;
pub use case::{
    CaseStyle, CaseTransformOptions, to_camel_case, to_constant_case, to_kebab_case,
    to_pascal_case, to_snake_case,
};

pub mod manipulation;
pub use manipulation::{
    DEFAULT_ELLIPSIS, capitalize, count_occurrences, escape_html, is_palindrome,
    remove_whitespace, reverse, title_case, truncate, unescape_html,
};

pub mod formatting;
pub use formatting::{
    BYTE_UNITS, DEFAULT_DECIMALS, DEFAULT_SEPARATOR, PadDirection, PadOptions, format_bytes,
    format_number, pad, slugify, template,
};

pub mod random;
pub use random::{BASE62, Entropy, random_string, random_string_with};

pub mod validation;
pub use validation::{
    RuleViolation, ValidationResult, ValidationRule, is_alpha, is_alphanumeric, is_email,
    is_numeric, is_url, validate_string,
};

pub mod fluent;
pub use fluent::StringKit;

pub use regex::Regex;

/// Error returned when an option value cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOptionError {
    UnknownCaseStyle(String),
    UnknownPadDirection(String),
}

impl Display for ParseOptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCaseStyle(s) => write!(
                f,
                "Unknown case style {} => camel, pascal, kebab, snake or constant",
                s
            ),
            Self::UnknownPadDirection(s) => {
                write!(f, "Unknown pad direction {} => left, right or both", s)
            }
        }
    }
}

impl Error for ParseOptionError {}
