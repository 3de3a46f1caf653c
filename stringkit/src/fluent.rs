//! # Fluent Builder
//!
//! [`StringKit`] wraps one string and exposes every helper of this crate as a
//! method. Transformations return a new `StringKit` and leave the receiver
//! untouched, so a value can branch into several pipelines:
//!
//! ```rust
//! use stringkit::StringKit;
//!
//! let original = StringKit::of("hello world");
//! let pascal = original.to_camel_case_default().to_pascal_case();
//! let slug = original.slugify();
//!
//! assert_eq!(original, "hello world");
//! assert_eq!(pascal, "HelloWorld");
//! assert_eq!(slug, "hello-world");
//! ```
//!
//! Checks (`is_email`, `is_palindrome`, `validate`, ...) end the chain and
//! return plain values.
use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt::Display,
    hash::{BuildHasher, Hash},
};

use crate::{
    case::{self, CaseStyle, CaseTransformOptions},
    formatting::{self, PadOptions},
    manipulation,
    validation::{self, ValidationResult, ValidationRule},
};

/// Immutable wrapper around a string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringKit {
    value: String,
}

impl StringKit {
    pub fn of(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Same as [`StringKit::as_str`].
    pub fn value_of(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }

    fn derive(&self, value: String) -> Self {
        Self { value }
    }

    // Case conversions

    pub fn to_camel_case(&self, options: &CaseTransformOptions) -> Self {
        self.derive(case::to_camel_case(&self.value, options))
    }

    pub fn to_camel_case_default(&self) -> Self {
        self.to_camel_case(&CaseTransformOptions::default())
    }

    pub fn to_pascal_case(&self) -> Self {
        self.derive(case::to_pascal_case(&self.value))
    }

    pub fn to_kebab_case(&self) -> Self {
        self.derive(case::to_kebab_case(&self.value))
    }

    pub fn to_snake_case(&self) -> Self {
        self.derive(case::to_snake_case(&self.value))
    }

    pub fn to_constant_case(&self) -> Self {
        self.derive(case::to_constant_case(&self.value))
    }

    pub fn to_case(&self, style: CaseStyle) -> Self {
        self.derive(style.apply(&self.value))
    }

    // Manipulation

    /// Truncates with the default `"..."` ellipsis.
    pub fn truncate(&self, length: usize) -> Self {
        self.truncate_with(length, manipulation::DEFAULT_ELLIPSIS)
    }

    pub fn truncate_with(&self, length: usize, ellipsis: &str) -> Self {
        self.derive(manipulation::truncate(&self.value, length, ellipsis))
    }

    pub fn capitalize(&self) -> Self {
        self.derive(manipulation::capitalize(&self.value))
    }

    pub fn title_case(&self) -> Self {
        self.derive(manipulation::title_case(&self.value))
    }

    pub fn reverse(&self) -> Self {
        self.derive(manipulation::reverse(&self.value))
    }

    pub fn remove_whitespace(&self) -> Self {
        self.derive(manipulation::remove_whitespace(&self.value))
    }

    pub fn escape_html(&self) -> Self {
        self.derive(manipulation::escape_html(&self.value))
    }

    pub fn unescape_html(&self) -> Self {
        self.derive(manipulation::unescape_html(&self.value))
    }

    // Formatting

    pub fn pad(&self, length: usize, options: &PadOptions) -> Self {
        self.derive(formatting::pad(&self.value, length, options))
    }

    pub fn slugify(&self) -> Self {
        self.derive(formatting::slugify(&self.value))
    }

    pub fn template<K, V, S>(&self, values: &HashMap<K, V, S>) -> Self
    where
        K: Borrow<str> + Hash + Eq,
        V: Display,
        S: BuildHasher,
    {
        self.derive(formatting::template(&self.value, values))
    }

    // Checks

    pub fn is_email(&self) -> bool {
        validation::is_email(&self.value)
    }

    pub fn is_alpha(&self) -> bool {
        validation::is_alpha(&self.value)
    }

    pub fn is_alphanumeric(&self) -> bool {
        validation::is_alphanumeric(&self.value)
    }

    pub fn is_url(&self) -> bool {
        validation::is_url(&self.value)
    }

    pub fn is_numeric(&self) -> bool {
        validation::is_numeric(&self.value)
    }

    pub fn is_palindrome(&self) -> bool {
        manipulation::is_palindrome(&self.value)
    }

    pub fn count_occurrences(&self, needle: &str) -> usize {
        manipulation::count_occurrences(&self.value, needle)
    }

    pub fn validate(&self, rule: &ValidationRule) -> ValidationResult {
        validation::validate_string(&self.value, rule)
    }
}

impl Display for StringKit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for StringKit {
    fn from(value: &str) -> Self {
        Self::of(value)
    }
}

impl From<String> for StringKit {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl From<StringKit> for String {
    fn from(kit: StringKit) -> Self {
        kit.value
    }
}

impl AsRef<str> for StringKit {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for StringKit {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for StringKit {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}
