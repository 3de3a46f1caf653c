//! # Presentation Formatting
//!
//! Padding, `{{token}}` templating, thousands grouping, byte-size
//! humanization and slug generation.
//!
//! ## Example
//! ```rust
//! use stringkit::formatting::{format_bytes, format_number, pad, PadDirection, PadOptions};
//!
//! assert_eq!(format_bytes(1536, 2), "1.5 KB");
//! assert_eq!(format_number(1234567, ","), "1,234,567");
//! assert_eq!(pad("hi", 6, &PadOptions::default().direction(PadDirection::Both)), "  hi  ");
//! ```
use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt::Display,
    hash::{BuildHasher, Hash},
    str::FromStr,
    sync::LazyLock,
};

use regex::{Captures, Regex};

use crate::ParseOptionError;

/// Group separator used by [`format_number`] unless another one is given.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Fractional digits kept by [`format_bytes`] unless told otherwise.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Units used by [`format_bytes`], in powers of 1024.
pub const BYTE_UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

// `toFixed` style rounding stops being meaningful long before this.
const MAX_DECIMALS: u32 = 100;

static TEMPLATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("template token regex should compile")
});

static NON_SLUG_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("slug filter regex should compile"));

static SLUG_SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("slug separator regex should compile"));

/// Side(s) on which [`pad`] adds fill characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PadDirection {
    #[default]
    Left,
    Right,
    Both,
}

impl Display for PadDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl FromStr for PadDirection {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "both" => Ok(Self::Both),
            _ => Err(ParseOptionError::UnknownPadDirection(s.to_string())),
        }
    }
}

/// Options accepted by [`pad`]: the fill character (space by default) and the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PadOptions {
    #[cfg_attr(feature = "serde", serde(rename = "char"))]
    pub fill: char,
    pub direction: PadDirection,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            fill: ' ',
            direction: PadDirection::Left,
        }
    }
}

impl PadOptions {
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    pub fn direction(mut self, direction: PadDirection) -> Self {
        self.direction = direction;
        self
    }
}

fn fill_run(fill: char, count: usize) -> String {
    std::iter::repeat_n(fill, count).collect()
}

/// Pads `input` up to `length` characters. Never truncates.
///
/// With [`PadDirection::Both`] the left side receives the smaller half.
pub fn pad(input: &str, length: usize, options: &PadOptions) -> String {
    let current = input.chars().count();
    if current >= length {
        return input.to_string();
    }

    let pad_length = length - current;
    match options.direction {
        PadDirection::Left => format!("{}{input}", fill_run(options.fill, pad_length)),
        PadDirection::Right => format!("{input}{}", fill_run(options.fill, pad_length)),
        PadDirection::Both => {
            let left = pad_length / 2;
            let right = pad_length - left;
            format!(
                "{}{input}{}",
                fill_run(options.fill, left),
                fill_run(options.fill, right)
            )
        }
    }
}

/// Replaces every `{{name}}` token with the matching entry of `values`.
///
/// Unknown names are left exactly as written.
///
/// ```rust
/// use std::collections::HashMap;
/// use stringkit::formatting::template;
///
/// let values = HashMap::from([("name", "World")]);
/// assert_eq!(template("Hello {{name}} {{other}}", &values), "Hello World {{other}}");
/// ```
pub fn template<K, V, S>(input: &str, values: &HashMap<K, V, S>) -> String
where
    K: Borrow<str> + Hash + Eq,
    V: Display,
    S: BuildHasher,
{
    TEMPLATE_TOKEN
        .replace_all(input, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Renders `num` and inserts `separator` between groups of three digits.
///
/// Grouping counts from the right end of every digit run, so a fractional
/// part is grouped the same way as the integer part.
pub fn format_number<N: Display>(num: N, separator: &str) -> String {
    let rendered = num.to_string();
    let chars: Vec<char> = rendered.chars().collect();
    let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 * separator.len());

    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }

        let run = &chars[start..i];
        for (k, digit) in run.iter().enumerate() {
            if k > 0 && (run.len() - k) % 3 == 0 {
                out.push_str(separator);
            }
            out.push(*digit);
        }
    }

    out
}

/// Humanizes a byte count using powers of 1024.
///
/// The scaled value is rounded to `decimals` fractional digits and printed
/// without trailing zeros: `1536` bytes is `"1.5 KB"`, `1048576` is `"1 MB"`.
pub fn format_bytes(bytes: u64, decimals: u32) -> String {
    if bytes == 0 {
        return format!("0 {}", BYTE_UNITS[0]);
    }

    // floor(log1024(bytes)), computed on the integer to avoid float drift at exact powers.
    let exponent = ((u64::BITS - 1 - bytes.leading_zeros()) / 10) as usize;
    let exponent = exponent.min(BYTE_UNITS.len() - 1);

    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let rounded = (value * factor).round() / factor;

    format!("{} {}", rounded, BYTE_UNITS[exponent])
}

/// Builds a lower-case, hyphen-separated slug.
///
/// Characters other than word characters, whitespace and hyphens are dropped.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let filtered = NON_SLUG_CHAR.replace_all(lowered.trim(), "");
    let hyphenated = SLUG_SEPARATOR_RUN.replace_all(&filtered, "-");

    hyphenated.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_pad_left_default() {
        let options = PadOptions::default();
        assert_eq!(pad("hello", 10, &options), "     hello");
        assert_eq!(pad("", 5, &options), "     ");
        assert_eq!(pad("", 5, &options.fill('*')), "*****");
        assert_eq!(pad("hello", 10, &options.fill('0')), "00000hello");
    }

    #[test]
    fn test_formatting_pad_right_and_both() {
        let right = PadOptions::default().direction(PadDirection::Right);
        let both = PadOptions::default().direction(PadDirection::Both);

        assert_eq!(pad("hello", 10, &right), "hello     ");
        assert_eq!(pad("test", 8, &right.fill('*')), "test****");
        assert_eq!(pad("hello", 11, &both), "   hello   ");
        assert_eq!(pad("test", 10, &both), "   test   ");
        assert_eq!(pad("hello-world", 20, &both.fill('=')), "====hello-world=====");
    }

    #[test]
    fn test_formatting_pad_never_truncates() {
        let options = PadOptions::default();
        assert_eq!(pad("hello", 5, &options), "hello");
        assert_eq!(pad("hello", 3, &options), "hello");
    }

    #[test]
    fn test_formatting_pad_direction_from_str() {
        assert_eq!("BOTH".parse::<PadDirection>().unwrap(), PadDirection::Both);
        assert!("center".parse::<PadDirection>().is_err());
    }

    #[test]
    fn test_formatting_template() {
        let values = HashMap::from([("greeting", "Hi"), ("name", "John")]);
        assert_eq!(template("{{greeting}} {{name}}!", &values), "Hi John!");
        assert_eq!(
            template("{{name}} says hello to {{name}}", &values),
            "John says hello to John"
        );
        assert_eq!(template("Hello {{unknown}}!", &values), "Hello {{unknown}}!");
        assert_eq!(template("{{ name }}", &values), "{{ name }}");
        assert_eq!(template("", &values), "");
    }

    #[test]
    fn test_formatting_template_display_values() {
        let values: HashMap<String, Box<dyn Display>> = HashMap::from([
            ("num".to_string(), Box::new(42) as Box<dyn Display>),
            ("bool".to_string(), Box::new(true) as Box<dyn Display>),
        ]);
        assert_eq!(
            template("Number: {{num}}, Boolean: {{bool}}", &values),
            "Number: 42, Boolean: true"
        );
    }

    #[test]
    fn test_formatting_format_number() {
        assert_eq!(format_number(1000, DEFAULT_SEPARATOR), "1,000");
        assert_eq!(format_number(1234567, DEFAULT_SEPARATOR), "1,234,567");
        assert_eq!(format_number(999, DEFAULT_SEPARATOR), "999");
        assert_eq!(format_number(0, DEFAULT_SEPARATOR), "0");
        assert_eq!(format_number(1000, "."), "1.000");
        assert_eq!(format_number(1234567, " "), "1 234 567");
        assert_eq!(format_number(-1234567, DEFAULT_SEPARATOR), "-1,234,567");
    }

    #[test]
    fn test_formatting_format_number_float() {
        assert_eq!(format_number(1234.5, DEFAULT_SEPARATOR), "1,234.5");
        assert_eq!(format_number(1234.5678, DEFAULT_SEPARATOR), "1,234.5,678");
    }

    #[test]
    fn test_formatting_format_bytes() {
        assert_eq!(format_bytes(0, DEFAULT_DECIMALS), "0 Bytes");
        assert_eq!(format_bytes(512, DEFAULT_DECIMALS), "512 Bytes");
        assert_eq!(format_bytes(1024, DEFAULT_DECIMALS), "1 KB");
        assert_eq!(format_bytes(1048576, DEFAULT_DECIMALS), "1 MB");
        assert_eq!(format_bytes(1073741824, DEFAULT_DECIMALS), "1 GB");
        assert_eq!(format_bytes(1099511627776, DEFAULT_DECIMALS), "1 TB");
        assert_eq!(format_bytes(1125899906842624, DEFAULT_DECIMALS), "1 PB");
        assert_eq!(format_bytes(1500, DEFAULT_DECIMALS), "1.46 KB");
    }

    #[test]
    fn test_formatting_format_bytes_decimals() {
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
        assert_eq!(format_bytes(1536, 0), "2 KB");
        assert_eq!(format_bytes(1536, 3), "1.5 KB");
        assert_eq!(format_bytes(u64::MAX, 0), "16 EB");
    }

    #[test]
    fn test_formatting_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Hello @#$ World!"), "hello-world");
        assert_eq!(slugify("Test (with) [brackets]"), "test-with-brackets");
        assert_eq!(slugify("hello---world"), "hello-world");
        assert_eq!(slugify("hello___world"), "hello-world");
        assert_eq!(slugify("  hello world  "), "hello-world");
        assert_eq!(slugify("---hello world---"), "hello-world");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify(""), "");
    }
}
