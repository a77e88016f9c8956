use memchr::memmem::Finder;
use regex::Regex;
use serde_json::Value;
use tracing::{trace, warn};

mod blank;
mod case;
mod error;
mod json;
mod viet;

pub use blank::Blank;
pub use error::{Result, StrError};
pub use json::{JsonDecoder, JsonInput, JsonParser, SerdeJsonDecoder};

// Characters `regex_escape` prefixes with a backslash
const REGEX_META: &[char] = &[
    '.', '?', '*', '+', '^', '$', '[', ']', '\\', '(', ')', '{', '}', '|', '-',
];

pub struct Str;

impl Str {
    /// Determine if a value is absent, zero-length, whitespace-only or falsy
    ///
    /// ```rust
    /// use strkit::Str;
    /// assert!(Str::empty("   "));
    /// assert!(Str::empty(&None::<&str>));
    /// assert!(Str::empty(&0));
    /// assert!(!Str::empty(&vec![1]));
    /// ```
    pub fn empty<T: Blank + ?Sized>(value: &T) -> bool {
        value.is_blank()
    }

    /// Compare two strings. An absent side never equals anything.
    pub fn equals(first: Option<&str>, second: Option<&str>, case_sensitive: bool) -> bool {
        match (first, second) {
            (Some(first), Some(second)) if case_sensitive => first == second,
            (Some(first), Some(second)) => first.to_lowercase() == second.to_lowercase(),
            _ => false,
        }
    }

    /// Interpret a string as a boolean: blank, `0`, `0.0` and `false` are false
    pub fn bool_val(value: &str) -> bool {
        if value.is_blank() {
            return false;
        }
        !matches!(value.trim().to_lowercase().as_str(), "0" | "0.0" | "false")
    }

    /// Determine if a decoded JSON value is a string
    pub fn is_string(value: &Value) -> bool {
        value.is_string()
    }

    /// Escape a string so it can be used as a literal inside a regular expression
    ///
    /// ```rust
    /// use strkit::Str;
    /// assert_eq!(Str::regex_escape("a.b*c"), r"a\.b\*c");
    /// ```
    pub fn regex_escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            if REGEX_META.contains(&c) {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    /// Escape every string of a sequence, preserving order
    pub fn regex_escape_each<I, S>(values: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .map(|value| Self::regex_escape(value.as_ref()))
            .collect()
    }

    /// Determine if a given string starts with a given substring
    pub fn starts_with(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            return haystack.starts_with(needle);
        }
        haystack.to_lowercase().starts_with(&needle.to_lowercase())
    }

    /// Determine if a given string ends with a given substring
    pub fn ends_with(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            return haystack.ends_with(needle);
        }
        haystack.to_lowercase().ends_with(&needle.to_lowercase())
    }

    /// Determine if a given string contains a given substring
    ///
    /// A blank haystack or a blank needle never matches.
    pub fn contains(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
        if haystack.is_blank() || needle.is_blank() {
            return false;
        }

        if case_sensitive {
            return Finder::new(needle).find(haystack.as_bytes()).is_some();
        }

        let haystack = haystack.to_lowercase();
        let needle = needle.to_lowercase();
        Finder::new(&needle).find(haystack.as_bytes()).is_some()
    }

    /// Determine if a given string contains every needle
    pub fn contains_all<'a>(
        haystack: &str,
        needles: impl Into<Patterns<'a>>,
        case_sensitive: bool,
    ) -> bool {
        let needles: Patterns<'a> = needles.into();
        match needles {
            Patterns::Single(needle) => Self::contains(haystack, needle, case_sensitive),
            Patterns::List(needles) => needles
                .iter()
                .all(|needle| Self::contains(haystack, needle, case_sensitive)),
        }
    }

    /// Determine if a given string contains at least one needle
    pub fn contains_any<'a>(
        haystack: &str,
        needles: impl Into<Patterns<'a>>,
        case_sensitive: bool,
    ) -> bool {
        let needles: Patterns<'a> = needles.into();
        match needles {
            Patterns::Single(needle) => Self::contains(haystack, needle, case_sensitive),
            Patterns::List(needles) => needles
                .iter()
                .any(|needle| Self::contains(haystack, needle, case_sensitive)),
        }
    }

    /// Remove all whitespace from both ends of a string
    pub fn trim(value: &str) -> String {
        value.trim().to_string()
    }

    /// Remove the given tokens (and whitespace) from both ends of a string
    ///
    /// No tokens, or the single token `" "`, is a plain whitespace trim.
    pub fn trim_with<'a>(value: &str, tokens: impl Into<Patterns<'a>>) -> String {
        let tokens: Patterns<'a> = tokens.into();
        if tokens.is_whitespace() {
            return Self::trim(value);
        }

        let trimmed = Self::trim_end(value, tokens);
        Self::trim_start(&trimmed, tokens)
    }

    /// Remove the given tokens from the beginning of a string
    ///
    /// Tokens are literal strings and whitespace between them is removed too.
    /// Without tokens only whitespace is trimmed.
    ///
    /// ```rust
    /// use strkit::Str;
    /// assert_eq!(Str::trim_start("0x0FF", &["0x0", "0"]), "FF");
    /// ```
    pub fn trim_start<'a>(value: &str, tokens: impl Into<Patterns<'a>>) -> String {
        match Self::trim_alternation(tokens.into()) {
            Some(alternation) => {
                Self::replace_match(value, &format!("^(?:{alternation})+"), "", 1)
            }
            None => value.trim_start().to_string(),
        }
    }

    /// Remove the given tokens from the end of a string
    pub fn trim_end<'a>(value: &str, tokens: impl Into<Patterns<'a>>) -> String {
        match Self::trim_alternation(tokens.into()) {
            Some(alternation) => {
                Self::replace_match(value, &format!("(?:{alternation})+$"), "", 1)
            }
            None => value.trim_end().to_string(),
        }
    }

    fn trim_alternation(tokens: Patterns<'_>) -> Option<String> {
        let escaped: Vec<String> = tokens
            .as_slice()
            .iter()
            .filter(|token| !token.is_empty())
            .map(|token| Self::regex_escape(token))
            .collect();

        if escaped.is_empty() {
            return None;
        }
        Some(format!(r"{}|\s", escaped.join("|")))
    }

    // A `limit` of 0 replaces every match.
    fn replace_match(value: &str, pattern: &str, replacement: &str, limit: usize) -> String {
        match Regex::new(pattern) {
            Ok(re) => re.replacen(value, limit, replacement).into_owned(),
            Err(error) => {
                warn!(%error, pattern, "invalid pattern, leaving value untouched");
                value.to_string()
            }
        }
    }

    /// Returns the portion of the string specified by the index and length parameters
    ///
    /// A negative index counts from the end. An index further out than the
    /// string is long returns the input unchanged. A length of `None` or
    /// `Some(0)` takes everything up to the end.
    pub fn sub_str(value: Option<&str>, index: isize, length: Option<usize>) -> String {
        let Some(value) = value else {
            return String::new();
        };

        let chars: Vec<char> = value.chars().collect();
        let str_len = chars.len();

        if index.unsigned_abs() > str_len {
            return value.to_string();
        }

        let start = if index < 0 {
            str_len - index.unsigned_abs()
        } else {
            index as usize
        };

        let end = match length {
            Some(len) if len > 0 => start.saturating_add(len).min(str_len),
            _ => str_len,
        };

        chars[start..end].iter().collect()
    }

    /// Returns the number of non-overlapping occurrences of a substring
    pub fn sub_count(haystack: &str, needle: &str, case_sensitive: bool) -> usize {
        if needle.is_empty() {
            return 0;
        }

        if case_sensitive {
            return haystack.matches(needle).count();
        }
        haystack
            .to_lowercase()
            .matches(needle.to_lowercase().as_str())
            .count()
    }

    /// Repeat the given string
    pub fn repeat(string: &str, times: usize) -> String {
        string.repeat(times)
    }

    /// Pad the left side of a string with whole copies of another
    ///
    /// Only as many full copies of `pad` as fit in the missing length are
    /// added, so the result can fall short of `length` when the pad does not
    /// divide it evenly.
    pub fn pad_left(value: &str, pad: &str, length: usize) -> String {
        match Self::padding(value, pad, length) {
            Some(padding) => padding + value,
            None => value.to_string(),
        }
    }

    /// Pad the right side of a string with whole copies of another
    pub fn pad_right(value: &str, pad: &str, length: usize) -> String {
        match Self::padding(value, pad, length) {
            Some(padding) => format!("{}{}", value, padding),
            None => value.to_string(),
        }
    }

    /// Pad the right side when `pad_right` is set, the left side otherwise
    pub fn pad(value: &str, pad: &str, length: usize, pad_right: bool) -> String {
        if pad_right {
            Self::pad_right(value, pad, length)
        } else {
            Self::pad_left(value, pad, length)
        }
    }

    fn padding(value: &str, pad: &str, length: usize) -> Option<String> {
        let current_len = value.chars().count();
        let pad_len = pad.chars().count();
        if current_len >= length || pad_len == 0 {
            return None;
        }
        Some(pad.repeat((length - current_len) / pad_len))
    }

    /// Strip anything that looks like an HTML tag
    pub fn strip_tags(value: &str) -> String {
        Self::replace_match(value, r"</?[^>]+>", "", 0)
    }

    /// Convert `&`, `<` and `>` to their entity form
    pub fn escape_html(value: &str) -> String {
        value
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Strip tags, then turn `&amp;`, `&lt;` and `&gt;` back into characters
    ///
    /// Any other entity is left as it is.
    pub fn unescape_html(value: &str) -> String {
        Self::strip_tags(value)
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
    }

    /// Escape double quotes so the value can sit inside a double-quoted attribute
    pub fn escape_attribute(value: &str) -> String {
        value.replace('"', "\\\"")
    }

    /// Join lines with the given glue
    ///
    /// ```rust
    /// use strkit::Str;
    /// assert_eq!(Str::multi_lines("\n", ["hello", "world"]), "hello\nworld");
    /// ```
    pub fn multi_lines<I, S>(glue: &str, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = lines.into_iter();

        let first = match iter.next() {
            Some(line) => line,
            None => return String::new(),
        };

        let mut out = String::from(first.as_ref());
        for line in iter {
            out.push_str(glue);
            out.push_str(line.as_ref());
        }
        out
    }

    /// Decode JSON text, or return `default` (`false` when `None`) if it is blank or malformed
    ///
    /// An already decoded value is handed back unchanged.
    pub fn parse_json<'a>(input: impl Into<JsonInput<'a>>, default: Option<Value>) -> Value {
        let default = default.unwrap_or(Value::Bool(false));
        JsonParser::default()
            .parse(input, default.clone())
            .unwrap_or(default)
    }

    /// Reverse the given string
    pub fn reverse(value: &str) -> String {
        value.chars().rev().collect()
    }

    /// Collect the given capture group from every match of the pattern
    ///
    /// Matches in which the group did not take part are skipped.
    pub fn match_all(subject: &str, pattern: &Regex, group: usize) -> Vec<String> {
        if subject.is_empty() {
            return Vec::new();
        }

        pattern
            .captures_iter(subject)
            .filter_map(|caps| caps.get(group))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Split a string into chunks of at most `chunk_size` characters
    pub fn chop(value: &str, chunk_size: usize) -> Vec<String> {
        if value.is_empty() {
            return Vec::new();
        }

        if chunk_size == 0 {
            trace!("chop called with a zero chunk size, returning the input whole");
            return vec![value.to_string()];
        }

        let chars: Vec<char> = value.chars().collect();
        chars
            .chunks(chunk_size)
            .map(|chunk| chunk.iter().collect())
            .collect()
    }
}

/// One literal pattern or an ordered list of them.
///
/// Used wherever a single needle or trim token and a list of them are both
/// accepted. Earlier entries win when two of them could match at the same spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patterns<'a> {
    Single(&'a str),
    List(&'a [&'a str]),
}

impl<'a> Patterns<'a> {
    /// No patterns at all; trimming with it only removes whitespace.
    pub const NONE: Patterns<'static> = Patterns::List(&[]);

    pub fn as_slice(&self) -> &[&'a str] {
        match self {
            Patterns::Single(pattern) => std::slice::from_ref(pattern),
            Patterns::List(patterns) => patterns,
        }
    }

    fn is_whitespace(&self) -> bool {
        let mut non_empty = self.as_slice().iter().filter(|p| !p.is_empty());
        match (non_empty.next(), non_empty.next()) {
            (None, _) => true,
            (Some(&" "), None) => true,
            _ => false,
        }
    }
}

impl<'a> From<&'a str> for Patterns<'a> {
    fn from(pattern: &'a str) -> Self {
        Patterns::Single(pattern)
    }
}

impl<'a> From<&'a String> for Patterns<'a> {
    fn from(pattern: &'a String) -> Self {
        Patterns::Single(pattern.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for Patterns<'a> {
    fn from(patterns: &'a [&'a str]) -> Self {
        Patterns::List(patterns)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Patterns<'a> {
    fn from(patterns: &'a [&'a str; N]) -> Self {
        Patterns::List(patterns.as_slice())
    }
}

impl<'a> From<&'a Vec<&'a str>> for Patterns<'a> {
    fn from(patterns: &'a Vec<&'a str>) -> Self {
        Patterns::List(patterns.as_slice())
    }
}
