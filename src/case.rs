//! Word segmentation and case conversion.

use crate::Str;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

impl Str {
    /// Split a string into the words used by the case conversions.
    ///
    /// The first uppercase letter that sits between a lowercase letter (or
    /// digit) and another lowercase letter starts a new word; later humps stay
    /// attached. Acronym runs stay in one word. Only the first space and the
    /// first underscore act as separators; dashes always do.
    ///
    /// ```rust
    /// use strkit::Str;
    /// assert_eq!(Str::words("helloWorld_again"), vec!["hello", "World", "again"]);
    /// assert_eq!(Str::words("fooBarBaz"), vec!["foo", "BarBaz"]);
    /// assert_eq!(Str::words("myURLValue"), vec!["myURLValue"]);
    /// ```
    pub fn words(value: &str) -> Vec<String> {
        let marked =
            Self::replace_match(value, r"(\p{Ll}|[0-9])(\p{Lu}\p{Ll})", "${1}-${2}", 1);
        let marked = marked.replacen(' ', "-", 1).replacen('_', "-", 1);
        let collapsed = Self::replace_match(&marked, "-+", "-", 0);

        collapsed.split('-').map(String::from).collect()
    }

    /// Convert a value to camel case
    pub fn to_camel_case(value: &str) -> String {
        Self::words(value)
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.to_lowercase()
                } else {
                    capitalize(word)
                }
            })
            .collect()
    }

    /// Convert a value to title case, words separated by a single space
    pub fn to_title_case(value: &str) -> String {
        let joined = Self::words(value)
            .iter()
            .map(|word| capitalize(word))
            .collect::<Vec<_>>()
            .join(" ");
        joined.trim_end().to_string()
    }

    /// Convert a value to snake case
    pub fn to_snake_case(value: &str) -> String {
        Self::join_lowercase(value, "_")
    }

    /// Convert a value to kebab case
    pub fn to_kebab_case(value: &str) -> String {
        Self::join_lowercase(value, "-")
    }

    fn join_lowercase(value: &str, separator: &str) -> String {
        let joined = Self::words(value)
            .iter()
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join(separator);
        Self::trim_end(&joined, separator)
    }
}
