use crate::Str;

// Base letter followed by every accented form that folds onto it.
const VIET_FOLDS: &[(char, &str)] = &[
    (
        'a',
        "\u{00E0}\u{00E1}\u{00E2}\u{00E3}\u{0103}\u{1EA1}\u{1EA3}\u{1EA5}\u{1EA7}\u{1EA9}\u{1EAB}\u{1EAD}\u{1EAF}\u{1EB1}\u{1EB3}\u{1EB5}\u{1EB7}",
    ),
    (
        'o',
        "\u{00F2}\u{00F3}\u{00F4}\u{00F5}\u{01A1}\u{1ECD}\u{1ECF}\u{1ED1}\u{1ED3}\u{1ED5}\u{1ED7}\u{1ED9}\u{1EDB}\u{1EDD}\u{1EDF}\u{1EE1}\u{1EE3}",
    ),
    (
        'e',
        "\u{00E8}\u{00E9}\u{00EA}\u{1EB9}\u{1EBB}\u{1EBD}\u{1EBF}\u{1EC1}\u{1EC3}\u{1EC5}\u{1EC7}",
    ),
    (
        'u',
        "\u{00F9}\u{00FA}\u{0169}\u{01B0}\u{1EE5}\u{1EE7}\u{1EE9}\u{1EEB}\u{1EED}\u{1EEF}\u{1EF1}",
    ),
    ('i', "\u{00EC}\u{00ED}\u{0129}\u{1EC9}\u{1ECB}"),
    ('y', "\u{00FD}\u{1EF3}\u{1EF5}\u{1EF7}\u{1EF9}"),
    ('d', "\u{0111}\u{00F0}\u{0110}"),
];

fn fold(c: char) -> char {
    if c.is_ascii() {
        return c;
    }

    VIET_FOLDS
        .iter()
        .find(|(_, accented)| accented.contains(c))
        .map_or(c, |&(base, _)| base)
}

impl Str {
    /// Remove Vietnamese accents, replacing them with the Latin base letter.
    ///
    /// Only lowercase accented letters are folded, plus `Đ` which folds to `d`.
    ///
    /// ```rust
    /// use strkit::Str;
    /// assert_eq!(Str::strip_viet("Tiếng Việt"), "Tieng Viet");
    /// ```
    pub fn strip_viet(value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }
        value.chars().map(fold).collect()
    }
}
