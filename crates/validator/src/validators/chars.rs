//! Character predicates
//!
//! Pure, stateless `char -> bool` functions used by
//! [`Validator::has_only_chars`](crate::Validator::has_only_chars).
//! [`or_allowed`] extends any predicate with an explicit set of extra
//! characters, e.g. hex digits plus `-` for identifier-like tokens.

/// `'0'..='9'`.
#[inline]
pub const fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// `'a'..='z'` or `'A'..='Z'`.
#[inline]
pub const fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `'0'..='9'`, `'a'..='f'` or `'A'..='F'`.
#[inline]
pub const fn is_hex_char(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// True when `c` is one of `allowed`.
#[inline]
pub fn is_allowed_char(c: char, allowed: &[char]) -> bool {
    allowed.contains(&c)
}

/// Accepts whatever `predicate` accepts, plus every character in `extra`.
///
/// ```rust
/// use validate_that::validators::chars::{is_hex_char, or_allowed};
///
/// let guid_char = or_allowed(is_hex_char, &['-']);
/// assert!(guid_char('F'));
/// assert!(guid_char('-'));
/// assert!(!guid_char('g'));
/// ```
pub fn or_allowed<'a, P>(predicate: P, extra: &'a [char]) -> impl Fn(char) -> bool + 'a
where
    P: Fn(char) -> bool + 'a,
{
    move |c| predicate(c) || is_allowed_char(c, extra)
}

/// Hex digit or dash, the alphabet of GUID-like tokens.
#[inline]
pub fn is_guid_char(c: char) -> bool {
    is_hex_char(c) || c == '-'
}

/// Wraps each item in single quotes and joins them with `", "`.
///
/// ```rust
/// use validate_that::validators::chars::join_quotes;
///
/// assert_eq!(join_quotes(["a", "b", "c"]), "'a', 'b', 'c'");
/// ```
pub fn join_quotes<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("'{}'", item.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
