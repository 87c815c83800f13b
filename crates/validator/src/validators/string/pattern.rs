//! Character-class checks
//!
//! Every check here is a [`has_only_chars`](Validator::has_only_chars) call
//! with a predicate from [`chars`](crate::validators::chars) and a
//! human-readable description of the allowed class. The empty string passes
//! all of them.

use crate::foundation::{Nullable, ValidationError, Validator};
use crate::validators::chars::{is_ascii_letter, is_guid_char, is_hex_char, is_numeric_char};

const NUMERIC: &str = "0-9 numeric characters (e.g. '12345')";
const HEX: &str = "hexadecimal characters (e.g. '043c26fc' or '043C26FC')";
const GUID: &str = "hexadecimal or dash characters (e.g. '7b58-4923-a4e0' or '7B58-4923-A4E0')";
const ASCII_LETTERS: &str = "ASCII letters (e.g. 'abcXYZ')";

impl<T> Validator<T>
where
    T: Nullable,
    T::Inner: AsRef<str>,
{
    /// Fails if any character is rejected by `predicate`.
    ///
    /// `description` names the allowed class in the failure message, which
    /// reads `... is expected to only have {description}`. The offending value
    /// is carried by the report, not the message. Absent values pass.
    ///
    /// ```rust
    /// use validate_that::validate;
    ///
    /// let err = validate("ab_c", "slug")
    ///     .has_only_chars(|c| c.is_ascii_lowercase(), "lowercase ASCII letters")
    ///     .unwrap_err();
    /// assert_eq!(
    ///     err.message(),
    ///     "The value of 'slug' is expected to only have lowercase ASCII letters"
    /// );
    /// assert_eq!(err.value(), "ab_c");
    /// ```
    pub fn has_only_chars<P>(self, predicate: P, description: &str) -> Result<Self, ValidationError>
    where
        P: Fn(char) -> bool,
    {
        self.check_str(
            |value| value.chars().all(predicate),
            |v, _| format!("{} only have {description}", v.expected_to()),
        )
    }

    /// Fails unless every character is `'0'..='9'`.
    pub fn has_only_numeric_chars(self) -> Result<Self, ValidationError> {
        self.has_only_chars(is_numeric_char, NUMERIC)
    }

    /// Fails unless every character is a hexadecimal digit, in either case.
    pub fn has_only_hex_chars(self) -> Result<Self, ValidationError> {
        self.has_only_chars(is_hex_char, HEX)
    }

    /// Fails unless every character is a hexadecimal digit or `-`.
    ///
    /// Checks the alphabet only, not the grouping of a GUID.
    pub fn has_only_guid_chars(self) -> Result<Self, ValidationError> {
        self.has_only_chars(is_guid_char, GUID)
    }

    /// Fails unless every character is `a-z` or `A-Z`.
    pub fn has_only_ascii_letters(self) -> Result<Self, ValidationError> {
        self.has_only_chars(is_ascii_letter, ASCII_LETTERS)
    }
}

#[cfg(test)]
mod tests {
    use crate::foundation::validate;
    use crate::validators::chars::{is_hex_char, or_allowed};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("12345", true)]
    #[case("12a45", false)]
    #[case("-1", false)]
    #[case("١٢", false)]
    fn test_numeric(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate(input, "pin").has_only_numeric_chars().is_ok(), ok);
    }

    #[test]
    fn test_hex() {
        assert!(validate("043C26fc", "token").has_only_hex_chars().is_ok());

        let err = validate("043C26fg", "token").has_only_hex_chars().unwrap_err();
        assert_eq!(
            err.message(),
            "The value of 'token' is expected to only have hexadecimal characters (e.g. '043c26fc' or '043C26FC')"
        );
        assert_eq!(err.value(), &serde_json::json!("043C26fg"));
    }

    #[rstest]
    #[case("7b58-4923-a4e0", true)]
    #[case("7B58-4923-A4E0", true)]
    #[case("----", true)]
    #[case("7b58_4923", false)]
    #[case("{7b58}", false)]
    fn test_guid(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate(input, "id").has_only_guid_chars().is_ok(), ok);
    }

    #[test]
    fn test_ascii_letters() {
        assert!(validate("abcXYZ", "code").has_only_ascii_letters().is_ok());

        let err = validate("abç", "code").has_only_ascii_letters().unwrap_err();
        assert_eq!(
            err.message(),
            "The value of 'code' is expected to only have ASCII letters (e.g. 'abcXYZ')"
        );
        assert_eq!(err.value(), &serde_json::json!("abç"));
    }

    #[test]
    fn test_custom_predicate_with_extras() {
        let hex_or_colon = or_allowed(is_hex_char, &[':']);
        assert!(
            validate("0a:1b:2c", "mac")
                .has_only_chars(&hex_or_colon, "hexadecimal or colon characters")
                .is_ok()
        );
        assert!(
            validate("0a-1b", "mac")
                .has_only_chars(&hex_or_colon, "hexadecimal or colon characters")
                .is_err()
        );
    }

    #[test]
    fn test_absent_passes() {
        let absent: Option<String> = None;
        assert!(validate(&absent, "pin").has_only_numeric_chars().is_ok());
        assert!(validate(&absent, "pin").has_only_ascii_letters().is_ok());
    }
}
