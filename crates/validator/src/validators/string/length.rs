//! String length checks
//!
//! Length is measured in Unicode scalar values (chars) by default.
//! [`LengthMode::Bytes`] counts UTF-8 bytes instead, for limits imposed by
//! storage rather than by people.

use crate::foundation::{Nullable, ValidationError, Validator};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures `input` according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }

    const fn unit(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Chars => "characters",
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

impl<T> Validator<T>
where
    T: Nullable,
    T::Inner: AsRef<str>,
{
    /// Fails if the string has more than `max` characters.
    ///
    /// Absent values pass.
    ///
    /// ```rust
    /// use validate_that::validate;
    ///
    /// let err = validate("hello!", "greeting").is_no_longer_than(5).unwrap_err();
    /// assert_eq!(
    ///     err.message(),
    ///     "The value of 'greeting' is expected to have a maximum length of 5, but specified value had 6 characters: 'hello!'"
    /// );
    /// ```
    pub fn is_no_longer_than(self, max: usize) -> Result<Self, ValidationError> {
        self.is_no_longer_than_in(max, LengthMode::Chars)
    }

    /// Fails if the string is longer than `max`, measured with `mode`.
    pub fn is_no_longer_than_in(self, max: usize, mode: LengthMode) -> Result<Self, ValidationError> {
        self.check_str(
            |value| mode.measure(value) <= max,
            |v, value| {
                format!(
                    "{} have a maximum length of {max}, but specified value had {} {}: '{value}'",
                    v.expected_to(),
                    mode.measure(value),
                    mode.unit(),
                )
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::validate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, true)]
    #[case("hello", 5, true)]
    #[case("hello!", 5, false)]
    #[case("héllo", 5, true)]
    #[case("日本語", 3, true)]
    #[case("日本語", 2, false)]
    fn test_no_longer_than(#[case] input: &str, #[case] max: usize, #[case] ok: bool) {
        assert_eq!(validate(input, "s").is_no_longer_than(max).is_ok(), ok);
    }

    #[test]
    fn test_message_reports_actual_length() {
        let err = validate("hello!", "greeting").is_no_longer_than(5).unwrap_err();
        assert_eq!(
            err.message(),
            "The value of 'greeting' is expected to have a maximum length of 5, but specified value had 6 characters: 'hello!'"
        );
        assert_eq!(err.value(), &serde_json::json!("hello!"));
    }

    #[test]
    fn test_bytes_mode() {
        assert!(validate("日本", "s").is_no_longer_than_in(2, LengthMode::Chars).is_ok());

        let err = validate("日本", "s")
            .is_no_longer_than_in(2, LengthMode::Bytes)
            .unwrap_err();
        assert!(err.message().ends_with("had 6 bytes: '日本'"));
    }

    #[test]
    fn test_measure() {
        assert_eq!(LengthMode::default(), LengthMode::Chars);
        assert_eq!(LengthMode::Chars.measure("café"), 4);
        assert_eq!(LengthMode::Bytes.measure("café"), 5);
    }

    #[test]
    fn test_absent_passes() {
        let absent: Option<&str> = None;
        assert!(validate(absent, "s").is_no_longer_than(0).is_ok());
    }
}
