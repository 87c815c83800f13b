//! Allowed-value checks
//!
//! A present string must equal one of a fixed set of options. Matching is
//! case-insensitive unless [`CaseSensitivity::MatchCase`] is asked for.

use std::fmt;

use crate::foundation::{Nullable, ValidationError, Validator};
use crate::validators::chars::join_quotes;

/// How [`is_one_of_with`](Validator::is_one_of_with) compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseSensitivity {
    /// Exact comparison.
    MatchCase,
    /// Case-insensitive comparison, one character at a time.
    #[default]
    IgnoreCase,
}

impl CaseSensitivity {
    /// Compares `a` and `b` under this mode.
    #[must_use]
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::MatchCase => a == b,
            Self::IgnoreCase => a.chars().map(simple_uppercase).eq(b.chars().map(simple_uppercase)),
        }
    }

    /// Phrase used in failure messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MatchCase => "matching the case",
            Self::IgnoreCase => "ignoring the case",
        }
    }
}

/// One-to-one uppercase mapping; characters whose uppercase form expands
/// (`'ß'` to `"SS"`, `'ﬁ'` to `"FI"`) map to themselves.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl<T> Validator<T>
where
    T: Nullable,
    T::Inner: AsRef<str>,
{
    /// Fails unless the string equals one of `options`, ignoring case.
    ///
    /// Absent values pass.
    ///
    /// ```rust
    /// use validate_that::validate;
    ///
    /// validate("active", "account.status").is_one_of(["Active", "Closed"])?;
    /// # Ok::<(), validate_that::ValidationError>(())
    /// ```
    pub fn is_one_of<I, S>(self, options: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.is_one_of_with(options, CaseSensitivity::IgnoreCase)
    }

    /// Fails unless the string equals one of `options` exactly.
    pub fn is_one_of_exact<I, S>(self, options: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.is_one_of_with(options, CaseSensitivity::MatchCase)
    }

    /// Fails unless the string equals one of `options` under `case`.
    ///
    /// An empty set of options rejects every present value.
    pub fn is_one_of_with<I, S>(
        self,
        options: I,
        case: CaseSensitivity,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options: Vec<S> = options.into_iter().collect();
        self.check_str(
            |value| options.iter().any(|option| case.matches(value, option.as_ref())),
            |v, value| {
                format!(
                    "{} be one of the following: [{}] ({case}), but specified value was '{value}'",
                    v.expected_to(),
                    join_quotes(&options),
                )
            },
        )
    }
}
