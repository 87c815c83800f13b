//! String content checks: empty, blank, well-formed.

use crate::foundation::{Nullable, ValidationError, Validator};

impl<T> Validator<T>
where
    T: Nullable,
    T::Inner: AsRef<str>,
{
    /// Fails if the string is empty.
    ///
    /// Absent values pass; prepend [`is_not_null`](Self::is_not_null) or use
    /// [`required!`](crate::required) for required fields.
    pub fn is_not_empty(self) -> Result<Self, ValidationError> {
        self.check_str(
            |value| !value.is_empty(),
            |v, _| {
                format!(
                    "{} be populated (i.e. not contain just an empty string)",
                    v.expected_to()
                )
            },
        )
    }

    /// Fails if the string is empty or contains only whitespace characters.
    ///
    /// Absent values pass.
    pub fn is_not_white_space(self) -> Result<Self, ValidationError> {
        self.check_str(
            |value| !value.trim().is_empty(),
            |v, _| {
                format!(
                    "{} be populated (i.e. not contain only whitespace characters)",
                    v.expected_to()
                )
            },
        )
    }

    /// Fails if the string is blank, or starts or ends with whitespace.
    ///
    /// Runs [`is_not_white_space`](Self::is_not_white_space) first; with a
    /// policy that continues, a blank value is reported by both rules.
    /// Absent values pass.
    pub fn is_well_formed(self) -> Result<Self, ValidationError> {
        self.is_not_white_space()?.check_str(
            |value| value.trim() == value,
            |v, value| {
                format!(
                    "{} not contain whitespace characters at the beginning or at the end of the string, but specified value was '{value}'",
                    v.expected_to()
                )
            },
        )
    }
}
