//! Error types for validation failures
//!
//! Two kinds of failure exist and they never mix:
//!
//! - [`ValidationError`] — a check rejected the subject's value. It is
//!   produced by the active [`ReportingPolicy`](crate::reporting::ReportingPolicy)
//!   from an [`ErrorReport`].
//! - [`SubjectError`] — the validation call itself is malformed (the subject
//!   name could not be derived). It is returned straight from construction
//!   and never reaches the reporting policy.
//!
//! [`Error`] wraps both (plus configuration errors) so host code can `?`
//! everything into one type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reporting::ConfigError;

// ============================================================================
// ERROR REPORT
// ============================================================================

/// Immutable description of one violated check.
///
/// Built exactly once per failing check by [`Validator::fail`](crate::Validator::fail)
/// and handed to the reporting policy, which consumes it.
///
/// The subject value is captured as JSON: `null` means the subject was absent,
/// strings stay strings, numbers stay numbers.
///
/// # Examples
///
/// ```rust
/// use validate_that::ErrorReport;
///
/// let report = ErrorReport::new("too long", "user.name", "Bartholomew");
/// assert_eq!(report.name(), "user.name");
/// assert_eq!(report.value(), "Bartholomew");
/// assert_eq!(report.to_string(), "too long");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    message: String,
    name: String,
    value: serde_json::Value,
}

impl ErrorReport {
    /// Creates a report from its three parts.
    pub fn new(
        message: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            message: message.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a report, serializing the subject value.
    ///
    /// A value that cannot be represented as JSON (e.g. a map with non-string
    /// keys) is recorded as `null` rather than failing the report itself.
    pub fn capture<T>(message: impl Into<String>, name: impl Into<String>, value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        let name = name.into();
        let value = serde_json::to_value(value).unwrap_or_else(|error| {
            tracing::debug!(subject = %name, %error, "subject value is not representable as JSON");
            serde_json::Value::Null
        });

        Self {
            message: message.into(),
            name,
            value,
        }
    }

    /// Human-readable sentence describing the violation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the subject under validation, e.g. `order.customer.email`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the subject at the time the check failed.
    #[must_use]
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    /// Splits the report into `(message, name, value)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String, serde_json::Value) {
        (self.message, self.name, self.value)
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Error raised by the default reporting policy when a check fails.
///
/// Carries the full [`ErrorReport`], so the `(message, name, value)` triple
/// stays available to callers that catch it.
///
/// # Examples
///
/// ```rust
/// use validate_that::{ErrorReport, ValidationError};
///
/// let error = ValidationError::from(ErrorReport::new("bad", "id", 7));
/// assert_eq!(error.message(), "bad");
/// assert_eq!(error.name(), "id");
/// assert_eq!(error.value(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{report}")]
pub struct ValidationError {
    report: ErrorReport,
}

impl ValidationError {
    /// Human-readable sentence describing the violation.
    #[must_use]
    pub fn message(&self) -> &str {
        self.report.message()
    }

    /// Name of the subject that failed validation.
    #[must_use]
    pub fn name(&self) -> &str {
        self.report.name()
    }

    /// Value of the subject that failed validation.
    #[must_use]
    pub fn value(&self) -> &serde_json::Value {
        self.report.value()
    }

    /// Borrows the underlying report.
    #[must_use]
    pub fn report(&self) -> &ErrorReport {
        &self.report
    }

    /// Unwraps the underlying report.
    #[must_use]
    pub fn into_report(self) -> ErrorReport {
        self.report
    }
}

impl From<ErrorReport> for ValidationError {
    fn from(report: ErrorReport) -> Self {
        Self { report }
    }
}

// ============================================================================
// SUBJECT ERROR
// ============================================================================

/// The subject name could not be derived from the expression handed to
/// [`that!`](crate::that).
///
/// This is a programmer error: the validation call is malformed, the value
/// was never inspected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The expression text was empty.
    #[error("Unknown expression used for validation: the expression is empty")]
    Empty,

    /// The expression is not a plain (possibly nested) member access.
    #[error("Unknown expression used for validation: `{expression}` {reason}")]
    Unsupported {
        /// Expression text as written at the call site.
        expression: String,
        /// Why the expression was rejected.
        reason: &'static str,
    },
}

impl SubjectError {
    pub(crate) fn unsupported(expression: &str, reason: &'static str) -> Self {
        Self::Unsupported {
            expression: expression.trim().to_owned(),
            reason,
        }
    }
}

// ============================================================================
// CRATE ERROR
// ============================================================================

/// Any error this crate can produce.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A check rejected the subject's value.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The validation call could not name its subject.
    #[error(transparent)]
    Subject(#[from] SubjectError),

    /// The reporting configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns the validation failure, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            _ => None,
        }
    }
}

/// Result alias defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_parts() {
        let report = ErrorReport::new("Too long", "user.name", "Bartholomew");
        assert_eq!(report.message(), "Too long");
        assert_eq!(report.name(), "user.name");
        assert_eq!(report.value(), &json!("Bartholomew"));
    }

    #[test]
    fn test_capture_none_is_null() {
        let report = ErrorReport::capture("missing", "id", &None::<String>);
        assert!(report.value().is_null());
    }

    #[test]
    fn test_capture_unrepresentable_value_is_null() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert((1, 2), "pair");
        let report = ErrorReport::capture("bad", "pairs", &map);
        assert!(report.value().is_null());
    }

    #[test]
    fn test_report_serde_shape() {
        let report = ErrorReport::new("msg", "a.b", 3);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value, json!({ "message": "msg", "name": "a.b", "value": 3 }));

        let back: ErrorReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_validation_error_display_is_message() {
        let error = ValidationError::from(ErrorReport::new("The value is bad", "x", json!(null)));
        assert_eq!(error.to_string(), "The value is bad");
        assert_eq!(error.name(), "x");
    }

    #[test]
    fn test_subject_error_display() {
        let error = SubjectError::unsupported(" items[0] ", "indexers are not supported");
        assert_eq!(
            error.to_string(),
            "Unknown expression used for validation: `items[0]` indexers are not supported"
        );
    }

    #[test]
    fn test_crate_error_from() {
        let error: Error = ValidationError::from(ErrorReport::new("m", "n", 1)).into();
        assert!(error.as_validation().is_some());

        let error: Error = SubjectError::Empty.into();
        assert!(error.as_validation().is_none());
    }
}
