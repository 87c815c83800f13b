//! The validator: a named subject value plus the failure primitive.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::foundation::{ErrorReport, Nullable, SubjectError, ValidationError, subject};
use crate::reporting::{self, ReportingPolicy, SharedPolicy};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Binds a subject name to the value under validation.
///
/// Checks consume the validator and hand it back, so a chain reads
/// `v.check_a()?.check_b()?`. A validator is immutable; the only effect a
/// check can have is reporting a failure through [`fail`](Self::fail).
///
/// # Examples
///
/// ```rust
/// use validate_that::Validator;
///
/// let email = Some(String::from("alice@example.com"));
/// Validator::new("customer.email", &email)
///     .is_not_null()?
///     .is_well_formed()?
///     .is_no_longer_than(254)?;
/// # Ok::<(), validate_that::ValidationError>(())
/// ```
#[derive(Clone)]
pub struct Validator<T> {
    name: Cow<'static, str>,
    value: T,
    policy: Option<SharedPolicy>,
}

impl<T> Validator<T> {
    /// Creates a validator for `value` named `name`.
    ///
    /// Nothing is checked on construction.
    pub fn new(name: impl Into<Cow<'static, str>>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
            policy: None,
        }
    }

    /// Routes this chain's failures to `policy` instead of the global slot.
    pub fn with_policy(self, policy: impl ReportingPolicy + 'static) -> Self {
        self.with_shared_policy(Arc::new(policy))
    }

    /// Routes this chain's failures to an already shared policy.
    pub fn with_shared_policy(mut self, policy: SharedPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Name of the subject.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the subject.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Ends the chain and returns the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Sentence stem shared by every failure message:
    /// `The value of '{name}' is expected to`.
    #[must_use]
    pub fn expected_to(&self) -> String {
        format!("The value of '{}' is expected to", self.name)
    }

    /// Rebinds the same name and policy to whatever `f` extracts from the
    /// value, or gives the validator back untouched.
    pub(crate) fn try_narrow<U, F>(self, f: F) -> Result<Validator<U>, Self>
    where
        F: FnOnce(T) -> Result<U, T>,
    {
        let Self {
            name,
            value,
            policy,
        } = self;
        match f(value) {
            Ok(value) => Ok(Validator {
                name,
                value,
                policy,
            }),
            Err(value) => Err(Self {
                name,
                value,
                policy,
            }),
        }
    }

    fn policy(&self) -> Option<&SharedPolicy> {
        self.policy.as_ref()
    }
}

impl<T: Serialize> Validator<T> {
    /// Reports a failure of this subject.
    ///
    /// Builds an [`ErrorReport`] from `message`, the name and the value and
    /// hands it to the reporting policy. Whether the chain stops is the
    /// policy's decision: the default turns the report into `Err`.
    pub fn fail(&self, message: impl Into<String>) -> Result<(), ValidationError> {
        let report = ErrorReport::capture(message, self.name.as_ref(), &self.value);
        reporting::dispatch(self.policy(), report)
    }

    /// Custom check over the whole value, absent or not.
    ///
    /// Prefer [`check_present`](Self::check_present) for checks that should
    /// skip absent values.
    pub fn ensure<R, M>(self, rule: R, message: M) -> Result<Self, ValidationError>
    where
        R: FnOnce(&T) -> bool,
        M: FnOnce(&Self) -> String,
    {
        if !rule(&self.value) {
            let message = message(&self);
            self.fail(message)?;
        }
        Ok(self)
    }
}

impl<T: Nullable> Validator<T> {
    /// Null-tolerant custom check.
    ///
    /// Runs `rule` against the present value and reports `message` when it
    /// returns false. Absent values pass untouched.
    ///
    /// ```rust
    /// use validate_that::Validator;
    ///
    /// let age = Some(17_u8);
    /// let err = Validator::new("person.age", &age)
    ///     .check_present(|age| *age >= 18, |v, age| format!("{} be an adult, but was {age}", v.expected_to()))
    ///     .unwrap_err();
    /// assert_eq!(err.message(), "The value of 'person.age' is expected to be an adult, but was 17");
    /// ```
    pub fn check_present<R, M>(self, rule: R, message: M) -> Result<Self, ValidationError>
    where
        R: FnOnce(&T::Inner) -> bool,
        M: FnOnce(&Self, &T::Inner) -> String,
    {
        if let Some(present) = self.value.present()
            && !rule(present)
        {
            self.fail(message(&self, present))?;
        }
        Ok(self)
    }
}

impl<T> Validator<T>
where
    T: Nullable,
    T::Inner: AsRef<str>,
{
    /// Null-tolerant check over string subjects.
    ///
    /// The building block of every built-in string check and of
    /// [`string_check!`](crate::string_check).
    pub fn check_str<R, M>(self, rule: R, message: M) -> Result<Self, ValidationError>
    where
        R: FnOnce(&str) -> bool,
        M: FnOnce(&Self, &str) -> String,
    {
        self.check_present(
            |present| rule(present.as_ref()),
            |validator, present| message(validator, present.as_ref()),
        )
    }

    /// The present string value, if any.
    #[must_use]
    pub fn present_str(&self) -> Option<&str> {
        self.value.present().map(|present| present.as_ref())
    }
}

impl<T: fmt::Debug> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("custom_policy", &self.policy.is_some())
            .finish()
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Static factory for validators named after their call-site expression.
///
/// Takes an already evaluated value. [`that!`](crate::that) and
/// [`required!`](crate::required) resolve names the same way but evaluate
/// the subject only after its name is accepted.
#[derive(Debug, Clone, Copy)]
pub struct Validate;

impl Validate {
    /// Creates a validator named after `expression`.
    ///
    /// Fails with [`SubjectError`] when no name can be derived; the value is
    /// not inspected in that case.
    pub fn that<T>(expression: &str, value: T) -> Result<Validator<T>, SubjectError> {
        let name = subject::resolve(expression)?;
        Ok(Validator::new(name, value))
    }

    /// Creates a validator named after `expression` and asserts the value is
    /// present.
    pub fn required<T: Nullable>(expression: &str, value: T) -> crate::Result<Validator<T>> {
        Ok(Self::that(expression, value)?.is_not_null()?)
    }
}

/// Creates a validator with an explicit subject name.
///
/// ```rust
/// use validate_that::validate;
///
/// let code = "7B58-4923-A4E0";
/// validate(code, "order.code").has_only_guid_chars()?;
/// # Ok::<(), validate_that::ValidationError>(())
/// ```
pub fn validate<T>(value: T, name: impl Into<Cow<'static, str>>) -> Validator<T> {
    Validator::new(name, value)
}

// ============================================================================
// TESTS
// ============================================================================
