//! Nullable checks
//!
//! [`is_not_null`](Validator::is_not_null) is the only built-in check that
//! fails on an absent value. [`into_required`](Validator::into_required)
//! additionally unwraps the `Option`, narrowing the chain to the inner value.
//!
//! # Examples
//!
//! ```rust
//! use validate_that::validate;
//!
//! let nickname: Option<&str> = Some("ace");
//! let checked = validate(nickname, "player.nickname")
//!     .into_required()?
//!     .has_only_ascii_letters()?;
//! assert_eq!(*checked.value(), "ace");
//! # Ok::<(), validate_that::ValidationError>(())
//! ```

use serde::Serialize;

use crate::foundation::{ErrorReport, Nullable, ValidationError, Validator};

impl<T: Nullable> Validator<T> {
    /// Fails if the value is absent.
    pub fn is_not_null(self) -> Result<Self, ValidationError> {
        if self.value().is_null() {
            self.fail(not_null_message(&self))?;
        }
        Ok(self)
    }
}

impl<U: Serialize> Validator<Option<U>> {
    /// Fails if the value is absent, otherwise continues with the inner value.
    ///
    /// The chain cannot continue without a value, so an absent value ends it
    /// with `Err` even when the reporting policy lets the failure pass.
    pub fn into_required(self) -> Result<Validator<U>, ValidationError> {
        self.try_narrow(|value| value.ok_or(None))
            .map_err(|validator| report_absent(&validator))
    }
}

impl<'a, U: Serialize> Validator<&'a Option<U>> {
    /// Fails if the value is absent, otherwise continues with a reference to
    /// the inner value.
    ///
    /// The chain cannot continue without a value, so an absent value ends it
    /// with `Err` even when the reporting policy lets the failure pass.
    pub fn into_required(self) -> Result<Validator<&'a U>, ValidationError> {
        self.try_narrow(|value| value.as_ref().ok_or(value))
            .map_err(|validator| report_absent(&validator))
    }
}

fn not_null_message<T>(validator: &Validator<T>) -> String {
    format!("{} be specified (i.e. not be null)", validator.expected_to())
}

/// Reports the absence through the policy and returns the error that ends
/// the chain either way.
fn report_absent<T: Serialize>(validator: &Validator<T>) -> ValidationError {
    let message = not_null_message(validator);
    match validator.fail(message.clone()) {
        Err(error) => error,
        Ok(()) => ValidationError::from(ErrorReport::capture(
            message,
            validator.name(),
            validator.value(),
        )),
    }
}
