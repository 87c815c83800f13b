//! Built-in reporting policies.

use std::sync::Arc;

use parking_lot::Mutex;

use super::ReportingPolicy;
use crate::foundation::{ErrorReport, ValidationError};

/// Aborts the chain with a [`ValidationError`] carrying the report.
///
/// The default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Raise;

impl ReportingPolicy for Raise {
    fn report(&self, report: ErrorReport) -> Result<(), ValidationError> {
        tracing::trace!(subject = %report.name(), "validation failed");
        Err(ValidationError::from(report))
    }
}

/// Logs the report at `WARN` and lets the chain continue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogAndContinue;

impl ReportingPolicy for LogAndContinue {
    fn report(&self, report: ErrorReport) -> Result<(), ValidationError> {
        tracing::warn!(
            subject = %report.name(),
            value = %report.value(),
            "{}",
            report.message()
        );
        Ok(())
    }
}

/// Panics with the report message.
///
/// For hosts that treat any validation failure as a bug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panic;

impl ReportingPolicy for Panic {
    fn report(&self, report: ErrorReport) -> Result<(), ValidationError> {
        panic!("{report}");
    }
}

/// Records every report and lets the chain continue.
///
/// Clones share the same storage, so keep one handle and give a clone to the
/// validator or the global slot.
///
/// # Examples
///
/// ```rust
/// use validate_that::{reporting::Collect, validate};
///
/// let collector = Collect::new();
/// let value = String::from("hello!");
/// validate(&value, "greeting")
///     .with_policy(collector.clone())
///     .is_no_longer_than(5)
///     .unwrap()
///     .is_well_formed()
///     .unwrap();
///
/// assert_eq!(collector.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Collect {
    reports: Arc<Mutex<Vec<ErrorReport>>>,
}

impl Collect {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the reports recorded so far.
    #[must_use]
    pub fn reports(&self) -> Vec<ErrorReport> {
        self.reports.lock().clone()
    }

    /// Drains the recorded reports.
    pub fn take(&self) -> Vec<ErrorReport> {
        std::mem::take(&mut *self.reports.lock())
    }

    /// Number of recorded reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    /// Returns true when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl ReportingPolicy for Collect {
    fn report(&self, report: ErrorReport) -> Result<(), ValidationError> {
        self.reports.lock().push(report);
        Ok(())
    }
}
