//! Reporting policy: what happens when a check fails.
//!
//! Every failing check builds an [`ErrorReport`] and hands it to a
//! [`ReportingPolicy`]. The policy decides whether the chain stops:
//!
//! - `Err(ValidationError)` aborts the chain (the default, [`Raise`]).
//! - `Ok(())` lets the chain continue past the failing check. This is how
//!   hosts downgrade validation to logging ([`LogAndContinue`]) or collect
//!   every report ([`Collect`]).
//!
//! # Global slot
//!
//! One process-wide policy lives in an `ArcSwap`: lock-free reads on every
//! failure, atomic replacement. Configure it once at startup with
//! [`configure`] or [`set_policy`], before validation runs concurrently.
//! Replacement is global and affects every chain that fails afterwards; it is
//! not meant as a runtime feature flag.
//!
//! For tests and libraries prefer injecting a policy into a single chain with
//! [`Validator::with_policy`](crate::Validator::with_policy).
//!
//! # Examples
//!
//! ```rust
//! use validate_that::reporting::{self, ReportingConfig};
//!
//! fn main() -> validate_that::Result<()> {
//!     reporting::configure(&ReportingConfig::from_env()?);
//!     Ok(())
//! }
//! ```

mod config;
mod policies;

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::foundation::{ErrorReport, ValidationError};

pub use config::{ConfigError, ReportingConfig, ReportingMode};
pub use policies::{Collect, LogAndContinue, Panic, Raise};

// ============================================================================
// POLICY TRAIT
// ============================================================================

/// Strategy consuming the report of a failed check.
///
/// Implemented for every `Fn(ErrorReport) -> Result<(), ValidationError>`
/// closure, so a policy can be a one-liner:
///
/// ```rust
/// use validate_that::{ErrorReport, ValidationError, reporting::ReportingPolicy};
///
/// let policy = |report: ErrorReport| -> Result<(), ValidationError> {
///     Err(ValidationError::from(ErrorReport::new(
///         format!("[input] {}", report.message()),
///         report.name(),
///         report.value().clone(),
///     )))
/// };
/// let error = policy.report(ErrorReport::new("bad", "id", 1)).unwrap_err();
/// assert_eq!(error.message(), "[input] bad");
/// ```
pub trait ReportingPolicy: Send + Sync {
    /// Handles one report.
    ///
    /// Returning `Ok(())` continues the chain; returning `Err` aborts it.
    fn report(&self, report: ErrorReport) -> Result<(), ValidationError>;
}

impl<F> ReportingPolicy for F
where
    F: Fn(ErrorReport) -> Result<(), ValidationError> + Send + Sync,
{
    fn report(&self, report: ErrorReport) -> Result<(), ValidationError> {
        self(report)
    }
}

/// Shared handle to a policy.
pub type SharedPolicy = Arc<dyn ReportingPolicy>;

// ============================================================================
// GLOBAL SLOT
// ============================================================================

static POLICY: LazyLock<ArcSwap<SharedPolicy>> =
    LazyLock::new(|| ArcSwap::from_pointee(Arc::new(Raise) as SharedPolicy));

/// Returns the policy currently installed in the global slot.
#[inline]
pub fn current_policy() -> SharedPolicy {
    let guard = POLICY.load();
    (**guard).clone()
}

/// Replaces the global policy.
///
/// Intended to run once during startup (or in tests); chains that fail after
/// the call observe the new policy.
pub fn set_policy(policy: impl ReportingPolicy + 'static) {
    set_shared_policy(Arc::new(policy));
}

/// Replaces the global policy with an already shared one.
pub fn set_shared_policy(policy: SharedPolicy) {
    tracing::debug!("replacing global validation reporting policy");
    POLICY.store(Arc::new(policy));
}

/// Restores the default [`Raise`] policy.
pub fn reset_policy() {
    set_shared_policy(Arc::new(Raise));
}

/// Installs the policy described by `config`.
///
/// This is the designated startup entry point.
pub fn configure(config: &ReportingConfig) {
    tracing::debug!(mode = ?config.mode, "configuring validation reporting");
    set_shared_policy(config.policy());
}

/// Hands `report` to `policy` when given, otherwise to the global slot.
pub(crate) fn dispatch(
    policy: Option<&SharedPolicy>,
    report: ErrorReport,
) -> Result<(), ValidationError> {
    match policy {
        Some(policy) => policy.report(report),
        None => POLICY.load().report(report),
    }
}
