//! # validate-that
//!
//! Fluent, chainable validation of arguments and fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use validate_that::prelude::*;
//!
//! struct Account { status: Option<String>, owner: String }
//!
//! fn check(account: &Account) -> validate_that::Result<()> {
//!     that!(account.status)?.is_not_null()?.is_one_of(["Active", "Closed"])?;
//!     that!(account.owner)?.is_well_formed()?.is_no_longer_than(64)?;
//!     Ok(())
//! }
//!
//! let account = Account { status: Some("closed".into()), owner: " Ann".into() };
//! let err = check(&account).unwrap_err();
//! assert_eq!(err.as_validation().map(ValidationError::name), Some("account.owner"));
//! ```
//!
//! ## Reporting
//!
//! A failing check builds an [`ErrorReport`] and hands it to the active
//! [`ReportingPolicy`](reporting::ReportingPolicy). The default policy turns
//! it into `Err(ValidationError)`; [`reporting::set_policy`] replaces the
//! policy process-wide and [`Validator::with_policy`] for a single chain.
//!
//! ## Built-in Checks
//!
//! - **Presence**: [`is_not_null`](Validator::is_not_null), `into_required`
//! - **Content**: [`is_not_empty`](Validator::is_not_empty),
//!   [`is_not_white_space`](Validator::is_not_white_space),
//!   [`is_well_formed`](Validator::is_well_formed)
//! - **Length**: [`is_no_longer_than`](Validator::is_no_longer_than)
//! - **Membership**: [`is_one_of`](Validator::is_one_of),
//!   [`is_one_of_exact`](Validator::is_one_of_exact)
//! - **Characters**: [`has_only_chars`](Validator::has_only_chars),
//!   [`has_only_numeric_chars`](Validator::has_only_numeric_chars),
//!   [`has_only_hex_chars`](Validator::has_only_hex_chars),
//!   [`has_only_guid_chars`](Validator::has_only_guid_chars),
//!   [`has_only_ascii_letters`](Validator::has_only_ascii_letters)
//!
//! Custom checks use [`Validator::check_str`], [`Validator::check_present`]
//! or the [`string_check!`] macro.

// ValidationError wraps a full ErrorReport; every check returns it by value.
#![allow(clippy::result_large_err)]

pub mod foundation;
mod macros;
pub mod prelude;
pub mod reporting;
pub mod validators;

pub use foundation::{
    Error, ErrorReport, Nullable, Result, SubjectError, Validate, ValidationError, Validator,
    validate,
};
