//! Built-in checks
//!
//! Checks are inherent methods on [`Validator`](crate::Validator); this module
//! only groups their implementations.
//!
//! # Categories
//!
//! - **Nullable**: [`is_not_null`](crate::Validator::is_not_null), `into_required`
//! - **String**: content, length, membership and character-class checks
//! - **Characters**: the [`chars`] predicates the string checks are built on
//!
//! Every check except `is_not_null` passes an absent value.
//!
//! # Examples
//!
//! ```rust
//! use validate_that::validate;
//!
//! let status = Some("closed");
//! validate(status, "account.status")
//!     .is_not_null()?
//!     .is_well_formed()?
//!     .is_one_of(["Active", "Closed"])?;
//! # Ok::<(), validate_that::ValidationError>(())
//! ```

pub mod chars;
mod nullable;
pub mod string;

pub use string::{CaseSensitivity, LengthMode};
