//! Core validation types
//!
//! - **Validator**: [`Validator`], the [`Validate`] factory and [`validate`]
//! - **Presence**: [`Nullable`], how checks tell absent values from present ones
//! - **Errors**: [`ErrorReport`], [`ValidationError`], [`SubjectError`], [`Error`]
//! - **Naming**: [`subject::resolve`], expression text to subject name
//!
//! # Architecture
//!
//! A [`Validator`] is created per call site, lives for one chain and is
//! discarded. Each check reads the value, optionally calls
//! [`Validator::fail`], and returns the validator for the next check.
//! `fail` never decides what happens next; the
//! [`ReportingPolicy`](crate::reporting::ReportingPolicy) does.
//!
//! ```rust
//! use validate_that::that;
//!
//! struct Customer { email: Option<String> }
//! struct Order { customer: Customer }
//!
//! let order = Order { customer: Customer { email: Some(" a@b.c".into()) } };
//! let err = that!(order.customer.email)
//!     .unwrap()
//!     .is_well_formed()
//!     .unwrap_err();
//!
//! assert_eq!(err.name(), "order.customer.email");
//! ```

pub mod error;
pub mod subject;
pub mod traits;
pub mod validator;

pub use error::{Error, ErrorReport, Result, SubjectError, ValidationError};
pub use traits::Nullable;
pub use validator::{Validate, Validator, validate};
