//! Prelude module for convenient imports.
//!
//! `use validate_that::prelude::*;` brings in the validator, its error
//! types, the subject macros and the reporting policies.
//!
//! # Examples
//!
//! ```rust
//! use validate_that::prelude::*;
//!
//! let id = "043C26FC";
//! that!(id)?.has_only_hex_chars()?.is_no_longer_than(8)?;
//! # Ok::<(), validate_that::Error>(())
//! ```

// ============================================================================
// FOUNDATION: Validator, presence, errors
// ============================================================================

pub use crate::foundation::{
    Error, ErrorReport, Nullable, SubjectError, Validate, ValidationError, Validator, validate,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{required, string_check, that};

// ============================================================================
// REPORTING: Policies and configuration
// ============================================================================

pub use crate::reporting::{
    Collect, LogAndContinue, Panic, Raise, ReportingConfig, ReportingMode, ReportingPolicy,
    SharedPolicy,
};

// ============================================================================
// VALIDATORS: Check options
// ============================================================================

pub use crate::validators::{CaseSensitivity, LengthMode};
