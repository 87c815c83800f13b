//! String checks
//!
//! All checks in this module apply to any subject whose present value is a
//! string: `&str`, `String`, `Cow<str>`, `Option` of those, or a reference
//! to any of them. They are null-tolerant: an absent value passes.
//!
//! - Content: [`is_not_empty`](crate::Validator::is_not_empty),
//!   [`is_not_white_space`](crate::Validator::is_not_white_space),
//!   [`is_well_formed`](crate::Validator::is_well_formed)
//! - Length: [`is_no_longer_than`](crate::Validator::is_no_longer_than)
//! - Membership: [`is_one_of`](crate::Validator::is_one_of),
//!   [`is_one_of_exact`](crate::Validator::is_one_of_exact)
//! - Pattern: [`has_only_chars`](crate::Validator::has_only_chars) and its
//!   numeric, hex, GUID and ASCII-letter variants

pub mod content;
pub mod length;
pub mod membership;
pub mod pattern;

pub use length::LengthMode;
pub use membership::CaseSensitivity;
