//! Macros for naming subjects and defining custom checks.
//!
//! # Available Macros
//!
//! - [`that!`] — validator named after the expression it is given
//! - [`required!`] — [`that!`] followed by `is_not_null`
//! - [`string_check!`] — a custom null-tolerant string check as an extension trait
//!
//! # Examples
//!
//! ```rust
//! use validate_that::{required, that};
//!
//! struct Person { last_name: Option<String>, nickname: Option<String> }
//! let person = Person { last_name: Some("Smith".into()), nickname: None };
//!
//! required!(person.last_name)?.is_well_formed()?;
//! that!(person.nickname)?.is_no_longer_than(16)?;
//! # Ok::<(), validate_that::Error>(())
//! ```

// ============================================================================
// SUBJECT MACROS
// ============================================================================

/// Creates a [`Validator`](crate::Validator) over a reference to `$subject`,
/// named after the expression text.
///
/// `that!(order.customer.email)` is named `order.customer.email`, and
/// `that!(self.email)` is named `email`. Expressions that are not a plain
/// member path (indexing, calls, literals) yield a
/// [`SubjectError`](crate::SubjectError).
///
/// The name is resolved before `$subject` is evaluated; a rejected
/// expression never runs.
#[macro_export]
macro_rules! that {
    ($subject:expr $(,)?) => {
        match $crate::foundation::subject::resolve(::core::stringify!($subject)) {
            ::core::result::Result::Ok(name) => {
                ::core::result::Result::Ok($crate::Validator::new(name, &$subject))
            }
            ::core::result::Result::Err(error) => {
                ::core::result::Result::Err::<_, $crate::SubjectError>(error)
            }
        }
    };
}

/// Like [`that!`], then asserts the value is present.
///
/// Returns [`crate::Result`], since both naming and the presence check can
/// fail. As with [`that!`], a rejected expression is never evaluated.
#[macro_export]
macro_rules! required {
    ($subject:expr $(,)?) => {
        match $crate::that!($subject) {
            ::core::result::Result::Ok(validator) => validator
                .is_not_null()
                .map_err(<$crate::Error as ::core::convert::From<$crate::ValidationError>>::from),
            ::core::result::Result::Err(error) => {
                ::core::result::Result::Err(<$crate::Error as ::core::convert::From<
                    $crate::SubjectError,
                >>::from(error))
            }
        }
    };
}

// ============================================================================
// STRING CHECK MACRO
// ============================================================================

/// Defines a custom string check as an extension trait on
/// [`Validator`](crate::Validator).
///
/// The generated check applies to every subject whose present value is a
/// string and passes absent values, exactly like the built-in string checks.
/// Arguments declared on the method are in scope in both blocks.
///
/// ```rust
/// use validate_that::{string_check, validate};
///
/// string_check! {
///     /// Slug checks.
///     pub trait SlugChecks {
///         /// Lowercase ASCII letters, digits and dashes.
///         fn is_slug();
///     }
///     rule(value) { value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') }
///     message(v, value) { format!("{} be a slug, but specified value was '{value}'", v.expected_to()) }
/// }
///
/// string_check! {
///     /// Prefix checks.
///     pub trait PrefixChecks {
///         /// Starts with `prefix`.
///         fn starts_with_prefix(prefix: &str);
///     }
///     rule(value) { value.starts_with(prefix) }
///     message(v, value) { format!("{} start with '{prefix}', but specified value was '{value}'", v.expected_to()) }
/// }
///
/// validate("release-2024", "post.slug").is_slug()?.starts_with_prefix("release")?;
/// assert!(validate("Release", "post.slug").is_slug().is_err());
/// # Ok::<(), validate_that::ValidationError>(())
/// ```
#[macro_export]
macro_rules! string_check {
    (
        $(#[$meta:meta])*
        $vis:vis trait $trait_name:ident {
            $(#[$method_meta:meta])*
            fn $method:ident($($arg:ident: $arg_ty:ty),* $(,)?);
        }
        rule($value:ident) $rule:block
        message($validator:ident, $message_value:ident) $message:block
    ) => {
        $(#[$meta])*
        $vis trait $trait_name: Sized {
            $(#[$method_meta])*
            fn $method(self, $($arg: $arg_ty),*) -> ::core::result::Result<Self, $crate::ValidationError>;
        }

        impl<T> $trait_name for $crate::Validator<T>
        where
            T: $crate::Nullable,
            T::Inner: ::core::convert::AsRef<str>,
        {
            fn $method(self, $($arg: $arg_ty),*) -> ::core::result::Result<Self, $crate::ValidationError> {
                self.check_str(
                    |$value: &str| $rule,
                    |$validator: &Self, $message_value: &str| $message,
                )
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::validate;
    use crate::reporting::Collect;
    use pretty_assertions::assert_eq;

    string_check! {
        /// Test check without arguments.
        trait TestChecks {
            fn is_lowercase();
        }
        rule(value) { value.chars().all(char::is_lowercase) }
        message(v, value) { format!("{} be lowercase, but specified value was '{value}'", v.expected_to()) }
    }

    string_check! {
        trait TestSuffixChecks {
            fn ends_with_any(first: &str, second: &str);
        }
        rule(value) { value.ends_with(first) || value.ends_with(second) }
        message(v, _value) { format!("{} end with '{first}' or '{second}'", v.expected_to()) }
    }

    #[test]
    fn test_string_check_without_arguments() {
        assert!(validate("abc", "s").is_lowercase().is_ok());

        let err = validate("aBc", "s").is_lowercase().unwrap_err();
        assert_eq!(
            err.message(),
            "The value of 's' is expected to be lowercase, but specified value was 'aBc'"
        );
    }

    #[test]
    fn test_string_check_with_arguments() {
        assert!(validate("main.rs", "file").ends_with_any(".rs", ".toml").is_ok());

        let err = validate("main.py", "file").ends_with_any(".rs", ".toml").unwrap_err();
        assert_eq!(
            err.message(),
            "The value of 'file' is expected to end with '.rs' or '.toml'"
        );
    }

    #[test]
    fn test_string_check_is_null_tolerant() {
        let absent: Option<String> = None;
        assert!(validate(&absent, "s").is_lowercase().is_ok());
    }

    #[test]
    fn test_string_check_uses_injected_policy() {
        let collector = Collect::new();
        let result = validate("ABC", "s").with_policy(collector.clone()).is_lowercase();
        assert!(result.is_ok());
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_that_names_subject() {
        struct Address {
            city: Option<String>,
        }
        let address = Address {
            city: Some("Oslo".into()),
        };
        let v = that!(address.city).unwrap();
        assert_eq!(v.name(), "address.city");
        assert_eq!(v.value().as_deref(), Some("Oslo"));
    }

    #[test]
    fn test_that_rejects_index() {
        let names = [String::from("a")];
        assert!(that!(names[0]).is_err());
    }

    #[test]
    fn test_that_does_not_evaluate_rejected_subject() {
        let empty: Vec<String> = Vec::new();
        assert!(that!(empty[0]).is_err());
        assert!(required!(empty[0]).is_err());
    }

    #[test]
    fn test_required_fails_on_absent() {
        let nickname: Option<String> = None;
        let err = required!(nickname).unwrap_err();
        assert_eq!(
            err.as_validation().map(crate::ValidationError::name),
            Some("nickname")
        );
    }
}
