//! Presence abstraction shared by every null-tolerant check.
//!
//! A subject is either present or absent. `Option<T>` can be absent, plain
//! values (strings, numbers) are always present, and references forward to
//! what they point at. Built-in checks only look at present values; absence
//! is asserted separately with [`Validator::is_not_null`](crate::Validator::is_not_null).

use std::borrow::Cow;

use serde::Serialize;

/// A value that may be absent.
///
/// The `Serialize` supertrait lets a failing check capture the subject value
/// into its [`ErrorReport`](crate::ErrorReport).
///
/// # Examples
///
/// ```rust
/// use validate_that::Nullable;
///
/// assert_eq!(Some("a").present(), Some(&"a"));
/// assert!(None::<String>.is_null());
/// assert_eq!("text".present(), Some("text"));
/// ```
pub trait Nullable: Serialize {
    /// What a present value looks like.
    type Inner: ?Sized;

    /// Returns the present value, or `None` when the subject is absent.
    fn present(&self) -> Option<&Self::Inner>;

    /// Returns true when the subject is absent.
    fn is_null(&self) -> bool {
        self.present().is_none()
    }
}

impl<T: Serialize> Nullable for Option<T> {
    type Inner = T;

    #[inline]
    fn present(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    type Inner = T::Inner;

    #[inline]
    fn present(&self) -> Option<&T::Inner> {
        (**self).present()
    }
}

impl Nullable for str {
    type Inner = str;

    #[inline]
    fn present(&self) -> Option<&str> {
        Some(self)
    }
}

impl Nullable for String {
    type Inner = str;

    #[inline]
    fn present(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Nullable for Cow<'_, str> {
    type Inner = str;

    #[inline]
    fn present(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

macro_rules! always_present {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Nullable for $ty {
                type Inner = $ty;

                #[inline]
                fn present(&self) -> Option<&$ty> {
                    Some(self)
                }
            }
        )+
    };
}

always_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_presence() {
        assert_eq!(Some(5).present(), Some(&5));
        assert!(None::<i32>.is_null());
    }

    #[test]
    fn test_reference_forwards() {
        let value = Some(String::from("abc"));
        let by_ref = &value;
        assert_eq!(by_ref.present().map(String::as_str), Some("abc"));

        let absent: Option<String> = None;
        assert!((&&absent).is_null());
    }

    #[test]
    fn test_strings_always_present() {
        assert_eq!("".present(), Some(""));
        assert_eq!(String::from("x").present(), Some("x"));
        assert_eq!(Cow::Borrowed("y").present(), Some("y"));
    }

    #[test]
    fn test_primitives_always_present() {
        assert!(!0_u8.is_null());
        assert!(!false.is_null());
    }
}
