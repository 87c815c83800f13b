//! Subject-name resolution
//!
//! Turns the source text of the expression handed to [`that!`](crate::that)
//! into the dotted name used in failure messages:
//!
//! | Expression                 | Name                     |
//! |----------------------------|--------------------------|
//! | `order.customer.email`     | `order.customer.email`   |
//! | `&self.last_name`          | `last_name`              |
//! | `*pair.0`                  | `pair.0`                 |
//! | `self.0.name`              | `0.name`                 |
//! | `(person).age`             | rejected                 |
//! | `items[0]`, `name.trim()`  | rejected                 |
//!
//! The enclosing receiver (`self`, `Self::`) is not part of the name; what
//! follows it is. Indexers, method calls, literals and other arbitrary
//! expressions are rejected with [`SubjectError`].

use std::sync::LazyLock;

use crate::foundation::SubjectError;

static MEMBER_PATH: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(?:r#)?[A-Za-z_][A-Za-z0-9_]*(?:\.(?:(?:r#)?[A-Za-z_][A-Za-z0-9_]*|[0-9]+))*$")
        .unwrap()
});

/// Member path below a receiver, which may start with a tuple index (`self.0.name`).
static RECEIVER_PATH: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^(?:(?:r#)?[A-Za-z_][A-Za-z0-9_]*|[0-9]+)(?:\.(?:(?:r#)?[A-Za-z_][A-Za-z0-9_]*|[0-9]+))*$",
    )
    .unwrap()
});

/// Receivers that enclose the member path rather than belong to it.
const RECEIVERS: [&str; 2] = ["self.", "Self::"];

/// Resolves the subject name for an expression's source text.
///
/// # Examples
///
/// ```rust
/// use validate_that::foundation::subject::resolve;
///
/// assert_eq!(resolve("order.customer.email").unwrap(), "order.customer.email");
/// assert_eq!(resolve("&self.name").unwrap(), "name");
/// assert!(resolve("items[0]").is_err());
/// ```
pub fn resolve(expression: &str) -> Result<String, SubjectError> {
    if expression.trim().is_empty() {
        return Err(SubjectError::Empty);
    }

    let stripped = strip_sigils(expression);
    let compact: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

    let (path, has_receiver) = match RECEIVERS
        .iter()
        .find_map(|receiver| compact.strip_prefix(receiver))
    {
        Some(rest) => (rest, true),
        None => (compact.as_str(), false),
    };
    let path = path.trim_start_matches(['.', ':']);

    if path.is_empty() || path == "self" || path == "Self" {
        return Err(SubjectError::unsupported(
            expression,
            "has no member path to name the subject",
        ));
    }

    if MEMBER_PATH.is_match(path) || (has_receiver && RECEIVER_PATH.is_match(path)) {
        return Ok(path.to_owned());
    }

    Err(SubjectError::unsupported(expression, rejection_reason(path)))
}

/// Removes leading borrow/deref sigils and parentheses wrapping the whole
/// expression.
fn strip_sigils(expression: &str) -> &str {
    let mut text = expression.trim();
    loop {
        let before = text;
        if let Some(rest) = text.strip_prefix('&') {
            text = rest.trim_start();
            if let Some(rest) = text.strip_prefix("mut")
                && rest.starts_with(char::is_whitespace)
            {
                text = rest.trim_start();
            }
        } else if let Some(rest) = text.strip_prefix('*') {
            text = rest.trim_start();
        } else if let Some(inner) = wrapping_parens(text) {
            text = inner.trim();
        }

        if text == before {
            return text;
        }
    }
}

/// Returns the inside of `( ... )` when the outer pair encloses the whole text.
fn wrapping_parens(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0_usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

fn rejection_reason(path: &str) -> &'static str {
    if path.contains('[') {
        "uses an indexer, only member access is supported"
    } else if path.contains('(') {
        "calls a method or function, only member access is supported"
    } else if path.starts_with(|c: char| c.is_ascii_digit() || c == '"' || c == '\'') {
        "is a literal, only member access is supported"
    } else {
        "is not a plain member access"
    }
}
