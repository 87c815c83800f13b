//! Integration tests for naming subjects after call-site expressions.

use std::cell::Cell;

use pretty_assertions::assert_eq;
use rstest::rstest;
use validate_that::foundation::subject;
use validate_that::prelude::*;

struct Person {
    last_name: Option<String>,
    r#type: String,
}

impl Person {
    fn validate(&self) -> validate_that::Result<()> {
        required!(self.last_name)?.is_well_formed()?;
        that!(self.r#type)?.is_one_of(["admin", "member"])?;
        Ok(())
    }
}

#[test]
fn self_receiver_is_stripped() {
    let person = Person {
        last_name: None,
        r#type: "member".into(),
    };
    let err = person.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "The value of 'last_name' is expected to be specified (i.e. not be null)"
    );
}

#[test]
fn raw_identifiers_resolve() {
    let person = Person {
        last_name: Some("Smith".into()),
        r#type: "guest".into(),
    };
    let err = person.validate().unwrap_err();
    assert_eq!(
        err.as_validation().map(ValidationError::name),
        Some("r#type")
    );
}

#[test]
fn local_variable_names_itself() {
    let nickname = Some(String::from("ace"));
    let v = that!(nickname).unwrap();
    assert_eq!(v.name(), "nickname");
}

#[test]
fn tuple_fields_resolve() {
    let pair = (String::from("a"), String::from("b"));
    let v = that!(pair.1).unwrap();
    assert_eq!(v.name(), "pair.1");
}

#[rstest]
#[case("order.customer.email", "order.customer.email")]
#[case("self.email", "email")]
#[case("&self.customer.email", "customer.email")]
#[case("(order.email)", "order.email")]
#[case("order . email", "order.email")]
fn resolve_member_paths(#[case] expression: &str, #[case] expected: &str) {
    assert_eq!(subject::resolve(expression).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("self")]
#[case("items[0]")]
#[case("order.total()")]
#[case("\"literal\"")]
#[case("a + b")]
fn reject_unsupported_expressions(#[case] expression: &str) {
    assert!(subject::resolve(expression).is_err());
}

#[test]
fn rejected_expression_does_not_run_the_check() {
    let collector = Collect::new();
    let values = [String::new()];
    let result = that!(values[0]).map(|v| v.with_policy(collector.clone()));
    assert!(result.is_err());
    assert!(collector.is_empty());
}

#[test]
fn rejected_indexer_is_not_evaluated() {
    let items: Vec<String> = Vec::new();

    let outcome = std::panic::catch_unwind(|| that!(items[0]).is_err());
    assert!(matches!(outcome, Ok(true)));

    let err = required!(items[0]).unwrap_err();
    assert!(matches!(err, validate_that::Error::Subject(SubjectError::Unsupported { .. })));
}

#[test]
fn rejected_call_has_no_side_effects() {
    struct Counter {
        calls: Cell<u32>,
    }

    impl Counter {
        fn next(&self) -> String {
            self.calls.set(self.calls.get() + 1);
            self.calls.get().to_string()
        }
    }

    let counter = Counter { calls: Cell::new(0) };
    assert!(that!(counter.next()).is_err());
    assert_eq!(counter.calls.get(), 0);
}
