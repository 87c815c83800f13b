//! Property-based tests for validate-that.

use proptest::prelude::*;
use validate_that::prelude::*;

// ============================================================================
// IDEMPOTENCY: check(x) == check(x)
// ============================================================================

proptest! {
    #[test]
    fn well_formed_idempotent(s in ".*") {
        let r1 = validate(s.as_str(), "s").is_well_formed().is_ok();
        let r2 = validate(s.as_str(), "s").is_well_formed().is_ok();
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn one_of_idempotent(s in "[a-zA-Z]{0,8}") {
        let options = ["Active", "Closed"];
        let r1 = validate(s.as_str(), "s").is_one_of(options).is_ok();
        let r2 = validate(s.as_str(), "s").is_one_of(options).is_ok();
        prop_assert_eq!(r1, r2);
    }
}

// ============================================================================
// NULL TOLERANCE: every check except is_not_null passes an absent value
// ============================================================================

proptest! {
    #[test]
    fn absent_passes_every_string_check(max in 0usize..16) {
        let absent: Option<String> = None;
        let result = validate(&absent, "s")
            .is_not_empty()
            .and_then(Validator::is_not_white_space)
            .and_then(Validator::is_well_formed)
            .and_then(|v| v.is_no_longer_than(max))
            .and_then(|v| v.is_one_of(Vec::<String>::new()))
            .and_then(|v| v.is_one_of_exact(["x"]))
            .and_then(Validator::has_only_numeric_chars)
            .and_then(Validator::has_only_hex_chars)
            .and_then(Validator::has_only_guid_chars)
            .and_then(Validator::has_only_ascii_letters);
        prop_assert!(result.is_ok());
    }
}

// ============================================================================
// AGREEMENT WITH THE UNDERLYING PREDICATE
// ============================================================================

proptest! {
    #[test]
    fn max_length_matches_char_count(s in ".{0,20}", max in 0usize..20) {
        let ok = validate(s.as_str(), "s").is_no_longer_than(max).is_ok();
        prop_assert_eq!(ok, s.chars().count() <= max);
    }

    #[test]
    fn hex_matches_ascii_hexdigit(s in "[0-9a-hA-H]{0,12}") {
        let ok = validate(s.as_str(), "s").has_only_hex_chars().is_ok();
        prop_assert_eq!(ok, s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn trimmed_strings_are_well_formed(s in "\\PC*") {
        let trimmed = s.trim();
        let ok = validate(trimmed, "s").is_well_formed().is_ok();
        prop_assert_eq!(ok, !trimmed.is_empty());
    }

    #[test]
    fn one_of_ignores_case(s in "[a-zA-Z]{1,8}") {
        let upper = s.to_uppercase();
        let lower = s.to_lowercase();
        prop_assert!(validate(upper.as_str(), "s").is_one_of([lower.as_str()]).is_ok());
        prop_assert_eq!(
            validate(upper.as_str(), "s").is_one_of_exact([lower.as_str()]).is_ok(),
            upper == lower
        );
    }

    #[test]
    fn failure_value_is_the_input(s in "[a-z]{6,12}") {
        let err = validate(s.as_str(), "s").is_no_longer_than(5).unwrap_err();
        prop_assert_eq!(err.value(), &serde_json::Value::String(s));
    }
}
