//! Property-based tests for sieve-validator.

use proptest::prelude::*;
use serde_json::{Value, json};
use sieve_validator::foundation::substitute;
use sieve_validator::prelude::*;

fn failing(message: String) -> Callback {
    Callback::new(move |_: &Value| ValidationResult::with_error(message.clone()))
}

fn passing() -> Callback {
    Callback::new(|_: &Value| ValidationResult::new())
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        (-1e6f64..1e6).prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
    ]
}

// ============================================================================
// RESULT: valid iff no messages
// ============================================================================

proptest! {
    #[test]
    fn valid_iff_no_errors(messages in prop::collection::vec(".{0,20}", 0..8)) {
        let result: ValidationResult = messages.iter().cloned().collect();
        prop_assert_eq!(result.is_valid(), messages.is_empty());
        prop_assert_eq!(result.errors(), messages.as_slice());
    }
}

// ============================================================================
// RULE SET: K failing rules yield exactly K messages, in order
// ============================================================================

proptest! {
    #[test]
    fn rule_set_collects_every_failure(pattern in prop::collection::vec(any::<bool>(), 0..10)) {
        let mut rules = RuleSet::new();
        let mut expected = Vec::new();
        for (i, fails) in pattern.iter().enumerate() {
            if *fails {
                let message = format!("rule {i} failed");
                expected.push(message.clone());
                rules.push(std::sync::Arc::new(failing(message)));
            } else {
                rules.push(std::sync::Arc::new(passing()));
            }
        }

        let result = rules.validate_value(&json!(null), &MessageFormatter::new()).unwrap();
        prop_assert_eq!(result.into_errors(), expected);
    }
}

// ============================================================================
// VALIDATOR: one result per declared attribute, in declaration order
// ============================================================================

proptest! {
    #[test]
    fn one_result_per_declared_attribute(
        names in prop::collection::hash_set("[a-z]{1,8}", 0..8),
        data_keys in prop::collection::hash_set("[a-z]{1,8}", 0..8),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let validator = names
            .iter()
            .fold(Validator::new(), |v, name| v.attribute(name.clone(), RuleSet::new().with(Required::new())));

        let data: ObjectDataSet = data_keys.iter().map(|k| (k.clone(), json!("x"))).collect();
        let results = validator.validate(&data).unwrap();

        prop_assert_eq!(results.attributes().collect::<Vec<_>>(), names.iter().map(String::as_str).collect::<Vec<_>>());
        for name in &names {
            prop_assert_eq!(results.get(name).unwrap().is_valid(), data_keys.contains(name));
        }
    }
}

// ============================================================================
// COMPARE: operator laws
// ============================================================================

proptest! {
    #[test]
    fn equal_and_not_equal_are_complements(a in scalar(), b in scalar(), numeric in any::<bool>()) {
        let ty = if numeric { CompareType::Number } else { CompareType::String };
        let eq = Compare::compare_values(CompareOperator::Equal, ty, &a, &b);
        let ne = Compare::compare_values(CompareOperator::NotEqual, ty, &a, &b);
        let seq = Compare::compare_values(CompareOperator::StrictEqual, ty, &a, &b);
        let sne = Compare::compare_values(CompareOperator::StrictNotEqual, ty, &a, &b);
        prop_assert_ne!(eq, ne);
        prop_assert_ne!(seq, sne);
    }

    #[test]
    fn number_ordering_matches_f64(a in any::<i32>(), b in any::<i32>()) {
        let (va, vb) = (json!(a.to_string()), json!(b));
        let cmp = |op| Compare::compare_values(op, CompareType::Number, &va, &vb);
        prop_assert_eq!(cmp(CompareOperator::GreaterThan), a > b);
        prop_assert_eq!(cmp(CompareOperator::GreaterThanOrEqual), a >= b);
        prop_assert_eq!(cmp(CompareOperator::LessThan), a < b);
        prop_assert_eq!(cmp(CompareOperator::LessThanOrEqual), a <= b);
        prop_assert_eq!(cmp(CompareOperator::Equal), a == b);
    }

    #[test]
    fn strict_string_equality_implies_loose(a in scalar(), b in scalar()) {
        let strict = Compare::compare_values(CompareOperator::StrictEqual, CompareType::String, &a, &b);
        let loose = Compare::compare_values(CompareOperator::Equal, CompareType::String, &a, &b);
        prop_assert!(!strict || loose);
    }
}

// ============================================================================
// MESSAGES: substitution leaves placeholder-free text alone
// ============================================================================

proptest! {
    #[test]
    fn substitute_without_placeholders_is_identity(text in "[^{}]{0,40}", value in ".{0,10}") {
        let mut params = MessageParams::new();
        params.push(("attribute".into(), value));
        prop_assert_eq!(substitute(&text, &params), text);
    }
}
