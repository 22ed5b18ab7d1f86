//! Basic usage example for sieve-validator
//!
//! Run: `cargo run -p sieve-validator --example basic_usage`

use serde_json::{Value, json};
use sieve_validator::prelude::*;

fn main() -> Result<(), ConfigError> {
    // Rules can be used on their own against bare values
    let not_thirteen = Callback::new(|value: &Value| {
        let mut result = ValidationResult::new();
        if value == 13 {
            result.add_error("Value should not be 13.");
        }
        result
    });

    let formatter = MessageFormatter::new();
    for value in [json!(13), json!(50)] {
        let result = not_thirteen.validate_value(&value, &formatter)?;
        println!("{value}: {:?}", result.errors());
    }

    // Or grouped per attribute in a validator
    let validator = Validator::new()
        .attribute(
            "amount",
            RuleSet::new()
                .with(Number::integer().min(1).max(100))
                .with(not_thirteen),
        )
        .attribute(
            "email",
            RuleSet::new()
                .with(Required::new())
                .with(Compare::against_attribute(CompareOperator::Equal, "email_confirmation")),
        );

    let data = json!({
        "amount": 13,
        "email": "ada@example.com",
        "email_confirmation": "ada@example.org",
    });

    let results = validator.validate(&data)?;
    for (attribute, result) in results.iter() {
        if result.is_valid() {
            println!("✓ {attribute}");
        } else {
            for error in result {
                println!("✗ {attribute}: {error}");
            }
        }
    }

    Ok(())
}
