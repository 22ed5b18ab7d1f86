//! Building a validator from a JSON rule specification.
//!
//! Run: `RUST_LOG=sieve_validator=trace cargo run -p sieve-validator --example declarative`

use serde_json::json;
use sieve_validator::prelude::*;
use tracing_subscriber::EnvFilter;

const SPEC: &str = r#"{
    "username": [
        {"rule": "required"},
        {"rule": "hasLength", "min": 3, "max": 16},
        {"rule": "matchRegularExpression", "pattern": "^[a-z0-9_]+$",
         "message": "{attribute} may only contain lowercase letters, digits and underscores."}
    ],
    "age": [
        {"rule": "number", "integerOnly": true, "min": 13}
    ],
    "password": [
        {"rule": "hasLength", "min": 8},
        {"rule": "compare"}
    ],
    "plan": [
        {"rule": "compare", "operator": "!=", "compareValue": "legacy",
         "message": "The legacy plan is no longer offered."}
    ]
}"#;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let validator = ValidatorFactory::new().create_from_json(SPEC)?;

    let submissions = [
        json!({
            "username": "ada_lovelace",
            "age": "36",
            "password": "analytical engine",
            "password_repeat": "analytical engine",
            "plan": "pro",
        }),
        json!({
            "username": "Ada!",
            "age": 12.5,
            "password": "short",
            "password_repeat": "shorter",
            "plan": "legacy",
        }),
    ];

    for (i, submission) in submissions.iter().enumerate() {
        let results = validator.validate(submission)?;
        println!("=== Submission {} ({} errors) ===", i + 1, results.error_count());
        for (attribute, error) in results.first_errors() {
            println!("  {attribute}: {error}");
        }
    }

    // A translator sees every message template and its parameters
    let shouting = ValidatorFactory::with_translator(|message: &str, params: &MessageParams| {
        sieve_validator::foundation::substitute(message, params).to_uppercase()
    });
    let validator = shouting.create_from_json(SPEC)?;
    let results = validator.validate(&json!({"username": ""}))?;
    if let Some(error) = results.get("username").and_then(|r| r.first_error()) {
        println!("\ntranslated: {error}");
    }

    Ok(())
}
