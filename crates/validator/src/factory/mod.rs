//! Validator factory
//!
//! Turns a [`RuleSpecification`] into a ready [`Validator`], resolving every
//! descriptor up front so configuration mistakes surface at construction
//! rather than during validation.

mod descriptor;
mod specification;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

pub use descriptor::RuleDescriptor;
pub use specification::RuleSpecification;

use crate::foundation::{ConfigError, MessageFormatter, RuleSet, Translator};
use crate::validator::Validator;

/// Builds [`Validator`]s, optionally sharing one [`Translator`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::{RuleSpecification, ValidatorFactory};
///
/// let spec = RuleSpecification::from_json(
///     r#"{"age": [{"rule": "number", "integerOnly": true, "min": 18}]}"#,
/// )
/// .unwrap();
///
/// let validator = ValidatorFactory::new().create(spec).unwrap();
/// let results = validator.validate(&json!({"age": "17"})).unwrap();
/// assert_eq!(results.get("age").unwrap().errors(), ["age must be no less than 18."]);
/// ```
#[derive(Clone, Default)]
pub struct ValidatorFactory {
    translator: Option<Arc<dyn Translator>>,
}

impl ValidatorFactory {
    /// A factory without a translator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose validators translate every message with `translator`.
    #[must_use]
    pub fn with_translator(translator: impl Translator + 'static) -> Self {
        Self::with_shared_translator(Arc::new(translator))
    }

    /// Like [`with_translator`](Self::with_translator), for an already
    /// shared translator.
    #[must_use]
    pub fn with_shared_translator(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator: Some(translator),
        }
    }

    /// `true` if created validators translate messages.
    #[must_use]
    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// Resolves `specification` into a validator.
    ///
    /// # Errors
    ///
    /// The first descriptor that fails to resolve, typically
    /// [`ConfigError::InvalidRuleDescriptor`] or
    /// [`ConfigError::UnknownOperator`].
    pub fn create(&self, specification: RuleSpecification) -> Result<Validator, ConfigError> {
        let mut rules = IndexMap::with_capacity(specification.len());

        for (attribute, descriptors) in specification {
            let rule_set = descriptors
                .into_iter()
                .enumerate()
                .map(|(index, descriptor)| descriptor.resolve(&attribute, index))
                .collect::<Result<RuleSet, _>>()?;
            rules.insert(attribute, rule_set);
        }

        tracing::debug!(
            attributes = rules.len(),
            translated = self.has_translator(),
            "created validator"
        );

        Ok(Validator::with_rules(rules, self.formatter()))
    }

    /// Parses `json` with [`RuleSpecification::from_json`] and creates a
    /// validator from it.
    ///
    /// # Errors
    ///
    /// As [`RuleSpecification::from_json`] and [`create`](Self::create).
    pub fn create_from_json(&self, json: &str) -> Result<Validator, ConfigError> {
        self.create(RuleSpecification::from_json(json)?)
    }

    fn formatter(&self) -> MessageFormatter {
        MessageFormatter::from_shared(self.translator.clone())
    }
}

impl fmt::Debug for ValidatorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorFactory")
            .field("translator", &self.translator.as_ref().map(|_| "<translator>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{MessageParams, ValidationResult};
    use crate::rules::Required;
    use serde_json::{Value, json};

    #[test]
    fn plain_string_fails_at_create() {
        let spec = RuleSpecification::new()
            .attribute("name", [RuleDescriptor::rule(Required::new())])
            .attribute(
                "email",
                [json!({"rule": "required"}), json!("required")],
            );

        let err = ValidatorFactory::new().create(spec).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRuleDescriptor { ref attribute, index: 1, .. } if attribute == "email"
        ));
    }

    #[test]
    fn mixed_descriptors() {
        let spec = RuleSpecification::new().attribute(
            "amount",
            [
                RuleDescriptor::declared(json!({"rule": "number", "integerOnly": true})),
                RuleDescriptor::callable(|value: &Value| {
                    let mut result = ValidationResult::new();
                    if value == 13 {
                        result.add_error("Value should not be 13.");
                    }
                    result
                }),
            ],
        );
        let validator = ValidatorFactory::new().create(spec).unwrap();

        let results = validator.validate(&json!({"amount": 13})).unwrap();
        assert_eq!(results.get("amount").unwrap().errors(), ["Value should not be 13."]);
        assert!(validator.validate(&json!({"amount": 50})).unwrap().is_valid());
    }

    #[test]
    fn translator_is_shared_with_validators() {
        let factory =
            ValidatorFactory::with_translator(|_: &str, _: &MessageParams| "X".to_owned());
        assert!(factory.has_translator());

        let validator = factory
            .create_from_json(r#"{"a": [{"rule": "required"}, {"rule": "number"}]}"#)
            .unwrap();
        let results = validator.validate(&json!({})).unwrap();
        assert_eq!(results.get("a").unwrap().errors(), ["X", "X"]);
    }

    #[test]
    fn empty_specification_builds_empty_validator() {
        let validator = ValidatorFactory::new().create(RuleSpecification::new()).unwrap();
        assert_eq!(validator.attributes().count(), 0);
        assert!(validator.validate(&json!({"a": 1})).unwrap().is_empty());
    }
}
