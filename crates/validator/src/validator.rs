//! Validator
//!
//! Runs every declared attribute's [`RuleSet`] against a [`DataSet`].

use indexmap::IndexMap;

use crate::foundation::{
    ConfigError, DataSet, MessageFormatter, RuleSet, ValidationResults,
};

/// Attribute name → rule set, validated in declaration order.
///
/// Usually built by [`ValidatorFactory`](crate::ValidatorFactory), but can be
/// assembled directly.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::foundation::RuleSet;
/// use sieve_validator::rules::{Number, Required};
/// use sieve_validator::Validator;
///
/// let validator = Validator::new()
///     .attribute("name", RuleSet::new().with(Required::new()))
///     .attribute("age", RuleSet::new().with(Number::integer().min(18)));
///
/// let results = validator.validate(&json!({"name": "Ada", "age": 17})).unwrap();
/// assert!(results.get("name").unwrap().is_valid());
/// assert_eq!(results.get("age").unwrap().errors(), ["age must be no less than 18."]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: IndexMap<String, RuleSet>,
    formatter: MessageFormatter,
}

impl Validator {
    /// A validator with no attributes and no translator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator over `rules` that renders messages with `formatter`.
    #[must_use]
    pub fn with_rules(rules: IndexMap<String, RuleSet>, formatter: MessageFormatter) -> Self {
        Self { rules, formatter }
    }

    /// Declares (or replaces) the rule set of `attribute`.
    ///
    /// Replacing keeps the attribute's original position.
    #[must_use = "builder methods must be chained or built"]
    pub fn attribute(mut self, attribute: impl Into<String>, rules: RuleSet) -> Self {
        self.rules.insert(attribute.into(), rules);
        self
    }

    /// Sets the message formatter.
    #[must_use = "builder methods must be chained or built"]
    pub fn formatter(mut self, formatter: MessageFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Declared attribute names in order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Rule set declared for `attribute`.
    #[must_use]
    pub fn rules_for(&self, attribute: &str) -> Option<&RuleSet> {
        self.rules.get(attribute)
    }

    /// Validates `data_set`.
    ///
    /// Returns one result per declared attribute, in declaration order.
    /// Attributes present in the data set but not declared are ignored. A
    /// failing attribute never stops the others.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] raised by a rule aborts the pass.
    pub fn validate(&self, data_set: &dyn DataSet) -> Result<ValidationResults, ConfigError> {
        let mut results = ValidationResults::with_capacity(self.rules.len());

        for (attribute, rules) in &self.rules {
            let result = rules.validate_attribute(data_set, attribute, &self.formatter)?;
            tracing::debug!(
                attribute = %attribute,
                rules = rules.len(),
                errors = result.error_count(),
                "validated attribute"
            );
            results.insert(attribute.clone(), result);
        }

        Ok(results)
    }
}
