//! Rule sets
//!
//! A [`RuleSet`] is the ordered list of rules declared for one attribute.

use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{
    ConfigError, DataSet, MessageFormatter, Rule, SharedRule, ValidationResult,
};

/// Ordered rules applied together to one value or attribute.
///
/// Every rule runs, whatever earlier rules reported; their messages are
/// concatenated in rule order. A configuration error from any rule aborts the
/// whole set.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::foundation::{MessageFormatter, RuleSet};
/// use sieve_validator::rules::{Number, Required};
///
/// let rules = RuleSet::new()
///     .with(Required::new())
///     .with(Number::new().integer_only().max(10));
///
/// let result = rules.validate_value(&json!(11.5), &MessageFormatter::new()).unwrap();
/// assert_eq!(result.error_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<SharedRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Appends an already shared rule.
    pub fn push(&mut self, rule: SharedRule) {
        self.rules.push(rule);
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &SharedRule> {
        self.rules.iter()
    }

    /// Runs every rule against a bare value.
    pub fn validate_value(
        &self,
        value: &Value,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::new();
        for rule in &self.rules {
            result.merge(rule.validate_value(value, formatter)?);
        }
        Ok(result)
    }

    /// Runs every rule against `attribute` of `data_set`.
    pub fn validate_attribute(
        &self,
        data_set: &dyn DataSet,
        attribute: &str,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::new();
        for rule in &self.rules {
            let outcome = rule.validate_attribute(data_set, attribute, formatter)?;
            if !outcome.is_valid() {
                tracing::trace!(
                    attribute,
                    rule = rule.name(),
                    errors = outcome.error_count(),
                    "rule failed"
                );
            }
            result.merge(outcome);
        }
        Ok(result)
    }
}

impl FromIterator<SharedRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = SharedRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<SharedRule>> for RuleSet {
    fn from(rules: Vec<SharedRule>) -> Self {
        Self { rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Callback;
    use serde_json::json;

    fn failing(message: &'static str) -> Callback {
        Callback::new(move |_: &Value| ValidationResult::with_error(message))
    }

    #[test]
    fn all_rules_run_without_short_circuit() {
        let rules = RuleSet::new()
            .with(failing("first"))
            .with(Callback::new(|_: &Value| ValidationResult::new()))
            .with(failing("third"));

        let result = rules
            .validate_value(&json!(1), &MessageFormatter::new())
            .unwrap();
        assert_eq!(result.errors(), ["first", "third"]);
    }

    #[test]
    fn empty_set_is_valid() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        let data = json!({"a": 1});
        assert!(rules
            .validate_attribute(&data, "a", &MessageFormatter::new())
            .unwrap()
            .is_valid());
    }

    #[test]
    fn collects_from_shared_rules() {
        let rules: RuleSet = vec![Arc::new(failing("x")) as SharedRule]
            .into_iter()
            .collect();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.rules().next().map(|r| r.name()), Some("callback"));
    }
}
