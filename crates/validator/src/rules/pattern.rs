//! Regular expression rule

use std::borrow::Cow;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::foundation::{ConfigError, DataSet, MessageFormatter, Rule, ValidationResult};
use crate::rules::{BARE_VALUE_LABEL, INVALID_MESSAGE, base_params};

/// Checks that a string matches a regular expression, or with
/// [`not`](Self::not) that it does not.
///
/// Non-string values always fail.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::foundation::MessageFormatter;
/// use sieve_validator::rules::MatchRegularExpression;
/// use sieve_validator::Rule;
///
/// let rule = MatchRegularExpression::new(r"^[a-z]+$").unwrap();
/// let f = MessageFormatter::new();
/// assert!(rule.validate_value(&json!("abc"), &f).unwrap().is_valid());
/// assert_eq!(rule.validate_value(&json!("ABC"), &f).unwrap().errors(), ["Value is invalid."]);
/// ```
#[derive(Debug, Clone)]
pub struct MatchRegularExpression {
    pattern: Regex,
    not: bool,
    message: Cow<'static, str>,
}

impl MatchRegularExpression {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            pattern,
            not: false,
            message: Cow::Borrowed(INVALID_MESSAGE),
        })
    }

    /// Inverts the rule: the value must not match.
    #[must_use = "builder methods must be chained or built"]
    pub fn not(mut self) -> Self {
        self.not = true;
        self
    }

    /// Overrides the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// The pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn check(&self, attribute: &str, value: &Value, formatter: &MessageFormatter) -> ValidationResult {
        let passes = match value {
            Value::String(s) => self.pattern.is_match(s) != self.not,
            _ => false,
        };

        let mut result = ValidationResult::new();
        if !passes {
            let mut params = base_params(attribute, value);
            params.push(("pattern".into(), self.pattern.as_str().to_owned()));
            result.add_error(formatter.format(&self.message, &params));
        }
        result
    }
}

impl Rule for MatchRegularExpression {
    fn name(&self) -> &'static str {
        "match_regular_expression"
    }

    fn validate_value(
        &self,
        value: &Value,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        Ok(self.check(BARE_VALUE_LABEL, value, formatter))
    }

    fn validate_attribute(
        &self,
        data_set: &dyn DataSet,
        attribute: &str,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        Ok(self.check(attribute, data_set.get_value(attribute), formatter))
    }
}

/// Declarative form: `{"pattern": "^\\d+$", "not": false, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatternConfig {
    pattern: String,
    #[serde(default)]
    not: bool,
    #[serde(default)]
    message: Option<Cow<'static, str>>,
}

impl PatternConfig {
    /// Compiles the configured pattern into a rule.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPattern`] if the pattern does not compile.
    pub fn build(self) -> Result<MatchRegularExpression, ConfigError> {
        let mut rule = MatchRegularExpression::new(&self.pattern)?;
        rule.not = self.not;
        if let Some(message) = self.message {
            rule.message = message;
        }
        Ok(rule)
    }
}
