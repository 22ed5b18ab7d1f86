//! Required rule

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

use crate::foundation::value::is_empty;
use crate::foundation::{ConfigError, DataSet, MessageFormatter, Rule, ValidationResult};
use crate::rules::{BARE_VALUE_LABEL, base_params};

const DEFAULT_MESSAGE: &str = "{attribute} cannot be blank.";

/// Fails on `null`, blank strings (whitespace only), empty arrays and empty objects.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::foundation::MessageFormatter;
/// use sieve_validator::rules::Required;
/// use sieve_validator::Rule;
///
/// let rule = Required::new();
/// let f = MessageFormatter::new();
/// assert!(rule.validate_value(&json!(0), &f).unwrap().is_valid());
/// assert_eq!(rule.validate_value(&json!("  "), &f).unwrap().errors(), ["Value cannot be blank."]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Required {
    #[serde(default = "default_message")]
    message: Cow<'static, str>,
}

fn default_message() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_MESSAGE)
}

impl Default for Required {
    fn default() -> Self {
        Self {
            message: default_message(),
        }
    }
}

impl Required {
    /// Creates the rule with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    fn check(&self, attribute: &str, value: &Value, formatter: &MessageFormatter) -> ValidationResult {
        let blank = match value {
            Value::String(s) => s.trim().is_empty(),
            other => is_empty(other),
        };

        let mut result = ValidationResult::new();
        if blank {
            result.add_error(formatter.format(&self.message, &base_params(attribute, value)));
        }
        result
    }
}

impl Rule for Required {
    fn name(&self) -> &'static str {
        "required"
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
