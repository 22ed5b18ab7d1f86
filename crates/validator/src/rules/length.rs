//! String length rule

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

use crate::foundation::{ConfigError, DataSet, MessageFormatter, Rule, ValidationResult};
use crate::rules::{BARE_VALUE_LABEL, base_params};

const NOT_A_STRING: &str = "{attribute} must be a string.";
const TOO_SHORT: &str = "{attribute} should contain at least {min} characters.";
const TOO_LONG: &str = "{attribute} should contain at most {max} characters.";

/// Checks that a string's length, in characters, is within bounds.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::foundation::MessageFormatter;
/// use sieve_validator::rules::HasLength;
/// use sieve_validator::Rule;
///
/// let rule = HasLength::new().min(3).max(5);
/// let f = MessageFormatter::new();
/// assert!(rule.validate_value(&json!("héllo"), &f).unwrap().is_valid());
/// assert_eq!(
///     rule.validate_value(&json!("hi"), &f).unwrap().errors(),
///     ["Value should contain at least 3 characters."]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HasLength {
    #[serde(default)]
    min: Option<usize>,
    #[serde(default)]
    max: Option<usize>,
    #[serde(default)]
    message: Option<Cow<'static, str>>,
    #[serde(default)]
    too_short: Option<Cow<'static, str>>,
    #[serde(default)]
    too_long: Option<Cow<'static, str>>,
}

impl HasLength {
    /// Any string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum number of characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Maximum number of characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Overrides the "not a string" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Overrides the too-short message.
    #[must_use = "builder methods must be chained or built"]
    pub fn too_short(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.too_short = Some(message.into());
        self
    }

    /// Overrides the too-long message.
    #[must_use = "builder methods must be chained or built"]
    pub fn too_long(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.too_long = Some(message.into());
        self
    }

    fn check(&self, attribute: &str, value: &Value, formatter: &MessageFormatter) -> ValidationResult {
        let mut result = ValidationResult::new();
        let mut params = base_params(attribute, value);

        let Value::String(text) = value else {
            let template = self.message.as_deref().unwrap_or(NOT_A_STRING);
            result.add_error(formatter.format(template, &params));
            return result;
        };

        let length = text.chars().count();
        params.push(("length".into(), length.to_string()));

        if let Some(min) = self.min
            && length < min
        {
            params.push(("min".into(), min.to_string()));
            let template = self.too_short.as_deref().unwrap_or(TOO_SHORT);
            result.add_error(formatter.format(template, &params));
        }
        if let Some(max) = self.max
            && length > max
        {
            params.push(("max".into(), max.to_string()));
            let template = self.too_long.as_deref().unwrap_or(TOO_LONG);
            result.add_error(formatter.format(template, &params));
        }

        result
    }
}

impl Rule for HasLength {
    fn name(&self) -> &'static str {
        "has_length"
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_characters_not_bytes() {
        let rule = HasLength::new().max(3);
        let f = MessageFormatter::new();
        assert!(rule.validate_value(&json!("日本語"), &f).unwrap().is_valid());
        assert!(!rule.validate_value(&json!("abcd"), &f).unwrap().is_valid());
    }

    #[test]
    fn non_strings_fail() {
        let data = json!({"name": 42});
        let result = HasLength::new()
            .validate_attribute(&data, "name", &MessageFormatter::new())
            .unwrap();
        assert_eq!(result.errors(), ["name must be a string."]);
    }

    #[test]
    fn custom_too_long_message_sees_length() {
        let rule = HasLength::new().max(2).too_long("{length} > {max}");
        let result = rule
            .validate_value(&json!("abcd"), &MessageFormatter::new())
            .unwrap();
        assert_eq!(result.errors(), ["4 > 2"]);
    }
}
