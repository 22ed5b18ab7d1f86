//! Number rule

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

use crate::foundation::value::{format_float, is_numeric_str, to_number, to_text};
use crate::foundation::{ConfigError, DataSet, MessageFormatter, Rule, ValidationResult};
use crate::rules::{BARE_VALUE_LABEL, base_params};

const NOT_A_NUMBER: &str = "{attribute} must be a number.";
const NOT_AN_INTEGER: &str = "{attribute} must be an integer.";
const TOO_SMALL: &str = "{attribute} must be no less than {min}.";
const TOO_BIG: &str = "{attribute} must be no greater than {max}.";

/// Checks that a value is a number, optionally an integer, optionally within bounds.
///
/// JSON numbers and numeric strings (`" 42 "`, `"-1.5e3"`) are accepted;
/// booleans, `null` and composites are not numbers. Bounds are inclusive and
/// only checked once the value is known to be numeric.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::foundation::MessageFormatter;
/// use sieve_validator::rules::Number;
/// use sieve_validator::Rule;
///
/// let rule = Number::new().integer_only().min(1).max(100);
/// let f = MessageFormatter::new();
/// assert!(rule.validate_value(&json!("42"), &f).unwrap().is_valid());
/// assert_eq!(rule.validate_value(&json!(4.5), &f).unwrap().errors(), ["Value must be an integer."]);
/// assert_eq!(rule.validate_value(&json!(101), &f).unwrap().errors(), ["Value must be no greater than 100."]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Number {
    #[serde(default)]
    integer_only: bool,
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
    #[serde(default)]
    message: Option<Cow<'static, str>>,
    #[serde(default)]
    too_small: Option<Cow<'static, str>>,
    #[serde(default)]
    too_big: Option<Cow<'static, str>>,
}

impl Number {
    /// Any number, no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut for `Number::new().integer_only()`.
    #[must_use]
    pub fn integer() -> Self {
        Self::new().integer_only()
    }

    /// Rejects values with a fractional part.
    #[must_use = "builder methods must be chained or built"]
    pub fn integer_only(mut self) -> Self {
        self.integer_only = true;
        self
    }

    /// Inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Overrides the "not a number" / "not an integer" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Overrides the lower-bound message.
    #[must_use = "builder methods must be chained or built"]
    pub fn too_small(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.too_small = Some(message.into());
        self
    }

    /// Overrides the upper-bound message.
    #[must_use = "builder methods must be chained or built"]
    pub fn too_big(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.too_big = Some(message.into());
        self
    }

    fn is_acceptable(&self, value: &Value) -> bool {
        let text = match value {
            Value::Number(_) => to_text(value),
            Value::String(s) if is_numeric_str(s) => s.trim().to_owned(),
            _ => return false,
        };

        !self.integer_only || is_integer_text(&text)
    }

    fn check(&self, attribute: &str, value: &Value, formatter: &MessageFormatter) -> ValidationResult {
        let mut result = ValidationResult::new();
        let mut params = base_params(attribute, value);

        if !self.is_acceptable(value) {
            let default = if self.integer_only { NOT_AN_INTEGER } else { NOT_A_NUMBER };
            let template = self.message.as_deref().unwrap_or(default);
            result.add_error(formatter.format(template, &params));
            return result;
        }

        let number = to_number(value);
        if let Some(min) = self.min
            && number < min
        {
            params.push(("min".into(), format_float(min)));
            let template = self.too_small.as_deref().unwrap_or(TOO_SMALL);
            result.add_error(formatter.format(template, &params));
        }
        if let Some(max) = self.max
            && number > max
        {
            params.push(("max".into(), format_float(max)));
            let template = self.too_big.as_deref().unwrap_or(TOO_BIG);
            result.add_error(formatter.format(template, &params));
        }

        result
    }
}

/// `[+-]?\d+` after the text cast.
fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Rule for Number {
    fn name(&self) -> &'static str {
        "number"
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
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(13), true)]
    #[case(json!(13.0), true)]
    #[case(json!("-7"), true)]
    #[case(json!(" 8 "), true)]
    #[case(json!(1.5), false)]
    #[case(json!("1e3"), false)]
    #[case(json!("abc"), false)]
    #[case(json!(true), false)]
    #[case(json!(null), false)]
    #[case(json!([1]), false)]
    fn integer_only(#[case] value: Value, #[case] valid: bool) {
        let result = Number::integer()
            .validate_value(&value, &MessageFormatter::new())
            .unwrap();
        assert_eq!(result.is_valid(), valid, "{value}");
    }

    #[test]
    fn numeric_strings_are_numbers() {
        let f = MessageFormatter::new();
        assert!(Number::new().validate_value(&json!("-1.5e3"), &f).unwrap().is_valid());
        assert_eq!(
            Number::new().validate_value(&json!("12abc"), &f).unwrap().errors(),
            ["Value must be a number."]
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let rule = Number::new().min(1).max(10);
        let f = MessageFormatter::new();
        assert!(rule.validate_value(&json!(1), &f).unwrap().is_valid());
        assert!(rule.validate_value(&json!(10), &f).unwrap().is_valid());
        assert_eq!(
            rule.validate_value(&json!(0.5), &f).unwrap().errors(),
            ["Value must be no less than 1."]
        );
    }

    #[test]
    fn attribute_name_and_custom_messages() {
        let rule = Number::new()
            .max(100)
            .too_big("{attribute} is over {max} ({value})");
        let data = json!({"amount": 250});
        let result = rule
            .validate_attribute(&data, "amount", &MessageFormatter::new())
            .unwrap();
        assert_eq!(result.errors(), ["amount is over 100 (250)"]);
    }

    #[test]
    fn declarative_form() {
        let rule: Number =
            serde_json::from_value(json!({"integerOnly": true, "max": 100})).unwrap();
        assert_eq!(rule, Number::integer().max(100));
    }
}
