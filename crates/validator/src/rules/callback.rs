//! Callable rule

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{ConfigError, MessageFormatter, MessageParams, Rule, ValidationResult};

type CallbackFn = dyn Fn(&Value) -> ValidationResult + Send + Sync;

/// Adapts a closure `Fn(&Value) -> ValidationResult` into a [`Rule`].
///
/// The closure's messages are final text; when a translator is configured
/// each of them still passes through it (with no parameters).
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use sieve_validator::foundation::{MessageFormatter, ValidationResult};
/// use sieve_validator::rules::Callback;
/// use sieve_validator::Rule;
///
/// let not_thirteen = Callback::new(|value: &Value| {
///     let mut result = ValidationResult::new();
///     if value == 13 {
///         result.add_error("Value should not be 13.");
///     }
///     result
/// });
///
/// let f = MessageFormatter::new();
/// assert!(not_thirteen.validate_value(&json!(12), &f).unwrap().is_valid());
/// assert!(!not_thirteen.validate_value(&json!(13), &f).unwrap().is_valid());
/// ```
#[derive(Clone)]
pub struct Callback {
    callback: Arc<CallbackFn>,
}

impl Callback {
    /// Wraps `callback`.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Value) -> ValidationResult + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    pub(crate) fn from_shared(callback: Arc<CallbackFn>) -> Self {
        Self { callback }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("callback", &"<function>")
            .finish()
    }
}

impl Rule for Callback {
    fn name(&self) -> &'static str {
        "callback"
    }

    fn validate_value(
        &self,
        value: &Value,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        let result = (self.callback)(value);
        if !formatter.has_translator() || result.is_valid() {
            return Ok(result);
        }

        let params = MessageParams::new();
        Ok(result
            .into_iter()
            .map(|message| formatter.format(&message, &params))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn messages_pass_through_untranslated() {
        let rule = Callback::new(|_: &Value| ValidationResult::with_error("{attribute} stays"));
        let result = rule.validate_value(&json!(1), &MessageFormatter::new()).unwrap();
        assert_eq!(result.errors(), ["{attribute} stays"]);
    }

    #[test]
    fn messages_are_translated() {
        let rule = Callback::new(|_: &Value| ValidationResult::with_error("nope"));
        let formatter =
            MessageFormatter::with_translator(|m: &str, _: &MessageParams| m.to_uppercase());
        let result = rule.validate_value(&json!(1), &formatter).unwrap();
        assert_eq!(result.errors(), ["NOPE"]);
    }

    #[test]
    fn attribute_validation_sees_attribute_value() {
        let rule = Callback::new(|value: &Value| {
            if value.is_string() {
                ValidationResult::new()
            } else {
                ValidationResult::with_error("not text")
            }
        });
        let data = json!({"a": "x", "b": 2});
        let f = MessageFormatter::new();
        assert!(rule.validate_attribute(&data, "a", &f).unwrap().is_valid());
        assert!(!rule.validate_attribute(&data, "b", &f).unwrap().is_valid());
    }
}
