//! Comparison rule
//!
//! Compares a value with a literal or with another attribute of the same data
//! set using a relational operator, after casting both sides to a common type.
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::foundation::MessageFormatter;
//! use sieve_validator::rules::Compare;
//! use sieve_validator::Rule;
//!
//! // Without a compare value the rule checks `<attribute>_repeat`.
//! let confirm = Compare::builder().build().unwrap();
//! let form = json!({"password": "hunter2", "password_repeat": "hunter3"});
//!
//! let result = confirm.validate_attribute(&form, "password", &MessageFormatter::new()).unwrap();
//! assert_eq!(result.errors(), [r#"password must be equal to "password_repeat"."#]);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::value::{is_composite, is_numeric_str, to_number, to_text};
use crate::foundation::{ConfigError, DataSet, MessageFormatter, MessageParams, Rule, ValidationResult};
use crate::rules::{BARE_VALUE_LABEL, INVALID_MESSAGE};

/// Suffix appended to the validated attribute when no compare target is set.
pub const REPEAT_SUFFIX: &str = "_repeat";

// ============================================================================
// OPERATOR
// ============================================================================

/// Relational operator applied by [`Compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CompareOperator {
    /// `==`: loose equality after the cast.
    #[default]
    Equal,
    /// `===`: value and type equality after the cast.
    StrictEqual,
    /// `!=`
    NotEqual,
    /// `!==`
    StrictNotEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
}

impl CompareOperator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Equal,
        Self::StrictEqual,
        Self::NotEqual,
        Self::StrictNotEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
    ];

    /// The operator's symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::StrictEqual => "===",
            Self::NotEqual => "!=",
            Self::StrictNotEqual => "!==",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
        }
    }

    /// Message template used when no custom message is configured.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Equal | Self::StrictEqual => {
                r#"{attribute} must be equal to "{compareValueOrAttribute}"."#
            }
            Self::NotEqual | Self::StrictNotEqual => {
                r#"{attribute} must not be equal to "{compareValueOrAttribute}"."#
            }
            Self::GreaterThan => r#"{attribute} must be greater than "{compareValueOrAttribute}"."#,
            Self::GreaterThanOrEqual => {
                r#"{attribute} must be greater than or equal to "{compareValueOrAttribute}"."#
            }
            Self::LessThan => r#"{attribute} must be less than "{compareValueOrAttribute}"."#,
            Self::LessThanOrEqual => {
                r#"{attribute} must be less than or equal to "{compareValueOrAttribute}"."#
            }
        }
    }
}

impl FromStr for CompareOperator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ConfigError::unknown_operator(s))
    }
}

impl TryFrom<String> for CompareOperator {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CompareOperator> for String {
    fn from(op: CompareOperator) -> Self {
        op.as_str().to_owned()
    }
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TYPE
// ============================================================================

/// Type both operands are cast to before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareType {
    /// Text, compared byte by byte.
    #[default]
    String,
    /// 64-bit float.
    Number,
}

// ============================================================================
// COMPARE RULE
// ============================================================================

/// Compares a value with a literal or another attribute.
///
/// Built with [`Compare::builder`]; immutable afterwards.
///
/// Target resolution, first match wins:
///
/// 1. the literal compare value, if set;
/// 2. the compare attribute, if set;
/// 3. `<attribute>_repeat`.
///
/// Only the literal is available when validating a bare value; otherwise
/// [`ConfigError::MissingCompareTarget`] is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    operator: CompareOperator,
    compare_type: CompareType,
    compare_value: Option<Value>,
    compare_attribute: Option<String>,
    message: Cow<'static, str>,
}

impl Compare {
    /// Starts a builder with operator `==`, type `String` and no target.
    #[must_use]
    pub fn builder() -> CompareBuilder {
        CompareBuilder::default()
    }

    /// Shortcut for a literal comparison.
    pub fn against_value(operator: CompareOperator, value: impl Into<Value>) -> Self {
        Self::new(operator, CompareType::default(), Some(value.into()), None, None)
    }

    /// Shortcut for a comparison with another attribute.
    pub fn against_attribute(operator: CompareOperator, attribute: impl Into<String>) -> Self {
        Self::new(operator, CompareType::default(), None, Some(attribute.into()), None)
    }

    fn new(
        operator: CompareOperator,
        compare_type: CompareType,
        compare_value: Option<Value>,
        compare_attribute: Option<String>,
        message: Option<Cow<'static, str>>,
    ) -> Self {
        Self {
            operator,
            compare_type,
            compare_value,
            compare_attribute,
            message: message.unwrap_or(Cow::Borrowed(operator.default_message())),
        }
    }

    /// Casts both operands and applies `operator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use sieve_validator::rules::{Compare, CompareOperator, CompareType};
    ///
    /// let ge = CompareOperator::GreaterThanOrEqual;
    /// assert!(Compare::compare_values(ge, CompareType::Number, &json!("10"), &json!("9")));
    /// assert!(!Compare::compare_values(ge, CompareType::Number, &json!("abc"), &json!("9")));
    /// // Byte-wise text ordering:
    /// assert!(!Compare::compare_values(ge, CompareType::String, &json!("10"), &json!("9")));
    /// ```
    #[must_use]
    pub fn compare_values(
        operator: CompareOperator,
        compare_type: CompareType,
        value: &Value,
        compare_value: &Value,
    ) -> bool {
        use CompareOperator as Op;

        match compare_type {
            CompareType::Number => {
                let (a, b) = (to_number(value), to_number(compare_value));
                match operator {
                    Op::Equal | Op::StrictEqual => a == b,
                    Op::NotEqual | Op::StrictNotEqual => a != b,
                    Op::GreaterThan => a > b,
                    Op::GreaterThanOrEqual => a >= b,
                    Op::LessThan => a < b,
                    Op::LessThanOrEqual => a <= b,
                }
            }
            CompareType::String => {
                let (a, b) = (to_text(value), to_text(compare_value));
                match operator {
                    Op::Equal => loose_text_eq(&a, &b),
                    Op::StrictEqual => a == b,
                    Op::NotEqual => !loose_text_eq(&a, &b),
                    Op::StrictNotEqual => a != b,
                    Op::GreaterThan => a > b,
                    Op::GreaterThanOrEqual => a >= b,
                    Op::LessThan => a < b,
                    Op::LessThanOrEqual => a <= b,
                }
            }
        }
    }

    /// The configured operator.
    #[must_use]
    pub fn operator(&self) -> CompareOperator {
        self.operator
    }

    /// The configured cast type.
    #[must_use]
    pub fn compare_type(&self) -> CompareType {
        self.compare_type
    }

    /// The literal compare value, if set.
    #[must_use]
    pub fn compare_value(&self) -> Option<&Value> {
        self.compare_value.as_ref()
    }

    /// The explicit compare attribute, if set.
    #[must_use]
    pub fn compare_attribute(&self) -> Option<&str> {
        self.compare_attribute.as_deref()
    }

    /// The message template in effect.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attribute the rule compares with when validating `attribute`, or `None`
    /// if a literal compare value takes precedence.
    #[must_use]
    pub fn target_attribute(&self, attribute: &str) -> Option<String> {
        if self.compare_value.is_some() {
            return None;
        }
        Some(
            self.compare_attribute
                .clone()
                .unwrap_or_else(|| format!("{attribute}{REPEAT_SUFFIX}")),
        )
    }

    fn evaluate(
        &self,
        attribute: &str,
        value: &Value,
        target: &Value,
        target_attribute: Option<&str>,
        formatter: &MessageFormatter,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();

        if is_composite(value) {
            let mut params = MessageParams::new();
            params.push(("attribute".into(), attribute.to_owned()));
            result.add_error(formatter.format(INVALID_MESSAGE, &params));
            return result;
        }

        if !Self::compare_values(self.operator, self.compare_type, value, target) {
            let target_text = to_text(target);
            let value_or_attribute = target_attribute.map_or_else(|| target_text.clone(), str::to_owned);

            let mut params = MessageParams::new();
            params.push(("attribute".into(), attribute.to_owned()));
            params.push(("value".into(), to_text(value)));
            params.push(("compareValue".into(), target_text));
            params.push((
                "compareAttribute".into(),
                target_attribute.unwrap_or_default().to_owned(),
            ));
            params.push(("compareValueOrAttribute".into(), value_or_attribute));
            result.add_error(formatter.format(&self.message, &params));
        }

        result
    }
}

/// Loose text equality: two numeric strings are equal when their numbers are.
fn loose_text_eq(a: &str, b: &str) -> bool {
    if is_numeric_str(a) && is_numeric_str(b) {
        to_number(&Value::from(a)) == to_number(&Value::from(b))
    } else {
        a == b
    }
}

impl Rule for Compare {
    fn name(&self) -> &'static str {
        "compare"
    }

    fn validate_value(
        &self,
        value: &Value,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        let Some(target) = &self.compare_value else {
            return Err(ConfigError::missing_compare_target(
                self.compare_attribute.as_deref(),
            ));
        };
        Ok(self.evaluate(BARE_VALUE_LABEL, value, target, None, formatter))
    }

    fn validate_attribute(
        &self,
        data_set: &dyn DataSet,
        attribute: &str,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        let value = data_set.get_value(attribute);

        if let Some(target) = &self.compare_value {
            return Ok(self.evaluate(attribute, value, target, None, formatter));
        }

        let target_attribute = self
            .compare_attribute
            .clone()
            .unwrap_or_else(|| format!("{attribute}{REPEAT_SUFFIX}"));
        if !data_set.has_attribute(&target_attribute) {
            tracing::trace!(
                attribute,
                target = %target_attribute,
                "compare target attribute is absent, comparing against null"
            );
        }

        let target = data_set.get_value(&target_attribute);
        Ok(self.evaluate(attribute, value, target, Some(&target_attribute), formatter))
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Compare`].
///
/// The operator is kept as text until [`build`](Self::build) so that
/// operators coming from configuration are checked in one place. The default
/// message is picked at build time from the final operator.
///
/// Deserializes from the declarative form
/// `{"operator": ">=", "type": "number", "compareValue": 10}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompareBuilder {
    #[serde(default)]
    operator: Option<String>,
    #[serde(default, rename = "type")]
    compare_type: CompareType,
    #[serde(default)]
    compare_value: Option<Value>,
    #[serde(default)]
    compare_attribute: Option<String>,
    #[serde(default)]
    message: Option<Cow<'static, str>>,
}

impl CompareBuilder {
    /// Sets the operator from its symbol. Checked by [`build`](Self::build).
    #[must_use = "builder methods must be chained or built"]
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Sets the cast type.
    #[must_use = "builder methods must be chained or built"]
    pub fn compare_type(mut self, compare_type: CompareType) -> Self {
        self.compare_type = compare_type;
        self
    }

    /// Compares as numbers.
    #[must_use = "builder methods must be chained or built"]
    pub fn numeric(self) -> Self {
        self.compare_type(CompareType::Number)
    }

    /// Sets a literal to compare with. Takes precedence over any attribute.
    #[must_use = "builder methods must be chained or built"]
    pub fn compare_value(mut self, value: impl Into<Value>) -> Self {
        self.compare_value = Some(value.into());
        self
    }

    /// Sets the attribute to compare with.
    #[must_use = "builder methods must be chained or built"]
    pub fn compare_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.compare_attribute = Some(attribute.into());
        self
    }

    /// Overrides the operator's default message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Finalizes the rule.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownOperator`] if the operator symbol is not recognized.
    pub fn build(self) -> Result<Compare, ConfigError> {
        let operator = match self.operator.as_deref() {
            Some(symbol) => symbol.parse()?,
            None => CompareOperator::default(),
        };
        Ok(Compare::new(
            operator,
            self.compare_type,
            self.compare_value,
            self.compare_attribute,
            self.message,
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn formatter() -> MessageFormatter {
        MessageFormatter::new()
    }

    #[test]
    fn unknown_operator_fails_at_build() {
        let err = Compare::builder().operator("<>").build().unwrap_err();
        assert_eq!(err, ConfigError::unknown_operator("<>"));
    }

    #[test]
    fn operator_round_trips_through_symbol() {
        for op in CompareOperator::ALL {
            assert_eq!(op.as_str().parse::<CompareOperator>().unwrap(), op);
            assert_eq!(op.to_string(), op.as_str());
        }
    }

    #[test]
    fn default_target_is_repeat_attribute() {
        let rule = Compare::builder().build().unwrap();
        assert_eq!(rule.target_attribute("password").as_deref(), Some("password_repeat"));

        let rule = Compare::builder().compare_attribute("confirm").build().unwrap();
        assert_eq!(rule.target_attribute("password").as_deref(), Some("confirm"));

        let rule = Compare::builder()
            .compare_attribute("confirm")
            .compare_value(1)
            .build()
            .unwrap();
        assert_eq!(rule.target_attribute("password"), None);
    }

    #[test]
    fn literal_takes_precedence_over_attribute() {
        let rule = Compare::builder()
            .compare_value("a")
            .compare_attribute("other")
            .build()
            .unwrap();
        let data = json!({"field": "a", "other": "b"});
        assert!(rule.validate_attribute(&data, "field", &formatter()).unwrap().is_valid());
    }

    #[test]
    fn repeat_attribute_match() {
        let rule = Compare::builder().build().unwrap();
        let data = json!({"password": "s3cret", "password_repeat": "s3cret"});
        assert!(rule.validate_attribute(&data, "password", &formatter()).unwrap().is_valid());
    }

    #[test]
    fn absent_target_compares_against_null() {
        let rule = Compare::builder().build().unwrap();
        let data = json!({"password": ""});
        // "" == (string)null
        assert!(rule.validate_attribute(&data, "password", &formatter()).unwrap().is_valid());
    }

    #[test]
    fn bare_value_requires_literal() {
        let rule = Compare::builder().compare_attribute("x").build().unwrap();
        let err = rule.validate_value(&json!(1), &formatter()).unwrap_err();
        assert_eq!(err, ConfigError::missing_compare_target(Some("x")));

        let rule = Compare::builder().build().unwrap();
        assert!(matches!(
            rule.validate_value(&json!(1), &formatter()),
            Err(ConfigError::MissingCompareTarget { .. })
        ));
    }

    #[test]
    fn composite_value_is_invalid() {
        let rule = Compare::against_value(CompareOperator::Equal, 1);
        let result = rule.validate_value(&json!([1]), &formatter()).unwrap();
        assert_eq!(result.errors(), ["Value is invalid."]);

        let data = json!({"tags": {"a": 1}});
        let result = rule.validate_attribute(&data, "tags", &formatter()).unwrap();
        assert_eq!(result.errors(), ["tags is invalid."]);
    }

    #[test]
    fn message_placeholders_are_substituted() {
        let rule = Compare::builder()
            .operator(">")
            .numeric()
            .compare_attribute("min")
            .message("{attribute}={value} vs {compareAttribute}={compareValue} ({compareValueOrAttribute})")
            .build()
            .unwrap();
        let data = json!({"max": 3, "min": 5.0});

        let result = rule.validate_attribute(&data, "max", &formatter()).unwrap();
        assert_eq!(result.errors(), ["max=3 vs min=5 (min)"]);
    }

    #[test]
    fn literal_message_uses_value_for_value_or_attribute() {
        let rule = Compare::builder().operator("<=").numeric().compare_value(10).build().unwrap();
        let result = rule.validate_value(&json!(11), &formatter()).unwrap();
        assert_eq!(
            result.errors(),
            [r#"Value must be less than or equal to "10"."#]
        );
    }

    #[test]
    fn default_message_follows_final_operator() {
        let rule = Compare::builder().operator("==").operator("!=").build().unwrap();
        assert_eq!(rule.message(), CompareOperator::NotEqual.default_message());

        let rule = Compare::builder().message("custom").operator(">").build().unwrap();
        assert_eq!(rule.message(), "custom");
    }

    #[test]
    fn loose_and_strict_text_equality() {
        let eq = |op, a: Value, b: Value| Compare::compare_values(op, CompareType::String, &a, &b);

        assert!(eq(CompareOperator::Equal, json!("1.0"), json!("1")));
        assert!(!eq(CompareOperator::StrictEqual, json!("1.0"), json!("1")));
        assert!(eq(CompareOperator::StrictEqual, json!(1), json!("1")));
        assert!(eq(CompareOperator::StrictNotEqual, json!("abc"), json!("ABC")));
        assert!(!eq(CompareOperator::NotEqual, json!("10"), json!("1e1")));
    }

    #[test]
    fn deserializes_declarative_form() {
        let builder: CompareBuilder = serde_json::from_value(json!({
            "operator": ">=",
            "type": "number",
            "compareValue": 18,
        }))
        .unwrap();
        let rule = builder.build().unwrap();
        assert_eq!(rule.operator(), CompareOperator::GreaterThanOrEqual);
        assert_eq!(rule.compare_type(), CompareType::Number);
        assert_eq!(rule.compare_value(), Some(&json!(18)));
    }

    #[test]
    fn declarative_unknown_field_is_rejected() {
        let parsed = serde_json::from_value::<CompareBuilder>(json!({"operatr": "=="}));
        assert!(parsed.is_err());
    }
}
