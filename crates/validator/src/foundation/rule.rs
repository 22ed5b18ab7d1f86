//! The rule trait
//!
//! Every validation predicate, built-in or user supplied, implements [`Rule`].

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{ConfigError, DataSet, MessageFormatter, ValidationResult};

/// A single, reusable validation predicate.
///
/// Rules hold their configuration immutably and can be shared across threads
/// and across any number of validation calls.
///
/// There are two evaluation entry points:
///
/// - [`validate_value`](Self::validate_value) checks a bare value. Every rule
///   implements it.
/// - [`validate_attribute`](Self::validate_attribute) checks one attribute of a
///   [`DataSet`]. The default looks the value up and delegates to
///   `validate_value`; rules that need other attributes (comparison) or the
///   attribute name override it.
///
/// Validation failures go into the returned [`ValidationResult`]. An `Err` is
/// reserved for configuration problems and aborts the surrounding call.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use sieve_validator::foundation::{ConfigError, MessageFormatter, MessageParams, Rule, ValidationResult};
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Rule for Even {
///     fn name(&self) -> &'static str { "even" }
///
///     fn validate_value(
///         &self,
///         value: &Value,
///         formatter: &MessageFormatter,
///     ) -> Result<ValidationResult, ConfigError> {
///         let mut result = ValidationResult::new();
///         if value.as_i64().is_none_or(|n| n % 2 != 0) {
///             result.add_error(formatter.format("Value must be even.", &MessageParams::new()));
///         }
///         Ok(result)
///     }
/// }
///
/// let formatter = MessageFormatter::new();
/// assert!(Even.validate_value(&json!(4), &formatter).unwrap().is_valid());
/// assert!(!Even.validate_value(&json!(3), &formatter).unwrap().is_valid());
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Validates a bare value.
    fn validate_value(
        &self,
        value: &Value,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError>;

    /// Validates `attribute` of `data_set`.
    fn validate_attribute(
        &self,
        data_set: &dyn DataSet,
        attribute: &str,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        self.validate_value(data_set.get_value(attribute), formatter)
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn validate_value(
        &self,
        value: &Value,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        (**self).validate_value(value, formatter)
    }

    fn validate_attribute(
        &self,
        data_set: &dyn DataSet,
        attribute: &str,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        (**self).validate_attribute(data_set, attribute, formatter)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn validate_value(
        &self,
        value: &Value,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        (**self).validate_value(value, formatter)
    }

    fn validate_attribute(
        &self,
        data_set: &dyn DataSet,
        attribute: &str,
        formatter: &MessageFormatter,
    ) -> Result<ValidationResult, ConfigError> {
        (**self).validate_attribute(data_set, attribute, formatter)
    }
}

/// Shared, type-erased rule as stored in rule sets.
pub type SharedRule = Arc<dyn Rule>;
