//! Rule descriptors
//!
//! A descriptor is one entry in an attribute's rule list before the factory
//! has turned it into a [`Rule`]: a ready rule, a closure, or a declarative
//! JSON object such as `{"rule": "number", "max": 100}`.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::foundation::{ConfigError, Rule, SharedRule, ValidationResult};
#[cfg(feature = "regex")]
use crate::rules::PatternConfig;
use crate::rules::{Callback, CompareBuilder, HasLength, Number, Required};

type CallableFn = dyn Fn(&Value) -> ValidationResult + Send + Sync;

/// An unresolved entry of a [`RuleSpecification`](crate::RuleSpecification).
#[derive(Clone)]
pub enum RuleDescriptor {
    /// A rule instance, used as is.
    Rule(SharedRule),
    /// A closure, adapted into a [`Callback`] rule.
    Callable(Arc<CallableFn>),
    /// A declarative description, resolved by name.
    Declared(Value),
}

impl RuleDescriptor {
    /// Describes a rule instance.
    pub fn rule(rule: impl Rule + 'static) -> Self {
        Self::Rule(Arc::new(rule))
    }

    /// Describes a closure rule.
    pub fn callable<F>(callable: F) -> Self
    where
        F: Fn(&Value) -> ValidationResult + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(callable))
    }

    /// Describes a rule declaratively.
    #[must_use]
    pub fn declared(declaration: Value) -> Self {
        Self::Declared(declaration)
    }

    /// Resolves the descriptor into a shared rule.
    ///
    /// `attribute` and `index` locate the descriptor in error messages.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidRuleDescriptor`] if a declaration is not an
    ///   object, names an unknown rule, or has malformed options.
    /// - Any construction error of the declared rule itself, such as
    ///   [`ConfigError::UnknownOperator`].
    pub fn resolve(self, attribute: &str, index: usize) -> Result<SharedRule, ConfigError> {
        match self {
            Self::Rule(rule) => Ok(rule),
            Self::Callable(callable) => Ok(Arc::new(Callback::from_shared(callable))),
            Self::Declared(declaration) => resolve_declaration(declaration, attribute, index),
        }
    }
}

impl fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(rule) => f.debug_tuple("Rule").field(rule).finish(),
            Self::Callable(_) => f.debug_tuple("Callable").field(&"<function>").finish(),
            Self::Declared(value) => f.debug_tuple("Declared").field(value).finish(),
        }
    }
}

impl From<SharedRule> for RuleDescriptor {
    fn from(rule: SharedRule) -> Self {
        Self::Rule(rule)
    }
}

impl From<Value> for RuleDescriptor {
    fn from(declaration: Value) -> Self {
        Self::Declared(declaration)
    }
}

/// Anything deserialized becomes a declaration; validity is checked at
/// resolution time so the error can name the attribute and position.
impl<'de> Deserialize<'de> for RuleDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::Declared)
    }
}

// ============================================================================
// DECLARATIONS
// ============================================================================

/// Built-in rules addressable by name.
#[derive(Debug, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
enum DeclaredRule {
    Required(Required),
    Number(Number),
    HasLength(HasLength),
    #[cfg(feature = "regex")]
    MatchRegularExpression(PatternConfig),
    Compare(CompareBuilder),
}

impl DeclaredRule {
    fn build(self) -> Result<SharedRule, ConfigError> {
        Ok(match self {
            Self::Required(rule) => Arc::new(rule),
            Self::Number(rule) => Arc::new(rule),
            Self::HasLength(rule) => Arc::new(rule),
            #[cfg(feature = "regex")]
            Self::MatchRegularExpression(config) => Arc::new(config.build()?),
            Self::Compare(builder) => Arc::new(builder.build()?),
        })
    }
}

fn resolve_declaration(
    declaration: Value,
    attribute: &str,
    index: usize,
) -> Result<SharedRule, ConfigError> {
    if !declaration.is_object() {
        return Err(ConfigError::invalid_descriptor(
            attribute,
            index,
            format!(
                "expected a rule instance, a callable or a rule declaration object, found {}",
                describe(&declaration)
            ),
        ));
    }

    let declared: DeclaredRule = serde_json::from_value(declaration)
        .map_err(|e| ConfigError::invalid_descriptor(attribute, index, e.to_string()))?;
    declared.build()
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => format!("boolean `{b}`"),
        Value::Number(n) => format!("number `{n}`"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(_) => "an array".to_owned(),
        Value::Object(_) => "an object".to_owned(),
    }
}
