//! Prelude module for convenient imports.
//!
//! Provides a single `use sieve_validator::prelude::*;` import that brings
//! in the engine types and every built-in rule.

// ============================================================================
// FOUNDATION: Core traits, results, errors
// ============================================================================

pub use crate::foundation::{
    ConfigError, DataSet, MessageFormatter, MessageParams, ObjectDataSet, Rule, RuleSet,
    SharedRule, Translator, ValidationResult, ValidationResults,
};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

#[cfg(feature = "regex")]
pub use crate::rules::MatchRegularExpression;
pub use crate::rules::{
    Callback, Compare, CompareOperator, CompareType, HasLength, Number, Required,
};

// ============================================================================
// ENGINE: Validator and factory
// ============================================================================

pub use crate::{RuleDescriptor, RuleSpecification, Validator, ValidatorFactory};
