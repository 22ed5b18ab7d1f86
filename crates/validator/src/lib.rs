//! # sieve-validator
//!
//! A rule-based validation engine for attribute data sets.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let spec = RuleSpecification::new()
//!     .attribute("name", [RuleDescriptor::rule(Required::new())])
//!     .attribute(
//!         "password",
//!         [
//!             RuleDescriptor::rule(HasLength::new().min(8)),
//!             RuleDescriptor::declared(json!({"rule": "compare"})),
//!         ],
//!     );
//!
//! let validator = ValidatorFactory::new().create(spec).unwrap();
//! let results = validator
//!     .validate(&json!({
//!         "name": "Ada",
//!         "password": "correct horse",
//!         "password_repeat": "correct horse",
//!     }))
//!     .unwrap();
//! assert!(results.is_valid());
//! ```
//!
//! ## Concepts
//!
//! - A [`Rule`] checks one value, or one attribute of a [`DataSet`], and
//!   returns a [`ValidationResult`] holding zero or more messages.
//! - A [`RuleSet`] applies several rules to the same attribute and merges
//!   their messages.
//! - A [`Validator`] maps attribute names to rule sets and produces
//!   [`ValidationResults`] in declaration order.
//! - A [`ValidatorFactory`] resolves a [`RuleSpecification`] (rule
//!   instances, closures or JSON declarations) into a validator.
//!
//! Configuration mistakes are [`ConfigError`]s, kept apart from validation
//! failures, which are ordinary messages.
//!
//! ## Built-in Rules
//!
//! [`Required`](rules::Required), [`Number`](rules::Number),
//! [`HasLength`](rules::HasLength), [`Compare`](rules::Compare),
//! [`Callback`](rules::Callback), and with the `regex` feature
//! [`MatchRegularExpression`](rules::MatchRegularExpression).

mod factory;
pub mod foundation;
pub mod prelude;
pub mod rules;
mod validator;

pub use factory::{RuleDescriptor, RuleSpecification, ValidatorFactory};
pub use foundation::{
    ConfigError, DataSet, MessageFormatter, ObjectDataSet, Rule, RuleSet, Translator,
    ValidationResult, ValidationResults,
};
pub use validator::Validator;
