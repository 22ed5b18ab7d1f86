//! Core validation types and traits
//!
//! This module contains the building blocks every other part of the crate
//! is made of:
//!
//! - **Results**: [`ValidationResult`], [`ValidationResults`]
//! - **Rules**: [`Rule`], [`RuleSet`]
//! - **Data**: [`DataSet`], [`ObjectDataSet`], value coercion helpers
//! - **Messages**: [`MessageFormatter`], [`Translator`]
//! - **Errors**: [`ConfigError`]
//!
//! # Architecture
//!
//! ## 1. Data errors are values
//!
//! A failed rule adds a message to a [`ValidationResult`]. Rules never stop
//! each other: a rule set with three failing rules reports three messages.
//!
//! ## 2. Configuration errors abort
//!
//! Misconfiguration (unknown operator, unresolvable descriptor, comparison
//! without a target) is a [`ConfigError`] returned as `Err`, never a result
//! entry.
//!
//! ## 3. Immutable, shareable rules
//!
//! Rules are finalized by their builders and shared as `Arc<dyn Rule>`. The
//! same rule may run concurrently on different threads.

mod config_error;
mod data_set;
mod message;
mod result;
mod rule;
mod rule_set;
pub mod value;

pub use config_error::ConfigError;
pub use data_set::{DataSet, ObjectDataSet};
pub use message::{MessageFormatter, MessageParams, Translator, substitute};
pub use result::{ValidationResult, ValidationResults};
pub use rule::{Rule, SharedRule};
pub use rule_set::RuleSet;
