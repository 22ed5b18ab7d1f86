//! Built-in rules
//!
//! - [`Compare`]: relational comparison with a literal or another attribute
//! - [`Required`]: value must not be empty
//! - [`Number`]: numeric (or integer) value within optional bounds
//! - [`HasLength`]: string length within optional bounds
//! - [`MatchRegularExpression`]: string matches (or does not match) a pattern
//! - [`Callback`]: adapts a closure `Fn(&Value) -> ValidationResult`
//!
//! Messages are templates; `{attribute}` is the attribute name, or `Value`
//! when a bare value is validated.

mod callback;
mod compare;
mod length;
mod number;
#[cfg(feature = "regex")]
mod pattern;
mod required;

pub use callback::Callback;
pub use compare::{Compare, CompareBuilder, CompareOperator, CompareType, REPEAT_SUFFIX};
pub use length::HasLength;
pub use number::Number;
#[cfg(feature = "regex")]
pub use pattern::{MatchRegularExpression, PatternConfig};
pub use required::Required;

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::value::to_text;
use crate::foundation::MessageParams;

/// Stand-in for `{attribute}` when there is no attribute name.
pub(crate) const BARE_VALUE_LABEL: &str = "Value";

/// Generic failure message for values a rule cannot interpret.
pub(crate) const INVALID_MESSAGE: &str = "{attribute} is invalid.";

/// `attribute` and `value` parameters shared by most messages.
pub(crate) fn base_params(attribute: &str, value: &Value) -> MessageParams {
    let mut params = MessageParams::new();
    params.push((Cow::Borrowed("attribute"), attribute.to_owned()));
    params.push((Cow::Borrowed("value"), to_text(value)));
    params
}
