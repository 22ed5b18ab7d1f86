//! Rule specifications
//!
//! A [`RuleSpecification`] maps attribute names to the descriptors that
//! should validate them. It can be assembled in code or read from JSON:
//!
//! ```json
//! {
//!   "amount": [
//!     {"rule": "number", "integerOnly": true, "min": 18},
//!     {"rule": "compare", "operator": "!=", "compareValue": 13, "type": "number"}
//!   ]
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use super::RuleDescriptor;
use crate::foundation::ConfigError;

/// Attribute name → rule descriptors, in declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RuleSpecification {
    attributes: IndexMap<String, Vec<RuleDescriptor>>,
}

impl RuleSpecification {
    /// An empty specification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the descriptors of `attribute`, replacing any earlier ones.
    #[must_use = "builder methods must be chained or built"]
    pub fn attribute<I>(mut self, attribute: impl Into<String>, descriptors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RuleDescriptor>,
    {
        self.attributes.insert(
            attribute.into(),
            descriptors.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Appends one descriptor to `attribute`, declaring it if needed.
    pub fn push(&mut self, attribute: impl Into<String>, descriptor: impl Into<RuleDescriptor>) {
        self.attributes
            .entry(attribute.into())
            .or_default()
            .push(descriptor.into());
    }

    /// Parses a JSON object of attribute → array of rule declarations.
    ///
    /// Only the document shape is checked here; each declaration is
    /// resolved by [`ValidatorFactory::create`](crate::ValidatorFactory::create).
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSpecification`] if `json` is not such an object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidSpecification(e.to_string()))
    }

    /// Number of declared attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// `true` if no attribute is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Declared attribute names in order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Descriptors declared for `attribute`.
    #[must_use]
    pub fn descriptors(&self, attribute: &str) -> Option<&[RuleDescriptor]> {
        self.attributes.get(attribute).map(Vec::as_slice)
    }
}

impl IntoIterator for RuleSpecification {
    type Item = (String, Vec<RuleDescriptor>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<RuleDescriptor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

impl FromIterator<(String, Vec<RuleDescriptor>)> for RuleSpecification {
    fn from_iter<T: IntoIterator<Item = (String, Vec<RuleDescriptor>)>>(iter: T) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}
