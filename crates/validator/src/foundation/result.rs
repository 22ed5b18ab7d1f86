//! Validation results
//!
//! A [`ValidationResult`] accumulates error messages for one validation unit:
//! a single bare-value check, or one attribute inside a validator pass.
//! [`ValidationResults`] is the validator's output, one result per declared
//! attribute in declaration order.

use indexmap::IndexMap;
use serde::Serialize;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Ordered list of error messages produced by one validation unit.
///
/// The result is valid exactly when no error was ever added.
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid());
///
/// result.add_error("Value is too big.");
/// result.add_error("Value is too big.");
/// assert!(!result.is_valid());
/// assert_eq!(result.errors(), ["Value is too big.", "Value is too big."]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// Creates an empty (valid) result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result holding a single error.
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// Appends an error. Duplicates are kept.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Returns true if no error has been added.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All messages in the order they were added.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Number of messages.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The first message, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// Appends every message of `other` after the existing ones.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Consumes the result, returning its messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl Extend<String> for ValidationResult {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<String> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ============================================================================
// VALIDATION RESULTS
// ============================================================================

/// Attribute name → result mapping returned by
/// [`Validator::validate`](crate::Validator::validate).
///
/// Iteration follows the order in which attributes were declared in the
/// rule specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResults {
    results: IndexMap<String, ValidationResult>,
}

impl ValidationResults {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            results: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, attribute: impl Into<String>, result: ValidationResult) {
        self.results.insert(attribute.into(), result);
    }

    /// Result for one attribute, or `None` if the attribute was not declared.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&ValidationResult> {
        self.results.get(attribute)
    }

    /// Returns true if every attribute is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.results.values().all(ValidationResult::is_valid)
    }

    /// Number of attributes (valid or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if no attribute was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Total number of error messages across all attributes.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.results.values().map(ValidationResult::error_count).sum()
    }

    /// Attribute names in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    /// `(attribute, result)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.results.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// First error of every invalid attribute, in declaration order.
    ///
    /// Convenient for form-style display where one message per field is shown.
    #[must_use]
    pub fn first_errors(&self) -> IndexMap<&str, &str> {
        self.results
            .iter()
            .filter_map(|(attr, result)| result.first_error().map(|e| (attr.as_str(), e)))
            .collect()
    }

    /// Consumes the mapping.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, ValidationResult> {
        self.results
    }
}

impl IntoIterator for ValidationResults {
    type Item = (String, ValidationResult);
    type IntoIter = indexmap::map::IntoIter<String, ValidationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.first_error(), None);
    }

    #[test]
    fn merge_keeps_evaluation_order() {
        let mut result = ValidationResult::with_error("a");
        let mut other = ValidationResult::new();
        other.add_error("b");
        other.add_error("c");

        result.merge(other);
        result.merge(ValidationResult::new());
        assert_eq!(result.errors(), ["a", "b", "c"]);
    }

    #[test]
    fn collect_from_messages() {
        let result: ValidationResult = ["x", "y"].into_iter().map(String::from).collect();
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.into_errors(), vec!["x".to_owned(), "y".to_owned()]);
    }

    #[test]
    fn results_preserve_declaration_order() {
        let mut results = ValidationResults::default();
        results.insert("zeta", ValidationResult::with_error("z"));
        results.insert("alpha", ValidationResult::new());
        results.insert("mid", ValidationResult::with_error("m"));

        assert_eq!(results.attributes().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert!(!results.is_valid());
        assert_eq!(results.error_count(), 2);

        let firsts = results.first_errors();
        assert_eq!(firsts.keys().copied().collect::<Vec<_>>(), ["zeta", "mid"]);
    }

    #[test]
    fn serializes_as_attribute_map() {
        let mut results = ValidationResults::default();
        results.insert("age", ValidationResult::with_error("too young"));
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json, serde_json::json!({"age": {"errors": ["too young"]}}));
    }
}
