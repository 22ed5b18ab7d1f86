//! Configuration errors
//!
//! These describe misuse of the engine (a bad operator, an unresolvable rule
//! descriptor, a comparison with nothing to compare against). They are never
//! recorded in a [`ValidationResult`](crate::foundation::ValidationResult):
//! invalid *data* produces result entries, invalid *configuration* aborts the
//! call that triggered it.

/// An error raised while building or misusing rules.
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::ConfigError;
/// use sieve_validator::rules::CompareOperator;
///
/// let err = "<>".parse::<CompareOperator>().unwrap_err();
/// assert_eq!(err, ConfigError::unknown_operator("<>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The comparison operator is not one of `==`, `===`, `!=`, `!==`, `>`, `>=`, `<`, `<=`.
    #[error("unknown comparison operator `{operator}`")]
    UnknownOperator {
        /// The operator as supplied.
        operator: String,
    },

    /// A rule descriptor in a specification does not resolve to a rule.
    #[error("invalid rule descriptor #{index} for attribute `{attribute}`: {reason}")]
    InvalidRuleDescriptor {
        /// Attribute the descriptor was declared for.
        attribute: String,
        /// Position of the descriptor in the attribute's rule list.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A comparison rule was asked to validate a bare value without a literal
    /// compare value, so there is no attribute to default against.
    #[error("comparison rule has no compare value and no data set to resolve `{target}` from")]
    MissingCompareTarget {
        /// The attribute name the rule would have looked up, or `<unset>`.
        target: String,
    },

    /// A regular expression failed to compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// A declarative specification document could not be parsed.
    #[error("invalid rule specification: {0}")]
    InvalidSpecification(String),
}

impl ConfigError {
    /// Creates an [`UnknownOperator`](Self::UnknownOperator) error.
    pub fn unknown_operator(operator: impl Into<String>) -> Self {
        Self::UnknownOperator {
            operator: operator.into(),
        }
    }

    /// Creates an [`InvalidRuleDescriptor`](Self::InvalidRuleDescriptor) error.
    pub fn invalid_descriptor(
        attribute: impl Into<String>,
        index: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRuleDescriptor {
            attribute: attribute.into(),
            index,
            reason: reason.into(),
        }
    }

    /// Creates a [`MissingCompareTarget`](Self::MissingCompareTarget) error.
    pub fn missing_compare_target(target: Option<&str>) -> Self {
        Self::MissingCompareTarget {
            target: target.unwrap_or("<unset>").to_owned(),
        }
    }

    /// Returns true if this error was raised while resolving a specification.
    #[must_use]
    pub fn is_descriptor_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRuleDescriptor { .. } | Self::InvalidSpecification(_)
        )
    }
}
