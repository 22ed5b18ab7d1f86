//! Message templates and translation
//!
//! Rules describe failures with a template such as
//! `{attribute} must be greater than "{compareValueOrAttribute}".` plus a list
//! of parameters. A [`MessageFormatter`] turns that pair into the string stored
//! in a [`ValidationResult`](crate::foundation::ValidationResult): through the
//! configured [`Translator`] when there is one, by plain `{name}` substitution
//! otherwise.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

/// Ordered template parameters. Rules rarely need more than five.
pub type MessageParams = SmallVec<[(Cow<'static, str>, String); 5]>;

// ============================================================================
// TRANSLATOR
// ============================================================================

/// External collaborator that localizes error messages.
///
/// Receives the raw template and its parameters; placeholder substitution is
/// the translator's responsibility when one is configured.
///
/// Implemented for any `Fn(&str, &MessageParams) -> String`.
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::{MessageFormatter, MessageParams};
///
/// let formatter = MessageFormatter::with_translator(|message: &str, _: &MessageParams| {
///     format!("[de] {message}")
/// });
/// assert_eq!(formatter.format("{attribute} is invalid.", &MessageParams::new()), "[de] {attribute} is invalid.");
/// ```
pub trait Translator: Send + Sync {
    /// Returns the final message for `message` with `params`.
    fn translate(&self, message: &str, params: &MessageParams) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, &MessageParams) -> String + Send + Sync,
{
    fn translate(&self, message: &str, params: &MessageParams) -> String {
        self(message, params)
    }
}

// ============================================================================
// FORMATTER
// ============================================================================

/// Renders rule messages, optionally through a [`Translator`].
///
/// Cheap to clone; the translator is shared.
#[derive(Clone, Default)]
pub struct MessageFormatter {
    translator: Option<Arc<dyn Translator>>,
}

impl MessageFormatter {
    /// A formatter that only substitutes placeholders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A formatter that hands every message to `translator`.
    pub fn with_translator(translator: impl Translator + 'static) -> Self {
        Self {
            translator: Some(Arc::new(translator)),
        }
    }

    /// A formatter sharing an existing translator.
    #[must_use]
    pub fn from_shared(translator: Option<Arc<dyn Translator>>) -> Self {
        Self { translator }
    }

    /// Returns true if a translator is configured.
    #[must_use]
    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// Produces the final message for `template`.
    #[must_use]
    pub fn format(&self, template: &str, params: &MessageParams) -> String {
        match &self.translator {
            Some(translator) => translator.translate(template, params),
            None => substitute(template, params),
        }
    }
}

impl fmt::Debug for MessageFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageFormatter")
            .field("translator", &self.translator.as_ref().map(|_| "<translator>"))
            .finish()
    }
}

/// Replaces every `{name}` in `template` whose name appears in `params`.
///
/// Unknown placeholders are left untouched. Substituted text is never
/// re-scanned, so parameter values containing braces are inserted verbatim.
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::{substitute, MessageParams};
///
/// let mut params = MessageParams::new();
/// params.push(("attribute".into(), "age".to_owned()));
/// assert_eq!(substitute("{attribute} is {unknown}", &params), "age is {unknown}");
/// ```
#[must_use]
pub fn substitute(template: &str, params: &MessageParams) -> String {
    if params.is_empty() || !template.contains('{') {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let Some(close) = tail.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &tail[..close];
        match params.iter().find(|(key, _)| key.as_ref() == name) {
            Some((_, value)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&'static str, &str)]) -> MessageParams {
        pairs
            .iter()
            .map(|(k, v)| (Cow::Borrowed(*k), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn substitutes_known_placeholders() {
        let p = params(&[("attribute", "amount"), ("max", "100")]);
        assert_eq!(
            substitute("{attribute} must be no greater than {max}.", &p),
            "amount must be no greater than 100."
        );
    }

    #[test]
    fn leaves_unknown_and_unterminated_placeholders() {
        let p = params(&[("a", "1")]);
        assert_eq!(substitute("{a}{b} {a", &p), "1{b} {a");
        assert_eq!(substitute("{{a}}", &p), "{1}");
    }

    #[test]
    fn does_not_rescan_substituted_values() {
        let p = params(&[("value", "{attribute}"), ("attribute", "x")]);
        assert_eq!(substitute("{value}", &p), "{attribute}");
    }

    #[test]
    fn formatter_without_translator_substitutes() {
        let formatter = MessageFormatter::new();
        assert!(!formatter.has_translator());
        assert_eq!(formatter.format("{a}!", &params(&[("a", "hi")])), "hi!");
    }

    #[test]
    fn formatter_delegates_to_translator() {
        let formatter =
            MessageFormatter::with_translator(|m: &str, p: &MessageParams| format!("{m}|{}", p.len()));
        assert_eq!(formatter.format("{a}", &params(&[("a", "x")])), "{a}|1");
    }
}
