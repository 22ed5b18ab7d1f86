//! Data sets
//!
//! A [`DataSet`] is the named bag of values a validator runs against. It only
//! has to answer two questions: what is the value of an attribute, and does the
//! attribute exist at all. The two are distinct: an attribute can exist and be
//! `null`.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Shared `null` handed out for absent attributes.
static NULL: Value = Value::Null;

// ============================================================================
// DATA SET TRAIT
// ============================================================================

/// Lookup of attribute values by name.
///
/// `get_value` returns `null` for absent attributes; callers that must tell
/// absence from an explicit `null` check [`has_attribute`](Self::has_attribute).
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::DataSet;
/// use serde_json::json;
///
/// let data = json!({"nickname": null});
/// assert!(data.has_attribute("nickname"));
/// assert!(!data.has_attribute("email"));
/// assert!(data.get_value("email").is_null());
/// ```
pub trait DataSet {
    /// Value of `attribute`, or `null` when absent.
    fn get_value(&self, attribute: &str) -> &Value;

    /// Returns true if `attribute` is present, even when its value is `null`.
    fn has_attribute(&self, attribute: &str) -> bool;
}

impl<D: DataSet + ?Sized> DataSet for &D {
    fn get_value(&self, attribute: &str) -> &Value {
        (**self).get_value(attribute)
    }

    fn has_attribute(&self, attribute: &str) -> bool {
        (**self).has_attribute(attribute)
    }
}

impl DataSet for Map<String, Value> {
    fn get_value(&self, attribute: &str) -> &Value {
        self.get(attribute).unwrap_or(&NULL)
    }

    fn has_attribute(&self, attribute: &str) -> bool {
        self.contains_key(attribute)
    }
}

/// Objects expose their members; any other value behaves as an empty data set.
impl DataSet for Value {
    fn get_value(&self, attribute: &str) -> &Value {
        self.as_object()
            .and_then(|object| object.get(attribute))
            .unwrap_or(&NULL)
    }

    fn has_attribute(&self, attribute: &str) -> bool {
        self.as_object()
            .is_some_and(|object| object.contains_key(attribute))
    }
}

impl<S: BuildHasher> DataSet for HashMap<String, Value, S> {
    fn get_value(&self, attribute: &str) -> &Value {
        self.get(attribute).unwrap_or(&NULL)
    }

    fn has_attribute(&self, attribute: &str) -> bool {
        self.contains_key(attribute)
    }
}

impl DataSet for BTreeMap<String, Value> {
    fn get_value(&self, attribute: &str) -> &Value {
        self.get(attribute).unwrap_or(&NULL)
    }

    fn has_attribute(&self, attribute: &str) -> bool {
        self.contains_key(attribute)
    }
}

impl<S: BuildHasher> DataSet for IndexMap<String, Value, S> {
    fn get_value(&self, attribute: &str) -> &Value {
        self.get(attribute).unwrap_or(&NULL)
    }

    fn has_attribute(&self, attribute: &str) -> bool {
        self.contains_key(attribute)
    }
}

// ============================================================================
// OBJECT DATA SET
// ============================================================================

/// A data set built from any serializable value.
///
/// Struct fields become attributes under their serialized names, so
/// `#[serde(rename)]` and friends apply.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use sieve_validator::foundation::{DataSet, ObjectDataSet};
///
/// #[derive(Serialize)]
/// struct Signup { email: String, age: Option<u8> }
///
/// let data = ObjectDataSet::from_serialize(&Signup { email: "a@b.c".into(), age: None }).unwrap();
/// assert_eq!(data.get_value("email"), "a@b.c");
/// assert!(data.has_attribute("age"));
/// assert!(data.get_value("age").is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectDataSet {
    attributes: Map<String, Value>,
}

impl ObjectDataSet {
    /// Creates an empty data set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `source` and uses its top-level fields as attributes.
    ///
    /// Sources that serialize to something other than a map yield an empty
    /// data set.
    pub fn from_serialize<T: Serialize + ?Sized>(source: &T) -> Result<Self, serde_json::Error> {
        let attributes = match serde_json::to_value(source)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(Self { attributes })
    }

    /// Adds or replaces an attribute.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(attribute.into(), value.into());
        self
    }

    /// Adds or replaces an attribute in place.
    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(attribute.into(), value.into());
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Consumes the data set, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.attributes
    }
}

impl From<Map<String, Value>> for ObjectDataSet {
    fn from(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ObjectDataSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl DataSet for ObjectDataSet {
    fn get_value(&self, attribute: &str) -> &Value {
        self.attributes.get_value(attribute)
    }

    fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.has_attribute(attribute)
    }
}
