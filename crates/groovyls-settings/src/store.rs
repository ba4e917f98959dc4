//! Read-only settings lookup

use serde_json::{Map, Value};
use std::collections::HashMap;

/// A read-only key-value settings surface.
///
/// Keys are dotted section paths such as `groovy.additional.libraries`.
/// A stored JSON `null` is reported as unset.
pub trait ConfigurationStore {
    /// Look up the value stored under `key`.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Look up `key` and return it only if it holds a string.
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Whether any value is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// One settings document, such as the contents of a `settings.json`.
///
/// Editors accept both flat dotted keys and nested sections, so lookup of
/// `a.b.c` matches `{"a.b.c": v}`, `{"a": {"b.c": v}}`, `{"a.b": {"c": v}}`
/// and `{"a": {"b": {"c": v}}}`. The flat key wins when several match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// Create an empty settings document.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(values) => Some(Self { values }),
            _ => None,
        }
    }

    /// Store `value` under the flat key `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder form of [`Settings::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl ConfigurationStore for Settings {
    fn get(&self, key: &str) -> Option<&Value> {
        lookup(&self.values, key)
    }
}

impl ConfigurationStore for HashMap<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        HashMap::get(self, key).filter(|value| !value.is_null())
    }
}

impl<T: ConfigurationStore + ?Sized> ConfigurationStore for &T {
    fn get(&self, key: &str) -> Option<&Value> {
        (**self).get(key)
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(key).filter(|value| !value.is_null()) {
        return Some(value);
    }

    // Longest section prefix first.
    for (idx, _) in key.rmatch_indices('.') {
        let (section, rest) = (&key[..idx], &key[idx + 1..]);
        if let Some(Value::Object(inner)) = map.get(section) {
            if let Some(value) = lookup(inner, rest) {
                return Some(value);
            }
        }
    }

    None
}
