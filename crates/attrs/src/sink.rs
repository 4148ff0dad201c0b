//! The attribute sink capability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AttrError;

/// Something that stores named string attributes.
///
/// `attribute` is only used to read back an existing value before
/// appending to it (the `history` attribute).
pub trait AttributeSink {
    /// Stores `value` under `name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Implementations return [`AttrError`] if the value cannot be stored.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttrError>;

    /// Returns the current value of `name`, if set.
    fn attribute(&self, name: &str) -> Option<String>;
}

impl<S: AttributeSink + ?Sized> AttributeSink for &mut S {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttrError> {
        (**self).set_attribute(name, value)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }
}

/// In-memory, name-ordered attribute set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<String, String>);

impl AttributeMap {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `name` without cloning.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl AttributeSink for AttributeMap {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttrError> {
        if name.is_empty() {
            return Err(AttrError::EmptyName);
        }
        self.0.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
