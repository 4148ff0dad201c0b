//! Global plus per-variable attribute document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sink::AttributeMap;

/// Attributes of one output file: dataset-level and per-variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDocument {
    /// Dataset-level attributes.
    #[serde(default)]
    pub global: AttributeMap,
    /// Attributes keyed by variable name.
    #[serde(default)]
    pub variables: BTreeMap<String, AttributeMap>,
}

impl AttributeDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attributes of `name`, creating an empty set if needed.
    pub fn variable_mut(&mut self, name: &str) -> &mut AttributeMap {
        self.variables.entry(name.to_string()).or_default()
    }

    /// Returns the attributes of `name`, if any were written.
    pub fn variable(&self, name: &str) -> Option<&AttributeMap> {
        self.variables.get(name)
    }
}
