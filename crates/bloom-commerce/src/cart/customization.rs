//! Line item customization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-chosen options attached to a cart entry (color, gift message,
/// delivery date).
///
/// Backed by an ordered map, so two customizations compare equal exactly when
/// their canonical representations match, regardless of the order options
/// were chosen in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customization(BTreeMap<String, String>);

impl Customization {
    /// Create an empty customization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Set an option.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get an option value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Check if no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of options set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the options in canonical (key) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The canonical serialized representation used for merge comparisons.
    ///
    /// Key order is fixed by the underlying map, so equal customizations
    /// always produce identical strings.
    pub fn canonical(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}
