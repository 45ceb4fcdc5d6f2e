//! Search result records.

use super::Identifier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A candidate record returned by the search provider.
///
/// The widget only looks at `identifier` and `display_name`. Everything else
/// the provider sends (sector, exchange, price, ...) is kept in `metadata`
/// for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(alias = "ticker")]
    pub identifier: Identifier,
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl SearchResult {
    pub fn new(identifier: Identifier, display_name: impl Into<String>) -> Self {
        Self {
            identifier,
            display_name: display_name.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Canonical text written back into the input after selection.
    pub fn label(&self) -> String {
        format!("{} - {}", self.identifier, self.display_name)
    }
}
