use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::error::BrieflyResult;

/// A logical document: top-level field name to JSON value.
pub type Document = Map<String, Value>;

/// Per-user document storage with field-merge writes.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads one document. A missing document is `Ok(None)`, never an error.
    async fn get(&self, collection: &str, id: &str) -> BrieflyResult<Option<Document>>;

    /// Writes only the given fields; fields absent from `fields` are preserved.
    async fn merge(&self, collection: &str, id: &str, fields: Document) -> BrieflyResult<()>;

    fn name(&self) -> &'static str;
}

/// Process-local store, used for tests and when no remote store is configured.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<(String, String), Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> BrieflyResult<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(&(collection.to_string(), id.to_string()))
            .cloned())
    }

    async fn merge(&self, collection: &str, id: &str, fields: Document) -> BrieflyResult<()> {
        let mut documents = self.documents.write().await;
        documents
            .entry((collection.to_string(), id.to_string()))
            .or_default()
            .extend(fields);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test documents are objects"),
        }
    }

    #[tokio::test]
    async fn missing_document_is_none() {
        let store = InMemoryDocumentStore::new();
        assert!(store.get("userPrefs", "u_1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn merge_keeps_sibling_fields() {
        let store = InMemoryDocumentStore::new();
        store
            .merge("userPrefs", "u_1", doc(json!({ "presets": [] })))
            .await
            .unwrap();
        store
            .merge("userPrefs", "u_1", doc(json!({ "pinnedSources": ["bbc.com"] })))
            .await
            .unwrap();

        let stored = store.get("userPrefs", "u_1").await.unwrap().unwrap();
        assert_eq!(stored.get("presets"), Some(&json!([])));
        assert_eq!(stored.get("pinnedSources"), Some(&json!(["bbc.com"])));
    }
}
