use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;
use crate::storage::storage_traits::DocumentStoreTrait;

/// In-memory document store, used by tests and by callers that want a
/// throwaway workspace.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStoreTrait for MemoryDocumentStore {
    fn get_document(&self, key: &str) -> Result<Option<Value>> {
        let documents = self.documents.read().unwrap();
        Ok(documents.get(key).cloned())
    }

    async fn put_document(&self, key: &str, value: &Value) -> Result<()> {
        let mut documents = self.documents.write().unwrap();
        documents.insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn delete_document(&self, key: &str) -> Result<()> {
        let mut documents = self.documents.write().unwrap();
        documents.remove(key);
        Ok(())
    }
}
